//! Marker model: turns static geo points into the per-frame drawable list.
//!
//! Displayed sizes are pure functions of wall-clock time and the marker's own
//! static data, so no per-marker animation state is retained between frames.

use crate::constants::*;
use crate::geo::{Destination, GeoPoint};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    Hub,
    Talent,
    Team,
    Agency,
    ConnectionHead,
    ConnectionTrail,
}

/// A drawable point on the sphere. Ephemeral; rebuilt every frame.
#[derive(Clone, Copy, Debug)]
pub struct Marker {
    pub location: GeoPoint,
    pub size: f32,
    pub color: [f32; 3],
    pub kind: MarkerKind,
}

/// Deterministic per-marker phase offset so markers do not pulse in lockstep.
#[inline]
pub fn pulse_phase(lng: f32) -> f32 {
    lng * PULSE_PHASE_PER_DEG_LNG
}

/// Destination pulse: `base * (0.8 + 0.4 * sin(t/200 + phase))`.
#[inline]
pub fn destination_pulse(base_size: f32, now_ms: f64, lng: f32) -> f32 {
    let t = (now_ms / DEST_PULSE_DIVISOR_MS) as f32 + pulse_phase(lng);
    base_size * (DEST_PULSE_BASE + DEST_PULSE_SPAN * t.sin())
}

/// Hub pulse: slower and wider, the heartbeat origin.
#[inline]
pub fn hub_pulse(base_size: f32, now_ms: f64) -> f32 {
    let t = (now_ms / HUB_PULSE_DIVISOR_MS) as f32;
    base_size * (1.0 + HUB_PULSE_SPAN * t.sin())
}

pub fn hub_marker(hub: GeoPoint, now_ms: f64) -> Marker {
    Marker {
        location: hub,
        size: hub_pulse(HUB_BASE_SIZE, now_ms),
        color: HUB_COLOR,
        kind: MarkerKind::Hub,
    }
}

pub fn destination_marker(dest: &Destination, now_ms: f64) -> Marker {
    Marker {
        location: dest.location,
        size: destination_pulse(DEST_BASE_SIZE, now_ms, dest.location.lng),
        color: dest.kind.color(),
        kind: match dest.kind {
            crate::geo::DestinationKind::Talent => MarkerKind::Talent,
            crate::geo::DestinationKind::Team => MarkerKind::Team,
            crate::geo::DestinationKind::Agency => MarkerKind::Agency,
        },
    }
}
