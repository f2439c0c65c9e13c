//! Connection animator: a bounded set of arcs from the hub to sampled
//! destinations, each a moving head with a fading comet trail.

use rand::seq::index;
use rand::Rng;
use smallvec::SmallVec;

use crate::constants::*;
use crate::geo::{Destination, GeoPoint};
use crate::marker::{Marker, MarkerKind};

/// One animated hub→destination arc.
///
/// `progress` runs a full cycle in roughly 125–330 frames given the speed
/// range, then wraps — a round-trip shooting star, not geodesic travel.
#[derive(Clone, Copy, Debug)]
pub struct Connection {
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub progress: f32,
    pub speed: f32,
}

impl Connection {
    pub fn advance(&mut self) {
        self.progress += self.speed;
        if self.progress >= 1.0 {
            self.progress = 0.0;
        }
    }

    /// Independent linear interpolation of latitude and longitude.
    fn point_at(&self, t: f32) -> GeoPoint {
        GeoPoint {
            lat: self.start.lat + (self.end.lat - self.start.lat) * t,
            lng: self.start.lng + (self.end.lng - self.start.lng) * t,
        }
    }

    pub fn head(&self) -> GeoPoint {
        self.point_at(self.progress)
    }

    /// Head marker plus up to `CONNECTION_TRAIL_COUNT` trail ghosts; a ghost
    /// whose virtual progress would be negative is omitted.
    pub fn markers(&self) -> SmallVec<[Marker; 4]> {
        let mut out = SmallVec::new();
        out.push(Marker {
            location: self.head(),
            size: CONNECTION_HEAD_SIZE,
            color: CONNECTION_COLOR,
            kind: MarkerKind::ConnectionHead,
        });
        for i in 1..=CONNECTION_TRAIL_COUNT {
            let t = self.progress - i as f32 * CONNECTION_TRAIL_STEP;
            if t < 0.0 {
                break;
            }
            out.push(Marker {
                location: self.point_at(t),
                size: CONNECTION_TRAIL_BASE_SIZE * (1.0 - i as f32 / 4.0),
                color: CONNECTION_COLOR,
                kind: MarkerKind::ConnectionTrail,
            });
        }
        out
    }
}

/// Sample `min(cap, destinations.len())` arcs without replacement, each with
/// a staggered start and an independent speed. Run once per data-set change.
pub fn sample_connections<R: Rng>(
    hub: GeoPoint,
    destinations: &[Destination],
    cap: usize,
    rng: &mut R,
) -> Vec<Connection> {
    let count = destinations.len().min(cap);
    if count == 0 {
        return Vec::new();
    }
    index::sample(rng, destinations.len(), count)
        .into_iter()
        .map(|i| Connection {
            start: hub,
            end: destinations[i].location,
            progress: rng.gen_range(0.0..1.0),
            speed: rng.gen_range(CONNECTION_SPEED_MIN..CONNECTION_SPEED_MAX),
        })
        .collect()
}
