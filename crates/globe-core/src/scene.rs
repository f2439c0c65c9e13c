//! Scene state: the single owner of everything the render loop reads.
//!
//! Event handlers write through the pointer methods; the driver calls
//! [`SceneState::frame`] once per displayed frame. Both run on one
//! cooperative thread, so there is no locking — just single-writer
//! discipline over this struct.

use rand::Rng;

use crate::connection::{sample_connections, Connection};
use crate::constants::*;
use crate::geo::{Destination, GeoFeed, GeoPoint};
use crate::marker::{destination_marker, hub_marker, Marker};
use crate::spring::{Spring, SpringConfig};

/// Everything the renderer surface needs for one frame. The driver mutates
/// this in place each frame and hands it to the surface.
#[derive(Clone, Debug, Default)]
pub struct FrameState {
    pub phi: f32,
    pub theta: f32,
    pub width: u32,
    pub height: u32,
    pub markers: Vec<Marker>,
}

/// Which kind of pointer is driving a drag; selects the sensitivity divisor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

impl PointerSource {
    fn divisor(self) -> f32 {
        match self {
            PointerSource::Mouse => DRAG_DIVISOR_MOUSE,
            PointerSource::Touch => DRAG_DIVISOR_TOUCH,
        }
    }
}

/// Transient drag bookkeeping; exists only while a pointer is down.
#[derive(Clone, Copy, Debug)]
struct InteractionSession {
    origin_client_x: f32,
    last_delta: f32,
}

pub struct SceneState {
    hub: GeoPoint,
    destinations: Vec<Destination>,
    connections: Vec<Connection>,
    spring: Spring,
    auto_phi: f32,
    theta: f32,
    session: Option<InteractionSession>,
    // Accumulated drag movement, carried across sessions so a new drag
    // continues from the current offset instead of snapping to zero.
    movement_px: f32,
}

impl SceneState {
    /// Build the scene from a validated feed. Connection selection and marker
    /// phase derivation happen here, once; a data change means tearing the
    /// whole engine down and constructing a fresh scene.
    pub fn new<R: Rng>(feed: &GeoFeed, rng: &mut R) -> Self {
        let hub = GeoPoint::new(HUB_LAT, HUB_LNG);
        let destinations = feed.destinations();
        let connections = sample_connections(hub, &destinations, CONNECTION_CAP, rng);
        log::info!(
            "[scene] {} destinations, {} connections",
            destinations.len(),
            connections.len()
        );
        Self {
            hub,
            destinations,
            connections,
            spring: Spring::new(SpringConfig::default()),
            auto_phi: 0.0,
            theta: TILT_THETA,
            session: None,
            movement_px: 0.0,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Total rotation currently presented: autorotation plus the
    /// spring-settled interaction offset.
    pub fn rotation(&self) -> f32 {
        self.auto_phi + self.spring.value()
    }

    pub fn pointer_down(&mut self, client_x: f32) {
        self.session = Some(InteractionSession {
            origin_client_x: client_x - self.movement_px,
            last_delta: self.movement_px,
        });
    }

    pub fn pointer_move(&mut self, client_x: f32, source: PointerSource) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let delta = client_x - session.origin_client_x;
        session.last_delta = delta;
        self.movement_px = delta;
        self.spring.set_target(delta / source.divisor());
    }

    /// Idle again; the spring keeps settling toward its last target, so the
    /// rotation does not snap back.
    pub fn pointer_up(&mut self) {
        self.session = None;
    }

    /// Advance one frame and fill `out` (phi, theta, markers). `out.width`
    /// and `out.height` belong to the driver and are left untouched, which is
    /// what keeps resize from disturbing animation state.
    pub fn frame(&mut self, now_ms: f64, dt_sec: f32, out: &mut FrameState) {
        if self.session.is_none() {
            self.auto_phi += AUTO_ROTATE_STEP;
        }
        self.spring.step(dt_sec.min(DT_CLAMP_MAX_SEC));

        out.markers.clear();
        out.markers.push(hub_marker(self.hub, now_ms));
        for dest in &self.destinations {
            out.markers.push(destination_marker(dest, now_ms));
        }
        for conn in &mut self.connections {
            conn.advance();
        }
        for conn in &self.connections {
            out.markers.extend(conn.markers());
        }

        out.phi = self.rotation();
        out.theta = self.theta;
    }
}
