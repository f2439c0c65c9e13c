//! Platform-neutral simulation core for the orbital globe.
//!
//! The web frontend owns the canvas, the event wiring, and the surface that
//! paints; everything that can be advanced and asserted on the host lives
//! here: feed parsing, the marker model, the connection animator, the
//! interaction spring, and the per-frame scene state.

pub mod connection;
pub mod constants;
pub mod geo;
pub mod marker;
pub mod scene;
pub mod spring;

pub use connection::*;
pub use geo::*;
pub use marker::*;
pub use scene::*;
pub use spring::*;
