//! Output boundary consumed by a map renderer.
//!
//! The renderer itself is external. This module only shapes the colored
//! table into points and an initial viewport.

pub mod view;
pub mod viewport;

pub use view::{MapPoint, MapView, DEFAULT_POINT_RADIUS, MAX_POINT_RADIUS, MIN_POINT_RADIUS};
pub use viewport::{initial_viewport, Viewport};
