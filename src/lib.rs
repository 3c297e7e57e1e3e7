//! polytrim - Integer polygon simplification as a service
//!
//! Fewer vertices, same shape. This library simplifies integer-coordinate
//! polygons and polylines with an importance-ranked vertex-removal engine,
//! and wraps it in a small line-oriented TCP service.

pub mod error;
pub mod polygon;
pub mod primitives;
pub mod service;
pub mod simplify;

pub use error::TrimError;
pub use polygon::{simplify_batch, PolygonWithHoles};
pub use primitives::{cross, distance_to_line, line_intersection, round_div, Point};
pub use simplify::{Simplifier, MIN_RESOLUTION};
