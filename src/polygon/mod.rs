//! Polygon-with-holes containers and batch simplification.
//!
//! A batch is an ordered sequence of polygons, each an outer boundary ring
//! plus zero or more hole rings. Rings are simplified independently with
//! the same tolerances; no nesting relationship between outline and holes
//! is modeled or validated.
//!
//! # Example
//!
//! ```
//! use polytrim::{simplify_batch, Point, PolygonWithHoles, Simplifier};
//!
//! let simplifier = Simplifier::new(100, 1, 0);
//! let square = PolygonWithHoles::new(vec![
//!     Point::new(0, 0),
//!     Point::new(5, 0), // colinear, removed
//!     Point::new(10, 0),
//!     Point::new(10, 10),
//!     Point::new(0, 10),
//! ]);
//!
//! let simplified = simplify_batch(&simplifier, &[square]);
//! assert_eq!(simplified[0].outline.len(), 4);
//! ```

use crate::primitives::Point;
use crate::simplify::Simplifier;
use serde::{Deserialize, Serialize};

/// A polygon boundary with zero or more holes.
///
/// All rings are closed: the last vertex implicitly connects to the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolygonWithHoles {
    /// The outer boundary ring.
    pub outline: Vec<Point>,
    /// Inner boundary rings.
    #[serde(default)]
    pub holes: Vec<Vec<Point>>,
}

impl PolygonWithHoles {
    /// Creates a polygon without holes.
    #[inline]
    pub fn new(outline: Vec<Point>) -> Self {
        Self {
            outline,
            holes: Vec::new(),
        }
    }

    /// Creates a polygon with holes.
    #[inline]
    pub fn with_holes(outline: Vec<Point>, holes: Vec<Vec<Point>>) -> Self {
        Self { outline, holes }
    }
}

/// Simplifies every ring of every polygon in a batch.
///
/// The output has one polygon per input polygon and one ring per input
/// ring, in the same order. Rings that simplify to nothing are kept as
/// empty rings so positional correspondence with the input is preserved.
pub fn simplify_batch(
    simplifier: &Simplifier,
    polygons: &[PolygonWithHoles],
) -> Vec<PolygonWithHoles> {
    polygons
        .iter()
        .map(|polygon| PolygonWithHoles {
            outline: simplifier.simplify_polygon(&polygon.outline),
            holes: polygon
                .holes
                .iter()
                .map(|hole| simplifier.simplify_polygon(hole))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(i64, i64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_batch_preserves_structure() {
        let simplifier = Simplifier::new(100, 1, 0);
        let first = PolygonWithHoles::with_holes(
            points(&[(0, 0), (50, 0), (100, 0), (100, 100), (0, 100)]),
            vec![
                points(&[(20, 20), (40, 20), (40, 40), (20, 40)]),
                points(&[(60, 60), (80, 60), (80, 80)]),
            ],
        );
        let second = PolygonWithHoles::new(points(&[(200, 200), (300, 200), (300, 300)]));

        let result = simplify_batch(&simplifier, &[first.clone(), second.clone()]);

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].holes.len(), 2);
        // The outline loses its colinear midpoint; the holes are already
        // minimal and survive unchanged.
        assert_eq!(result[0].outline.len(), 4);
        assert_eq!(result[0].holes[0], first.holes[0]);
        assert_eq!(result[0].holes[1], first.holes[1]);
        assert_eq!(result[1], second);
    }

    #[test]
    fn test_degenerate_rings_stay_as_empty_rings() {
        let simplifier = Simplifier::new(0, 0, 0);
        let polygon = PolygonWithHoles::with_holes(
            points(&[(0, 0), (10, 0)]),
            vec![points(&[(1, 1)]), points(&[(2, 2), (3, 3), (4, 2)])],
        );

        let result = simplify_batch(&simplifier, &[polygon]);

        assert_eq!(result.len(), 1);
        assert!(result[0].outline.is_empty());
        assert_eq!(result[0].holes.len(), 2);
        assert!(result[0].holes[0].is_empty());
        assert_eq!(result[0].holes[1], points(&[(2, 2), (3, 3), (4, 2)]));
    }

    #[test]
    fn test_empty_batch() {
        let simplifier = Simplifier::new(10, 10, 0);
        assert!(simplify_batch(&simplifier, &[]).is_empty());
    }
}
