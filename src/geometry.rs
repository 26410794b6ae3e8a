//! Planar geometric primitives for wing-box cross-sections.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::errors::GeometryError;

/// Position in the plane of a wing cross-section measured in metres.
///
/// `x` runs chordwise towards the trailing edge and `y` points upwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Chordwise coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a [`Point`] with explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert the point into an algebraic vector.
    #[must_use]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Return the point scaled uniformly about the origin.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Return the point halfway between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Point) -> Self {
        Self::from((self.to_vector() + other.to_vector()) * 0.5)
    }

    /// Whether both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Vector2<f64>> for Point {
    fn from(value: Vector2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Point> for Vector2<f64> {
    fn from(value: Point) -> Self {
        value.to_vector()
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

/// Convenience helper for creating [`Point`] instances.
///
/// # Examples
/// ```
/// use wingbox::point;
///
/// let corner = point(0.2, 0.06);
/// assert_eq!(corner.y, 0.06);
/// ```
#[must_use]
pub const fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Signed area of a closed polygon, positive for counter-clockwise ordering.
#[must_use]
pub fn signed_area(corners: &[Point]) -> f64 {
    let n = corners.len();
    0.5 * (0..n)
        .map(|i| corners[i].to_vector().perp(&corners[(i + 1) % n].to_vector()))
        .sum::<f64>()
}

/// Area centroid of a quadrilateral.
///
/// Uses the shoelace decomposition, so the corners may be ordered either clockwise or
/// counter-clockwise but must not self-intersect.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateArea`] when the corners enclose no area.
///
/// # Examples
/// ```
/// use wingbox::{point, quadrilateral_centroid};
///
/// let square = [point(0.0, 1.0), point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0)];
/// let centroid = quadrilateral_centroid(&square).expect("square has area");
/// assert!((centroid.x - 0.5).abs() < 1e-12);
/// assert!((centroid.y - 0.5).abs() < 1e-12);
/// ```
pub fn quadrilateral_centroid(corners: &[Point; 4]) -> Result<Point, GeometryError> {
    let area = signed_area(corners);
    if !area.is_finite() || area.abs() <= f64::EPSILON * scale_of(corners).powi(2) {
        return Err(GeometryError::DegenerateArea(area));
    }
    let mut weighted = Vector2::<f64>::zeros();
    for i in 0..4 {
        let a = corners[i].to_vector();
        let b = corners[(i + 1) % 4].to_vector();
        weighted += (a + b) * a.perp(&b);
    }
    Ok(Point::from(weighted / (6.0 * area)))
}

/// Vertical coordinate of the line through `start` and `end` at chordwise position `x`.
///
/// The line is extended beyond its endpoints, so the returned point always satisfies the
/// line equation. `start.x` and `end.x` must differ.
#[must_use]
pub(crate) fn line_height_at(start: Point, end: Point, x: f64) -> f64 {
    let slope = (end.y - start.y) / (end.x - start.x);
    start.y + slope * (x - start.x)
}

/// Largest absolute coordinate, used to scale degeneracy tolerances.
fn scale_of(corners: &[Point]) -> f64 {
    corners
        .iter()
        .flat_map(|p| [p.x.abs(), p.y.abs()])
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn point_to_vector_roundtrip() {
        let corner = Point::new(1.0, 2.0);
        let vector: Vector2<f64> = corner.into();
        assert_eq!(vector, Vector2::new(1.0, 2.0));
        assert_eq!(Point::from(vector), corner);
    }

    #[test]
    fn centroid_of_trapezoid() {
        // Right trapezoid with parallel vertical sides of height 2 and 1, width 3.
        let corners = [
            point(0.0, 2.0),
            point(0.0, 0.0),
            point(3.0, 0.0),
            point(3.0, 1.0),
        ];
        let centroid = quadrilateral_centroid(&corners).expect("trapezoid has area");
        // x̄ = w (a + 2b) / (3 (a + b)), ȳ = (a² + ab + b²) / (3 (a + b)).
        assert_relative_eq!(centroid.x, 3.0 * (2.0 + 2.0) / 9.0, epsilon = 1e-12);
        assert_relative_eq!(centroid.y, (4.0 + 2.0 + 1.0) / 9.0, epsilon = 1e-12);
    }

    #[test]
    fn centroid_is_independent_of_orientation() {
        let ccw = [
            point(0.2, 0.05),
            point(0.2, -0.04),
            point(0.6, -0.03),
            point(0.6, 0.04),
        ];
        let mut cw = ccw;
        cw.reverse();
        let a = quadrilateral_centroid(&ccw).expect("area");
        let b = quadrilateral_centroid(&cw).expect("area");
        assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
    }

    #[test]
    fn collinear_corners_have_no_centroid() {
        let corners = [
            point(0.0, 0.0),
            point(1.0, 0.0),
            point(2.0, 0.0),
            point(3.0, 0.0),
        ];
        assert!(matches!(
            quadrilateral_centroid(&corners),
            Err(GeometryError::DegenerateArea(_))
        ));
    }

    #[test]
    fn line_height_extends_past_endpoints() {
        let start = point(1.0, 1.0);
        let end = point(3.0, 2.0);
        assert_relative_eq!(line_height_at(start, end, 2.0), 1.5);
        assert_relative_eq!(line_height_at(start, end, 5.0), 3.0);
    }
}
