//! Idealized quadrilateral wing-box cross-sections.

use serde::{Deserialize, Serialize};

use crate::errors::GeometryError;
use crate::geometry::{quadrilateral_centroid, signed_area, Point};

/// Index of the front-top corner.
const FRONT_TOP: usize = 0;
/// Index of the front-bottom corner.
const FRONT_BOTTOM: usize = 1;
/// Index of the rear-bottom corner.
const REAR_BOTTOM: usize = 2;
/// Index of the rear-top corner.
const REAR_TOP: usize = 3;

/// Vertical extents of the two spars in metres.
///
/// Spar lengths are fixed for the whole wing; only their chordwise position scales with
/// the local chord.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SparSpec {
    /// Length of the front spar.
    pub front_length: f64,
    /// Length of the rear spar.
    pub rear_length: f64,
}

impl SparSpec {
    /// Create a [`SparSpec`] from the two spar lengths.
    #[must_use]
    pub const fn new(front_length: f64, rear_length: f64) -> Self {
        Self {
            front_length,
            rear_length,
        }
    }
}

impl Default for SparSpec {
    fn default() -> Self {
        Self::new(0.11, 0.09)
    }
}

/// Straight wall of the wing box between two corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Corner the segment starts from.
    pub start: Point,
    /// Corner the segment ends at.
    pub end: Point,
}

impl Segment {
    /// Mid-point of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// Absolute vertical rise between the endpoints.
    #[must_use]
    pub fn rise(&self) -> f64 {
        (self.end.y - self.start.y).abs()
    }
}

/// Load-bearing quadrilateral of a wing box at one span station.
///
/// Corners are stored front-top, front-bottom, rear-bottom, rear-top, which is
/// counter-clockwise with `x` pointing aft and `y` pointing up. The top skin joins the
/// front-top and rear-top corners, the bottom skin the front-bottom and rear-bottom
/// corners.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[Point; 4]", into = "[Point; 4]")]
pub struct CrossSection {
    /// Corners in front-top, front-bottom, rear-bottom, rear-top order.
    corners: [Point; 4],
}

impl CrossSection {
    /// Build a cross-section after validating the corner ordering.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] for NaN or infinite coordinates,
    /// [`GeometryError::ZeroWidth`] when the spars share a chordwise position,
    /// [`GeometryError::Misordered`] when the corners do not follow the documented
    /// order and [`GeometryError::DegenerateArea`] when they enclose no area.
    ///
    /// # Examples
    /// ```
    /// use wingbox::{point, CrossSection, GeometryError};
    ///
    /// let section = CrossSection::new([
    ///     point(0.2, 0.05),
    ///     point(0.2, -0.05),
    ///     point(0.6, -0.04),
    ///     point(0.6, 0.04),
    /// ])
    /// .expect("valid wing box");
    /// assert!((section.width() - 0.4).abs() < 1e-12);
    ///
    /// let collapsed = CrossSection::new([
    ///     point(0.3, 0.05),
    ///     point(0.3, -0.05),
    ///     point(0.3, -0.04),
    ///     point(0.3, 0.04),
    /// ]);
    /// assert!(matches!(collapsed, Err(GeometryError::ZeroWidth { .. })));
    /// ```
    pub fn new(corners: [Point; 4]) -> Result<Self, GeometryError> {
        for corner in &corners {
            if !corner.is_finite() {
                let value = if corner.x.is_finite() { corner.y } else { corner.x };
                return Err(GeometryError::NonFinite {
                    quantity: "corner coordinate",
                    value,
                });
            }
        }
        let section = Self { corners };

        let front = section.front_spar().midpoint().x;
        let rear = section.rear_spar().midpoint().x;
        let top = section.top_skin();
        let bottom = section.bottom_skin();
        let extent = (top.end.x - top.start.x)
            .abs()
            .max((bottom.end.x - bottom.start.x).abs());
        if extent <= f64::EPSILON * front.abs().max(rear.abs()).max(1.0) {
            return Err(GeometryError::ZeroWidth { front, rear });
        }
        if top.end.x <= top.start.x || bottom.end.x <= bottom.start.x {
            return Err(GeometryError::Misordered(
                "rear spar must lie aft of the front spar on both skins",
            ));
        }
        if corners[FRONT_TOP].y <= corners[FRONT_BOTTOM].y
            || corners[REAR_TOP].y <= corners[REAR_BOTTOM].y
        {
            return Err(GeometryError::Misordered(
                "top corners must lie above bottom corners",
            ));
        }
        let area = signed_area(&corners);
        if area <= 0.0 {
            return Err(GeometryError::DegenerateArea(area));
        }
        Ok(section)
    }

    /// Corners in front-top, front-bottom, rear-bottom, rear-top order.
    #[must_use]
    pub fn corners(&self) -> &[Point; 4] {
        &self.corners
    }

    /// Top skin, running from the front-top to the rear-top corner.
    #[must_use]
    pub fn top_skin(&self) -> Segment {
        Segment {
            start: self.corners[FRONT_TOP],
            end: self.corners[REAR_TOP],
        }
    }

    /// Bottom skin, running from the front-bottom to the rear-bottom corner.
    #[must_use]
    pub fn bottom_skin(&self) -> Segment {
        Segment {
            start: self.corners[FRONT_BOTTOM],
            end: self.corners[REAR_BOTTOM],
        }
    }

    /// Front spar, running from the front-top to the front-bottom corner.
    #[must_use]
    pub fn front_spar(&self) -> Segment {
        Segment {
            start: self.corners[FRONT_TOP],
            end: self.corners[FRONT_BOTTOM],
        }
    }

    /// Rear spar, running from the rear-bottom to the rear-top corner.
    #[must_use]
    pub fn rear_spar(&self) -> Segment {
        Segment {
            start: self.corners[REAR_BOTTOM],
            end: self.corners[REAR_TOP],
        }
    }

    /// Chordwise distance between the mid-points of the two spars.
    ///
    /// For vertical spars this is the perpendicular distance between them. Always
    /// positive for a validated section.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.rear_spar().midpoint().x - self.front_spar().midpoint().x
    }

    /// Area centroid of the enclosed quadrilateral.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateArea`] when the section encloses no area.
    pub fn centroid(&self) -> Result<Point, GeometryError> {
        quadrilateral_centroid(&self.corners)
    }

    /// Enclosed area in square metres.
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area(&self.corners)
    }

    /// Return the section scaled uniformly about the origin.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] when the scaled section is degenerate.
    pub fn scaled(&self, factor: f64) -> Result<Self, GeometryError> {
        Self::new(self.corners.map(|corner| corner.scaled(factor)))
    }
}

impl TryFrom<[Point; 4]> for CrossSection {
    type Error = GeometryError;

    fn try_from(corners: [Point; 4]) -> Result<Self, Self::Error> {
        Self::new(corners)
    }
}

impl From<CrossSection> for [Point; 4] {
    fn from(section: CrossSection) -> Self {
        section.corners
    }
}

/// Scale a unit (chord = 1) wing-box section to the local chord of a span station.
///
/// # Errors
///
/// Returns [`GeometryError::NonPositiveChord`] when `chord` is not a positive finite
/// number and any error from [`CrossSection::new`] for the scaled corners.
///
/// # Examples
/// ```
/// use wingbox::{build_section, point, CrossSection};
///
/// let unit = CrossSection::new([
///     point(0.2, 0.05),
///     point(0.2, -0.05),
///     point(0.6, -0.04),
///     point(0.6, 0.04),
/// ])
/// .expect("valid unit section");
/// let scaled = build_section(&unit, 2.5).expect("positive chord");
/// assert!((scaled.width() - 1.0).abs() < 1e-12);
/// ```
pub fn build_section(unit_shape: &CrossSection, chord: f64) -> Result<CrossSection, GeometryError> {
    if !chord.is_finite() {
        return Err(GeometryError::NonFinite {
            quantity: "chord",
            value: chord,
        });
    }
    if chord <= 0.0 {
        return Err(GeometryError::NonPositiveChord(chord));
    }
    unit_shape.scaled(chord)
}
