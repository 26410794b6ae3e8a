//! Second moments of area and torsion constant of a thin-walled wing-box section.
//!
//! The section is idealized as four thin strips of uniform thickness (top skin, front
//! spar, bottom skin, rear spar) plus stringers treated as point areas. Each strip adds its
//! own-axis second moment and a parallel-axis term about the area centroid of the
//! enclosing quadrilateral. See
//! <https://en.wikipedia.org/wiki/Second_moment_of_area#Parallel_axis_theorem>.

use serde::{Deserialize, Serialize};

use crate::errors::GeometryError;
use crate::geometry::Point;
use crate::section::{CrossSection, Segment, SparSpec};
use crate::stringers::StringerSet;

/// Bending and torsion properties of one cross-section in m⁴.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Second moment of area about the chordwise (x) axis through the centroid.
    pub i_xx: f64,
    /// Second moment of area about the vertical (y) axis through the centroid.
    pub i_yy: f64,
    /// Torsion constant, see [`torsion_constant`].
    pub j: f64,
}

impl SectionProperties {
    /// Assemble properties from the two bending inertias.
    #[must_use]
    pub fn from_inertias(i_xx: f64, i_yy: f64) -> Self {
        Self {
            i_xx,
            i_yy,
            j: torsion_constant(i_xx, i_yy),
        }
    }

    /// Linear blend between `self` (at `t = 0`) and `other` (at `t = 1`).
    #[must_use]
    pub fn lerp(&self, other: &SectionProperties, t: f64) -> Self {
        let blend = |a: f64, b: f64| a + (b - a) * t;
        Self {
            i_xx: blend(self.i_xx, other.i_xx),
            i_yy: blend(self.i_yy, other.i_yy),
            j: blend(self.j, other.j),
        }
    }
}

/// Bending axis a second moment is taken about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    /// Chordwise axis; offsets are measured vertically.
    X,
    /// Vertical axis; offsets are measured chordwise.
    Y,
}

/// Thin rectangular strip idealizing one wall of the box.
#[derive(Clone, Copy, Debug)]
struct Strip {
    /// Length along the wall.
    length: f64,
    /// Sine of the wall angle to the chord line.
    sin: f64,
    /// Cosine of the wall angle to the chord line.
    cos: f64,
    /// Mid-point of the wall.
    midpoint: Point,
}

impl Strip {
    /// Slanted skin spanning `width` chordwise.
    fn skin(segment: Segment, width: f64) -> Self {
        let rise = segment.rise();
        let length = width.hypot(rise);
        Self {
            length,
            sin: rise / length,
            cos: width / length,
            midpoint: segment.midpoint(),
        }
    }

    /// Vertical spar of fixed length.
    fn spar(segment: Segment, length: f64) -> Self {
        Self {
            length,
            sin: 1.0,
            cos: 0.0,
            midpoint: segment.midpoint(),
        }
    }

    /// Own-axis term plus parallel-axis term about `centroid`.
    fn second_moment(&self, axis: Axis, thickness: f64, centroid: Point) -> f64 {
        let (trig, offset) = match axis {
            Axis::X => (self.sin, self.midpoint.y - centroid.y),
            Axis::Y => (self.cos, self.midpoint.x - centroid.x),
        };
        let area = thickness * self.length;
        area * self.length.powi(2) * trig.powi(2) / 12.0 + area * offset.powi(2)
    }
}

/// Torsion constant of the idealized section.
///
/// This is the polar moment `I_xx + I_yy`. It is a simplification: closed thin-walled
/// sections follow Bredt's formula `4 A² / ∮ ds/t`, which depends on the enclosed area
/// rather than the bending inertias.
#[must_use]
pub fn torsion_constant(i_xx: f64, i_yy: f64) -> f64 {
    i_xx + i_yy
}

/// Second moment of area about the chordwise axis through the section centroid.
///
/// `width` is the spar-to-spar distance of `section`, normally [`CrossSection::width`].
///
/// # Errors
///
/// Returns [`GeometryError::ZeroWidth`] when `width` is not positive,
/// [`GeometryError::NonPositiveThickness`] for a non-positive skin thickness,
/// [`GeometryError::InvalidStringerArea`] for a negative stringer area,
/// [`GeometryError::NonPositiveSparLength`] for a non-positive spar length and
/// [`GeometryError::DegenerateArea`] when the section has no centroid.
pub fn moment_of_inertia_x(
    section: &CrossSection,
    spars: &SparSpec,
    stringer_area: f64,
    stringers: &StringerSet,
    thickness: f64,
    width: f64,
) -> Result<f64, GeometryError> {
    validate(section, spars, stringer_area, thickness, width)?;
    let centroid = section.centroid()?;
    Ok(second_moment(
        Axis::X,
        section,
        spars,
        stringer_area,
        stringers,
        thickness,
        width,
        centroid,
    ))
}

/// Second moment of area about the vertical axis through the section centroid.
///
/// # Errors
///
/// Same conditions as [`moment_of_inertia_x`].
pub fn moment_of_inertia_y(
    section: &CrossSection,
    spars: &SparSpec,
    stringer_area: f64,
    stringers: &StringerSet,
    thickness: f64,
    width: f64,
) -> Result<f64, GeometryError> {
    validate(section, spars, stringer_area, thickness, width)?;
    let centroid = section.centroid()?;
    Ok(second_moment(
        Axis::Y,
        section,
        spars,
        stringer_area,
        stringers,
        thickness,
        width,
        centroid,
    ))
}

/// Both second moments and the torsion constant, sharing one centroid.
///
/// # Errors
///
/// Same conditions as [`moment_of_inertia_x`].
///
/// # Examples
/// ```
/// use wingbox::{point, section_properties, CrossSection, SparSpec, StringerSet};
///
/// // 1 m wide, 0.2 m deep rectangular box with 2 mm walls.
/// let section = CrossSection::new([
///     point(0.0, 0.1),
///     point(0.0, -0.1),
///     point(1.0, -0.1),
///     point(1.0, 0.1),
/// ])
/// .expect("valid wing box");
/// let spars = SparSpec::new(0.2, 0.2);
/// let properties =
///     section_properties(&section, &spars, 0.0, &StringerSet::empty(), 0.002, section.width())
///         .expect("valid section");
/// let expected_i_xx = 0.002 * 0.2_f64.powi(3) / 6.0 + 0.002 * 1.0 * 0.2_f64.powi(2) / 2.0;
/// assert!((properties.i_xx - expected_i_xx).abs() < 1e-15);
/// assert_eq!(properties.j, properties.i_xx + properties.i_yy);
/// ```
pub fn section_properties(
    section: &CrossSection,
    spars: &SparSpec,
    stringer_area: f64,
    stringers: &StringerSet,
    thickness: f64,
    width: f64,
) -> Result<SectionProperties, GeometryError> {
    validate(section, spars, stringer_area, thickness, width)?;
    let centroid = section.centroid()?;
    let moment = |axis| {
        second_moment(
            axis,
            section,
            spars,
            stringer_area,
            stringers,
            thickness,
            width,
            centroid,
        )
    };
    Ok(SectionProperties::from_inertias(
        moment(Axis::X),
        moment(Axis::Y),
    ))
}

/// Reject inputs that would divide by zero or produce meaningless stiffness.
fn validate(
    section: &CrossSection,
    spars: &SparSpec,
    stringer_area: f64,
    thickness: f64,
    width: f64,
) -> Result<(), GeometryError> {
    let front = section.front_spar().midpoint().x;
    if !width.is_finite() {
        return Err(GeometryError::NonFinite {
            quantity: "width",
            value: width,
        });
    }
    if width <= 0.0 {
        return Err(GeometryError::ZeroWidth {
            front,
            rear: front + width,
        });
    }
    if !thickness.is_finite() || thickness <= 0.0 {
        return Err(GeometryError::NonPositiveThickness(thickness));
    }
    if !stringer_area.is_finite() || stringer_area < 0.0 {
        return Err(GeometryError::InvalidStringerArea(stringer_area));
    }
    for length in [spars.front_length, spars.rear_length] {
        if !length.is_finite() || length <= 0.0 {
            return Err(GeometryError::NonPositiveSparLength(length));
        }
    }
    Ok(())
}

/// Compose the four walls and the stringers about `centroid`.
#[allow(clippy::too_many_arguments)]
fn second_moment(
    axis: Axis,
    section: &CrossSection,
    spars: &SparSpec,
    stringer_area: f64,
    stringers: &StringerSet,
    thickness: f64,
    width: f64,
    centroid: Point,
) -> f64 {
    let walls = [
        Strip::skin(section.top_skin(), width),
        Strip::spar(section.front_spar(), spars.front_length),
        Strip::skin(section.bottom_skin(), width),
        Strip::spar(section.rear_spar(), spars.rear_length),
    ];
    let skin: f64 = walls
        .iter()
        .map(|wall| wall.second_moment(axis, thickness, centroid))
        .sum();
    let stringer: f64 = stringers
        .positions()
        .iter()
        .map(|p| {
            let offset = match axis {
                Axis::X => p.y - centroid.y,
                Axis::Y => p.x - centroid.x,
            };
            stringer_area * offset.powi(2)
        })
        .sum();
    skin + stringer
}
