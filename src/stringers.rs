//! Placement of longitudinal stringers along the wing-box skins.

use serde::Serialize;

use crate::errors::LayoutError;
use crate::geometry::{line_height_at, Point};
use crate::section::{CrossSection, Segment};

/// Stringer positions of one cross-section.
///
/// Top-skin stringers come first, ordered from the front spar aft, followed by the
/// bottom-skin stringers in the same order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StringerSet {
    /// All stringer positions in metres.
    positions: Vec<Point>,
    /// Number of leading entries in `positions` attached to the top skin.
    top_count: usize,
}

impl StringerSet {
    /// A layout without stringers.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// All stringer positions, top skin first.
    #[must_use]
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Stringers attached to the top skin.
    #[must_use]
    pub fn top(&self) -> &[Point] {
        &self.positions[..self.top_count]
    }

    /// Stringers attached to the bottom skin.
    #[must_use]
    pub fn bottom(&self) -> &[Point] {
        &self.positions[self.top_count..]
    }

    /// Total number of stringers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the layout has no stringers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Place `n` stringers on the skins of `section`.
///
/// `⌊n/2⌋` stringers go on the top skin and the remainder on the bottom skin, so an odd
/// count puts the extra stringer at the bottom. On each skin the stringers are spread at a
/// uniform pitch of `width · spacing_coeff / count`, starting `width · (1 − spacing_coeff)`
/// aft of the front spar, and their height is read off the straight skin line.
///
/// # Errors
///
/// Returns [`LayoutError::SpacingCoefficient`] when `spacing_coeff` is not in `(0, 1]`.
///
/// # Examples
/// ```
/// use wingbox::{place_stringers, point, CrossSection};
///
/// let section = CrossSection::new([
///     point(0.0, 0.5),
///     point(0.0, -0.5),
///     point(2.0, -0.5),
///     point(2.0, 0.5),
/// ])
/// .expect("valid wing box");
/// let stringers = place_stringers(&section, 5, 1.0).expect("valid layout");
/// assert_eq!(stringers.top().len(), 2);
/// assert_eq!(stringers.bottom().len(), 3);
/// assert_eq!(stringers.top()[1].x, 1.0);
/// ```
pub fn place_stringers(
    section: &CrossSection,
    n: usize,
    spacing_coeff: f64,
) -> Result<StringerSet, LayoutError> {
    if !(spacing_coeff > 0.0 && spacing_coeff <= 1.0) {
        return Err(LayoutError::SpacingCoefficient(spacing_coeff));
    }
    let width = section.width();
    let top_count = n / 2;
    let bottom_count = n - top_count;

    let mut positions = Vec::with_capacity(n);
    positions.extend(skin_positions(section.top_skin(), top_count, width, spacing_coeff));
    positions.extend(skin_positions(
        section.bottom_skin(),
        bottom_count,
        width,
        spacing_coeff,
    ));

    Ok(StringerSet {
        positions,
        top_count,
    })
}

/// Evenly pitched points on one skin line.
fn skin_positions(
    skin: Segment,
    count: usize,
    width: f64,
    spacing_coeff: f64,
) -> impl Iterator<Item = Point> {
    let pitch = if count == 0 {
        0.0
    } else {
        width * spacing_coeff / count as f64
    };
    let start = skin.start.x + width * (1.0 - spacing_coeff);
    (0..count).map(move |i| {
        let x = start + pitch * i as f64;
        Point::new(x, line_height_at(skin.start, skin.end, x))
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::point;

    fn slanted_box() -> CrossSection {
        CrossSection::new([
            point(0.4, 0.12),
            point(0.4, -0.09),
            point(1.2, -0.06),
            point(1.2, 0.11),
        ])
        .expect("valid section")
    }

    fn on_line(start: Point, end: Point, p: Point) -> bool {
        let expected = start.y + (end.y - start.y) * (p.x - start.x) / (end.x - start.x);
        (p.y - expected).abs() < 1e-12
    }

    #[test]
    fn returns_exactly_n_stringers_on_the_skins() {
        let section = slanted_box();
        for n in 0..25 {
            let stringers = place_stringers(&section, n, 0.95).expect("valid layout");
            assert_eq!(stringers.len(), n);
            assert_eq!(stringers.top().len(), n / 2);
            assert_eq!(stringers.bottom().len(), n - n / 2);
            let top = section.top_skin();
            let bottom = section.bottom_skin();
            assert!(stringers.top().iter().all(|&p| on_line(top.start, top.end, p)));
            assert!(stringers
                .bottom()
                .iter()
                .all(|&p| on_line(bottom.start, bottom.end, p)));
        }
    }

    #[test]
    fn zero_stringers_yield_empty_set() {
        let stringers = place_stringers(&slanted_box(), 0, 0.5).expect("valid layout");
        assert!(stringers.is_empty());
        assert_eq!(stringers, StringerSet::empty());
    }

    #[test]
    fn odd_count_puts_extra_stringer_at_the_bottom() {
        let stringers = place_stringers(&slanted_box(), 1, 1.0).expect("valid layout");
        assert!(stringers.top().is_empty());
        assert_eq!(stringers.bottom().len(), 1);
        assert_relative_eq!(stringers.bottom()[0].x, 0.4);
        assert_relative_eq!(stringers.bottom()[0].y, -0.09);
    }

    #[test]
    fn pitch_and_offset_follow_coverage() {
        let section = slanted_box();
        let stringers = place_stringers(&section, 8, 0.75).expect("valid layout");
        let width = section.width();
        let offset = width * 0.25;
        let pitch = width * 0.75 / 4.0;
        for (i, p) in stringers.top().iter().enumerate() {
            assert_relative_eq!(p.x, 0.4 + offset + pitch * i as f64, epsilon = 1e-12);
        }
        for (i, p) in stringers.bottom().iter().enumerate() {
            assert_relative_eq!(p.x, 0.4 + offset + pitch * i as f64, epsilon = 1e-12);
        }
    }

    #[test]
    fn spacing_outside_unit_interval_is_rejected() {
        let section = slanted_box();
        for coeff in [0.0, -0.5, 1.01, f64::NAN] {
            let error = place_stringers(&section, 4, coeff).expect_err("bad coefficient");
            assert!(matches!(error, LayoutError::SpacingCoefficient(_)));
        }
    }
}
