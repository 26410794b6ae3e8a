//! Airfoil outlines and fitting a wing box between two spar positions.

use std::path::Path;

use crate::errors::{ConfigError, GeometryError};
use crate::geometry::{line_height_at, point, Point};
use crate::section::CrossSection;

/// Airfoil outline normalized to unit chord.
///
/// Coordinates follow the Selig convention: the trailing edge over the upper surface to
/// the leading edge, then back along the lower surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Airfoil {
    /// One surface, sorted by increasing x.
    first: Vec<Point>,
    /// Other surface, sorted by increasing x.
    second: Vec<Point>,
}

impl Airfoil {
    /// Parse whitespace separated `x y` rows.
    ///
    /// Lines that do not hold exactly two numbers, such as the name header, are skipped.
    /// The outline is split into its two surfaces at the leading edge (smallest x).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] for NaN or infinite coordinates and
    /// [`GeometryError::AirfoilTooShort`] when a surface has fewer than three points.
    ///
    /// # Examples
    /// ```
    /// use wingbox::Airfoil;
    ///
    /// let airfoil = Airfoil::parse(
    ///     "DIAMOND\n1.0 0.0\n0.5 0.05\n0.0 0.0\n0.5 -0.05\n1.0 0.0\n",
    /// )
    /// .expect("valid outline");
    /// let box_section = airfoil.fit_wing_box(0.25, 0.75).expect("spars inside airfoil");
    /// assert!((box_section.width() - 0.5).abs() < 1e-12);
    /// ```
    pub fn parse(text: &str) -> Result<Self, GeometryError> {
        let mut points = Vec::new();
        for line in text.lines() {
            let values: Vec<f64> = match line
                .split_whitespace()
                .map(str::parse::<f64>)
                .collect::<Result<_, _>>()
            {
                Ok(values) => values,
                Err(_) => continue,
            };
            if let [x, y] = values[..] {
                let coordinate = point(x, y);
                if !coordinate.is_finite() {
                    return Err(GeometryError::NonFinite {
                        quantity: "airfoil coordinate",
                        value: if x.is_finite() { y } else { x },
                    });
                }
                points.push(coordinate);
            }
        }
        Self::from_points(&points)
    }

    /// Read and parse an airfoil file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Section`] when its content is rejected by [`Airfoil::parse`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text)?)
    }

    /// Split an ordered outline at its leading edge.
    fn from_points(points: &[Point]) -> Result<Self, GeometryError> {
        let leading_edge = points
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.x.total_cmp(&b.x))
            .map(|(idx, _)| idx)
            .ok_or(GeometryError::AirfoilTooShort(0))?;
        let first = surface(&points[..=leading_edge]);
        let second = surface(&points[leading_edge..]);
        if first.len() < 3 || second.len() < 3 {
            return Err(GeometryError::AirfoilTooShort(points.len()));
        }
        Ok(Self { first, second })
    }

    /// Chordwise range covered by both surfaces.
    #[must_use]
    pub fn x_range(&self) -> (f64, f64) {
        let min = self.first[0].x.max(self.second[0].x);
        let max = self.first[self.first.len() - 1]
            .x
            .min(self.second[self.second.len() - 1].x);
        (min, max)
    }

    /// Upper and lower surface heights at chord fraction `x`.
    fn heights_at(&self, x: f64) -> Result<(f64, f64), GeometryError> {
        let (min, max) = self.x_range();
        if !(x >= min && x <= max) {
            return Err(GeometryError::SparOutsideAirfoil {
                position: x,
                min,
                max,
            });
        }
        let a = interpolate(&self.first, x);
        let b = interpolate(&self.second, x);
        Ok((a.max(b), a.min(b)))
    }

    /// Unit-chord wing box with vertical spars at chord fractions `front` and `rear`.
    ///
    /// Corner heights are read from the upper and lower surfaces.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::SparOutsideAirfoil`] when a spar lies outside the
    /// outline, and any error from [`CrossSection::new`] for misordered spars.
    pub fn fit_wing_box(&self, front: f64, rear: f64) -> Result<CrossSection, GeometryError> {
        let (front_top, front_bottom) = self.heights_at(front)?;
        let (rear_top, rear_bottom) = self.heights_at(rear)?;
        CrossSection::new([
            point(front, front_top),
            point(front, front_bottom),
            point(rear, rear_bottom),
            point(rear, rear_top),
        ])
    }
}

/// Sort a surface by x, dropping repeated stations.
fn surface(points: &[Point]) -> Vec<Point> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
    sorted.dedup_by(|a, b| a.x == b.x);
    sorted
}

/// Piecewise linear height of a sorted surface at `x` inside its range.
fn interpolate(surface: &[Point], x: f64) -> f64 {
    let upper = surface
        .partition_point(|p| p.x < x)
        .clamp(1, surface.len() - 1);
    line_height_at(surface[upper - 1], surface[upper], x)
}
