//! Spanwise sweep of wing-box sections from root to tip.

use ndarray::Array1;
use serde::Serialize;

use crate::errors::{StationError, SweepError};
use crate::geometry::Point;
use crate::properties::{section_properties, SectionProperties};
use crate::section::{build_section, CrossSection, SparSpec};
use crate::stringers::{place_stringers, StringerSet};

/// Parameters of a root-to-tip sweep.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepConfig {
    /// Wing-box quadrilateral normalized to unit chord.
    pub unit_shape: CrossSection,
    /// Span position of the root station in metres.
    pub span_min: f64,
    /// Span position of the tip station in metres.
    pub span_max: f64,
    /// Number of stations, both ends included.
    pub n_stations: usize,
    /// Chord at the root in metres.
    pub root_chord: f64,
    /// Chord at the tip in metres.
    pub tip_chord: f64,
    /// Fixed spar lengths.
    pub spars: SparSpec,
    /// Skin and spar wall thickness in metres.
    pub thickness: f64,
    /// Number of stringers per section.
    pub stringer_count: usize,
    /// Fraction of the box width covered by stringers.
    pub stringer_coverage: f64,
    /// Cross-sectional area of a single stringer in square metres.
    pub stringer_area: f64,
}

/// Section geometry and properties at one span position.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Station {
    /// Span position in metres.
    pub span_position: f64,
    /// Local chord in metres.
    pub chord: f64,
    /// Spar-to-spar distance of the scaled section in metres.
    pub width: f64,
    /// Area centroid of the scaled section.
    pub centroid: Point,
    /// Scaled wing-box section.
    pub section: CrossSection,
    /// Stringers placed on the scaled section.
    pub stringers: StringerSet,
    /// Bending and torsion properties.
    pub properties: SectionProperties,
}

/// Stations of a completed sweep, ordered from root to tip.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpanProfile {
    /// Stations with strictly increasing span positions.
    stations: Vec<Station>,
}

impl SpanProfile {
    /// All stations, root first.
    #[must_use]
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Root station.
    #[must_use]
    pub fn root(&self) -> &Station {
        &self.stations[0]
    }

    /// Tip station.
    #[must_use]
    pub fn tip(&self) -> &Station {
        &self.stations[self.stations.len() - 1]
    }

    /// Span positions of the stations in metres.
    #[must_use]
    pub fn span_positions(&self) -> Array1<f64> {
        self.column(|station| station.span_position)
    }

    /// Chords of the stations in metres.
    #[must_use]
    pub fn chords(&self) -> Array1<f64> {
        self.column(|station| station.chord)
    }

    /// Second moments about the chordwise axis in m⁴.
    #[must_use]
    pub fn i_xx(&self) -> Array1<f64> {
        self.column(|station| station.properties.i_xx)
    }

    /// Second moments about the vertical axis in m⁴.
    #[must_use]
    pub fn i_yy(&self) -> Array1<f64> {
        self.column(|station| station.properties.i_yy)
    }

    /// Torsion constants in m⁴.
    #[must_use]
    pub fn torsion_constants(&self) -> Array1<f64> {
        self.column(|station| station.properties.j)
    }

    /// Section properties linearly interpolated at `span_position`.
    ///
    /// Returns `None` outside the swept range.
    ///
    /// # Examples
    /// ```
    /// use wingbox::{point, sweep, CrossSection, SparSpec, SweepConfig};
    ///
    /// let config = SweepConfig {
    ///     unit_shape: CrossSection::new([
    ///         point(0.2, 0.05),
    ///         point(0.2, -0.05),
    ///         point(0.6, -0.04),
    ///         point(0.6, 0.04),
    ///     ])
    ///     .expect("valid unit section"),
    ///     span_min: 0.0,
    ///     span_max: 10.0,
    ///     n_stations: 11,
    ///     root_chord: 3.0,
    ///     tip_chord: 1.0,
    ///     spars: SparSpec::new(0.3, 0.2),
    ///     thickness: 0.002,
    ///     stringer_count: 10,
    ///     stringer_coverage: 0.9,
    ///     stringer_area: 1.0e-4,
    /// };
    /// let profile = sweep(&config).expect("valid sweep");
    /// let mid = profile.properties_at(4.5).expect("inside the span");
    /// let (a, b) = (&profile.stations()[4].properties, &profile.stations()[5].properties);
    /// assert!((mid.i_xx - 0.5 * (a.i_xx + b.i_xx)).abs() < 1e-15);
    /// assert!(profile.properties_at(10.5).is_none());
    /// ```
    #[must_use]
    pub fn properties_at(&self, span_position: f64) -> Option<SectionProperties> {
        let root = self.root().span_position;
        let tip = self.tip().span_position;
        if !(span_position >= root && span_position <= tip) {
            return None;
        }
        // First station strictly beyond the requested position.
        let upper = self
            .stations
            .partition_point(|station| station.span_position <= span_position);
        if upper == self.stations.len() {
            return Some(self.tip().properties);
        }
        let below = &self.stations[upper - 1];
        let above = &self.stations[upper];
        let t = (span_position - below.span_position) / (above.span_position - below.span_position);
        Some(below.properties.lerp(&above.properties, t))
    }

    /// Collect one scalar per station.
    fn column(&self, value: impl Fn(&Station) -> f64) -> Array1<f64> {
        self.stations.iter().map(value).collect()
    }
}

/// Linear interpolation that reproduces both endpoints exactly.
fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start * (1.0 - t) + end * t
}

/// Sweep the wing box from root to tip.
///
/// Stations are evenly spaced over `[span_min, span_max]`, both ends included, and the
/// chord varies linearly from `root_chord` to `tip_chord`. At every station the unit
/// shape is scaled to the local chord, its width is measured, stringers are placed and
/// the section properties are computed.
///
/// # Errors
///
/// Returns [`SweepError::InvalidParameter`] for fewer than two stations, an empty or
/// reversed span, or a non-positive chord, and [`SweepError::Station`] with the span
/// position of the first station that fails. No partial profile is returned.
pub fn sweep(config: &SweepConfig) -> Result<SpanProfile, SweepError> {
    validate(config)?;
    let last = (config.n_stations - 1) as f64;
    let stations = (0..config.n_stations)
        .map(|i| {
            let t = i as f64 / last;
            let span_position = lerp(config.span_min, config.span_max, t);
            let chord = lerp(config.root_chord, config.tip_chord, t);
            build_station(config, span_position, chord).map_err(|source| SweepError::Station {
                span_position,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SpanProfile { stations })
}

/// Run geometry, stringer layout and section properties for one station.
fn build_station(
    config: &SweepConfig,
    span_position: f64,
    chord: f64,
) -> Result<Station, StationError> {
    let section = build_section(&config.unit_shape, chord)?;
    let width = section.width();
    let stringers = place_stringers(&section, config.stringer_count, config.stringer_coverage)?;
    let properties = section_properties(
        &section,
        &config.spars,
        config.stringer_area,
        &stringers,
        config.thickness,
        width,
    )?;
    let centroid = section.centroid()?;
    crate::event!(
        "station y = {span_position:.4} m, chord = {chord:.4} m, I_xx = {:.4e} m^4, J = {:.4e} m^4",
        properties.i_xx,
        properties.j
    );
    Ok(Station {
        span_position,
        chord,
        width,
        centroid,
        section,
        stringers,
        properties,
    })
}

/// Reject sweep parameters before any station is built.
fn validate(config: &SweepConfig) -> Result<(), SweepError> {
    if config.n_stations < 2 {
        return Err(SweepError::invalid(
            "n_stations",
            config.n_stations,
            "at least two stations are required",
        ));
    }
    if !config.span_min.is_finite() {
        return Err(SweepError::invalid("span_min", config.span_min, "must be finite"));
    }
    if !(config.span_max.is_finite() && config.span_max > config.span_min) {
        return Err(SweepError::invalid(
            "span_max",
            config.span_max,
            "must be finite and greater than span_min",
        ));
    }
    for (name, chord) in [("root_chord", config.root_chord), ("tip_chord", config.tip_chord)] {
        if !(chord.is_finite() && chord > 0.0) {
            return Err(SweepError::invalid(name, chord, "chord must be positive"));
        }
    }
    Ok(())
}
