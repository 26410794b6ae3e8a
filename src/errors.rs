//! Error types produced while building wing-box sections and integrating their response.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a cross-section cannot be built or measured.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum GeometryError {
    /// Returned when a coordinate or length is NaN or infinite.
    #[error("{quantity} must be finite (received {value})")]
    NonFinite {
        /// Name of the offending quantity.
        quantity: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Returned when the chord used to scale a unit section is zero or negative.
    #[error("chord must be positive (received {0})")]
    NonPositiveChord(f64),
    /// Returned when the front and rear spar share the same chordwise position.
    #[error("wing box has zero width (front spar at x = {front}, rear spar at x = {rear})")]
    ZeroWidth {
        /// Chordwise position of the front spar in metres.
        front: f64,
        /// Chordwise position of the rear spar in metres.
        rear: f64,
    },
    /// Returned when the corners do not follow front-top, front-bottom, rear-bottom,
    /// rear-top ordering.
    #[error("cross-section corners are misordered: {0}")]
    Misordered(&'static str),
    /// Returned when the quadrilateral encloses no area, so it has no centroid.
    #[error("cross-section encloses no area (signed area {0})")]
    DegenerateArea(f64),
    /// Returned when the skin thickness is zero or negative.
    #[error("skin thickness must be positive (received {0})")]
    NonPositiveThickness(f64),
    /// Returned when a spar length is zero or negative.
    #[error("spar length must be positive (received {0})")]
    NonPositiveSparLength(f64),
    /// Returned when the stringer area is negative.
    #[error("stringer area must be zero or positive (received {0})")]
    InvalidStringerArea(f64),
    /// Returned when a spar chord fraction falls outside the airfoil outline.
    #[error("spar position {position} lies outside the airfoil (x from {min} to {max})")]
    SparOutsideAirfoil {
        /// Requested spar position as a fraction of chord.
        position: f64,
        /// Smallest x coordinate of the airfoil surface.
        min: f64,
        /// Largest x coordinate of the airfoil surface.
        max: f64,
    },
    /// Returned when an airfoil outline has too few points to form two surfaces.
    #[error("airfoil needs at least 3 coordinates per surface (received {0} points)")]
    AirfoilTooShort(usize),
}

/// Error returned when a stringer layout request is not meaningful.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum LayoutError {
    /// Returned when the coverage fraction lies outside `(0, 1]`.
    #[error("stringer spacing coefficient must lie in (0, 1] (received {0})")]
    SpacingCoefficient(f64),
}

/// Error returned when a tabulated load cannot be built.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum LoadError {
    /// Returned when the table has no samples.
    #[error("load table has no samples")]
    Empty,
    /// Returned when a sample holds NaN or infinity.
    #[error("load sample ({span_position}, {value}) is not finite")]
    NonFinite {
        /// Span position of the sample.
        span_position: f64,
        /// Load value of the sample.
        value: f64,
    },
    /// Returned when span positions do not strictly increase.
    #[error("load span positions must increase ({previous} followed by {next})")]
    Unsorted {
        /// Earlier span position.
        previous: f64,
        /// Following span position.
        next: f64,
    },
}

/// Failure raised while processing a single span station.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum StationError {
    /// The station geometry or its section properties are invalid.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// The stringer layout could not be generated.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Error returned when a spanwise sweep cannot be completed.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SweepError {
    /// Returned when a sweep parameter is rejected before any station is built.
    #[error("invalid sweep parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// Name of the rejected parameter.
        name: &'static str,
        /// Rejected value, formatted for display.
        value: String,
        /// Why the value was rejected.
        reason: &'static str,
    },
    /// Returned when one station fails; the whole sweep is discarded.
    #[error("station at span position {span_position} m failed: {source}")]
    Station {
        /// Span position of the failing station in metres.
        span_position: f64,
        /// Underlying station failure.
        #[source]
        source: StationError,
    },
}

impl SweepError {
    /// Create an [`SweepError::InvalidParameter`] error.
    pub(crate) fn invalid(name: &'static str, value: impl ToString, reason: &'static str) -> Self {
        SweepError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}

/// Error returned when a deflection or twist integral cannot be evaluated.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum IntegrationError {
    /// Returned when adaptive quadrature exhausts its subdivision budget.
    #[error(
        "integral from {lower} to {upper} did not converge (estimated error {estimated_error:e}, tolerance {tolerance:e})"
    )]
    NonIntegrable {
        /// Lower integration bound.
        lower: f64,
        /// Upper integration bound.
        upper: f64,
        /// Error estimate when the quadrature gave up.
        estimated_error: f64,
        /// Tolerance that could not be met.
        tolerance: f64,
    },
    /// Returned when a span position lies outside the swept profile.
    #[error("span position {position} m is outside the profile ({root} m to {tip} m)")]
    OutOfSpan {
        /// Requested span position in metres.
        position: f64,
        /// Root span position of the profile in metres.
        root: f64,
        /// Tip span position of the profile in metres.
        tip: f64,
    },
    /// Returned when the profile does not cover the clamped root at `y = 0`, so there is
    /// no stiffness to integrate from.
    #[error("profile ({root} m to {tip} m) does not contain the clamp at y = 0")]
    ClampOutsideProfile {
        /// Root span position of the profile in metres.
        root: f64,
        /// Tip span position of the profile in metres.
        tip: f64,
    },
    /// Returned when the integrand evaluates to NaN or infinity.
    #[error("integrand is not finite at span position {position} m")]
    NonFiniteIntegrand {
        /// Span position of the offending sample in metres.
        position: f64,
    },
    /// Returned when the interpolated stiffness vanishes.
    #[error("stiffness vanishes at span position {position} m")]
    ZeroStiffness {
        /// Span position of the offending sample in metres.
        position: f64,
    },
}

/// Error returned when loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when a file cannot be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        /// Path that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// Returned when the JSON content does not match the configuration schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// Returned when the configured section or airfoil does not yield a valid wing box.
    #[error("invalid wing-box section: {0}")]
    Section(#[from] GeometryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_error_keeps_span_position() {
        let error = SweepError::Station {
            span_position: 12.5,
            source: StationError::Geometry(GeometryError::ZeroWidth {
                front: 0.3,
                rear: 0.3,
            }),
        };
        let message = error.to_string();
        assert!(message.contains("12.5"));
        assert!(message.contains("zero width"));
    }

    #[test]
    fn invalid_parameter_formats_value() {
        let error = SweepError::invalid("n_stations", 1, "at least two stations are required");
        assert_eq!(
            error.to_string(),
            "invalid sweep parameter 'n_stations' = 1: at least two stations are required"
        );
    }

    #[test]
    fn clamp_error_names_the_profile_range() {
        let error = IntegrationError::ClampOutsideProfile {
            root: 1.5,
            tip: 10.0,
        };
        assert_eq!(
            error.to_string(),
            "profile (1.5 m to 10 m) does not contain the clamp at y = 0"
        );
    }
}
