//! JSON configuration of a wing-box analysis.
//!
//! Every field has a default, so a configuration file only needs to list what differs
//! from the reference wing:
//!
//! ```json
//! {
//!     "n_stations": 50,
//!     "stringer_area": 2.0e-4,
//!     "section": { "airfoil": { "path": "fx60126.dat", "front_spar": 0.2, "rear_spar": 0.6 } },
//!     "bending_moment": { "tabulated": [[0.0, 1.2e6], [27.47721, 0.0]] }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uom::si::pressure::pascal;

use crate::airfoil::Airfoil;
use crate::constraints::DesignLimits;
use crate::errors::ConfigError;
use crate::geometry::{point, Point};
use crate::loads::{LoadDistribution, PolynomialLoad};
use crate::material::Material;
use crate::quadrature::Quadrature;
use crate::section::{CrossSection, SparSpec};
use crate::sweep::SweepConfig;

/// Where the unit-chord wing-box shape comes from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionSource {
    /// Corners given directly, front-top, front-bottom, rear-bottom, rear-top.
    Corners([Point; 4]),
    /// Spars fitted into an airfoil outline at the given chord fractions.
    Airfoil {
        /// Selig-format coordinate file, relative paths resolved against the
        /// configuration file.
        path: PathBuf,
        /// Chord fraction of the front spar.
        front_spar: f64,
        /// Chord fraction of the rear spar.
        rear_spar: f64,
    },
}

impl Default for SectionSource {
    /// Spar heights of 0.11 and 0.09 chord at 20 % and 60 % chord.
    fn default() -> Self {
        SectionSource::Corners([
            point(0.2, 0.0588),
            point(0.2, -0.0512),
            point(0.6, -0.0362),
            point(0.6, 0.0538),
        ])
    }
}

impl SectionSource {
    /// Produce the unit-chord cross-section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the airfoil cannot be read and
    /// [`ConfigError::Section`] when the corners or the fitted box are invalid.
    pub fn unit_shape(&self) -> Result<CrossSection, ConfigError> {
        match self {
            SectionSource::Corners(corners) => Ok(CrossSection::new(*corners)?),
            SectionSource::Airfoil {
                path,
                front_spar,
                rear_spar,
            } => Ok(Airfoil::from_file(path)?.fit_wing_box(*front_spar, *rear_spar)?),
        }
    }
}

/// Elastic moduli in pascals.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialConfig {
    /// Young's modulus in pascals.
    pub elastic_modulus: f64,
    /// Shear modulus in pascals.
    pub shear_modulus: f64,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            elastic_modulus: 72.4e9,
            shear_modulus: 27.0e9,
        }
    }
}

/// Complete analysis configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WingBoxConfig {
    /// Span position of the root in metres.
    pub span_min: f64,
    /// Span position of the tip in metres.
    pub span_max: f64,
    /// Number of stations, both ends included.
    pub n_stations: usize,
    /// Root chord in metres.
    pub root_chord: f64,
    /// Tip chord in metres.
    pub tip_chord: f64,
    /// Spar lengths in metres.
    pub spars: SparSpec,
    /// Wall thickness in metres.
    pub thickness: f64,
    /// Stringers per section.
    pub stringer_count: usize,
    /// Fraction of the box width covered by stringers.
    pub stringer_coverage: f64,
    /// Area of one stringer in square metres.
    pub stringer_area: f64,
    /// Unit-chord section shape.
    pub section: SectionSource,
    /// Elastic moduli.
    pub material: MaterialConfig,
    /// Bending moment in N·m along the span.
    pub bending_moment: LoadDistribution,
    /// Torque in N·m along the span.
    pub torque: LoadDistribution,
    /// Tip deflection and twist limits.
    pub limits: DesignLimits,
    /// Integration tolerances.
    pub quadrature: Quadrature,
}

impl Default for WingBoxConfig {
    fn default() -> Self {
        Self {
            span_min: 0.0,
            span_max: 27.47721,
            n_stations: 100,
            root_chord: 5.24140,
            tip_chord: 1.57714,
            spars: SparSpec::default(),
            thickness: 0.001,
            stringer_count: 20,
            stringer_coverage: 0.95,
            stringer_area: 0.0,
            section: SectionSource::default(),
            material: MaterialConfig::default(),
            bending_moment: LoadDistribution::Polynomial(PolynomialLoad::new(vec![0.0, 1.0])),
            torque: LoadDistribution::Polynomial(PolynomialLoad::new(vec![0.0, 1.0])),
            limits: DesignLimits::default(),
            quadrature: Quadrature::default(),
        }
    }
}

impl WingBoxConfig {
    /// Parse a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or invalid values.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a configuration file, resolving a relative airfoil path against the file's
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its content is invalid.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_json(&text)?;
        if let SectionSource::Airfoil {
            path: airfoil_path, ..
        } = &mut config.section
        {
            if airfoil_path.is_relative() {
                if let Some(directory) = path.parent() {
                    *airfoil_path = directory.join(&*airfoil_path);
                }
            }
        }
        Ok(config)
    }

    /// Sweep parameters described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the section shape cannot be produced.
    pub fn to_sweep_config(&self) -> Result<SweepConfig, ConfigError> {
        Ok(SweepConfig {
            unit_shape: self.section.unit_shape()?,
            span_min: self.span_min,
            span_max: self.span_max,
            n_stations: self.n_stations,
            root_chord: self.root_chord,
            tip_chord: self.tip_chord,
            spars: self.spars,
            thickness: self.thickness,
            stringer_count: self.stringer_count,
            stringer_coverage: self.stringer_coverage,
            stringer_area: self.stringer_area,
        })
    }

    /// Material with the configured moduli.
    #[must_use]
    pub fn material(&self) -> Material {
        Material::new::<pascal>(self.material.elastic_modulus, self.material.shear_modulus)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::errors::GeometryError;
    use crate::loads::SpanwiseLoad;

    #[test]
    fn empty_object_gives_reference_wing() {
        let config = WingBoxConfig::from_json("{}").expect("valid json");
        assert_eq!(config, WingBoxConfig::default());
        assert_eq!(config.n_stations, 100);
        assert_eq!(config.span_max, 27.47721);
        assert_eq!(config.stringer_count, 20);
        assert_relative_eq!(config.material().elastic_modulus_pa(), 72.4e9, max_relative = 1e-12);

        let sweep = config.to_sweep_config().expect("built-in section");
        let front = sweep.unit_shape.front_spar();
        assert_relative_eq!(front.start.y - front.end.y, 0.11, epsilon = 1e-12);
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = WingBoxConfig::from_json(
            r#"{
                "n_stations": 7,
                "spars": { "front_length": 0.2, "rear_length": 0.15 },
                "material": { "shear_modulus": 26.0e9 },
                "torque": { "tabulated": [[0.0, 10.0], [10.0, 0.0]] },
                "quadrature": { "max_intervals": 50 }
            }"#,
        )
        .expect("valid json");
        assert_eq!(config.n_stations, 7);
        assert_eq!(config.spars, SparSpec::new(0.2, 0.15));
        assert_eq!(config.material.elastic_modulus, 72.4e9);
        assert_eq!(config.material.shear_modulus, 26.0e9);
        assert_relative_eq!(config.torque.at(5.0), 5.0);
        assert_eq!(config.quadrature.max_intervals, 50);
        assert_eq!(config.quadrature.abs_tol, 1.49e-8);
    }

    #[test]
    fn explicit_corners_are_validated() {
        let config = WingBoxConfig::from_json(
            r#"{ "section": { "corners": [
                { "x": 0.25, "y": 0.05 }, { "x": 0.25, "y": -0.05 },
                { "x": 0.7, "y": -0.04 }, { "x": 0.7, "y": 0.04 }
            ] } }"#,
        )
        .expect("valid json");
        let sweep = config.to_sweep_config().expect("valid corners");
        assert_relative_eq!(sweep.unit_shape.width(), 0.45, epsilon = 1e-12);

        let collapsed = WingBoxConfig::from_json(
            r#"{ "section": { "corners": [
                { "x": 0.3, "y": 0.05 }, { "x": 0.3, "y": -0.05 },
                { "x": 0.3, "y": -0.04 }, { "x": 0.3, "y": 0.04 }
            ] } }"#,
        )
        .expect("valid json");
        assert!(matches!(
            collapsed.to_sweep_config(),
            Err(ConfigError::Section(GeometryError::ZeroWidth { .. }))
        ));
    }

    #[test]
    fn unknown_load_kind_is_rejected() {
        let result = WingBoxConfig::from_json(r#"{ "torque": { "elliptic": 3.0 } }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_airfoil_file_surfaces_io_error() {
        let config = WingBoxConfig {
            section: SectionSource::Airfoil {
                path: PathBuf::from("no/such/airfoil.dat"),
                front_spar: 0.2,
                rear_spar: 0.6,
            },
            ..WingBoxConfig::default()
        };
        assert!(matches!(config.to_sweep_config(), Err(ConfigError::Io { .. })));
    }
}
