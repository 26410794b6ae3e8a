#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod logger;

pub mod airfoil;
pub mod config;
pub mod constraints;
pub mod deflection;
pub mod errors;
pub mod geometry;
pub mod loads;
pub mod material;
pub mod properties;
pub mod quadrature;
pub mod report;
pub mod section;
pub mod stringers;
pub mod sweep;

pub use airfoil::Airfoil;
pub use config::{MaterialConfig, SectionSource, WingBoxConfig};
pub use constraints::{ConstraintReport, DesignLimits};
pub use deflection::{TipResponse, WingDeflection, CLAMP_POSITION};
pub use errors::{
    ConfigError, GeometryError, IntegrationError, LayoutError, LoadError, StationError,
    SweepError,
};
pub use geometry::{point, quadrilateral_centroid, signed_area, Point};
pub use loads::{LoadDistribution, PolynomialLoad, SpanwiseLoad, TabulatedLoad};
pub use material::Material;
pub use properties::{
    moment_of_inertia_x, moment_of_inertia_y, section_properties, torsion_constant,
    SectionProperties,
};
pub use quadrature::{Estimate, Quadrature};
pub use section::{build_section, CrossSection, Segment, SparSpec};
pub use stringers::{place_stringers, StringerSet};
pub use sweep::{sweep, SpanProfile, Station, SweepConfig};
