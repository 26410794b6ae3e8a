//! Bending deflection and twist of a swept wing box under spanwise loads.
//!
//! Stiffness comes from interpolating the stations of a [`SpanProfile`], so the section
//! geometry is never rebuilt during integration. The wing is clamped at `y = 0`, where
//! every integral starts.

use serde::Serialize;

use crate::errors::IntegrationError;
use crate::loads::SpanwiseLoad;
use crate::material::Material;
use crate::properties::SectionProperties;
use crate::quadrature::Quadrature;
use crate::sweep::SpanProfile;

/// Span position of the clamped root, where slope, deflection and twist vanish.
pub const CLAMP_POSITION: f64 = 0.0;

/// Deflection and twist evaluated at the tip station.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TipResponse {
    /// Span position of the tip in metres.
    pub span_position: f64,
    /// Bending slope in radians.
    pub slope: f64,
    /// Vertical deflection in metres.
    pub deflection: f64,
    /// Twist angle in radians.
    pub twist_angle: f64,
}

/// Integrator for the elastic response of a wing box clamped at [`CLAMP_POSITION`].
///
/// `M` is the bending moment in N·m and `T` the torque in N·m, both as functions of
/// span position.
#[derive(Clone, Debug)]
pub struct WingDeflection<'a, M, T> {
    /// Swept stations providing the section properties.
    profile: &'a SpanProfile,
    /// Elastic constants.
    material: Material,
    /// Spanwise bending moment.
    bending_moment: M,
    /// Spanwise torque.
    torque: T,
    /// Tolerances for every integral.
    quadrature: Quadrature,
    /// Station positions, used to split integration ranges where stiffness has kinks.
    breakpoints: Vec<f64>,
}

impl<'a, M, T> WingDeflection<'a, M, T>
where
    M: SpanwiseLoad,
    T: SpanwiseLoad,
{
    /// Create an integrator with the default quadrature tolerances.
    ///
    /// # Examples
    /// ```
    /// use wingbox::{point, sweep, CrossSection, Material, SparSpec, SweepConfig, WingDeflection};
    ///
    /// let config = SweepConfig {
    ///     unit_shape: CrossSection::new([
    ///         point(0.2, 0.05),
    ///         point(0.2, -0.05),
    ///         point(0.6, -0.05),
    ///         point(0.6, 0.05),
    ///     ])
    ///     .expect("valid unit section"),
    ///     span_min: 0.0,
    ///     span_max: 10.0,
    ///     n_stations: 6,
    ///     root_chord: 2.0,
    ///     tip_chord: 2.0,
    ///     spars: SparSpec::new(0.2, 0.2),
    ///     thickness: 0.002,
    ///     stringer_count: 0,
    ///     stringer_coverage: 1.0,
    ///     stringer_area: 0.0,
    /// };
    /// let profile = sweep(&config).expect("valid sweep");
    /// let wing = WingDeflection::new(&profile, Material::default(), |_: f64| 1.0e4, |_: f64| 0.0);
    /// assert_eq!(wing.deflection(0.0).expect("root"), 0.0);
    /// assert!(wing.deflection(10.0).expect("tip") < 0.0);
    /// ```
    #[must_use]
    pub fn new(profile: &'a SpanProfile, material: Material, bending_moment: M, torque: T) -> Self {
        Self {
            profile,
            material,
            bending_moment,
            torque,
            quadrature: Quadrature::default(),
            breakpoints: profile.span_positions().to_vec(),
        }
    }

    /// Replace the quadrature tolerances.
    #[must_use]
    pub fn with_quadrature(mut self, quadrature: Quadrature) -> Self {
        self.quadrature = quadrature;
        self
    }

    /// Bending slope `∫ -M(x) / (E I_xx(x)) dx` from the clamp to `span_position`.
    ///
    /// Exactly zero at the clamp, whatever the profile covers.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationError::OutOfSpan`] outside the profile,
    /// [`IntegrationError::ClampOutsideProfile`] when the profile does not reach the clamp
    /// and any quadrature or stiffness failure met while integrating.
    pub fn bending_slope(&self, span_position: f64) -> Result<f64, IntegrationError> {
        if span_position == CLAMP_POSITION {
            return Ok(0.0);
        }
        self.check_range(span_position)?;
        self.integrate(|x| self.curvature(x), span_position)
    }

    /// Vertical deflection, the integral of [`bending_slope`](Self::bending_slope) from the
    /// clamp to `span_position`.
    ///
    /// The slope is itself evaluated by quadrature at every outer sample.
    ///
    /// # Errors
    ///
    /// Same as [`bending_slope`](Self::bending_slope).
    pub fn deflection(&self, span_position: f64) -> Result<f64, IntegrationError> {
        if span_position == CLAMP_POSITION {
            return Ok(0.0);
        }
        self.check_range(span_position)?;
        self.integrate(|x| self.bending_slope(x), span_position)
    }

    /// Rate of twist `T(y) / (G J(y))` in radians per metre.
    ///
    /// This is the pointwise integrand of [`twist_angle`](Self::twist_angle), so it is
    /// not forced to zero at the clamp.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationError::OutOfSpan`] outside the profile and
    /// [`IntegrationError::ZeroStiffness`] when the torsional stiffness vanishes.
    pub fn twist_rate(&self, span_position: f64) -> Result<f64, IntegrationError> {
        let properties = self.properties_at(span_position)?;
        let stiffness = self.material.shear_modulus_pa() * properties.j;
        nonzero(stiffness, span_position)?;
        Ok(self.torque.at(span_position) / stiffness)
    }

    /// Twist angle in radians, the integral of [`twist_rate`](Self::twist_rate) from the
    /// clamp to `span_position`.
    ///
    /// # Errors
    ///
    /// Same as [`bending_slope`](Self::bending_slope).
    pub fn twist_angle(&self, span_position: f64) -> Result<f64, IntegrationError> {
        if span_position == CLAMP_POSITION {
            return Ok(0.0);
        }
        self.check_range(span_position)?;
        self.integrate(|x| self.twist_rate(x), span_position)
    }

    /// Slope, deflection and twist at the tip station.
    ///
    /// # Errors
    ///
    /// Propagates the first integration failure.
    pub fn tip_response(&self) -> Result<TipResponse, IntegrationError> {
        let tip = self.profile.tip().span_position;
        Ok(TipResponse {
            span_position: tip,
            slope: self.bending_slope(tip)?,
            deflection: self.deflection(tip)?,
            twist_angle: self.twist_angle(tip)?,
        })
    }

    /// Integrand of the bending slope, `-M / EI`.
    fn curvature(&self, span_position: f64) -> Result<f64, IntegrationError> {
        let properties = self.properties_at(span_position)?;
        let stiffness = self.material.elastic_modulus_pa() * properties.i_xx;
        nonzero(stiffness, span_position)?;
        Ok(-self.bending_moment.at(span_position) / stiffness)
    }

    /// Integrate from the clamp to `upper` with every station as a breakpoint.
    fn integrate<F>(&self, f: F, upper: f64) -> Result<f64, IntegrationError>
    where
        F: FnMut(f64) -> Result<f64, IntegrationError>,
    {
        self.quadrature
            .integrate_with_breakpoints(f, CLAMP_POSITION, upper, &self.breakpoints)
            .map(|estimate| estimate.value)
    }

    /// Interpolated section properties, or [`IntegrationError::OutOfSpan`].
    fn properties_at(&self, span_position: f64) -> Result<SectionProperties, IntegrationError> {
        self.profile
            .properties_at(span_position)
            .ok_or_else(|| self.out_of_span(span_position))
    }

    /// Check that both `span_position` and the clamp lie inside the profile.
    fn check_range(&self, span_position: f64) -> Result<(), IntegrationError> {
        let root = self.profile.root().span_position;
        let tip = self.profile.tip().span_position;
        if !(span_position >= root && span_position <= tip) {
            return Err(self.out_of_span(span_position));
        }
        if !(CLAMP_POSITION >= root && CLAMP_POSITION <= tip) {
            return Err(IntegrationError::ClampOutsideProfile { root, tip });
        }
        Ok(())
    }

    /// Build the out-of-span error for `span_position`.
    fn out_of_span(&self, span_position: f64) -> IntegrationError {
        IntegrationError::OutOfSpan {
            position: span_position,
            root: self.profile.root().span_position,
            tip: self.profile.tip().span_position,
        }
    }
}

/// Reject a stiffness that cannot be divided by.
fn nonzero(stiffness: f64, span_position: f64) -> Result<(), IntegrationError> {
    if stiffness > 0.0 {
        Ok(())
    } else {
        Err(IntegrationError::ZeroStiffness {
            position: span_position,
        })
    }
}
