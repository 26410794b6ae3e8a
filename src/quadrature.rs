//! Adaptive Gauss–Kronrod quadrature.
//!
//! Each interval is estimated with the 15-point Kronrod rule and the embedded 7-point
//! Gauss rule; their difference is the error estimate. Intervals are bisected globally,
//! worst first, until the summed error meets the tolerance or the interval budget runs
//! out. See <https://en.wikipedia.org/wiki/Gauss%E2%80%93Kronrod_quadrature_formula>.

use serde::{Deserialize, Serialize};

use crate::errors::IntegrationError;

/// Kronrod abscissae on `[0, 1]`; odd entries are shared with the Gauss rule.
const XGK: [f64; 8] = [
    0.991_455_371_120_812_6,
    0.949_107_912_342_758_5,
    0.864_864_423_359_769_1,
    0.741_531_185_599_394_4,
    0.586_087_235_467_691_1,
    0.405_845_151_377_397_2,
    0.207_784_955_007_898_5,
    0.0,
];

/// Kronrod weights matching [`XGK`].
const WGK: [f64; 8] = [
    0.022_935_322_010_529_22,
    0.063_092_092_629_978_55,
    0.104_790_010_322_250_18,
    0.140_653_259_715_525_92,
    0.169_004_726_639_267_9,
    0.190_350_578_064_785_4,
    0.204_432_940_075_298_9,
    0.209_482_141_084_727_83,
];

/// Gauss weights for the abscissae `XGK[1]`, `XGK[3]`, `XGK[5]` and `XGK[7]`.
const WG: [f64; 4] = [
    0.129_484_966_168_869_7,
    0.279_705_391_489_276_7,
    0.381_830_050_505_118_9,
    0.417_959_183_673_469_4,
];

/// Tolerances and budget for adaptive integration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quadrature {
    /// Absolute error tolerance.
    pub abs_tol: f64,
    /// Error tolerance relative to the magnitude of the integral.
    pub rel_tol: f64,
    /// Largest number of subintervals before giving up.
    pub max_intervals: usize,
}

impl Default for Quadrature {
    fn default() -> Self {
        Self {
            abs_tol: 1.49e-8,
            rel_tol: 1.49e-8,
            max_intervals: 2_000,
        }
    }
}

/// Result of a converged integration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    /// Integral value.
    pub value: f64,
    /// Estimated absolute error.
    pub error: f64,
    /// Number of subintervals used.
    pub intervals: usize,
}

/// One subinterval and its local estimate.
#[derive(Clone, Copy, Debug)]
struct Interval {
    /// Lower bound.
    lower: f64,
    /// Upper bound.
    upper: f64,
    /// Kronrod estimate of the integral.
    value: f64,
    /// Kronrod minus Gauss estimate.
    error: f64,
}

impl Quadrature {
    /// Integrate `f` from `lower` to `upper`.
    ///
    /// # Errors
    ///
    /// See [`Quadrature::integrate_with_breakpoints`].
    ///
    /// # Examples
    /// ```
    /// use wingbox::Quadrature;
    ///
    /// let estimate = Quadrature::default()
    ///     .integrate(|x| Ok(x.sin()), 0.0, std::f64::consts::PI)
    ///     .expect("smooth integrand converges");
    /// assert!((estimate.value - 2.0).abs() < 1e-12);
    /// ```
    pub fn integrate<F>(&self, f: F, lower: f64, upper: f64) -> Result<Estimate, IntegrationError>
    where
        F: FnMut(f64) -> Result<f64, IntegrationError>,
    {
        self.integrate_with_breakpoints(f, lower, upper, &[])
    }

    /// Integrate `f` from `lower` to `upper`, starting from subintervals split at every
    /// breakpoint that lies strictly between the bounds.
    ///
    /// Breakpoints should mark kinks or discontinuities of the integrand. Swapped bounds
    /// negate the result; equal bounds return zero without evaluating `f`.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationError::NonIntegrable`] when the interval budget is exhausted
    /// before the tolerance is met, [`IntegrationError::NonFiniteIntegrand`] when `f`
    /// returns NaN or infinity, and any error raised by `f` itself.
    pub fn integrate_with_breakpoints<F>(
        &self,
        mut f: F,
        lower: f64,
        upper: f64,
        breakpoints: &[f64],
    ) -> Result<Estimate, IntegrationError>
    where
        F: FnMut(f64) -> Result<f64, IntegrationError>,
    {
        if lower == upper {
            return Ok(Estimate {
                value: 0.0,
                error: 0.0,
                intervals: 0,
            });
        }
        if upper < lower {
            let estimate = self.integrate_with_breakpoints(f, upper, lower, breakpoints)?;
            return Ok(Estimate {
                value: -estimate.value,
                ..estimate
            });
        }

        let mut edges = Vec::with_capacity(breakpoints.len() + 2);
        edges.push(lower);
        let mut inner: Vec<f64> = breakpoints
            .iter()
            .copied()
            .filter(|&x| x > lower && x < upper)
            .collect();
        inner.sort_by(f64::total_cmp);
        inner.dedup();
        edges.extend(inner);
        edges.push(upper);

        let mut intervals = edges
            .windows(2)
            .map(|pair| gauss_kronrod(&mut f, pair[0], pair[1]))
            .collect::<Result<Vec<_>, _>>()?;

        loop {
            let value: f64 = intervals.iter().map(|interval| interval.value).sum();
            let error: f64 = intervals.iter().map(|interval| interval.error).sum();
            let tolerance = self.abs_tol.max(self.rel_tol * value.abs());
            if error <= tolerance {
                return Ok(Estimate {
                    value,
                    error,
                    intervals: intervals.len(),
                });
            }
            let not_converged = IntegrationError::NonIntegrable {
                lower,
                upper,
                estimated_error: error,
                tolerance,
            };
            if intervals.len() >= self.max_intervals {
                return Err(not_converged);
            }
            let worst = intervals
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| a.error.total_cmp(&b.error))
                .map(|(idx, _)| idx)
                .ok_or(not_converged)?;
            let interval = intervals.swap_remove(worst);
            let middle = 0.5 * (interval.lower + interval.upper);
            if middle <= interval.lower || middle >= interval.upper {
                // Bisection no longer representable in floating point.
                return Err(not_converged);
            }
            intervals.push(gauss_kronrod(&mut f, interval.lower, middle)?);
            intervals.push(gauss_kronrod(&mut f, middle, interval.upper)?);
        }
    }
}

/// Apply the 7/15-point Gauss–Kronrod pair on `[lower, upper]`.
fn gauss_kronrod<F>(f: &mut F, lower: f64, upper: f64) -> Result<Interval, IntegrationError>
where
    F: FnMut(f64) -> Result<f64, IntegrationError>,
{
    let center = 0.5 * (lower + upper);
    let half = 0.5 * (upper - lower);
    let mut sample = |x: f64| -> Result<f64, IntegrationError> {
        let value = f(x)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(IntegrationError::NonFiniteIntegrand { position: x })
        }
    };

    let f_center = sample(center)?;
    let mut kronrod = WGK[7] * f_center;
    let mut gauss = WG[3] * f_center;
    for (j, (&node, &weight)) in XGK.iter().zip(WGK.iter()).take(7).enumerate() {
        let offset = half * node;
        let pair = sample(center - offset)? + sample(center + offset)?;
        kronrod += weight * pair;
        if j % 2 == 1 {
            gauss += WG[j / 2] * pair;
        }
    }

    Ok(Interval {
        lower,
        upper,
        value: kronrod * half,
        error: ((kronrod - gauss) * half).abs(),
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn polynomials_are_integrated_exactly() {
        let quadrature = Quadrature::default();
        let estimate = quadrature
            .integrate(|x| Ok(3.0 * x * x - 2.0 * x + 1.0), -1.0, 2.0)
            .expect("polynomial converges");
        // x³ - x² + x from -1 to 2.
        assert_relative_eq!(estimate.value, 6.0 - (-3.0), epsilon = 1e-12);
        assert_eq!(estimate.intervals, 1);
    }

    #[test]
    fn equal_bounds_skip_evaluation() {
        let estimate = Quadrature::default()
            .integrate(|_| panic!("integrand must not be sampled"), 1.5, 1.5)
            .expect("empty range");
        assert_eq!(estimate.value, 0.0);
    }

    #[test]
    fn swapped_bounds_negate() {
        let quadrature = Quadrature::default();
        let forward = quadrature.integrate(|x| Ok(x.exp()), 0.0, 1.0).expect("ok");
        let backward = quadrature.integrate(|x| Ok(x.exp()), 1.0, 0.0).expect("ok");
        assert_relative_eq!(forward.value, -backward.value, epsilon = 1e-15);
        assert_relative_eq!(forward.value, std::f64::consts::E - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn kinked_integrand_converges_by_subdivision() {
        let estimate = Quadrature::default()
            .integrate(|x| Ok((x - 0.3).abs()), 0.0, 1.0)
            .expect("kink converges");
        assert_relative_eq!(estimate.value, 0.045 + 0.245, epsilon = 1e-8);
        assert!(estimate.intervals > 1);
    }

    #[test]
    fn breakpoints_resolve_kinks_immediately() {
        let estimate = Quadrature::default()
            .integrate_with_breakpoints(|x| Ok((x - 0.3).abs()), 0.0, 1.0, &[0.3, 5.0, -1.0])
            .expect("kink converges");
        assert_relative_eq!(estimate.value, 0.29, epsilon = 1e-14);
        assert_eq!(estimate.intervals, 2);
    }

    #[test]
    fn singular_integrand_exhausts_budget() {
        let quadrature = Quadrature {
            max_intervals: 20,
            ..Quadrature::default()
        };
        let error = quadrature
            .integrate(|x| Ok(1.0 / x.abs().max(1e-300)), -1.0, 1.0)
            .expect_err("divergent integral");
        assert!(matches!(error, IntegrationError::NonIntegrable { .. }));
    }

    #[test]
    fn non_finite_samples_are_reported() {
        let error = Quadrature::default()
            .integrate(|x| Ok(if x > 0.5 { f64::NAN } else { x }), 0.0, 1.0)
            .expect_err("NaN rejected");
        assert!(matches!(error, IntegrationError::NonFiniteIntegrand { .. }));
    }

    #[test]
    fn integrand_errors_propagate() {
        let error = Quadrature::default()
            .integrate(|x| Err(IntegrationError::ZeroStiffness { position: x }), 0.0, 1.0)
            .expect_err("integrand error propagates");
        assert!(matches!(error, IntegrationError::ZeroStiffness { .. }));
    }
}
