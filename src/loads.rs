//! Spanwise distributions of bending moment and torque.
//!
//! Loads are produced by a separate aerodynamic analysis; this module only describes how
//! they are sampled along the span.

use serde::{Deserialize, Serialize};

use crate::errors::LoadError;

/// A load that can be evaluated at any span position.
pub trait SpanwiseLoad {
    /// Value of the load at `span_position` (metres from the root).
    fn at(&self, span_position: f64) -> f64;
}

impl<F> SpanwiseLoad for F
where
    F: Fn(f64) -> f64,
{
    fn at(&self, span_position: f64) -> f64 {
        self(span_position)
    }
}

/// Load sampled at discrete span positions and linearly interpolated between them.
///
/// Outside the sampled range the nearest end value is held. A NaN position gives NaN.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>")]
pub struct TabulatedLoad {
    /// `(span position, value)` pairs sorted by span position.
    samples: Vec<(f64, f64)>,
}

impl TabulatedLoad {
    /// Build a table from `(span position, value)` samples.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Empty`] for an empty table, [`LoadError::NonFinite`] for NaN
    /// or infinite entries and [`LoadError::Unsorted`] when span positions do not
    /// strictly increase.
    ///
    /// # Examples
    /// ```
    /// use wingbox::{SpanwiseLoad, TabulatedLoad};
    ///
    /// let moment = TabulatedLoad::new(vec![(0.0, 1.0e6), (10.0, 0.0)]).expect("valid table");
    /// assert_eq!(moment.at(2.5), 7.5e5);
    /// assert_eq!(moment.at(12.0), 0.0);
    /// ```
    pub fn new(samples: Vec<(f64, f64)>) -> Result<Self, LoadError> {
        if samples.is_empty() {
            return Err(LoadError::Empty);
        }
        if let Some(&(span_position, value)) = samples
            .iter()
            .find(|(y, value)| !(y.is_finite() && value.is_finite()))
        {
            return Err(LoadError::NonFinite {
                span_position,
                value,
            });
        }
        if let Some(pair) = samples.windows(2).find(|pair| pair[1].0 <= pair[0].0) {
            return Err(LoadError::Unsorted {
                previous: pair[0].0,
                next: pair[1].0,
            });
        }
        Ok(Self { samples })
    }
}

impl SpanwiseLoad for TabulatedLoad {
    fn at(&self, span_position: f64) -> f64 {
        if span_position.is_nan() {
            return f64::NAN;
        }
        let first = self.samples[0];
        let last = self.samples[self.samples.len() - 1];
        if span_position <= first.0 {
            return first.1;
        }
        if span_position >= last.0 {
            return last.1;
        }
        let upper = self
            .samples
            .partition_point(|&(y, _)| y <= span_position);
        let (y0, v0) = self.samples[upper - 1];
        let (y1, v1) = self.samples[upper];
        v0 + (v1 - v0) * (span_position - y0) / (y1 - y0)
    }
}

impl TryFrom<Vec<[f64; 2]>> for TabulatedLoad {
    type Error = LoadError;

    fn try_from(rows: Vec<[f64; 2]>) -> Result<Self, Self::Error> {
        Self::new(rows.into_iter().map(|[y, value]| (y, value)).collect())
    }
}

impl From<TabulatedLoad> for Vec<[f64; 2]> {
    fn from(load: TabulatedLoad) -> Self {
        load.samples.into_iter().map(|(y, value)| [y, value]).collect()
    }
}

/// Polynomial in span position, `c₀ + c₁ y + c₂ y² + …`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolynomialLoad {
    /// Coefficients in increasing power order.
    pub coefficients: Vec<f64>,
}

impl PolynomialLoad {
    /// Create a polynomial from coefficients in increasing power order.
    #[must_use]
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }
}

impl SpanwiseLoad for PolynomialLoad {
    fn at(&self, span_position: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * span_position + c)
    }
}

/// Load description as it appears in a configuration file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadDistribution {
    /// Linearly interpolated table of `[span position, value]` rows.
    Tabulated(TabulatedLoad),
    /// Polynomial coefficients in increasing power order.
    Polynomial(PolynomialLoad),
}

impl SpanwiseLoad for LoadDistribution {
    fn at(&self, span_position: f64) -> f64 {
        match self {
            LoadDistribution::Tabulated(load) => load.at(span_position),
            LoadDistribution::Polynomial(load) => load.at(span_position),
        }
    }
}

impl Default for LoadDistribution {
    fn default() -> Self {
        LoadDistribution::Polynomial(PolynomialLoad::default())
    }
}
