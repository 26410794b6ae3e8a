//! Design limits on the tip response.

use serde::{Deserialize, Serialize};

/// Allowed tip deflection and twist.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignLimits {
    /// Largest tip deflection as a fraction of the full wing span (twice the half span).
    pub max_tip_deflection_ratio: f64,
    /// Largest tip twist magnitude in degrees.
    pub max_tip_twist_deg: f64,
}

impl Default for DesignLimits {
    fn default() -> Self {
        Self {
            max_tip_deflection_ratio: 0.15,
            max_tip_twist_deg: 10.0,
        }
    }
}

/// Outcome of [`DesignLimits::check`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ConstraintReport {
    /// Magnitude of the tip deflection in metres.
    pub tip_deflection: f64,
    /// Allowed tip deflection in metres.
    pub allowed_deflection: f64,
    /// Magnitude of the tip twist in degrees.
    pub tip_twist_deg: f64,
    /// Allowed tip twist in degrees.
    pub allowed_twist_deg: f64,
}

impl ConstraintReport {
    /// Whether the deflection limit holds.
    #[must_use]
    pub fn deflection_ok(&self) -> bool {
        self.tip_deflection <= self.allowed_deflection
    }

    /// Whether the twist limit holds.
    #[must_use]
    pub fn twist_ok(&self) -> bool {
        self.tip_twist_deg <= self.allowed_twist_deg
    }

    /// Whether every limit holds.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.deflection_ok() && self.twist_ok()
    }
}

impl DesignLimits {
    /// Compare a tip response against the limits.
    ///
    /// `half_span` is the root-to-tip length in metres, `tip_deflection` is in metres and
    /// `tip_twist` in radians. Signs are ignored.
    ///
    /// # Examples
    /// ```
    /// use wingbox::DesignLimits;
    ///
    /// let report = DesignLimits::default().check(10.0, -2.5, 0.1);
    /// assert_eq!(report.allowed_deflection, 3.0);
    /// assert!(report.passed());
    /// ```
    #[must_use]
    pub fn check(&self, half_span: f64, tip_deflection: f64, tip_twist: f64) -> ConstraintReport {
        ConstraintReport {
            tip_deflection: tip_deflection.abs(),
            allowed_deflection: self.max_tip_deflection_ratio * 2.0 * half_span,
            tip_twist_deg: tip_twist.to_degrees().abs(),
            allowed_twist_deg: self.max_tip_twist_deg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_use_full_span_and_degrees() {
        let limits = DesignLimits::default();
        let report = limits.check(27.47721, -8.5, 0.0);
        assert!((report.allowed_deflection - 0.3 * 27.47721).abs() < 1e-12);
        assert!(!report.deflection_ok());
        assert!(report.twist_ok());
        assert!(!report.passed());

        let report = limits.check(27.47721, 1.0, -11.0_f64.to_radians());
        assert!(report.deflection_ok());
        assert!(!report.twist_ok());
        assert!((report.tip_twist_deg - 11.0).abs() < 1e-12);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let limits: DesignLimits =
            serde_json::from_str(r#"{"max_tip_twist_deg": 5.0}"#).expect("valid json");
        assert_eq!(limits.max_tip_deflection_ratio, 0.15);
        assert_eq!(limits.max_tip_twist_deg, 5.0);
    }
}
