//! Elastic constants of the wing-box material.

use uom::si::{
    f64::Pressure,
    pressure::{gigapascal, pascal, Conversion as PressureConversion, Unit as PressureUnit},
};

/// Isotropic material shared by every wall of the wing box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Elastic (Young's) modulus.
    pub elastic_modulus: Pressure,
    /// Shear modulus.
    pub shear_modulus: Pressure,
}

impl Material {
    /// Create a material from moduli expressed in the pressure unit `T`.
    ///
    /// # Examples
    /// ```
    /// use uom::si::pressure::gigapascal;
    /// use wingbox::Material;
    ///
    /// let steel = Material::new::<gigapascal>(200.0, 79.3);
    /// assert!((steel.elastic_modulus_pa() - 200.0e9).abs() < 1.0);
    /// ```
    #[must_use]
    pub fn new<T: PressureUnit + PressureConversion<f64>>(
        elastic_modulus: f64,
        shear_modulus: f64,
    ) -> Self {
        Self {
            elastic_modulus: Pressure::new::<T>(elastic_modulus),
            shear_modulus: Pressure::new::<T>(shear_modulus),
        }
    }

    /// Elastic modulus in pascals.
    #[must_use]
    pub fn elastic_modulus_pa(&self) -> f64 {
        self.elastic_modulus.get::<pascal>()
    }

    /// Shear modulus in pascals.
    #[must_use]
    pub fn shear_modulus_pa(&self) -> f64 {
        self.shear_modulus.get::<pascal>()
    }
}

impl Default for Material {
    /// Wrought aluminium alloy typical of wing-box construction.
    fn default() -> Self {
        Self::new::<gigapascal>(72.4, 27.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::pressure::megapascal;

    use super::*;

    #[test]
    fn default_is_aluminium() {
        let material = Material::default();
        assert_relative_eq!(material.elastic_modulus_pa(), 72.4e9, max_relative = 1e-12);
        assert_relative_eq!(material.shear_modulus_pa(), 27.0e9, max_relative = 1e-12);
    }

    #[test]
    fn units_are_converted() {
        let material = Material::new::<megapascal>(70_000.0, 26_000.0);
        assert_relative_eq!(material.elastic_modulus_pa(), 70.0e9, max_relative = 1e-12);
        assert_relative_eq!(
            material.shear_modulus.get::<gigapascal>(),
            26.0,
            max_relative = 1e-12
        );
    }
}
