use symgas_symbolic::RatioKind;
use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use crate::{IsentropicNozzle, NozzleError, nozzle::validate_mach, stagnation::check_positive};

/// Static flow properties along a Mach number distribution.
///
/// Every series is index-aligned with [`mach`](Self::mach).
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionalProfiles {
    /// Mach numbers, in the order given.
    pub mach: Vec<f64>,
    /// Static temperature `T = T0 · T/T0`.
    pub temperature: Vec<ThermodynamicTemperature>,
    /// Static pressure `p = p0 · p/p0`.
    pub pressure: Vec<Pressure>,
    /// Static density `ρ = ρ0 · ρ/ρ0`, present only when `ρ0` was supplied.
    pub density: Option<Vec<MassDensity>>,
    /// Area ratio `A/A*`, dimensionless.
    pub area_ratio: Vec<f64>,
}

impl DimensionalProfiles {
    /// Keys of the series that may be present, in output order.
    pub const KEYS: [&'static str; 5] = ["M", "T", "p", "rho", "A_Astar"];

    /// Returns the number of stations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mach.len()
    }

    /// Returns true if there are no stations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mach.is_empty()
    }

    /// Returns a series by key, in SI units (K, Pa, kg/m³).
    ///
    /// Keys are `"M"`, `"T"`, `"p"`, `"rho"`, and `"A_Astar"`. Returns `None`
    /// for an unknown key, and for `"rho"` when no density was computed.
    ///
    /// # Example
    ///
    /// ```
    /// use symgas_nozzle::IsentropicNozzle;
    /// use uom::si::{
    ///     f64::{Pressure, ThermodynamicTemperature},
    ///     pressure::pascal,
    ///     thermodynamic_temperature::kelvin,
    /// };
    ///
    /// let profiles = IsentropicNozzle::default()
    ///     .dimensional_profiles(
    ///         &[0.5, 1.5],
    ///         ThermodynamicTemperature::new::<kelvin>(500.0),
    ///         Pressure::new::<pascal>(2.0e5),
    ///         None,
    ///     )
    ///     .unwrap();
    ///
    /// assert_eq!(profiles.get("M"), Some(vec![0.5, 1.5]));
    /// assert!(profiles.get("rho").is_none());
    /// assert_eq!(profiles.keys().collect::<Vec<_>>(), ["M", "T", "p", "A_Astar"]);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Vec<f64>> {
        match key {
            "M" => Some(self.mach.clone()),
            "T" => Some(self.temperature.iter().map(|t| t.get::<kelvin>()).collect()),
            "p" => Some(self.pressure.iter().map(|p| p.get::<pascal>()).collect()),
            "rho" => self.density.as_ref().map(|density| {
                density
                    .iter()
                    .map(|rho| rho.get::<kilogram_per_cubic_meter>())
                    .collect()
            }),
            "A_Astar" => Some(self.area_ratio.clone()),
            _ => None,
        }
    }

    /// Iterates over the keys of the series that are present.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        Self::KEYS
            .into_iter()
            .filter(|key| *key != "rho" || self.density.is_some())
    }
}

impl IsentropicNozzle {
    /// Computes static temperature, pressure, optional density, and `A/A*`
    /// along a Mach number distribution.
    ///
    /// The Mach numbers may come in any order; no sorting is applied. All
    /// inputs are validated before anything is evaluated, and any failure
    /// aborts the whole call.
    ///
    /// # Errors
    ///
    /// - [`NozzleError::InvalidStagnation`] if `t0`, `p0`, or `rho0` is not
    ///   finite and strictly positive.
    /// - [`NozzleError::InvalidMach`] if any Mach number is negative or NaN.
    /// - [`NozzleError::AreaRatioAtRest`] if any Mach number is zero.
    /// - [`NozzleError::Evaluation`] if a relation produces a non-finite value.
    pub fn dimensional_profiles(
        &self,
        mach: &[f64],
        t0: ThermodynamicTemperature,
        p0: Pressure,
        rho0: Option<MassDensity>,
    ) -> Result<DimensionalProfiles, NozzleError> {
        check_positive("temperature", t0.value)?;
        check_positive("pressure", p0.value)?;
        if let Some(rho0) = rho0 {
            check_positive("density", rho0.value)?;
        }
        validate_mach(RatioKind::AreaRatio, mach)?;

        log::debug!(
            "evaluating {} stations for gamma = {} (density {})",
            mach.len(),
            self.gamma(),
            if rho0.is_some() { "included" } else { "omitted" },
        );

        let t0 = t0.get::<kelvin>();
        let temperature = self
            .evaluate_all(RatioKind::TemperatureRatio, mach)?
            .into_iter()
            .map(|ratio| ThermodynamicTemperature::new::<kelvin>(t0 * ratio))
            .collect();

        let pressure = self
            .evaluate_all(RatioKind::PressureRatio, mach)?
            .into_iter()
            .map(|ratio| p0 * ratio)
            .collect();

        let density = match rho0 {
            Some(rho0) => Some(
                self.evaluate_all(RatioKind::DensityRatio, mach)?
                    .into_iter()
                    .map(|ratio| rho0 * ratio)
                    .collect(),
            ),
            None => None,
        };

        Ok(DimensionalProfiles {
            mach: mach.to_vec(),
            temperature,
            pressure,
            density,
            area_ratio: self.evaluate_all(RatioKind::AreaRatio, mach)?,
        })
    }
}
