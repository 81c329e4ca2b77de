use symgas_core::constraint::{ConstraintError, StrictlyPositive};
use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature},
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::{NozzleError, units::SpecificGasConstant};

/// Specific gas constant of dry air, J/kg·K.
pub const AIR_GAS_CONSTANT: f64 = 287.0;

/// Returns [`AIR_GAS_CONSTANT`] as a quantity.
#[must_use]
pub fn air_gas_constant() -> SpecificGasConstant {
    SpecificGasConstant::new::<joule_per_kilogram_kelvin>(AIR_GAS_CONSTANT)
}

/// Computes stagnation density from the ideal gas law, `ρ0 = p0 / (R·T0)`.
///
/// Profiles never derive a density on their own; pass the result to
/// [`IsentropicNozzle::dimensional_profiles`] to opt in.
///
/// # Errors
///
/// Returns [`NozzleError::InvalidStagnation`] if any input is not strictly
/// positive.
///
/// # Example
///
/// ```
/// use approx::assert_relative_eq;
/// use symgas_nozzle::{air_gas_constant, ideal_gas_density};
/// use uom::si::{
///     f64::{Pressure, ThermodynamicTemperature},
///     mass_density::kilogram_per_cubic_meter,
///     pressure::pascal,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let rho0 = ideal_gas_density(
///     ThermodynamicTemperature::new::<kelvin>(300.0),
///     Pressure::new::<pascal>(101_325.0),
///     air_gas_constant(),
/// )
/// .unwrap();
///
/// assert_relative_eq!(rho0.get::<kilogram_per_cubic_meter>(), 1.1768, epsilon = 1e-4);
/// ```
///
/// [`IsentropicNozzle::dimensional_profiles`]: crate::IsentropicNozzle::dimensional_profiles
pub fn ideal_gas_density(
    t0: ThermodynamicTemperature,
    p0: Pressure,
    gas_constant: SpecificGasConstant,
) -> Result<MassDensity, NozzleError> {
    check_positive("temperature", t0.value)?;
    check_positive("pressure", p0.value)?;
    check_positive("gas constant", gas_constant.value)?;

    Ok(p0 / (gas_constant * t0))
}

/// Rejects a stagnation value (in SI) that is not a finite positive number.
pub(crate) fn check_positive(quantity: &'static str, value: f64) -> Result<(), NozzleError> {
    let invalid = |source| NozzleError::InvalidStagnation {
        quantity,
        value,
        source,
    };

    StrictlyPositive::new(value).map_err(invalid)?;
    if value.is_infinite() {
        return Err(invalid(ConstraintError::NotFinite));
    }
    Ok(())
}
