//! Numeric isentropic profiles along a quasi-1D nozzle.
//!
//! An [`IsentropicNozzle`] binds a specific heat ratio `γ` into the symbolic
//! relations from [`symgas_symbolic`], compiles them once, and evaluates
//! them over Mach number distributions. Dimensional profiles scale the
//! ratios by stagnation conditions given as `uom` quantities.
//!
//! ```
//! use symgas_nozzle::IsentropicNozzle;
//! use uom::si::{
//!     f64::{Pressure, ThermodynamicTemperature},
//!     pressure::pascal,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let nozzle = IsentropicNozzle::new(1.4).unwrap();
//! let profiles = nozzle
//!     .dimensional_profiles(
//!         &[0.2, 1.0, 2.0],
//!         ThermodynamicTemperature::new::<kelvin>(300.0),
//!         Pressure::new::<pascal>(101_325.0),
//!         None,
//!     )
//!     .unwrap();
//!
//! assert_eq!(profiles.len(), 3);
//! assert!(profiles.density.is_none());
//! ```

mod error;
mod inversion;
mod nozzle;
mod profiles;
mod stagnation;

pub mod units;

pub use error::NozzleError;
pub use inversion::{Branch, InversionConfig};
pub use nozzle::IsentropicNozzle;
pub use profiles::DimensionalProfiles;
pub use stagnation::{AIR_GAS_CONSTANT, air_gas_constant, ideal_gas_density};
pub use symgas_symbolic::RatioKind;
