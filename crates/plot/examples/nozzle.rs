//! Interactive charts of air expanding through a converging–diverging nozzle.
//!
//! The nozzle area follows `A/A* = 1 + 6·(x − 0.5)²` on `x ∈ [0, 1]`, with the
//! throat at `x = 0.5`. The flow is subsonic upstream of the throat and
//! supersonic downstream.
//!
//! # Usage
//!
//! ```text
//! cargo run --example nozzle --features plot -- mach
//! cargo run --example nozzle --features plot -- pt
//! cargo run --example nozzle --features plot -- pt 1.3
//! ```
//!
//! # Modes
//!
//! - **mach [gamma]**: Mach number along the nozzle.
//! - **pt [gamma]**: Static pressure and temperature for stagnation
//!   conditions of 300 K and 1 atm.

use std::error::Error;

use symgas_nozzle::{Branch, InversionConfig, IsentropicNozzle};
use symgas_plot::{
    MachPlotConfig, PressureTemperaturePlotConfig, plot_mach_profile,
    plot_pressure_temperature_profiles,
};
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

const STATIONS: usize = 41;

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "mach".into());
    let gamma = std::env::args()
        .nth(2)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid gamma, expected a number such as 1.3");
            std::process::exit(1);
        })
        .unwrap_or(IsentropicNozzle::AIR_GAMMA);

    let nozzle = IsentropicNozzle::new(gamma)?;
    let (x, mach) = mach_distribution(&nozzle)?;

    match mode.as_str() {
        "mach" => {
            let config = MachPlotConfig::new().x_label("x / L");
            plot_mach_profile(&x, &mach, &config)?.show()?;
        }
        "pt" => {
            let profiles = nozzle.dimensional_profiles(
                &mach,
                ThermodynamicTemperature::new::<kelvin>(300.0),
                Pressure::new::<pascal>(101_325.0),
                None,
            )?;
            let pressure = profiles.get("p").unwrap_or_default();
            let temperature = profiles.get("T").unwrap_or_default();

            let config = PressureTemperaturePlotConfig::new().x_label("x / L");
            plot_pressure_temperature_profiles(&x, &pressure, &temperature, &config)?.show()?;
        }
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: nozzle [mach|pt] [gamma]");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Solves for the Mach number at evenly spaced stations.
fn mach_distribution(nozzle: &IsentropicNozzle) -> Result<(Vec<f64>, Vec<f64>), Box<dyn Error>> {
    let config = InversionConfig::default();
    let mut x = Vec::with_capacity(STATIONS);
    let mut mach = Vec::with_capacity(STATIONS);

    for i in 0..STATIONS {
        #[allow(clippy::cast_precision_loss)]
        let xi = i as f64 / (STATIONS - 1) as f64;
        let area_ratio = 1.0 + 6.0 * (xi - 0.5).powi(2);
        let branch = if xi <= 0.5 {
            Branch::Subsonic
        } else {
            Branch::Supersonic
        };

        x.push(xi);
        mach.push(nozzle.mach_from_area_ratio(area_ratio, branch, &config)?);
    }

    Ok((x, mach))
}
