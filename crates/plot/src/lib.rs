//! Charts for isentropic nozzle profiles.
//!
//! [`plot_mach_profile`] and [`plot_pressure_temperature_profiles`] turn
//! station-indexed series into a [`Figure`]: titled panels of labeled,
//! styled series that can be inspected in tests or rendered on screen.
//!
//! # Features
//!
//! - `plot`: Enables [`Figure::show`] for displaying figures via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! # Example
//!
//! ```
//! use symgas_plot::{MachPlotConfig, plot_mach_profile};
//!
//! let x = [0.0, 0.5, 1.0];
//! let mach = [0.3, 1.0, 2.1];
//!
//! let figure = plot_mach_profile(&x, &mach, &MachPlotConfig::new()).unwrap();
//! assert_eq!(figure.title(), Some("Mach number profile"));
//! assert_eq!(figure.panels()[0].y_label(), "Mach number M");
//! ```

mod config;
mod error;
mod figure;
mod profiles;

#[cfg(feature = "plot")]
mod show;

pub use config::{MachPlotConfig, PressureTemperaturePlotConfig};
pub use error::PlotError;
pub use figure::{Figure, LineKind, Marker, Panel, Series, Style};
pub use profiles::{plot_mach_profile, plot_pressure_temperature_profiles};
