use crate::{
    Figure, LineKind, Marker, Panel, PlotError, Series, Style,
    config::{MachPlotConfig, PressureTemperaturePlotConfig},
};

/// Plots a Mach number distribution against station position.
///
/// Produces one panel with a solid line and circle markers.
///
/// # Errors
///
/// Returns [`PlotError::LengthMismatch`] if `mach` and `x` differ in length.
pub fn plot_mach_profile(
    x: &[f64],
    mach: &[f64],
    config: &MachPlotConfig,
) -> Result<Figure, PlotError> {
    check_length("mach", x, mach)?;
    log::debug!("plotting Mach profile over {} stations", x.len());

    let style = Style {
        line: LineKind::Solid,
        marker: Some(Marker::Circle),
    };
    let panel = Panel::new(
        config.x_label.clone(),
        config.y_label.clone(),
        vec![Series::new("M", x, mach, style)],
    );

    Ok(Figure::new(config.title.clone(), vec![panel], false))
}

/// Plots static pressure and temperature against station position.
///
/// Pressure and temperature differ in scale by orders of magnitude, so each
/// gets its own panel; the two panels share a linked x-axis. Pressure is a
/// solid line with circle markers, temperature a dashed line with squares.
///
/// # Errors
///
/// Returns [`PlotError::LengthMismatch`] if `pressure` or `temperature`
/// differs in length from `x`.
///
/// # Example
///
/// ```
/// use symgas_plot::{LineKind, PressureTemperaturePlotConfig, plot_pressure_temperature_profiles};
///
/// let figure = plot_pressure_temperature_profiles(
///     &[0.0, 1.0],
///     &[95_000.0, 40_000.0],
///     &[295.0, 240.0],
///     &PressureTemperaturePlotConfig::new(),
/// )
/// .unwrap();
///
/// let [pressure, temperature] = figure.panels() else { unreachable!() };
/// assert_eq!(pressure.y_label(), "Pressure [Pa]");
/// assert_eq!(temperature.series()[0].style().line, LineKind::Dashed);
/// ```
pub fn plot_pressure_temperature_profiles(
    x: &[f64],
    pressure: &[f64],
    temperature: &[f64],
    config: &PressureTemperaturePlotConfig,
) -> Result<Figure, PlotError> {
    check_length("pressure", x, pressure)?;
    check_length("temperature", x, temperature)?;
    log::debug!(
        "plotting pressure and temperature profiles over {} stations",
        x.len()
    );

    let pressure_panel = Panel::new(
        config.x_label.clone(),
        config.pressure_label.clone(),
        vec![Series::new(
            "p",
            x,
            pressure,
            Style {
                line: LineKind::Solid,
                marker: Some(Marker::Circle),
            },
        )],
    );
    let temperature_panel = Panel::new(
        config.x_label.clone(),
        config.temperature_label.clone(),
        vec![Series::new(
            "T",
            x,
            temperature,
            Style {
                line: LineKind::Dashed,
                marker: Some(Marker::Square),
            },
        )],
    );

    Ok(Figure::new(
        config.title.clone(),
        vec![pressure_panel, temperature_panel],
        true,
    ))
}

fn check_length(series: &'static str, x: &[f64], y: &[f64]) -> Result<(), PlotError> {
    if x.len() == y.len() {
        Ok(())
    } else {
        Err(PlotError::LengthMismatch {
            series,
            expected: x.len(),
            found: y.len(),
        })
    }
}
