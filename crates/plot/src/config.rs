/// Labels for [`plot_mach_profile`](crate::plot_mach_profile).
///
/// Construct with [`MachPlotConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```
/// use symgas_plot::MachPlotConfig;
///
/// let config = MachPlotConfig::new().title("Test section").x_label("x [m]");
/// assert_eq!(config.y_label, "Mach number M");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachPlotConfig {
    pub title: Option<String>,
    pub x_label: String,
    pub y_label: String,
}

impl MachPlotConfig {
    /// Creates a config with the default title and axis labels.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: Some("Mach number profile".to_owned()),
            x_label: "Station".to_owned(),
            y_label: "Mach number M".to_owned(),
        }
    }

    /// Sets the figure title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Removes the figure title.
    #[must_use]
    pub fn untitled(mut self) -> Self {
        self.title = None;
        self
    }

    /// Sets the x-axis label.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    /// Sets the y-axis label.
    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }
}

impl Default for MachPlotConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Labels for [`plot_pressure_temperature_profiles`](crate::plot_pressure_temperature_profiles).
///
/// Defaults: title `"Pressure and temperature profiles"`, x label
/// `"Station"`, and axis labels `"Pressure [Pa]"` and `"Temperature [K]"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressureTemperaturePlotConfig {
    pub title: Option<String>,
    pub x_label: String,
    pub pressure_label: String,
    pub temperature_label: String,
}

impl PressureTemperaturePlotConfig {
    /// Creates a config with the default title and axis labels.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: Some("Pressure and temperature profiles".to_owned()),
            x_label: "Station".to_owned(),
            pressure_label: "Pressure [Pa]".to_owned(),
            temperature_label: "Temperature [K]".to_owned(),
        }
    }

    /// Sets the figure title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Removes the figure title.
    #[must_use]
    pub fn untitled(mut self) -> Self {
        self.title = None;
        self
    }

    /// Sets the shared x-axis label.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    /// Sets the pressure axis label.
    #[must_use]
    pub fn pressure_label(mut self, label: impl Into<String>) -> Self {
        self.pressure_label = label.into();
        self
    }

    /// Sets the temperature axis label.
    #[must_use]
    pub fn temperature_label(mut self, label: impl Into<String>) -> Self {
        self.temperature_label = label.into();
        self
    }
}

impl Default for PressureTemperaturePlotConfig {
    fn default() -> Self {
        Self::new()
    }
}
