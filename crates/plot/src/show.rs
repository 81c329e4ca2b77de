//! Native display of figures via egui.

use eframe::egui;
use egui_plot::{Legend, Line, LineStyle, MarkerShape, Plot, PlotPoints, Points};

use crate::{Figure, LineKind, Marker, Panel, Series};

impl Figure {
    /// Opens a blocking egui window displaying the figure.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = self.title().unwrap_or("symgas").to_owned();
        log::debug!("showing `{title}` with {} panel(s)", self.panels().len());

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| Ok(Box::new(FigureApp { figure: self }))),
        )
    }
}

/// The egui [`eframe::App`] that renders a figure.
struct FigureApp {
    figure: Figure,
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(title) = self.figure.title() {
                ui.heading(title);
            }

            let panels = self.figure.panels();
            let spacing = ui.spacing().item_spacing.y;
            #[allow(clippy::cast_precision_loss)]
            let height = (ui.available_height() - spacing * panels.len() as f32)
                / panels.len().max(1) as f32;

            for (index, panel) in panels.iter().enumerate() {
                let mut plot = Plot::new(("figure_panel", index))
                    .height(height)
                    .legend(Legend::default())
                    .x_axis_label(panel.x_label())
                    .y_axis_label(panel.y_label());
                if self.figure.is_x_linked() {
                    plot = plot.link_axis("figure_x", [true, false]);
                }
                show_panel(ui, plot, panel);
            }
        });
    }
}

fn show_panel(ui: &mut egui::Ui, plot: Plot, panel: &Panel) {
    plot.show(ui, |plot_ui| {
        for series in panel.series() {
            plot_ui.line(line(series));
            if let Some(marker) = series.style().marker {
                plot_ui.points(points(series, marker));
            }
        }
    });
}

fn plot_points(series: &Series) -> PlotPoints {
    series.points().iter().copied().collect()
}

fn line(series: &Series) -> Line {
    let line = Line::new(plot_points(series)).name(series.name());
    match series.style().line {
        LineKind::Solid => line,
        LineKind::Dashed => line.style(LineStyle::dashed_loose()),
    }
}

fn points(series: &Series, marker: Marker) -> Points {
    let shape = match marker {
        Marker::Circle => MarkerShape::Circle,
        Marker::Square => MarkerShape::Square,
    };
    Points::new(plot_points(series))
        .shape(shape)
        .radius(3.0)
        .name(series.name())
}
