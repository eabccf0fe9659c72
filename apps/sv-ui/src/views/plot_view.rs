use egui_plot::{Legend, Line, Plot, PlotPoints};
use sv_sim::SimRecord;

/// Two stacked charts against elapsed minutes: temperatures on top,
/// pressure and steam mass below.
#[derive(Default)]
pub struct PlotView {
    water_temp: Vec<[f64; 2]>,
    food_temp: Vec<[f64; 2]>,
    pressure: Vec<[f64; 2]>,
    steam_mass: Vec<[f64; 2]>,
}

fn series(times_min: &[f64], values: Vec<f64>) -> Vec<[f64; 2]> {
    times_min
        .iter()
        .zip(values)
        .map(|(&t, v)| [t, v])
        .collect()
}

impl PlotView {
    pub fn set_record(&mut self, record: &SimRecord) {
        let t = record.times_min();
        self.water_temp = series(&t, record.water_temps_c());
        self.food_temp = series(&t, record.food_temps_c());
        self.pressure = series(&t, record.pressures_kpa());
        self.steam_mass = series(&t, record.steam_masses_kg());
    }

    pub fn is_empty(&self) -> bool {
        self.water_temp.is_empty()
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        if self.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("Run a simulation to see results");
            });
            return;
        }

        let spacing = ui.spacing().item_spacing.y;
        let plot_height = ((ui.available_height() - spacing) / 2.0).max(120.0);

        Plot::new("temperature_plot")
            .height(plot_height)
            .legend(Legend::default())
            .x_axis_label("Time (minutes)")
            .y_axis_label("Temperature (°C)")
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from(self.water_temp.clone()))
                        .name("Water Temperature (°C)"),
                );
                plot_ui.line(
                    Line::new(PlotPoints::from(self.food_temp.clone()))
                        .name("Food Temperature (°C)"),
                );
            });

        Plot::new("pressure_plot")
            .height(plot_height)
            .legend(Legend::default())
            .x_axis_label("Time (minutes)")
            .y_axis_label("Pressure / Steam Mass")
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::from(self.pressure.clone()))
                        .name("Vessel Pressure (kPa)"),
                );
                plot_ui.line(
                    Line::new(PlotPoints::from(self.steam_mass.clone())).name("Steam Mass (kg)"),
                );
            });
    }
}
