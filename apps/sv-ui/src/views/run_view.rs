use sv_app::{RunProgressEvent, RunStage, RunSummary};
use sv_sim::SimEvent;

/// Run inputs: the two user-facing parameters plus an optional config file.
pub struct RunView {
    pub duration_min: f64,
    pub dt_s: f64,
    pub config_path: String,
}

impl Default for RunView {
    fn default() -> Self {
        Self {
            duration_min: 20.0,
            dt_s: 1.0,
            config_path: String::new(),
        }
    }
}

#[derive(Default)]
pub struct RunActions {
    pub start_run: bool,
}

impl RunView {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        running: bool,
        progress: Option<&RunProgressEvent>,
        summary: Option<&RunSummary>,
        events: &[SimEvent],
        status: Option<&str>,
    ) -> RunActions {
        let mut actions = RunActions::default();

        ui.heading("Run");
        ui.separator();

        egui::Grid::new("run_inputs").num_columns(2).show(ui, |ui| {
            ui.label("Duration (min):");
            ui.add(
                egui::DragValue::new(&mut self.duration_min)
                    .speed(0.5)
                    .range(0.1..=24.0 * 60.0),
            );
            ui.end_row();

            ui.label("Time step (s):");
            ui.add(
                egui::DragValue::new(&mut self.dt_s)
                    .speed(0.05)
                    .range(0.01..=60.0),
            );
            ui.end_row();

            ui.label("Config file:");
            ui.add(egui::TextEdit::singleline(&mut self.config_path).hint_text("built-in vessel"));
            ui.end_row();
        });

        ui.add_space(8.0);
        ui.add_enabled_ui(!running, |ui| {
            if ui.button("Run Simulation").clicked() {
                actions.start_run = true;
            }
        });

        if let Some(event) = progress {
            match (&event.stage, &event.sim) {
                (RunStage::Simulating, Some(p)) => {
                    ui.add(
                        egui::ProgressBar::new(p.fraction_complete as f32)
                            .show_percentage()
                            .text(format!("t = {:.0} / {:.0} s", p.sim_time_s, p.t_end_s)),
                    );
                }
                (stage, _) => {
                    ui.label(stage.label());
                }
            }
        }

        if let Some(msg) = status {
            ui.add_space(4.0);
            ui.label(msg);
        }

        if let Some(s) = summary {
            ui.add_space(8.0);
            ui.separator();
            ui.strong("Summary");
            egui::Grid::new("run_summary").num_columns(2).show(ui, |ui| {
                ui.label("Time points");
                ui.label(s.record_count.to_string());
                ui.end_row();
                ui.label("Final water");
                ui.label(format!("{:.3} °C", s.final_water_temp_c));
                ui.end_row();
                ui.label("Final food");
                ui.label(format!("{:.3} °C", s.final_food_temp_c));
                ui.end_row();
                ui.label("Water left");
                ui.label(format!("{:.4} kg", s.final_water_mass_kg));
                ui.end_row();
                ui.label("Peak pressure");
                ui.label(format!("{:.3} kPa", s.peak_pressure_kpa));
                ui.end_row();
                ui.label("Peak steam");
                ui.label(format!("{:.5} kg", s.peak_steam_mass_kg));
                ui.end_row();
                ui.label("Food heat");
                ui.label(format!("{:.2} kJ", s.food_heat_absorbed_kj));
                ui.end_row();
            });

            if !events.is_empty() {
                ui.add_space(4.0);
                ui.strong("Phase events");
                for e in events {
                    ui.label(format!("{:.1} min  {}", e.time_s / 60.0, e.kind.label()));
                }
            }
        }

        actions
    }
}
