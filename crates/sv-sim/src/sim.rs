//! Simulation runner and result recording.

use crate::config::VesselConfig;
use crate::engine::Simulation;
use crate::error::SimResult;
use crate::events::{EventLog, SimEventKind};
use crate::record::{SimRecord, TimeSeriesRecord};

/// Progress snapshot handed to observers after every step.
#[derive(Clone, Debug, Default)]
pub struct SimProgress {
    pub step: usize,
    pub total_steps: usize,
    pub sim_time_s: f64,
    pub t_end_s: f64,
    pub fraction_complete: f64,
}

/// Run a vessel simulation to completion.
pub fn run_sim(config: &VesselConfig) -> SimResult<SimRecord> {
    run_sim_with_progress(config, None)
}

/// Run a vessel simulation, reporting progress after each step.
pub fn run_sim_with_progress(
    config: &VesselConfig,
    progress_cb: Option<&mut dyn FnMut(SimProgress)>,
) -> SimResult<SimRecord> {
    let sim = Simulation::new(config.clone())?;
    Ok(sim.run(progress_cb))
}

impl Simulation {
    /// Step from t = 0 until the duration is reached.
    ///
    /// Cannot fail: the configuration was validated on construction.
    pub fn run(&self, mut progress_cb: Option<&mut dyn FnMut(SimProgress)>) -> SimRecord {
        let cfg = self.config();
        let total_steps = cfg.step_count();
        tracing::info!(
            duration_s = cfg.duration_s,
            dt_s = cfg.dt_s,
            steps = total_steps,
            heater_power_w = cfg.heater_power_w,
            "vessel run started"
        );

        let mut state = self.initial_state();
        let mut records = Vec::with_capacity(total_steps);
        let mut events = EventLog::default();
        let mut pressure_clamped_steps = 0usize;

        for step in 0..total_steps {
            let t = self.time_at(step);
            let had_water = state.water_mass_kg > 0.0;
            let report = self.step(&mut state, t);

            if t >= cfg.heater_cutoff_s {
                events.note(SimEventKind::HeaterCutoff, t);
            }
            if report.evaporated_kg > 0.0 {
                events.note(SimEventKind::BoilingOnset, t);
            }
            if report.venting {
                events.note(SimEventKind::VentingStarted, t);
            }
            if had_water && state.water_mass_kg <= 0.0 {
                events.note(SimEventKind::WaterDepleted, t);
            }
            if report.pressure_clamped {
                if pressure_clamped_steps == 0 {
                    tracing::warn!(
                        time_s = t,
                        steam_mass_kg = state.steam_mass_kg,
                        "gas-law pressure below atmospheric, clamping"
                    );
                }
                pressure_clamped_steps += 1;
            }

            records.push(TimeSeriesRecord::snapshot(t, &state));

            if let Some(cb) = progress_cb.as_deref_mut() {
                cb(SimProgress {
                    step: step + 1,
                    total_steps,
                    sim_time_s: t + cfg.dt_s,
                    t_end_s: cfg.duration_s,
                    fraction_complete: (step + 1) as f64 / total_steps as f64,
                });
            }
        }

        tracing::info!(
            records = records.len(),
            water_temp_c = state.water_temp_c,
            steam_mass_kg = state.steam_mass_kg,
            "vessel run finished"
        );

        SimRecord {
            records,
            events: events.into_events(),
            pressure_clamped_steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_times_start_at_zero() {
        let cfg = VesselConfig {
            duration_s: 5.0,
            dt_s: 1.0,
            ..VesselConfig::default()
        };
        let record = run_sim(&cfg).unwrap();
        assert_eq!(record.times_s(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn invalid_config_fails_before_running() {
        let cfg = VesselConfig {
            duration_s: 0.0,
            ..VesselConfig::default()
        };
        assert!(run_sim(&cfg).is_err());
    }

    #[test]
    fn progress_reaches_completion() {
        let cfg = VesselConfig {
            duration_s: 10.0,
            dt_s: 1.0,
            ..VesselConfig::default()
        };
        let mut calls = 0usize;
        let mut last = SimProgress::default();
        let mut cb = |p: SimProgress| {
            calls += 1;
            last = p;
        };
        run_sim_with_progress(&cfg, Some(&mut cb)).unwrap();
        assert_eq!(calls, 10);
        assert_eq!(last.step, 10);
        assert_eq!(last.total_steps, 10);
        assert!((last.fraction_complete - 1.0).abs() < 1e-12);
    }

    #[test]
    fn heater_cutoff_event_is_recorded() {
        let cfg = VesselConfig {
            duration_s: 20.0,
            dt_s: 1.0,
            heater_cutoff_s: 7.5,
            ..VesselConfig::default()
        };
        let record = run_sim(&cfg).unwrap();
        assert_eq!(record.event_time(SimEventKind::HeaterCutoff), Some(8.0));
        assert_eq!(record.event_time(SimEventKind::BoilingOnset), None);
    }
}
