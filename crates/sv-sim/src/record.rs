//! Time series recording.

use serde::{Deserialize, Serialize};
use sv_core::units;

use crate::events::{SimEvent, SimEventKind};
use crate::state::VesselState;

/// One snapshot per step, taken after all updates of that step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesRecord {
    /// Elapsed time at the start of the step (s)
    pub time_s: f64,
    pub water_temp_c: f64,
    pub food_temp_c: f64,
    /// Vessel pressure before venting (kPa)
    pub pressure_kpa: f64,
    pub steam_mass_kg: f64,
    pub water_mass_kg: f64,
}

impl TimeSeriesRecord {
    pub fn snapshot(time_s: f64, state: &VesselState) -> Self {
        Self {
            time_s,
            water_temp_c: state.water_temp_c,
            food_temp_c: state.food_temp_c,
            pressure_kpa: units::pa_to_kpa(state.pressure_pa),
            steam_mass_kg: state.steam_mass_kg,
            water_mass_kg: state.water_mass_kg,
        }
    }
}

/// Result of a finished run, in time order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimRecord {
    pub records: Vec<TimeSeriesRecord>,
    /// First occurrence of each phase event
    pub events: Vec<SimEvent>,
    /// Steps whose gas-law pressure fell below atmospheric and was clamped
    pub pressure_clamped_steps: usize,
}

impl SimRecord {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&TimeSeriesRecord> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&TimeSeriesRecord> {
        self.records.last()
    }

    /// Time of the first event of the given kind, if it happened.
    pub fn event_time(&self, kind: SimEventKind) -> Option<f64> {
        self.events
            .iter()
            .find(|e| e.kind == kind)
            .map(|e| e.time_s)
    }

    fn column(&self, f: impl Fn(&TimeSeriesRecord) -> f64) -> Vec<f64> {
        self.records.iter().map(f).collect()
    }

    pub fn times_s(&self) -> Vec<f64> {
        self.column(|r| r.time_s)
    }

    pub fn times_min(&self) -> Vec<f64> {
        self.column(|r| units::s_to_minutes(r.time_s))
    }

    pub fn water_temps_c(&self) -> Vec<f64> {
        self.column(|r| r.water_temp_c)
    }

    pub fn food_temps_c(&self) -> Vec<f64> {
        self.column(|r| r.food_temp_c)
    }

    pub fn pressures_kpa(&self) -> Vec<f64> {
        self.column(|r| r.pressure_kpa)
    }

    pub fn steam_masses_kg(&self) -> Vec<f64> {
        self.column(|r| r.steam_mass_kg)
    }

    pub fn water_masses_kg(&self) -> Vec<f64> {
        self.column(|r| r.water_mass_kg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(water_temp_c: f64, pressure_pa: f64) -> VesselState {
        VesselState {
            water_temp_c,
            food_temp_c: 10.0,
            water_mass_kg: 1.0,
            steam_mass_kg: 0.0,
            pressure_pa,
        }
    }

    #[test]
    fn snapshot_converts_pressure_to_kpa() {
        let rec = TimeSeriesRecord::snapshot(3.0, &state(20.0, 101_325.0));
        assert_eq!(rec.time_s, 3.0);
        assert!((rec.pressure_kpa - 101.325).abs() < 1e-12);
    }

    #[test]
    fn columns_have_equal_length() {
        let record = SimRecord {
            records: vec![
                TimeSeriesRecord::snapshot(0.0, &state(20.0, 101_325.0)),
                TimeSeriesRecord::snapshot(60.0, &state(21.0, 101_325.0)),
            ],
            ..SimRecord::default()
        };
        assert_eq!(record.times_s(), vec![0.0, 60.0]);
        assert_eq!(record.times_min(), vec![0.0, 1.0]);
        assert_eq!(record.water_temps_c(), vec![20.0, 21.0]);
        assert_eq!(record.food_temps_c().len(), 2);
        assert_eq!(record.pressures_kpa().len(), 2);
        assert_eq!(record.steam_masses_kg().len(), 2);
    }
}
