//! Query helpers for extracting data from finished runs.

use std::fmt::Write as _;

use sv_core::PhysicalConstants;
use sv_sim::{SimEventKind, SimRecord, VesselConfig};

use crate::error::{AppError, AppResult};

/// Summary of a run's time range and notable values.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub time_range: (f64, f64),
    pub record_count: usize,
    pub peak_water_temp_c: f64,
    pub peak_pressure_kpa: f64,
    pub peak_steam_mass_kg: f64,
    pub final_water_temp_c: f64,
    pub final_food_temp_c: f64,
    pub final_water_mass_kg: f64,
    pub boiling_onset_s: Option<f64>,
    pub venting_started_s: Option<f64>,
    /// Sensible heat taken up by the food over the run (kJ)
    pub food_heat_absorbed_kj: f64,
}

fn peak(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::NEG_INFINITY, f64::max)
}

/// Get run summary from a finished record.
pub fn get_run_summary(
    record: &SimRecord,
    config: &VesselConfig,
    constants: &PhysicalConstants,
) -> AppResult<RunSummary> {
    let (Some(first), Some(last)) = (record.first(), record.last()) else {
        return Err(AppError::InvalidInput("No records in run".to_string()));
    };

    let records = &record.records;
    let food_heat_absorbed_kj =
        config.food_mass_kg * constants.cp_food * (last.food_temp_c - config.food_temp_c) / 1000.0;

    Ok(RunSummary {
        time_range: (first.time_s, last.time_s),
        record_count: records.len(),
        peak_water_temp_c: peak(records.iter().map(|r| r.water_temp_c)),
        peak_pressure_kpa: peak(records.iter().map(|r| r.pressure_kpa)),
        peak_steam_mass_kg: peak(records.iter().map(|r| r.steam_mass_kg)),
        final_water_temp_c: last.water_temp_c,
        final_food_temp_c: last.food_temp_c,
        final_water_mass_kg: last.water_mass_kg,
        boiling_onset_s: record.event_time(SimEventKind::BoilingOnset),
        venting_started_s: record.event_time(SimEventKind::VentingStarted),
        food_heat_absorbed_kj,
    })
}

/// Render the five plotted series as CSV.
pub fn to_csv(record: &SimRecord) -> String {
    let mut csv = String::from("time_s,water_temp_c,food_temp_c,pressure_kpa,steam_mass_kg\n");
    for r in &record.records {
        // Writing to a String cannot fail.
        let _ = writeln!(
            csv,
            "{},{},{},{},{}",
            r.time_s, r.water_temp_c, r.food_temp_c, r.pressure_kpa, r.steam_mass_kg
        );
    }
    csv
}
