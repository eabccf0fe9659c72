//! Integration test: heating, boiling, venting and cool-down phases.
//!
//! Two kilograms of water under a 10 kW burner boil after about a minute,
//! build steam until the lid lifts, and boil dry well before the heater
//! is withdrawn.

use sv_core::{Tolerances, nearly_equal};
use sv_sim::{SimEventKind, Simulation, VesselConfig, run_sim};

fn rolling_boil() -> VesselConfig {
    VesselConfig {
        duration_s: 1800.0,
        dt_s: 1.0,
        heater_power_w: 10_000.0,
        heater_cutoff_s: 1200.0,
        water_mass_kg: 2.0,
        ..VesselConfig::default()
    }
}

#[test]
fn no_steam_before_boiling() {
    let record = run_sim(&rolling_boil()).unwrap();
    let onset = record
        .records
        .iter()
        .position(|r| r.water_temp_c >= 100.0)
        .expect("water should reach boiling");
    assert!(onset > 0);

    for r in &record.records[..onset] {
        assert_eq!(r.steam_mass_kg, 0.0);
        assert!(nearly_equal(r.pressure_kpa, 101.325, Tolerances::default()));
    }
    assert!(record.records[onset].steam_mass_kg > 0.0);
    assert_eq!(
        record.event_time(SimEventKind::BoilingOnset),
        Some(record.records[onset].time_s)
    );
}

#[test]
fn water_temperature_rises_while_heated() {
    let cfg = rolling_boil();
    let record = run_sim(&cfg).unwrap();
    for pair in record.records.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if b.time_s < cfg.heater_cutoff_s && a.water_mass_kg > 0.0 {
            assert!(
                b.water_temp_c >= a.water_temp_c,
                "temperature fell at t={}",
                b.time_s
            );
        }
    }
}

#[test]
fn lid_vents_once_pressure_builds() {
    let cfg = rolling_boil();
    let record = run_sim(&cfg).unwrap();
    let boil = record.event_time(SimEventKind::BoilingOnset).unwrap();
    let vent = record
        .event_time(SimEventKind::VentingStarted)
        .expect("lid should lift");
    assert!(vent > boil);

    let sim = Simulation::new(cfg).unwrap();
    let threshold_kpa = sim.vent_threshold_pa() / 1000.0;
    let peak = record
        .pressures_kpa()
        .into_iter()
        .fold(f64::MIN, f64::max);
    assert!(peak > threshold_kpa);
}

#[test]
fn masses_stay_non_negative_and_water_runs_dry() {
    let record = run_sim(&rolling_boil()).unwrap();
    for r in &record.records {
        assert!(r.water_mass_kg >= 0.0);
        assert!(r.steam_mass_kg >= 0.0);
        assert!(r.pressure_kpa >= 101.325 - 1e-9);
    }
    let dry = record
        .event_time(SimEventKind::WaterDepleted)
        .expect("2 kg should boil off");
    assert!(dry < 1200.0);
    let water = record.water_masses_kg();
    assert_eq!(water.len(), record.len());
    assert!(water.windows(2).all(|w| w[1] <= w[0]));
    assert_eq!(water.last().copied(), Some(0.0));
}

#[test]
fn after_cutoff_water_holds_and_food_follows() {
    // Heater withdrawn long before boiling.
    let cfg = VesselConfig {
        duration_s: 300.0,
        heater_cutoff_s: 30.0,
        ..rolling_boil()
    };
    let record = run_sim(&cfg).unwrap();
    assert_eq!(record.event_time(SimEventKind::HeaterCutoff), Some(30.0));

    let after: Vec<_> = record
        .records
        .iter()
        .filter(|r| r.time_s >= cfg.heater_cutoff_s)
        .collect();
    let frozen = after[0].water_temp_c;
    assert!(frozen < 100.0);

    let tol = Tolerances {
        abs: 1e-9,
        rel: 1e-12,
    };
    for pair in after.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(nearly_equal(b.water_temp_c, frozen, tol));
        let gap_a = (a.water_temp_c - a.food_temp_c).abs();
        let gap_b = (b.water_temp_c - b.food_temp_c).abs();
        assert!(gap_b <= gap_a);
    }
    let last = after.last().unwrap();
    assert!((last.water_temp_c - last.food_temp_c).abs() < 1.0);
}
