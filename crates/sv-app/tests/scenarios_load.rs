//! Load, validate and run every bundled scenario.

use std::path::PathBuf;
use sv_app::{ConfigOverrides, RunRequest, load_config, run, save_config};
use sv_sim::SimEventKind;

fn scenario(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // go to crates
    path.pop(); // go to repo root
    path.push("scenarios");
    path.push(name);
    path
}

#[test]
fn stovetop_matches_builtin_defaults() {
    let cfg = load_config(&scenario("stovetop.yaml")).expect("Failed to load scenario");
    assert_eq!(cfg, sv_sim::VesselConfig::default());
}

#[test]
fn every_scenario_runs() {
    for name in ["stovetop.yaml", "rolling_boil.yaml", "heavy_lid.json"] {
        let path = scenario(name);
        let request = RunRequest {
            config_path: Some(&path),
            overrides: ConfigOverrides::default(),
        };
        let response = run(&request).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(response.record.len(), response.config.step_count());
    }
}

#[test]
fn rolling_boil_vents_and_runs_dry() {
    let path = scenario("rolling_boil.yaml");
    let request = RunRequest {
        config_path: Some(&path),
        overrides: ConfigOverrides::default(),
    };
    let response = run(&request).unwrap();
    let record = &response.record;
    assert!(record.event_time(SimEventKind::BoilingOnset).is_some());
    assert!(record.event_time(SimEventKind::VentingStarted).is_some());
    assert!(record.event_time(SimEventKind::WaterDepleted).is_some());
}

#[test]
fn overrides_replace_file_timing() {
    let path = scenario("rolling_boil.yaml");
    let request = RunRequest {
        config_path: Some(&path),
        overrides: ConfigOverrides {
            duration_min: Some(2.0),
            dt_s: Some(0.5),
        },
    };
    let response = run(&request).unwrap();
    assert_eq!(response.config.duration_s, 120.0);
    assert_eq!(response.record.len(), 240);
    assert_eq!(response.config.heater_power_w, 10_000.0);
}

#[test]
fn saved_config_loads_back() {
    let cfg = load_config(&scenario("heavy_lid.json")).unwrap();
    let out = std::env::temp_dir().join(format!("sv-app-roundtrip-{}.yaml", std::process::id()));
    save_config(&out, &cfg).unwrap();
    let loaded = load_config(&out).unwrap();
    let _ = std::fs::remove_file(&out);
    assert_eq!(loaded, cfg);
}
