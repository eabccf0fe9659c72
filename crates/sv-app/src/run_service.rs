//! Run execution service.

use std::path::Path;
use std::time::Instant;

use sv_core::PhysicalConstants;
use sv_sim::{SimProgress, SimRecord, Simulation, VesselConfig};

use crate::config_service::{self, ConfigOverrides};
use crate::error::AppResult;
use crate::progress::{RunProgressEvent, RunStage};

/// Request to execute a run.
#[derive(Debug, Clone, Default)]
pub struct RunRequest<'a> {
    /// Configuration file; the built-in vessel when absent
    pub config_path: Option<&'a Path>,
    pub overrides: ConfigOverrides,
}

/// Concise timing and execution summary for a run.
#[derive(Debug, Clone, Default)]
pub struct RunTimingSummary {
    pub load_time_s: f64,
    pub solve_time_s: f64,
    pub total_time_s: f64,
    pub steps: usize,
}

/// Response from a run execution.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub config: VesselConfig,
    pub constants: PhysicalConstants,
    pub record: SimRecord,
    pub timing: RunTimingSummary,
}

fn emit_progress(
    progress_cb: &mut Option<&mut dyn FnMut(RunProgressEvent)>,
    stage: RunStage,
    started: Instant,
    message: Option<String>,
) {
    if let Some(cb) = progress_cb.as_deref_mut() {
        cb(RunProgressEvent::stage(
            stage,
            started.elapsed().as_secs_f64(),
            message,
        ));
    }
}

pub fn run(request: &RunRequest<'_>) -> AppResult<RunResponse> {
    run_with_progress(request, None)
}

pub fn run_with_progress(
    request: &RunRequest<'_>,
    mut progress_cb: Option<&mut dyn FnMut(RunProgressEvent)>,
) -> AppResult<RunResponse> {
    let started = Instant::now();

    emit_progress(
        &mut progress_cb,
        RunStage::LoadingConfig,
        started,
        request.config_path.map(|p| p.display().to_string()),
    );
    let config = config_service::resolve_config(request.config_path, request.overrides)?;
    let load_time_s = started.elapsed().as_secs_f64();

    emit_progress(&mut progress_cb, RunStage::Validating, started, None);
    let sim = Simulation::new(config.clone())?;

    let solve_started = Instant::now();
    let record = {
        let mut on_step = |p: SimProgress| {
            if let Some(cb) = progress_cb.as_deref_mut() {
                cb(RunProgressEvent {
                    stage: RunStage::Simulating,
                    elapsed_wall_s: started.elapsed().as_secs_f64(),
                    message: None,
                    sim: Some(p),
                });
            }
        };
        sim.run(Some(&mut on_step))
    };
    let solve_time_s = solve_started.elapsed().as_secs_f64();

    emit_progress(&mut progress_cb, RunStage::Completed, started, None);

    let timing = RunTimingSummary {
        load_time_s,
        solve_time_s,
        total_time_s: started.elapsed().as_secs_f64(),
        steps: record.len(),
    };
    tracing::info!(
        steps = timing.steps,
        solve_time_s = timing.solve_time_s,
        "run complete"
    );

    Ok(RunResponse {
        config,
        constants: *sim.constants(),
        record,
        timing,
    })
}
