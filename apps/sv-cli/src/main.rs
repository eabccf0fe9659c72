use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use sv_app::{
    AppError, AppResult, ConfigFormat, ConfigOverrides, RunProgressEvent, RunRequest, RunStage,
    config_service, query, run_service,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sv-cli")]
#[command(about = "SteamVessel CLI - closed cooking vessel heating simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    Run {
        /// Simulation time in minutes (prompted for when omitted)
        #[arg(long)]
        minutes: Option<f64>,
        /// Time step in seconds (prompted for when omitted)
        #[arg(long)]
        dt: Option<f64>,
        /// Vessel configuration file (.yaml, .yml or .json)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print the time series as CSV on stdout (summary goes to stderr)
        #[arg(long)]
        csv: bool,
    },
    /// Validate a vessel configuration file
    Validate {
        /// Path to the configuration file
        config_path: PathBuf,
    },
    /// Print the effective configuration as YAML
    ShowConfig {
        /// Vessel configuration file (defaults to the built-in vessel)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Logs go to stderr so CSV output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            minutes,
            dt,
            config,
            csv,
        } => cmd_run(minutes, dt, config.as_deref(), csv),
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::ShowConfig { config } => cmd_show_config(config.as_deref()),
    }
}

/// Ask for a number on `input`, writing prompts to `out` (stderr in practice).
fn prompt_f64(input: &mut impl BufRead, out: &mut impl Write, prompt: &str) -> AppResult<f64> {
    let mut line = String::new();
    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(AppError::InvalidInput(format!(
                "no value given for '{}'",
                prompt.trim()
            )));
        }
        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => writeln!(out, "Not a number: {}", line.trim())?,
        }
    }
}

fn prompt_stdin(prompt: &str) -> AppResult<f64> {
    prompt_f64(&mut io::stdin().lock(), &mut io::stderr(), prompt)
}

fn cmd_run(
    minutes: Option<f64>,
    dt: Option<f64>,
    config_path: Option<&Path>,
    csv: bool,
) -> AppResult<()> {
    let minutes = match minutes {
        Some(m) => m,
        None => prompt_stdin("Enter simulation time in minutes: ")?,
    };
    let dt = match dt {
        Some(d) => d,
        None => prompt_stdin("Enter time step in seconds: ")?,
    };

    tracing::debug!(?config_path, minutes, dt, "run requested");

    let request = RunRequest {
        config_path,
        overrides: ConfigOverrides {
            duration_min: Some(minutes),
            dt_s: Some(dt),
        },
    };

    let mut last_emit = Instant::now();
    let mut last_fraction = -1.0f64;
    let response = run_service::run_with_progress(
        &request,
        Some(&mut |event| {
            let fraction = event
                .sim
                .as_ref()
                .map(|s| s.fraction_complete)
                .unwrap_or(-1.0);
            let emit_now = (fraction >= 0.0 && (fraction - last_fraction).abs() >= 0.005)
                || last_emit.elapsed().as_millis() >= 100;
            if emit_now {
                render_cli_progress(&event);
                if fraction >= 0.0 {
                    last_fraction = fraction;
                }
                last_emit = Instant::now();
            }
        }),
    )?;
    clear_progress_line();

    let cfg = &response.config;
    eprintln!(
        "✓ Simulated {:.1} min at dt = {:.3} s ({} steps in {:.3}s)",
        cfg.duration_s / 60.0,
        cfg.dt_s,
        response.timing.steps,
        response.timing.solve_time_s
    );

    let summary = query::get_run_summary(&response.record, cfg, &response.constants)?;
    print_summary(&summary, &response.record);

    if response.record.pressure_clamped_steps > 0 {
        eprintln!(
            "  note: {} step(s) had gas-law pressure below atmospheric (clamped)",
            response.record.pressure_clamped_steps
        );
    }

    if csv {
        print!("{}", query::to_csv(&response.record));
    }

    Ok(())
}

fn print_summary(summary: &query::RunSummary, record: &sv_sim::SimRecord) {
    eprintln!("\nRun Summary:");
    eprintln!("  Time points: {}", summary.record_count);
    eprintln!(
        "  Time range: {:.1} - {:.1} s",
        summary.time_range.0, summary.time_range.1
    );
    eprintln!(
        "  Water: final {:.3} °C, peak {:.3} °C, {:.4} kg left",
        summary.final_water_temp_c, summary.peak_water_temp_c, summary.final_water_mass_kg
    );
    eprintln!(
        "  Food:  final {:.3} °C, absorbed {:.2} kJ",
        summary.final_food_temp_c, summary.food_heat_absorbed_kj
    );
    eprintln!(
        "  Peak pressure: {:.3} kPa, peak steam: {:.5} kg",
        summary.peak_pressure_kpa, summary.peak_steam_mass_kg
    );

    if record.events.is_empty() {
        eprintln!("\nNo phase events");
    } else {
        eprintln!("\nPhase events:");
        for event in &record.events {
            eprintln!(
                "  {:>8.1} s ({:>6.2} min)  {}",
                event.time_s,
                event.time_s / 60.0,
                event.kind.label()
            );
        }
    }
}

fn clear_progress_line() {
    eprint!("\r{}\r", " ".repeat(100));
    let _ = io::stderr().flush();
}

fn render_cli_progress(event: &RunProgressEvent) {
    match (event.stage, &event.sim) {
        (RunStage::Simulating, Some(p)) => {
            let width = 28usize;
            let filled = ((p.fraction_complete * width as f64).round() as usize).min(width);
            let bar = format!(
                "{}{}",
                "#".repeat(filled),
                "-".repeat(width.saturating_sub(filled))
            );
            eprint!(
                "\r[{}] {:>6.2}%  t={:.1}/{:.1}s  step={}/{}  elapsed={:.2}s",
                bar,
                p.fraction_complete * 100.0,
                p.sim_time_s,
                p.t_end_s,
                p.step,
                p.total_steps,
                event.elapsed_wall_s
            );
            let _ = io::stderr().flush();
        }
        _ => {
            let spinner = ['|', '/', '-', '\\'];
            let spin_idx = ((event.elapsed_wall_s * 10.0) as usize) % spinner.len();
            let mut line = format!(
                "\r{} {}  elapsed={:.2}s",
                spinner[spin_idx],
                event.stage.label(),
                event.elapsed_wall_s
            );
            if let Some(msg) = &event.message {
                line.push_str(&format!("  {}", msg));
            }
            eprint!("{}", line);
            let _ = io::stderr().flush();
        }
    }
}

fn cmd_validate(config_path: &Path) -> AppResult<()> {
    println!("Validating config: {}", config_path.display());
    let cfg = config_service::load_config(config_path)?;
    println!("✓ Config is valid ({} time points)", cfg.step_count());
    Ok(())
}

fn cmd_show_config(config_path: Option<&Path>) -> AppResult<()> {
    let cfg = config_service::resolve_config(config_path, ConfigOverrides::default())?;
    print!("{}", config_service::to_string(&cfg, ConfigFormat::Yaml)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_retries_until_a_number_is_given() {
        let mut input = Cursor::new("abc\n2.5\n");
        let mut out = Vec::new();
        let v = prompt_f64(&mut input, &mut out, "Enter time step in seconds: ").unwrap();
        assert_eq!(v, 2.5);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Enter time step in seconds: ").count(), 2);
        assert!(text.contains("Not a number: abc"));
    }

    #[test]
    fn prompt_fails_on_end_of_input() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        let err = prompt_f64(&mut input, &mut out, "Enter simulation time in minutes: ")
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
