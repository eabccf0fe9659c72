//! Transient simulation of a closed, externally heated cooking vessel.
//!
//! Provides:
//! - Lumped water/food/steam model advanced by fixed-step forward Euler
//! - Boiling, ideal-gas vessel pressure and lid venting rules
//! - Phase events and time series recording
//! - Progress reporting during a run

pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod record;
pub mod sim;
pub mod state;

// Re-exports for public API
pub use config::{MAX_STEPS, VesselConfig};
pub use engine::{Simulation, StepReport};
pub use error::{SimError, SimResult};
pub use events::{SimEvent, SimEventKind};
pub use record::{SimRecord, TimeSeriesRecord};
pub use sim::{SimProgress, run_sim, run_sim_with_progress};
pub use state::VesselState;
