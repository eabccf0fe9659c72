//! Phase events observed during a run.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimEventKind {
    /// Water reached the boiling point while liquid remained
    BoilingOnset,
    /// Vessel pressure first exceeded atmospheric plus lid lift pressure
    VentingStarted,
    /// Heater withdrawn
    HeaterCutoff,
    /// All liquid water evaporated
    WaterDepleted,
}

impl SimEventKind {
    pub fn label(&self) -> &'static str {
        match self {
            SimEventKind::BoilingOnset => "boiling onset",
            SimEventKind::VentingStarted => "venting started",
            SimEventKind::HeaterCutoff => "heater cutoff",
            SimEventKind::WaterDepleted => "water depleted",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimEvent {
    pub kind: SimEventKind,
    /// Time of the step in which the event occurred (s)
    pub time_s: f64,
}

/// Keeps only the first occurrence of each event kind.
#[derive(Debug, Default)]
pub(crate) struct EventLog {
    events: Vec<SimEvent>,
}

impl EventLog {
    /// Returns true when the event was new.
    pub(crate) fn note(&mut self, kind: SimEventKind, time_s: f64) -> bool {
        if self.events.iter().any(|e| e.kind == kind) {
            return false;
        }
        tracing::debug!(event = kind.label(), time_s, "phase event");
        self.events.push(SimEvent { kind, time_s });
        true
    }

    pub(crate) fn into_events(self) -> Vec<SimEvent> {
        self.events
    }
}
