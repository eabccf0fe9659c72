//! Vessel configuration: everything fixed before a run starts.

use serde::{Deserialize, Serialize};
use sv_core::{ensure_finite, ensure_non_negative, ensure_positive, units};

use crate::error::{SimError, SimResult};

/// Upper bound on recorded time points for a single run.
pub const MAX_STEPS: usize = 50_000_000;

/// Immutable inputs of a vessel run.
///
/// Defaults reproduce the stovetop reference setup: 100 kg of water at
/// 20 °C heated by 30 W for 20 minutes, half a kilogram of food at 10 °C.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VesselConfig {
    /// Total simulated time (s)
    pub duration_s: f64,
    /// Fixed time step (s)
    pub dt_s: f64,
    /// Heater power while the fuel source is present (W)
    pub heater_power_w: f64,
    /// Time at which the heater is withdrawn (s)
    pub heater_cutoff_s: f64,
    /// Initial liquid water mass (kg)
    pub water_mass_kg: f64,
    /// Food mass (kg)
    pub food_mass_kg: f64,
    /// Initial water temperature (°C)
    pub water_temp_c: f64,
    /// Initial food temperature (°C)
    pub food_temp_c: f64,
    /// Free vessel volume occupied by steam (m³)
    pub vessel_volume_m3: f64,
    /// Lid mass resting on the vent seat (kg)
    pub lid_mass_kg: f64,
    /// Vent area under the lid (m²)
    pub vent_area_m2: f64,
    /// Thermal time constant of food relaxing toward water temperature (s)
    pub food_time_constant_s: f64,
    /// Pressure excess (Pa) that releases one kilogram of steam per step
    pub vent_pa_per_kg: f64,
    /// Water temperature at which evaporation begins (°C)
    pub boiling_point_c: f64,
}

impl Default for VesselConfig {
    fn default() -> Self {
        Self {
            duration_s: 1200.0,
            dt_s: 1.0,
            heater_power_w: 30.0,
            heater_cutoff_s: 1200.0,
            water_mass_kg: 100.0,
            food_mass_kg: 0.5,
            water_temp_c: 20.0,
            food_temp_c: 10.0,
            vessel_volume_m3: 0.01,
            lid_mass_kg: 0.05,
            vent_area_m2: 0.01,
            food_time_constant_s: 30.0,
            vent_pa_per_kg: 100_000.0,
            boiling_point_c: 100.0,
        }
    }
}

impl VesselConfig {
    /// Default vessel with the two user-facing inputs applied.
    pub fn with_duration_minutes(minutes: f64, dt_s: f64) -> Self {
        Self {
            duration_s: units::minutes_to_s(minutes),
            dt_s,
            ..Self::default()
        }
    }

    /// Check every precondition the engine relies on.
    pub fn validate(&self) -> SimResult<()> {
        ensure_positive(self.duration_s, "duration_s")?;
        ensure_positive(self.dt_s, "dt_s")?;
        if self.dt_s > self.duration_s {
            return Err(SimError::InvalidArg {
                what: "dt_s must not exceed duration_s",
            });
        }
        let steps = (self.duration_s / self.dt_s).ceil();
        if !steps.is_finite() || steps > MAX_STEPS as f64 {
            return Err(SimError::OutOfRange {
                what: "step count (duration_s / dt_s)",
                value: steps,
                expected: "<= 50000000",
            });
        }

        ensure_non_negative(self.heater_power_w, "heater_power_w")?;
        ensure_non_negative(self.heater_cutoff_s, "heater_cutoff_s")?;
        ensure_non_negative(self.water_mass_kg, "water_mass_kg")?;
        ensure_non_negative(self.food_mass_kg, "food_mass_kg")?;
        ensure_non_negative(self.lid_mass_kg, "lid_mass_kg")?;

        ensure_finite(self.water_temp_c, "water_temp_c")?;
        ensure_finite(self.food_temp_c, "food_temp_c")?;
        ensure_finite(self.boiling_point_c, "boiling_point_c")?;

        ensure_positive(self.vessel_volume_m3, "vessel_volume_m3")?;
        ensure_positive(self.vent_area_m2, "vent_area_m2")?;
        ensure_positive(self.food_time_constant_s, "food_time_constant_s")?;
        ensure_positive(self.vent_pa_per_kg, "vent_pa_per_kg")?;
        Ok(())
    }

    /// Number of recorded time points: `0, dt, 2·dt, …` strictly below `duration_s`.
    pub fn step_count(&self) -> usize {
        (self.duration_s / self.dt_s).ceil() as usize
    }
}
