//! Fixed-step vessel model.
//!
//! Each step applies, in order: heater gating, water heating, boiling,
//! gas-law pressure, lid venting, food relaxation. Every sub-step reads the
//! values written by the one before it in the same step.

use sv_core::{PhysicalConstants, units};

use crate::config::VesselConfig;
use crate::error::SimResult;
use crate::state::VesselState;

/// What happened inside a single step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepReport {
    /// Heater power applied during the step (W)
    pub heater_power_w: f64,
    /// Evaporation branch was taken
    pub boiling: bool,
    /// Water turned to steam this step (kg)
    pub evaporated_kg: f64,
    /// Vessel pressure before venting (Pa)
    pub pressure_pa: f64,
    /// Gas-law pressure was below atmospheric and got clamped
    pub pressure_clamped: bool,
    /// Pressure exceeded atmospheric plus lift pressure
    pub venting: bool,
    /// Steam actually released this step (kg)
    pub vented_kg: f64,
}

/// Vessel model bound to one configuration.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: VesselConfig,
    constants: PhysicalConstants,
}

impl Simulation {
    /// Validate the configuration and bind it to the standard constants.
    pub fn new(config: VesselConfig) -> SimResult<Self> {
        Self::with_constants(config, *PhysicalConstants::standard())
    }

    pub fn with_constants(config: VesselConfig, constants: PhysicalConstants) -> SimResult<Self> {
        config.validate()?;
        Ok(Self { config, constants })
    }

    pub fn config(&self) -> &VesselConfig {
        &self.config
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn initial_state(&self) -> VesselState {
        VesselState::initial(&self.config, self.constants.p_atm_pa)
    }

    /// Time of the i-th recorded point (s).
    #[inline]
    pub fn time_at(&self, step: usize) -> f64 {
        step as f64 * self.config.dt_s
    }

    /// Overpressure needed to lift the lid off its seat (Pa).
    pub fn lift_pressure_pa(&self) -> f64 {
        self.config.lid_mass_kg * self.constants.g_mps2 / self.config.vent_area_m2
    }

    /// Absolute pressure above which steam escapes (Pa).
    pub fn vent_threshold_pa(&self) -> f64 {
        self.constants.p_atm_pa + self.lift_pressure_pa()
    }

    /// Heater power at time t: full power before cutoff, nothing after.
    #[inline]
    pub fn heater_power_w(&self, t_s: f64) -> f64 {
        if t_s < self.config.heater_cutoff_s {
            self.config.heater_power_w
        } else {
            0.0
        }
    }

    /// Ideal-gas pressure of the steam phase, clamped at atmospheric.
    ///
    /// Returns `(pressure_pa, clamped)`.
    pub fn vessel_pressure_pa(&self, state: &VesselState) -> (f64, bool) {
        let p_atm = self.constants.p_atm_pa;
        if state.steam_mass_kg <= 0.0 {
            return (p_atm, false);
        }
        let t_k = units::c_to_k(state.water_temp_c);
        let p = state.steam_mass_kg * self.constants.r_steam_j_per_kg_k * t_k
            / self.config.vessel_volume_m3;
        if p < p_atm { (p_atm, true) } else { (p, false) }
    }

    /// Advance `state` from `t_s` to `t_s + dt`.
    pub fn step(&self, state: &mut VesselState, t_s: f64) -> StepReport {
        let cfg = &self.config;
        let c = &self.constants;
        let dt = cfg.dt_s;

        let q_w = self.heater_power_w(t_s);

        // Forward Euler; may overshoot the boiling point within one step.
        if state.water_mass_kg > 0.0 {
            state.water_temp_c += q_w / (state.water_mass_kg * c.cp_water) * dt;
        }

        let boiling = state.water_temp_c >= cfg.boiling_point_c && state.water_mass_kg > 0.0;
        let mut evaporated_kg = 0.0;
        if boiling {
            evaporated_kg = q_w / c.latent_heat * dt;
            state.water_mass_kg = (state.water_mass_kg - evaporated_kg).max(0.0);
            state.steam_mass_kg += evaporated_kg;
        }

        let (pressure_pa, pressure_clamped) = self.vessel_pressure_pa(state);
        state.pressure_pa = pressure_pa;

        // Recorded pressure stays at the pre-vent value.
        let threshold = self.vent_threshold_pa();
        let venting = pressure_pa > threshold;
        let mut vented_kg = 0.0;
        if venting {
            let m_out = (pressure_pa - threshold) / cfg.vent_pa_per_kg;
            let remaining = (state.steam_mass_kg - m_out).max(0.0);
            vented_kg = state.steam_mass_kg - remaining;
            state.steam_mass_kg = remaining;
        }

        let dtemp_food = (state.water_temp_c - state.food_temp_c) / cfg.food_time_constant_s;
        state.food_temp_c += dtemp_food * dt;

        StepReport {
            heater_power_w: q_w,
            boiling,
            evaporated_kg,
            pressure_pa,
            pressure_clamped,
            venting,
            vented_kg,
        }
    }
}
