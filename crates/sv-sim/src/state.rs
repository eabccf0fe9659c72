//! Mutable vessel state threaded through consecutive steps.

use serde::{Deserialize, Serialize};

use crate::config::VesselConfig;

/// Lumped state of water, food and steam inside the vessel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VesselState {
    /// Water temperature (°C)
    pub water_temp_c: f64,
    /// Food temperature (°C)
    pub food_temp_c: f64,
    /// Remaining liquid water (kg), never negative
    pub water_mass_kg: f64,
    /// Steam held in the vessel (kg), never negative
    pub steam_mass_kg: f64,
    /// Vessel pressure (Pa), never below atmospheric
    pub pressure_pa: f64,
}

impl VesselState {
    /// State at t = 0: no steam, vessel at the given ambient pressure.
    pub fn initial(config: &VesselConfig, p_atm_pa: f64) -> Self {
        Self {
            water_temp_c: config.water_temp_c,
            food_temp_c: config.food_temp_c,
            water_mass_kg: config.water_mass_kg,
            steam_mass_kg: 0.0,
            pressure_pa: p_atm_pa,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_copies_config() {
        let cfg = VesselConfig::default();
        let state = VesselState::initial(&cfg, 101_325.0);
        assert_eq!(state.water_temp_c, 20.0);
        assert_eq!(state.food_temp_c, 10.0);
        assert_eq!(state.water_mass_kg, 100.0);
        assert_eq!(state.steam_mass_kg, 0.0);
        assert_eq!(state.pressure_pa, 101_325.0);
    }
}
