//! Process-wide physical constants.

/// Immutable set of physical constants read by the vessel model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalConstants {
    /// Specific heat of water (J/kg·K)
    pub cp_water: f64,
    /// Specific heat of generic food (J/kg·K)
    pub cp_food: f64,
    /// Latent heat of vaporization of water (J/kg)
    pub latent_heat: f64,
    /// Atmospheric pressure (Pa)
    pub p_atm_pa: f64,
    /// Specific gas constant of steam (J/kg·K)
    pub r_steam_j_per_kg_k: f64,
    /// Gravitational acceleration (m/s²)
    pub g_mps2: f64,
}

/// The constants every run uses unless told otherwise.
pub static STANDARD: PhysicalConstants = PhysicalConstants {
    cp_water: 4180.0,
    cp_food: 3700.0,
    latent_heat: 2.26e6,
    p_atm_pa: 101_325.0,
    r_steam_j_per_kg_k: 461.5,
    g_mps2: 9.81,
};

impl PhysicalConstants {
    #[inline]
    pub fn standard() -> &'static PhysicalConstants {
        &STANDARD
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        STANDARD
    }
}
