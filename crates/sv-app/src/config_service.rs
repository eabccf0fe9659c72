//! Vessel configuration files and command-line overrides.

use std::path::Path;

use sv_sim::VesselConfig;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            Some("json") => Ok(ConfigFormat::Json),
            _ => Err(AppError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// The two inputs a user supplies at run time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOverrides {
    pub duration_min: Option<f64>,
    pub dt_s: Option<f64>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut VesselConfig) {
        if let Some(minutes) = self.duration_min {
            config.duration_s = sv_core::units::minutes_to_s(minutes);
        }
        if let Some(dt_s) = self.dt_s {
            config.dt_s = dt_s;
        }
    }
}

pub fn parse_config(content: &str, format: ConfigFormat) -> AppResult<VesselConfig> {
    let config: VesselConfig = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Json => serde_json::from_str(content)?,
    };
    Ok(config)
}

/// Load and validate a configuration file.
pub fn load_config(path: &Path) -> AppResult<VesselConfig> {
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content, format)?;
    config.validate()?;
    tracing::debug!(path = %path.display(), "loaded vessel config");
    Ok(config)
}

/// Validate and write a configuration file.
pub fn save_config(path: &Path, config: &VesselConfig) -> AppResult<()> {
    config.validate()?;
    let content = to_string(config, ConfigFormat::from_path(path)?)?;
    std::fs::write(path, content).map_err(|source| AppError::ConfigFileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

pub fn to_string(config: &VesselConfig, format: ConfigFormat) -> AppResult<String> {
    Ok(match format {
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
    })
}

/// Default or file-based configuration with overrides applied, validated.
pub fn resolve_config(path: Option<&Path>, overrides: ConfigOverrides) -> AppResult<VesselConfig> {
    let mut config = match path {
        Some(p) => load_config(p)?,
        None => VesselConfig::default(),
    };
    overrides.apply(&mut config);
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("a.yaml")).unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("a.YML")).unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("a.json")).unwrap(),
            ConfigFormat::Json
        );
        assert!(matches!(
            ConfigFormat::from_path(&PathBuf::from("a.toml")),
            Err(AppError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg = parse_config("heater_power_w: 500.0\nwater_mass_kg: 3.0\n", ConfigFormat::Yaml)
            .unwrap();
        assert_eq!(cfg.heater_power_w, 500.0);
        assert_eq!(cfg.water_mass_kg, 3.0);
        assert_eq!(cfg.vent_area_m2, VesselConfig::default().vent_area_m2);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = parse_config("heater_power: 500.0\n", ConfigFormat::Yaml).unwrap_err();
        assert!(matches!(err, AppError::Yaml(_)));
    }

    #[test]
    fn json_parses() {
        let cfg = parse_config(r#"{"dt_s": 0.5}"#, ConfigFormat::Json).unwrap();
        assert_eq!(cfg.dt_s, 0.5);
    }

    #[test]
    fn overrides_convert_minutes() {
        let cfg = resolve_config(
            None,
            ConfigOverrides {
                duration_min: Some(5.0),
                dt_s: Some(0.25),
            },
        )
        .unwrap();
        assert_eq!(cfg.duration_s, 300.0);
        assert_eq!(cfg.dt_s, 0.25);
    }

    #[test]
    fn invalid_overrides_are_rejected() {
        let err = resolve_config(
            None,
            ConfigOverrides {
                duration_min: Some(1.0),
                dt_s: Some(0.0),
            },
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Simulation(_)));
    }

    #[test]
    fn yaml_round_trip_preserves_config() {
        let cfg = VesselConfig {
            heater_power_w: 1234.5,
            ..VesselConfig::default()
        };
        let text = to_string(&cfg, ConfigFormat::Yaml).unwrap();
        assert_eq!(parse_config(&text, ConfigFormat::Yaml).unwrap(), cfg);
    }
}
