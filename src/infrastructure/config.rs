use crate::domain::error::DomainError;
use crate::domain::threshold::ThresholdTable;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub sensors: SensorSettings,
    pub thresholds: ThresholdTable,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_address: String,
    pub compress_responses: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SensorSettings {
    /// Seconds between ADC readings. Also the number of raw samples averaged
    /// into one chart point.
    pub sample_interval_secs: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] config::ConfigError),

    #[error(transparent)]
    Thresholds(#[from] DomainError),

    #[error("sample interval must be positive, got {0}s")]
    SampleInterval(i64),
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()?;
        if self.sensors.sample_interval_secs <= 0 {
            return Err(ConfigError::SampleInterval(self.sensors.sample_interval_secs));
        }
        Ok(())
    }
}

fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
    let thresholds = ThresholdTable::default();
    config::Config::builder()
        .set_default("server.bind_address", "0.0.0.0:8080")?
        .set_default("server.compress_responses", true)?
        .set_default("sensors.sample_interval_secs", 60)?
        .set_default("thresholds.pressure.orange", thresholds.pressure.orange)?
        .set_default("thresholds.pressure.red", thresholds.pressure.red)?
        .set_default("thresholds.temperature.orange", thresholds.temperature.orange)?
        .set_default("thresholds.temperature.red", thresholds.temperature.red)?
        .set_default("thresholds.humidity.orange", thresholds.humidity.orange)?
        .set_default("thresholds.humidity.red", thresholds.humidity.red)
}

/// Built-in defaults, then `config/pupsys.{toml,...}` if present, then
/// `PUPSYS__SECTION__KEY` environment variables.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    let settings = defaults()?
        .add_source(config::File::with_name("config/pupsys").required(false))
        .add_source(
            config::Environment::with_prefix("PUPSYS")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    finish(settings)
}

fn finish(settings: config::Config) -> Result<AppConfig, ConfigError> {
    let app_config: AppConfig = settings.try_deserialize()?;
    app_config.validate()?;
    tracing::debug!(?app_config, "Loaded configuration");
    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::threshold::Thresholds;

    fn load_toml(toml: &str) -> Result<AppConfig, ConfigError> {
        let settings = defaults()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        finish(settings)
    }

    #[test]
    fn test_defaults() {
        let app_config = load_toml("").unwrap();
        assert_eq!(app_config.server.bind_address, "0.0.0.0:8080");
        assert!(app_config.server.compress_responses);
        assert_eq!(app_config.sensors.sample_interval_secs, 60);
        assert_eq!(app_config.thresholds, ThresholdTable::default());
    }

    #[test]
    fn test_override_thresholds() {
        let app_config = load_toml(
            r#"
            [thresholds.humidity]
            orange = 30
            red = 60
            "#,
        )
        .unwrap();
        assert_eq!(app_config.thresholds.humidity, Thresholds::new(30.0, 60.0));
        assert_eq!(app_config.thresholds.pressure, Thresholds::new(325.0, 350.0));
    }

    #[test]
    fn test_rejects_invalid_table() {
        let result = load_toml(
            r#"
            [thresholds.pressure]
            orange = 400
            red = 350
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Thresholds(_))));
    }

    #[test]
    fn test_rejects_zero_interval() {
        let result = load_toml("[sensors]\nsample_interval_secs = 0\n");
        assert!(matches!(result, Err(ConfigError::SampleInterval(0))));
    }
}
