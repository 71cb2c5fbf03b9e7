use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::types::PlannerConfig;

impl PlannerConfig {
    /// Parses a TOML document. Keys left out keep their default values.
    ///
    /// ```toml
    /// transit_horizon = 30
    ///
    /// [filters]
    /// max_magnitude = 11.0
    /// right_ascension = { start = 300.0, end = 10.0 }
    ///
    /// [observing]
    /// first_night_start = { year = 2021, month = 9, day = 2.067 }
    /// night_count = 14
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Observing sessions and the nightly step must have positive length.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let observing = &self.observing;
        for (key, value) in [
            ("observing.session_length_days", observing.session_length_days),
            ("observing.sidereal_day_length", observing.sidereal_day_length),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { key, value });
            }
        }
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }
}
