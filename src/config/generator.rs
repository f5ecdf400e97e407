//! Password generation configuration.

use config::ConfigError;
use serde::Deserialize;

/// Password generation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Length used when the submitted one is missing, unparseable, or non-positive.
    #[serde(default = "default_length")]
    pub default_length: usize,

    /// Largest password a single request produces; longer requests are cut to
    /// this length and the page says so.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

const fn default_length() -> usize {
    16
}

const fn default_max_length() -> usize {
    1024
}

impl GeneratorConfig {
    /// Validate the generator configuration.
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if self.default_length == 0 {
            return Err(ConfigError::Message(
                "generator.default_length cannot be 0".to_string(),
            ));
        }
        if self.max_length < self.default_length {
            return Err(ConfigError::Message(format!(
                "generator.max_length ({}) cannot be less than generator.default_length ({})",
                self.max_length, self.default_length
            )));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_length: default_length(),
            max_length: default_max_length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(GeneratorConfig::default().validate().is_ok());

        let zero = GeneratorConfig {
            default_length: 0,
            max_length: 10,
        };
        assert!(zero.validate().is_err());

        let inverted = GeneratorConfig {
            default_length: 16,
            max_length: 8,
        };
        assert!(inverted.validate().is_err());
    }
}
