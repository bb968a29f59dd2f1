//! Deployment-facing configuration for the validator.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::rules::{RuleSet, RuleSpec};

/// Rule profile as it appears in application configuration.
///
/// Layered like the rest of a deployment's config: built-in defaults, then
/// an optional `validation.toml` next to the process, then `UPLOAD_`
/// prefixed environment overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationSettings {
    pub rules: RuleSpec,
}

impl ValidationSettings {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&ValidationSettings::default())?);

        if std::path::Path::new("validation.toml").exists() {
            builder = builder.add_source(File::with_name("validation"));
        }

        builder = builder.add_source(
            Environment::with_prefix("UPLOAD")
                .separator("__")
                .try_parsing(true),
        );

        let settings: ValidationSettings = builder.build()?.try_deserialize()?;
        settings.validate()?;

        Ok(settings)
    }

    /// Checks the profile the same way rule building would, without
    /// consuming it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rules
            .clone()
            .into_rules()
            .map(|_| ())
            .map_err(|e| ConfigError::Message(e.to_string()))
    }

    /// The checked, immutable rule set for this profile.
    pub fn into_rules(self) -> Result<RuleSet, ConfigError> {
        self.rules
            .into_rules()
            .map_err(|e| ConfigError::Message(e.to_string()))
    }
}
