use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::strategy::Strategy;

pub const ENV_PREFIX: &str = "ROTATE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub strategy: Strategy,
}

impl Config {
    /// Loads the config from an optional file, overridden by `ROTATE__*`
    /// environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = ::config::Config::builder();

        if let Some(path) = path {
            settings =
                settings.add_source(::config::File::from(path).required(true));
        }

        let settings = settings
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config = settings.try_deserialize::<Config>()?;

        tracing::debug!(strategy = %config.strategy, "Loaded rotation config");

        Ok(config)
    }
}
