use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown rotation strategy: {0:?}")]
pub struct UnknownStrategyError(pub String);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration")]
    Load(#[from] ::config::ConfigError),
}
