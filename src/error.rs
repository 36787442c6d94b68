use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HarmonyError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl HarmonyError {
    pub(crate) fn invalid_direction(direction: i32) -> Self {
        HarmonyError::InvalidArgument(format!("direction must be 1 or -1, got {direction}"))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(String),

    #[error("Unknown scheme: {0}")]
    UnknownScheme(String),

    #[error("Harmony error: {0}")]
    Harmony(#[from] HarmonyError),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}
