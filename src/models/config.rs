use crate::error::ConfigError;
use crate::models::Scheme;
use serde::Deserialize;
use std::path::Path;

/// Default arguments for scheme derivation, loadable from YAML
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HarmonyConfig {
    /// Number of colors produced by the monochromatic scheme
    #[serde(default = "default_count")]
    pub monochromatic_count: usize,

    /// Monochromatic direction: 1 steps toward 1.0, -1 toward 0.2
    #[serde(default = "default_direction")]
    pub monochromatic_direction: i32,

    /// Number of colors produced by the analogous scheme
    #[serde(default = "default_count")]
    pub analogous_count: usize,

    /// Schemes derived by `SchemeService::derive_all`, in order
    #[serde(default = "default_schemes")]
    pub schemes: Vec<Scheme>,
}

fn default_count() -> usize {
    3
}

fn default_direction() -> i32 {
    1
}

fn default_schemes() -> Vec<Scheme> {
    Scheme::ALL.to_vec()
}

impl HarmonyConfig {
    /// Parse configuration from a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to null, not an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Read and parse a YAML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.as_ref().display(),
            schemes = config.schemes.len(),
            "Loaded harmony configuration"
        );
        Ok(config)
    }

    /// Like [`HarmonyConfig::load`], falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    %e,
                    path = %path.as_ref().display(),
                    "Failed to load harmony configuration, using defaults"
                );
                Self::default()
            }
        }
    }
}

impl Default for HarmonyConfig {
    fn default() -> Self {
        Self {
            monochromatic_count: default_count(),
            monochromatic_direction: default_direction(),
            analogous_count: default_count(),
            schemes: default_schemes(),
        }
    }
}
