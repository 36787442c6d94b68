use crate::error::HarmonyError;
use crate::models::{Color, HarmonyConfig, Scheme};

/// Derives named schemes using the counts and direction from a [`HarmonyConfig`].
#[derive(Debug, Clone, Default)]
pub struct SchemeService {
    config: HarmonyConfig,
}

impl SchemeService {
    pub fn new(config: HarmonyConfig) -> Self {
        tracing::debug!(
            monochromatic_count = config.monochromatic_count,
            monochromatic_direction = config.monochromatic_direction,
            analogous_count = config.analogous_count,
            "Scheme service initialized"
        );
        Self { config }
    }

    pub fn config(&self) -> &HarmonyConfig {
        &self.config
    }

    /// Derive a single scheme. Complementary yields a one-element vector.
    pub fn derive(&self, color: &Color, scheme: Scheme) -> Result<Vec<Color>, HarmonyError> {
        let colors = match scheme {
            Scheme::Complementary => vec![color.complementary()],
            Scheme::SplitComplementary => color.split_complementary(),
            Scheme::Triadic => color.triadic(),
            Scheme::Tetradic => color.tetradic(),
            Scheme::Monochromatic => color.monochromatic(
                self.config.monochromatic_count,
                self.config.monochromatic_direction,
            )?,
            Scheme::Analogous => color.analogous(self.config.analogous_count),
        };
        Ok(colors)
    }

    /// Derive every configured scheme in order. The first failure aborts.
    pub fn derive_all(&self, color: &Color) -> Result<Vec<(Scheme, Vec<Color>)>, HarmonyError> {
        self.config
            .schemes
            .iter()
            .map(|&scheme| {
                self.derive(color, scheme)
                    .map(|colors| (scheme, colors))
            })
            .collect()
    }
}
