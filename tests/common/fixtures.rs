//! Test fixtures and constants.

use hsv_harmony::Color;

/// Colors used across scenarios
pub mod colors {
    use hsv_harmony::Color;

    /// Mid-saturation cyan; the reference color for exact-output checks
    pub const CYAN: Color = Color {
        h: 180.0,
        s: 0.5,
        v: 0.5,
    };

    /// Hue at zero, so every counter-clockwise shift goes negative
    pub const RED: Color = Color {
        h: 0.0,
        s: 0.8,
        v: 0.9,
    };

    /// Fractional hue and low saturation/value
    pub const DUSK: Color = Color {
        h: 287.25,
        s: 0.35,
        v: 0.45,
    };
}

/// A spread of hues (including negative and >360) with fixed s/v
pub fn hue_sweep() -> Vec<Color> {
    [-725.0, -180.0, -30.0, 0.0, 15.5, 90.0, 179.9, 180.0, 359.0, 360.0, 721.0]
        .into_iter()
        .map(|h| Color::new(h, 0.6, 0.4))
        .collect()
}

/// Sample YAML configuration
pub const CONFIG_YAML: &str = r#"
monochromatic_count: 4
monochromatic_direction: -1
analogous_count: 5
schemes:
  - complementary
  - monochromatic
  - analogous
"#;
