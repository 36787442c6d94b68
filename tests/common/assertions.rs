//! Assertion helpers for tests.

use hsv_harmony::Color;
use pretty_assertions::assert_eq;

/// Assert the rendered form of each color
pub fn assert_rendered(colors: &[Color], expected: &[&str]) {
    let rendered: Vec<String> = colors.iter().map(Color::to_string).collect();
    assert_eq!(rendered, expected);
}

/// Assert the hues of each color, exactly
pub fn assert_hues(colors: &[Color], expected: &[f64]) {
    let hues: Vec<f64> = colors.iter().map(|c| c.h).collect();
    assert_eq!(hues, expected);
}

/// Assert every color keeps the source saturation and value bit-for-bit
pub fn assert_same_sv(source: &Color, colors: &[Color]) {
    for color in colors {
        assert!(
            color.s == source.s && color.v == source.v,
            "Expected s={} v={}, got {}",
            source.s,
            source.v,
            color
        );
    }
}

/// Assert a sequence strictly increases (or decreases when `increasing` is false)
pub fn assert_strictly_monotonic(values: &[f64], increasing: bool) {
    for pair in values.windows(2) {
        let ok = if increasing {
            pair[0] < pair[1]
        } else {
            pair[0] > pair[1]
        };
        assert!(
            ok,
            "Expected strictly {} sequence, got {:?}",
            if increasing { "increasing" } else { "decreasing" },
            values
        );
    }
}
