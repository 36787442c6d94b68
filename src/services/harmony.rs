//! Color-theory derivations on [`Color`].
//!
//! Every derivation is pure: it reads the source color and returns new
//! colors. Only [`Color::monochromatic`] can fail.

use crate::error::HarmonyError;
use crate::models::{Color, Direction};

/// Hue step between neighbouring analogous colors, in degrees
pub const ANALOGOUS_STEP: f64 = 30.0;

/// Saturation/value a darker monochromatic scheme converges on
pub const MONOCHROMATIC_FLOOR: f64 = 0.2;

/// Saturation/value a lighter monochromatic scheme converges on
pub const MONOCHROMATIC_CEILING: f64 = 1.0;

/// Shift a hue by `offset` degrees.
///
/// Truncating remainder: the result keeps the sign of `h + offset` and is not
/// folded back into `[0, 360)`.
pub fn shift_hue(h: f64, offset: f64) -> f64 {
    (h + offset) % 360.0
}

impl Color {
    fn rotated(&self, offsets: &[f64]) -> Vec<Color> {
        offsets
            .iter()
            .map(|offset| self.with_hue(shift_hue(self.h, *offset)))
            .collect()
    }

    /// The color opposite on the wheel (+180°).
    pub fn complementary(&self) -> Color {
        tracing::trace!(h = self.h, "complementary");
        self.with_hue(shift_hue(self.h, 180.0))
    }

    /// The two neighbours of the complement: +150° then +210°.
    pub fn split_complementary(&self) -> Vec<Color> {
        tracing::trace!(h = self.h, "split-complementary");
        self.rotated(&[150.0, 210.0])
    }

    /// +120° then +240°.
    pub fn triadic(&self) -> Vec<Color> {
        tracing::trace!(h = self.h, "triadic");
        self.rotated(&[120.0, 240.0])
    }

    /// +90°, +180°, +270°.
    pub fn tetradic(&self) -> Vec<Color> {
        tracing::trace!(h = self.h, "tetradic");
        self.rotated(&[90.0, 180.0, 270.0])
    }

    /// `n` colors of the same hue with saturation and value stepped linearly.
    ///
    /// With `d == 1` both step toward 1.0, with `d == -1` toward 0.2; the
    /// `n`th color lands on the target. Results are not clamped. Any other
    /// `d` is rejected before anything is computed.
    ///
    /// ```
    /// use hsv_harmony::{Color, HarmonyError};
    ///
    /// let shades = Color::new(200.0, 0.5, 0.5).monochromatic(3, -1).unwrap();
    /// assert_eq!(shades.len(), 3);
    /// assert!(shades.iter().all(|c| c.h == 200.0));
    ///
    /// let err = Color::new(200.0, 0.5, 0.5).monochromatic(3, 2).unwrap_err();
    /// assert!(matches!(err, HarmonyError::InvalidArgument(_)));
    /// ```
    pub fn monochromatic(&self, n: usize, d: i32) -> Result<Vec<Color>, HarmonyError> {
        let direction = Direction::try_from(d)?;
        tracing::trace!(h = self.h, count = n, direction = d, "monochromatic");

        let count = n as f64;
        let (s_step, v_step) = match direction {
            Direction::Darker => (
                (self.s - MONOCHROMATIC_FLOOR) / count,
                (self.v - MONOCHROMATIC_FLOOR) / count,
            ),
            Direction::Lighter => (
                (MONOCHROMATIC_CEILING - self.s) / count,
                (MONOCHROMATIC_CEILING - self.v) / count,
            ),
        };
        let sign = direction.sign();

        Ok((1..=n)
            .map(|i| {
                let i = i as f64;
                Color::new(
                    self.h,
                    self.s + sign * s_step * i,
                    self.v + sign * v_step * i,
                )
            })
            .collect())
    }

    /// `n` colors spaced 30° apart on both sides of this hue.
    ///
    /// The first `round(n / 2)` go clockwise (+30°, +60°, ...), the rest
    /// counter-clockwise (-30°, -60°, ...). Hues are not deduplicated when
    /// `n` wraps past the full circle.
    pub fn analogous(&self, n: usize) -> Vec<Color> {
        tracing::trace!(h = self.h, count = n, "analogous");
        let half = n.div_ceil(2);

        let clockwise =
            (1..=half).map(|i| self.with_hue(shift_hue(self.h, ANALOGOUS_STEP * i as f64)));
        let counter_clockwise = (1..=n - half)
            .map(|i| self.with_hue(shift_hue(self.h, -ANALOGOUS_STEP * i as f64)));

        clockwise.chain(counter_clockwise).collect()
    }
}
