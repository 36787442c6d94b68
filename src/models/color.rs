use std::fmt;

/// A color in HSV space.
///
/// Hue is in degrees, saturation and value nominally in `0.0..=1.0`. None of
/// these ranges are enforced: components are stored exactly as given and
/// derived colors may fall outside them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Color {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Hue in degrees.
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Saturation.
    pub fn s(&self) -> f64 {
        self.s
    }

    /// Value (brightness).
    pub fn v(&self) -> f64 {
        self.v
    }

    /// Same saturation and value, different hue.
    pub(crate) fn with_hue(&self, h: f64) -> Self {
        Self { h, ..*self }
    }
}

impl From<(f64, f64, f64)> for Color {
    fn from((h, s, v): (f64, f64, f64)) -> Self {
        Self::new(h, s, v)
    }
}

/// Renders `hsv(H,S,V)` with the raw stored components.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsv({},{},{})",
            Component(self.h),
            Component(self.s),
            Component(self.v)
        )
    }
}

/// Shortest round-trip float formatting, with negative zero printed as `0`.
struct Component(f64);

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            write!(f, "0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
