//! hsv-harmony
//!
//! A single color in HSV space and the color-theory schemes derived from it:
//! complementary, split-complementary, triadic, tetradic, monochromatic and
//! analogous.
//!
//! ```
//! use hsv_harmony::Color;
//!
//! let color = Color::new(180.0, 0.5, 0.5);
//! assert_eq!(color.complementary().to_string(), "hsv(0,0.5,0.5)");
//!
//! let triad: Vec<String> = color.triadic().iter().map(Color::to_string).collect();
//! assert_eq!(triad, ["hsv(300,0.5,0.5)", "hsv(60,0.5,0.5)"]);
//! ```
//!
//! Hue arithmetic uses Rust's `%` on `f64`, a truncating remainder that keeps
//! the sign of the dividend. A hue shifted below zero stays negative.

pub mod error;
pub mod models;
pub mod services;

pub use error::{ConfigError, HarmonyError};
pub use models::{Color, Direction, HarmonyConfig, Scheme};
pub use services::SchemeService;
