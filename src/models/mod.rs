pub mod color;
pub mod config;
pub mod direction;
pub mod scheme;

pub use color::Color;
pub use config::HarmonyConfig;
pub use direction::Direction;
pub use scheme::Scheme;
