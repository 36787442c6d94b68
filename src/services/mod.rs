pub mod harmony;
pub mod scheme_service;

pub use harmony::{shift_hue, ANALOGOUS_STEP, MONOCHROMATIC_CEILING, MONOCHROMATIC_FLOOR};
pub use scheme_service::SchemeService;
