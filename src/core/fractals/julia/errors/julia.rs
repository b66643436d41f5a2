use crate::core::data::window::WindowError;
use crate::core::fractals::julia::colour_mapping::errors::PaletteError;
use thiserror::Error;

/// Rejected Julia render parameters. Raised at construction, before any computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JuliaError {
    #[error("iterations must be in 1..10000, got {iterations}")]
    IterationsOutOfRange { iterations: u32 },
    #[error("max modulus must be a number no greater than 1000000, got {max_modulus}")]
    MaxModulusOutOfRange { max_modulus: f64 },
    #[error("invalid window: {0}")]
    Window(#[from] WindowError),
    #[error("invalid palette: {0}")]
    Palette(#[from] PaletteError),
}
