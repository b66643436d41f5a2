pub mod config;
pub mod controllers;
pub mod core;
pub mod presenters;
pub mod storage;

pub use crate::config::{ConfigError, EngineConfig};
pub use crate::controllers::render::{JuliaRenderController, RenderOutcome};
pub use crate::core::actions::cancellation::{CancelFlag, CancelToken, NeverCancel};
pub use crate::core::actions::generate_fractal::fill_matrix::{FillMatrixError, MatrixFiller};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::divergence_matrix::DivergenceMatrix;
pub use crate::core::data::rendered_image::RenderedImage;
pub use crate::core::data::window::{Window, WindowError};
pub use crate::core::errors::RenderError;
pub use crate::core::fractals::julia::algorithm::escape_step;
pub use crate::core::fractals::julia::colour_mapping::palette::Palette;
pub use crate::core::fractals::julia::errors::julia::JuliaError;
pub use crate::core::fractals::julia::params::{Constraints, JuliaParameters};
pub use crate::storage::image_folder::{ImageFolder, StorageError};
