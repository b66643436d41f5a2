use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::divergence_matrix::INTERIOR;
use crate::core::data::point::Point;
use crate::core::data::window::Window;
use crate::core::fractals::julia::params::JuliaParameters;
use std::ops::ControlFlow;

/// Iterates `z -> z² + c` from `start` and returns the first step (counting from 1)
/// at which `|z|` exceeds `max_modulus`, or [`INTERIOR`] if it never does within
/// `iterations` steps. The orbit starts at the sample point, not at the origin.
#[must_use]
pub fn escape_step(start: Complex, c: Complex, iterations: u32, max_modulus: f64) -> i32 {
    let escaped = (1..=iterations).try_fold(start, |z, step| {
        if z.modulus() > max_modulus {
            ControlFlow::Break(step)
        } else {
            ControlFlow::Continue(z * z + c)
        }
    });

    match escaped {
        ControlFlow::Break(step) => step as i32,
        ControlFlow::Continue(_) => INTERIOR,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JuliaAlgorithm {
    c: Complex,
    iterations: u32,
    max_modulus: f64,
    window: Window,
}

impl JuliaAlgorithm {
    #[must_use]
    pub fn new(params: &JuliaParameters) -> Self {
        Self {
            c: params.c(),
            iterations: params.iterations(),
            max_modulus: params.max_modulus(),
            window: params.window().clone(),
        }
    }

    /// Sample point for a cell. Row 0 takes the largest imaginary sample so the
    /// image reads with the imaginary axis pointing up.
    #[must_use]
    pub fn sample_point(&self, cell: Point) -> Complex {
        let rows = self.window.height();

        Complex {
            real: self.window.x_samples()[cell.x],
            imag: self.window.y_samples()[rows - cell.y - 1],
        }
    }
}

impl FractalAlgorithm for JuliaAlgorithm {
    fn rows(&self) -> usize {
        self.window.height()
    }

    fn cols(&self) -> usize {
        self.window.width()
    }

    fn compute(&self, cell: Point) -> i32 {
        escape_step(self.sample_point(cell), self.c, self.iterations, self.max_modulus)
    }
}
