use serde::Serialize;

use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::window::{RESOLUTION_UPPER_BOUND, Window};
use crate::core::fractals::julia::colour_mapping::errors::PaletteError;
use crate::core::fractals::julia::errors::julia::JuliaError;

pub const DEFAULT_ITERATIONS: u32 = 100;
/// Exclusive.
pub const ITERATIONS_UPPER_BOUND: u32 = 10_000;
pub const DEFAULT_MAX_MODULUS: f64 = 1000.0;
/// Inclusive.
pub const MAX_MODULUS_UPPER_BOUND: f64 = 1_000_000.0;
pub const DEFAULT_ANCHOR_COLOURS: [Colour; 3] = [Colour::BLUE, Colour::WHITE, Colour::RED];
pub const DEFAULT_INTERIOR_COLOUR: Colour = Colour::BLACK;

/// Validated inputs for one Julia render. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct JuliaParameters {
    c: Complex,
    iterations: u32,
    max_modulus: f64,
    window: Window,
    anchor_colours: Vec<Colour>,
    interior_colour: Colour,
}

impl JuliaParameters {
    pub fn new(
        c: Complex,
        iterations: u32,
        max_modulus: f64,
        window: Window,
        anchor_colours: Vec<Colour>,
        interior_colour: Colour,
    ) -> Result<Self, JuliaError> {
        if iterations == 0 || iterations >= ITERATIONS_UPPER_BOUND {
            return Err(JuliaError::IterationsOutOfRange { iterations });
        }

        if !(max_modulus <= MAX_MODULUS_UPPER_BOUND) {
            return Err(JuliaError::MaxModulusOutOfRange { max_modulus });
        }

        if anchor_colours.is_empty() {
            return Err(PaletteError::NoAnchorColours.into());
        }

        Ok(Self {
            c,
            iterations,
            max_modulus,
            window,
            anchor_colours,
            interior_colour,
        })
    }

    #[must_use]
    pub fn with_defaults(c: Complex) -> Self {
        Self {
            c,
            iterations: DEFAULT_ITERATIONS,
            max_modulus: DEFAULT_MAX_MODULUS,
            window: Window::default(),
            anchor_colours: DEFAULT_ANCHOR_COLOURS.to_vec(),
            interior_colour: DEFAULT_INTERIOR_COLOUR,
        }
    }

    #[must_use]
    pub fn c(&self) -> Complex {
        self.c
    }

    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    #[must_use]
    pub fn max_modulus(&self) -> f64 {
        self.max_modulus
    }

    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    #[must_use]
    pub fn anchor_colours(&self) -> &[Colour] {
        &self.anchor_colours
    }

    #[must_use]
    pub fn interior_colour(&self) -> Colour {
        self.interior_colour
    }

    /// One palette entry per possible escape step.
    #[must_use]
    pub fn palette_size(&self) -> usize {
        self.iterations as usize
    }
}

/// Numeric limits callers validate against before building parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    pub iterations_limit: u32,
    pub modulus_limit: f64,
    pub resolution_limit: usize,
}

impl Constraints {
    #[must_use]
    pub fn current() -> Self {
        Self {
            iterations_limit: ITERATIONS_UPPER_BOUND,
            modulus_limit: MAX_MODULUS_UPPER_BOUND,
            resolution_limit: RESOLUTION_UPPER_BOUND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(iterations: u32, max_modulus: f64, anchors: Vec<Colour>) -> Result<JuliaParameters, JuliaError> {
        JuliaParameters::new(
            Complex::new(-0.7, 0.27),
            iterations,
            max_modulus,
            Window::default(),
            anchors,
            Colour::BLACK,
        )
    }

    #[test]
    fn test_valid_constructor() {
        let params = build(250, 2.0, vec![Colour::RED]).unwrap();

        assert_eq!(params.iterations(), 250);
        assert_eq!(params.palette_size(), 250);
        assert_eq!(params.max_modulus(), 2.0);
        assert_eq!(params.c(), Complex::new(-0.7, 0.27));
    }

    #[test]
    fn test_iteration_bounds() {
        assert!(build(1, 2.0, vec![Colour::RED]).is_ok());
        assert!(build(9_999, 2.0, vec![Colour::RED]).is_ok());
        assert_eq!(
            build(0, 2.0, vec![Colour::RED]),
            Err(JuliaError::IterationsOutOfRange { iterations: 0 })
        );
        assert_eq!(
            build(10_000, 2.0, vec![Colour::RED]),
            Err(JuliaError::IterationsOutOfRange { iterations: 10_000 })
        );
    }

    #[test]
    fn test_max_modulus_bound_is_inclusive() {
        assert!(build(10, 1_000_000.0, vec![Colour::RED]).is_ok());
        assert!(matches!(
            build(10, 1_000_000.5, vec![Colour::RED]),
            Err(JuliaError::MaxModulusOutOfRange { .. })
        ));
        assert!(build(10, f64::NAN, vec![Colour::RED]).is_err());
    }

    #[test]
    fn test_requires_anchor_colours() {
        assert_eq!(
            build(10, 2.0, vec![]),
            Err(JuliaError::Palette(PaletteError::NoAnchorColours))
        );
    }

    #[test]
    fn test_defaults() {
        let params = JuliaParameters::with_defaults(Complex::new(0.285, 0.01));

        assert_eq!(params.iterations(), 100);
        assert_eq!(params.max_modulus(), 1000.0);
        assert_eq!(params.window(), &Window::default());
        assert_eq!(params.anchor_colours(), &DEFAULT_ANCHOR_COLOURS);
        assert_eq!(params.interior_colour(), Colour::BLACK);
    }

    #[test]
    fn test_constraints_serialise_camel_case() {
        let json = serde_json::to_value(Constraints::current()).unwrap();

        assert_eq!(json["iterationsLimit"], 10_000);
        assert_eq!(json["modulusLimit"], 1_000_000.0);
        assert_eq!(json["resolutionLimit"], 10_000);
    }
}
