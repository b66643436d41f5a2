use thiserror::Error;

pub const DEFAULT_WINDOW_MIN: f64 = -2.0;
pub const DEFAULT_WINDOW_MAX: f64 = 2.0;
pub const DEFAULT_RESOLUTION: usize = 480;
pub const RESOLUTION_UPPER_BOUND: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WindowError {
    #[error("window x range must satisfy min < max, got min {min} and max {max}")]
    InvalidXRange { min: f64, max: f64 },
    #[error("window y range must satisfy min < max, got min {min} and max {max}")]
    InvalidYRange { min: f64, max: f64 },
    #[error("window width must be in 1..=10000 pixels, got {width}")]
    WidthOutOfRange { width: usize },
    #[error("window height must be in 1..=10000 pixels, got {height}")]
    HeightOutOfRange { height: usize },
}

/// A rectangle of the complex plane sampled on a `width x height` pixel grid.
///
/// Samples along each axis are half-open: starting at `min`, each sample is the previous
/// one plus `step = (max - min) / n`, so `max` itself is never sampled. Samples must stay
/// an accumulated sum, not `min + k * step`; the two differ in the last bit.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
    width: usize,
    height: usize,
    x_samples: Vec<f64>,
    y_samples: Vec<f64>,
}

fn half_open_samples(min: f64, max: f64, count: usize) -> Vec<f64> {
    let step = (max - min) / count as f64;
    let mut samples = Vec::with_capacity(count);
    let mut last = min;

    samples.push(last);
    for _ in 1..count {
        last += step;
        samples.push(last);
    }

    samples
}

impl Window {
    pub fn new(
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
        width: usize,
        height: usize,
    ) -> Result<Self, WindowError> {
        // negated comparisons also reject NaN bounds
        if !(min_x < max_x) {
            return Err(WindowError::InvalidXRange {
                min: min_x,
                max: max_x,
            });
        }

        if !(min_y < max_y) {
            return Err(WindowError::InvalidYRange {
                min: min_y,
                max: max_y,
            });
        }

        if width == 0 || width > RESOLUTION_UPPER_BOUND {
            return Err(WindowError::WidthOutOfRange { width });
        }

        if height == 0 || height > RESOLUTION_UPPER_BOUND {
            return Err(WindowError::HeightOutOfRange { height });
        }

        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
            width,
            height,
            x_samples: half_open_samples(min_x, max_x, width),
            y_samples: half_open_samples(min_y, max_y, height),
        })
    }

    /// Same bounds on both axes and a square pixel grid.
    pub fn square(min: f64, max: f64, resolution: usize) -> Result<Self, WindowError> {
        Self::new(min, max, min, max, resolution, resolution)
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn x_samples(&self) -> &[f64] {
        &self.x_samples
    }

    #[must_use]
    pub fn y_samples(&self) -> &[f64] {
        &self.y_samples
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            min_x: DEFAULT_WINDOW_MIN,
            max_x: DEFAULT_WINDOW_MAX,
            min_y: DEFAULT_WINDOW_MIN,
            max_y: DEFAULT_WINDOW_MAX,
            width: DEFAULT_RESOLUTION,
            height: DEFAULT_RESOLUTION,
            x_samples: half_open_samples(DEFAULT_WINDOW_MIN, DEFAULT_WINDOW_MAX, DEFAULT_RESOLUTION),
            y_samples: half_open_samples(DEFAULT_WINDOW_MIN, DEFAULT_WINDOW_MAX, DEFAULT_RESOLUTION),
        }
    }
}
