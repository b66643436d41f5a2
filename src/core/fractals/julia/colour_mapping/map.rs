use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::julia::colour_mapping::palette::Palette;

/// Colours an escape step by its palette entry, falling back to the interior
/// colour for steps the palette does not cover (including the interior sentinel).
#[derive(Debug, Clone, Copy)]
pub struct GradientColourMap<'a> {
    palette: &'a Palette,
    interior: Colour,
}

impl<'a> GradientColourMap<'a> {
    #[must_use]
    pub fn new(palette: &'a Palette, interior: Colour) -> Self {
        Self { palette, interior }
    }
}

impl ColourMap<i32> for GradientColourMap<'_> {
    fn map(&self, step: i32) -> Colour {
        usize::try_from(step)
            .ok()
            .and_then(|step| step.checked_sub(1))
            .and_then(|index| self.palette.gradient().get(index))
            .copied()
            .unwrap_or(self.interior)
    }
}
