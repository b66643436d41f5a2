use crate::core::data::colour::Colour;
use crate::core::fractals::julia::colour_mapping::errors::PaletteError;

/// A fixed-length colour gradient expanded from a short list of anchor colours.
///
/// The gradient starts at the first anchor and, for sizes of two or more, ends
/// exactly at the last one. Each pair of consecutive anchors gets a roughly equal
/// share of the slots, with channels interpolated linearly in integer arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    anchors: Vec<Colour>,
    size: usize,
    gradient: Vec<Colour>,
}

fn interpolate_channel(start: u8, end: u8, step: i64, last_step: i64) -> u8 {
    let start = i64::from(start);
    let end = i64::from(end);

    // integer division truncates towards zero, keeping the result between start and end
    (start + (end - start) * step / last_step) as u8
}

fn interpolate(start: Colour, end: Colour, step: i64, last_step: i64) -> Colour {
    Colour {
        r: interpolate_channel(start.r, end.r, step, last_step),
        g: interpolate_channel(start.g, end.g, step, last_step),
        b: interpolate_channel(start.b, end.b, step, last_step),
    }
}

fn build_gradient(anchors: &[Colour], size: usize) -> Vec<Colour> {
    let first = anchors[0];

    if anchors.len() == 1 {
        return vec![first; size];
    }

    let intervals = anchors.len() - 1;
    let mut gradient = Vec::with_capacity(size);
    gradient.push(first);

    for (i, pair) in anchors.windows(2).enumerate() {
        let remaining_intervals = (intervals - i) as i64;
        let remaining_slots = size as i64 - gradient.len() as i64 + remaining_intervals;
        let segment_size = remaining_slots / remaining_intervals;

        // a segment of one colour is just its start, which is already in place
        if segment_size < 2 {
            continue;
        }

        let last_step = segment_size - 1;
        gradient.extend((1..segment_size).map(|step| interpolate(pair[0], pair[1], step, last_step)));
    }

    gradient
}

impl Palette {
    pub fn build(anchors: &[Colour], size: usize) -> Result<Self, PaletteError> {
        if anchors.is_empty() {
            return Err(PaletteError::NoAnchorColours);
        }

        if size == 0 {
            return Err(PaletteError::ZeroPaletteSize);
        }

        Ok(Self {
            anchors: anchors.to_vec(),
            size,
            gradient: build_gradient(anchors, size),
        })
    }

    /// Returns `self` untouched when `anchors` and `size` match what it was built
    /// from, otherwise builds a fresh palette.
    pub fn rebuilt(self, anchors: &[Colour], size: usize) -> Result<Self, PaletteError> {
        if self.matches(anchors, size) {
            return Ok(self);
        }

        Self::build(anchors, size)
    }

    #[must_use]
    pub fn matches(&self, anchors: &[Colour], size: usize) -> bool {
        self.size == size && self.anchors == anchors
    }

    #[must_use]
    pub fn anchors(&self) -> &[Colour] {
        &self.anchors
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn gradient(&self) -> &[Colour] {
        &self.gradient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE_WHITE_RED: [Colour; 3] = [Colour::BLUE, Colour::WHITE, Colour::RED];

    #[test]
    fn test_blue_white_red_hundred() {
        let palette = Palette::build(&BLUE_WHITE_RED, 100).unwrap();
        let gradient = palette.gradient();

        assert_eq!(gradient.len(), 100);
        assert_eq!(gradient[0], Colour::BLUE);
        assert_eq!(gradient[49], Colour::WHITE);
        assert_eq!(gradient[99], Colour::RED);
        // 255 * 1 / 49 truncates to 5
        assert_eq!(gradient[1], Colour::new(5, 5, 255));
    }

    #[test]
    fn test_channels_move_monotonically_within_segments() {
        let palette = Palette::build(&BLUE_WHITE_RED, 100).unwrap();
        let gradient = palette.gradient();

        for pair in gradient[..50].windows(2) {
            assert!(pair[0].r <= pair[1].r);
            assert!(pair[0].g <= pair[1].g);
            assert_eq!(pair[1].b, 255);
        }

        for pair in gradient[49..].windows(2) {
            assert_eq!(pair[1].r, 255);
            assert!(pair[0].g >= pair[1].g);
            assert!(pair[0].b >= pair[1].b);
        }
    }

    #[test]
    fn test_length_and_last_anchor_hold_across_sizes() {
        let anchor_sets: [&[Colour]; 3] = [
            &[Colour::BLACK, Colour::WHITE],
            &BLUE_WHITE_RED,
            &[
                Colour::RED,
                Colour::GREEN,
                Colour::BLUE,
                Colour::WHITE,
                Colour::BLACK,
            ],
        ];

        for anchors in anchor_sets {
            for size in 2..=120 {
                let palette = Palette::build(anchors, size).unwrap();
                let gradient = palette.gradient();

                assert_eq!(gradient.len(), size, "anchors {anchors:?}, size {size}");
                assert_eq!(gradient[0], anchors[0]);
                assert_eq!(gradient[size - 1], anchors[anchors.len() - 1]);
            }
        }
    }

    #[test]
    fn test_size_one_is_first_anchor() {
        let palette = Palette::build(&BLUE_WHITE_RED, 1).unwrap();

        assert_eq!(palette.gradient(), &[Colour::BLUE]);
    }

    #[test]
    fn test_fewer_slots_than_anchors_skips_middle_anchors() {
        let palette = Palette::build(&BLUE_WHITE_RED, 2).unwrap();

        assert_eq!(palette.gradient(), &[Colour::BLUE, Colour::RED]);
    }

    #[test]
    fn test_single_anchor_is_flat() {
        let palette = Palette::build(&[Colour::GREEN], 4).unwrap();

        assert_eq!(palette.gradient(), &[Colour::GREEN; 4]);
    }

    #[test]
    fn test_rejects_empty_anchors_and_zero_size() {
        assert_eq!(Palette::build(&[], 10), Err(PaletteError::NoAnchorColours));
        assert_eq!(
            Palette::build(&BLUE_WHITE_RED, 0),
            Err(PaletteError::ZeroPaletteSize)
        );
    }

    #[test]
    fn test_rebuilt_with_same_inputs_keeps_gradient() {
        let palette = Palette::build(&BLUE_WHITE_RED, 64).unwrap();
        let before = palette.gradient().as_ptr();

        let palette = palette.rebuilt(&BLUE_WHITE_RED, 64).unwrap();

        assert_eq!(palette.gradient().as_ptr(), before);
    }

    #[test]
    fn test_rebuilt_with_new_size_recomputes() {
        let palette = Palette::build(&BLUE_WHITE_RED, 64).unwrap();

        let palette = palette.rebuilt(&BLUE_WHITE_RED, 10).unwrap();

        assert_eq!(palette.size(), 10);
        assert_eq!(palette.gradient().len(), 10);
        assert_eq!(palette, Palette::build(&BLUE_WHITE_RED, 10).unwrap());
    }

    #[test]
    fn test_rebuilt_with_new_anchors_recomputes() {
        let palette = Palette::build(&BLUE_WHITE_RED, 10).unwrap();

        let palette = palette.rebuilt(&[Colour::BLACK, Colour::WHITE], 10).unwrap();

        assert_eq!(palette.anchors(), &[Colour::BLACK, Colour::WHITE]);
        assert_eq!(palette.gradient()[9], Colour::WHITE);
    }

    #[test]
    fn test_rebuilt_propagates_validation_errors() {
        let palette = Palette::build(&BLUE_WHITE_RED, 10).unwrap();

        assert_eq!(palette.rebuilt(&[], 10), Err(PaletteError::NoAnchorColours));
    }
}
