//! Bitmap glyphs
//!
//! A bitmap is a list of rows. Each row is an integer whose lowest `width`
//! bits are pixels, most significant bit on the left.

/// Widest row a [`Bitmap`] can hold
pub const MAX_BITMAP_WIDTH: u8 = 16;

/// Fixed monochrome bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap {
    width: u8,
    rows: &'static [u16],
}

impl Bitmap {
    /// Create a bitmap from row patterns
    ///
    /// Panics (at compile time for constants) if `rows` is empty or longer
    /// than 255, or `width` is zero or wider than [`MAX_BITMAP_WIDTH`].
    pub const fn new(width: u8, rows: &'static [u16]) -> Self {
        assert!(width > 0 && width <= MAX_BITMAP_WIDTH, "bitmap width out of range");
        assert!(!rows.is_empty(), "bitmap has no rows");
        assert!(rows.len() <= u8::MAX as usize, "bitmap has too many rows");
        Self { width, rows }
    }

    /// Width in pixels
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Height in pixels (number of rows)
    pub const fn height(&self) -> u8 {
        self.rows.len() as u8
    }

    /// Check whether the pixel at (`x`, `y`) is set
    ///
    /// Out-of-range coordinates read as unset.
    pub fn pixel(&self, x: u8, y: u8) -> bool {
        if x >= self.width {
            return false;
        }
        match self.rows.get(y as usize) {
            Some(row) => row & (1 << (self.width - 1 - x)) != 0,
            None => false,
        }
    }

    /// Iterate over the lit pixels as (x, y)
    pub fn lit_pixels(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.height())
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .filter(move |&(x, y)| self.pixel(x, y))
    }

    /// Offsets that centre this bitmap on a `display_width` x `display_height` area
    pub fn centered_in(&self, display_width: u32, display_height: u32) -> (i32, i32) {
        let x = (display_width as i32 - self.width as i32) / 2;
        let y = (display_height as i32 - self.height() as i32) / 2;
        (x, y)
    }
}

/// Crossed-out speaker, shown when muting
pub const MUTE_ICON: Bitmap = Bitmap::new(
    8,
    &[
        0b0011_1100,
        0b0111_1110,
        0b1110_0111,
        0b1101_1011,
        0b1101_1011,
        0b1110_0111,
        0b0111_1110,
        0b0011_1100,
    ],
);

/// Open ring, shown when unmuting
pub const UNMUTE_ICON: Bitmap = Bitmap::new(
    8,
    &[
        0b0011_1100,
        0b0110_0110,
        0b1100_0011,
        0b1100_0011,
        0b1100_0011,
        0b1100_0011,
        0b0110_0110,
        0b0011_1100,
    ],
);

/// Volume up
///
/// Centred by its full 10 rows, so the tip lands at y = 27. Centring it
/// as a 5-row glyph would put it 2 px lower, at y = 29.
pub const UP_ARROW: Bitmap = Bitmap::new(
    5,
    &[
        0b00100, 0b01110, 0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100,
    ],
);

/// Volume down
pub const DOWN_ARROW: Bitmap = Bitmap::new(
    5,
    &[
        0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111, 0b01110, 0b00100,
    ],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        assert_eq!((MUTE_ICON.width(), MUTE_ICON.height()), (8, 8));
        assert_eq!((UNMUTE_ICON.width(), UNMUTE_ICON.height()), (8, 8));
        assert_eq!((UP_ARROW.width(), UP_ARROW.height()), (5, 10));
        assert_eq!((DOWN_ARROW.width(), DOWN_ARROW.height()), (5, 10));
    }

    #[test]
    fn test_msb_is_leftmost() {
        const CORNER: Bitmap = Bitmap::new(8, &[0b1000_0000]);
        assert!(CORNER.pixel(0, 0));
        for x in 1..8 {
            assert!(!CORNER.pixel(x, 0));
        }
    }

    #[test]
    fn test_bits_above_width_ignored() {
        // Bit 5 is outside a 5-wide bitmap
        const WIDE: Bitmap = Bitmap::new(5, &[0b10_0000]);
        assert_eq!(WIDE.lit_pixels().count(), 0);
    }

    #[test]
    fn test_out_of_range_reads_unset() {
        assert!(!UP_ARROW.pixel(5, 0));
        assert!(!UP_ARROW.pixel(0, 10));
    }

    #[test]
    fn test_arrows_are_mirror_images() {
        for y in 0..UP_ARROW.height() {
            for x in 0..UP_ARROW.width() {
                assert_eq!(
                    UP_ARROW.pixel(x, y),
                    DOWN_ARROW.pixel(x, UP_ARROW.height() - 1 - y)
                );
            }
        }
    }

    #[test]
    fn test_up_arrow_tip_is_centered() {
        assert_eq!(UP_ARROW.lit_pixels().next(), Some((2, 0)));
        assert_eq!(DOWN_ARROW.lit_pixels().last(), Some((2, 9)));
    }

    #[test]
    #[should_panic(expected = "too many rows")]
    fn test_rejects_more_than_255_rows() {
        let rows: &'static [u16] = Vec::leak(vec![0b1; 256]);
        Bitmap::new(1, rows);
    }

    #[test]
    fn test_255_rows_keep_their_height() {
        let rows: &'static [u16] = Vec::leak(vec![0b1; 255]);
        assert_eq!(Bitmap::new(1, rows).height(), 255);
    }

    #[test]
    fn test_centered_in_display() {
        assert_eq!(MUTE_ICON.centered_in(128, 64), (60, 28));
        assert_eq!(UP_ARROW.centered_in(128, 64), (61, 27));
    }
}
