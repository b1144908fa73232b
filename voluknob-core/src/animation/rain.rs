//! Falling characters ("digital rain")
//!
//! The panel is split into 6-pixel columns. Each column has a drop counter
//! giving the 8-pixel row of its next character. Every frame draws one
//! random character per column at its drop position and moves the drop
//! down a row. A drop restarts at the top once it has fallen past the
//! bottom edge, or at random with a fixed probability, which staggers the
//! columns.

use rand::{Rng, RngCore};

use crate::display::{FrameBuffer, HEIGHT, WIDTH};

/// Characters the rain is made of
pub const GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%^&*";

/// Horizontal distance between columns
pub const COLUMN_PITCH: i32 = 6;

/// Vertical distance between rows
pub const ROW_PITCH: i32 = 8;

/// Number of columns across the panel
pub const COLUMNS: usize = WIDTH / COLUMN_PITCH as usize;

/// Rain animation state
#[derive(Debug, Clone)]
pub struct Rain {
    drops: [u8; COLUMNS],
    reset_probability: f64,
}

impl Rain {
    /// Start with every drop at the top
    ///
    /// `reset_probability` is clamped to [0, 1]; NaN counts as 0.
    pub fn new(reset_probability: f32) -> Self {
        let p = if reset_probability.is_nan() {
            0.0
        } else {
            reset_probability.clamp(0.0, 1.0) as f64
        };
        Self {
            drops: [0; COLUMNS],
            reset_probability: p,
        }
    }

    /// Current drop row for each column
    pub fn drops(&self) -> &[u8; COLUMNS] {
        &self.drops
    }

    /// Draw one frame on top of whatever `frame` holds and advance the drops
    pub fn draw_frame<R: RngCore>(&mut self, frame: &mut FrameBuffer, rng: &mut R) {
        for (column, drop) in self.drops.iter_mut().enumerate() {
            let glyph = GLYPHS[rng.gen_range(0..GLYPHS.len())] as char;
            frame.draw_char(glyph, column as i32 * COLUMN_PITCH, *drop as i32 * ROW_PITCH);

            *drop += 1;
            if *drop as i32 * ROW_PITCH > HEIGHT as i32 || rng.gen_bool(self.reset_probability) {
                *drop = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_column_count() {
        assert_eq!(COLUMNS, 21);
        assert_eq!(Rain::new(0.15).drops().len(), 21);
    }

    #[test]
    fn test_drops_fall_one_row_per_frame() {
        let mut rain = Rain::new(0.0);
        let mut rng = rng();
        let mut fb = FrameBuffer::new();

        for expected in 1..=3u8 {
            rain.draw_frame(&mut fb, &mut rng);
            assert!(rain.drops().iter().all(|&d| d == expected));
        }
    }

    #[test]
    fn test_drop_restarts_past_bottom() {
        let mut rain = Rain::new(0.0);
        let mut rng = rng();
        let mut fb = FrameBuffer::new();

        // Row 8 starts at y = 64 (off panel), still kept
        for _ in 0..8 {
            rain.draw_frame(&mut fb, &mut rng);
        }
        assert!(rain.drops().iter().all(|&d| d == 8));

        // 9 * 8 > 64
        rain.draw_frame(&mut fb, &mut rng);
        assert!(rain.drops().iter().all(|&d| d == 0));
    }

    #[test]
    fn test_certain_reset_keeps_drops_at_top() {
        let mut rain = Rain::new(1.0);
        let mut rng = rng();
        let mut fb = FrameBuffer::new();

        for _ in 0..5 {
            fb.clear();
            rain.draw_frame(&mut fb, &mut rng);
            assert!(rain.drops().iter().all(|&d| d == 0));
        }

        // Everything drawn on the first text row
        for y in ROW_PITCH..HEIGHT as i32 {
            for x in 0..WIDTH as i32 {
                assert!(!fb.pixel(x, y));
            }
        }
    }

    #[test]
    fn test_random_resets_stagger_columns() {
        let mut rain = Rain::new(0.15);
        let mut rng = rng();
        let mut fb = FrameBuffer::new();

        for _ in 0..6 {
            rain.draw_frame(&mut fb, &mut rng);
        }

        let first = rain.drops()[0];
        assert!(
            rain.drops().iter().any(|&d| d != first),
            "expected staggered drops, got {:?}",
            rain.drops()
        );
    }

    #[test]
    fn test_frame_draws_every_column() {
        let mut rain = Rain::new(0.0);
        let mut rng = rng();
        let mut fb = FrameBuffer::new();

        rain.draw_frame(&mut fb, &mut rng);

        for column in 0..COLUMNS as i32 {
            let x0 = column * COLUMN_PITCH;
            let lit = (x0..x0 + COLUMN_PITCH)
                .flat_map(|x| (0..ROW_PITCH).map(move |y| (x, y)))
                .any(|(x, y)| fb.pixel(x, y));
            assert!(lit, "column {} is empty", column);
        }
    }

    #[test]
    fn test_probability_is_clamped() {
        let mut fb = FrameBuffer::new();
        let mut rng = rng();

        // Out-of-range values must not panic inside gen_bool
        Rain::new(2.0).draw_frame(&mut fb, &mut rng);
        Rain::new(-1.0).draw_frame(&mut fb, &mut rng);
        Rain::new(f32::NAN).draw_frame(&mut fb, &mut rng);
    }
}
