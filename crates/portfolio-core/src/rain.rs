//! Matrix rain background model.
//!
//! One drop per glyph-wide column falls a row per step, leaving a short trail
//! of random glyphs behind it. Rendering is left to the front end.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

pub const GLYPH_SIZE_PX: f32 = 14.0;
pub const TRAIL_LEN: usize = 14;
const RESET_CHANCE: f32 = 0.025;
const GLYPHS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン";

/// Brightness tier picked per glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainTone {
    Flash,
    Bright,
    Cyan,
    Dim,
}

impl RainTone {
    fn from_roll(roll: f32) -> Self {
        if roll > 0.95 {
            RainTone::Flash
        } else if roll > 0.8 {
            RainTone::Bright
        } else if roll > 0.5 {
            RainTone::Cyan
        } else {
            RainTone::Dim
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainGlyph {
    pub row: f32,
    pub ch: char,
    pub tone: RainTone,
}

#[derive(Debug, Clone)]
pub struct RainColumn {
    drop_row: f32,
    trail: VecDeque<RainGlyph>,
}

impl RainColumn {
    pub fn drop_row(&self) -> f32 {
        self.drop_row
    }

    /// Newest glyph first.
    pub fn trail(&self) -> impl Iterator<Item = &RainGlyph> {
        self.trail.iter()
    }
}

pub struct MatrixRain {
    width: f32,
    height: f32,
    glyph_size: f32,
    glyphs: Vec<char>,
    columns: Vec<RainColumn>,
    rng: StdRng,
}

impl MatrixRain {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut rain = Self {
            width: 0.0,
            height: 0.0,
            glyph_size: GLYPH_SIZE_PX,
            glyphs: GLYPHS.chars().collect(),
            columns: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        rain.resize(width, height);
        rain
    }

    pub fn glyph_size(&self) -> f32 {
        self.glyph_size
    }

    pub fn columns(&self) -> &[RainColumn] {
        &self.columns
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Match the column count to a new surface size. Existing columns keep
    /// their state; new ones start above the top edge.
    pub fn resize(&mut self, width: f32, height: f32) {
        let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        self.width = sanitize(width);
        self.height = sanitize(height);
        let count = (self.width / self.glyph_size).floor() as usize;
        if count < self.columns.len() {
            self.columns.truncate(count);
        }
        while self.columns.len() < count {
            let drop_row = self.rng.gen_range(-100.0f32..0.0);
            self.columns.push(RainColumn {
                drop_row,
                trail: VecDeque::with_capacity(TRAIL_LEN),
            });
        }
    }

    /// Advance every drop by one row.
    pub fn step(&mut self) {
        let rows = self.height / self.glyph_size;
        for column in &mut self.columns {
            let ch = self.glyphs[self.rng.gen_range(0..self.glyphs.len())];
            let tone = RainTone::from_roll(self.rng.r#gen::<f32>());
            column.trail.push_front(RainGlyph {
                row: column.drop_row,
                ch,
                tone,
            });
            column.trail.truncate(TRAIL_LEN);

            if column.drop_row > rows && self.rng.r#gen::<f32>() > 1.0 - RESET_CHANCE {
                column.drop_row = 0.0;
            }
            column.drop_row += 1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_count_follows_width() {
        let mut rain = MatrixRain::new(140.0, 280.0, 7);
        assert_eq!(rain.columns().len(), 10);
        rain.resize(70.0, 280.0);
        assert_eq!(rain.columns().len(), 5);
        rain.resize(f32::NAN, 280.0);
        assert!(rain.columns().is_empty());
    }

    #[test]
    fn drops_advance_and_trails_are_bounded() {
        let mut rain = MatrixRain::new(56.0, 140.0, 42);
        let before: Vec<f32> = rain.columns().iter().map(RainColumn::drop_row).collect();
        rain.step();
        for (column, start) in rain.columns().iter().zip(before) {
            assert_eq!(column.drop_row(), start + 1.0);
            assert_eq!(column.trail().count(), 1);
        }
        for _ in 0..(TRAIL_LEN * 3) {
            rain.step();
        }
        assert!(rain.columns().iter().all(|c| c.trail().count() == TRAIL_LEN));
    }

    #[test]
    fn tone_thresholds() {
        assert_eq!(RainTone::from_roll(0.99), RainTone::Flash);
        assert_eq!(RainTone::from_roll(0.9), RainTone::Bright);
        assert_eq!(RainTone::from_roll(0.6), RainTone::Cyan);
        assert_eq!(RainTone::from_roll(0.1), RainTone::Dim);
    }
}
