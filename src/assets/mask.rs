//! Packed pixel-occupancy bitmaps and overlap queries.

use crate::game::Hitbox;

const WORD_BITS: u32 = 64;

/// One bit per pixel, rows padded to whole 64-bit words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    words_per_row: usize,
    bits: Vec<u64>,
}

impl Mask {
    /// Empty mask of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        let words_per_row = width.div_ceil(WORD_BITS) as usize;
        Self {
            width,
            height,
            words_per_row,
            bits: vec![0; words_per_row * height as usize],
        }
    }

    /// Every pixel solid.
    pub fn filled(width: u32, height: u32) -> Self {
        Self::from_fn(width, height, |_, _| true)
    }

    pub fn from_fn(width: u32, height: u32, solid: impl Fn(u32, u32) -> bool) -> Self {
        let mut mask = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if solid(x, y) {
                    mask.set(x, y, true);
                }
            }
        }
        mask
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn slot(&self, x: u32, y: u32) -> (usize, u64) {
        let index = y as usize * self.words_per_row + (x / WORD_BITS) as usize;
        (index, 1u64 << (x % WORD_BITS))
    }

    /// Out-of-bounds pixels read as empty.
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let (index, bit) = self.slot(x, y);
        self.bits[index] & bit != 0
    }

    pub fn set(&mut self, x: u32, y: u32, solid: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let (index, bit) = self.slot(x, y);
        if solid {
            self.bits[index] |= bit;
        } else {
            self.bits[index] &= !bit;
        }
    }

    /// Number of solid pixels.
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|w| w.count_ones()).sum()
    }

    pub fn flipped_vertically(&self) -> Self {
        let mut flipped = Self::new(self.width, self.height);
        for y in 0..self.height {
            let src = y as usize * self.words_per_row;
            let dst = (self.height - 1 - y) as usize * self.words_per_row;
            flipped.bits[dst..dst + self.words_per_row]
                .copy_from_slice(&self.bits[src..src + self.words_per_row]);
        }
        flipped
    }

    /// First pixel (in `self` coordinates, row-major) that is solid in both
    /// masks when `other`'s top-left sits at `offset` relative to ours.
    pub fn overlap(&self, other: &Mask, (dx, dy): (i32, i32)) -> Option<(u32, u32)> {
        let x_start = dx.max(0);
        let y_start = dy.max(0);
        let x_end = (dx + other.width as i32).min(self.width as i32);
        let y_end = (dy + other.height as i32).min(self.height as i32);

        for y in y_start..y_end {
            for x in x_start..x_end {
                let (sx, sy) = (x as u32, y as u32);
                if self.get(sx, sy) && other.get((x - dx) as u32, (y - dy) as u32) {
                    return Some((sx, sy));
                }
            }
        }
        None
    }
}

impl Hitbox for Mask {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn collides_with(&self, other: &Self, offset: (i32, i32)) -> bool {
        self.overlap(other, offset).is_some()
    }
}
