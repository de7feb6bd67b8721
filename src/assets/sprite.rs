//! RGBA sprite images with their collision masks.

use super::mask::Mask;
use crate::constants::MASK_ALPHA_THRESHOLD;
use crate::error::AssetError;

/// Straight (non-premultiplied) RGBA.
pub type Rgba = [u8; 4];

pub const TRANSPARENT: Rgba = [0, 0, 0, 0];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
    mask: Mask,
}

impl Sprite {
    /// Build a sprite from row-major pixels. The mask marks every pixel whose
    /// alpha is above [`MASK_ALPHA_THRESHOLD`].
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self, AssetError> {
        if width == 0 || height == 0 {
            return Err(AssetError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(AssetError::PixelCount {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self::from_pixels(width, height, pixels))
    }

    fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Self {
        let mask = Mask::from_fn(width, height, |x, y| {
            pixels[(y * width + x) as usize][3] > MASK_ALPHA_THRESHOLD
        });
        Self {
            width,
            height,
            pixels,
            mask,
        }
    }

    /// Paint a sprite pixel by pixel. Zero dimensions are raised to 1.
    pub fn from_fn(width: u32, height: u32, paint: impl Fn(u32, u32) -> Rgba) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| paint(x, y))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Out-of-bounds reads are transparent.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        if x >= self.width || y >= self.height {
            return TRANSPARENT;
        }
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn flipped_vertically(&self) -> Self {
        let width = self.width as usize;
        let pixels = self
            .pixels
            .chunks(width)
            .rev()
            .flat_map(|row| row.iter().copied())
            .collect();
        Self {
            width: self.width,
            height: self.height,
            pixels,
            mask: self.mask.flipped_vertically(),
        }
    }
}
