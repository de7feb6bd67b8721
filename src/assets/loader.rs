//! PNG sprite loading via the `image` crate.

use super::sprite::Sprite;
use crate::error::AssetError;
use std::path::Path;

// File names inside an asset directory
pub const BIRD_FILES: [&str; 3] = ["bird1.png", "bird2.png", "bird3.png"];
pub const PIPE_FILE: &str = "pipe.png";
pub const BASE_FILE: &str = "base.png";
pub const BACKGROUND_FILE: &str = "bg.png";

/// Decode one image file into an RGBA sprite.
pub fn load_sprite(path: &Path) -> Result<Sprite, AssetError> {
    if !path.is_file() {
        return Err(AssetError::Missing(path.to_path_buf()));
    }

    let image = image::open(path)
        .map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    let (width, height) = image.dimensions();
    let pixels = image.pixels().map(|p| p.0).collect();
    log::debug!("loaded {} ({}x{})", path.display(), width, height);
    Sprite::new(width, height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_load_png_with_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tile.png");

        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(2, 1, Rgba([0, 0, 255, 200]));
        img.save(&path).unwrap();

        let sprite = load_sprite(&path).unwrap();
        assert_eq!((sprite.width(), sprite.height()), (3, 2));
        assert_eq!(sprite.pixel(0, 0), [255, 0, 0, 255]);
        assert!(sprite.mask().get(0, 0));
        assert!(sprite.mask().get(2, 1));
        assert!(!sprite.mask().get(1, 0));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_sprite(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, AssetError::Missing(_)));
    }

    #[test]
    fn test_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let err = load_sprite(&path).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }
}
