//! Sprite provider: the immutable bundle of images and collision masks built
//! once at startup and handed to the session.

pub mod builtin;
pub mod loader;
pub mod mask;
pub mod sprite;

pub use mask::Mask;
pub use sprite::{Rgba, Sprite, TRANSPARENT};

use crate::error::AssetError;
use crate::game::{BirdPose, SpriteId, SpriteSet};
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the sprites came from, for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Builtin,
    Directory(PathBuf),
}

impl fmt::Display for AssetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetSource::Builtin => write!(f, "built-in sprites"),
            AssetSource::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Assets {
    background: Sprite,
    birds: [Sprite; 3],
    pipe_bottom: Sprite,
    pipe_top: Sprite,
    base: Sprite,
    source: AssetSource,
}

impl Assets {
    /// Assemble a bundle. The top pipe is derived by mirroring `pipe`.
    pub fn from_sprites(
        background: Sprite,
        birds: [Sprite; 3],
        pipe: Sprite,
        base: Sprite,
        source: AssetSource,
    ) -> Self {
        let pipe_top = pipe.flipped_vertically();
        Self {
            background,
            birds,
            pipe_bottom: pipe,
            pipe_top,
            base,
            source,
        }
    }

    pub fn builtin() -> Self {
        Self::from_sprites(
            builtin::background(),
            BirdPose::ALL.map(builtin::bird),
            builtin::pipe(),
            builtin::base(),
            AssetSource::Builtin,
        )
    }

    /// Load `bird1..3.png`, `pipe.png`, `base.png` and `bg.png` from `dir`.
    /// Any missing or undecodable file fails the whole load.
    pub fn load_dir(dir: &Path) -> Result<Self, AssetError> {
        let [up, level, down] = loader::BIRD_FILES;
        let birds = [
            loader::load_sprite(&dir.join(up))?,
            loader::load_sprite(&dir.join(level))?,
            loader::load_sprite(&dir.join(down))?,
        ];
        let pipe = loader::load_sprite(&dir.join(loader::PIPE_FILE))?;
        let base = loader::load_sprite(&dir.join(loader::BASE_FILE))?;
        let background = loader::load_sprite(&dir.join(loader::BACKGROUND_FILE))?;

        Ok(Self::from_sprites(
            background,
            birds,
            pipe,
            base,
            AssetSource::Directory(dir.to_path_buf()),
        ))
    }

    /// Built-ins unless a directory is given.
    pub fn load(dir: Option<&Path>) -> Result<Self, AssetError> {
        let assets = match dir {
            Some(dir) => Self::load_dir(dir)?,
            None => Self::builtin(),
        };
        log::info!("using {}", assets.source);
        Ok(assets)
    }

    pub fn source(&self) -> &AssetSource {
        &self.source
    }

    /// Playfield size; the window is exactly the background image.
    pub fn screen_size(&self) -> (u32, u32) {
        (self.background.width(), self.background.height())
    }

    pub fn sprite(&self, id: SpriteId) -> &Sprite {
        match id {
            SpriteId::Background => &self.background,
            SpriteId::Base => &self.base,
            SpriteId::PipeBottom => &self.pipe_bottom,
            SpriteId::PipeTop => &self.pipe_top,
            SpriteId::Bird(pose) => &self.birds[pose.index()],
        }
    }
}

impl SpriteSet for Assets {
    type Mask = Mask;

    fn bird(&self, pose: BirdPose) -> &Mask {
        self.birds[pose.index()].mask()
    }

    fn pipe_bottom(&self) -> &Mask {
        self.pipe_bottom.mask()
    }

    fn pipe_top(&self) -> &Mask {
        self.pipe_top.mask()
    }

    fn base(&self) -> &Mask {
        self.base.mask()
    }
}
