//! Rectangular sprite set for exact collision geometry in unit tests.

use super::hitbox::{BirdPose, Hitbox, SpriteSet};

#[derive(Debug, Clone, Copy)]
pub struct RectMask {
    pub width: u32,
    pub height: u32,
}

impl Hitbox for RectMask {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn collides_with(&self, other: &Self, (dx, dy): (i32, i32)) -> bool {
        dx < self.width as i32
            && dx + other.width as i32 > 0
            && dy < self.height as i32
            && dy + other.height as i32 > 0
    }
}

/// Classic sprite dimensions with fully solid rectangles.
pub struct RectSprites {
    pub bird: RectMask,
    pub pipe: RectMask,
    pub base: RectMask,
}

impl RectSprites {
    pub fn classic() -> Self {
        Self {
            bird: RectMask {
                width: 34,
                height: 24,
            },
            pipe: RectMask {
                width: 52,
                height: 320,
            },
            base: RectMask {
                width: 336,
                height: 112,
            },
        }
    }
}

impl SpriteSet for RectSprites {
    type Mask = RectMask;

    fn bird(&self, _pose: BirdPose) -> &RectMask {
        &self.bird
    }

    fn pipe_bottom(&self) -> &RectMask {
        &self.pipe
    }

    fn pipe_top(&self) -> &RectMask {
        &self.pipe
    }

    fn base(&self) -> &RectMask {
        &self.base
    }
}
