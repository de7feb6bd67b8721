//! What the simulation needs from the sprite provider.
//!
//! The core never looks at pixels. It asks a [`SpriteSet`] for the hitbox of
//! each actor and asks hitboxes whether they overlap at a given offset.

/// Pixel-occupancy capability of a loaded sprite.
pub trait Hitbox {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// True when a solid pixel of `self` coincides with a solid pixel of
    /// `other` placed at `offset` (other's top-left relative to self's top-left).
    fn collides_with(&self, other: &Self, offset: (i32, i32)) -> bool;
}

/// Wing position of one bird sprite variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BirdPose {
    WingsUp,
    Level,
    WingsDown,
}

impl BirdPose {
    pub const ALL: [BirdPose; 3] = [BirdPose::WingsUp, BirdPose::Level, BirdPose::WingsDown];

    /// Position of this pose in [`BirdPose::ALL`].
    pub fn index(self) -> usize {
        match self {
            BirdPose::WingsUp => 0,
            BirdPose::Level => 1,
            BirdPose::WingsDown => 2,
        }
    }
}

/// Flap cycle. The level pose appears twice so the wing sweeps back up.
pub const BIRD_ANIMATION: [BirdPose; 4] = [
    BirdPose::WingsUp,
    BirdPose::Level,
    BirdPose::WingsDown,
    BirdPose::Level,
];

/// Read-only bundle of hitboxes for every actor sprite.
pub trait SpriteSet {
    type Mask: Hitbox;

    fn bird(&self, pose: BirdPose) -> &Self::Mask;
    fn pipe_bottom(&self) -> &Self::Mask;
    /// The bottom pipe mirrored vertically.
    fn pipe_top(&self) -> &Self::Mask;
    fn base(&self) -> &Self::Mask;
}

impl<T: SpriteSet + ?Sized> SpriteSet for &T {
    type Mask = T::Mask;

    fn bird(&self, pose: BirdPose) -> &Self::Mask {
        (**self).bird(pose)
    }

    fn pipe_bottom(&self) -> &Self::Mask {
        (**self).pipe_bottom()
    }

    fn pipe_top(&self) -> &Self::Mask {
        (**self).pipe_top()
    }

    fn base(&self) -> &Self::Mask {
        (**self).base()
    }
}
