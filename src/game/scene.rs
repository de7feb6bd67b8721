//! Draw list handed to the rendering layer each tick.

use super::hitbox::BirdPose;
use crate::constants::SCORE_LABEL;

/// Sprite a draw command refers to; resolved to pixels by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Background,
    Base,
    PipeBottom,
    PipeTop,
    Bird(BirdPose),
}

/// Blit `sprite` with its top-left corner at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand {
    pub sprite: SpriteId,
    pub x: i32,
    pub y: i32,
}

impl DrawCommand {
    pub fn new(sprite: SpriteId, x: i32, y: i32) -> Self {
        Self { sprite, x, y }
    }
}

/// Banner drawn over the frozen frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Paused,
    Lost,
}

/// Everything needed to draw one frame, back to front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub commands: Vec<DrawCommand>,
    pub score: u32,
    pub overlay: Option<Overlay>,
}

impl Scene {
    /// Score line anchored to the top-right corner.
    pub fn score_text(&self) -> String {
        format!("{}: {}", SCORE_LABEL, self.score)
    }
}
