//! Scrolling ground strip.
//!
//! Two copies of the ground tile sit edge to edge. Whichever copy leaves the
//! screen on the left is moved to the right of the other one.

use super::bird::Bird;
use super::hitbox::{Hitbox, SpriteSet};
use crate::constants::BASE_VELOCITY;

#[derive(Debug, Clone, PartialEq)]
pub struct Base {
    pub x1: f64,
    pub x2: f64,
    /// Ground line; the bird loses once its bottom edge goes below it.
    pub y: f64,
    pub velocity: f64,
    tile_width: f64,
}

impl Base {
    pub fn new<S: SpriteSet>(x: f64, y: f64, sprites: &S) -> Self {
        let tile_width = sprites.base().width() as f64;
        Self {
            x1: x,
            x2: x + tile_width,
            y,
            velocity: BASE_VELOCITY,
            tile_width,
        }
    }

    pub fn tile_width(&self) -> f64 {
        self.tile_width
    }

    pub fn update<S: SpriteSet>(&mut self, bird: &mut Bird, sprites: &S) {
        self.x1 -= self.velocity;
        self.x2 -= self.velocity;

        if self.x2 < 0.0 {
            self.x1 = self.x2 + self.tile_width;
        }
        if self.x1 < 0.0 {
            self.x2 = self.x1 + self.tile_width;
        }

        self.collide(bird, sprites);
    }

    /// Set the bird's ground flag from its current bottom edge.
    ///
    /// The flag is cleared again when the bird is above the line.
    pub fn collide<S: SpriteSet>(&self, bird: &mut Bird, sprites: &S) {
        let bird_height = bird.hitbox(sprites).height() as f64;
        bird.colliding_base = bird.y + bird_height > self.y;
    }
}
