//! Scripted player: flap whenever the bird sinks to the bottom of the gap.

use crate::game::{Hitbox, SpriteSet, World};

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    margin: f64,
}

impl Autopilot {
    pub fn new(margin: f64) -> Self {
        Self { margin }
    }

    /// True when the bird is not rising and its lower edge is within
    /// `margin` of the bottom pipe's top.
    pub fn should_flap<S: SpriteSet>(&self, world: &World, sprites: &S) -> bool {
        let bird = &world.bird;
        if bird.velocity < 0.0 {
            return false;
        }
        let bird_bottom = bird.y + bird.hitbox(sprites).height() as f64;
        let (_, gap_bottom) = world.pipe.bottom_position();
        bird_bottom + self.margin >= gap_bottom
    }
}
