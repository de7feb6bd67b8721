//! The pipe pair obstacle.
//!
//! Only one pair is ever live. When it scrolls off the left edge it is
//! recycled in place: moved back to the right with a fresh gap position.

use super::bird::Bird;
use super::hitbox::{Hitbox, SpriteSet};
use crate::constants::{PIPE_GAP, PIPE_OFFSET_MAX, PIPE_OFFSET_MIN, PIPE_RESPAWN_X, PIPE_VELOCITY};
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub x: f64,
    /// Vertical anchor of the bottom pipe before the gap offset is applied.
    pub y: f64,
    pub velocity: f64,
    /// Distance from the gap offset up to the top pipe's top edge.
    pub gap: f64,
    /// Random gap offset, drawn from `[PIPE_OFFSET_MIN, PIPE_OFFSET_MAX]`.
    pub pos: i32,
    /// Set once the bird has cleared this pair; cleared on respawn.
    pub passed: bool,
}

impl Pipe {
    pub fn new<R: Rng>(x: f64, y: f64, rng: &mut R) -> Self {
        Self {
            x,
            y,
            velocity: PIPE_VELOCITY,
            gap: PIPE_GAP,
            pos: random_offset(rng),
            passed: false,
        }
    }

    /// Scroll, recycle if off-screen, test collision, then score.
    ///
    /// Returns the new score: `score + 1` the first time the bird is past the
    /// pipe's right edge, otherwise `score` unchanged.
    pub fn update<S: SpriteSet, R: Rng>(
        &mut self,
        bird: &mut Bird,
        score: u32,
        sprites: &S,
        rng: &mut R,
    ) -> u32 {
        let width = sprites.pipe_top().width() as f64;

        self.x -= self.velocity;
        if self.x + width < 0.0 {
            self.respawn(rng);
        }

        self.collide(bird, sprites);

        if bird.x > self.x + width && !self.passed {
            self.passed = true;
            return score + 1;
        }
        score
    }

    fn respawn<R: Rng>(&mut self, rng: &mut R) {
        self.x = PIPE_RESPAWN_X;
        self.pos = random_offset(rng);
        self.passed = false;
        log::trace!("pipe respawned with gap offset {}", self.pos);
    }

    /// Re-evaluate the bird's pipe flag against both halves of the pair.
    ///
    /// The flag is overwritten every call, so a bird that leaves the overlap
    /// stops counting as colliding.
    pub fn collide<S: SpriteSet>(&self, bird: &mut Bird, sprites: &S) {
        let bird_mask = bird.hitbox(sprites);
        let bird_y = bird.y.round_ties_even();
        let dx = to_pixels(self.x - bird.x);

        let bottom_offset = (dx, to_pixels(self.y + self.pos as f64 - bird_y));
        let top_offset = (dx, to_pixels(self.pos as f64 - self.gap - bird_y));

        bird.colliding_pipe = bird_mask.collides_with(sprites.pipe_bottom(), bottom_offset)
            || bird_mask.collides_with(sprites.pipe_top(), top_offset);
    }

    /// Top-left of the bottom pipe.
    pub fn bottom_position(&self) -> (f64, f64) {
        (self.x, self.y + self.pos as f64)
    }

    /// Top-left of the mirrored top pipe.
    pub fn top_position(&self) -> (f64, f64) {
        (self.x, self.pos as f64 - self.gap)
    }
}

fn random_offset<R: Rng>(rng: &mut R) -> i32 {
    rng.gen_range(PIPE_OFFSET_MIN..=PIPE_OFFSET_MAX)
}

fn to_pixels(value: f64) -> i32 {
    value.round_ties_even() as i32
}
