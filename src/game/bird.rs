//! The player-controlled bird: vertical physics, flap animation and the two
//! collision flags set by the obstacles.

use super::hitbox::{BirdPose, SpriteSet, BIRD_ANIMATION};
use crate::constants::{
    AIRBORNE_STEP, BIRD_ACCELERATION, JUMP_VELOCITY, MAX_AIRBORNE_TIME, MAX_SPEED,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Horizontal position; fixed for the whole round.
    pub x: f64,
    /// Vertical position of the sprite's top edge (down is positive).
    pub y: f64,
    /// Vertical velocity in units per tick, kept within `[-MAX_SPEED, MAX_SPEED]`.
    pub velocity: f64,
    pub acceleration: f64,
    /// Time since the last jump, in `[0, MAX_AIRBORNE_TIME]`.
    pub airborne_time: f64,
    /// Position in [`BIRD_ANIMATION`].
    pub frame: usize,
    pub colliding_pipe: bool,
    pub colliding_base: bool,
}

impl Bird {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
            acceleration: BIRD_ACCELERATION,
            airborne_time: 0.0,
            frame: 0,
            colliding_pipe: false,
            colliding_base: false,
        }
    }

    /// Flap: full upward speed, applied to the position straight away.
    pub fn jump(&mut self) {
        self.velocity = JUMP_VELOCITY;
        self.y += self.velocity;
        self.airborne_time = 0.0;
    }

    pub fn has_lost(&self) -> bool {
        self.colliding_pipe || self.colliding_base
    }

    /// Advance one tick.
    ///
    /// The displacement `0.5·a·t² + v·t` mixes the already-updated velocity
    /// with the quadratic term. It is not exact kinematics, but it is the
    /// motion players expect, so it stays as is.
    pub fn update(&mut self) {
        self.animate();

        let t = self.airborne_time;
        self.velocity = (self.velocity + self.acceleration * t).clamp(-MAX_SPEED, MAX_SPEED);
        self.y += 0.5 * self.acceleration * t * t + self.velocity * t;

        self.airborne_time = (t + AIRBORNE_STEP).min(MAX_AIRBORNE_TIME);
    }

    fn animate(&mut self) {
        self.frame = (self.frame + 1) % BIRD_ANIMATION.len();
    }

    /// Sprite variant for the current animation frame.
    pub fn pose(&self) -> BirdPose {
        BIRD_ANIMATION[self.frame]
    }

    pub fn hitbox<'a, S: SpriteSet>(&self, sprites: &'a S) -> &'a S::Mask {
        sprites.bird(self.pose())
    }

    /// Integer screen position the sprite is drawn at.
    pub fn draw_position(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}
