//! One round of play: the three actors, the score and the fixed update order.

use super::base::Base;
use super::bird::Bird;
use super::hitbox::SpriteSet;
use super::pipe::Pipe;
use super::scene::{DrawCommand, SpriteId};
use crate::constants::{BASE_START_X, BASE_Y, BIRD_START_X, BIRD_START_Y, PIPE_START_X, PIPE_START_Y};
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub bird: Bird,
    pub pipe: Pipe,
    pub base: Base,
    pub score: u32,
    /// Simulation steps taken this round.
    pub ticks: u64,
}

impl World {
    /// Fresh round with every actor at its starting position and score 0.
    pub fn new<S: SpriteSet, R: Rng>(sprites: &S, rng: &mut R) -> Self {
        Self::from_actors(
            Bird::new(BIRD_START_X, BIRD_START_Y),
            Pipe::new(PIPE_START_X, PIPE_START_Y, rng),
            Base::new(BASE_START_X, BASE_Y, sprites),
        )
    }

    pub fn from_actors(bird: Bird, pipe: Pipe, base: Base) -> Self {
        Self {
            bird,
            pipe,
            base,
            score: 0,
            ticks: 0,
        }
    }

    pub fn jump(&mut self) {
        self.bird.jump();
    }

    /// Advance one tick: ground, then pipe (which may score), then bird.
    ///
    /// Both collision checks see the bird where it was before its own update.
    /// Returns true when the bird has lost.
    pub fn step<S: SpriteSet, R: Rng>(&mut self, sprites: &S, rng: &mut R) -> bool {
        self.base.update(&mut self.bird, sprites);
        self.score = self.pipe.update(&mut self.bird, self.score, sprites, rng);
        self.bird.update();
        self.ticks += 1;

        log::trace!(
            "tick {}: bird y={:.3} v={:.3} pipe x={} score={}",
            self.ticks,
            self.bird.y,
            self.bird.velocity,
            self.pipe.x,
            self.score
        );

        self.has_lost()
    }

    pub fn has_lost(&self) -> bool {
        self.bird.has_lost()
    }

    /// Back-to-front draw list: background, ground tiles, pipes, bird.
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let (bottom_x, bottom_y) = self.pipe.bottom_position();
        let (top_x, top_y) = self.pipe.top_position();
        let (bird_x, bird_y) = self.bird.draw_position();
        let base_y = self.base.y as i32;

        vec![
            DrawCommand::new(SpriteId::Background, 0, 0),
            DrawCommand::new(SpriteId::Base, self.base.x1 as i32, base_y),
            DrawCommand::new(SpriteId::Base, self.base.x2 as i32, base_y),
            DrawCommand::new(SpriteId::PipeBottom, bottom_x as i32, bottom_y as i32),
            DrawCommand::new(SpriteId::PipeTop, top_x as i32, top_y as i32),
            DrawCommand::new(SpriteId::Bird(self.bird.pose()), bird_x, bird_y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::hitbox::BirdPose;
    use crate::game::testing::{RectMask, RectSprites};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn world(sprites: &RectSprites) -> (World, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let world = World::new(sprites, &mut rng);
        (world, rng)
    }

    #[test]
    fn test_new_world_starting_positions() {
        let sprites = RectSprites::classic();
        let (world, _) = world(&sprites);
        assert_eq!((world.bird.x, world.bird.y), (100.0, 100.0));
        assert_eq!((world.pipe.x, world.pipe.y), (0.0, 300.0));
        assert_eq!((world.base.x1, world.base.y), (0.0, 450.0));
        assert_eq!(world.score, 0);
        assert_eq!(world.ticks, 0);
    }

    #[test]
    fn test_first_step_survives_and_bird_holds_height() {
        let sprites = RectSprites::classic();
        let (mut world, mut rng) = world(&sprites);

        let lost = world.step(&sprites, &mut rng);
        assert!(!lost);
        // t starts at 0, so the first step leaves y untouched
        assert_eq!(world.bird.y, 100.0);

        world.step(&sprites, &mut rng);
        assert!(world.bird.y > 100.0);
    }

    #[test]
    fn test_narrow_start_pipe_is_cleared_on_first_step() {
        // Pipe at x = 0 is 52 wide, so after one scroll its right edge is at 47 < 100
        let sprites = RectSprites::classic();
        let (mut world, mut rng) = world(&sprites);
        world.step(&sprites, &mut rng);
        assert_eq!(world.score, 1);
    }

    #[test]
    fn test_wide_start_pipe_keeps_score_at_zero() {
        let sprites = RectSprites {
            pipe: RectMask {
                width: 112,
                height: 320,
            },
            ..RectSprites::classic()
        };
        let (mut world, mut rng) = world(&sprites);
        world.step(&sprites, &mut rng);
        assert_eq!(world.score, 0);
        world.step(&sprites, &mut rng);
        assert_eq!(world.score, 0);
        world.step(&sprites, &mut rng);
        assert_eq!(world.score, 1);
    }

    #[test]
    fn test_free_fall_ends_on_ground() {
        let sprites = RectSprites::classic();
        let (mut world, mut rng) = world(&sprites);
        // Keep the pipe far away so only the ground can stop the bird
        world.pipe.velocity = 0.0;
        world.pipe.x = 1000.0;

        let mut steps = 0;
        while !world.step(&sprites, &mut rng) {
            steps += 1;
            assert!(steps < 500, "bird never reached the ground");
        }
        assert!(world.bird.colliding_base);
        assert!(!world.bird.colliding_pipe);
    }

    #[test]
    fn test_collision_uses_position_before_bird_update() {
        let sprites = RectSprites::classic();
        let (mut world, mut rng) = world(&sprites);
        world.pipe.x = 1000.0;
        // Bottom edge at 449, one unit above the ground line; falling fast
        world.bird.y = 425.0;
        world.bird.velocity = 12.0;
        world.bird.airborne_time = 1.0;

        let lost = world.step(&sprites, &mut rng);
        assert!(!lost);
        assert!(world.bird.y + 24.0 > 450.0);

        assert!(world.step(&sprites, &mut rng));
    }

    #[test]
    fn test_draw_commands_order() {
        let sprites = RectSprites::classic();
        let (mut world, mut rng) = world(&sprites);
        world.step(&sprites, &mut rng);

        let ids: Vec<SpriteId> = world.draw_commands().iter().map(|c| c.sprite).collect();
        assert_eq!(
            ids,
            vec![
                SpriteId::Background,
                SpriteId::Base,
                SpriteId::Base,
                SpriteId::PipeBottom,
                SpriteId::PipeTop,
                SpriteId::Bird(BirdPose::Level),
            ]
        );
    }

    #[test]
    fn test_draw_commands_positions() {
        let sprites = RectSprites::classic();
        let (mut world, _) = world(&sprites);
        world.pipe.pos = 20;
        let commands = world.draw_commands();
        assert_eq!(commands[0], DrawCommand::new(SpriteId::Background, 0, 0));
        assert_eq!(commands[1], DrawCommand::new(SpriteId::Base, 0, 450));
        assert_eq!(commands[2], DrawCommand::new(SpriteId::Base, 336, 450));
        assert_eq!(commands[3], DrawCommand::new(SpriteId::PipeBottom, 0, 320));
        assert_eq!(commands[4], DrawCommand::new(SpriteId::PipeTop, 0, -150));
        assert_eq!(
            commands[5],
            DrawCommand::new(SpriteId::Bird(BirdPose::WingsUp), 100, 100)
        );
    }
}
