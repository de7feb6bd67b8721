//! Session lifecycle: playing, paused, lost, terminated.
//!
//! Pause and the loss screen are plain states of one flat machine. The
//! platform layer feeds each tick's input batch to [`Session::tick`] and draws
//! whatever [`Session::scene`] returns; nothing here blocks.

use super::hitbox::SpriteSet;
use super::scene::{Overlay, Scene};
use super::world::World;
use rand::Rng;

/// Abstract input, already decoded from platform key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Window close / interrupt. Honoured from every state.
    QuitRequested,
    Jump,
    Pause,
    Restart,
    QuitToDesktop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    /// Simulation frozen until the pause key is pressed again.
    Paused,
    /// Loss screen, waiting for restart or quit.
    Lost,
    Terminated,
}

pub struct Session<S, R> {
    sprites: S,
    rng: R,
    world: World,
    state: SessionState,
    /// Rounds started, including the current one.
    rounds: u32,
    best_score: u32,
}

impl<S: SpriteSet, R: Rng> Session<S, R> {
    pub fn new(sprites: S, mut rng: R) -> Self {
        let world = World::new(&sprites, &mut rng);
        log::info!("session started");
        Self {
            sprites,
            rng,
            world,
            state: SessionState::Playing,
            rounds: 1,
            best_score: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn sprites(&self) -> &S {
        &self.sprites
    }

    pub fn score(&self) -> u32 {
        self.world.score
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Highest score of any finished round in this process.
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Run one fixed-rate tick.
    ///
    /// Events are applied in order, each against the state left by the
    /// previous one. Afterwards the world advances exactly once if the session
    /// is playing, unless a new round was started during this batch.
    pub fn tick(&mut self, events: &[GameEvent]) -> SessionState {
        let mut fresh_round = false;
        for &event in events {
            fresh_round |= self.handle_event(event);
            if self.is_terminated() {
                return self.state;
            }
        }

        if self.state == SessionState::Playing
            && !fresh_round
            && self.world.step(&self.sprites, &mut self.rng)
        {
            self.lose();
        }
        self.state
    }

    /// Apply one event. Returns true if it started a new round.
    pub fn handle_event(&mut self, event: GameEvent) -> bool {
        if event == GameEvent::QuitRequested {
            self.terminate("quit requested");
            return false;
        }

        match (self.state, event) {
            (SessionState::Playing, GameEvent::Jump) => {
                self.world.jump();
            }
            (SessionState::Playing, GameEvent::Pause) => {
                log::info!("paused at score {}", self.world.score);
                self.state = SessionState::Paused;
            }
            (SessionState::Paused, GameEvent::Pause) => {
                log::info!("resumed");
                self.state = SessionState::Playing;
            }
            (SessionState::Lost, GameEvent::Restart) => {
                self.restart();
                return true;
            }
            (SessionState::Lost, GameEvent::QuitToDesktop) => {
                self.terminate("quit from loss screen");
            }
            _ => {}
        }
        false
    }

    fn lose(&mut self) {
        self.state = SessionState::Lost;
        self.best_score = self.best_score.max(self.world.score);
        log::info!(
            "round {} lost after {} ticks with score {} (pipe: {}, ground: {})",
            self.rounds,
            self.world.ticks,
            self.world.score,
            self.world.bird.colliding_pipe,
            self.world.bird.colliding_base
        );
    }

    fn restart(&mut self) {
        self.world = World::new(&self.sprites, &mut self.rng);
        self.rounds += 1;
        self.state = SessionState::Playing;
        log::info!("round {} started", self.rounds);
    }

    fn terminate(&mut self, reason: &str) {
        log::info!("session terminated: {}", reason);
        self.state = SessionState::Terminated;
    }

    /// Draw list for the current frame. Paused and lost screens keep showing
    /// the frozen world under a banner.
    pub fn scene(&self) -> Scene {
        let overlay = match self.state {
            SessionState::Paused => Some(Overlay::Paused),
            SessionState::Lost => Some(Overlay::Lost),
            SessionState::Playing | SessionState::Terminated => None,
        };
        Scene {
            commands: self.world.draw_commands(),
            score: self.world.score,
            overlay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::testing::RectSprites;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn session() -> Session<RectSprites, ChaCha8Rng> {
        Session::new(RectSprites::classic(), ChaCha8Rng::seed_from_u64(1))
    }

    /// Drop the bird onto the ground and return once the session has lost.
    fn lose(session: &mut Session<RectSprites, ChaCha8Rng>) {
        session.world_mut().bird.y = 440.0;
        session.tick(&[]);
        assert_eq!(session.state(), SessionState::Lost);
    }

    #[test]
    fn test_starts_playing() {
        let session = session();
        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.score(), 0);
        assert_eq!(session.rounds(), 1);
    }

    #[test]
    fn test_tick_advances_world_once() {
        let mut session = session();
        session.tick(&[]);
        assert_eq!(session.world().ticks, 1);
        session.tick(&[]);
        assert_eq!(session.world().ticks, 2);
    }

    #[test]
    fn test_jump_applies_before_update() {
        let mut session = session();
        session.tick(&[GameEvent::Jump]);
        // Jump moves to 88, then the update with t = 0 leaves it there
        assert_eq!(session.world().bird.y, 88.0);
        assert_eq!(session.world().bird.velocity, -12.0);
    }

    #[test]
    fn test_pause_freezes_simulation() {
        let mut session = session();
        session.tick(&[]);
        let snapshot = session.world().clone();

        assert_eq!(session.tick(&[GameEvent::Pause]), SessionState::Paused);
        for _ in 0..10 {
            session.tick(&[GameEvent::Jump]);
        }
        assert_eq!(session.world(), &snapshot);

        assert_eq!(session.tick(&[GameEvent::Pause]), SessionState::Playing);
        assert_eq!(session.world().ticks, snapshot.ticks + 1);
    }

    #[test]
    fn test_pause_and_resume_in_one_batch_still_steps() {
        let mut session = session();
        session.tick(&[GameEvent::Pause, GameEvent::Pause]);
        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.world().ticks, 1);
    }

    #[test]
    fn test_loss_transition() {
        let mut session = session();
        lose(&mut session);
        assert!(session.world().bird.colliding_base);
        assert_eq!(session.scene().overlay, Some(Overlay::Lost));
    }

    #[test]
    fn test_lost_state_ignores_gameplay_keys() {
        let mut session = session();
        lose(&mut session);
        let snapshot = session.world().clone();

        session.tick(&[GameEvent::Jump, GameEvent::Pause]);
        assert_eq!(session.state(), SessionState::Lost);
        assert_eq!(session.world(), &snapshot);
    }

    #[test]
    fn test_restart_builds_fresh_round() {
        let mut session = session();
        // Already scored the starting pipe, so the losing tick adds nothing
        session.world_mut().pipe.passed = true;
        session.world_mut().score = 7;
        lose(&mut session);
        assert_eq!(session.score(), 7);
        assert_eq!(session.best_score(), 7);

        assert_eq!(session.tick(&[GameEvent::Restart]), SessionState::Playing);
        assert_eq!(session.score(), 0);
        assert_eq!(session.rounds(), 2);
        // The restart tick itself does not advance the new round
        assert_eq!(session.world().ticks, 0);
        assert_eq!(session.world().bird.y, 100.0);
        assert!(!session.world().bird.has_lost());
    }

    #[test]
    fn test_best_score_includes_point_scored_on_losing_tick() {
        let mut session = session();
        // The starting pipe is already behind the bird, so the losing tick scores it
        lose(&mut session);
        assert_eq!(session.score(), 1);
        assert_eq!(session.best_score(), 1);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut session = session();
        session.tick(&[]);
        session.tick(&[GameEvent::Restart]);
        assert_eq!(session.rounds(), 1);
        assert_eq!(session.world().ticks, 2);
    }

    #[test]
    fn test_quit_to_desktop_only_from_loss_screen() {
        let mut session = session();
        session.tick(&[GameEvent::QuitToDesktop]);
        assert_eq!(session.state(), SessionState::Playing);

        lose(&mut session);
        assert_eq!(
            session.tick(&[GameEvent::QuitToDesktop]),
            SessionState::Terminated
        );
    }

    #[test]
    fn test_quit_requested_from_every_state() {
        let mut playing = session();
        assert_eq!(
            playing.tick(&[GameEvent::QuitRequested]),
            SessionState::Terminated
        );

        let mut paused = session();
        paused.tick(&[GameEvent::Pause]);
        assert_eq!(
            paused.tick(&[GameEvent::QuitRequested]),
            SessionState::Terminated
        );

        let mut lost = session();
        lose(&mut lost);
        assert_eq!(
            lost.tick(&[GameEvent::QuitRequested]),
            SessionState::Terminated
        );
    }

    #[test]
    fn test_quit_stops_processing_rest_of_batch() {
        let mut session = session();
        session.tick(&[GameEvent::QuitRequested, GameEvent::Jump]);
        assert!(session.is_terminated());
        assert_eq!(session.world().bird.y, 100.0);
        assert_eq!(session.world().ticks, 0);
    }

    #[test]
    fn test_terminated_is_absorbing() {
        let mut session = session();
        session.tick(&[GameEvent::QuitRequested]);
        session.tick(&[GameEvent::Restart, GameEvent::Pause, GameEvent::Jump]);
        assert!(session.is_terminated());
        assert_eq!(session.world().ticks, 0);
    }

    #[test]
    fn test_scene_overlay_per_state() {
        let mut session = session();
        assert_eq!(session.scene().overlay, None);
        session.tick(&[GameEvent::Pause]);
        assert_eq!(session.scene().overlay, Some(Overlay::Paused));
        assert_eq!(session.scene().commands.len(), 6);
    }
}
