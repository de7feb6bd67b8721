//! Per-frame simulation: bird physics, scrolling obstacles, collision and the
//! session state machine.
//!
//! Nothing in here touches the terminal or the filesystem. Sprites are seen
//! only through the [`SpriteSet`] and [`Hitbox`] traits.

pub mod base;
pub mod bird;
pub mod hitbox;
pub mod pipe;
pub mod scene;
pub mod session;
pub mod world;

#[cfg(test)]
pub(crate) mod testing;

pub use base::Base;
pub use bird::Bird;
pub use hitbox::{BirdPose, Hitbox, SpriteSet, BIRD_ANIMATION};
pub use pipe::Pipe;
pub use scene::{DrawCommand, Overlay, Scene, SpriteId};
pub use session::{GameEvent, Session, SessionState};
pub use world::World;
