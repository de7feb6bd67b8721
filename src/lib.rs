//! Flappy - terminal Flappy Bird
//!
//! The library holds the platform-independent game (`game`), the sprite
//! provider (`assets`) and the startup plumbing shared by the `flappy` and
//! `simulator` binaries.

pub mod assets;
pub mod build_info;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod simulator;

pub use error::{AssetError, ConfigError, FlappyError};
