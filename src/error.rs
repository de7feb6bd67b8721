//! Error types for the platform-facing parts of the crate.
//!
//! The simulation itself is infallible; everything here happens before the
//! first tick (asset loading, configuration, logger setup).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a usable sprite.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("sprite file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("could not decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("sprite has invalid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("sprite pixel buffer holds {actual} pixels, expected {expected}")]
    PixelCount { expected: usize, actual: usize },
}

/// Failure to read or interpret the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a configuration directory for this platform")]
    NoConfigDir,

    #[error("could not access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown log level '{0}' (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
}

/// Crate-level error returned from startup helpers.
#[derive(Debug, Error)]
pub enum FlappyError {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not initialise logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_asset_message_names_path() {
        let err = AssetError::Missing(PathBuf::from("imgs/bird1.png"));
        assert_eq!(err.to_string(), "sprite file not found: imgs/bird1.png");
    }

    #[test]
    fn test_flappy_error_is_transparent_over_config() {
        let err: FlappyError = ConfigError::InvalidLogLevel("loud".to_string()).into();
        assert!(err.to_string().contains("loud"));
    }
}
