// Game timing constants
pub const TICKS_PER_SECOND: u64 = 30;
pub const TICK_INTERVAL_MS: u64 = 1000 / TICKS_PER_SECOND;

// Bird physics
pub const BIRD_START_X: f64 = 100.0;
pub const BIRD_START_Y: f64 = 100.0;
pub const BIRD_ACCELERATION: f64 = 0.6;
pub const JUMP_VELOCITY: f64 = -12.0;
pub const MAX_SPEED: f64 = 12.0;
pub const AIRBORNE_STEP: f64 = 0.1;
pub const MAX_AIRBORNE_TIME: f64 = 5.0;

// Pipe obstacle
pub const PIPE_START_X: f64 = 0.0;
pub const PIPE_START_Y: f64 = 300.0;
pub const PIPE_VELOCITY: f64 = 5.0;
pub const PIPE_GAP: f64 = 170.0;
pub const PIPE_RESPAWN_X: f64 = 300.0;
pub const PIPE_OFFSET_MIN: i32 = -100;
pub const PIPE_OFFSET_MAX: i32 = 100;

// Ground strip
pub const BASE_START_X: f64 = 0.0;
pub const BASE_Y: f64 = 450.0;
pub const BASE_VELOCITY: f64 = 5.0;

// Sprite masks: a pixel is solid when its alpha is above this value
pub const MASK_ALPHA_THRESHOLD: u8 = 127;

// Text rendered by the platform layer
pub const SCORE_LABEL: &str = "SCORE";
pub const PAUSE_TEXT: &str = "PAUSE";
pub const LOST_TEXT: &str = "YOU LOST";
