//! Procedurally painted sprites at the classic asset sizes, used when no
//! asset directory is configured.

use super::sprite::{Rgba, Sprite, TRANSPARENT};
use crate::game::BirdPose;

pub const BACKGROUND_SIZE: (u32, u32) = (288, 512);
pub const BIRD_SIZE: (u32, u32) = (34, 24);
pub const PIPE_SIZE: (u32, u32) = (52, 320);
pub const BASE_SIZE: (u32, u32) = (336, 112);

// ── Palette ─────────────────────────────────────────────────────────
const SKY_TOP: Rgba = [78, 192, 202, 255];
const SKY_BOTTOM: Rgba = [150, 222, 228, 255];
const CLOUD: Rgba = [233, 252, 217, 255];
const BUSH: Rgba = [94, 190, 90, 255];
const BUSH_DARK: Rgba = [76, 160, 74, 255];

const OUTLINE: Rgba = [83, 56, 71, 255];
const FEATHER: Rgba = [248, 192, 40, 255];
const BELLY: Rgba = [250, 222, 112, 255];
const WING: Rgba = [252, 244, 226, 255];
const EYE: Rgba = [255, 255, 255, 255];
const PUPIL: Rgba = [20, 20, 20, 255];
const BEAK: Rgba = [250, 104, 44, 255];
const BEAK_LOWER: Rgba = [222, 80, 30, 255];

const PIPE_EDGE: Rgba = [84, 56, 71, 255];
const PIPE_LIGHT: Rgba = [158, 228, 89, 255];
const PIPE_MID: Rgba = [115, 191, 46, 255];
const PIPE_DARK: Rgba = [85, 140, 30, 255];

const GRASS_LIGHT: Rgba = [158, 228, 89, 255];
const GRASS_DARK: Rgba = [115, 191, 46, 255];
const GRASS_SHADOW: Rgba = [84, 140, 28, 255];
const SAND: Rgba = [222, 216, 149, 255];
const SAND_DOT: Rgba = [208, 198, 130, 255];

/// Pipe lip height; the lip is the full sprite width, the body is inset.
const PIPE_CAP_HEIGHT: u32 = 24;
const PIPE_BODY_INSET: u32 = 3;

fn lerp(a: Rgba, b: Rgba, t: f64) -> Rgba {
    let mix = |i: usize| (a[i] as f64 + (b[i] as f64 - a[i] as f64) * t).round() as u8;
    [mix(0), mix(1), mix(2), 255]
}

/// Normalised ellipse distance: < 1 inside, 1 on the boundary.
fn ellipse(x: u32, y: u32, cx: f64, cy: f64, rx: f64, ry: f64) -> f64 {
    let dx = (x as f64 + 0.5 - cx) / rx;
    let dy = (y as f64 + 0.5 - cy) / ry;
    dx * dx + dy * dy
}

pub fn background() -> Sprite {
    let (width, height) = BACKGROUND_SIZE;
    Sprite::from_fn(width, height, |x, y| {
        let fx = x as f64;
        let bush_line = 420.0 - 12.0 * (fx / 11.0).sin().abs();
        let cloud_line = 384.0 - 18.0 * (fx / 23.0).sin().abs() - 6.0 * (fx / 7.0).sin().abs();

        if y as f64 >= bush_line {
            if (x / 9 + y / 7) % 5 == 0 {
                BUSH_DARK
            } else {
                BUSH
            }
        } else if y as f64 >= cloud_line {
            CLOUD
        } else {
            lerp(SKY_TOP, SKY_BOTTOM, y as f64 / cloud_line.max(1.0))
        }
    })
}

pub fn bird(pose: BirdPose) -> Sprite {
    let (width, height) = BIRD_SIZE;
    let wing_dy = match pose {
        BirdPose::WingsUp => -4.0,
        BirdPose::Level => 0.0,
        BirdPose::WingsDown => 4.0,
    };

    Sprite::from_fn(width, height, |x, y| {
        // Beak sticks out past the body on the right
        if (25..33).contains(&x) && (12..18).contains(&y) {
            return match y {
                12 | 17 => OUTLINE,
                13..=14 => BEAK,
                _ => BEAK_LOWER,
            };
        }

        let eye = ellipse(x, y, 23.0, 8.0, 4.5, 4.5);
        if eye <= 1.0 {
            if ellipse(x, y, 24.5, 8.0, 1.5, 2.0) <= 1.0 {
                return PUPIL;
            }
            return if eye > 0.7 { OUTLINE } else { EYE };
        }

        let wing = ellipse(x, y, 9.0, 12.5 + wing_dy, 7.0, 4.0);
        if wing <= 1.0 {
            return if wing > 0.6 { OUTLINE } else { WING };
        }

        let body = ellipse(x, y, 16.0, 12.0, 15.0, 11.5);
        if body <= 1.0 {
            if body > 0.8 {
                OUTLINE
            } else if y > 14 {
                BELLY
            } else {
                FEATHER
            }
        } else {
            TRANSPARENT
        }
    })
}

/// Bottom pipe: lip at the top, body running down to the sprite's end.
pub fn pipe() -> Sprite {
    let (width, height) = PIPE_SIZE;
    Sprite::from_fn(width, height, |x, y| {
        let (left, right) = if y < PIPE_CAP_HEIGHT {
            (0, width - 1)
        } else {
            (PIPE_BODY_INSET, width - 1 - PIPE_BODY_INSET)
        };
        if x < left || x > right {
            return TRANSPARENT;
        }
        if x == left || x == right || y == 0 || y == PIPE_CAP_HEIGHT - 1 {
            return PIPE_EDGE;
        }

        let across = (x - left) as f64 / (right - left) as f64;
        if across < 0.12 {
            PIPE_MID
        } else if across < 0.3 {
            PIPE_LIGHT
        } else if across < 0.75 {
            PIPE_MID
        } else {
            PIPE_DARK
        }
    })
}

pub fn base() -> Sprite {
    let (width, height) = BASE_SIZE;
    Sprite::from_fn(width, height, |x, y| match y {
        0 => PIPE_EDGE,
        1..=11 => {
            if ((x + y) / 6) % 2 == 0 {
                GRASS_LIGHT
            } else {
                GRASS_DARK
            }
        }
        12..=15 => GRASS_SHADOW,
        _ => {
            if (x * 7 + y * 13) % 37 == 0 {
                SAND_DOT
            } else {
                SAND
            }
        }
    })
}
