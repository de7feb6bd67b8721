//! Pixel compositing and half-block output.
//!
//! Draw commands are blitted into an RGBA framebuffer the size of the
//! background. The framebuffer is then box-filtered down to fit the terminal
//! and packed two pixels per cell with `▀` (fg = top pixel, bg = bottom pixel).

use flappy::assets::{Assets, Rgba, Sprite};
use flappy::game::Scene;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

const HALF_TOP: char = '\u{2580}'; // ▀
const CLEAR: Rgba = [0, 0, 0, 255];

pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![CLEAR; width as usize * height as usize],
        }
    }

    /// Composite a scene back to front.
    pub fn from_scene(scene: &Scene, assets: &Assets) -> Self {
        let (width, height) = assets.screen_size();
        let mut canvas = Self::new(width, height);
        for command in &scene.commands {
            canvas.blit(assets.sprite(command.sprite), command.x, command.y);
        }
        canvas
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Alpha-blend `sprite` with its top-left at (x, y), clipped to the canvas.
    pub fn blit(&mut self, sprite: &Sprite, x: i32, y: i32) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + sprite.width() as i32).min(self.width as i32);
        let y1 = (y + sprite.height() as i32).min(self.height as i32);

        for cy in y0..y1 {
            for cx in x0..x1 {
                let src = sprite.pixel((cx - x) as u32, (cy - y) as u32);
                let index = (cy as u32 * self.width + cx as u32) as usize;
                self.pixels[index] = blend(self.pixels[index], src);
            }
        }
    }

    /// Output size in (columns, pixel rows) for a `cols` x `rows` cell area.
    /// Never upscales.
    pub fn fit(&self, cols: u16, rows: u16) -> (u32, u32) {
        let scale = self.scale(cols, rows);
        let out_w = (self.width as f64 * scale).floor() as u32;
        let out_h = (self.height as f64 * scale).floor() as u32;
        (out_w.max(1), out_h.max(1))
    }

    fn scale(&self, cols: u16, rows: u16) -> f64 {
        let sx = cols as f64 / self.width as f64;
        let sy = (rows as f64 * 2.0) / self.height as f64;
        sx.min(sy).min(1.0)
    }

    /// Mean colour of the source pixels covered by output pixel (ox, oy).
    fn sample(&self, ox: u32, oy: u32, out_w: u32, out_h: u32) -> Rgba {
        let span = |o: u32, out: u32, len: u32| {
            let start = (o as u64 * len as u64 / out as u64) as u32;
            let end = ((o as u64 + 1) * len as u64 / out as u64) as u32;
            (start, end.max(start + 1).min(len))
        };
        let (sx0, sx1) = span(ox, out_w, self.width);
        let (sy0, sy1) = span(oy, out_h, self.height);

        let mut sum = [0u32; 3];
        let mut count = 0;
        for y in sy0..sy1 {
            for x in sx0..sx1 {
                let p = self.pixel(x, y);
                sum[0] += p[0] as u32;
                sum[1] += p[1] as u32;
                sum[2] += p[2] as u32;
                count += 1;
            }
        }
        if count == 0 {
            return CLEAR;
        }
        [
            (sum[0] / count) as u8,
            (sum[1] / count) as u8,
            (sum[2] / count) as u8,
            255,
        ]
    }

    /// Downsample into at most `rows` lines of half-block cells.
    pub fn to_lines(&self, cols: u16, rows: u16) -> Vec<Line<'static>> {
        let (out_w, out_h) = self.fit(cols, rows);
        let term_rows = out_h.div_ceil(2);

        let mut lines = Vec::with_capacity(term_rows as usize);
        for row in 0..term_rows {
            let top_y = row * 2;
            let bottom_y = top_y + 1;

            let mut spans: Vec<Span> = Vec::new();
            let mut cur_fg = Color::Reset;
            let mut cur_bg = Color::Reset;
            let mut cur_text = String::new();

            for ox in 0..out_w {
                let fg = to_color(self.sample(ox, top_y, out_w, out_h));
                let bg = if bottom_y < out_h {
                    to_color(self.sample(ox, bottom_y, out_w, out_h))
                } else {
                    Color::Reset
                };

                if fg != cur_fg || bg != cur_bg {
                    if !cur_text.is_empty() {
                        spans.push(Span::styled(
                            std::mem::take(&mut cur_text),
                            Style::default().fg(cur_fg).bg(cur_bg),
                        ));
                    }
                    cur_fg = fg;
                    cur_bg = bg;
                }
                cur_text.push(HALF_TOP);
            }
            if !cur_text.is_empty() {
                spans.push(Span::styled(
                    cur_text,
                    Style::default().fg(cur_fg).bg(cur_bg),
                ));
            }
            lines.push(Line::from(spans));
        }
        lines
    }
}

fn blend(dst: Rgba, src: Rgba) -> Rgba {
    match src[3] {
        0 => dst,
        255 => src,
        a => {
            let a = a as u32;
            let mix = |d: u8, s: u8| ((s as u32 * a + d as u32 * (255 - a)) / 255) as u8;
            [mix(dst[0], src[0]), mix(dst[1], src[1]), mix(dst[2], src[2]), 255]
        }
    }
}

fn to_color([r, g, b, _]: Rgba) -> Color {
    Color::Rgb(r, g, b)
}
