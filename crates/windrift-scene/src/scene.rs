//! Scene state: the throttled frame clock, per-frame drift update with
//! recycling, and frame compositing.

use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use windrift_assets::{ImageCache, LogoImage};

use crate::logo::Logo;
use crate::sampler::Sampler;

const APPROX_FRAMES_PER_SECOND: f64 = 60.0;

/// Target frame budget; updates closer together than this are dropped.
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / APPROX_FRAMES_PER_SECOND;

/// Size-proxy coefficient for the out-of-frame test: a logo's margin grows
/// with its distance from center.
const MARGIN_FACTOR: f64 = 0.22;

/// Scales the distance proportion a drawn logo is sized by.
const SCALE_FACTOR: f64 = 0.205;

/// The animated scene: every logo on screen plus the frame clock.
#[derive(Debug)]
pub struct Scene {
    /// All logo sprites, created once and recycled forever.
    logos: Vec<Logo>,
    /// Position and color source shared by spawn and recycle.
    sampler: Sampler,
    /// Current surface width in cells, updated on resize.
    width: u16,
    /// Current surface height in cells, updated on resize.
    height: u16,
    /// Elapsed time of the last frame that actually ran, in milliseconds.
    last_tick_ms: f64,
}

impl Scene {
    /// Build a scene with `count` logos drifting at `speed` over a surface
    /// of the given dimensions.
    pub fn new(count: u16, speed: f64, width: u16, height: u16) -> Self {
        let mut sampler = Sampler::new();
        let logos = (0..count)
            .map(|_| Logo::random(&mut sampler, speed, width, height))
            .collect();

        Self {
            logos,
            sampler,
            width,
            height,
            last_tick_ms: 0.0,
        }
    }

    /// Apply a new surface size. Logos keep their positions; out-of-frame
    /// ones get picked up by the next update's recycle test.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Advance the frame clock to `elapsed_ms`.
    ///
    /// Runs the state update and returns true when a full frame interval
    /// has passed since the last tick; otherwise drops the frame and
    /// returns false. The caller re-polls either way.
    pub fn advance(&mut self, elapsed_ms: f64) -> bool {
        let delta = elapsed_ms - self.last_tick_ms;
        if delta < FRAME_INTERVAL_MS {
            return false;
        }

        self.last_tick_ms = elapsed_ms;
        self.update_state(delta);
        true
    }

    /// Move every logo outward from center and recycle the ones that left
    /// the frame.
    fn update_state(&mut self, delta_ms: f64) {
        let (cols, rows) = (self.width, self.height);
        let width = cols as f64;
        let height = rows as f64;
        let cx = width / 2.0;
        let cy = height / 2.0;
        let time_multiplier = delta_ms / 1000.0;

        let Self {
            logos, sampler, ..
        } = self;

        for logo in logos.iter_mut() {
            // Exponential outward drift: displacement from center compounds
            // at `speed` per second.
            logo.x += (logo.x - cx) * logo.speed * time_multiplier;
            logo.y += (logo.y - cy) * logo.speed * time_multiplier;

            let logo_width = MARGIN_FACTOR * (logo.x - cx).abs();
            let logo_height = MARGIN_FACTOR * (logo.y - cy).abs();

            if logo.x > width + logo_width
                || logo.x < -logo_width
                || logo.y > height + logo_height
                || logo.y < -logo_height
            {
                logo.recycle(sampler, cols, rows);
            }
        }
    }

    /// Composite the frame: black background, then every logo stamped at
    /// its position, scaled up with distance from center.
    pub fn render(&self, frame: &mut Frame, images: &ImageCache) {
        let area = frame.area();
        let width = area.width;
        let height = area.height;
        let cx = width as f64 / 2.0;
        let cy = height as f64 / 2.0;
        let radius = width.max(height) as f64;

        let mut grid: Vec<Vec<Option<Color>>> =
            vec![vec![None; width as usize]; height as usize];

        for logo in &self.logos {
            let Some(image) = images.get(logo.color) else {
                log::warn!("no cached image for {:?}; skipping draw", logo.color);
                continue;
            };

            let distance = ((cx - logo.x).powi(2) + (cy - logo.y).powi(2)).sqrt();
            let proportion = draw_proportion(distance, radius, image.max_dimension() as f64);

            stamp(&mut grid, image, logo.x, logo.y, proportion);
        }

        let lines: Vec<Line> = grid
            .iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|cell| match cell {
                        Some(color) => Span::styled("█", Style::new().fg(*color).bg(Color::Black)),
                        None => Span::styled(" ", Style::new().bg(Color::Black)),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Fraction of its natural size a logo is drawn at, given its distance
/// from the surface center. Grows linearly with distance, producing the
/// zoom-outward effect; the denominator is always positive.
fn draw_proportion(distance: f64, radius: f64, max_image_dimension: f64) -> f64 {
    (distance / (radius + max_image_dimension)) * SCALE_FACTOR
}

/// Stamp `image` into the cell grid with its top-left at (x, y), scaled by
/// `proportion` in both dimensions using nearest-neighbor sampling.
/// Sub-cell sizes draw nothing, matching a sub-pixel canvas draw.
fn stamp(grid: &mut [Vec<Option<Color>>], image: &LogoImage, x: f64, y: f64, proportion: f64) {
    let target_w = (image.width() as f64 * proportion) as i32;
    let target_h = (image.height() as f64 * proportion) as i32;
    if target_w < 1 || target_h < 1 {
        return;
    }

    let left = x.floor() as i32;
    let top = y.floor() as i32;
    let rows = grid.len() as i32;

    for ty in 0..target_h {
        let py = top + ty;
        if py < 0 || py >= rows {
            continue;
        }
        let row = &mut grid[py as usize];
        let cols = row.len() as i32;
        let sy = (ty as u32 * image.height() as u32 / target_h as u32) as u16;

        for tx in 0..target_w {
            let px = left + tx;
            if px < 0 || px >= cols {
                continue;
            }
            let sx = (tx as u32 * image.width() as u32 / target_w as u32) as u16;
            if image.filled(sx, sy) {
                row[px as usize] = Some(image.tint());
            }
        }
    }
}
