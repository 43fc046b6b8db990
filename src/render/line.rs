//! Straight-line pixel drawing.
//!
//! Two interchangeable algorithms selected by [`LineMode`]:
//!
//! - **DDA**: walks the line with floating-point increments along both axes,
//!   rounding to the nearest pixel at every step. Simple, but carries float
//!   state.
//! - **Bresenham**: the classic integer-only variant. The dominant axis is
//!   stepped pixel by pixel while an error accumulator decides when the
//!   minor axis advances.
//!
//! Both algorithms write the same pixels for horizontal, vertical and 45°
//! lines, endpoints included.

use glam::IVec2;

use super::framebuffer::PixelSink;
use crate::colors;

/// Line drawing algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineMode {
    /// Floating-point incremental (digital differential analyzer).
    #[default]
    Dda,
    /// Integer error-accumulator (Bresenham).
    Bresenham,
}

/// Draws a line of pixels from `from` to `to`, endpoints inclusive.
pub fn draw_line(sink: &mut dyn PixelSink, from: IVec2, to: IVec2, color: u32, mode: LineMode) {
    match mode {
        LineMode::Dda => draw_line_dda(sink, from, to, color),
        LineMode::Bresenham => draw_line_bresenham(sink, from, to, color),
    }
}

/// Draws the three edges of a screen-space triangle in opaque white.
pub fn draw_triangle_wireframe(sink: &mut dyn PixelSink, p0: IVec2, p1: IVec2, p2: IVec2) {
    draw_line(sink, p0, p1, colors::WIREFRAME, LineMode::Dda);
    draw_line(sink, p0, p2, colors::WIREFRAME, LineMode::Dda);
    draw_line(sink, p1, p2, colors::WIREFRAME, LineMode::Dda);
}

fn draw_line_dda(sink: &mut dyn PixelSink, from: IVec2, to: IVec2, color: u32) {
    let dx = (to.x - from.x) as f32;
    let dy = (to.y - from.y) as f32;

    // Whole number of unit steps along the dominant axis
    let steps = dx.abs().max(dy.abs());
    if steps == 0.0 {
        // Coincident endpoints: a single pixel, no division
        sink.write_pixel(from.x, from.y, color);
        return;
    }

    let increment_x = dx / steps;
    let increment_y = dy / steps;

    let mut x = from.x as f32;
    let mut y = from.y as f32;
    for _ in 0..=steps as i32 {
        sink.write_pixel(x.round() as i32, y.round() as i32, color);
        x += increment_x;
        y += increment_y;
    }
}

fn draw_line_bresenham(sink: &mut dyn PixelSink, from: IVec2, to: IVec2, color: u32) {
    let step_x = if to.x > from.x { 1 } else { -1 };
    let step_y = if to.y > from.y { 1 } else { -1 };

    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();

    let mut x = from.x;
    let mut y = from.y;
    let mut eps = 0;

    if dx >= dy {
        // X is the driving axis
        loop {
            sink.write_pixel(x, y, color);
            if x == to.x {
                break;
            }
            x += step_x;
            eps += dy;
            if (eps << 1) >= dx {
                y += step_y;
                eps -= dx;
            }
        }
    } else {
        // Y is the driving axis
        loop {
            sink.write_pixel(x, y, color);
            if y == to.y {
                break;
            }
            y += step_y;
            eps += dx;
            if (eps << 1) >= dy {
                x += step_x;
                eps -= dy;
            }
        }
    }
}
