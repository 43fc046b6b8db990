//! Scanline triangle rasterization with flat-top/flat-bottom decomposition.
//!
//! # Algorithm Overview
//!
//! 1. **Sort** the three vertices by ascending screen y.
//! 2. **Classify**: a triangle with a horizontal edge (flat top or flat
//!    bottom) fills directly. Any other triangle is **split** at the middle
//!    vertex's height by interpolating a new vertex on the long edge,
//!    producing one flat-bottom and one flat-top sub-triangle.
//! 3. **Fill** each flat triangle one horizontal scanline at a time,
//!    accumulating the left/right x bounds and edge colors incrementally
//!    from per-scanline slopes computed once from the triangle height.
//!
//! ```text
//!        v0                   v0
//!        /\                   /\
//!       /  \                 /  \
//!      /    \       =>      /----\  <- split at v1.y
//!     / v1   \             v1   split
//!    /________\             \    /
//!              v2            \  /
//!                             \/
//!                             v2
//! ```
//!
//! The split recursion is bounded: both sub-triangles are flat, so each
//! recursive call fills directly without splitting again.
//!
//! Color interpolation is two sequential 1D interpolations (down the edges,
//! then across the scanline), which is mathematically equivalent to
//! barycentric blending but fits the incremental scanline walk.

use glam::{IVec2, Vec4};

use super::{edge_function, Rasterizer, ScreenVertex, Triangle};
use crate::colors::pack_color;
use crate::render::framebuffer::PixelSink;

/// Sort-and-split scanline rasterizer.
///
/// Handles vertex ordering internally, so input triangles may list their
/// vertices in any order; colors and normals travel with their vertex
/// through every swap and split.
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Sorts three vertices by ascending y with pairwise compare-swaps.
    fn sort_by_y(v0: &mut ScreenVertex, v1: &mut ScreenVertex, v2: &mut ScreenVertex) {
        if v1.position.y < v0.position.y {
            std::mem::swap(v0, v1);
        }
        if v2.position.y < v0.position.y {
            std::mem::swap(v0, v2);
        }
        if v2.position.y < v1.position.y {
            std::mem::swap(v1, v2);
        }
    }

    /// Interpolates the vertex where edge (v0, v2) crosses v1's scanline.
    ///
    /// For y-sorted vertices with `v0.y < v1.y < v2.y`, the point on the
    /// long edge at height `v1.y` is
    /// `x = x0 + (x2 - x0) * (y1 - y0) / (y2 - y0)`, with color and normal
    /// interpolated by the same parameter.
    pub(crate) fn split_at_middle(
        v0: &ScreenVertex,
        v1: &ScreenVertex,
        v2: &ScreenVertex,
    ) -> ScreenVertex {
        let t = (v1.position.y - v0.position.y) as f32 / (v2.position.y - v0.position.y) as f32;
        let x = v0.position.x as f32 + (v2.position.x - v0.position.x) as f32 * t;
        ScreenVertex {
            position: IVec2::new(x as i32, v1.position.y),
            color: v0.color + (v2.color - v0.color) * t,
            normal: (v0.normal + (v2.normal - v0.normal) * t).normalize_or_zero(),
        }
    }

    /// Classifies a y-sorted triangle and fills it, splitting if needed.
    ///
    /// Recursion depth is at most one: both sub-triangles produced by a
    /// split share a horizontal edge and fill directly.
    fn rasterize(
        mut v0: ScreenVertex,
        mut v1: ScreenVertex,
        mut v2: ScreenVertex,
        sink: &mut dyn PixelSink,
    ) {
        Self::sort_by_y(&mut v0, &mut v1, &mut v2);

        if v0.position.y == v1.position.y {
            // Flat top: v2 is the lone vertex below the horizontal edge
            Self::fill_flat(&v2, &v0, &v1, sink);
        } else if v1.position.y == v2.position.y {
            // Flat bottom: v0 is the lone vertex above the horizontal edge
            Self::fill_flat(&v0, &v1, &v2, sink);
        } else {
            let split = Self::split_at_middle(&v0, &v1, &v2);
            Self::rasterize(v0, v1, split, sink);
            Self::rasterize(v1, v2, split, sink);
        }
    }

    /// Fills a triangle whose edge (e0, e1) is horizontal.
    ///
    /// `apex` is the lone vertex above or below that edge; its side selects
    /// the scan direction and which vertex pair forms the left/right edge.
    /// Left/right x bounds and edge colors advance by per-scanline slopes
    /// computed once from the reciprocal triangle height.
    fn fill_flat(apex: &ScreenVertex, e0: &ScreenVertex, e1: &ScreenVertex, sink: &mut dyn PixelSink) {
        // Degenerate line: a single row or a single column of points
        let all_x_equal = apex.position.x == e0.position.x && e0.position.x == e1.position.x;
        let all_y_equal = apex.position.y == e0.position.y;
        if all_x_equal || all_y_equal {
            return;
        }

        let (left, right) = if e0.position.x <= e1.position.x {
            (e0, e1)
        } else {
            (e1, e0)
        };
        let apex_on_top = apex.position.y < left.position.y;

        let (y_start, y_end) = if apex_on_top {
            (apex.position.y, left.position.y)
        } else {
            (left.position.y, apex.position.y)
        };
        // Nonzero: the all_y_equal case bailed out above
        let inv_height = 1.0 / (y_end - y_start) as f32;

        let (mut x_left, mut x_right, mut c_left, mut c_right);
        let (slope_left, slope_right, c_slope_left, c_slope_right);
        if apex_on_top {
            // Both edges fan out from the apex down to the flat edge
            x_left = apex.position.x as f32;
            x_right = x_left;
            c_left = apex.color;
            c_right = apex.color;
            slope_left = (left.position.x - apex.position.x) as f32 * inv_height;
            slope_right = (right.position.x - apex.position.x) as f32 * inv_height;
            c_slope_left = (left.color - apex.color) * inv_height;
            c_slope_right = (right.color - apex.color) * inv_height;
        } else {
            // Scan starts on the flat edge and converges to the apex below
            x_left = left.position.x as f32;
            x_right = right.position.x as f32;
            c_left = left.color;
            c_right = right.color;
            slope_left = (apex.position.x - left.position.x) as f32 * inv_height;
            slope_right = (apex.position.x - right.position.x) as f32 * inv_height;
            c_slope_left = (apex.color - left.color) * inv_height;
            c_slope_right = (apex.color - right.color) * inv_height;
        }

        for y in y_start..=y_end {
            let span = x_right - x_left;
            let color_step = if span.abs() < f32::EPSILON {
                Vec4::ZERO
            } else {
                (c_right - c_left) / span
            };

            let mut color = c_left;
            for x in x_left as i32..=x_right as i32 {
                sink.write_pixel(x, y, pack_color(color));
                color += color_step;
            }

            x_left += slope_left;
            x_right += slope_right;
            c_left += c_slope_left;
            c_right += c_slope_right;
        }
    }
}

impl Default for ScanlineRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for ScanlineRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, sink: &mut dyn PixelSink) {
        let [v0, v1, v2] = triangle.vertices;

        // Zero-area triangles (collinear or coincident vertices) draw nothing
        if edge_function(v0.position, v1.position, v2.position) == 0 {
            return;
        }

        Self::rasterize(v0, v1, v2, sink);
    }
}
