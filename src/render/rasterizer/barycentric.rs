//! Barycentric triangle rasterization over a bounding box.
//!
//! Every integer point in the triangle's bounding box is tested against the
//! three edge functions; a point is covered when all three agree it lies on
//! the interior side (boundary included). The edge function values divided
//! by the doubled triangle area are the barycentric weights used to blend
//! the vertex colors.
//!
//! Oppositely wound input is normalized up front by swapping two vertices,
//! so a single all-non-negative inside test serves both windings.
//!
//! # References
//!
//! - Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)
//! - Scratchapixel: <https://www.scratchapixel.com/lessons/3d-basic-rendering/rasterization-practical-implementation>

use glam::IVec2;

use super::{edge_function, Rasterizer, Triangle};
use crate::colors::pack_color;
use crate::render::framebuffer::PixelSink;

/// Bounding-box rasterizer with edge-function inside tests.
///
/// Simple and uniform: each pixel is evaluated independently, which is the
/// shape GPU rasterizers take. The bounding box visits pixels outside thin
/// triangles, so the scanline strategy tends to win there on the CPU.
pub struct BarycentricRasterizer;

impl BarycentricRasterizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BarycentricRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for BarycentricRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, sink: &mut dyn PixelSink) {
        let [v0, mut v1, mut v2] = triangle.vertices;

        let mut area = edge_function(v0.position, v1.position, v2.position);
        // Degenerate triangle: bail out before the area reciprocal
        if area == 0 {
            return;
        }
        // Normalize winding so the all-non-negative inside test applies
        if area < 0 {
            std::mem::swap(&mut v1, &mut v2);
            area = -area;
        }
        let inv_area = 1.0 / area as f32;

        let min_x = v0.position.x.min(v1.position.x).min(v2.position.x);
        let max_x = v0.position.x.max(v1.position.x).max(v2.position.x);
        let min_y = v0.position.y.min(v1.position.y).min(v2.position.y);
        let max_y = v0.position.y.max(v1.position.y).max(v2.position.y);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = IVec2::new(x, y);
                let w0 = edge_function(v1.position, v2.position, p);
                let w1 = edge_function(v2.position, v0.position, p);
                let w2 = edge_function(v0.position, v1.position, p);

                // Inside or on the boundary of all three edges
                if w0 >= 0 && w1 >= 0 && w2 >= 0 {
                    let lambda0 = w0 as f32 * inv_area;
                    let lambda1 = w1 as f32 * inv_area;
                    let lambda2 = w2 as f32 * inv_area;

                    let color = v0.color * lambda0 + v1.color * lambda1 + v2.color * lambda2;
                    sink.write_pixel(x, y, pack_color(color));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testutil::{solid_triangle, PixelRecorder};
    use approx::assert_relative_eq;
    use glam::{Vec3, Vec4};

    use super::super::ScreenVertex;

    fn vertex(x: i32, y: i32, color: Vec4) -> ScreenVertex {
        ScreenVertex::new(IVec2::new(x, y), color, Vec3::Z)
    }

    #[test]
    fn barycentric_weights_sum_to_one_inside() {
        let a = IVec2::new(0, 0);
        let b = IVec2::new(10, 0);
        let c = IVec2::new(0, 10);
        let area = edge_function(a, b, c) as f32;

        for p in [IVec2::new(1, 1), IVec2::new(3, 4), IVec2::new(5, 2)] {
            let w0 = edge_function(b, c, p) as f32 / area;
            let w1 = edge_function(c, a, p) as f32 / area;
            let w2 = edge_function(a, b, p) as f32 / area;
            assert!(w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0);
            assert_relative_eq!(w0 + w1 + w2, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn zero_area_triangle_writes_nothing() {
        let degenerate = [
            solid_triangle(IVec2::new(1, 1), IVec2::new(1, 1), IVec2::new(1, 1), Vec4::ONE),
            solid_triangle(IVec2::new(0, 0), IVec2::new(3, 3), IVec2::new(6, 6), Vec4::ONE),
        ];
        for triangle in degenerate {
            let mut recorder = PixelRecorder::new();
            BarycentricRasterizer::new().fill_triangle(&triangle, &mut recorder);
            assert!(recorder.pixels.is_empty());
        }
    }

    #[test]
    fn reversed_winding_covers_the_same_pixels() {
        let p0 = IVec2::new(0, 0);
        let p1 = IVec2::new(6, 0);
        let p2 = IVec2::new(3, 6);

        let mut forward = PixelRecorder::new();
        BarycentricRasterizer::new()
            .fill_triangle(&solid_triangle(p0, p1, p2, Vec4::ONE), &mut forward);
        let mut reversed = PixelRecorder::new();
        BarycentricRasterizer::new()
            .fill_triangle(&solid_triangle(p0, p2, p1, Vec4::ONE), &mut reversed);

        let mut forward = forward.coordinates();
        let mut reversed = reversed.coordinates();
        forward.sort_unstable();
        reversed.sort_unstable();
        assert!(!forward.is_empty());
        assert_eq!(forward, reversed);
    }

    #[test]
    fn vertex_colors_are_exact_at_the_corners() {
        let red = Vec4::new(1.0, 0.0, 0.0, 1.0);
        let green = Vec4::new(0.0, 1.0, 0.0, 1.0);
        let blue = Vec4::new(0.0, 0.0, 1.0, 1.0);
        let triangle = Triangle::new([
            vertex(0, 0, red),
            vertex(8, 0, green),
            vertex(0, 8, blue),
        ]);

        let mut recorder = PixelRecorder::new();
        BarycentricRasterizer::new().fill_triangle(&triangle, &mut recorder);

        let color_at = |px: i32, py: i32| {
            recorder
                .pixels
                .iter()
                .find(|&&(x, y, _)| x == px && y == py)
                .map(|&(_, _, c)| c)
        };
        assert_eq!(color_at(0, 0), Some(0xFFFF0000));
        assert_eq!(color_at(8, 0), Some(0xFF00FF00));
        assert_eq!(color_at(0, 8), Some(0xFF0000FF));
    }

    #[test]
    fn blended_color_is_clamped_before_packing() {
        // Over-saturated vertex colors must not wrap when packed
        let hot = Vec4::new(2.0, 2.0, 2.0, 1.0);
        let triangle = solid_triangle(IVec2::new(0, 0), IVec2::new(4, 0), IVec2::new(0, 4), hot);

        let mut recorder = PixelRecorder::new();
        BarycentricRasterizer::new().fill_triangle(&triangle, &mut recorder);
        assert!(recorder.pixels.iter().all(|&(_, _, c)| c == 0xFFFFFFFF));
    }
}
