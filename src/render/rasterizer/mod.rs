//! Triangle rasterization algorithms.
//!
//! This module provides two rasterizer implementations that can be swapped
//! at runtime:
//!
//! - [`ScanlineRasterizer`]: flat-top/flat-bottom decomposition with
//!   incremental edge interpolation
//! - [`BarycentricRasterizer`]: bounding box iteration with edge function
//!   tests and barycentric color blending

mod barycentric;
mod scanline;

pub use barycentric::BarycentricRasterizer;
pub use scanline::ScanlineRasterizer;

use glam::{IVec2, Vec3, Vec4};

use super::framebuffer::PixelSink;

/// One vertex of a screen-space triangle, attributes bundled by name.
///
/// Grouping position, color and normal into a single struct keeps the
/// attributes from drifting apart as vertices are sorted, split and swapped
/// during rasterization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenVertex {
    /// Integer pixel coordinates.
    pub position: IVec2,
    /// Unit-range RGBA color, interpolated across the triangle.
    pub color: Vec4,
    /// Transformed, renormalized vertex normal. Carried through for
    /// per-pixel lighting; the current strategies do not consume it.
    pub normal: Vec3,
}

impl ScreenVertex {
    pub fn new(position: IVec2, color: Vec4, normal: Vec3) -> Self {
        Self {
            position,
            color,
            normal,
        }
    }
}

/// A triangle ready for rasterization in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [ScreenVertex; 3],
}

impl Triangle {
    pub fn new(vertices: [ScreenVertex; 3]) -> Self {
        Self { vertices }
    }
}

/// Signed parallelogram area of (b - a) and (c - a).
///
/// The sign tells which side of the directed edge a -> b the point c lies
/// on; applied to a whole triangle it yields twice the signed area, zero for
/// degenerate (collinear or coincident) vertices.
#[inline]
pub(super) fn edge_function(a: IVec2, b: IVec2, c: IVec2) -> i32 {
    (c.y - a.y) * (b.x - a.x) - (c.x - a.x) * (b.y - a.y)
}

/// Trait for triangle rasterization algorithms.
///
/// Implementors define how a screen-space triangle is filled into a pixel
/// sink. Each fill is independent and self-contained: a degenerate input
/// writes no pixels and never affects other triangles' output.
pub trait Rasterizer {
    /// Fill a triangle into the pixel sink with per-vertex color
    /// interpolation.
    fn fill_triangle(&self, triangle: &Triangle, sink: &mut dyn PixelSink);
}

/// Available rasterization algorithms.
///
/// Can be changed at runtime via `Pipeline::set_rasterizer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterizerType {
    /// Sort-and-split scanline fill with incremental interpolation.
    /// Only touches covered pixels, efficient for thin triangles.
    #[default]
    Scanline,
    /// Bounding-box scan with edge-function inside tests.
    /// Simpler and uniform; the basis of GPU rasterization.
    Barycentric,
}

impl std::fmt::Display for RasterizerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterizerType::Scanline => write!(f, "Scanline"),
            RasterizerType::Barycentric => write!(f, "Barycentric"),
        }
    }
}

/// Internal dispatcher that holds both rasterizer implementations.
pub struct RasterizerDispatcher {
    scanline: ScanlineRasterizer,
    barycentric: BarycentricRasterizer,
    active: RasterizerType,
}

impl RasterizerDispatcher {
    pub fn new(rasterizer_type: RasterizerType) -> Self {
        Self {
            scanline: ScanlineRasterizer::new(),
            barycentric: BarycentricRasterizer::new(),
            active: rasterizer_type,
        }
    }

    pub fn set_type(&mut self, rasterizer_type: RasterizerType) {
        self.active = rasterizer_type;
    }

    pub fn active_type(&self) -> RasterizerType {
        self.active
    }
}

impl Rasterizer for RasterizerDispatcher {
    #[inline]
    fn fill_triangle(&self, triangle: &Triangle, sink: &mut dyn PixelSink) {
        match self.active {
            RasterizerType::Scanline => self.scanline.fill_triangle(triangle, sink),
            RasterizerType::Barycentric => self.barycentric.fill_triangle(triangle, sink),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testutil::{solid_triangle, PixelRecorder};

    #[test]
    fn edge_function_sign_follows_winding() {
        let a = IVec2::new(0, 0);
        let b = IVec2::new(4, 0);
        let c = IVec2::new(0, 4);
        assert!(edge_function(a, b, c) > 0);
        assert!(edge_function(a, c, b) < 0);
        assert_eq!(edge_function(a, b, IVec2::new(2, 0)), 0);
    }

    #[test]
    fn both_strategies_cover_the_same_right_triangle() {
        // Flat-left right triangle: every integer point with x >= 0, y >= 0
        // and x + y <= 4 is covered by both strategies.
        let triangle = solid_triangle(
            IVec2::new(0, 0),
            IVec2::new(4, 0),
            IVec2::new(0, 4),
            Vec4::ONE,
        );

        let mut scanline = PixelRecorder::new();
        ScanlineRasterizer::new().fill_triangle(&triangle, &mut scanline);
        let mut barycentric = PixelRecorder::new();
        BarycentricRasterizer::new().fill_triangle(&triangle, &mut barycentric);

        let mut scanline = scanline.coordinates();
        let mut barycentric = barycentric.coordinates();
        scanline.sort_unstable();
        scanline.dedup();
        barycentric.sort_unstable();
        barycentric.dedup();

        assert_eq!(scanline, barycentric);
        assert_eq!(scanline.len(), 15);
    }

    #[test]
    fn dispatcher_routes_to_the_active_strategy() {
        let mut dispatcher = RasterizerDispatcher::new(RasterizerType::Scanline);
        assert_eq!(dispatcher.active_type(), RasterizerType::Scanline);
        dispatcher.set_type(RasterizerType::Barycentric);
        assert_eq!(dispatcher.active_type(), RasterizerType::Barycentric);

        let triangle = solid_triangle(
            IVec2::new(0, 0),
            IVec2::new(4, 0),
            IVec2::new(0, 4),
            Vec4::ONE,
        );
        let mut recorder = PixelRecorder::new();
        dispatcher.fill_triangle(&triangle, &mut recorder);
        assert!(!recorder.pixels.is_empty());
    }
}
