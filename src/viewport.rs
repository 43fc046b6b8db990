//! NDC-to-screen viewport mapping.

use glam::{Mat4, Vec3, Vec4};

/// Maps normalized device coordinates into pixel coordinates.
///
/// The mapping matrix is derived from the output surface size and rebuilt by
/// [`Viewport::resize`] whenever that size changes. This is the only state
/// that survives across draw calls, with a single-writer/multi-reader
/// contract: the resize handler takes `&mut self`, draw calls read through
/// `&self`, so Rust's borrow rules rule out a resize racing an in-flight
/// draw. Drawing with a viewport built for a previous surface size is a
/// caller error.
///
/// For a surface of width `W` and height `H` the matrix scales x by
/// `α = 0.5·W − 0.5`, scales and flips y by `−β` with `β = 0.5·H − 0.5`
/// (NDC y points up, screen y points down), leaves z untouched and
/// translates by `(α, β, 0)`. NDC (0, 0) therefore lands on the surface
/// center, e.g. (399.5, 299.5) for 800×600, before the caller truncates to
/// integer pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    matrix: Mat4,
}

impl Viewport {
    /// Builds the viewport mapping for the given surface size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            matrix: Self::build_matrix(width, height),
        }
    }

    /// Rebuilds the mapping after the output surface changed size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.matrix = Self::build_matrix(width, height);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Maps a homogeneous-divided NDC point to (fractional) pixel space.
    pub fn to_screen(&self, ndc: Vec3) -> Vec3 {
        (self.matrix * ndc.extend(1.0)).truncate()
    }

    fn build_matrix(width: u32, height: u32) -> Mat4 {
        let alpha = 0.5 * width as f32 - 0.5;
        let beta = 0.5 * height as f32 - 0.5;
        Mat4::from_cols(
            Vec4::new(alpha, 0.0, 0.0, 0.0),
            Vec4::new(0.0, -beta, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(alpha, beta, 0.0, 1.0),
        )
    }
}
