//! A CPU-based software triangle rasterizer.
//!
//! Takes a mesh (positions, normals, per-vertex colors, triangle indices)
//! and a view/projection transform, and produces colored pixels without GPU
//! assistance: vertex transform, homogeneous divide, visibility culling,
//! viewport mapping and triangle fill via two interchangeable strategies
//! (scanline and barycentric), plus DDA/Bresenham line drawing for
//! wireframes.
//!
//! # Quick Start
//!
//! ```ignore
//! use trirast::prelude::*;
//! use glam::Mat4;
//!
//! let mesh = MeshBuffer::unit_cube();
//! let viewport = Viewport::new(800, 600);
//! let mut renderer = Renderer::new(800, 600);
//! let context = RenderContext::new(view, projection);
//! Pipeline::new().draw(&mesh, &context, &viewport, &mut renderer);
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod context;
pub mod mesh;
pub mod pipeline;
pub mod viewport;

// Internal modules - used within the crate only
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use context::RenderContext;
pub use mesh::{MeshBuffer, MeshError};
pub use pipeline::{Pipeline, RenderMode};
pub use render::line::{draw_line, draw_triangle_wireframe, LineMode};
pub use render::{FrameBuffer, PixelSink, RasterizerType, Renderer, ScreenVertex, Triangle};
pub use viewport::Viewport;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use trirast::prelude::*;
/// ```
pub mod prelude {
    // Pipeline
    pub use crate::context::RenderContext;
    pub use crate::pipeline::{Pipeline, RenderMode};
    pub use crate::viewport::Viewport;

    // Mesh data
    pub use crate::mesh::{MeshBuffer, MeshError};

    // Rendering
    pub use crate::render::line::{draw_line, LineMode};
    pub use crate::render::{FrameBuffer, PixelSink, RasterizerType, Renderer};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{
        BarycentricRasterizer, FrameBuffer, Rasterizer, ScanlineRasterizer, ScreenVertex, Triangle,
    };
}
