//! Draw-call orchestration.
//!
//! [`Pipeline::draw`] takes a mesh and a render context through the full
//! chain: vertex transform, homogeneous divide, visibility culling, viewport
//! mapping and finally triangle fill (or wireframe outline). Everything the
//! call needs arrives by reference; the pipeline keeps no per-frame state of
//! its own.

use glam::{IVec2, Mat4, Vec3, Vec4};

use crate::context::RenderContext;
use crate::mesh::MeshBuffer;
use crate::render::line::draw_triangle_wireframe;
use crate::render::{
    PixelSink, Rasterizer, RasterizerDispatcher, RasterizerType, ScreenVertex, Triangle,
};
use crate::viewport::Viewport;

/// What the pipeline emits for each visible triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Filled triangles with interpolated vertex colors.
    #[default]
    Filled,
    /// Edge outlines only, drawn with DDA lines in opaque white.
    Wireframe,
}

/// The software rendering pipeline.
///
/// Holds only configuration: the active rasterization strategy and the
/// render mode. One draw call runs to completion on the calling thread
/// before control returns; there is no background work.
pub struct Pipeline {
    rasterizer: RasterizerDispatcher,
    render_mode: RenderMode,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::with_rasterizer(RasterizerType::default())
    }

    pub fn with_rasterizer(rasterizer_type: RasterizerType) -> Self {
        Self {
            rasterizer: RasterizerDispatcher::new(rasterizer_type),
            render_mode: RenderMode::default(),
        }
    }

    pub fn set_rasterizer(&mut self, rasterizer_type: RasterizerType) {
        self.rasterizer.set_type(rasterizer_type);
    }

    pub fn rasterizer(&self) -> RasterizerType {
        self.rasterizer.active_type()
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.render_mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    /// Draws every visible triangle of the mesh into the sink.
    ///
    /// The mesh validated its invariants at construction, so indexing here
    /// is unchecked by design. Triangles are dropped when a vertex lands at
    /// or behind the eye plane (`w <= 0` — no near clipping takes place, so
    /// geometry straddling the eye plane disappears whole) or when the
    /// visibility cull decides the face points away from the viewer.
    pub fn draw(
        &self,
        mesh: &MeshBuffer,
        context: &RenderContext,
        viewport: &Viewport,
        sink: &mut dyn PixelSink,
    ) {
        let view_projection = context.view_projection();
        let (clip_positions, normals) =
            transform_vertices(mesh.positions(), mesh.normals(), &view_projection);
        let ndc_positions = perspective_divide(&clip_positions);

        let mut culled = 0usize;
        let mut behind_eye = 0usize;

        for indices in mesh.indices().chunks_exact(3) {
            let (i0, i1, i2) = (
                indices[0] as usize,
                indices[1] as usize,
                indices[2] as usize,
            );

            let (Some(n0), Some(n1), Some(n2)) =
                (ndc_positions[i0], ndc_positions[i1], ndc_positions[i2])
            else {
                behind_eye += 1;
                continue;
            };

            if !is_front_facing(n0, n1, n2) {
                culled += 1;
                continue;
            }

            let p0 = to_screen_point(viewport.to_screen(n0));
            let p1 = to_screen_point(viewport.to_screen(n1));
            let p2 = to_screen_point(viewport.to_screen(n2));

            match self.render_mode {
                RenderMode::Filled => {
                    let triangle = Triangle::new([
                        ScreenVertex::new(p0, mesh.colors()[i0], normals[i0]),
                        ScreenVertex::new(p1, mesh.colors()[i1], normals[i1]),
                        ScreenVertex::new(p2, mesh.colors()[i2], normals[i2]),
                    ]);
                    self.rasterizer.fill_triangle(&triangle, sink);
                }
                RenderMode::Wireframe => draw_triangle_wireframe(sink, p0, p1, p2),
            }
        }

        log::debug!(
            "draw call: {} triangles ({} culled, {} behind the eye)",
            mesh.triangle_count(),
            culled,
            behind_eye
        );
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the vertex stage over all positions and normals.
///
/// Positions become homogeneous points (w = 1) in clip space. Normals are
/// transformed as directions (w = 0, so the matrix translation has no
/// effect) and renormalized.
fn transform_vertices(
    positions: &[Vec3],
    normals: &[Vec3],
    view_projection: &Mat4,
) -> (Vec<Vec4>, Vec<Vec3>) {
    let clip_positions = positions
        .iter()
        .map(|position| *view_projection * position.extend(1.0))
        .collect();
    let transformed_normals = normals
        .iter()
        .map(|normal| {
            (*view_projection * normal.extend(0.0))
                .truncate()
                .normalize_or_zero()
        })
        .collect();
    (clip_positions, transformed_normals)
}

/// Converts clip-space vertices to NDC by dividing x, y, z by w.
///
/// Vertices with `w <= 0` sit at or behind the eye plane; they yield `None`
/// instead of infinities, and the triangles that reference them are skipped.
fn perspective_divide(clip_positions: &[Vec4]) -> Vec<Option<Vec3>> {
    clip_positions
        .iter()
        .map(|v| (v.w > 0.0).then(|| v.truncate() / v.w))
        .collect()
}

/// Visibility test on divided vertices.
///
/// The face normal comes from the cross product of the triangle's edges in
/// index order; the viewer sits at the origin of the transformed space. A
/// face whose normal points toward the viewer (dot >= 0) is visible.
fn is_front_facing(v0: Vec3, v1: Vec3, v2: Vec3) -> bool {
    let face_normal = (v1 - v0).cross(v2 - v0);
    let view_direction = (-v0).normalize_or_zero();
    face_normal.dot(view_direction) >= 0.0
}

/// Truncates a viewport-mapped point to integer pixel coordinates.
fn to_screen_point(screen: Vec3) -> IVec2 {
    IVec2::new(screen.x as i32, screen.y as i32)
}
