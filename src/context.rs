//! Per-draw-call transform state.

use glam::Mat4;

/// View and projection matrices supplied fresh for each draw call.
///
/// The two matrices are combined exactly once per draw call (see
/// [`RenderContext::view_projection`]); the context itself is immutable for
/// the duration of the call. The host application constructs one explicitly
/// and passes it by reference into the pipeline — there is no hidden global
/// camera state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    pub view: Mat4,
    pub projection: Mat4,
}

impl RenderContext {
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self { view, projection }
    }

    /// The combined view-projection transform applied by the vertex stage.
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}
