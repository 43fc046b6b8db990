//! Screen-space drawing: pixel sinks, rasterizers and line drawing.

mod framebuffer;
pub mod line;
mod rasterizer;
mod renderer;

pub use framebuffer::{FrameBuffer, PixelSink};
pub use rasterizer::{
    BarycentricRasterizer, Rasterizer, RasterizerDispatcher, RasterizerType, ScanlineRasterizer,
    ScreenVertex, Triangle,
};
pub use renderer::Renderer;
