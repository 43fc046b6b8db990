//! Color constants and packing helpers.
//!
//! Colors travel through the pipeline as [`Vec4`]s with unit-range channels
//! so they can be interpolated freely; they are clamped and packed into
//! ARGB8888 only at the moment a pixel is written.

use glam::Vec4;

// Colors in ARGB8888 format
pub const BACKGROUND: u32 = 0xFF1E1E1E;
pub const WIREFRAME: u32 = 0xFFFFFFFF;

/// Packs an RGB color into ARGB8888 with a fixed opaque alpha.
///
/// Each channel is clamped to [0, 1] before conversion, so over-saturated
/// interpolation results saturate instead of wrapping. The alpha channel of
/// the input is ignored: packed colors are always fully opaque.
#[inline]
pub fn pack_color(color: Vec4) -> u32 {
    let r = (color.x.clamp(0.0, 1.0) * 255.0) as u32;
    let g = (color.y.clamp(0.0, 1.0) * 255.0) as u32;
    let b = (color.z.clamp(0.0, 1.0) * 255.0) as u32;
    (255 << 24) | (r << 16) | (g << 8) | b
}

/// Unpacks an ARGB8888 color into unit-range RGBA channels.
#[inline]
pub fn unpack_color(color: u32) -> Vec4 {
    Vec4::new(
        ((color >> 16) & 0xFF) as f32 / 255.0,
        ((color >> 8) & 0xFF) as f32 / 255.0,
        (color & 0xFF) as f32 / 255.0,
        ((color >> 24) & 0xFF) as f32 / 255.0,
    )
}
