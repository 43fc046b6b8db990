//! Demo: renders the built-in cube to `cube.png`.

use glam::{Mat4, Vec3};
use trirast::prelude::*;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mesh = MeshBuffer::unit_cube();
    let viewport = Viewport::new(WIDTH, HEIGHT);
    let mut renderer = Renderer::new(WIDTH, HEIGHT);

    // Tilt the cube and push it in front of the camera
    let view = Mat4::from_translation(Vec3::new(0.0, 0.0, 4.0))
        * Mat4::from_rotation_y(0.6)
        * Mat4::from_rotation_x(0.4);
    let projection = Mat4::perspective_lh(
        45f32.to_radians(),
        WIDTH as f32 / HEIGHT as f32,
        0.1,
        100.0,
    );
    let context = RenderContext::new(view, projection);

    let pipeline = Pipeline::new();
    pipeline.draw(&mesh, &context, &viewport, &mut renderer);

    renderer.save_png("cube.png")?;
    println!("wrote cube.png ({}x{})", WIDTH, HEIGHT);
    Ok(())
}
