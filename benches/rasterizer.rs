use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{IVec2, Vec3, Vec4};
use trirast::bench::{
    BarycentricRasterizer, FrameBuffer, Rasterizer, ScanlineRasterizer, ScreenVertex, Triangle,
};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn create_buffer() -> Vec<u32> {
    vec![0u32; (BUFFER_WIDTH * BUFFER_HEIGHT) as usize]
}

fn triangle(p0: (i32, i32), p1: (i32, i32), p2: (i32, i32)) -> Triangle {
    Triangle::new([
        ScreenVertex::new(
            IVec2::new(p0.0, p0.1),
            Vec4::new(1.0, 0.0, 0.0, 1.0),
            Vec3::Z,
        ),
        ScreenVertex::new(
            IVec2::new(p1.0, p1.1),
            Vec4::new(0.0, 1.0, 0.0, 1.0),
            Vec3::Z,
        ),
        ScreenVertex::new(
            IVec2::new(p2.0, p2.1),
            Vec4::new(0.0, 0.0, 1.0, 1.0),
            Vec3::Z,
        ),
    ])
}

fn small_triangle() -> Triangle {
    triangle((100, 100), (120, 100), (110, 120))
}

fn medium_triangle() -> Triangle {
    triangle((100, 100), (300, 100), (200, 300))
}

fn large_triangle() -> Triangle {
    triangle((50, 50), (750, 100), (400, 550))
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let scanline = ScanlineRasterizer::new();
    let barycentric = BarycentricRasterizer::new();

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("scanline", name), &triangle, |b, tri| {
            let mut buffer = create_buffer();
            b.iter(|| {
                let mut fb = FrameBuffer::new(&mut buffer, BUFFER_WIDTH, BUFFER_HEIGHT);
                scanline.fill_triangle(black_box(tri), &mut fb);
            });
        });

        group.bench_with_input(
            BenchmarkId::new("barycentric", name),
            &triangle,
            |b, tri| {
                let mut buffer = create_buffer();
                b.iter(|| {
                    let mut fb = FrameBuffer::new(&mut buffer, BUFFER_WIDTH, BUFFER_HEIGHT);
                    barycentric.fill_triangle(black_box(tri), &mut fb);
                });
            },
        );
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    let scanline = ScanlineRasterizer::new();
    let barycentric = BarycentricRasterizer::new();

    // Generate a grid of small triangles
    let triangles: Vec<Triangle> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col * 40;
                let y = row * 30;
                triangle((x, y), (x + 35, y), (x + 17, y + 25))
            })
        })
        .collect();

    group.bench_function("scanline_400_triangles", |b| {
        let mut buffer = create_buffer();
        b.iter(|| {
            let mut fb = FrameBuffer::new(&mut buffer, BUFFER_WIDTH, BUFFER_HEIGHT);
            for tri in &triangles {
                scanline.fill_triangle(black_box(tri), &mut fb);
            }
        });
    });

    group.bench_function("barycentric_400_triangles", |b| {
        let mut buffer = create_buffer();
        b.iter(|| {
            let mut fb = FrameBuffer::new(&mut buffer, BUFFER_WIDTH, BUFFER_HEIGHT);
            for tri in &triangles {
                barycentric.fill_triangle(black_box(tri), &mut fb);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_many_triangles);
criterion_main!(benches);
