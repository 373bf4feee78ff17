use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gt_contour::{ExtractConfig, contour_set_to_path, extract_contours};
use gt_core::AlphaImage;

/// Grid of ring glyphs: one outer loop and one hole loop per cell.
fn synthetic_sheet(width: usize, height: usize, cell: usize) -> AlphaImage {
    let mut data = vec![0u8; width * height];
    let r_outer = cell as f32 * 0.4;
    let r_inner = r_outer * 0.55;

    for cy in (0..height).step_by(cell) {
        for cx in (0..width).step_by(cell) {
            let ox = cx as f32 + cell as f32 / 2.0;
            let oy = cy as f32 + cell as f32 / 2.0;
            for y in cy..(cy + cell).min(height) {
                for x in cx..(cx + cell).min(width) {
                    let dx = x as f32 - ox;
                    let dy = y as f32 - oy;
                    let r = (dx * dx + dy * dy).sqrt();
                    if r <= r_outer && r >= r_inner {
                        data[y * width + x] = 255;
                    }
                }
            }
        }
    }

    AlphaImage::from_vec(width, height, data).expect("valid image")
}

fn bench_extract(c: &mut Criterion) {
    let img = synthetic_sheet(1280, 1024, 128);
    let view = img.as_view();
    let cfg = ExtractConfig { diffusion_steps: 2 };

    c.bench_function("extract_contours_ring_sheet_1280x1024", |b| {
        b.iter(|| {
            let set = extract_contours(black_box(&view), black_box(&cfg)).expect("valid input");
            black_box((set.len(), set.total_points()));
        });
    });
}

fn bench_path_assembly(c: &mut Criterion) {
    let img = synthetic_sheet(1280, 1024, 128);
    let cfg = ExtractConfig { diffusion_steps: 2 };
    let set = extract_contours(&img.as_view(), &cfg).expect("valid input");

    c.bench_function("contour_set_to_path_ring_sheet", |b| {
        b.iter(|| {
            let path = contour_set_to_path(black_box(&set));
            black_box(path.cmds.len());
        });
    });
}

criterion_group!(benches, bench_extract, bench_path_assembly);
criterion_main!(benches);
