use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ndarray::Array4;
use preprocess::{PixelBuffer, PostProcessor, PreProcessor, draw_onto_canvas};

/// Create raw RGBA pixel buffer for benchmarking (gradient pattern)
fn create_test_pixels(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = vec![0u8; (width * height * 4) as usize];
    for y in 0..height {
        for x in 0..width {
            let idx = ((y * width + x) * 4) as usize;
            pixels[idx] = (x % 256) as u8; // R
            pixels[idx + 1] = (y % 256) as u8; // G
            pixels[idx + 2] = ((x + y) % 256) as u8; // B
            pixels[idx + 3] = 255;
        }
    }
    pixels
}

fn benchmark_draw_onto_canvas(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_onto_canvas");

    let resolutions = [(640, 480), (1280, 720), (1920, 1080), (3840, 2160)];

    for (width, height) in resolutions.iter() {
        let pixels = create_test_pixels(*width, *height);

        group.bench_with_input(
            BenchmarkId::new("stretch", format!("{}x{}", width, height)),
            &pixels,
            |b, pixels| {
                b.iter(|| {
                    draw_onto_canvas(
                        black_box(pixels),
                        black_box(*width),
                        black_box(*height),
                        256,
                    )
                    .unwrap()
                });
            },
        );
    }

    group.finish();
}

fn benchmark_preprocess(c: &mut Criterion) {
    let mut group = c.benchmark_group("preprocess");

    let pixels = PixelBuffer::new(256, 256, create_test_pixels(256, 256)).unwrap();

    for input_size in [64u32, 104, 224] {
        let preprocessor = PreProcessor::new(input_size);

        group.bench_with_input(
            BenchmarkId::new("to_tensor", input_size),
            &pixels,
            |b, pixels| b.iter(|| preprocessor.preprocess(black_box(pixels)).unwrap()),
        );
    }

    group.finish();
}

fn benchmark_postprocess(c: &mut Criterion) {
    let mut group = c.benchmark_group("postprocess");

    let postprocessor = PostProcessor::default();

    for input_size in [64usize, 104, 224] {
        let output = Array4::from_elem((1, input_size, input_size, 3), 0.5f32);

        group.bench_with_input(
            BenchmarkId::new("to_pixels", input_size),
            &output,
            |b, output| b.iter(|| postprocessor.postprocess(black_box(output.clone())).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_draw_onto_canvas,
    benchmark_preprocess,
    benchmark_postprocess
);

criterion_main!(benches);
