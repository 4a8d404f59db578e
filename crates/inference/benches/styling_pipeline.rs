use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use inference::{IdentityBackend, SessionContext, StylePipeline, Surface, source};
use preprocess::Dimensions;

fn benchmark_decode_example(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_source");

    for display in [128u32, 256, 512] {
        group.bench_with_input(
            BenchmarkId::new("bundled_example", display),
            &display,
            |b, &display| {
                b.iter(|| source::decode_source(black_box(source::BUNDLED_EXAMPLE), display).unwrap())
            },
        );
    }

    group.finish();
}

fn benchmark_identity_styling(c: &mut Criterion) {
    let mut group = c.benchmark_group("style_image");

    for input in [64u32, 104, 224] {
        let dimensions = Dimensions::new(input, 256).unwrap();
        let pipeline = StylePipeline::new(dimensions);

        let mut context = SessionContext::new();
        context.install_model(IdentityBackend);
        let generation = context.begin_source_request();
        context.complete_source(
            generation,
            source::decode_source(source::BUNDLED_EXAMPLE, dimensions.display),
        );

        let mut styled = Surface::new(dimensions.display);

        group.bench_function(BenchmarkId::new("identity", input), |b| {
            b.iter(|| pipeline.run(black_box(&mut context), &mut styled).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_decode_example, benchmark_identity_styling);

criterion_main!(benches);
