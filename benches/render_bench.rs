use std::path::PathBuf;

use criterion::{criterion_group, criterion_main, Criterion};
use storeshots::device::{IPAD, IPHONE};
use storeshots::{render, GeneratorConfig};

fn bench_render(c: &mut Criterion) {
    let cfg = GeneratorConfig {
        font_path: PathBuf::from("/definitely/not/here.ttc"),
        ..Default::default()
    };

    let mut group = c.benchmark_group("render");
    group.sample_size(10);
    for profile in [IPHONE, IPAD] {
        let v = profile.viewport;
        group.bench_function(profile.label, |b| {
            b.iter(|| render(v.width, v.height, &cfg).expect("render"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
