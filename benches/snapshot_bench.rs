use criterion::{criterion_group, criterion_main, Criterion};

use symbolgen::{Insets, Label, MemoryAssets, PixelBuffer, Rgba, Snapshotter};

fn bench_snapshot_view(c: &mut Criterion) {
    let s = Snapshotter::new(MemoryAssets::new());
    let mut label = Label::new("Generated Symbol")
        .with_background(Rgba::WHITE)
        .with_padding(Insets::uniform(6))
        .with_scale(2);

    c.bench_function("snapshot_view_label", |b| {
        b.iter(|| {
            let _ = s.snapshot_view(&mut label).unwrap();
        })
    });
}

fn bench_snapshot_resource(c: &mut Criterion) {
    let icon = PixelBuffer::from_rgba(64, 64, vec![128; 64 * 64 * 4]).unwrap();
    let mut assets = MemoryAssets::new();
    assets.insert("marker", icon.to_png().unwrap());
    let s = Snapshotter::new(assets);

    c.bench_function("snapshot_resource_png", |b| {
        b.iter(|| {
            let _ = s.snapshot_resource("marker").unwrap();
        })
    });
}

criterion_group!(benches, bench_snapshot_view, bench_snapshot_resource);
criterion_main!(benches);
