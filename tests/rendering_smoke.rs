use symbolgen::rendering::raster::rasterize;
use symbolgen::{ColorView, Rgba, SnapshotConfig};

#[test]
fn smoke_rasterize() {
    let mut v = ColorView::new(256, 128, Rgba::WHITE);
    let s = rasterize(&mut v, &SnapshotConfig::default()).unwrap();
    assert_eq!(s.width(), 256);
    assert_eq!(s.height(), 128);
    assert_eq!(s.len(), 256 * 128 * 4);
}
