use symbolgen::{
    Error, Insets, Label, MemoryAssets, NoAssets, PixelBuffer, Rgba, SnapshotConfig, Snapshotter,
    SymbolImages,
};

#[test]
fn generated_label_is_registered_by_name() {
    let s = Snapshotter::new(NoAssets);
    let mut images = SymbolImages::new();
    let mut button = Label::new("Generated Symbol")
        .with_background(Rgba::WHITE)
        .with_padding(Insets::symmetric(8, 4));

    images.add_view(&s, "generated-symbol", &mut button).unwrap();

    let icon = images.get("generated-symbol").expect("registered");
    assert_eq!(icon.width(), 16 * 6 + 16);
    assert_eq!(icon.height(), 8 + 8);
    assert_eq!(images.names(), vec!["generated-symbol"]);
}

#[test]
fn missing_asset_falls_back_to_default_icon() {
    let s = Snapshotter::new(MemoryAssets::new());
    let mut images = SymbolImages::new();
    let fallback = PixelBuffer::from_rgba(1, 1, Rgba::RED.to_array().to_vec()).unwrap();

    images.add_resource_or(&s, "marker", "marker", fallback.clone()).unwrap();
    assert_eq!(images.get("marker"), Some(&fallback));
}

#[test]
fn exhaustion_is_not_masked_by_fallback() {
    let png = PixelBuffer::transparent(8, 8).unwrap().to_png().unwrap();
    let mut assets = MemoryAssets::new();
    assets.insert("huge", png);
    let cfg = SnapshotConfig { max_dimension: 4, ..Default::default() };
    let s = Snapshotter::with_config(assets, cfg);
    let mut images = SymbolImages::new();

    let fallback = PixelBuffer::transparent(1, 1).unwrap();
    let err = images.add_resource_or(&s, "huge", "huge", fallback).unwrap_err();
    assert!(matches!(err, Error::ResourceExhaustion { .. }));
    assert!(images.is_empty());
}
