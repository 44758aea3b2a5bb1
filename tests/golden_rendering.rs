use std::fs;
use std::path::PathBuf;

use symbolgen::{ColorView, Insets, Label, NoAssets, Rgba, Snapshotter, Stack};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

#[test]
fn golden_callout_matches_fixture() {
    let mut callout = Stack::horizontal()
        .with_background(Rgba::WHITE)
        .with_padding(Insets::uniform(3))
        .with_spacing(2)
        .push(ColorView::new(8, 8, Rgba::RED))
        .push(Label::new("Golden\nGate").with_color(Rgba::BLUE));

    let snapshot = Snapshotter::new(NoAssets).snapshot_view(&mut callout).unwrap();

    // swatch 8 + spacing 2 + two-line label 36x18, inside 3px padding
    assert_eq!((snapshot.width(), snapshot.height()), (52, 24));
    assert_eq!(snapshot.pixel(0, 0), Some(Rgba::WHITE));
    assert_eq!(snapshot.pixel(51, 23), Some(Rgba::WHITE));
    assert_eq!(snapshot.pixel(3, 3), Some(Rgba::RED));
    assert_eq!(snapshot.pixel(10, 10), Some(Rgba::RED));
    assert_eq!(snapshot.pixel(11, 3), Some(Rgba::WHITE));
    // first column of 'G' lights rows 1..=5 of its cell
    assert_eq!(snapshot.pixel(13, 3), Some(Rgba::WHITE));
    assert_eq!(snapshot.pixel(13, 4), Some(Rgba::BLUE));
    assert!(snapshot
        .pixels()
        .all(|p| p == Rgba::WHITE || p == Rgba::RED || p == Rgba::BLUE));

    let digest = snapshot.digest();

    let expected_path = golden_path("callout.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    let exp_bytes = hex::decode(exp.trim()).expect("invalid hex in golden");
    assert_eq!(hex::decode(&digest).unwrap(), exp_bytes);
}
