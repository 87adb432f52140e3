use collage_packer_core::collect_assets;
use image::RgbImage;
use std::fs;
use tempfile::TempDir;

fn save(dir: &TempDir, rel: &str, w: u32, h: u32) {
    let path = dir.path().join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    RgbImage::new(w, h).save(&path).unwrap();
}

#[test]
fn walks_recursively_and_sorts_tallest_first() {
    let dir = TempDir::new().unwrap();
    save(&dir, "a.png", 200, 400); // -> 75 x 150
    save(&dir, "sub/b.png", 100, 300); // -> 50 x 150
    save(&dir, "sub/deep/c.jpg", 300, 300); // -> 100 x 100, rotated

    let (assets, min_dim) = collect_assets(dir.path(), 100.0, 150.0);

    assert_eq!(assets.len(), 3);
    // height descending, width breaks the 150-tie
    assert!((assets[0].width - 75.0).abs() < 1e-3);
    assert!((assets[1].width - 50.0).abs() < 1e-3);
    assert!((assets[2].height - 100.0).abs() < 1e-3);
    assert!(assets[2].rotated);
    assert!((min_dim - 50.0).abs() < 1e-3);
}

#[test]
fn non_images_and_unreadable_files_are_skipped() {
    let dir = TempDir::new().unwrap();
    save(&dir, "ok.png", 200, 400);
    fs::write(dir.path().join("notes.txt"), "not an image").unwrap();
    fs::write(dir.path().join("broken.png"), "png in name only").unwrap();

    let (assets, _) = collect_assets(dir.path(), 100.0, 150.0);
    assert_eq!(assets.len(), 1);
    assert!(assets[0].source.ends_with("ok.png"));
}

#[test]
fn empty_directory_yields_no_assets_and_box_minimum() {
    let dir = TempDir::new().unwrap();

    let (assets, min_dim) = collect_assets(dir.path(), 100.0, 150.0);
    assert!(assets.is_empty());
    // untouched: min(box width, box height)
    assert_eq!(min_dim, 100.0);
}

#[test]
fn extension_match_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    save(&dir, "UPPER.PNG", 200, 400);

    let (assets, _) = collect_assets(dir.path(), 100.0, 150.0);
    assert_eq!(assets.len(), 1);
}
