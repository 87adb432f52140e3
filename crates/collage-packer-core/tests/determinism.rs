use collage_packer_core::{Layout, LayoutConfig, NullProgress, SizedAsset, pack};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_batch(seed: u64, n: usize) -> (Vec<SizedAsset>, f32) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut min_dim = f32::INFINITY;
    let mut assets = Vec::with_capacity(n);
    for i in 0..n {
        let a = rng.gen_range(30.0f32..140.0);
        let b = rng.gen_range(30.0f32..140.0);
        // portrait, as the sizer guarantees
        let (w, h) = (a.min(b), a.max(b));
        min_dim = min_dim.min(w);
        assets.push(SizedAsset::new(format!("img_{i:03}.png"), w, h, false));
    }
    assets.sort_by(|a, b| a.packing_order(b));
    (assets, min_dim)
}

#[test]
fn identical_inputs_yield_identical_layouts() {
    let cfg = LayoutConfig::default();
    let (assets, min_dim) = random_batch(0xC0FFEE, 150);

    let first = pack(assets.clone(), min_dim, &cfg, &mut NullProgress);
    let second = pack(assets, min_dim, &cfg, &mut NullProgress);

    let a = serde_json::to_string(&first).unwrap();
    let b = serde_json::to_string(&second).unwrap();
    assert_eq!(a, b);
}

#[test]
fn every_asset_is_placed_exactly_once() {
    let cfg = LayoutConfig::default();
    let (assets, min_dim) = random_batch(42, 150);
    let n = assets.len();

    let layout = pack(assets, min_dim, &cfg, &mut NullProgress);
    let placed: usize = layout.pages.iter().map(|p| p.placements.len()).sum();
    assert_eq!(placed, n);
    assert_eq!(layout.stats().num_placements, n);
}

#[test]
fn page_ids_are_contiguous_and_pages_nonempty() {
    let cfg = LayoutConfig {
        page_width: 300.0,
        page_height: 400.0,
        margin: 8.0,
    };
    let (assets, min_dim) = random_batch(7, 80);

    let layout = pack(assets, min_dim, &cfg, &mut NullProgress);
    assert!(layout.pages.len() > 1, "expected multi-page overflow");
    for (i, page) in layout.pages.iter().enumerate() {
        assert_eq!(page.id, i);
        assert!(!page.placements.is_empty(), "page {i} is empty");
    }
}

#[test]
fn leftover_free_spaces_respect_the_minimum() {
    let cfg = LayoutConfig::default();
    let (assets, min_dim) = random_batch(99, 150);

    let layout = pack(assets, min_dim, &cfg, &mut NullProgress);
    check_spaces(&layout, min_dim);

    // indexes stay sorted ascending by available extent
    for entries in [&layout.unused_right, &layout.unused_bottom] {
        for pair in entries.windows(2) {
            assert!(pair[0].available <= pair[1].available);
        }
    }
}

fn check_spaces(layout: &Layout, min_dim: f32) {
    for space in layout.unused_right.iter().chain(&layout.unused_bottom) {
        assert!(
            space.available >= min_dim,
            "space {space:?} below minimum {min_dim}"
        );
        assert!(space.page < layout.pages.len() + 1);
    }
}
