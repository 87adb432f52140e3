use collage_packer_core::{
    Layout, LayoutConfig, Page, PageCanvas, Phase, Placement, Result, SizedAsset, pack, render,
};
use std::path::Path;

fn asset(w: f32, h: f32) -> SizedAsset {
    SizedAsset::new(format!("{w}x{h}.png"), w, h, false)
}

#[test]
fn packing_reports_calculation_then_one_tick_per_asset() {
    let cfg = LayoutConfig::default();
    let assets = vec![
        asset(100.0, 100.0),
        asset(100.0, 100.0),
        asset(100.0, 100.0),
        asset(100.0, 100.0),
    ];

    let mut events: Vec<(u8, Option<Phase>)> = Vec::new();
    let mut sink = |p: u8, ph: Option<Phase>| events.push((p, ph));
    pack(assets, 50.0, &cfg, &mut sink);

    assert_eq!(
        events,
        vec![
            (0, Some(Phase::Calculation)),
            (25, None),
            (50, None),
            (75, None),
            (100, None),
        ]
    );
}

#[test]
fn percentages_floor_and_end_at_one_hundred() {
    let cfg = LayoutConfig::default();
    let assets = vec![asset(50.0, 50.0), asset(50.0, 50.0), asset(50.0, 50.0)];

    let mut events: Vec<(u8, Option<Phase>)> = Vec::new();
    let mut sink = |p: u8, ph: Option<Phase>| events.push((p, ph));
    pack(assets, 50.0, &cfg, &mut sink);

    // 1/3 and 2/3 floor to 33 and 66
    assert_eq!(events[1].0, 33);
    assert_eq!(events[2].0, 66);
    assert_eq!(events[3].0, 100);
}

struct NoopCanvas;

impl PageCanvas for NoopCanvas {
    fn draw_image(&mut self, _: &Path, _: f32, _: f32, _: f32, _: f32) -> Result<()> {
        Ok(())
    }
    fn save_state(&mut self) {}
    fn rotate(&mut self, _: f32) {}
    fn restore_state(&mut self) {}
    fn new_page(&mut self) {}
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

#[test]
fn rendering_reports_placement_then_one_tick_per_image() {
    let page = Page {
        id: 0,
        width: 595.0,
        height: 842.0,
        placements: vec![
            Placement {
                asset: asset(100.0, 100.0),
                x: 10.0,
                y: 700.0,
            },
            Placement {
                asset: asset(100.0, 100.0),
                x: 120.0,
                y: 700.0,
            },
        ],
    };
    let layout = Layout {
        pages: vec![page],
        unused_right: Vec::new(),
        unused_bottom: Vec::new(),
    };

    let mut events: Vec<(u8, Option<Phase>)> = Vec::new();
    let mut sink = |p: u8, ph: Option<Phase>| events.push((p, ph));
    render(&layout, &mut NoopCanvas, &mut sink).unwrap();

    assert_eq!(
        events,
        vec![(0, Some(Phase::Placement)), (50, None), (100, None)]
    );
}

#[test]
fn empty_run_still_announces_both_phases() {
    let cfg = LayoutConfig::default();

    let mut events: Vec<(u8, Option<Phase>)> = Vec::new();
    let mut sink = |p: u8, ph: Option<Phase>| events.push((p, ph));
    let layout = pack(Vec::new(), 50.0, &cfg, &mut sink);
    render(&layout, &mut NoopCanvas, &mut sink).unwrap();

    assert_eq!(
        events,
        vec![(0, Some(Phase::Calculation)), (0, Some(Phase::Placement))]
    );
}
