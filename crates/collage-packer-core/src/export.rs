use crate::model::Layout;
use serde_json::{Value, json};

/// Serialize a `Layout` as a JSON object `{ pages, stats }`.
/// Suitable for generic tooling and simple consumption.
pub fn to_json(layout: &Layout) -> Value {
    let pages_val = layout
        .pages
        .iter()
        .map(|p| {
            let placements: Vec<Value> = p
                .placements
                .iter()
                .map(|pl| {
                    json!({
                        "source": pl.asset.source.to_string_lossy().replace('\\', "/"),
                        "x": pl.x,
                        "y": pl.y,
                        "width": pl.asset.width,
                        "height": pl.asset.height,
                        "rotated": pl.asset.rotated,
                    })
                })
                .collect();
            json!({
                "id": p.id,
                "width": p.width,
                "height": p.height,
                "placements": placements,
            })
        })
        .collect::<Vec<_>>();
    let stats = layout.stats();
    json!({ "pages": pages_val, "stats": stats })
}
