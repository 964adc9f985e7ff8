//! JSON snapshot of the active chart, used by the download/report actions.

use serde_json::json;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use super::insights::ChartTotals;
use super::layout::ChartLayout;

/// Serialises the rendered chart plus its totals. The snapshot reflects the
/// layout exactly as displayed: already sorted, filtered, and scaled.
pub fn chart_snapshot(category_label: &str, layout: &ChartLayout, totals: &ChartTotals) -> serde_json::Value {
    json!({
        "generated_at": now_rfc3339(),
        "category": category_label,
        "display_mode": layout.mode.value(),
        "max_target": layout.max_target,
        "totals": totals,
        "groups": layout.groups,
    })
}

pub fn snapshot_string(category_label: &str, layout: &ChartLayout, totals: &ChartTotals) -> String {
    let snapshot = chart_snapshot(category_label, layout, totals);
    serde_json::to_string_pretty(&snapshot).unwrap_or_else(|_| "{}".to_string())
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Hands a snapshot to the user. Browser builds trigger a JSON download
/// through a temporary object URL; native builds write the file at the
/// given path.
pub fn deliver_snapshot(filename: &str, json: &str) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{JsCast, JsValue};
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str(json));

        let opts = BlobPropertyBag::new();
        opts.set_type("application/json");
        let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::fs::write(filename, json).map_err(|err| err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::insights::compute_totals;
    use crate::charts::layout::{build_layout, DisplayMode};
    use crate::core::record::PerfRecord;

    #[test]
    fn snapshot_carries_groups_and_totals() {
        let records = vec![
            PerfRecord::new("Star Brands Ltd", 600_000.0, 520_000.0, "#10b981"),
            PerfRecord::new("MediaCorp India", 500_000.0, 450_000.0, "#3b82f6"),
        ];
        let layout = build_layout(&records, DisplayMode::Bars);
        let totals = compute_totals(&records);

        let snapshot = chart_snapshot("client", &layout, &totals);
        assert_eq!(snapshot["category"], "client");
        assert_eq!(snapshot["display_mode"], "bars");
        assert_eq!(snapshot["groups"].as_array().map(|g| g.len()), Some(2));
        assert_eq!(snapshot["groups"][0]["name"], "Star Brands Ltd");
        assert_eq!(snapshot["totals"]["target"], 1_100_000.0);
    }

    #[test]
    fn delivered_snapshot_round_trips_from_disk() {
        let records = vec![PerfRecord::new("FCT", 1_200_000.0, 950_000.0, "#3b82f6")];
        let layout = build_layout(&records, DisplayMode::Bars);
        let totals = compute_totals(&records);
        let json = snapshot_string("product", &layout, &totals);

        let path = std::env::temp_dir().join("salespulse-export-test.json");
        let path_str = path.to_string_lossy().to_string();
        deliver_snapshot(&path_str, &json).expect("write succeeds");

        let written = std::fs::read_to_string(&path).expect("file exists");
        let parsed: serde_json::Value = serde_json::from_str(&written).expect("valid json");
        assert_eq!(parsed["category"], "product");
        assert_eq!(parsed["groups"][0]["name"], "FCT");
        std::fs::remove_file(&path).ok();
    }
}
