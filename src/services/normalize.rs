use crate::domain::models::{MetricRow, SummaryMetrics};
use crate::services::search_analytics::RawRow;

/// Round to `places` decimal places, half away from zero.
///
/// Kept as a single explicit helper so the wire values stay pinned to
/// `round(v * 10^n) / 10^n` exactly, matching the upstream contract.
fn round_decimals(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Shape one raw dimension row into the output contract: `ctr` to 4
/// decimal places, `position` to 1, clicks/impressions untouched.
pub fn normalize_row(raw: RawRow) -> MetricRow {
    MetricRow {
        keys: raw.keys,
        clicks: raw.clicks,
        impressions: raw.impressions,
        ctr: round_decimals(raw.ctr, 4),
        position: round_decimals(raw.position, 1),
    }
}

/// Shape the summary response. Zero upstream rows yields the zero-valued
/// summary rather than an absent one.
pub fn summarize(rows: Vec<RawRow>) -> SummaryMetrics {
    match rows.into_iter().next() {
        None => SummaryMetrics::default(),
        Some(row) => SummaryMetrics {
            clicks: row.clicks,
            impressions: row.impressions,
            ctr: round_decimals(row.ctr, 4),
            position: round_decimals(row.position, 1),
        },
    }
}
