use serde::{Deserialize, Serialize};

/// Inclusive calendar-date window, `YYYY-MM-DD` on both ends.
///
/// Literal `--range start,end` pairs are passed through as-is, so the
/// fields stay plain strings and carry no calendar validation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MetricRow {
    pub keys: Vec<String>,
    pub clicks: u64,
    pub impressions: u64,
    pub ctr: f64,
    pub position: f64,
}

/// Aggregate metrics with no grouping key. All-zero when the upstream
/// summary query returns no rows.
#[derive(Debug, Serialize, Clone, Default, PartialEq)]
pub struct SummaryMetrics {
    pub clicks: u64,
    pub impressions: u64,
    pub ctr: f64,
    pub position: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub site_url: String,
    pub date_range: DateRange,
    pub range: String,
    pub fetched_at: String,
}

/// The single output document. Sections are present only when requested.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub metadata: Metadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_queries: Option<Vec<MetricRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_pages: Option<Vec<MetricRow>>,
}

/// Grouping key for dimension queries.
#[derive(Clone, Copy, Debug)]
pub enum Dimension {
    Query,
    Page,
}

impl Dimension {
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Query => "query",
            Dimension::Page => "page",
        }
    }
}
