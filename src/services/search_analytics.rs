use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::domain::models::{DateRange, Dimension, MetricRow, SummaryMetrics};
use crate::error::{FetchError, FetchResult};
use crate::services::normalize;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// One row as returned by the Search Analytics API, before rounding.
#[derive(Debug, Deserialize)]
pub struct RawRow {
    #[serde(default)]
    pub keys: Vec<String>,
    pub clicks: u64,
    pub impressions: u64,
    pub ctr: f64,
    pub position: f64,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    rows: Vec<RawRow>,
}

/// Bearer-authenticated client for the Search Analytics query endpoint of
/// a single site. Queries are independent read calls; a failure in any of
/// them aborts the whole run.
pub struct SearchAnalyticsClient {
    client: reqwest::blocking::Client,
    endpoint: String,
    access_token: String,
}

impl SearchAnalyticsClient {
    pub fn new(api_base_url: &str, site_url: &str, access_token: String) -> FetchResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|err| FetchError::Api {
                detail: err.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: query_endpoint(api_base_url, site_url),
            access_token,
        })
    }

    /// Aggregate metrics over the whole range: no dimensions, the first
    /// returned row is the site-wide total. Zero rows normalizes to a
    /// zero-valued summary.
    pub fn query_summary(&self, range: &DateRange) -> FetchResult<SummaryMetrics> {
        let body = json!({
            "startDate": range.start_date,
            "endDate": range.end_date,
        });
        let rows = self.post_query(&body)?;
        Ok(normalize::summarize(rows))
    }

    /// Top rows grouped by one dimension, capped at `row_limit`.
    pub fn query_dimension(
        &self,
        range: &DateRange,
        dimension: Dimension,
        row_limit: u32,
    ) -> FetchResult<Vec<MetricRow>> {
        let body = json!({
            "startDate": range.start_date,
            "endDate": range.end_date,
            "dimensions": [dimension.as_str()],
            "rowLimit": row_limit,
        });
        let rows = self.post_query(&body)?;
        Ok(rows.into_iter().map(normalize::normalize_row).collect())
    }

    fn post_query(&self, body: &serde_json::Value) -> FetchResult<Vec<RawRow>> {
        debug!(target: "gsc::api", endpoint = %self.endpoint, body = %body, "querying search analytics");

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.access_token)
            .json(body)
            .send()
            .map_err(|err| FetchError::Api {
                detail: err.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(FetchError::Api {
                detail: format!("query endpoint returned {}: {}", status.as_u16(), body),
            });
        }

        let decoded: QueryResponse = resp.json().map_err(|err| FetchError::Api {
            detail: format!("invalid query response: {err}"),
        })?;
        Ok(decoded.rows)
    }
}

/// The site URL is a single path segment; `sc-domain:` prefixes and
/// URL-prefix properties both need percent-encoding.
fn query_endpoint(api_base_url: &str, site_url: &str) -> String {
    format!(
        "{}/sites/{}/searchAnalytics/query",
        api_base_url.trim_end_matches('/'),
        urlencoding::encode(site_url)
    )
}
