use std::path::Path;

use chrono::Utc;

use crate::cli::Cli;
use crate::domain::models::{Dimension, Metadata, Report};
use crate::error::FetchResult;
use crate::services::config;
use crate::services::date_range;
use crate::services::oauth;
use crate::services::search_analytics::SearchAnalyticsClient;

/// Run one fetch: config → date range → token → 0-3 queries → document.
///
/// Queries run sequentially and the first failure aborts the run; there is
/// no partial-success output.
pub fn handle_fetch(cli: &Cli, start_dir: &Path) -> FetchResult<Report> {
    let raw_config = config::discover_config(start_dir)?;
    let settings = config::resolve_settings(
        raw_config,
        cli.site_url.clone(),
        cli.range.clone(),
        cli.limit,
    )?;

    config::check_gitignore(start_dir);

    let range = date_range::resolve(&settings.range, Utc::now().date_naive());
    let access_token = oauth::refresh_access_token(&settings)?;
    let client =
        SearchAnalyticsClient::new(&settings.api_base_url, &settings.site_url, access_token)?;

    let summary = cli
        .report_type
        .wants_summary()
        .then(|| client.query_summary(&range))
        .transpose()?;
    let top_queries = cli
        .report_type
        .wants_queries()
        .then(|| client.query_dimension(&range, Dimension::Query, settings.limit))
        .transpose()?;
    let top_pages = cli
        .report_type
        .wants_pages()
        .then(|| client.query_dimension(&range, Dimension::Page, settings.limit))
        .transpose()?;

    Ok(Report {
        metadata: Metadata {
            site_url: settings.site_url,
            date_range: range,
            range: settings.range,
            fetched_at: Utc::now().to_rfc3339(),
        },
        summary,
        top_queries,
        top_pages,
    })
}
