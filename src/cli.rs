use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(
    name = "gsc-fetch",
    version,
    about = "Fetch Search Console performance metrics"
)]
pub struct Cli {
    #[arg(
        long = "type",
        value_enum,
        default_value_t = ReportType::All,
        help = "Which report sections to fetch"
    )]
    pub report_type: ReportType,

    #[arg(
        long = "siteUrl",
        value_name = "URL",
        help = "Override the configured GSC property URL"
    )]
    pub site_url: Option<String>,

    #[arg(
        long,
        value_name = "TOKEN",
        help = "Date range: 7d, 28d, 3m, 6m, 12m, or a literal YYYY-MM-DD,YYYY-MM-DD pair \
                (unrecognized tokens fall back to 28d)"
    )]
    pub range: Option<String>,

    #[arg(long, value_name = "N", help = "Row cap for dimension queries")]
    pub limit: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Summary,
    Query,
    Page,
    All,
}

impl ReportType {
    pub fn wants_summary(self) -> bool {
        matches!(self, ReportType::Summary | ReportType::All)
    }

    pub fn wants_queries(self) -> bool {
        matches!(self, ReportType::Query | ReportType::All)
    }

    pub fn wants_pages(self) -> bool {
        matches!(self, ReportType::Page | ReportType::All)
    }
}
