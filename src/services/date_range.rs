use chrono::{Days, Months, NaiveDate};
use tracing::warn;

use crate::domain::models::DateRange;

/// GSC data trails real time; the newest queryable day is `today - 3`.
const REPORTING_LAG_DAYS: u64 = 3;

/// Resolve a range token against an injected "today".
///
/// A token containing a comma is treated as a literal `start,end` pair and
/// passed through without calendar validation. Symbolic tokens anchor the
/// end date at `today - 3 days` and subtract the token's offset for the
/// start date. Unrecognized tokens resolve as `28d`; this is a documented
/// default, not an error.
///
/// Month subtraction clamps to the last day of the target month
/// (2024-05-31 minus 3 months is 2024-02-29).
pub fn resolve(token: &str, today: NaiveDate) -> DateRange {
    if let Some((start, end)) = token.split_once(',') {
        return DateRange {
            start_date: start.to_string(),
            end_date: end.to_string(),
        };
    }

    let end = today - Days::new(REPORTING_LAG_DAYS);
    let start = match token {
        "7d" => end - Days::new(7),
        "28d" => end - Days::new(28),
        "3m" => end - Months::new(3),
        "6m" => end - Months::new(6),
        "12m" => end - Months::new(12),
        other => {
            warn!(
                target: "gsc::range",
                token = other,
                "unrecognized range token, using 28d"
            );
            end - Days::new(28)
        }
    };

    DateRange {
        start_date: start.format("%Y-%m-%d").to_string(),
        end_date: end.format("%Y-%m-%d").to_string(),
    }
}
