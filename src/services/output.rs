use serde_json::json;

use crate::domain::models::Report;
use crate::error::FetchError;

/// Pretty-print the success document. Stdout carries nothing else.
pub fn print_report(report: &Report) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Print the terminal error object: compact, single line, still stdout so
/// callers always get machine-readable output on both paths.
pub fn print_error(err: &FetchError) {
    let mut payload = json!({
        "error": err.code(),
        "message": err.to_string(),
    });
    if let FetchError::ConfigIncomplete { missing, .. } = err {
        payload["missingFields"] = json!(missing);
    }
    println!("{payload}");
}
