use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::{FetchError, FetchResult};
use crate::services::config::Settings;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchange the long-lived refresh token for a short-lived access token.
///
/// One form-encoded POST, no retry. Transport failures and non-success
/// statuses both surface as `TOKEN_REFRESH_FAILED` so the run aborts
/// before any analytics query is issued.
pub fn refresh_access_token(settings: &Settings) -> FetchResult<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|err| FetchError::TokenRefresh {
            detail: err.to_string(),
        })?;

    debug!(target: "gsc::oauth", url = %settings.token_url, "refreshing access token");

    let resp = client
        .post(&settings.token_url)
        .form(&[
            ("client_id", settings.client_id.as_str()),
            ("client_secret", settings.client_secret.as_str()),
            ("refresh_token", settings.refresh_token.as_str()),
            ("grant_type", "refresh_token"),
        ])
        .send()
        .map_err(|err| FetchError::TokenRefresh {
            detail: err.to_string(),
        })?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().unwrap_or_default();
        return Err(FetchError::TokenRefresh {
            detail: format!("token endpoint returned {}: {}", status.as_u16(), body),
        });
    }

    let token: TokenResponse = resp.json().map_err(|err| FetchError::TokenRefresh {
        detail: format!("invalid token response: {err}"),
    })?;

    Ok(token.access_token)
}
