use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{FetchError, FetchResult};

pub const CONFIG_FILE_NAME: &str = ".gsc-config.json";

const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/webmasters/v3";

const DEFAULT_RANGE: &str = "28d";
const DEFAULT_LIMIT: u32 = 25;

/// Raw shape of `.gsc-config.json`. Field validation happens in
/// [`resolve_settings`] so that every missing field can be reported at
/// once instead of failing on the first.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(rename = "siteUrl")]
    pub site_url: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub defaults: ConfigDefaults,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigDefaults {
    pub range: Option<String>,
    pub limit: Option<u32>,
}

/// Fully resolved invocation settings: config file merged with CLI
/// overrides and endpoint environment overrides.
#[derive(Debug)]
pub struct Settings {
    pub site_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    pub range: String,
    pub limit: u32,
    pub token_url: String,
    pub api_base_url: String,
}

struct RequiredField {
    key: &'static str,
    hint: &'static str,
}

const REQUIRED_FIELDS: [RequiredField; 4] = [
    RequiredField {
        key: "siteUrl",
        hint: "The GSC property URL. Use sc-domain:yourdomain.com for Domain properties \
               or https://yourdomain.com/ for URL-prefix properties.",
    },
    RequiredField {
        key: "client_id",
        hint: "OAuth2 Client ID from Google Cloud Console (APIs & Services > Credentials).",
    },
    RequiredField {
        key: "client_secret",
        hint: "OAuth2 Client Secret from Google Cloud Console (APIs & Services > Credentials).",
    },
    RequiredField {
        key: "refresh_token",
        hint: "Refresh token obtained via https://developers.google.com/oauthplayground/ \
               using the Search Console API v3 scope.",
    },
];

/// Walk upward from `start_dir` looking for `.gsc-config.json`.
///
/// A file that exists but cannot be read or parsed is skipped and the walk
/// continues toward the filesystem root.
pub fn discover_config(start_dir: &Path) -> FetchResult<ConfigFile> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        let raw = match std::fs::read_to_string(&candidate) {
            Ok(raw) => raw,
            Err(_) => continue,
        };
        match serde_json::from_str::<ConfigFile>(&raw) {
            Ok(config) => {
                debug!(target: "gsc::config", path = %candidate.display(), "loaded config");
                return Ok(config);
            }
            Err(err) => {
                warn!(
                    target: "gsc::config",
                    path = %candidate.display(),
                    error = %err,
                    "skipping unparseable config file"
                );
            }
        }
    }
    Err(FetchError::ConfigNotFound {
        start_dir: start_dir.display().to_string(),
    })
}

/// Validate required fields and merge in CLI overrides and defaults.
///
/// `site_url_override` waives the `siteUrl` requirement; every other
/// missing field is collected so the error lists them all.
pub fn resolve_settings(
    config: ConfigFile,
    site_url_override: Option<String>,
    range_override: Option<String>,
    limit_override: Option<u32>,
) -> FetchResult<Settings> {
    let present = |field: &Option<String>| field.as_deref().is_some_and(|v| !v.trim().is_empty());

    let mut missing = Vec::new();
    for field in &REQUIRED_FIELDS {
        let satisfied = match field.key {
            "siteUrl" => site_url_override.is_some() || present(&config.site_url),
            "client_id" => present(&config.client_id),
            "client_secret" => present(&config.client_secret),
            "refresh_token" => present(&config.refresh_token),
            _ => unreachable!("unknown required field"),
        };
        if !satisfied {
            missing.push(field.key.to_string());
        }
    }

    if !missing.is_empty() {
        let details = REQUIRED_FIELDS
            .iter()
            .filter(|f| missing.iter().any(|m| m.as_str() == f.key))
            .map(|f| format!("  - {}: {}", f.key, f.hint))
            .collect::<Vec<_>>()
            .join("\n");
        return Err(FetchError::ConfigIncomplete { missing, details });
    }

    let site_url = match site_url_override {
        Some(url) => url,
        None => config.site_url.unwrap_or_default(),
    };

    Ok(Settings {
        site_url,
        client_id: config.client_id.unwrap_or_default(),
        client_secret: config.client_secret.unwrap_or_default(),
        refresh_token: config.refresh_token.unwrap_or_default(),
        range: range_override
            .or(config.defaults.range)
            .unwrap_or_else(|| DEFAULT_RANGE.to_string()),
        limit: limit_override.or(config.defaults.limit).unwrap_or(DEFAULT_LIMIT),
        token_url: std::env::var("GSC_OAUTH_TOKEN_URL")
            .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
        api_base_url: std::env::var("GSC_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
    })
}

/// Warn when the nearest `.gitignore` does not cover the credentials file.
///
/// Walks upward from `start_dir`; the first `.gitignore` found decides the
/// outcome. No `.gitignore` anywhere means no check. Never fails the run.
pub fn check_gitignore(start_dir: &Path) {
    let Some(content) = nearest_gitignore(start_dir) else {
        return;
    };
    if !content.contains(CONFIG_FILE_NAME) {
        warn!(
            target: "gsc::config",
            "{} is not in your .gitignore. This file contains credentials and should \
             never be committed. Add {} to your .gitignore file.",
            CONFIG_FILE_NAME,
            CONFIG_FILE_NAME
        );
    }
}

fn nearest_gitignore(start_dir: &Path) -> Option<String> {
    start_dir
        .ancestors()
        .find_map(|dir| std::fs::read_to_string(dir.join(".gitignore")).ok())
}
