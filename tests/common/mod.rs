use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use httpmock::MockServer;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub project: PathBuf,
    pub server: MockServer,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let project = tmp.path().join("site");
        fs::create_dir_all(&project).expect("create isolated project dir");

        Self {
            _tmp: tmp,
            project,
            server: MockServer::start(),
        }
    }

    /// A complete, valid credentials file for the fixture property.
    pub fn full_config() -> Value {
        json!({
            "siteUrl": "sc-domain:example.com",
            "client_id": "fixture-client-id",
            "client_secret": "fixture-client-secret",
            "refresh_token": "fixture-refresh-token"
        })
    }

    pub fn write_config(&self, config: &Value) {
        fs::write(
            self.project.join(".gsc-config.json"),
            serde_json::to_string_pretty(config).expect("serialize config"),
        )
        .expect("write config");
    }

    /// Command wired to run inside the fixture project with both upstream
    /// endpoints pointed at the mock server.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("gsc-fetch");
        cmd.current_dir(&self.project)
            .env("GSC_OAUTH_TOKEN_URL", self.server.url("/token"))
            .env("GSC_API_BASE_URL", self.server.url("/webmasters/v3"));
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_err_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }
}

/// Fixture analytics row before normalization: ctr should round to 0.1235
/// and position to 4.4 on the way out.
pub fn fixture_rows() -> Value {
    json!({
        "rows": [
            {
                "keys": ["https://example.com/"],
                "clicks": 123,
                "impressions": 4567,
                "ctr": 0.123456,
                "position": 4.37
            }
        ]
    })
}

pub fn token_ok_body() -> Value {
    json!({
        "access_token": "fixture-access-token",
        "expires_in": 3599,
        "token_type": "Bearer"
    })
}
