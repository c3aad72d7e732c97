mod classify;
mod hover;
mod lookup;
mod serve;

use std::sync::Arc;

use figihover_core::{
    FixtureHttpClient, HostSettings, HoverContent, HoverProvider, HttpResponse, LookupConfig,
    LookupConfigBuilder, OpenFigiClient,
};
use serde_json::{json, Value};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Canned mapping response answered in `--mock` mode.
const MOCK_MAPPING_RESPONSE: &str = r#"[{"data":[{"figi":"BBG000B9XRY4","name":"APPLE INC","ticker":"AAPL","exchCode":"US","compositeFIGI":"BBG000B9XRY4","securityType":"Common Stock","marketSector":"Equity","shareClassFIGI":"BBG001S5N8V8","securityType2":"Common Stock","securityDescription":"AAPL"}]}]"#;

pub struct CommandResult {
    pub data: Value,
    pub text: String,
    /// At least one input was not an identifier.
    pub failed: bool,
}

impl CommandResult {
    pub fn ok(data: Value, text: impl Into<String>) -> Self {
        Self {
            data,
            text: text.into(),
            failed: false,
        }
    }

    pub fn with_failure(mut self, failed: bool) -> Self {
        self.failed = failed;
        self
    }
}

/// Runs the selected command. `serve` writes its own output and yields `None`.
pub async fn run(cli: &Cli, provider: &HoverProvider) -> Result<Option<CommandResult>, CliError> {
    let result = match &cli.command {
        Command::Classify(args) => classify::run(args)?,
        Command::Lookup(args) => lookup::run(args, provider).await?,
        Command::Hover(args) => hover::run(args, provider).await?,
        Command::Serve => {
            serve::run(provider).await?;
            return Ok(None);
        }
    };
    Ok(Some(result))
}

pub fn lookup_config(cli: &Cli) -> Result<LookupConfig, CliError> {
    let mut builder = LookupConfigBuilder::new()
        .with_env()
        .with_api_key(cli.api_key.clone())
        .with_endpoint(cli.endpoint.clone())
        .with_timeout_ms(cli.timeout_ms);

    if let Some(path) = &cli.settings {
        builder = builder.with_settings(HostSettings::load(path)?);
    }

    Ok(builder.build()?)
}

pub fn build_provider(cli: &Cli) -> Result<HoverProvider, CliError> {
    let config = lookup_config(cli)?;
    let client = if cli.mock {
        let fixture = FixtureHttpClient::responding(HttpResponse::new(200, MOCK_MAPPING_RESPONSE));
        OpenFigiClient::with_http_client(Arc::new(fixture), config)
    } else {
        OpenFigiClient::new(config)
    };
    Ok(HoverProvider::new(client))
}

/// JSON shape shared by `lookup`, `hover` and `serve`.
pub fn hover_json(content: &HoverContent) -> Value {
    match content {
        HoverContent::Empty => json!({ "kind": content.kind_str(), "contents": Value::Null }),
        _ => json!({ "kind": content.kind_str(), "contents": content.text() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[tokio::test]
    async fn mock_provider_answers_without_network() {
        let cli = Cli::try_parse_from(["figihover", "--mock", "lookup", "US0378331005"])
            .expect("valid arguments");
        let provider = build_provider(&cli).expect("provider");

        let content = provider.hover_token("US0378331005").await;
        assert!(content.text().starts_with("**APPLE INC**"));
    }

    #[test]
    fn settings_file_supplies_api_key() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "isin-code.OpenFIGIAPIKey": "from-settings" }"#)
            .expect("write settings");

        let cli = Cli::try_parse_from([
            "figihover",
            "--settings",
            path.to_str().expect("utf-8 path"),
            "classify",
            "X",
        ])
        .expect("valid arguments");

        let config = lookup_config(&cli).expect("config");
        if std::env::var(figihover_core::config::API_KEY_ENV).is_err() {
            assert_eq!(config.api_key(), Some("from-settings"));
        }
    }

    #[test]
    fn missing_settings_file_is_a_config_error() {
        let cli = Cli::try_parse_from([
            "figihover",
            "--settings",
            "/definitely/not/here.json",
            "classify",
            "X",
        ])
        .expect("valid arguments");

        let err = lookup_config(&cli).expect_err("missing file");
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn empty_hover_serializes_null_contents() {
        assert_eq!(
            hover_json(&HoverContent::Empty),
            json!({ "kind": "empty", "contents": null })
        );
    }
}
