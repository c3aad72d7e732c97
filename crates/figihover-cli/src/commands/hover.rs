use figihover_core::hover::word_range_at;
use figihover_core::{HoverProvider, Position};

use crate::cli::HoverArgs;
use crate::error::CliError;

use super::{hover_json, CommandResult};

pub async fn run(args: &HoverArgs, provider: &HoverProvider) -> Result<CommandResult, CliError> {
    let document = std::fs::read_to_string(&args.file)?;
    let position = Position::new(args.line, args.character);

    let content = provider.provide_hover(&document, position).await;

    let mut data = hover_json(&content);
    data["range"] = serde_json::to_value(word_range_at(&document, position))?;

    Ok(CommandResult::ok(data, content.text()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use figihover_core::{FixtureHttpClient, HttpResponse, LookupConfig, OpenFigiClient};

    #[tokio::test]
    async fn reads_document_and_reports_range() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("notes.txt");
        std::fs::write(&file, "sell 7108891 today\n").expect("write document");

        let fixture = Arc::new(FixtureHttpClient::responding(HttpResponse::new(500, "")));
        let provider = HoverProvider::new(OpenFigiClient::with_http_client(
            fixture.clone(),
            LookupConfig::default(),
        ));
        let args = HoverArgs {
            file,
            line: 0,
            character: 7,
        };

        let result = run(&args, &provider).await.expect("hover");
        assert_eq!(result.text, "Not a valid SEDOL");
        assert_eq!(result.data["kind"], "plaintext");
        assert_eq!(result.data["range"]["start"], 5);
        assert_eq!(result.data["range"]["end"], 12);
        assert!(fixture.recorded_requests().is_empty());
    }
}
