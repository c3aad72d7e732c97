//! NDJSON hover loop.
//!
//! Requests, one per line:
//!
//! ```text
//! {"id": 1, "document": "...", "line": 0, "character": 4}
//! {"id": 2, "token": "US0378331005"}
//! ```
//!
//! Each is answered in arrival order with
//! `{"id": .., "kind": "empty|plaintext|markdown", "contents": ..}`, or
//! `{"id": .., "error": {"code": "request.invalid", "message": ..}}` for a
//! line that cannot be parsed.

use std::io::Write;

use figihover_core::{HoverProvider, Position};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

use crate::error::CliError;
use crate::output::ndjson::NdjsonWriter;

use super::hover_json;

#[derive(Debug, Deserialize)]
struct HoverRequest {
    #[serde(default)]
    id: Value,
    #[serde(flatten)]
    target: HoverTarget,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HoverTarget {
    Document {
        document: String,
        line: usize,
        character: usize,
    },
    Token {
        token: String,
    },
}

pub async fn run(provider: &HoverProvider) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut writer = NdjsonWriter::new(stdout.lock());
    let handled = serve_stream(provider, BufReader::new(tokio::io::stdin()), &mut writer).await?;
    debug!(handled, "serve loop finished");
    Ok(())
}

/// Answers every request line from `reader`; returns how many were handled.
pub async fn serve_stream<R, W>(
    provider: &HoverProvider,
    reader: R,
    writer: &mut NdjsonWriter<W>,
) -> Result<usize, CliError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = reader.lines();
    let mut handled = 0;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        handled += 1;

        let request = match serde_json::from_str::<HoverRequest>(&line) {
            Ok(request) => request,
            Err(error) => {
                warn!(%error, "rejecting malformed hover request");
                writer.emit(&json!({
                    "id": Value::Null,
                    "error": { "code": "request.invalid", "message": error.to_string() },
                }))?;
                continue;
            }
        };

        let content = match &request.target {
            HoverTarget::Document {
                document,
                line,
                character,
            } => {
                provider
                    .provide_hover(document, Position::new(*line, *character))
                    .await
            }
            HoverTarget::Token { token } => provider.hover_token(token).await,
        };

        let mut response = hover_json(&content);
        response["id"] = request.id;
        writer.emit(&response)?;
    }

    Ok(handled)
}
