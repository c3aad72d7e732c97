use figihover_core::{classify, Rejection};
use serde::Serialize;

use crate::cli::ClassifyArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct ClassifiedToken<'a> {
    token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejection: Option<&'static str>,
}

pub fn run(args: &ClassifyArgs) -> Result<CommandResult, CliError> {
    let mut rows = Vec::with_capacity(args.tokens.len());
    let mut lines = Vec::with_capacity(args.tokens.len());
    let mut failed = false;

    for token in &args.tokens {
        let (kind, rejection, label) = match classify(token) {
            Ok(identifier) => {
                let kind = identifier.kind();
                (Some(kind.as_str()), None, kind.display_name())
            }
            Err(Rejection::InvalidSedol { .. }) => {
                failed = true;
                (None, Some("invalid_sedol"), "invalid SEDOL")
            }
            Err(Rejection::ShapeMismatch) => {
                failed = true;
                (None, Some("shape_mismatch"), "-")
            }
        };

        lines.push(format!("{token}\t{label}"));
        rows.push(ClassifiedToken {
            token,
            kind,
            rejection,
        });
    }

    let data = serde_json::to_value(rows)?;
    Ok(CommandResult::ok(data, lines.join("\n")).with_failure(failed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reports_each_token() {
        let args = ClassifyArgs {
            tokens: vec![
                String::from("US0378331005"),
                String::from("7108891"),
                String::from("hello"),
            ],
        };

        let result = run(&args).expect("classify");
        assert!(result.failed);
        assert_eq!(
            result.data,
            json!([
                { "token": "US0378331005", "kind": "isin" },
                { "token": "7108891", "rejection": "invalid_sedol" },
                { "token": "hello", "rejection": "shape_mismatch" },
            ])
        );
        assert_eq!(result.text, "US0378331005\tISIN\n7108891\tinvalid SEDOL\nhello\t-");
    }
}
