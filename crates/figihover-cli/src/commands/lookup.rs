use figihover_core::{ClassifiedIdentifier, HoverProvider, IdentifierKind};

use crate::cli::LookupArgs;
use crate::error::CliError;

use super::{hover_json, CommandResult};

pub async fn run(args: &LookupArgs, provider: &HoverProvider) -> Result<CommandResult, CliError> {
    let content = match args.kind {
        Some(kind) => {
            let identifier =
                ClassifiedIdentifier::new(IdentifierKind::from(kind), args.token.clone())?;
            provider.hover_identifier(&identifier).await
        }
        None => provider.hover_token(&args.token).await,
    };

    let mut data = hover_json(&content);
    data["token"] = serde_json::Value::from(args.token.as_str());

    let empty = content.is_empty();
    Ok(CommandResult::ok(data, content.text()).with_failure(empty))
}
