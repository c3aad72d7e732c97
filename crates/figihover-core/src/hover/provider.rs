use tracing::debug;

use crate::identifier::{classify, ClassifiedIdentifier, Rejection};
use crate::lookup::OpenFigiClient;

use super::render::{render_lookup_error, render_profile, INVALID_SEDOL_MESSAGE};
use super::word::{word_range_at, Position};
use super::HoverContent;

/// Turns a hover request into displayable content.
///
/// Each call performs at most one classification and at most one lookup and
/// always yields content; failures become advisory text.
#[derive(Clone)]
pub struct HoverProvider {
    client: OpenFigiClient,
}

impl HoverProvider {
    pub fn new(client: OpenFigiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &OpenFigiClient {
        &self.client
    }

    /// Hover for the word at `position` in `document`.
    pub async fn provide_hover(&self, document: &str, position: Position) -> HoverContent {
        match word_range_at(document, position) {
            Some(word) => self.hover_token(&word.text).await,
            None => {
                debug!(line = position.line, character = position.character, "no word at position");
                HoverContent::Empty
            }
        }
    }

    /// Hover for a token already extracted by the host.
    pub async fn hover_token(&self, token: &str) -> HoverContent {
        match classify(token) {
            Ok(identifier) => self.hover_identifier(&identifier).await,
            Err(Rejection::InvalidSedol { .. }) => {
                HoverContent::Plain(String::from(INVALID_SEDOL_MESSAGE))
            }
            Err(Rejection::ShapeMismatch) => HoverContent::Empty,
        }
    }

    pub async fn hover_identifier(&self, identifier: &ClassifiedIdentifier) -> HoverContent {
        match self.client.lookup(identifier).await {
            Ok(profile) => render_profile(&profile),
            Err(error) => render_lookup_error(&error),
        }
    }
}
