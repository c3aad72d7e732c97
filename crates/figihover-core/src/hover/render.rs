use serde::{Deserialize, Serialize};

use crate::lookup::{LookupError, LookupErrorKind};
use crate::mapping::SecurityProfile;

pub const INVALID_SEDOL_MESSAGE: &str = "Not a valid SEDOL";

pub const RATE_LIMITED_MESSAGE: &str = "You made too many requests, wait a minute and try again \
or register for free on OpenFIGI (see README for details).";

pub const LOOKUP_FAILED_MESSAGE: &str =
    "Error: could not retrieve the name corresponding to that ISIN Code.";

/// What the host should display for a hover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "contents", rename_all = "lowercase")]
pub enum HoverContent {
    /// Nothing to show.
    Empty,
    #[serde(rename = "plaintext")]
    Plain(String),
    Markdown(String),
}

impl HoverContent {
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Display text, empty for [`HoverContent::Empty`].
    pub fn text(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Plain(text) | Self::Markdown(text) => text,
        }
    }

    pub const fn kind_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Plain(_) => "plaintext",
            Self::Markdown(_) => "markdown",
        }
    }
}

/// Renders a profile as the hover's markdown block.
pub fn render_profile(profile: &SecurityProfile) -> HoverContent {
    let lines = [
        format!("**{}**", profile.name),
        format!(
            "_Security Type: {} / {}_",
            profile.security_type, profile.security_type2
        ),
        format!("Market Sector: {}", profile.market_sector),
        format!(
            "Exchange Code: {} (Number of matches: {})",
            profile.exch_code, profile.match_count
        ),
        format!("Ticker: {}", profile.ticker),
        format!("Description: {}", profile.description),
    ];

    let mut block = String::new();
    for line in lines {
        block.push_str(&line);
        block.push_str("\n\n ");
    }
    HoverContent::Markdown(block)
}

/// Maps a lookup failure to its advisory message.
pub fn render_lookup_error(error: &LookupError) -> HoverContent {
    match error.kind() {
        LookupErrorKind::RateLimited => HoverContent::Plain(String::from(RATE_LIMITED_MESSAGE)),
        LookupErrorKind::Unavailable | LookupErrorKind::Malformed | LookupErrorKind::NotFound => {
            HoverContent::Plain(String::from(LOOKUP_FAILED_MESSAGE))
        }
    }
}
