//! # Hover
//!
//! Host-facing side of the crate: locate the word under the cursor, classify
//! it, look it up and render the result.
//!
//! | Outcome | Content |
//! |---------|---------|
//! | no word / no identifier shape | [`HoverContent::Empty`] |
//! | SEDOL with a bad check digit | [`INVALID_SEDOL_MESSAGE`] |
//! | HTTP 429 | [`RATE_LIMITED_MESSAGE`] |
//! | any other lookup failure | [`LOOKUP_FAILED_MESSAGE`] |
//! | match | markdown block from [`render_profile`] |

mod provider;
mod render;
mod word;

pub use provider::HoverProvider;
pub use render::{
    render_lookup_error, render_profile, HoverContent, INVALID_SEDOL_MESSAGE,
    LOOKUP_FAILED_MESSAGE, RATE_LIMITED_MESSAGE,
};
pub use word::{word_range_at, Position, WordRange};
