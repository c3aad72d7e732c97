//! # Identifier Validation
//!
//! Recognises security identifiers in free text.
//!
//! | Kind | Length | Shape |
//! |------|--------|-------|
//! | ISIN | 12 | `[A-Z]{2}[A-Z0-9]{9}[0-9]` |
//! | SEDOL | 7 | `[0-9BCDFGHJKLMNPQRSTVWXYZ]{7}` with a valid check digit |
//! | CUSIP | 9 | `[0-9BCDFGHJKLMNPQRSTVWXYZ]{9}` |
//!
//! When a token satisfies more than one shape, [`classify`] takes the first
//! of ISIN, SEDOL, CUSIP.

mod classify;
mod kind;
mod sedol;
mod shape;

pub use classify::{classify, ClassifiedIdentifier, Rejection};
pub use kind::IdentifierKind;
pub use sedol::{is_valid_sedol, sedol_check_digit, SEDOL_WEIGHTS};
pub use shape::{is_cusip_shape, is_isin_shape, is_sedol_shape};
