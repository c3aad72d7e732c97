use std::fmt::{Display, Formatter};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::ValidationError;

use super::sedol::is_valid_sedol;
use super::shape::matches_shape;
use super::IdentifierKind;

/// A token accepted as a security identifier.
///
/// Only obtainable through [`classify`] or [`ClassifiedIdentifier::new`], so a
/// `Sedol` value always carries a correct check digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ClassifiedIdentifier {
    kind: IdentifierKind,
    value: String,
}

impl ClassifiedIdentifier {
    /// Validates `value` as an identifier of a caller-chosen `kind`.
    pub fn new(kind: IdentifierKind, value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::EmptyIdentifier);
        }
        if !matches_shape(kind, &value) {
            return Err(ValidationError::ShapeMismatch {
                kind: kind.display_name(),
                value,
            });
        }
        if kind == IdentifierKind::Sedol && !is_valid_sedol(&value) {
            return Err(ValidationError::SedolChecksum { value });
        }
        Ok(Self { kind, value })
    }

    pub const fn kind(&self) -> IdentifierKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for ClassifiedIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.value)
    }
}

/// Why a candidate token was not classified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The token fits none of the identifier shapes.
    #[error("token does not look like an ISIN, SEDOL or CUSIP")]
    ShapeMismatch,
    /// The token is SEDOL shaped but its check digit is wrong.
    #[error("'{value}' is not a valid SEDOL")]
    InvalidSedol { value: String },
}

/// Classifies a candidate token, trying ISIN, then SEDOL, then CUSIP.
///
/// A SEDOL-shaped token that fails its checksum is rejected outright; it is
/// not retried as a CUSIP.
pub fn classify(token: &str) -> Result<ClassifiedIdentifier, Rejection> {
    let Some(kind) = IdentifierKind::PRECEDENCE
        .into_iter()
        .find(|kind| matches_shape(*kind, token))
    else {
        return Err(Rejection::ShapeMismatch);
    };

    if kind == IdentifierKind::Sedol && !is_valid_sedol(token) {
        debug!(token, "sedol check digit mismatch");
        return Err(Rejection::InvalidSedol {
            value: token.to_owned(),
        });
    }

    debug!(token, kind = kind.as_str(), "classified identifier");
    Ok(ClassifiedIdentifier {
        kind,
        value: token.to_owned(),
    })
}
