use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Security identifier families recognised on hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    Isin,
    Sedol,
    Cusip,
}

impl IdentifierKind {
    /// Classification order when a token fits more than one shape.
    pub const PRECEDENCE: [Self; 3] = [Self::Isin, Self::Sedol, Self::Cusip];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Isin => "isin",
            Self::Sedol => "sedol",
            Self::Cusip => "cusip",
        }
    }

    /// OpenFIGI `idType` value for this identifier family.
    pub const fn figi_id_type(self) -> &'static str {
        match self {
            Self::Isin => "ID_ISIN",
            Self::Sedol => "ID_SEDOL",
            Self::Cusip => "ID_CUSIP",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Isin => "ISIN",
            Self::Sedol => "SEDOL",
            Self::Cusip => "CUSIP",
        }
    }

    pub const fn expected_len(self) -> usize {
        match self {
            Self::Isin => 12,
            Self::Sedol => 7,
            Self::Cusip => 9,
        }
    }
}

impl Display for IdentifierKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for IdentifierKind {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "isin" | "id_isin" => Ok(Self::Isin),
            "sedol" | "id_sedol" => Ok(Self::Sedol),
            "cusip" | "id_cusip" => Ok(Self::Cusip),
            _ => Err(ValidationError::InvalidKind {
                value: value.to_owned(),
            }),
        }
    }
}
