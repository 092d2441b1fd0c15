//! Country identifiers and free-text name resolution.

use serde::{Serialize, Serializer};

/// A country served by the route network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Country {
    Australia,
    Japan,
    Singapore,
    SriLanka,
    UnitedKingdom,
    UnitedStates,
}

impl Country {
    /// Every country, in display order.
    pub const ALL: [Country; 6] = [
        Self::Australia,
        Self::Japan,
        Self::Singapore,
        Self::SriLanka,
        Self::UnitedKingdom,
        Self::UnitedStates,
    ];

    /// Short code used in serialized output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Australia => "Australia",
            Self::Japan => "Japan",
            Self::Singapore => "Singapore",
            Self::SriLanka => "SL",
            Self::UnitedKingdom => "UK",
            Self::UnitedStates => "USA",
        }
    }

    /// Human-readable display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Australia => "Australia",
            Self::Japan => "Japan",
            Self::Singapore => "Singapore",
            Self::SriLanka => "Sri Lanka",
            Self::UnitedKingdom => "UK",
            Self::UnitedStates => "USA",
        }
    }

    /// Resolve free-text input to a country.
    ///
    /// Accepts the short code, the display name, and common long forms,
    /// case-insensitively and ignoring surrounding whitespace.
    pub fn from_name(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "australia" => Some(Self::Australia),
            "japan" => Some(Self::Japan),
            "singapore" => Some(Self::Singapore),
            "sl" | "sri lanka" | "srilanka" => Some(Self::SriLanka),
            "uk" | "united kingdom" => Some(Self::UnitedKingdom),
            "usa" | "us" | "united states" => Some(Self::UnitedStates),
            _ => None,
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Country {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}
