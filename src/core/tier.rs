//! Difficulty tiers

use super::GameError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Difficulty level selecting which word families a round draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Level1,
    Level2,
    Level3,
}

impl Tier {
    /// All tiers, easiest first
    pub const ALL: [Self; 3] = [Self::Level1, Self::Level2, Self::Level3];

    /// Catalog key (`level1`, `level2`, `level3`)
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Level1 => "level1",
            Self::Level2 => "level2",
            Self::Level3 => "level3",
        }
    }

    /// Short description shown on the tier menu
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Level1 => "Basic Suffixes",
            Self::Level2 => "Tricky Transformations",
            Self::Level3 => "Negatives & Prefixes",
        }
    }

    /// 1-based level number
    #[must_use]
    pub const fn number(self) -> usize {
        match self {
            Self::Level1 => 1,
            Self::Level2 => 2,
            Self::Level3 => 3,
        }
    }

    /// Whether this tier checks for missing negative prefixes
    #[must_use]
    pub const fn checks_prefixes(self) -> bool {
        matches!(self, Self::Level3)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Tier {
    type Err = GameError;

    /// Accepts the catalog key or the bare level number (`level2` or `2`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "level1" | "1" => Ok(Self::Level1),
            "level2" | "2" => Ok(Self::Level2),
            "level3" | "3" => Ok(Self::Level3),
            _ => Err(GameError::UnknownTier(s.trim().to_string())),
        }
    }
}
