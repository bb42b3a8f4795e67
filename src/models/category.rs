//! Word categories offered on the menu

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three word groupings a round can be played with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Animals,
    Movies,
    Professions,
}

impl Default for Category {
    fn default() -> Self {
        Self::Animals
    }
}

impl Category {
    /// All categories in menu order
    pub fn all() -> [Self; 3] {
        [Self::Animals, Self::Movies, Self::Professions]
    }

    /// Stable key used in snapshots and name-based lookups
    pub fn key(&self) -> &'static str {
        match self {
            Self::Animals => "Animales",
            Self::Movies => "Peliculas",
            Self::Professions => "Profesiones",
        }
    }

    /// Human-readable name shown on screen
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Animals => "Animales",
            Self::Movies => "Películas",
            Self::Professions => "Profesiones",
        }
    }

    /// Look a category up by its stable key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.key() == key)
    }

    /// Next category, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::Animals => Self::Movies,
            Self::Movies => Self::Professions,
            Self::Professions => Self::Animals,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
