//! Poll categories. Each category carries its own per-actor trust score.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Topic classification of a fact-check poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Politics,
    Economics,
    Science,
    Technology,
    Health,
    Sports,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Politics,
        Category::Economics,
        Category::Science,
        Category::Technology,
        Category::Health,
        Category::Sports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Politics => "Politics",
            Self::Economics => "Economics",
            Self::Science => "Science",
            Self::Technology => "Technology",
            Self::Health => "Health",
            Self::Sports => "Sports",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse of a category name.
impl FromStr for Category {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TypesError::UnknownCategory(s.to_string()))
    }
}
