//! Per-category trust table with an explicit default-on-first-access policy.

use factcheck_types::{Category, TrustScore};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An actor's trust scores, one per category.
///
/// A category that has never been touched holds `default`. The first
/// mutable access ([`TrustTable::score`] or [`TrustTable::apply_delta`])
/// writes that default into the table; [`TrustTable::peek`] reports it
/// without writing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrustTable {
    scores: HashMap<Category, TrustScore>,
    default: TrustScore,
}

impl TrustTable {
    pub fn new(default: TrustScore) -> Self {
        Self {
            scores: HashMap::new(),
            default,
        }
    }

    /// Read a score, materializing the default if the category is new.
    pub fn score(&mut self, category: Category) -> TrustScore {
        *self.scores.entry(category).or_insert(self.default)
    }

    /// Read a score without materializing anything.
    pub fn peek(&self, category: Category) -> TrustScore {
        self.scores.get(&category).copied().unwrap_or(self.default)
    }

    /// Add `delta` to a category's score, clamped to `[0, 100]`.
    /// Returns the new score.
    pub fn apply_delta(&mut self, category: Category, delta: f64) -> TrustScore {
        let entry = self.scores.entry(category).or_insert(self.default);
        *entry = entry.adjusted(delta);
        *entry
    }

    /// Whether a category has been touched.
    pub fn is_materialized(&self, category: Category) -> bool {
        self.scores.contains_key(&category)
    }

    /// Materialized scores.
    pub fn iter(&self) -> impl Iterator<Item = (Category, TrustScore)> + '_ {
        self.scores.iter().map(|(c, s)| (*c, *s))
    }

    pub fn default_score(&self) -> TrustScore {
        self.default
    }
}

impl Default for TrustTable {
    fn default() -> Self {
        Self::new(TrustScore::DEFAULT)
    }
}
