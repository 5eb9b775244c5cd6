//! A single participant.

use crate::trust::TrustTable;
use factcheck_types::{ActorId, Category, Credits, TrustScore};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    /// Signed credit balance. Nothing at this level keeps it above zero.
    pub balance: Credits,
    pub trust: TrustTable,
}

impl Actor {
    pub fn new(id: ActorId, balance: Credits, default_trust: TrustScore) -> Self {
        Self {
            id,
            balance,
            trust: TrustTable::new(default_trust),
        }
    }

    /// Voting weight in a category: `balance × trust`.
    ///
    /// Materializes the category's trust score. The result carries the sign
    /// of the balance, so an insolvent actor yields a non-positive weight.
    pub fn confidence(&mut self, category: Category) -> f64 {
        self.balance * self.trust.score(category).value()
    }
}
