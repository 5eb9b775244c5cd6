//! The actor store — owns every participant and moves credits between them.

use crate::actor::Actor;
use crate::error::LedgerError;
use factcheck_types::{ActorId, Category, Credits, TrustScore};
use std::collections::HashMap;

/// All participants known to the system.
///
/// Actors are created once and never removed. Balances change only through
/// [`ActorStore::transfer`]; trust changes through the actor's
/// [`crate::TrustTable`].
pub struct ActorStore {
    actors: HashMap<ActorId, Actor>,
    default_trust: TrustScore,
}

/// Summary statistics for the store.
#[derive(Clone, Debug, PartialEq)]
pub struct LedgerSummary {
    pub actors: usize,
    pub total_balance: Credits,
    pub negative_balances: usize,
}

impl ActorStore {
    pub fn new(default_trust: TrustScore) -> Self {
        Self {
            actors: HashMap::new(),
            default_trust,
        }
    }

    /// Add a new actor. An existing id is left untouched.
    pub fn create(&mut self, id: ActorId, balance: Credits) -> Result<&Actor, LedgerError> {
        if !balance.is_finite() {
            return Err(LedgerError::InvalidAmount(balance));
        }
        if self.actors.contains_key(&id) {
            return Err(LedgerError::ActorExists(id));
        }
        let actor = Actor::new(id.clone(), balance, self.default_trust);
        Ok(self.actors.entry(id).or_insert(actor))
    }

    pub fn contains(&self, id: &ActorId) -> bool {
        self.actors.contains_key(id)
    }

    pub fn get(&self, id: &ActorId) -> Option<&Actor> {
        self.actors.get(id)
    }

    pub fn get_mut(&mut self, id: &ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(id)
    }

    pub fn balance(&self, id: &ActorId) -> Option<Credits> {
        self.actors.get(id).map(|a| a.balance)
    }

    /// Trust without materializing the category.
    pub fn trust(&self, id: &ActorId, category: Category) -> Option<TrustScore> {
        self.actors.get(id).map(|a| a.trust.peek(category))
    }

    /// Move `amount` from one actor to another.
    ///
    /// No overdraft check: the payer's balance may go negative. A transfer
    /// to oneself is a no-op on the balance. Both ids are resolved before
    /// anything is mutated.
    pub fn transfer(
        &mut self,
        from: &ActorId,
        to: &ActorId,
        amount: Credits,
    ) -> Result<(), LedgerError> {
        if !amount.is_finite() {
            return Err(LedgerError::InvalidAmount(amount));
        }
        if !self.actors.contains_key(from) {
            return Err(LedgerError::UnknownActor(from.clone()));
        }
        if !self.actors.contains_key(to) {
            return Err(LedgerError::UnknownActor(to.clone()));
        }
        if let Some(payer) = self.actors.get_mut(from) {
            payer.balance -= amount;
        }
        if let Some(payee) = self.actors.get_mut(to) {
            payee.balance += amount;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.actors.values()
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            actors: self.actors.len(),
            total_balance: self.actors.values().map(|a| a.balance).sum(),
            negative_balances: self.actors.values().filter(|a| a.balance < 0.0).count(),
        }
    }
}

impl Default for ActorStore {
    fn default() -> Self {
        Self::new(TrustScore::DEFAULT)
    }
}
