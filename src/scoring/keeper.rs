use super::*;
use crate::Score;
use crate::moves::Card;
use crate::moves::Variant;

/// Cumulative session score. Reset only by a new game setup.
#[derive(Debug, Clone)]
pub struct ScoreKeeper {
    variant: Variant,
    total: Score,
    tally: Tally,
}

impl ScoreKeeper {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            total: 0,
            tally: Tally::default(),
        }
    }
    /// Scores one round and returns the signed change.
    pub fn resolve(&mut self, actual: Card, predicted: Card) -> (Outcome, Score) {
        let outcome = Outcome::resolve(actual, predicted, self.variant);
        self.total += outcome.delta();
        self.tally.record(outcome);
        (outcome, outcome.delta())
    }
    pub fn total(&self) -> Score {
        self.total
    }
    pub fn tally(&self) -> &Tally {
        &self.tally
    }
}
