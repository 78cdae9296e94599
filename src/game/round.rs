use crate::Probability;
use crate::Score;
use crate::moves::Card;
use crate::scoring::Outcome;

/// The synchronous half of a round: everything known before training.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub actual: Card,
    pub predicted: Card,
    pub outcome: Outcome,
    pub delta: Score,
    pub total: Score,
    /// Probability the model gave its own guess.
    pub confidence: Probability,
    /// Probability the model gave the card actually played.
    pub likelihood: Probability,
}

impl Resolution {
    pub fn correct(&self) -> bool {
        self.actual == self.predicted
    }
}

/// A completed round, returned to whoever submitted the move.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub resolution: Resolution,
    /// Training loss after the final epoch.
    pub loss: Probability,
}

impl From<(Resolution, Probability)> for Round {
    fn from((resolution, loss): (Resolution, Probability)) -> Self {
        Self { resolution, loss }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "played {} guessed {} {} ({:+}, total {}) loss {:.5}",
            self.resolution.actual,
            self.resolution.predicted,
            self.resolution.outcome,
            self.resolution.delta,
            self.resolution.total,
            self.loss
        )
    }
}
