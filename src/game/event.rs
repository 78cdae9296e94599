use crate::Probability;
use crate::Score;
use crate::moves::Card;
use crate::moves::Variant;
use serde::Deserialize;
use serde::Serialize;

/// Notifications sent to the UI. Fire-and-forget; the core never waits on them.
///
/// A round emits, in order: `Thinking`, `Reveal`, `Round`, `Verdict`,
/// `Score`, `Confidence`, and finally `Ready` once the next guess is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// A fresh game began. Score and graphs start over.
    Setup(Variant),
    /// Training started; input is locked until `Ready`.
    Thinking,
    /// Pyotr's committed guess, for the face-down card.
    Reveal(Card),
    /// What the player picked against what Pyotr guessed.
    Round { actual: Card, predicted: Card },
    /// Whether Pyotr guessed right.
    Verdict(bool),
    Score { delta: Score, total: Score },
    /// Probabilities the model gave the guessed card and the actual card.
    Confidence {
        predicted: Probability,
        actual: Probability,
        correct: bool,
    },
    /// Input is accepted again.
    Ready,
}
