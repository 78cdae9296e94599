use crate::Score;
use crate::moves::Card;
use crate::moves::Variant;
use serde::Deserialize;
use serde::Serialize;

/// Result of one round from the player's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Pyotr guessed the card.
    Caught,
    /// The player's card beats the guess.
    Escaped,
    /// Neither side scores.
    Draw,
}

impl Outcome {
    /// In the cyclic game card `a` beats guess `p` iff `(a + 1) mod 3 == p`.
    /// In the binary game every miss is an escape.
    pub fn resolve(actual: Card, predicted: Card, variant: Variant) -> Self {
        match variant {
            _ if actual == predicted => Self::Caught,
            Variant::Binary => Self::Escaped,
            Variant::Cyclic if (actual.index() + 1) % 3 == predicted.index() => Self::Escaped,
            Variant::Cyclic => Self::Draw,
        }
    }
    pub fn delta(&self) -> Score {
        match self {
            Self::Caught => -1,
            Self::Escaped => 1,
            Self::Draw => 0,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Caught => write!(f, "caught"),
            Self::Escaped => write!(f, "escaped"),
            Self::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_rules() {
        let v = Variant::Cyclic;
        assert_eq!(Outcome::resolve(Card::A, Card::A, v).delta(), -1);
        assert_eq!(Outcome::resolve(Card::A, Card::B, v).delta(), 1);
        assert_eq!(Outcome::resolve(Card::A, Card::C, v).delta(), 0);
        assert_eq!(Outcome::resolve(Card::B, Card::C, v).delta(), 1);
        assert_eq!(Outcome::resolve(Card::C, Card::A, v).delta(), 1);
        assert_eq!(Outcome::resolve(Card::C, Card::B, v).delta(), 0);
    }

    #[test]
    fn binary_rules() {
        let v = Variant::Binary;
        assert_eq!(Outcome::resolve(Card::A, Card::A, v).delta(), -1);
        assert_eq!(Outcome::resolve(Card::B, Card::B, v).delta(), -1);
        assert_eq!(Outcome::resolve(Card::A, Card::B, v).delta(), 1);
        assert_eq!(Outcome::resolve(Card::B, Card::A, v).delta(), 1);
    }
}
