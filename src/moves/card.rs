use super::*;
use crate::error::Error;
use serde::Deserialize;
use serde::Serialize;

/// One of the cards laid in front of the player.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Card {
    A,
    B,
    C,
}

impl Card {
    pub const fn all() -> [Self; 3] {
        [Self::A, Self::B, Self::C]
    }
    pub const fn index(&self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
        }
    }
    /// indexToMove
    pub fn onehot(&self, variant: Variant) -> OneHot {
        OneHot::from((*self, variant))
    }
}

impl TryFrom<(usize, Variant)> for Card {
    type Error = Error;
    fn try_from((index, variant): (usize, Variant)) -> Result<Self, Self::Error> {
        variant
            .cards()
            .nth(index)
            .ok_or(Error::InvalidIndex {
                index,
                variant: variant.size(),
            })
    }
}

/// moveToIndex
impl TryFrom<(&OneHot, Variant)> for Card {
    type Error = Error;
    fn try_from((onehot, variant): (&OneHot, Variant)) -> Result<Self, Self::Error> {
        onehot
            .index(variant)
            .and_then(|i| Self::try_from((i, variant)))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
        }
    }
}

impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "A" | "a" | "aCard" => Ok(Self::A),
            "B" | "b" | "bCard" => Ok(Self::B),
            "C" | "c" | "cCard" => Ok(Self::C),
            _ => Err(format!("unknown card: {}", s)),
        }
    }
}
