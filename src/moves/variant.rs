use crate::error::Error;
use serde::Deserialize;
use serde::Serialize;

/// Game mode: how many cards the player chooses between each round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Variant {
    /// Two cards. Any miss is a player win.
    Binary,
    /// Three cards with a cyclic beats relation.
    Cyclic,
}

impl Variant {
    /// Number of distinct moves, K.
    pub const fn size(&self) -> usize {
        match self {
            Self::Binary => 2,
            Self::Cyclic => 3,
        }
    }
    pub fn cards(&self) -> impl Iterator<Item = crate::moves::Card> + '_ {
        crate::moves::Card::all()
            .into_iter()
            .take(self.size())
    }
}

impl TryFrom<usize> for Variant {
    type Error = Error;
    fn try_from(k: usize) -> Result<Self, Self::Error> {
        match k {
            2 => Ok(Self::Binary),
            3 => Ok(Self::Cyclic),
            k => Err(Error::InvalidVariant(k)),
        }
    }
}

impl From<Variant> for usize {
    fn from(variant: Variant) -> Self {
        variant.size()
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.size())
    }
}
