use super::*;
use crate::Probability;
use crate::error::Error;
use serde::Deserialize;
use serde::Serialize;

/// Length-K vector with a single 1 marking the chosen card.
/// The all-zero vector is only used to pre-fill memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneHot(Vec<Probability>);

impl OneHot {
    pub fn zero(k: usize) -> Self {
        Self(vec![0.; k])
    }
    pub fn values(&self) -> &[Probability] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Position of the single set bit, failing on anything that is not a
    /// well-formed one-hot vector for this variant.
    pub fn index(&self, variant: Variant) -> Result<usize, Error> {
        let invalid = || Error::InvalidMove {
            values: self.0.clone(),
            expected: variant.size(),
        };
        if self.len() != variant.size() {
            return Err(invalid());
        }
        if self.0.iter().any(|&x| x != 0. && x != 1.) {
            return Err(invalid());
        }
        let mut ones = self
            .0
            .iter()
            .enumerate()
            .filter(|&(_, &x)| x == 1.)
            .map(|(i, _)| i);
        match (ones.next(), ones.next()) {
            (Some(i), None) => Ok(i),
            _ => Err(invalid()),
        }
    }
}

impl From<(Card, Variant)> for OneHot {
    fn from((card, variant): (Card, Variant)) -> Self {
        Self(
            (0..variant.size())
                .map(|i| if i == card.index() { 1. } else { 0. })
                .collect(),
        )
    }
}

impl From<Vec<Probability>> for OneHot {
    fn from(values: Vec<Probability>) -> Self {
        Self(values)
    }
}

impl From<OneHot> for Vec<Probability> {
    fn from(onehot: OneHot) -> Self {
        onehot.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_vectors_are_rejected() {
        let variant = Variant::Cyclic;
        for bad in [
            vec![0., 0., 0.],
            vec![1., 1., 0.],
            vec![1., 0.],
            vec![1., 0., 0., 0.],
            vec![0.5, 0.5, 0.],
            vec![],
        ] {
            assert!(matches!(
                OneHot::from(bad).index(variant),
                Err(Error::InvalidMove { expected: 3, .. })
            ));
        }
    }

    #[test]
    fn well_formed_vectors_yield_index() {
        assert_eq!(OneHot::from(vec![0., 1.]).index(Variant::Binary).unwrap(), 1);
        assert_eq!(OneHot::from(vec![0., 0., 1.]).index(Variant::Cyclic).unwrap(), 2);
    }

    #[test]
    fn zero_has_requested_length() {
        assert_eq!(OneHot::zero(3).values(), &[0., 0., 0.]);
    }
}
