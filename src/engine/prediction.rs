use crate::Probability;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

/// Distribution over the player's next card, produced fresh every round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction(Vec<Probability>);

impl Prediction {
    pub fn values(&self) -> &[Probability] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn probability(&self, index: usize) -> Probability {
        self.0.get(index).copied().unwrap_or_default()
    }

    /// First index holding the largest probability.
    pub fn argmax(&self) -> usize {
        self.0
            .iter()
            .enumerate()
            .fold((0, Probability::NEG_INFINITY), |(best, max), (i, &p)| {
                if p > max { (i, p) } else { (best, max) }
            })
            .0
    }

    /// Difference between the two largest probabilities.
    pub fn gap(&self) -> Probability {
        let mut sorted = self.0.clone();
        sorted.sort_by(|a, b| b.total_cmp(a));
        match sorted.as_slice() {
            [first, second, ..] => (first - second).abs(),
            _ => Probability::INFINITY,
        }
    }

    /// The argmax when the top two probabilities are at least `threshold`
    /// apart, otherwise a uniformly random index.
    pub fn choose<R>(&self, threshold: Probability, rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
    {
        if self.gap() < threshold {
            rng.random_range(0..self.len())
        } else {
            self.argmax()
        }
    }
}

impl From<Vec<Probability>> for Prediction {
    fn from(values: Vec<Probability>) -> Self {
        Self(values)
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let values = self
            .0
            .iter()
            .map(|p| format!("{:.3}", p))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{}]", values)
    }
}
