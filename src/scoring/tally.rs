use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Per-session round counts, the series the UI graphs are drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub rounds: usize,
    pub caught: usize,
    pub escaped: usize,
    pub draws: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        self.rounds += 1;
        match outcome {
            Outcome::Caught => self.caught += 1,
            Outcome::Escaped => self.escaped += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
    /// Share of rounds Pyotr guessed correctly.
    pub fn accuracy(&self) -> Option<f32> {
        match self.rounds {
            0 => None,
            n => Some(self.caught as f32 / n as f32),
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} rounds, {} caught, {} escaped, {} draws",
            self.rounds, self.caught, self.escaped, self.draws
        )
    }
}
