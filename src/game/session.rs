use super::*;
use crate::*;
use crate::encoding::Sequence;
use crate::engine::Prediction;
use crate::engine::PredictionEngine;
use crate::memory::MemoryStore;
use crate::memory::Side;
use crate::memory::Snapshot;
use crate::moves::Card;
use crate::moves::Variant;
use crate::scoring::ScoreKeeper;
use crate::scoring::Tally;
use crate::training::OnlineTrainer;

/// Everything one game owns: memory, score, model, optimizer, and the
/// guess prepared for the next round.
#[derive(Debug)]
pub struct Session {
    variant: Variant,
    memory: MemoryStore,
    score: ScoreKeeper,
    engine: PredictionEngine,
    trainer: OnlineTrainer,
    prediction: Prediction,
}

impl Session {
    pub fn new(config: &Config, variant: Variant) -> Result<Self> {
        let memory = MemoryStore::new(config.depth, variant);
        let engine = PredictionEngine::new(config, variant)?;
        let trainer = OnlineTrainer::new(config, &engine)?;
        let prediction = engine.predict(&Sequence::from(&memory.snapshot()))?;
        log::debug!("initial prediction {}", prediction);
        Ok(Self {
            variant,
            memory,
            score: ScoreKeeper::new(variant),
            engine,
            trainer,
            prediction,
        })
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }
    pub fn prediction(&self) -> &Prediction {
        &self.prediction
    }
    pub fn snapshot(&self) -> Snapshot {
        self.memory.snapshot()
    }
    pub fn total(&self) -> Score {
        self.score.total()
    }
    pub fn tally(&self) -> &Tally {
        self.score.tally()
    }
}

impl Session {
    /// Commits to a guess from the stored prediction and scores it against
    /// the card actually played.
    pub fn resolve(&mut self, actual: Card) -> Result<Resolution> {
        let predicted = self.engine.choose(&self.prediction)?;
        let (outcome, delta) = self.score.resolve(actual, predicted);
        Ok(Resolution {
            actual,
            predicted,
            outcome,
            delta,
            total: self.score.total(),
            confidence: self.prediction.probability(predicted.index()),
            likelihood: self.prediction.probability(actual.index()),
        })
    }

    /// encode → train → update memory → re-encode → predict → commit.
    ///
    /// Memory and prediction are only replaced once every stage succeeded,
    /// so a failed or timed-out step leaves the previous guess in place.
    pub async fn learn(&mut self, resolution: &Resolution) -> Result<Probability> {
        let actual = resolution.actual.onehot(self.variant);
        let guessed = resolution.predicted.onehot(self.variant);
        let input = Sequence::from(&self.memory.snapshot());
        let loss = self
            .trainer
            .train(&mut self.engine, &input, &actual)
            .await?;
        let mut memory = self.memory.clone();
        memory.push(Side::Player, actual);
        memory.push(Side::Opponent, guessed);
        let next = Sequence::from(&memory.snapshot());
        let prediction = self.engine.predict(&next)?;
        log::debug!("next prediction {}", prediction);
        self.memory = memory;
        self.prediction = prediction;
        Ok(loss)
    }
}
