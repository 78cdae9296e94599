use super::*;
use crate::Config;
use crate::Probability;
use crate::Result;
use crate::encoding::Sequence;
use crate::moves::Card;
use crate::moves::Variant;
use candle_core::DType;
use candle_core::Device;
use candle_core::Tensor;
use candle_core::Var;
use candle_nn::Module;
use candle_nn::VarBuilder;
use candle_nn::VarMap;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Owns the trainable network for one variant and turns its output into
/// a committed guess.
///
/// A new engine is built whenever the variant changes. Dropping the old one
/// releases its weights.
pub struct PredictionEngine {
    variant: Variant,
    threshold: Probability,
    device: Device,
    varmap: VarMap,
    network: Network,
    rng: SmallRng,
}

impl PredictionEngine {
    pub fn new(config: &Config, variant: Variant) -> Result<Self> {
        let device = Device::Cpu;
        let varmap = VarMap::new();
        let vb = VarBuilder::from_varmap(&varmap, DType::F32, &device);
        let network = Network::new(config.depth, variant.size(), vb)?;
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        log::debug!(
            "built {}-card network with {} parameter tensors",
            variant,
            varmap.all_vars().len()
        );
        Ok(Self {
            variant,
            threshold: config.threshold,
            device,
            varmap,
            network,
            rng,
        })
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }
    pub fn device(&self) -> &Device {
        &self.device
    }
    /// Trainable parameters, shared with the optimizer.
    pub fn vars(&self) -> Vec<Var> {
        self.varmap.all_vars()
    }

    /// Differentiable forward pass, `[1, depth, 2K]` to `[1, K]`.
    pub fn forward(&self, xs: &Tensor) -> candle_core::Result<Tensor> {
        self.network.forward(xs)
    }

    /// Evaluates the network without touching its weights.
    pub fn predict(&self, sequence: &Sequence) -> Result<Prediction> {
        let xs = sequence.tensor(&self.device)?;
        let ys = self.forward(&xs)?.squeeze(0)?.to_vec1::<Probability>()?;
        Ok(Prediction::from(ys))
    }

    /// chooseIndex: argmax, or a uniform guess below the confidence threshold.
    pub fn choose(&mut self, prediction: &Prediction) -> Result<Card> {
        let index = prediction.choose(self.threshold, &mut self.rng);
        Card::try_from((index, self.variant))
    }
}

impl std::fmt::Debug for PredictionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("PredictionEngine")
            .field("variant", &self.variant)
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn engine(variant: Variant) -> PredictionEngine {
        let config = Config {
            seed: Some(3),
            ..Config::default()
        };
        PredictionEngine::new(&config, variant).unwrap()
    }

    #[test]
    fn predicts_a_distribution_over_k_cards() {
        for variant in [Variant::Binary, Variant::Cyclic] {
            let engine = engine(variant);
            let sequence = Sequence::from(&MemoryStore::new(10, variant).snapshot());
            let prediction = engine.predict(&sequence).unwrap();
            assert_eq!(prediction.len(), variant.size());
            assert!(prediction.values().iter().all(|p| (0. ..=1.).contains(p)));
            assert!((prediction.values().iter().sum::<f32>() - 1.).abs() < 1e-5);
        }
    }

    #[test]
    fn prediction_does_not_mutate() {
        let engine = engine(Variant::Cyclic);
        let sequence = Sequence::from(&MemoryStore::new(10, Variant::Cyclic).snapshot());
        let first = engine.predict(&sequence).unwrap();
        let again = engine.predict(&sequence).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn chosen_card_is_legal_for_variant() {
        let mut engine = engine(Variant::Binary);
        for values in [vec![0.9, 0.1], vec![0.5, 0.5], vec![0.1, 0.9]] {
            let card = engine.choose(&Prediction::from(values)).unwrap();
            assert!(card.index() < 2);
        }
    }

    #[test]
    fn confident_choice_is_argmax() {
        let mut engine = engine(Variant::Cyclic);
        let card = engine.choose(&Prediction::from(vec![0.9, 0.05, 0.05])).unwrap();
        assert_eq!(card, Card::A);
    }
}
