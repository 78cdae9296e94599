use crate::*;
use crate::encoding::Sequence;
use crate::engine::PredictionEngine;
use crate::moves::OneHot;
use candle_core::Tensor;
use candle_nn::AdamW;
use candle_nn::Optimizer;
use candle_nn::ParamsAdamW;
use std::time::Duration;

/// Fits the engine's network to the single example each round produces.
///
/// Every round runs `epochs` passes of batch size one against mean squared
/// error, then the example is thrown away. Adam moments persist across
/// rounds for the lifetime of the engine they were built for.
pub struct OnlineTrainer {
    epochs: usize,
    timeout: Option<Duration>,
    optimizer: AdamW,
    #[cfg(test)]
    pub(crate) inputs: Vec<Sequence>,
}

impl OnlineTrainer {
    pub fn new(config: &Config, engine: &PredictionEngine) -> Result<Self> {
        let params = ParamsAdamW {
            lr: config.learning_rate,
            beta1: ADAM_BETA1,
            beta2: ADAM_BETA2,
            eps: ADAM_EPSILON,
            weight_decay: 0.,
        };
        Ok(Self {
            epochs: config.epochs,
            timeout: config.timeout,
            optimizer: AdamW::new(engine.vars(), params)?,
            #[cfg(test)]
            inputs: Vec::new(),
        })
    }

    /// trainStep, bounded by the configured timeout where a timer exists.
    /// Returns the loss of the final epoch.
    ///
    /// With a timeout configured this must run inside a tokio runtime that
    /// has its time driver enabled.
    pub async fn train(
        &mut self,
        engine: &mut PredictionEngine,
        input: &Sequence,
        actual: &OneHot,
    ) -> Result<Probability> {
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(limit) = self.timeout {
            return tokio::time::timeout(limit, self.fit(engine, input, actual))
                .await
                .map_err(|_| Error::TrainingTimeout(limit))?;
        }
        self.fit(engine, input, actual).await
    }

    /// Runs every epoch to completion, yielding to the scheduler between
    /// epochs. Tensors built here are dropped when the call returns.
    pub async fn fit(
        &mut self,
        engine: &mut PredictionEngine,
        input: &Sequence,
        actual: &OneHot,
    ) -> Result<Probability> {
        #[cfg(test)]
        self.inputs.push(input.clone());
        let xs = input.tensor(engine.device())?;
        let ys = Tensor::from_slice(actual.values(), (1, actual.len()), engine.device())?;
        let mut last = Probability::NAN;
        for epoch in 0..self.epochs {
            let loss = candle_nn::loss::mse(&engine.forward(&xs)?, &ys)?;
            self.optimizer.backward_step(&loss)?;
            last = loss.to_scalar::<Probability>()?;
            log::trace!("epoch {:>2} loss {:.6}", epoch, last);
            tokio::task::yield_now().await;
        }
        Ok(last)
    }
}

impl std::fmt::Debug for OnlineTrainer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("OnlineTrainer")
            .field("epochs", &self.epochs)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
