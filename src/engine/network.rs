use crate::DENSE_FACTORS;
use crate::RECURRENT_FACTOR;
use candle_core::D;
use candle_core::Tensor;
use candle_nn::LSTM;
use candle_nn::LSTMConfig;
use candle_nn::Linear;
use candle_nn::Module;
use candle_nn::RNN;
use candle_nn::VarBuilder;

/// Recurrent layer over the memory sequence feeding a small ReLU tower
/// and a softmax head, one output per card.
///
/// Widths for depth D and K cards:
/// LSTM(2K → 2·D·K), dense 20K, 20K, 10K, softmax K.
pub struct Network {
    recurrent: LSTM,
    hidden: Vec<Linear>,
    output: Linear,
}

impl Network {
    pub fn new(depth: usize, k: usize, vb: VarBuilder) -> candle_core::Result<Self> {
        let width = RECURRENT_FACTOR * depth * k;
        let recurrent = candle_nn::lstm(2 * k, width, LSTMConfig::default(), vb.pp("lstm"))?;
        let (hidden, last) = DENSE_FACTORS.iter().map(|f| f * k).enumerate().try_fold(
            (Vec::with_capacity(DENSE_FACTORS.len()), width),
            |(mut layers, input), (i, units)| {
                layers.push(candle_nn::linear(input, units, vb.pp(format!("dense{}", i)))?);
                Ok::<_, candle_core::Error>((layers, units))
            },
        )?;
        let output = candle_nn::linear(last, k, vb.pp("output"))?;
        Ok(Self {
            recurrent,
            hidden,
            output,
        })
    }
}

impl Module for Network {
    /// `[batch, depth, 2K]` in, `[batch, K]` probabilities out.
    /// Only the recurrent layer's final hidden state reaches the tower.
    fn forward(&self, xs: &Tensor) -> candle_core::Result<Tensor> {
        let states = self.recurrent.seq(xs)?;
        let last = states
            .last()
            .ok_or_else(|| candle_core::Error::Msg("empty input sequence".to_string()))?;
        let xs = self
            .hidden
            .iter()
            .try_fold(last.h().clone(), |xs, layer| layer.forward(&xs)?.relu())?;
        candle_nn::ops::softmax(&self.output.forward(&xs)?, D::Minus1)
    }
}
