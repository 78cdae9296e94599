use crate::Probability;
use crate::memory::Snapshot;
use crate::moves::OneHot;
use candle_core::Device;
use candle_core::Tensor;

/// Model input: `depth` timesteps of `2K` features, oldest timestep first.
///
/// Within a timestep the sides are interleaved per feature, so for K=3 a
/// row reads `[p0, o0, p1, o1, p2, o2]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    depth: usize,
    width: usize,
    features: Vec<Probability>,
}

impl Sequence {
    pub fn depth(&self) -> usize {
        self.depth
    }
    /// Features per timestep, 2K.
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn features(&self) -> &[Probability] {
        &self.features
    }
    /// Batch of one, shaped `[1, depth, 2K]`.
    pub fn tensor(&self, device: &Device) -> candle_core::Result<Tensor> {
        Tensor::from_slice(&self.features, (1, self.depth, self.width), device)
    }

    /// Splits the features back into chronological (player, opponent) moves.
    pub fn decode(&self) -> (Vec<OneHot>, Vec<OneHot>) {
        self.features
            .chunks(self.width)
            .map(|row| {
                let player = row.iter().step_by(2).copied().collect::<Vec<_>>();
                let opponent = row.iter().skip(1).step_by(2).copied().collect::<Vec<_>>();
                (OneHot::from(player), OneHot::from(opponent))
            })
            .unzip()
    }
}

impl From<&Snapshot> for Sequence {
    fn from(snapshot: &Snapshot) -> Self {
        let k = snapshot
            .player()
            .latest()
            .map(OneHot::len)
            .unwrap_or_default();
        let features = snapshot
            .player()
            .iter()
            .rev()
            .zip(snapshot.opponent().iter().rev())
            .flat_map(|(p, o)| {
                p.values()
                    .iter()
                    .zip(o.values())
                    .flat_map(|(&p, &o)| [p, o])
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        Self {
            depth: snapshot.depth(),
            width: 2 * k,
            features,
        }
    }
}
