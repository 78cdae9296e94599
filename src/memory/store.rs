use super::*;
use crate::moves::OneHot;
use crate::moves::Variant;

/// Rolling memory of the last few rounds for both sides.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    player: Window,
    opponent: Window,
}

impl MemoryStore {
    pub fn new(depth: usize, variant: Variant) -> Self {
        Self {
            player: Window::zeroed(depth, variant.size()),
            opponent: Window::zeroed(depth, variant.size()),
        }
    }
    pub fn push(&mut self, side: Side, onehot: OneHot) {
        match side {
            Side::Player => self.player.push(onehot),
            Side::Opponent => self.opponent.push(onehot),
        }
    }
    pub fn window(&self, side: Side) -> &Window {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.player.clone(), self.opponent.clone())
    }
}
