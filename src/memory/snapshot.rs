use super::*;

/// Immutable copy of both windows, ready to be encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    player: Window,
    opponent: Window,
}

impl Snapshot {
    pub(crate) fn new(player: Window, opponent: Window) -> Self {
        debug_assert_eq!(player.depth(), opponent.depth(), "windows share a depth");
        Self { player, opponent }
    }
    pub fn player(&self) -> &Window {
        &self.player
    }
    pub fn opponent(&self) -> &Window {
        &self.opponent
    }
    pub fn depth(&self) -> usize {
        self.player.depth()
    }
}
