use crate::moves::OneHot;
use std::collections::VecDeque;

/// Fixed-depth, most-recent-first history of one side's moves.
///
/// Always holds exactly `depth` entries: it starts full of zero vectors
/// and only ever changes by push-front, evict-back.
#[derive(Debug, Clone, PartialEq)]
pub struct Window(VecDeque<OneHot>);

impl Window {
    pub fn zeroed(depth: usize, k: usize) -> Self {
        Self(std::iter::repeat_n(OneHot::zero(k), depth).collect())
    }
    pub fn push(&mut self, onehot: OneHot) {
        self.0.push_front(onehot);
        self.0.pop_back();
    }
    pub fn depth(&self) -> usize {
        self.0.len()
    }
    pub fn latest(&self) -> Option<&OneHot> {
        self.0.front()
    }
    pub fn oldest(&self) -> Option<&OneHot> {
        self.0.back()
    }
    /// Most recent first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &OneHot> {
        self.0.iter()
    }
}
