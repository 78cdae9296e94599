/// Whose history a memory window records.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Side {
    /// Cards the player actually picked.
    Player,
    /// Pyotr's own guesses, not a counter-move.
    Opponent,
}
