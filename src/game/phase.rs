/// Where the orchestrator is within a round.
///
/// Idle → Resolving → Training → Idle, for as long as the session lives.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Resolving,
    Training,
}
