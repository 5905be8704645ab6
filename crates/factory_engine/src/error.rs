//! Engine errors.
//!
//! These are action-validation and setup errors surfaced to the host.
//! In-battle move failures (screen already up, stat at its clamp, immunity)
//! are not errors: they live in `EffectResult` and the turn continues.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Battle Factory forbids fleeing; RUN is rejected at the edge.
    #[error("running is not allowed in a factory battle")]
    RunNotAllowed,

    #[error("move index {0} is out of range")]
    InvalidMoveIndex(u8),

    #[error("move slot {0} has no PP remaining")]
    NoPpRemaining(u8),

    /// A Choice item locks its holder into the first move it used.
    #[error("holder is choice-locked into a different move")]
    ChoiceLocked,

    #[error("party index {0} is not a valid switch target")]
    InvalidSwitchTarget(u8),

    /// The active pokemon fainted and a replacement is available; the only
    /// legal action is a switch.
    #[error("fainted active pokemon must be replaced")]
    FaintedActorMustSwitch,

    #[error("a team needs between 1 and 6 members, got {0}")]
    InvalidTeamSize(usize),

    #[error("the battle is already decided")]
    BattleOver,
}
