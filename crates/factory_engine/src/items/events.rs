//! Item event payloads.
//!
//! Handlers may read the context but mutate only their event payload; the
//! firing boundary is responsible for folding the payload back into real
//! state. That keeps every handler trivially composable and leaves the
//! calculation kernels pure.

/// Fires on the AccuracyResolved -> DamageCalculated boundary, before the
/// damage kernel reads its inputs. Fired once for each role's held item;
/// `holder_is_attacker` tells the handler whose item is being consulted.
#[derive(Debug, Clone, Copy)]
pub struct PreDamageCalcEvent {
    pub attack: u16,
    pub defense: u16,
    pub crit_stage: u8,
    pub power: u16,
    pub holder_is_attacker: bool,
}

/// Fires on the DamageCalculated -> DamageApplied boundary, before the HP
/// commit. `defender_hp` is read-only context for the fatal check.
#[derive(Debug, Clone, Copy)]
pub struct PreDamageApplyEvent {
    pub damage: u16,
    pub defender_hp: u16,
    pub survived_fatal: bool,
}

/// Fires when a transition crosses the EffectApplied boundary after damage
/// was committed. The first three fields are read-only context.
#[derive(Debug, Clone, Copy)]
pub struct PostDamageApplyEvent {
    pub damage_dealt: u16,
    pub was_critical: bool,
    pub target_fainted: bool,

    pub attacker_heal: u16,
    pub attacker_recoil: u16,
    pub cause_flinch: bool,
}

/// Fires per slot on the TurnGenesis -> PriorityDetermined boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurnStartEvent {
    pub priority_boost: bool,
}

/// Fires per surviving slot on the ActionsResolved -> TurnEnd boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurnEndEvent {
    pub heal_amount: u16,
    pub damage_amount: u16,
}
