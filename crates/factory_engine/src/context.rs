//! The battle context: the blackboard one effect invocation works against.
//!
//! Ops never create state of their own. They mutate the arena through the
//! context's role-addressed accessors, write their outcome into the
//! [`EffectResult`] scratch, or stage a [`DamageOverride`]. The context is
//! rebuilt by the orchestrator every time the attacker changes within a
//! turn and must not outlive the effect invocation it was built for.

use crate::moves::MoveData;
use crate::state::{
    ActiveMon, BattleState, FieldState, MonState, SideState, SlotState,
};

/// Per-effect outcome scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct EffectResult {
    // Accuracy.
    pub missed: bool,

    // Damage calculation.
    pub damage: u16,
    /// Pair effectiveness ×100; 100 = neutral.
    pub effectiveness: u16,
    pub critical: bool,

    // Status.
    pub status_applied: bool,

    /// General failure flag (screen already up, stat at clamp, ...).
    pub failed: bool,

    // Switch-related requests, honored by the orchestrator.
    pub switch_out: bool,
    pub baton_pass: bool,
    pub pursuit_intercept: bool,
    pub pursuit_user_slot: u8,
}

impl EffectResult {
    pub fn new() -> Self {
        EffectResult {
            effectiveness: crate::types::DUAL_NEUTRAL,
            pursuit_user_slot: crate::state::NO_SLOT,
            ..Default::default()
        }
    }
}

/// Overrides for moves that bypass the normal damage inputs
/// (0 = use the normal source).
#[derive(Debug, Clone, Copy, Default)]
pub struct DamageOverride {
    pub power: u16,
    pub attack: u16,
    pub defense: u16,
}

/// The handle an effect executes against: the arena plus the identity of
/// the two roles, the active move, and the result scratch.
pub struct BattleContext<'a> {
    pub state: &'a mut BattleState,

    pub attacker: u8,
    pub defender: u8,

    pub move_data: &'static MoveData,

    pub result: EffectResult,
    pub overrides: DamageOverride,

    /// Iteration counter for repeated actions (Triple Kick scaling).
    pub loop_iteration: u8,
}

impl<'a> BattleContext<'a> {
    pub fn new(state: &'a mut BattleState, attacker: u8, defender: u8, move_data: &'static MoveData) -> Self {
        BattleContext {
            state,
            attacker,
            defender,
            move_data,
            result: EffectResult::new(),
            overrides: DamageOverride::default(),
            loop_iteration: 0,
        }
    }

    // ------------------------------------------------------------------
    // Role-addressed domain accessors
    // ------------------------------------------------------------------

    #[inline]
    pub fn field(&self) -> &FieldState {
        &self.state.field
    }

    #[inline]
    pub fn field_mut(&mut self) -> &mut FieldState {
        &mut self.state.field
    }

    #[inline]
    pub fn attacker_side(&self) -> &SideState {
        &self.state.sides[BattleState::side_of(self.attacker)]
    }

    #[inline]
    pub fn attacker_side_mut(&mut self) -> &mut SideState {
        &mut self.state.sides[BattleState::side_of(self.attacker)]
    }

    #[inline]
    pub fn defender_side(&self) -> &SideState {
        &self.state.sides[BattleState::side_of(self.defender)]
    }

    #[inline]
    pub fn defender_side_mut(&mut self) -> &mut SideState {
        &mut self.state.sides[BattleState::side_of(self.defender)]
    }

    #[inline]
    pub fn attacker_slot(&self) -> &SlotState {
        &self.state.slots[self.attacker as usize]
    }

    #[inline]
    pub fn attacker_slot_mut(&mut self) -> &mut SlotState {
        &mut self.state.slots[self.attacker as usize]
    }

    #[inline]
    pub fn defender_slot(&self) -> &SlotState {
        &self.state.slots[self.defender as usize]
    }

    #[inline]
    pub fn defender_slot_mut(&mut self) -> &mut SlotState {
        &mut self.state.slots[self.defender as usize]
    }

    #[inline]
    pub fn attacker_mon(&self) -> &MonState {
        &self.state.mons[self.attacker as usize]
    }

    #[inline]
    pub fn attacker_mon_mut(&mut self) -> &mut MonState {
        &mut self.state.mons[self.attacker as usize]
    }

    #[inline]
    pub fn defender_mon(&self) -> &MonState {
        &self.state.mons[self.defender as usize]
    }

    #[inline]
    pub fn defender_mon_mut(&mut self) -> &mut MonState {
        &mut self.state.mons[self.defender as usize]
    }

    #[inline]
    pub fn attacker_active(&self) -> &ActiveMon {
        &self.state.actives[self.attacker as usize]
    }

    #[inline]
    pub fn defender_active(&self) -> &ActiveMon {
        &self.state.actives[self.defender as usize]
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    #[inline]
    pub fn defender_has_substitute(&self) -> bool {
        self.defender_slot().substitute_hp > 0
    }

    /// Move power after overrides.
    #[inline]
    pub fn effective_power(&self) -> u16 {
        if self.overrides.power > 0 {
            self.overrides.power
        } else {
            u16::from(self.move_data.power)
        }
    }

    #[inline]
    pub fn active_slot_count(&self) -> u8 {
        self.state.active_slot_count
    }
}
