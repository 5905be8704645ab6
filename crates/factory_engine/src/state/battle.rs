//! The engine-owned arena holding every state-domain instance.

use crate::species::{AbilityId, SpeciesId};
use crate::types::Type;

use super::{FieldState, MonState, SideState, SlotState};

/// Fixed slot capacity: 2 for singles. The arrays are sized for the design
/// ceiling of 4 to keep the doubles door open, but singles semantics only
/// ever populate two.
pub const MAX_BATTLE_SLOTS: usize = 2;

/// Read-mostly mirror of an active pokemon's computed battle stats and
/// types, set at switch-in and consumed by the damage kernel. A cache: the
/// underlying stats cannot change mid-battle in Gen III singles.
#[derive(Debug, Clone, Copy)]
pub struct ActiveMon {
    pub species: SpeciesId,
    pub ability: AbilityId,
    pub level: u8,

    // Computed stats, before stat-stage modifiers.
    pub attack: u16,
    pub defense: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
    pub speed: u16,

    pub type1: Type,
    pub type2: Type,
}

impl Default for ActiveMon {
    fn default() -> Self {
        ActiveMon {
            species: SpeciesId::default(),
            ability: AbilityId::None,
            level: 50,
            attack: 100,
            defense: 100,
            sp_attack: 100,
            sp_defense: 100,
            speed: 100,
            type1: Type::None,
            type2: Type::None,
        }
    }
}

/// All battle state, indexed by slot id. Side `i` owns slot `i` in singles.
#[derive(Debug, Clone, Copy, Default)]
pub struct BattleState {
    pub field: FieldState,
    pub sides: [SideState; 2],
    pub slots: [SlotState; MAX_BATTLE_SLOTS],
    pub mons: [MonState; MAX_BATTLE_SLOTS],
    pub actives: [ActiveMon; MAX_BATTLE_SLOTS],
    pub active_slot_count: u8,
}

impl BattleState {
    pub fn new() -> Self {
        BattleState {
            active_slot_count: MAX_BATTLE_SLOTS as u8,
            ..Default::default()
        }
    }

    /// The side a slot belongs to.
    #[inline]
    pub const fn side_of(slot: u8) -> usize {
        // Singles: slot 0 is side 0, slot 1 is side 1.
        slot as usize
    }

    #[inline]
    pub fn is_fainted(&self, slot: u8) -> bool {
        self.mons[slot as usize].is_fainted()
    }

    /// Full between-battles reset of field and side domains.
    pub fn reset_persistent(&mut self) {
        self.field.reset();
        for side in &mut self.sides {
            side.reset();
        }
    }
}
