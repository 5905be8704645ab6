//! Slot domain: per-battle-position state.
//!
//! This is the critical distinction from [`super::MonState`]: stat stages,
//! confusion, substitutes and the rest of the volatile machinery belong to
//! the POSITION, not the pokemon. Switching out discards them — except for
//! the subset Baton Pass hands to the incoming pokemon.

use bitflags::bitflags;

use crate::items::ItemId;
use crate::moves::MoveId;

/// Sentinel for slot-id relationship fields.
pub const NO_SLOT: u8 = 0xFF;

/// Indices into [`SlotState::stages`].
pub mod stage {
    pub const ATK: usize = 0;
    pub const DEF: usize = 1;
    pub const SPD: usize = 2;
    pub const SP_ATK: usize = 3;
    pub const SP_DEF: usize = 4;
    pub const ACCURACY: usize = 5;
    pub const EVASION: usize = 6;
}

pub const STAGE_COUNT: usize = 7;

bitflags! {
    /// Volatile status conditions. Multiple can be active at once; all are
    /// cleared on switch-out except the Baton Pass subset.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Volatiles: u32 {
        const CONFUSED        = 1 << 0;
        const INFATUATED      = 1 << 1;
        const FOCUS_ENERGY    = 1 << 2;
        const SUBSTITUTE      = 1 << 3;
        const LEECH_SEED      = 1 << 4;
        const CURSED          = 1 << 5;
        const NIGHTMARE       = 1 << 6;
        const TRAPPED         = 1 << 7;
        const WRAPPED         = 1 << 8;
        const TORMENTED       = 1 << 9;
        const DISABLED        = 1 << 10;
        const TAUNTED         = 1 << 11;
        const ENCORED         = 1 << 12;
        const CHARGING        = 1 << 13;
        const SEMI_INVULNERABLE = 1 << 14;
        const DESTINY_BOND    = 1 << 15;
        const GRUDGE          = 1 << 16;
        const INGRAINED       = 1 << 17;
        const YAWN            = 1 << 18;
        const PERISH_SONG     = 1 << 19;
        const LOCK_ON         = 1 << 20;
        const CHARGED         = 1 << 21;
        const DEFENSE_CURL    = 1 << 22;
        const RAGE            = 1 << 23;
        const FORESIGHT       = 1 << 24;
        const BIDE            = 1 << 25;
        const UPROAR          = 1 << 26;
        const TRANSFORMED     = 1 << 27;
        const PROTECTED       = 1 << 28;
        const ENDURED         = 1 << 29;
        const FLINCHED        = 1 << 30;
    }
}

impl Volatiles {
    /// Flags Baton Pass carries over to the incoming pokemon.
    pub const BATON_PASS_MASK: Volatiles = Volatiles::CONFUSED
        .union(Volatiles::FOCUS_ENERGY)
        .union(Volatiles::SUBSTITUTE)
        .union(Volatiles::LEECH_SEED)
        .union(Volatiles::CURSED)
        .union(Volatiles::TRAPPED)
        .union(Volatiles::INGRAINED)
        .union(Volatiles::PERISH_SONG)
        .union(Volatiles::LOCK_ON);
}

#[derive(Debug, Clone, Copy)]
pub struct SlotState {
    /// Stat stages in [-6, +6]: atk, def, spd, sp_atk, sp_def, acc, eva.
    pub stages: [i8; STAGE_COUNT],

    pub volatiles: Volatiles,

    // Volatile counters.
    pub confusion_turns: u8,
    pub wrap_turns: u8,
    pub taunt_turns: u8,
    pub encore_turns: u8,
    pub disable_turns: u8,
    pub perish_count: u8,
    pub stockpile_count: u8,
    pub fury_cutter_power: u8,
    pub rollout_hits: u8,
    pub yawn_turns: u8,

    pub substitute_hp: u16,

    // Move tracking.
    pub disabled_move: Option<MoveId>,
    pub encored_move: Option<MoveId>,
    pub last_move_used: Option<MoveId>,
    pub charging_move: Option<MoveId>,

    // Damage-taken ledger for this turn (Counter / Mirror Coat).
    pub physical_damage_taken: u16,
    pub special_damage_taken: u16,
    pub physical_attacker: u8,
    pub special_attacker: u8,

    // Relationships.
    pub infatuated_with: u8,
    /// Slot that planted the seed on this position.
    pub leech_seed_target: u8,
    pub trapped_by: u8,

    // Per-turn flags.
    pub is_first_turn: bool,
    pub moved_this_turn: bool,
    /// Magic Coat: reflect eligible status moves this turn.
    pub bounce_move: bool,

    pub held_item: ItemId,
    pub item_consumed: bool,
}

impl Default for SlotState {
    fn default() -> Self {
        SlotState {
            stages: [0; STAGE_COUNT],
            volatiles: Volatiles::empty(),
            confusion_turns: 0,
            wrap_turns: 0,
            taunt_turns: 0,
            encore_turns: 0,
            disable_turns: 0,
            perish_count: 0,
            stockpile_count: 0,
            fury_cutter_power: 0,
            rollout_hits: 0,
            yawn_turns: 0,
            substitute_hp: 0,
            disabled_move: None,
            encored_move: None,
            last_move_used: None,
            charging_move: None,
            physical_damage_taken: 0,
            special_damage_taken: 0,
            physical_attacker: NO_SLOT,
            special_attacker: NO_SLOT,
            infatuated_with: NO_SLOT,
            leech_seed_target: NO_SLOT,
            trapped_by: NO_SLOT,
            is_first_turn: true,
            moved_this_turn: false,
            bounce_move: false,
            held_item: ItemId::None,
            item_consumed: false,
        }
    }
}

impl SlotState {
    #[inline]
    pub fn has(&self, flag: Volatiles) -> bool {
        self.volatiles.contains(flag)
    }

    #[inline]
    pub fn set(&mut self, flag: Volatiles) {
        self.volatiles.insert(flag);
    }

    #[inline]
    pub fn clear(&mut self, flag: Volatiles) {
        self.volatiles.remove(flag);
    }

    /// Full reset on a normal switch-out. The held item stays with the slot
    /// owner, so the caller re-seeds it for the incoming pokemon.
    pub fn clear_on_switch(&mut self, incoming_item: ItemId) {
        *self = SlotState {
            held_item: incoming_item,
            ..SlotState::default()
        };
    }

    /// Baton Pass switch-out: stat stages, substitute HP, perish count, the
    /// leech-seed planter and the transferable volatile subset survive;
    /// everything else returns to defaults.
    pub fn clear_for_baton_pass(&mut self, incoming_item: ItemId) {
        let preserved_stages = self.stages;
        let preserved_volatiles = self.volatiles & Volatiles::BATON_PASS_MASK;
        let preserved_sub_hp = self.substitute_hp;
        let preserved_perish = self.perish_count;
        let preserved_leech = self.leech_seed_target;

        *self = SlotState {
            stages: preserved_stages,
            volatiles: preserved_volatiles,
            substitute_hp: preserved_sub_hp,
            perish_count: preserved_perish,
            leech_seed_target: preserved_leech,
            held_item: incoming_item,
            ..SlotState::default()
        };
    }

    /// Clear per-turn flags; called at turn genesis. Idempotent.
    pub fn clear_turn_flags(&mut self) {
        self.clear(Volatiles::PROTECTED);
        self.clear(Volatiles::ENDURED);
        self.clear(Volatiles::FLINCHED);
        self.physical_damage_taken = 0;
        self.special_damage_taken = 0;
        self.physical_attacker = NO_SLOT;
        self.special_attacker = NO_SLOT;
        self.moved_this_turn = false;
        self.bounce_move = false;
    }
}
