//! Rental-to-battle setup.
//!
//! A Battle Factory rental is a compact descriptor: species, four moves, a
//! held item, a nature, a six-bit EV spread, and an ability slot. Setup
//! expands it into battle-ready state: a computed stat block, a fresh
//! `MonState`, a neutral `SlotState`, and the `ActiveMon` view the damage
//! kernel reads.

use crate::calc::{self, StatBlock};
use crate::items::ItemId;
use crate::moves::{get_move_data, MoveId};
use crate::natures::NatureId;
use crate::species::{get_species_data, AbilityId, SpeciesId};
use crate::state::{ActiveMon, MonState, SlotState};

/// Every factory rental has perfect IVs.
pub const RENTAL_IV: u8 = 31;

/// Total EVs distributed across the flagged stats.
pub const RENTAL_EV_BUDGET: u16 = 510;

/// Which stats receive EVs, one bit each, ordered
/// HP, Atk, Def, SpAtk, SpDef, Spd.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvSpread(pub u8);

impl EvSpread {
    pub const HP: EvSpread = EvSpread(1 << 0);
    pub const ATK: EvSpread = EvSpread(1 << 1);
    pub const DEF: EvSpread = EvSpread(1 << 2);
    pub const SP_ATK: EvSpread = EvSpread(1 << 3);
    pub const SP_DEF: EvSpread = EvSpread(1 << 4);
    pub const SPD: EvSpread = EvSpread(1 << 5);

    #[inline]
    pub const fn union(self, other: EvSpread) -> EvSpread {
        EvSpread(self.0 | other.0)
    }

    #[inline]
    const fn flagged(self, bit: u8) -> bool {
        self.0 & (1 << bit) != 0
    }

    /// Expand the flags into per-stat EV values: `k` flagged stats receive
    /// `min(510 / k, 255)` each; unflagged stats receive zero.
    pub fn expand(self) -> [u8; 6] {
        let count = (self.0 & 0x3F).count_ones() as u16;
        if count == 0 {
            return [0; 6];
        }
        let per_stat = (RENTAL_EV_BUDGET / count).min(255) as u8;
        let mut evs = [0u8; 6];
        for (bit, ev) in evs.iter_mut().enumerate() {
            if self.flagged(bit as u8) {
                *ev = per_stat;
            }
        }
        evs
    }
}

/// The rental descriptor a factory round deals out.
#[derive(Debug, Clone, Copy)]
pub struct Rental {
    pub species: SpeciesId,
    pub moves: [MoveId; 4],
    pub held_item: ItemId,
    pub nature: NatureId,
    pub ev_spread: EvSpread,
    /// 0 selects the species' first ability, 1 the second (falling back to
    /// the first when there is no second).
    pub ability_slot: u8,
}

/// Battle-ready expansion of one rental.
#[derive(Debug, Clone, Copy)]
pub struct RentalSetup {
    pub mon: MonState,
    pub slot: SlotState,
    pub active: ActiveMon,
    pub stats: StatBlock,
    pub ability: AbilityId,
}

pub fn setup_rental(rental: &Rental, level: u8) -> RentalSetup {
    let species = get_species_data(rental.species);

    let ivs = [RENTAL_IV; 6];
    let evs = rental.ev_spread.expand();
    let force_one_hp = rental.species == SpeciesId::Shedinja;

    let stats = calc::calc_stat_block(
        &species.base_stats,
        &ivs,
        &evs,
        level,
        rental.nature,
        force_one_hp,
    );

    let mut pp = [0u8; 4];
    for (slot, move_id) in rental.moves.iter().enumerate() {
        pp[slot] = get_move_data(*move_id).pp;
    }

    let mon = MonState {
        current_hp: stats.hp,
        max_hp: stats.hp,
        pp,
        ..MonState::default()
    };

    let slot = SlotState {
        held_item: rental.held_item,
        ..SlotState::default()
    };

    let ability = if rental.ability_slot == 0 || species.ability2 == AbilityId::None {
        species.ability1
    } else {
        species.ability2
    };

    let active = ActiveMon {
        species: rental.species,
        ability,
        level,
        attack: stats.attack,
        defense: stats.defense,
        sp_attack: stats.sp_attack,
        sp_defense: stats.sp_defense,
        speed: stats.speed,
        type1: species.type1,
        type2: species.type2,
    };

    RentalSetup {
        mon,
        slot,
        active,
        stats,
        ability,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ev_spread_splits_the_budget() {
        // Two stats: 255 each.
        let two = EvSpread::ATK.union(EvSpread::SPD).expand();
        assert_eq!(two[1], 255);
        assert_eq!(two[5], 255);
        assert_eq!(two[0], 0);

        // Three stats: 170 each.
        let three = EvSpread::HP.union(EvSpread::DEF).union(EvSpread::SP_DEF).expand();
        assert_eq!(three[0], 170);
        assert_eq!(three[2], 170);
        assert_eq!(three[4], 170);

        // One stat caps at 255.
        assert_eq!(EvSpread::HP.expand()[0], 255);

        // No flags, no EVs.
        assert_eq!(EvSpread::default().expand(), [0; 6]);
    }

    #[test]
    fn setup_fills_hp_pp_and_active_view() {
        let rental = Rental {
            species: SpeciesId::Blastoise,
            moves: [
                MoveId::Surf,
                MoveId::IceBeam,
                MoveId::Protect,
                MoveId::Tackle,
            ],
            held_item: ItemId::Leftovers,
            nature: NatureId::Modest,
            ev_spread: EvSpread::HP.union(EvSpread::SP_ATK),
            ability_slot: 0,
        };
        let setup = setup_rental(&rental, 50);

        assert_eq!(setup.mon.current_hp, setup.mon.max_hp);
        assert_eq!(setup.mon.pp[0], 15);
        assert_eq!(setup.mon.pp[2], 10);
        assert_eq!(setup.slot.held_item, ItemId::Leftovers);
        assert_eq!(setup.active.level, 50);
        assert_eq!(setup.active.type1, crate::types::Type::Water);
        assert_eq!(setup.ability, AbilityId::Torrent);
        // Modest trades attack for special attack.
        assert!(setup.active.sp_attack > setup.active.attack);
    }

    #[test]
    fn shedinja_is_pinned_to_one_hp() {
        let rental = Rental {
            species: SpeciesId::Shedinja,
            moves: [MoveId::ShadowBall; 4],
            held_item: ItemId::None,
            nature: NatureId::Adamant,
            ev_spread: EvSpread::ATK,
            ability_slot: 0,
        };
        let setup = setup_rental(&rental, 50);
        assert_eq!(setup.mon.max_hp, 1);
    }

    #[test]
    fn ability_slot_two_falls_back_when_absent() {
        let farfetchd = Rental {
            species: SpeciesId::Farfetchd,
            moves: [MoveId::Slash; 4],
            held_item: ItemId::Stick,
            nature: NatureId::Jolly,
            ev_spread: EvSpread::ATK.union(EvSpread::SPD),
            ability_slot: 1,
        };
        assert_eq!(setup_rental(&farfetchd, 50).ability, AbilityId::InnerFocus);

        let gengar = Rental {
            species: SpeciesId::Gengar,
            moves: [MoveId::ShadowBall; 4],
            held_item: ItemId::None,
            nature: NatureId::Timid,
            ev_spread: EvSpread::SP_ATK.union(EvSpread::SPD),
            ability_slot: 1,
        };
        // Gengar has no second ability: fall back to the first.
        assert_eq!(setup_rental(&gengar, 50).ability, AbilityId::Levitate);
    }
}
