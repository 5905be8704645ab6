//! Builders that keep the scenario tests focused on behaviour.
//!
//! Every battle here runs with a freshly seeded RNG plus explicitly staged
//! rolls, so each test documents the exact draw sequence it consumes.

use factory_engine::items::ItemId;
use factory_engine::moves::MoveId;
use factory_engine::natures::NatureId;
use factory_engine::setup::{EvSpread, Rental};
use factory_engine::species::SpeciesId;

/// A neutral rental: Hardy nature, no EVs, no item, first ability.
pub fn rental(species: SpeciesId, moves: [MoveId; 4]) -> Rental {
    Rental {
        species,
        moves,
        held_item: ItemId::None,
        nature: NatureId::Hardy,
        ev_spread: EvSpread::default(),
        ability_slot: 0,
    }
}

pub fn rental_with_item(species: SpeciesId, moves: [MoveId; 4], held_item: ItemId) -> Rental {
    Rental {
        held_item,
        ..rental(species, moves)
    }
}

/// Level-50 neutral stat for a base value, matching the engine's formula.
pub fn neutral_stat(base: u16) -> u16 {
    (2 * base + 31) * 50 / 100 + 5
}

/// Level-50 HP for a base value with no EVs.
pub fn neutral_hp(base: u16) -> u16 {
    (2 * base + 31) * 50 / 100 + 60
}
