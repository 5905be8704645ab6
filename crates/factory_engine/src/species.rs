//! Species database for the rental pool.
//!
//! Entries carry Gen III base stats in the order HP, Atk, Def, SpAtk, SpDef,
//! Spd, the two types (second slot `Type::None` for mono-types), and the two
//! ability slots (second slot `AbilityId::None` when the species has only
//! one ability).

use crate::types::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum AbilityId {
    #[default]
    None = 0,
    Blaze,
    ClearBody,
    Guts,
    Illuminate,
    Immunity,
    InnerFocus,
    Insomnia,
    Intimidate,
    KeenEye,
    Levitate,
    Limber,
    MagmaArmor,
    NaturalCure,
    Overgrow,
    OwnTempo,
    Pressure,
    RockHead,
    SereneGrace,
    ShellArmor,
    Static,
    Sturdy,
    Synchronize,
    ThickFat,
    Torrent,
    VitalSpirit,
    WaterAbsorb,
    WaterVeil,
    WhiteSmoke,
    WonderGuard,
}

impl AbilityId {
    /// Abilities that block incoming stat-stage drops (Gen III pair).
    #[inline]
    pub const fn blocks_stat_drops(self) -> bool {
        matches!(self, AbilityId::ClearBody | AbilityId::WhiteSmoke)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u16)]
pub enum SpeciesId {
    #[default]
    Venusaur = 0,
    Charizard,
    Blastoise,
    Pikachu,
    Farfetchd,
    Chansey,
    Ditto,
    Snorlax,
    Gengar,
    Alakazam,
    Machamp,
    Starmie,
    Weezing,
    Lapras,
    Aerodactyl,
    Zapdos,
    Dragonite,
    Sceptile,
    Blaziken,
    Swampert,
    Gyarados,
    Skarmory,
    Torkoal,
    Shedinja,
    Metagross,
    Salamence,
}

impl SpeciesId {
    pub const COUNT: usize = 26;
}

#[derive(Debug, Clone, Copy)]
pub struct SpeciesData {
    pub name: &'static str,
    /// Base stats: HP, Atk, Def, SpAtk, SpDef, Spd.
    pub base_stats: [u8; 6],
    pub type1: Type,
    pub type2: Type,
    pub ability1: AbilityId,
    pub ability2: AbilityId,
}

#[rustfmt::skip]
pub static SPECIES: [SpeciesData; SpeciesId::COUNT] = [
    SpeciesData { name: "Venusaur",   base_stats: [ 80,  82,  83, 100, 100,  80], type1: Type::Grass,    type2: Type::Poison,   ability1: AbilityId::Overgrow,    ability2: AbilityId::None },
    SpeciesData { name: "Charizard",  base_stats: [ 78,  84,  78, 109,  85, 100], type1: Type::Fire,     type2: Type::Flying,   ability1: AbilityId::Blaze,       ability2: AbilityId::None },
    SpeciesData { name: "Blastoise",  base_stats: [ 79,  83, 100,  85, 105,  78], type1: Type::Water,    type2: Type::None,     ability1: AbilityId::Torrent,     ability2: AbilityId::None },
    SpeciesData { name: "Pikachu",    base_stats: [ 35,  55,  30,  50,  40,  90], type1: Type::Electric, type2: Type::None,     ability1: AbilityId::Static,      ability2: AbilityId::None },
    SpeciesData { name: "Farfetch'd", base_stats: [ 52,  65,  55,  58,  62,  60], type1: Type::Normal,   type2: Type::Flying,   ability1: AbilityId::KeenEye,     ability2: AbilityId::InnerFocus },
    SpeciesData { name: "Chansey",    base_stats: [250,   5,   5,  35, 105,  50], type1: Type::Normal,   type2: Type::None,     ability1: AbilityId::NaturalCure, ability2: AbilityId::SereneGrace },
    SpeciesData { name: "Ditto",      base_stats: [ 48,  48,  48,  48,  48,  48], type1: Type::Normal,   type2: Type::None,     ability1: AbilityId::Limber,      ability2: AbilityId::None },
    SpeciesData { name: "Snorlax",    base_stats: [160, 110,  65,  65, 110,  30], type1: Type::Normal,   type2: Type::None,     ability1: AbilityId::Immunity,    ability2: AbilityId::ThickFat },
    SpeciesData { name: "Gengar",     base_stats: [ 60,  65,  60, 130,  75, 110], type1: Type::Ghost,    type2: Type::Poison,   ability1: AbilityId::Levitate,    ability2: AbilityId::None },
    SpeciesData { name: "Alakazam",   base_stats: [ 55,  50,  45, 135,  85, 120], type1: Type::Psychic,  type2: Type::None,     ability1: AbilityId::Synchronize, ability2: AbilityId::InnerFocus },
    SpeciesData { name: "Machamp",    base_stats: [ 90, 130,  80,  65,  85,  55], type1: Type::Fighting, type2: Type::None,     ability1: AbilityId::Guts,        ability2: AbilityId::None },
    SpeciesData { name: "Starmie",    base_stats: [ 60,  75,  85, 100,  85, 115], type1: Type::Water,    type2: Type::Psychic,  ability1: AbilityId::Illuminate,  ability2: AbilityId::NaturalCure },
    SpeciesData { name: "Weezing",    base_stats: [ 65,  90, 120,  85,  70,  60], type1: Type::Poison,   type2: Type::None,     ability1: AbilityId::Levitate,    ability2: AbilityId::None },
    SpeciesData { name: "Lapras",     base_stats: [130,  85,  80,  85,  95,  60], type1: Type::Water,    type2: Type::Ice,      ability1: AbilityId::WaterAbsorb, ability2: AbilityId::ShellArmor },
    SpeciesData { name: "Aerodactyl", base_stats: [ 80, 105,  65,  60,  75, 130], type1: Type::Rock,     type2: Type::Flying,   ability1: AbilityId::RockHead,    ability2: AbilityId::Pressure },
    SpeciesData { name: "Zapdos",     base_stats: [ 90,  90,  85, 125,  90, 100], type1: Type::Electric, type2: Type::Flying,   ability1: AbilityId::Pressure,    ability2: AbilityId::None },
    SpeciesData { name: "Dragonite",  base_stats: [ 91, 134,  95, 100, 100,  80], type1: Type::Dragon,   type2: Type::Flying,   ability1: AbilityId::InnerFocus,  ability2: AbilityId::None },
    SpeciesData { name: "Sceptile",   base_stats: [ 70,  85,  65, 105,  85, 120], type1: Type::Grass,    type2: Type::None,     ability1: AbilityId::Overgrow,    ability2: AbilityId::None },
    SpeciesData { name: "Blaziken",   base_stats: [ 80, 120,  70, 110,  70,  80], type1: Type::Fire,     type2: Type::Fighting, ability1: AbilityId::Blaze,       ability2: AbilityId::None },
    SpeciesData { name: "Swampert",   base_stats: [100, 110,  90,  85,  90,  60], type1: Type::Water,    type2: Type::Ground,   ability1: AbilityId::Torrent,     ability2: AbilityId::None },
    SpeciesData { name: "Gyarados",   base_stats: [ 95, 125,  79,  60, 100,  81], type1: Type::Water,    type2: Type::Flying,   ability1: AbilityId::Intimidate,  ability2: AbilityId::None },
    SpeciesData { name: "Skarmory",   base_stats: [ 65,  80, 140,  40,  70,  70], type1: Type::Steel,    type2: Type::Flying,   ability1: AbilityId::KeenEye,     ability2: AbilityId::Sturdy },
    SpeciesData { name: "Torkoal",    base_stats: [ 70,  85, 140,  85,  70,  20], type1: Type::Fire,     type2: Type::None,     ability1: AbilityId::WhiteSmoke,  ability2: AbilityId::None },
    SpeciesData { name: "Shedinja",   base_stats: [  1,  90,  45,  30,  30,  40], type1: Type::Bug,      type2: Type::Ghost,    ability1: AbilityId::WonderGuard, ability2: AbilityId::None },
    SpeciesData { name: "Metagross",  base_stats: [ 80, 135, 130,  95,  90,  70], type1: Type::Steel,    type2: Type::Psychic,  ability1: AbilityId::ClearBody,   ability2: AbilityId::None },
    SpeciesData { name: "Salamence",  base_stats: [ 95, 135,  80, 110,  80, 100], type1: Type::Dragon,   type2: Type::Flying,   ability1: AbilityId::Intimidate,  ability2: AbilityId::None },
];

#[inline]
pub fn get_species_data(id: SpeciesId) -> &'static SpeciesData {
    &SPECIES[id as usize]
}

/// Case-insensitive lookup by display name, for host-side team files.
pub fn species_by_name(name: &str) -> Option<SpeciesId> {
    SPECIES
        .iter()
        .position(|s| s.name.eq_ignore_ascii_case(name))
        .map(|i| {
            // Discriminants are dense and start at zero, so the position is
            // the id.
            // SAFETY: `i < SpeciesId::COUNT` and every value in that range
            // is a declared discriminant.
            unsafe { std::mem::transmute::<u16, SpeciesId>(i as u16) }
        })
}
