//! The move database.
//!
//! Rows are Gen III data for the Battle Factory rental pool. `MoveId`
//! discriminants index [`MOVES`] directly.

use crate::types::Type;

use super::{Effect, MoveData, MoveFlags, MoveTarget, CONTACT_HIT, RANGED_HIT, STATUS_COATED};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u16)]
pub enum MoveId {
    #[default]
    Pound = 0,
    Scratch,
    Tackle,
    QuickAttack,
    Slash,
    Absorb,
    MegaDrain,
    GigaDrain,
    TakeDown,
    DoubleEdge,
    DragonRage,
    PoisonSting,
    Sludge,
    SludgeBomb,
    Recover,
    SoftBoiled,
    Haze,
    SwordsDance,
    Growl,
    PoisonPowder,
    Toxic,
    ThunderWave,
    WillOWisp,
    SleepPowder,
    Spore,
    Sing,
    ConfuseRay,
    LightScreen,
    Reflect,
    Safeguard,
    Mist,
    Sandstorm,
    SunnyDay,
    RainDance,
    Hail,
    SkyAttack,
    BatonPass,
    Pursuit,
    PerishSong,
    MagicCoat,
    Spikes,
    Protect,
    Substitute,
    LeechSeed,
    FocusEnergy,
    Thunderbolt,
    Thunder,
    Flamethrower,
    FireBlast,
    IceBeam,
    Blizzard,
    Surf,
    HydroPump,
    Earthquake,
    Psychic,
    Bite,
    Headbutt,
    RockSlide,
    AerialAce,
    Swift,
    DoubleKick,
    FuryAttack,
    PinMissile,
    TripleKick,
    Agility,
    IronDefense,
    DoubleTeam,
    SandAttack,
    Screech,
    TailWhip,
    Leer,
    Growth,
    Crunch,
    ShadowBall,
    AuroraBeam,
    Acid,
    BodySlam,
    HyperBeam,
    DragonClaw,
    BrickBreak,
    CalmMind,
    DragonDance,
    BulkUp,
    MeteorMash,
    Outrage,
    Tickle,
}

impl MoveId {
    pub const COUNT: usize = 86;
}

#[allow(clippy::too_many_arguments)]
const fn mv(
    id: MoveId,
    name: &'static str,
    move_type: Type,
    power: u8,
    accuracy: u8,
    pp: u8,
    priority: i8,
    effect: Effect,
    effect_chance: u8,
    target: MoveTarget,
    flags: MoveFlags,
) -> MoveData {
    MoveData {
        id,
        name,
        move_type,
        power,
        accuracy,
        pp,
        priority,
        effect,
        effect_chance,
        target,
        flags,
    }
}

const SELF: MoveTarget = MoveTarget::User;
const FOE: MoveTarget = MoveTarget::Selected;
const FOE_SIDE: MoveTarget = MoveTarget::OpponentsField;
const EVERYONE: MoveTarget = MoveTarget::FoesAndAlly;
const SNATCHABLE: MoveFlags = MoveFlags::SNATCH;
const NO_FLAGS: MoveFlags = MoveFlags::empty();

#[rustfmt::skip]
pub static MOVES: [MoveData; MoveId::COUNT] = [
    mv(MoveId::Pound,        "Pound",         Type::Normal,    40, 100, 35,  0, Effect::Hit,          0, FOE, CONTACT_HIT),
    mv(MoveId::Scratch,      "Scratch",       Type::Normal,    40, 100, 35,  0, Effect::Hit,          0, FOE, CONTACT_HIT),
    mv(MoveId::Tackle,       "Tackle",        Type::Normal,    35,  95, 35,  0, Effect::Hit,          0, FOE, CONTACT_HIT),
    mv(MoveId::QuickAttack,  "Quick Attack",  Type::Normal,    40, 100, 30,  1, Effect::QuickAttack,  0, FOE, CONTACT_HIT),
    mv(MoveId::Slash,        "Slash",         Type::Normal,    70, 100, 20,  0, Effect::HighCritical, 0, FOE, CONTACT_HIT),
    mv(MoveId::Absorb,       "Absorb",        Type::Grass,     20, 100, 25,  0, Effect::Absorb,       0, FOE, RANGED_HIT),
    mv(MoveId::MegaDrain,    "Mega Drain",    Type::Grass,     40, 100, 15,  0, Effect::Absorb,       0, FOE, RANGED_HIT),
    mv(MoveId::GigaDrain,    "Giga Drain",    Type::Grass,     60, 100,  5,  0, Effect::Absorb,       0, FOE, RANGED_HIT),
    mv(MoveId::TakeDown,     "Take Down",     Type::Normal,    90,  85, 20,  0, Effect::Recoil,       0, FOE, CONTACT_HIT),
    mv(MoveId::DoubleEdge,   "Double-Edge",   Type::Normal,   120, 100, 15,  0, Effect::DoubleEdge,   0, FOE, CONTACT_HIT),
    mv(MoveId::DragonRage,   "Dragon Rage",   Type::Dragon,     0, 100, 10,  0, Effect::DragonRage,   0, FOE, RANGED_HIT),
    mv(MoveId::PoisonSting,  "Poison Sting",  Type::Poison,    15, 100, 35,  0, Effect::PoisonHit,   30, FOE, RANGED_HIT),
    mv(MoveId::Sludge,       "Sludge",        Type::Poison,    65, 100, 20,  0, Effect::PoisonHit,   30, FOE, RANGED_HIT),
    mv(MoveId::SludgeBomb,   "Sludge Bomb",   Type::Poison,    90, 100, 10,  0, Effect::PoisonHit,   30, FOE, RANGED_HIT),
    mv(MoveId::Recover,      "Recover",       Type::Normal,     0,   0, 20,  0, Effect::RestoreHp,    0, SELF, SNATCHABLE),
    mv(MoveId::SoftBoiled,   "Soft-Boiled",   Type::Normal,     0,   0, 10,  0, Effect::RestoreHp,    0, SELF, SNATCHABLE),
    mv(MoveId::Haze,         "Haze",          Type::Ice,        0,   0, 30,  0, Effect::Haze,         0, EVERYONE, NO_FLAGS),
    mv(MoveId::SwordsDance,  "Swords Dance",  Type::Normal,     0,   0, 30,  0, Effect::AtkUp2,       0, SELF, SNATCHABLE),
    mv(MoveId::Growl,        "Growl",         Type::Normal,     0, 100, 40,  0, Effect::AtkDown,      0, FOE, STATUS_COATED),
    mv(MoveId::PoisonPowder, "Poison Powder", Type::Poison,     0,  75, 35,  0, Effect::Poison,       0, FOE, STATUS_COATED),
    mv(MoveId::Toxic,        "Toxic",         Type::Poison,     0,  85, 10,  0, Effect::Toxic,        0, FOE, STATUS_COATED),
    mv(MoveId::ThunderWave,  "Thunder Wave",  Type::Electric,   0, 100, 20,  0, Effect::Paralyze,     0, FOE, STATUS_COATED),
    mv(MoveId::WillOWisp,    "Will-O-Wisp",   Type::Fire,       0,  75, 15,  0, Effect::WillOWisp,    0, FOE, STATUS_COATED),
    mv(MoveId::SleepPowder,  "Sleep Powder",  Type::Grass,      0,  75, 15,  0, Effect::Sleep,        0, FOE, STATUS_COATED),
    mv(MoveId::Spore,        "Spore",         Type::Grass,      0, 100, 15,  0, Effect::Sleep,        0, FOE, STATUS_COATED),
    mv(MoveId::Sing,         "Sing",          Type::Normal,     0,  55, 15,  0, Effect::Sleep,        0, FOE, STATUS_COATED),
    mv(MoveId::ConfuseRay,   "Confuse Ray",   Type::Ghost,      0, 100, 10,  0, Effect::Confuse,      0, FOE, STATUS_COATED),
    mv(MoveId::LightScreen,  "Light Screen",  Type::Psychic,    0,   0, 30,  0, Effect::LightScreen,  0, SELF, SNATCHABLE),
    mv(MoveId::Reflect,      "Reflect",       Type::Psychic,    0,   0, 20,  0, Effect::Reflect,      0, SELF, SNATCHABLE),
    mv(MoveId::Safeguard,    "Safeguard",     Type::Normal,     0,   0, 25,  0, Effect::Safeguard,    0, SELF, SNATCHABLE),
    mv(MoveId::Mist,         "Mist",          Type::Ice,        0,   0, 30,  0, Effect::Mist,         0, SELF, SNATCHABLE),
    mv(MoveId::Sandstorm,    "Sandstorm",     Type::Rock,       0,   0, 10,  0, Effect::Sandstorm,    0, EVERYONE, NO_FLAGS),
    mv(MoveId::SunnyDay,     "Sunny Day",     Type::Fire,       0,   0,  5,  0, Effect::SunnyDay,     0, EVERYONE, NO_FLAGS),
    mv(MoveId::RainDance,    "Rain Dance",    Type::Water,      0,   0,  5,  0, Effect::RainDance,    0, EVERYONE, NO_FLAGS),
    mv(MoveId::Hail,         "Hail",          Type::Ice,        0,   0, 10,  0, Effect::Hail,         0, EVERYONE, NO_FLAGS),
    mv(MoveId::SkyAttack,    "Sky Attack",    Type::Flying,   140,  90,  5,  0, Effect::SkyAttack,   30, FOE, RANGED_HIT),
    mv(MoveId::BatonPass,    "Baton Pass",    Type::Normal,     0,   0, 40,  0, Effect::BatonPass,    0, SELF, NO_FLAGS),
    mv(MoveId::Pursuit,      "Pursuit",       Type::Dark,      40, 100, 20,  0, Effect::Pursuit,      0, FOE, CONTACT_HIT),
    mv(MoveId::PerishSong,   "Perish Song",   Type::Normal,     0,   0,  5,  0, Effect::PerishSong,   0, EVERYONE, NO_FLAGS),
    mv(MoveId::MagicCoat,    "Magic Coat",    Type::Psychic,    0,   0, 15,  4, Effect::MagicCoat,    0, SELF, NO_FLAGS),
    mv(MoveId::Spikes,       "Spikes",        Type::Ground,     0,   0, 20,  0, Effect::Spikes,       0, FOE_SIDE, NO_FLAGS),
    mv(MoveId::Protect,      "Protect",       Type::Normal,     0,   0, 10,  3, Effect::Protect,      0, SELF, NO_FLAGS),
    mv(MoveId::Substitute,   "Substitute",    Type::Normal,     0,   0, 10,  0, Effect::Substitute,   0, SELF, SNATCHABLE),
    mv(MoveId::LeechSeed,    "Leech Seed",    Type::Grass,      0,  90, 10,  0, Effect::LeechSeed,    0, FOE, STATUS_COATED),
    mv(MoveId::FocusEnergy,  "Focus Energy",  Type::Normal,     0,   0, 30,  0, Effect::FocusEnergy,  0, SELF, SNATCHABLE),
    mv(MoveId::Thunderbolt,  "Thunderbolt",   Type::Electric,  95, 100, 15,  0, Effect::ParalyzeHit, 10, FOE, RANGED_HIT),
    mv(MoveId::Thunder,      "Thunder",       Type::Electric, 120,  70, 10,  0, Effect::Thunder,     30, FOE, RANGED_HIT),
    mv(MoveId::Flamethrower, "Flamethrower",  Type::Fire,      95, 100, 15,  0, Effect::BurnHit,     10, FOE, RANGED_HIT),
    mv(MoveId::FireBlast,    "Fire Blast",    Type::Fire,     120,  85,  5,  0, Effect::BurnHit,     10, FOE, RANGED_HIT),
    mv(MoveId::IceBeam,      "Ice Beam",      Type::Ice,       95, 100, 10,  0, Effect::FreezeHit,   10, FOE, RANGED_HIT),
    mv(MoveId::Blizzard,     "Blizzard",      Type::Ice,      120,  70,  5,  0, Effect::FreezeHit,   10, FOE, RANGED_HIT),
    mv(MoveId::Surf,         "Surf",          Type::Water,     95, 100, 15,  0, Effect::Hit,          0, FOE, RANGED_HIT),
    mv(MoveId::HydroPump,    "Hydro Pump",    Type::Water,    120,  80,  5,  0, Effect::Hit,          0, FOE, RANGED_HIT),
    mv(MoveId::Earthquake,   "Earthquake",    Type::Ground,   100, 100, 10,  0, Effect::Earthquake,   0, FOE, RANGED_HIT),
    mv(MoveId::Psychic,      "Psychic",       Type::Psychic,   90, 100, 10,  0, Effect::SpDefDownHit, 10, FOE, RANGED_HIT),
    mv(MoveId::Bite,         "Bite",          Type::Dark,      60, 100, 25,  0, Effect::FlinchHit,   30, FOE, CONTACT_HIT),
    mv(MoveId::Headbutt,     "Headbutt",      Type::Normal,    70, 100, 15,  0, Effect::FlinchHit,   30, FOE, CONTACT_HIT),
    mv(MoveId::RockSlide,    "Rock Slide",    Type::Rock,      75,  90, 10,  0, Effect::FlinchHit,   30, FOE, RANGED_HIT),
    mv(MoveId::AerialAce,    "Aerial Ace",    Type::Flying,    60,   0, 20,  0, Effect::AlwaysHit,    0, FOE, CONTACT_HIT),
    mv(MoveId::Swift,        "Swift",         Type::Normal,    60,   0, 20,  0, Effect::AlwaysHit,    0, FOE, RANGED_HIT),
    mv(MoveId::DoubleKick,   "Double Kick",   Type::Fighting,  30, 100, 30,  0, Effect::DoubleHit,    0, FOE, CONTACT_HIT),
    mv(MoveId::FuryAttack,   "Fury Attack",   Type::Normal,    15,  85, 20,  0, Effect::MultiHit,     0, FOE, CONTACT_HIT),
    mv(MoveId::PinMissile,   "Pin Missile",   Type::Bug,       14,  85, 20,  0, Effect::MultiHit,     0, FOE, RANGED_HIT),
    mv(MoveId::TripleKick,   "Triple Kick",   Type::Fighting,  10,  90, 10,  0, Effect::TripleKick,   0, FOE, CONTACT_HIT),
    mv(MoveId::Agility,      "Agility",       Type::Psychic,    0,   0, 30,  0, Effect::SpdUp2,       0, SELF, SNATCHABLE),
    mv(MoveId::IronDefense,  "Iron Defense",  Type::Steel,      0,   0, 15,  0, Effect::DefUp2,       0, SELF, SNATCHABLE),
    mv(MoveId::DoubleTeam,   "Double Team",   Type::Normal,     0,   0, 15,  0, Effect::EvaUp,        0, SELF, SNATCHABLE),
    mv(MoveId::SandAttack,   "Sand-Attack",   Type::Ground,     0, 100, 15,  0, Effect::AccDown,      0, FOE, STATUS_COATED),
    mv(MoveId::Screech,      "Screech",       Type::Normal,     0,  85, 40,  0, Effect::DefDown2,     0, FOE, STATUS_COATED),
    mv(MoveId::TailWhip,     "Tail Whip",     Type::Normal,     0, 100, 30,  0, Effect::DefDown,      0, FOE, STATUS_COATED),
    mv(MoveId::Leer,         "Leer",          Type::Normal,     0, 100, 30,  0, Effect::DefDown,      0, FOE, STATUS_COATED),
    mv(MoveId::Growth,       "Growth",        Type::Normal,     0,   0, 40,  0, Effect::SpAtkUp,      0, SELF, SNATCHABLE),
    mv(MoveId::Crunch,       "Crunch",        Type::Dark,      80, 100, 15,  0, Effect::SpDefDownHit, 20, FOE, CONTACT_HIT),
    mv(MoveId::ShadowBall,   "Shadow Ball",   Type::Ghost,     80, 100, 15,  0, Effect::SpDefDownHit, 20, FOE, RANGED_HIT),
    mv(MoveId::AuroraBeam,   "Aurora Beam",   Type::Ice,       65, 100, 20,  0, Effect::AtkDownHit,  10, FOE, RANGED_HIT),
    mv(MoveId::Acid,         "Acid",          Type::Poison,    40, 100, 30,  0, Effect::DefDownHit,  10, FOE, RANGED_HIT),
    mv(MoveId::BodySlam,     "Body Slam",     Type::Normal,    85, 100, 15,  0, Effect::ParalyzeHit, 30, FOE, CONTACT_HIT),
    mv(MoveId::HyperBeam,    "Hyper Beam",    Type::Normal,   150,  90,  5,  0, Effect::Recharge,     0, FOE, RANGED_HIT),
    mv(MoveId::DragonClaw,   "Dragon Claw",   Type::Dragon,    80, 100, 15,  0, Effect::Hit,          0, FOE, CONTACT_HIT),
    mv(MoveId::BrickBreak,   "Brick Break",   Type::Fighting,  75, 100, 15,  0, Effect::BrickBreak,   0, FOE, CONTACT_HIT),
    mv(MoveId::CalmMind,     "Calm Mind",     Type::Psychic,    0,   0, 20,  0, Effect::CalmMind,     0, SELF, SNATCHABLE),
    mv(MoveId::DragonDance,  "Dragon Dance",  Type::Dragon,     0,   0, 20,  0, Effect::DragonDance,  0, SELF, SNATCHABLE),
    mv(MoveId::BulkUp,       "Bulk Up",       Type::Fighting,   0,   0, 20,  0, Effect::BulkUp,       0, SELF, SNATCHABLE),
    mv(MoveId::MeteorMash,   "Meteor Mash",   Type::Steel,    100,  85, 10,  0, Effect::AtkUpHit,    20, FOE, CONTACT_HIT),
    mv(MoveId::Outrage,      "Outrage",       Type::Dragon,    90, 100, 15,  0, Effect::Rampage,      0, FOE, CONTACT_HIT),
    mv(MoveId::Tickle,       "Tickle",        Type::Normal,     0, 100, 20,  0, Effect::Tickle,       0, FOE, STATUS_COATED),
];

#[inline]
pub fn get_move_data(id: MoveId) -> &'static MoveData {
    &MOVES[id as usize]
}

/// Case-insensitive lookup by display name, for host-side team files.
pub fn move_by_name(name: &str) -> Option<MoveId> {
    MOVES
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(name))
        .map(|m| m.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_index_their_own_rows() {
        for (i, row) in MOVES.iter().enumerate() {
            assert_eq!(row.id as usize, i, "row {:?} out of place", row.name);
        }
    }

    #[test]
    fn move_data_access() {
        let pound = get_move_data(MoveId::Pound);
        assert_eq!(pound.power, 40);
        assert_eq!(pound.accuracy, 100);
        assert!(pound.flags.contains(MoveFlags::CONTACT));

        let swift = get_move_data(MoveId::Swift);
        assert_eq!(swift.accuracy, 0, "never-miss moves carry accuracy 0");
    }

    #[test]
    fn priorities_cover_the_gen3_bracket_uses() {
        assert_eq!(get_move_data(MoveId::QuickAttack).priority, 1);
        assert_eq!(get_move_data(MoveId::Protect).priority, 3);
        assert_eq!(get_move_data(MoveId::Tackle).priority, 0);
    }

    #[test]
    fn name_lookup_round_trips() {
        assert_eq!(move_by_name("swords dance"), Some(MoveId::SwordsDance));
        assert_eq!(move_by_name("Sky Attack"), Some(MoveId::SkyAttack));
        assert_eq!(move_by_name("Splash"), None);
    }
}
