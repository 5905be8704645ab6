//! Move identities, flags, targeting, and effect tags.
//!
//! The effect tag is the key into the effect registry: every move names one
//! tag, and the registry maps tags to effect compositions (unmapped tags
//! deterministically fall back to the plain hit composition).

mod data;

pub use data::{get_move_data, move_by_name, MoveId, MOVES};

use bitflags::bitflags;

use crate::types::Type;

bitflags! {
    /// Per-move behavioural flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MoveFlags: u8 {
        const CONTACT      = 1 << 0;
        const PROTECT      = 1 << 1;
        const MAGIC_COAT   = 1 << 2;
        const SNATCH       = 1 << 3;
        const MIRROR_MOVE  = 1 << 4;
        const KINGS_ROCK   = 1 << 5;
        // Two reserved bits kept for wire-format stability.
        const RESERVED_1   = 1 << 6;
        const RESERVED_2   = 1 << 7;
    }
}

/// Shorthand for the common full-contact physical profile.
pub(crate) const CONTACT_HIT: MoveFlags = MoveFlags::CONTACT
    .union(MoveFlags::PROTECT)
    .union(MoveFlags::MIRROR_MOVE)
    .union(MoveFlags::KINGS_ROCK);

/// Shorthand for the common projectile profile.
pub(crate) const RANGED_HIT: MoveFlags = MoveFlags::PROTECT
    .union(MoveFlags::MIRROR_MOVE)
    .union(MoveFlags::KINGS_ROCK);

/// Shorthand for reflectable status moves.
pub(crate) const STATUS_COATED: MoveFlags = MoveFlags::PROTECT
    .union(MoveFlags::MAGIC_COAT)
    .union(MoveFlags::MIRROR_MOVE);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum MoveTarget {
    #[default]
    Selected,
    Depends,
    User,
    Random,
    Both,
    OpponentsField,
    UserOrAlly,
    FoesAndAlly,
    UserAndAllies,
}

/// Static move data row. Accuracy 0 means the move never misses.
#[derive(Debug, Clone, Copy)]
pub struct MoveData {
    pub id: MoveId,
    pub name: &'static str,
    pub move_type: Type,
    pub power: u8,
    pub accuracy: u8,
    pub pp: u8,
    pub priority: i8,
    pub effect: Effect,
    pub effect_chance: u8,
    pub target: MoveTarget,
    pub flags: MoveFlags,
}

/// Move effect tags, grouped the way the Gen III effect inventory groups
/// them. The registry implements a subset; the rest resolve to the hit
/// fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Effect {
    #[default]
    None = 0,

    // === Hit ===
    Absorb,
    AccDownHit,
    AllStatsUpHit,
    AtkDownHit,
    AtkUpHit,
    BeatUp,
    BlazeKick,
    BrickBreak,
    BurnHit,
    ConfuseHit,
    Counter,
    DefDownHit,
    DefUpHit,
    DoubleEdge,
    DoubleHit,
    DragonRage,
    DreamEater,
    Earthquake,
    Endeavor,
    Eruption,
    EvaDownHit,
    Explosion,
    Facade,
    FakeOut,
    FalseSwipe,
    Flail,
    FlinchHit,
    FlinchMinimizeHit,
    FreezeHit,
    Frustration,
    FuryCutter,
    Gust,
    HiddenPower,
    HighCritical,
    Hit,
    LevelDamage,
    LowKick,
    Magnitude,
    MirrorCoat,
    MultiHit,
    Ohko,
    ParalyzeHit,
    PoisonFang,
    PoisonHit,
    PoisonTail,
    Present,
    Psywave,
    Pursuit,
    QuickAttack,
    Recoil,
    RecoilIfMiss,
    Return,
    Revenge,
    Rollout,
    SecretPower,
    SkyUppercut,
    SmellingSalt,
    SonicBoom,
    SpAtkDownHit,
    SpDefDownHit,
    SpdDownHit,
    SuperFang,
    ThawHit,
    Thunder,
    Trap,
    TriAttack,
    TripleKick,
    Twineedle,
    Twister,
    VitalThrow,
    WeatherBall,

    // === Stat ===
    AccDown,
    AccDown2,
    AccUp,
    AccUp2,
    AtkDown,
    AtkDown2,
    AtkUp,
    AtkUp2,
    BellyDrum,
    BulkUp,
    CalmMind,
    CosmicPower,
    DefenseCurl,
    DefDown,
    DefDown2,
    DefUp,
    DefUp2,
    DragonDance,
    EvaDown,
    EvaDown2,
    EvaUp,
    EvaUp2,
    Flatter,
    FocusEnergy,
    Haze,
    Minimize,
    PsychUp,
    SpAtkDown,
    SpAtkDown2,
    SpAtkUp,
    SpAtkUp2,
    SpDefDown,
    SpDefDown2,
    SpDefUp,
    SpDefUp2,
    SpdDown,
    SpdDown2,
    SpdUp,
    SpdUp2,
    Swagger,
    Tickle,

    // === Status ===
    Attract,
    Confuse,
    Curse,
    Disable,
    Encore,
    HealBell,
    LeechSeed,
    Moonlight,
    MorningSun,
    Nightmare,
    PainSplit,
    Paralyze,
    Poison,
    Refresh,
    Rest,
    RestoreHp,
    Sleep,
    SoftBoiled,
    Spite,
    Synthesis,
    Taunt,
    Torment,
    Toxic,
    WillOWisp,
    Yawn,

    // === Field / side ===
    Endure,
    FollowMe,
    FutureSight,
    Hail,
    Ingrain,
    KnockOff,
    LightScreen,
    MagicCoat,
    Mist,
    MudSport,
    Protect,
    RainDance,
    RapidSpin,
    Recycle,
    Reflect,
    Safeguard,
    Sandstorm,
    Snatch,
    Spikes,
    Substitute,
    SunnyDay,
    Trick,
    WaterSport,
    Wish,

    // === Composite ===
    AlwaysHit,
    Assist,
    BatonPass,
    Bide,
    Camouflage,
    Charge,
    Conversion,
    Conversion2,
    DestinyBond,
    FocusPunch,
    Foresight,
    Grudge,
    HelpingHand,
    Imprison,
    LockOn,
    MeanLook,
    Memento,
    Metronome,
    Mimic,
    MirrorMove,
    NaturePower,
    Overheat,
    PayDay,
    PerishSong,
    Rage,
    Rampage,
    RazorWind,
    Recharge,
    Roar,
    RolePlay,
    SemiInvulnerable,
    Sketch,
    SkillSwap,
    SkullBash,
    SkyAttack,
    SleepTalk,
    Snore,
    SolarBeam,
    SpitUp,
    Splash,
    Stockpile,
    Superpower,
    Swallow,
    TeeterDance,
    Teleport,
    Thief,
    Transform,
    Uproar,
}
