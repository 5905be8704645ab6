//! Core battle engine for a Gen III singles Battle Factory simulator.
//!
//! Given two rental teams and one action per side per turn, the engine
//! determines order, resolves each move through a staged, compile-time
//! validated effect pipeline, applies held-item hooks at stage boundaries,
//! and reports the battle outcome.
//!
//! # Architecture
//!
//! - [`state`] — the four battle-state domains (field, side, slot, mon)
//!   owned by a single arena, plus the cached active-mon views.
//! - [`calc`] — pure Gen III kernels: stats, stages, accuracy, crits,
//!   damage, speed.
//! - [`dsl`] — the type-state pipeline: ops declare domain masks and
//!   stage pairs, and illegal compositions fail to compile.
//! - [`ops`] / [`effects`] — the atomic operations and the named
//!   compositions the effect registry dispatches to.
//! - [`items`] — held-item hooks fired at stage and turn boundaries.
//! - [`engine`] — the turn orchestrator.
//! - [`setup`] — rental-to-battle expansion.
//! - [`rng`] — the seedable process-wide RNG collaborator.
//!
//! # Determinism
//!
//! With a non-zero seed handed to [`rng::initialize`], the same initial
//! state and action sequence replays bit-identically.
//!
//! ```
//! use factory_engine::engine::{BattleAction, BattleEngine, BattleResult};
//! use factory_engine::items::ItemId;
//! use factory_engine::moves::MoveId;
//! use factory_engine::natures::NatureId;
//! use factory_engine::setup::{EvSpread, Rental};
//! use factory_engine::species::SpeciesId;
//!
//! factory_engine::rng::initialize(0xBA77_1E);
//!
//! let lead = Rental {
//!     species: SpeciesId::Snorlax,
//!     moves: [MoveId::BodySlam, MoveId::Headbutt, MoveId::Earthquake, MoveId::Protect],
//!     held_item: ItemId::Leftovers,
//!     nature: NatureId::Adamant,
//!     ev_spread: EvSpread::HP.union(EvSpread::ATK),
//!     ability_slot: 0,
//! };
//! let foe = Rental {
//!     species: SpeciesId::Starmie,
//!     moves: [MoveId::Surf, MoveId::IceBeam, MoveId::Thunderbolt, MoveId::Recover],
//!     held_item: ItemId::ShellBell,
//!     nature: NatureId::Timid,
//!     ev_spread: EvSpread::SP_ATK.union(EvSpread::SPD),
//!     ability_slot: 1,
//! };
//!
//! let mut battle = BattleEngine::init(&lead, &foe, 50).unwrap();
//! battle
//!     .execute_turn(BattleAction::use_move(0), BattleAction::use_move(0))
//!     .unwrap();
//! assert_eq!(battle.turn(), 1);
//! assert!(matches!(battle.result(), BattleResult::Ongoing | BattleResult::P1Wins));
//! ```

pub mod calc;
pub mod context;
pub mod dsl;
pub mod effects;
pub mod engine;
pub mod error;
pub mod items;
pub mod moves;
pub mod natures;
pub mod ops;
pub mod rng;
pub mod setup;
pub mod species;
pub mod state;
pub mod types;

pub use engine::{BattleAction, BattleEngine, BattleResult};
pub use error::EngineError;
