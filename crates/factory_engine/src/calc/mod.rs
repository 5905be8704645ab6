//! Pure calculation kernels.
//!
//! Everything here is a deterministic function of its inputs except where a
//! draw is explicitly part of the Gen III mechanic (accuracy roll, critical
//! roll, damage variance), and those draws go through [`crate::rng`] so a
//! seeded battle replays bit-identically.

pub mod accuracy;
pub mod critical;
pub mod damage;
pub mod speed;
pub mod stages;
pub mod stats;

pub use accuracy::{check_accuracy, effective_accuracy};
pub use critical::{crit_stage, roll_critical, CRIT_MULTIPLIER, MAX_CRIT_STAGE};
pub use damage::{calculate_damage, DamageParams, DamageResult};
pub use speed::{determine_turn_order, effective_speed, TurnOrder};
pub use stages::{apply_stat_stage, clamp_stat_stage, MAX_STAT_STAGE, MIN_STAT_STAGE};
pub use stats::{calc_hp, calc_stat, calc_stat_block, StatBlock};
