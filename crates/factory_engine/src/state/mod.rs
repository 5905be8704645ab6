//! Battle state, partitioned into the four lifecycle domains.
//!
//! | Domain | Scope        | Lifecycle                        |
//! |--------|--------------|----------------------------------|
//! | Field  | global       | whole battle                     |
//! | Side   | per team     | whole battle                     |
//! | Slot   | per position | cleared on switch-out            |
//! | Mon    | per pokemon  | persists through switches        |
//!
//! The engine owns every instance in a single [`BattleState`] arena and the
//! effect pipeline addresses them by slot id, so there is no pointer
//! aliasing anywhere in effect execution.

mod battle;
mod field;
mod mon;
mod side;
mod slot;

pub use battle::{ActiveMon, BattleState, MAX_BATTLE_SLOTS};
pub use field::{FieldState, FutureSightSlot, Weather, WishSlot};
pub use mon::{MonState, Status};
pub use side::SideState;
pub use slot::{stage, SlotState, Volatiles, NO_SLOT, STAGE_COUNT};
