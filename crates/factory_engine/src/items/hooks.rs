//! Item hook table types.

use crate::context::BattleContext;
use crate::state::BattleState;

use super::events::{
    PostDamageApplyEvent, PreDamageApplyEvent, PreDamageCalcEvent, TurnEndEvent, TurnStartEvent,
};

pub type PreDamageCalcHook = fn(&BattleContext<'_>, &mut PreDamageCalcEvent);
pub type PreDamageApplyHook = fn(&BattleContext<'_>, &mut PreDamageApplyEvent);
pub type PostDamageApplyHook = fn(&BattleContext<'_>, &mut PostDamageApplyEvent);
pub type TurnStartHook = fn(&BattleState, u8, &mut TurnStartEvent);
pub type TurnEndHook = fn(&BattleState, u8, &mut TurnEndEvent);

/// Per-item handler table. One optional handler per event type; an item
/// with no entry for an event is a no-op there.
#[derive(Clone, Copy)]
pub struct ItemHooks {
    pub on_pre_damage_calc: Option<PreDamageCalcHook>,
    pub on_pre_damage_apply: Option<PreDamageApplyHook>,
    pub on_post_damage_apply: Option<PostDamageApplyHook>,
    pub on_turn_start: Option<TurnStartHook>,
    pub on_turn_end: Option<TurnEndHook>,
}

impl ItemHooks {
    pub const NONE: Self = ItemHooks {
        on_pre_damage_calc: None,
        on_pre_damage_apply: None,
        on_post_damage_apply: None,
        on_turn_start: None,
        on_turn_end: None,
    };
}
