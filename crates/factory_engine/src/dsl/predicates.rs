//! Branch predicates: plain read-only inspectors of the battle context.

use crate::context::BattleContext;
use crate::state::Weather;

pub type Predicate = fn(&BattleContext<'_>) -> bool;

pub mod when {
    use super::*;

    /// Default-branch predicate.
    pub fn always(_: &BattleContext<'_>) -> bool {
        true
    }

    pub fn in_sun(ctx: &BattleContext<'_>) -> bool {
        ctx.field().weather == Weather::Sun
    }

    pub fn in_rain(ctx: &BattleContext<'_>) -> bool {
        ctx.field().weather == Weather::Rain
    }

    pub fn in_sandstorm(ctx: &BattleContext<'_>) -> bool {
        ctx.field().weather == Weather::Sandstorm
    }

    pub fn in_hail(ctx: &BattleContext<'_>) -> bool {
        ctx.field().weather == Weather::Hail
    }

    pub fn no_weather(ctx: &BattleContext<'_>) -> bool {
        ctx.field().weather == Weather::None
    }

    pub fn move_hit(ctx: &BattleContext<'_>) -> bool {
        !ctx.result.missed
    }

    pub fn move_missed(ctx: &BattleContext<'_>) -> bool {
        ctx.result.missed
    }

    pub fn target_alive(ctx: &BattleContext<'_>) -> bool {
        ctx.defender_mon().is_alive()
    }

    pub fn target_fainted(ctx: &BattleContext<'_>) -> bool {
        ctx.defender_mon().is_fainted()
    }

    pub fn is_charging(ctx: &BattleContext<'_>) -> bool {
        ctx.attacker_slot().charging_move.is_some()
    }

    pub fn not_charging(ctx: &BattleContext<'_>) -> bool {
        ctx.attacker_slot().charging_move.is_none()
    }

    /// Multi-strike continuation: the move connected and the target stands.
    pub fn strike_continues(ctx: &BattleContext<'_>) -> bool {
        move_hit(ctx) && target_alive(ctx)
    }
}
