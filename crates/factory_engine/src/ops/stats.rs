//! Stat-stage manipulation.
//!
//! `STAT` const parameters index [`crate::state::stage`]; `DELTA` is the
//! signed stage change. A change that cannot move the stage (already at a
//! clamp) sets `result.failed` so the host can report "won't go any
//! higher".

use crate::calc::clamp_stat_stage;
use crate::context::BattleContext;
use crate::dsl::{DamageApplied, Domains, EffectApplied, Genesis, Op};
use crate::rng;

/// Shift one of the attacker's stages.
pub struct ModifyUserStat<const STAT: usize, const DELTA: i8>;

impl<const STAT: usize, const DELTA: i8> Op for ModifyUserStat<STAT, DELTA> {
    const DOMAINS: Domains = Domains::SLOT;
    type Input = Genesis;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        let current = ctx.attacker_slot().stages[STAT];
        let next = clamp_stat_stage(current, DELTA);
        if next == current {
            ctx.result.failed = true;
            return;
        }
        ctx.attacker_slot_mut().stages[STAT] = next;
    }
}

/// Shift one of the defender's stages. Mist and the stat-guard abilities
/// block drops from the opponent.
pub struct ModifyDefenderStat<const STAT: usize, const DELTA: i8>;

impl<const STAT: usize, const DELTA: i8> Op for ModifyDefenderStat<STAT, DELTA> {
    const DOMAINS: Domains = Domains::SLOT;
    type Input = Genesis;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        if ctx.result.missed {
            return;
        }
        if DELTA < 0 {
            if ctx.defender_side().has_mist() {
                ctx.result.failed = true;
                return;
            }
            if ctx.defender_active().ability.blocks_stat_drops() {
                ctx.result.failed = true;
                return;
            }
        }

        let current = ctx.defender_slot().stages[STAT];
        let next = clamp_stat_stage(current, DELTA);
        if next == current {
            ctx.result.failed = true;
            return;
        }
        ctx.defender_slot_mut().stages[STAT] = next;
    }
}

/// Secondary-effect stat shift, gated on a percentage roll (`CHANCE`, or
/// the move's effect chance when 0) and skipped on a miss. Unlike the
/// primary ops this never reports failure.
pub struct TryModifyDefenderStat<const STAT: usize, const DELTA: i8, const CHANCE: u8>;

impl<const STAT: usize, const DELTA: i8, const CHANCE: u8> Op
    for TryModifyDefenderStat<STAT, DELTA, CHANCE>
{
    const DOMAINS: Domains = Domains::SLOT;
    type Input = DamageApplied;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        if ctx.result.missed {
            return;
        }
        let chance = crate::ops::status::effective_chance(ctx, CHANCE);
        if chance == 0 {
            return;
        }
        if chance < 100 && rng::rand_below(100) >= u16::from(chance) {
            return;
        }
        if DELTA < 0
            && (ctx.defender_side().has_mist() || ctx.defender_active().ability.blocks_stat_drops())
        {
            return;
        }

        let current = ctx.defender_slot().stages[STAT];
        ctx.defender_slot_mut().stages[STAT] = clamp_stat_stage(current, DELTA);
    }
}

/// Haze: zero all seven stages on every active slot.
pub struct ResetAllStats;

impl Op for ResetAllStats {
    const DOMAINS: Domains = Domains::SLOT;
    type Input = Genesis;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        let count = ctx.active_slot_count() as usize;
        for slot in ctx.state.slots.iter_mut().take(count) {
            slot.stages = [0; crate::state::STAGE_COUNT];
        }
    }
}
