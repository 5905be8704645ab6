//! Switch requests and all-battler effects.
//!
//! These ops do not perform switches; they record intent in the result and
//! the orchestrator honors the flags once the effect returns.

use crate::context::BattleContext;
use crate::dsl::{Domains, EffectApplied, Genesis, Op, Terminus};
use crate::state::Volatiles;

/// Baton Pass: request a switch-out that carries the transferable slot
/// state to the replacement.
pub struct RequestBatonPass;

impl Op for RequestBatonPass {
    const DOMAINS: Domains = Domains::SLOT;
    type Input = Genesis;
    type Output = Terminus;

    fn execute(ctx: &mut BattleContext<'_>) {
        ctx.result.baton_pass = true;
        ctx.result.switch_out = true;
    }
}

/// Pursuit: record that this attacker will intercept a fleeing target.
pub struct MarkPursuitReady;

impl Op for MarkPursuitReady {
    const DOMAINS: Domains = Domains::SLOT;
    type Input = Genesis;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        ctx.result.pursuit_intercept = true;
        ctx.result.pursuit_user_slot = ctx.attacker;
    }
}

/// Perish Song: every active, standing battler that is not already singing
/// starts the three-turn countdown. Fails when nobody new is affected.
pub struct ApplyPerishSong;

impl Op for ApplyPerishSong {
    const DOMAINS: Domains = Domains::SLOT;
    type Input = Genesis;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        let count = ctx.active_slot_count() as usize;
        let mut any_affected = false;

        for i in 0..count {
            if ctx.state.mons[i].is_fainted() {
                continue;
            }
            let slot = &mut ctx.state.slots[i];
            if slot.has(Volatiles::PERISH_SONG) {
                continue;
            }
            slot.set(Volatiles::PERISH_SONG);
            slot.perish_count = 3;
            any_affected = true;
        }

        if !any_affected {
            ctx.result.failed = true;
        }
    }
}
