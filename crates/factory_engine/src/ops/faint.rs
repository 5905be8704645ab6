//! Faint observation.
//!
//! These ops mutate nothing: the orchestrator samples the battle result
//! after every faint-capable op, and the stage transition they drive is what
//! fires the post-damage item boundary for the plain hit path.

use crate::context::BattleContext;
use crate::dsl::{DamageApplied, Domains, EffectApplied, FaintChecked, Op};

/// Faint check straight after damage (no secondary effect ran).
pub struct CheckFaint;

impl Op for CheckFaint {
    const DOMAINS: Domains = Domains::MON;
    type Input = DamageApplied;
    type Output = FaintChecked;

    fn execute(ctx: &mut BattleContext<'_>) {
        let _ = ctx.defender_mon().is_fainted();
    }
}

/// Faint check after a secondary effect.
pub struct CheckFaintAfterEffect;

impl Op for CheckFaintAfterEffect {
    const DOMAINS: Domains = Domains::MON;
    type Input = EffectApplied;
    type Output = FaintChecked;

    fn execute(ctx: &mut BattleContext<'_>) {
        CheckFaint::execute(ctx);
    }
}
