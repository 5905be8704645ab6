//! Accuracy resolution.

use crate::calc;
use crate::context::BattleContext;
use crate::dsl::{AccuracyResolved, Domains, Genesis, Op};
use crate::moves::MoveFlags;
use crate::state::{stage, Volatiles};

/// Resolve whether the move connects. Protection is checked first (a
/// protected target makes a protect-affected move miss without a draw);
/// otherwise the Gen III accuracy formula decides.
pub struct CheckAccuracy;

impl Op for CheckAccuracy {
    const DOMAINS: Domains = Domains::SLOT;
    type Input = Genesis;
    type Output = AccuracyResolved;

    fn execute(ctx: &mut BattleContext<'_>) {
        if ctx.attacker != ctx.defender
            && ctx.defender_slot().has(Volatiles::PROTECTED)
            && ctx.move_data.flags.contains(MoveFlags::PROTECT)
        {
            ctx.result.missed = true;
            return;
        }

        let acc_stage = ctx.attacker_slot().stages[stage::ACCURACY];
        let eva_stage = ctx.defender_slot().stages[stage::EVASION];

        let hits = calc::check_accuracy(ctx.move_data.accuracy, acc_stage, eva_stage);
        ctx.result.missed = !hits;
    }
}
