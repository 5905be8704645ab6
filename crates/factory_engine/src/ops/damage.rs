//! Damage calculation, application, and the HP-shift family.

use crate::calc::{self, DamageParams};
use crate::context::BattleContext;
use crate::dsl::{
    AccuracyResolved, DamageApplied, DamageCalculated, Domains, EffectApplied, Genesis, Op,
};
use crate::items::{self, PreDamageApplyEvent, PreDamageCalcEvent};
use crate::moves::Effect;
use crate::state::Volatiles;

/// Compute damage with the Gen III kernel and stash it in the result.
///
/// Builds the transient parameter payload, lets OnPreDamageCalc item hooks
/// adjust it on the accuracy -> damage boundary, then runs the pure kernel.
pub struct CalculateDamage;

impl Op for CalculateDamage {
    const DOMAINS: Domains = Domains::SLOT.union(Domains::MON).union(Domains::TRANSIENT);
    type Input = AccuracyResolved;
    type Output = DamageCalculated;

    fn execute(ctx: &mut BattleContext<'_>) {
        if ctx.result.missed {
            ctx.result.damage = 0;
            return;
        }

        let is_physical = ctx.move_data.move_type.is_physical();
        let attacker = *ctx.attacker_active();
        let defender = *ctx.defender_active();

        let attack = if ctx.overrides.attack > 0 {
            ctx.overrides.attack
        } else if is_physical {
            attacker.attack
        } else {
            attacker.sp_attack
        };
        let defense = if ctx.overrides.defense > 0 {
            ctx.overrides.defense
        } else if is_physical {
            defender.defense
        } else {
            defender.sp_defense
        };

        let (attack_stage, defense_stage) = if is_physical {
            (
                ctx.attacker_slot().stages[crate::state::stage::ATK],
                ctx.defender_slot().stages[crate::state::stage::DEF],
            )
        } else {
            (
                ctx.attacker_slot().stages[crate::state::stage::SP_ATK],
                ctx.defender_slot().stages[crate::state::stage::SP_DEF],
            )
        };

        let base_crit_stage = calc::crit_stage(
            ctx.attacker_slot().has(Volatiles::FOCUS_ENERGY),
            ctx.move_data.effect == Effect::HighCritical,
            0,
        );

        let mut event = PreDamageCalcEvent {
            attack,
            defense,
            crit_stage: base_crit_stage,
            power: ctx.effective_power(),
            holder_is_attacker: true,
        };
        items::fire_pre_damage_calc(ctx, &mut event);

        let params = DamageParams {
            level: attacker.level,
            power: event.power,
            move_type: ctx.move_data.move_type,
            attack: event.attack,
            attack_stage,
            attacker_type1: attacker.type1,
            attacker_type2: attacker.type2,
            defense: event.defense,
            defense_stage,
            defender_type1: defender.type1,
            defender_type2: defender.type2,
            crit_stage: event.crit_stage,
            is_critical: false,
            skip_random: false,
        };

        let result = calc::calculate_damage(&params);
        ctx.result.damage = result.damage;
        ctx.result.effectiveness = result.effectiveness;
        ctx.result.critical = result.critical;
    }
}

/// Fixed-damage setter (Dragon Rage, Sonic Boom).
pub struct SetFixedDamage<const AMOUNT: u16>;

impl<const AMOUNT: u16> Op for SetFixedDamage<AMOUNT> {
    const DOMAINS: Domains = Domains::SLOT.union(Domains::MON);
    type Input = AccuracyResolved;
    type Output = DamageCalculated;

    fn execute(ctx: &mut BattleContext<'_>) {
        ctx.result.damage = if ctx.result.missed { 0 } else { AMOUNT };
    }
}

/// Commit calculated damage to the defender (or their substitute).
///
/// Substitute takes the hit first; on overflow the substitute breaks and the
/// remainder is discarded (Gen III). Otherwise OnPreDamageApply hooks may
/// reduce the damage (Focus Band) before the HP write, and the possibly
/// reduced number is written back to the result.
pub struct ApplyDamage;

impl Op for ApplyDamage {
    const DOMAINS: Domains = Domains::SLOT.union(Domains::MON);
    type Input = DamageCalculated;
    type Output = DamageApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        if ctx.result.missed || ctx.result.damage == 0 {
            return;
        }

        let damage = ctx.result.damage;

        if ctx.defender_has_substitute() {
            let slot = ctx.defender_slot_mut();
            if damage >= slot.substitute_hp {
                slot.substitute_hp = 0;
                slot.clear(Volatiles::SUBSTITUTE);
            } else {
                slot.substitute_hp -= damage;
            }
            return;
        }

        let mut event = PreDamageApplyEvent {
            damage,
            defender_hp: ctx.defender_mon().current_hp,
            survived_fatal: false,
        };
        items::fire_pre_damage_apply(ctx, &mut event);

        ctx.result.damage = event.damage;
        ctx.defender_mon_mut().apply_damage(event.damage);
    }
}

/// Heal the attacker by a percentage of the damage dealt (Absorb family).
/// No HP is restored when a substitute soaked the hit.
pub struct DrainHp<const PERCENT: u8>;

impl<const PERCENT: u8> Op for DrainHp<PERCENT> {
    const DOMAINS: Domains = Domains::MON;
    type Input = DamageApplied;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        if ctx.result.missed || ctx.result.damage == 0 || ctx.defender_has_substitute() {
            return;
        }
        let heal = (u32::from(ctx.result.damage) * u32::from(PERCENT) / 100).max(1) as u16;
        ctx.attacker_mon_mut().heal(heal);
    }
}

pub type DrainHalfHp = DrainHp<50>;

/// Recoil a percentage of the damage dealt onto the attacker.
pub struct Recoil<const PERCENT: u8>;

impl<const PERCENT: u8> Op for Recoil<PERCENT> {
    const DOMAINS: Domains = Domains::MON;
    type Input = DamageApplied;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        if ctx.result.missed || ctx.result.damage == 0 {
            return;
        }
        let recoil = (u32::from(ctx.result.damage) * u32::from(PERCENT) / 100).max(1) as u16;
        ctx.attacker_mon_mut().apply_damage(recoil);
    }
}

pub type RecoilQuarter = Recoil<25>;

/// Heal the attacker by a percentage of max HP; fails at full health.
pub struct HealUser<const PERCENT: u8>;

impl<const PERCENT: u8> Op for HealUser<PERCENT> {
    const DOMAINS: Domains = Domains::MON;
    type Input = Genesis;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        let mon = ctx.attacker_mon();
        if mon.current_hp == mon.max_hp {
            ctx.result.failed = true;
            return;
        }
        let heal = (u32::from(mon.max_hp) * u32::from(PERCENT) / 100).max(1) as u16;
        ctx.attacker_mon_mut().heal(heal);
    }
}

pub type HealHalf = HealUser<50>;

/// Close out one strike of a multi-hit move. The transition it drives
/// crosses the EffectApplied boundary, which is where the post-damage item
/// reactions (Shell Bell, King's Rock) fire — so each strike's damage gets
/// its own reaction instead of only the last one's.
pub struct ResolveStrike;

impl Op for ResolveStrike {
    const DOMAINS: Domains = Domains::SLOT.union(Domains::MON);
    type Input = DamageApplied;
    type Output = EffectApplied;

    fn execute(_ctx: &mut BattleContext<'_>) {}
}

/// Triple Kick: the strike power ramps 10 / 20 / 30 with the iteration
/// counter. Stays at Genesis; the strike's own ops advance the pipeline.
pub struct ScaleTripleKickPower;

impl Op for ScaleTripleKickPower {
    const DOMAINS: Domains = Domains::TRANSIENT;
    type Input = Genesis;
    type Output = Genesis;

    fn execute(ctx: &mut BattleContext<'_>) {
        ctx.overrides.power = 10 * (u16::from(ctx.loop_iteration) + 1);
    }
}
