//! Primary status application and volatile-state ops.

use crate::context::BattleContext;
use crate::dsl::{
    AccuracyResolved, DamageApplied, Domains, EffectApplied, FaintChecked, Genesis, Op,
};
use crate::rng;
use crate::species::AbilityId;
use crate::state::{Status, Volatiles};
use crate::types::Type;

/// Immunities consulted before any primary status lands: existing status,
/// type immunities, safeguard, and the guard abilities.
fn status_blocked(ctx: &BattleContext<'_>, status: Status) -> bool {
    if ctx.defender_mon().has_status() {
        return true;
    }
    if ctx.defender_side().has_safeguard() {
        return true;
    }

    let active = ctx.defender_active();
    let has_type = |t: Type| active.type1 == t || active.type2 == t;
    let type_blocked = match status {
        Status::Burn => has_type(Type::Fire),
        Status::Freeze => has_type(Type::Ice),
        Status::Poison | Status::Toxic => has_type(Type::Poison) || has_type(Type::Steel),
        Status::Paralysis => has_type(Type::Electric),
        _ => false,
    };
    if type_blocked {
        return true;
    }

    matches!(
        (status, active.ability),
        (Status::Paralysis, AbilityId::Limber)
            | (Status::Poison | Status::Toxic, AbilityId::Immunity)
            | (Status::Burn, AbilityId::WaterVeil)
            | (Status::Sleep, AbilityId::Insomnia | AbilityId::VitalSpirit)
            | (Status::Freeze, AbilityId::MagmaArmor)
    )
}

fn commit_status(ctx: &mut BattleContext<'_>, status: Status) {
    let mon = ctx.defender_mon_mut();
    mon.status = status;
    match status {
        // Gen III sleep lasts 1-3 turns, uniform.
        Status::Sleep => mon.sleep_turns = rng::rand_below(3) as u8 + 1,
        Status::Toxic => mon.toxic_counter = 1,
        _ => {}
    }
    ctx.result.status_applied = true;
}

/// Resolve an op's chance parameter: a zero const defers to the move's
/// `effect_chance` datum.
#[inline]
pub(crate) fn effective_chance(ctx: &BattleContext<'_>, chance: u8) -> u8 {
    if chance > 0 {
        chance
    } else {
        ctx.move_data.effect_chance
    }
}

/// Secondary status rider: skipped on a miss or when the substitute soaked
/// the hit, gated on a percentage roll (`CHANCE`, or the move's own
/// effect chance when `CHANCE` is 0), silent when blocked.
pub struct TryApplyStatusChance<const STATUS: u8, const CHANCE: u8>;

impl<const STATUS: u8, const CHANCE: u8> Op for TryApplyStatusChance<STATUS, CHANCE> {
    const DOMAINS: Domains = Domains::MON;
    type Input = DamageApplied;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        if ctx.result.missed || ctx.defender_has_substitute() {
            return;
        }
        let chance = effective_chance(ctx, CHANCE);
        if chance == 0 {
            return;
        }
        if chance < 100 && rng::rand_below(100) >= u16::from(chance) {
            return;
        }
        let status = Status::from_u8(STATUS);
        if status_blocked(ctx, status) {
            return;
        }
        commit_status(ctx, status);
    }
}

/// Pure status move: the status IS the effect, so a block is a failure.
pub struct ApplyStatusMove<const STATUS: u8>;

impl<const STATUS: u8> Op for ApplyStatusMove<STATUS> {
    const DOMAINS: Domains = Domains::MON;
    type Input = Genesis;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        if ctx.result.missed {
            return;
        }
        let status = Status::from_u8(STATUS);
        if ctx.defender_has_substitute() || status_blocked(ctx, status) {
            ctx.result.failed = true;
            return;
        }
        commit_status(ctx, status);
    }
}

/// Flinch rider: only lands on a target that has not yet moved this turn.
/// `CHANCE` 0 defers to the move's effect chance; 100 means guaranteed on
/// hit.
pub struct TryApplyFlinchChance<const CHANCE: u8>;

impl<const CHANCE: u8> Op for TryApplyFlinchChance<CHANCE> {
    const DOMAINS: Domains = Domains::SLOT;
    type Input = DamageApplied;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        if ctx.result.missed || ctx.defender_slot().moved_this_turn {
            return;
        }
        let chance = effective_chance(ctx, CHANCE);
        if chance == 0 {
            return;
        }
        if chance < 100 && rng::rand_below(100) >= u16::from(chance) {
            return;
        }
        ctx.defender_slot_mut().set(Volatiles::FLINCHED);
    }
}

/// First half of a two-turn move: record the charged move and end the
/// effect. The strike half clears it next turn.
pub struct BeginCharge;

impl Op for BeginCharge {
    const DOMAINS: Domains = Domains::SLOT;
    type Input = Genesis;
    type Output = FaintChecked;

    fn execute(ctx: &mut BattleContext<'_>) {
        let move_id = ctx.move_data.id;
        let slot = ctx.attacker_slot_mut();
        slot.charging_move = Some(move_id);
        slot.set(Volatiles::CHARGING);
    }
}

pub struct ClearCharge;

impl Op for ClearCharge {
    const DOMAINS: Domains = Domains::SLOT;
    type Input = Genesis;
    type Output = AccuracyResolved;

    fn execute(ctx: &mut BattleContext<'_>) {
        let slot = ctx.attacker_slot_mut();
        slot.charging_move = None;
        slot.clear(Volatiles::CHARGING);
    }
}

/// Magic Coat: bounce eligible status moves for the rest of this turn. The
/// orchestrator performs the actual reflection at dispatch time.
pub struct SetMagicCoat;

impl Op for SetMagicCoat {
    const DOMAINS: Domains = Domains::SLOT;
    type Input = Genesis;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        ctx.attacker_slot_mut().bounce_move = true;
    }
}

/// Focus Energy: prime the crit pipeline; fails when already primed.
pub struct SetFocusEnergy;

impl Op for SetFocusEnergy {
    const DOMAINS: Domains = Domains::SLOT;
    type Input = Genesis;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        if ctx.attacker_slot().has(Volatiles::FOCUS_ENERGY) {
            ctx.result.failed = true;
            return;
        }
        ctx.attacker_slot_mut().set(Volatiles::FOCUS_ENERGY);
    }
}

/// Protect: per-turn protection flag; checked by accuracy resolution.
pub struct SetProtect;

impl Op for SetProtect {
    const DOMAINS: Domains = Domains::SLOT;
    type Input = Genesis;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        ctx.attacker_slot_mut().set(Volatiles::PROTECTED);
    }
}

/// Substitute: pay a quarter of max HP for a decoy with that many hit
/// points. Fails if one is already up or the user cannot pay.
pub struct SetSubstituteOp;

impl Op for SetSubstituteOp {
    const DOMAINS: Domains = Domains::SLOT.union(Domains::MON);
    type Input = Genesis;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        if ctx.attacker_slot().has(Volatiles::SUBSTITUTE) {
            ctx.result.failed = true;
            return;
        }
        let cost = ctx.attacker_mon().max_hp / 4;
        if cost == 0 || ctx.attacker_mon().current_hp <= cost {
            ctx.result.failed = true;
            return;
        }
        ctx.attacker_mon_mut().apply_damage(cost);
        let slot = ctx.attacker_slot_mut();
        slot.substitute_hp = cost;
        slot.set(Volatiles::SUBSTITUTE);
    }
}

/// Leech Seed: plant on the defender and remember the planter's slot for
/// the end-of-turn drain. Grass types and substitutes shake it off.
pub struct ApplyLeechSeed;

impl Op for ApplyLeechSeed {
    const DOMAINS: Domains = Domains::SLOT;
    type Input = Genesis;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        if ctx.result.missed {
            return;
        }
        let defender = ctx.defender_active();
        let is_grass = defender.type1 == Type::Grass || defender.type2 == Type::Grass;
        if is_grass || ctx.defender_slot().has(Volatiles::LEECH_SEED) || ctx.defender_has_substitute()
        {
            ctx.result.failed = true;
            return;
        }
        let planter = ctx.attacker;
        let slot = ctx.defender_slot_mut();
        slot.set(Volatiles::LEECH_SEED);
        slot.leech_seed_target = planter;
    }
}

/// Confusion volatile, 2-5 turns.
pub struct ApplyConfusion;

impl Op for ApplyConfusion {
    const DOMAINS: Domains = Domains::SLOT;
    type Input = Genesis;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        if ctx.result.missed {
            return;
        }
        if ctx.defender_slot().has(Volatiles::CONFUSED)
            || ctx.defender_active().ability == AbilityId::OwnTempo
            || ctx.defender_has_substitute()
        {
            ctx.result.failed = true;
            return;
        }
        let turns = rng::rand_below(4) as u8 + 2;
        let slot = ctx.defender_slot_mut();
        slot.set(Volatiles::CONFUSED);
        slot.confusion_turns = turns;
    }
}
