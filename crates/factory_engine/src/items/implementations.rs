//! Item handler implementations.

use crate::calc::MAX_CRIT_STAGE;
use crate::context::BattleContext;
use crate::moves::MoveFlags;
use crate::rng;
use crate::species::SpeciesId;
use crate::state::BattleState;
use crate::types::Type;

use super::events::{
    PostDamageApplyEvent, PreDamageApplyEvent, PreDamageCalcEvent, TurnEndEvent, TurnStartEvent,
};

// ---------------------------------------------------------------------------
// Crit-stage and stat modifiers (OnPreDamageCalc)
// ---------------------------------------------------------------------------

// Scope Lens: +1 crit stage, capped at the guaranteed-crit stage.
pub fn pre_damage_calc_scope_lens(_ctx: &BattleContext<'_>, event: &mut PreDamageCalcEvent) {
    if event.holder_is_attacker && event.crit_stage < MAX_CRIT_STAGE {
        event.crit_stage += 1;
    }
}

// Lucky Punch: +2 crit stages, Chansey only.
pub fn pre_damage_calc_lucky_punch(ctx: &BattleContext<'_>, event: &mut PreDamageCalcEvent) {
    if event.holder_is_attacker && ctx.attacker_active().species == SpeciesId::Chansey {
        event.crit_stage = (event.crit_stage + 2).min(MAX_CRIT_STAGE);
    }
}

// Stick: +2 crit stages, Farfetch'd only.
pub fn pre_damage_calc_stick(ctx: &BattleContext<'_>, event: &mut PreDamageCalcEvent) {
    if event.holder_is_attacker && ctx.attacker_active().species == SpeciesId::Farfetchd {
        event.crit_stage = (event.crit_stage + 2).min(MAX_CRIT_STAGE);
    }
}

// Choice Band: Attack x1.5 on physical moves. The move lock lives in the
// orchestrator, not here.
pub fn pre_damage_calc_choice_band(ctx: &BattleContext<'_>, event: &mut PreDamageCalcEvent) {
    if event.holder_is_attacker && ctx.move_data.move_type.is_physical() {
        event.attack = (u32::from(event.attack) * 3 / 2).min(u32::from(u16::MAX)) as u16;
    }
}

// Light Ball: Pikachu's Special Attack x2.
pub fn pre_damage_calc_light_ball(ctx: &BattleContext<'_>, event: &mut PreDamageCalcEvent) {
    if event.holder_is_attacker
        && ctx.attacker_active().species == SpeciesId::Pikachu
        && !ctx.move_data.move_type.is_physical()
    {
        event.attack = (u32::from(event.attack) * 2).min(u32::from(u16::MAX)) as u16;
    }
}

// Metal Powder: Ditto's Defense x2 (defender-side item).
pub fn pre_damage_calc_metal_powder(ctx: &BattleContext<'_>, event: &mut PreDamageCalcEvent) {
    if !event.holder_is_attacker && ctx.defender_active().species == SpeciesId::Ditto {
        event.defense = (u32::from(event.defense) * 2).min(u32::from(u16::MAX)) as u16;
    }
}

// ---------------------------------------------------------------------------
// Type-boost items: power x1.1 on a matching move type
// ---------------------------------------------------------------------------

fn boost_power_for_type(ctx: &BattleContext<'_>, event: &mut PreDamageCalcEvent, boosted: Type) {
    if event.holder_is_attacker && ctx.move_data.move_type == boosted {
        event.power = (u32::from(event.power) * 110 / 100) as u16;
    }
}

pub fn pre_damage_calc_black_belt(ctx: &BattleContext<'_>, ev: &mut PreDamageCalcEvent) {
    boost_power_for_type(ctx, ev, Type::Fighting);
}

pub fn pre_damage_calc_black_glasses(ctx: &BattleContext<'_>, ev: &mut PreDamageCalcEvent) {
    boost_power_for_type(ctx, ev, Type::Dark);
}

pub fn pre_damage_calc_charcoal(ctx: &BattleContext<'_>, ev: &mut PreDamageCalcEvent) {
    boost_power_for_type(ctx, ev, Type::Fire);
}

pub fn pre_damage_calc_dragon_fang(ctx: &BattleContext<'_>, ev: &mut PreDamageCalcEvent) {
    boost_power_for_type(ctx, ev, Type::Dragon);
}

pub fn pre_damage_calc_hard_stone(ctx: &BattleContext<'_>, ev: &mut PreDamageCalcEvent) {
    boost_power_for_type(ctx, ev, Type::Rock);
}

pub fn pre_damage_calc_magnet(ctx: &BattleContext<'_>, ev: &mut PreDamageCalcEvent) {
    boost_power_for_type(ctx, ev, Type::Electric);
}

pub fn pre_damage_calc_metal_coat(ctx: &BattleContext<'_>, ev: &mut PreDamageCalcEvent) {
    boost_power_for_type(ctx, ev, Type::Steel);
}

pub fn pre_damage_calc_miracle_seed(ctx: &BattleContext<'_>, ev: &mut PreDamageCalcEvent) {
    boost_power_for_type(ctx, ev, Type::Grass);
}

pub fn pre_damage_calc_mystic_water(ctx: &BattleContext<'_>, ev: &mut PreDamageCalcEvent) {
    boost_power_for_type(ctx, ev, Type::Water);
}

pub fn pre_damage_calc_never_melt_ice(ctx: &BattleContext<'_>, ev: &mut PreDamageCalcEvent) {
    boost_power_for_type(ctx, ev, Type::Ice);
}

pub fn pre_damage_calc_poison_barb(ctx: &BattleContext<'_>, ev: &mut PreDamageCalcEvent) {
    boost_power_for_type(ctx, ev, Type::Poison);
}

pub fn pre_damage_calc_sharp_beak(ctx: &BattleContext<'_>, ev: &mut PreDamageCalcEvent) {
    boost_power_for_type(ctx, ev, Type::Flying);
}

pub fn pre_damage_calc_silk_scarf(ctx: &BattleContext<'_>, ev: &mut PreDamageCalcEvent) {
    boost_power_for_type(ctx, ev, Type::Normal);
}

pub fn pre_damage_calc_silver_powder(ctx: &BattleContext<'_>, ev: &mut PreDamageCalcEvent) {
    boost_power_for_type(ctx, ev, Type::Bug);
}

pub fn pre_damage_calc_soft_sand(ctx: &BattleContext<'_>, ev: &mut PreDamageCalcEvent) {
    boost_power_for_type(ctx, ev, Type::Ground);
}

pub fn pre_damage_calc_spell_tag(ctx: &BattleContext<'_>, ev: &mut PreDamageCalcEvent) {
    boost_power_for_type(ctx, ev, Type::Ghost);
}

pub fn pre_damage_calc_twisted_spoon(ctx: &BattleContext<'_>, ev: &mut PreDamageCalcEvent) {
    boost_power_for_type(ctx, ev, Type::Psychic);
}

// ---------------------------------------------------------------------------
// OnPreDamageApply
// ---------------------------------------------------------------------------

// Focus Band: 12% to survive a fatal hit at 1 HP.
pub fn pre_damage_apply_focus_band(_ctx: &BattleContext<'_>, event: &mut PreDamageApplyEvent) {
    if event.damage >= event.defender_hp && rng::rand_below(100) < 12 {
        event.damage = event.defender_hp.saturating_sub(1);
        event.survived_fatal = true;
    }
}

// ---------------------------------------------------------------------------
// OnPostDamageApply
// ---------------------------------------------------------------------------

// King's Rock: 10% flinch after non-fatal damage from an eligible move.
pub fn post_damage_apply_kings_rock(ctx: &BattleContext<'_>, event: &mut PostDamageApplyEvent) {
    if event.damage_dealt > 0
        && !event.target_fainted
        && ctx.move_data.flags.contains(MoveFlags::KINGS_ROCK)
        && rng::rand_below(10) == 0
    {
        event.cause_flinch = true;
    }
}

// Shell Bell: heal an eighth of the damage dealt, minimum 1.
pub fn post_damage_apply_shell_bell(_ctx: &BattleContext<'_>, event: &mut PostDamageApplyEvent) {
    if event.damage_dealt > 0 {
        event.attacker_heal = (event.damage_dealt / 8).max(1);
    }
}

// ---------------------------------------------------------------------------
// Turn boundaries
// ---------------------------------------------------------------------------

// Quick Claw: 20% chance to claim the intra-bracket priority boost.
pub fn turn_start_quick_claw(_state: &BattleState, _slot: u8, event: &mut TurnStartEvent) {
    if rng::rand_below(5) == 0 {
        event.priority_boost = true;
    }
}

// Leftovers: heal a sixteenth of max HP, minimum 1.
pub fn turn_end_leftovers(state: &BattleState, slot: u8, event: &mut TurnEndEvent) {
    let mon = &state.mons[slot as usize];
    if mon.is_alive() {
        event.heal_amount = (mon.max_hp / 16).max(1);
    }
}
