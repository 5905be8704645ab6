//! Held items and the stage-boundary hook system.
//!
//! Items never run inside the calculation kernels. Five event types fire at
//! pipeline boundaries; a held-item id routes through a const-built table of
//! function pointers, and items without a handler for an event cost nothing
//! beyond the table load.

mod events;
mod hooks;
mod implementations;
mod registry;

pub use events::{
    PostDamageApplyEvent, PreDamageApplyEvent, PreDamageCalcEvent, TurnEndEvent, TurnStartEvent,
};
pub use hooks::ItemHooks;
pub use registry::ITEM_REGISTRY;

use crate::context::BattleContext;
use crate::dsl::stage::{DamageApplied, EffectApplied, Stage};
use crate::state::{BattleState, SlotState};

/// Held item inventory (Battle Factory pool).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ItemId {
    #[default]
    None = 0,

    // Berries.
    ApicotBerry,
    AspearBerry,
    CheriBerry,
    ChestoBerry,
    GanlonBerry,
    LansatBerry,
    LeppaBerry,
    LiechiBerry,
    LumBerry,
    OranBerry,
    PechaBerry,
    PersimBerry,
    PetayaBerry,
    RawstBerry,
    SalacBerry,
    SitrusBerry,
    StarfBerry,

    // Type boosts.
    BlackBelt,
    BlackGlasses,
    Charcoal,
    DragonFang,
    HardStone,
    Magnet,
    MetalCoat,
    MiracleSeed,
    MysticWater,
    NeverMeltIce,
    PoisonBarb,
    SharpBeak,
    SilkScarf,
    SilverPowder,
    SoftSand,
    SpellTag,
    TwistedSpoon,

    // Species signatures.
    DeepSeaScale,
    DeepSeaTooth,
    LightBall,
    LuckyPunch,
    MetalPowder,
    SoulDew,
    Stick,
    ThickClub,

    // Utility.
    BrightPowder,
    ChoiceBand,
    FocusBand,
    KingsRock,
    LaxIncense,
    Leftovers,
    MentalHerb,
    QuickClaw,
    ScopeLens,
    ShellBell,
    WhiteHerb,
}

impl ItemId {
    pub const COUNT: usize = 54;
}

#[inline]
fn usable_item(slot: &SlotState) -> Option<ItemId> {
    if slot.held_item == ItemId::None || slot.item_consumed {
        None
    } else {
        Some(slot.held_item)
    }
}

#[inline]
fn hooks_for(item: ItemId) -> Option<&'static ItemHooks> {
    ITEM_REGISTRY[item as usize].as_ref()
}

// ---------------------------------------------------------------------------
// Fire helpers: one per event, called from the boundaries that own them.
// ---------------------------------------------------------------------------

/// OnPreDamageCalc: fired on the AccuracyResolved -> DamageCalculated
/// boundary for the attacker's item and then the defender's.
pub fn fire_pre_damage_calc(ctx: &BattleContext<'_>, event: &mut PreDamageCalcEvent) {
    event.holder_is_attacker = true;
    if let Some(item) = usable_item(ctx.attacker_slot()) {
        if let Some(hooks) = hooks_for(item) {
            if let Some(hook) = hooks.on_pre_damage_calc {
                hook(ctx, event);
            }
        }
    }
    event.holder_is_attacker = false;
    if let Some(item) = usable_item(ctx.defender_slot()) {
        if let Some(hooks) = hooks_for(item) {
            if let Some(hook) = hooks.on_pre_damage_calc {
                hook(ctx, event);
            }
        }
    }
}

/// OnPreDamageApply: fired for the defender's item just before the HP
/// commit (Focus Band).
pub fn fire_pre_damage_apply(ctx: &BattleContext<'_>, event: &mut PreDamageApplyEvent) {
    if let Some(item) = usable_item(ctx.defender_slot()) {
        if let Some(hooks) = hooks_for(item) {
            if let Some(hook) = hooks.on_pre_damage_apply {
                hook(ctx, event);
            }
        }
    }
}

/// OnTurnStart: fired per slot at turn genesis (Quick Claw).
pub fn fire_turn_start(state: &BattleState, slot: u8, event: &mut TurnStartEvent) {
    if let Some(item) = usable_item(&state.slots[slot as usize]) {
        if let Some(hooks) = hooks_for(item) {
            if let Some(hook) = hooks.on_turn_start {
                hook(state, slot, event);
            }
        }
    }
}

/// OnTurnEnd: fired per surviving slot after actions resolve (Leftovers).
pub fn fire_turn_end(state: &BattleState, slot: u8, event: &mut TurnEndEvent) {
    if let Some(item) = usable_item(&state.slots[slot as usize]) {
        if let Some(hooks) = hooks_for(item) {
            if let Some(hook) = hooks.on_turn_end {
                hook(state, slot, event);
            }
        }
    }
}

/// Stage-boundary dispatcher, invoked by the pipeline on every op
/// transition. OnPostDamageApply belongs to the EffectApplied boundary:
/// it fires when a transition crosses it from DamageApplied or earlier,
/// which covers the plain-hit faint check and secondary-effect paths once
/// per effect — and, because multi-hit loop bodies resolve each strike
/// across this boundary, once per strike of a multi-hit move.
pub fn fire_boundary(ctx: &mut BattleContext<'_>, from_rank: u8, to_rank: u8) {
    if from_rank <= DamageApplied::RANK && to_rank >= EffectApplied::RANK {
        fire_post_damage_apply(ctx);
    }
}

fn fire_post_damage_apply(ctx: &mut BattleContext<'_>) {
    if ctx.result.missed || ctx.result.damage == 0 {
        return;
    }
    // A standing substitute absorbs the contact these items react to.
    if ctx.defender_has_substitute() {
        return;
    }

    let mut event = PostDamageApplyEvent {
        damage_dealt: ctx.result.damage,
        was_critical: ctx.result.critical,
        target_fainted: ctx.defender_mon().is_fainted(),
        attacker_heal: 0,
        attacker_recoil: 0,
        cause_flinch: false,
    };

    if let Some(item) = usable_item(ctx.attacker_slot()) {
        if let Some(hooks) = hooks_for(item) {
            if let Some(hook) = hooks.on_post_damage_apply {
                hook(ctx, &mut event);
            }
        }
    }

    // The boundary, not the handler, commits the mutations.
    if event.attacker_heal > 0 {
        ctx.attacker_mon_mut().heal(event.attacker_heal);
    }
    if event.attacker_recoil > 0 {
        ctx.attacker_mon_mut().apply_damage(event.attacker_recoil);
    }
    if event.cause_flinch && !event.target_fainted {
        let defender_moved = ctx.defender_slot().moved_this_turn;
        if !defender_moved {
            ctx.defender_slot_mut()
                .set(crate::state::Volatiles::FLINCHED);
        }
    }
}
