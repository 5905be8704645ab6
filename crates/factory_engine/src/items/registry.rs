//! The item hook registry: held-item id -> handler table.

use super::hooks::ItemHooks;
use super::implementations::*;
use super::ItemId;

pub static ITEM_REGISTRY: [Option<ItemHooks>; ItemId::COUNT] = {
    let mut registry: [Option<ItemHooks>; ItemId::COUNT] = [None; ItemId::COUNT];

    // =======================================================================
    // Crit and stat modifiers (OnPreDamageCalc)
    // =======================================================================

    registry[ItemId::ScopeLens as usize] = Some(ItemHooks {
        on_pre_damage_calc: Some(pre_damage_calc_scope_lens),
        ..ItemHooks::NONE
    });

    registry[ItemId::LuckyPunch as usize] = Some(ItemHooks {
        on_pre_damage_calc: Some(pre_damage_calc_lucky_punch),
        ..ItemHooks::NONE
    });

    registry[ItemId::Stick as usize] = Some(ItemHooks {
        on_pre_damage_calc: Some(pre_damage_calc_stick),
        ..ItemHooks::NONE
    });

    registry[ItemId::ChoiceBand as usize] = Some(ItemHooks {
        on_pre_damage_calc: Some(pre_damage_calc_choice_band),
        ..ItemHooks::NONE
    });

    registry[ItemId::LightBall as usize] = Some(ItemHooks {
        on_pre_damage_calc: Some(pre_damage_calc_light_ball),
        ..ItemHooks::NONE
    });

    registry[ItemId::MetalPowder as usize] = Some(ItemHooks {
        on_pre_damage_calc: Some(pre_damage_calc_metal_powder),
        ..ItemHooks::NONE
    });

    // =======================================================================
    // Type-boost items (OnPreDamageCalc, power x1.1)
    // =======================================================================

    registry[ItemId::BlackBelt as usize] = Some(ItemHooks {
        on_pre_damage_calc: Some(pre_damage_calc_black_belt),
        ..ItemHooks::NONE
    });

    registry[ItemId::BlackGlasses as usize] = Some(ItemHooks {
        on_pre_damage_calc: Some(pre_damage_calc_black_glasses),
        ..ItemHooks::NONE
    });

    registry[ItemId::Charcoal as usize] = Some(ItemHooks {
        on_pre_damage_calc: Some(pre_damage_calc_charcoal),
        ..ItemHooks::NONE
    });

    registry[ItemId::DragonFang as usize] = Some(ItemHooks {
        on_pre_damage_calc: Some(pre_damage_calc_dragon_fang),
        ..ItemHooks::NONE
    });

    registry[ItemId::HardStone as usize] = Some(ItemHooks {
        on_pre_damage_calc: Some(pre_damage_calc_hard_stone),
        ..ItemHooks::NONE
    });

    registry[ItemId::Magnet as usize] = Some(ItemHooks {
        on_pre_damage_calc: Some(pre_damage_calc_magnet),
        ..ItemHooks::NONE
    });

    registry[ItemId::MetalCoat as usize] = Some(ItemHooks {
        on_pre_damage_calc: Some(pre_damage_calc_metal_coat),
        ..ItemHooks::NONE
    });

    registry[ItemId::MiracleSeed as usize] = Some(ItemHooks {
        on_pre_damage_calc: Some(pre_damage_calc_miracle_seed),
        ..ItemHooks::NONE
    });

    registry[ItemId::MysticWater as usize] = Some(ItemHooks {
        on_pre_damage_calc: Some(pre_damage_calc_mystic_water),
        ..ItemHooks::NONE
    });

    registry[ItemId::NeverMeltIce as usize] = Some(ItemHooks {
        on_pre_damage_calc: Some(pre_damage_calc_never_melt_ice),
        ..ItemHooks::NONE
    });

    registry[ItemId::PoisonBarb as usize] = Some(ItemHooks {
        on_pre_damage_calc: Some(pre_damage_calc_poison_barb),
        ..ItemHooks::NONE
    });

    registry[ItemId::SharpBeak as usize] = Some(ItemHooks {
        on_pre_damage_calc: Some(pre_damage_calc_sharp_beak),
        ..ItemHooks::NONE
    });

    registry[ItemId::SilkScarf as usize] = Some(ItemHooks {
        on_pre_damage_calc: Some(pre_damage_calc_silk_scarf),
        ..ItemHooks::NONE
    });

    registry[ItemId::SilverPowder as usize] = Some(ItemHooks {
        on_pre_damage_calc: Some(pre_damage_calc_silver_powder),
        ..ItemHooks::NONE
    });

    registry[ItemId::SoftSand as usize] = Some(ItemHooks {
        on_pre_damage_calc: Some(pre_damage_calc_soft_sand),
        ..ItemHooks::NONE
    });

    registry[ItemId::SpellTag as usize] = Some(ItemHooks {
        on_pre_damage_calc: Some(pre_damage_calc_spell_tag),
        ..ItemHooks::NONE
    });

    registry[ItemId::TwistedSpoon as usize] = Some(ItemHooks {
        on_pre_damage_calc: Some(pre_damage_calc_twisted_spoon),
        ..ItemHooks::NONE
    });

    // =======================================================================
    // Survival and reaction items
    // =======================================================================

    registry[ItemId::FocusBand as usize] = Some(ItemHooks {
        on_pre_damage_apply: Some(pre_damage_apply_focus_band),
        ..ItemHooks::NONE
    });

    registry[ItemId::KingsRock as usize] = Some(ItemHooks {
        on_post_damage_apply: Some(post_damage_apply_kings_rock),
        ..ItemHooks::NONE
    });

    registry[ItemId::ShellBell as usize] = Some(ItemHooks {
        on_post_damage_apply: Some(post_damage_apply_shell_bell),
        ..ItemHooks::NONE
    });

    // =======================================================================
    // Turn-boundary items
    // =======================================================================

    registry[ItemId::QuickClaw as usize] = Some(ItemHooks {
        on_turn_start: Some(turn_start_quick_claw),
        ..ItemHooks::NONE
    });

    registry[ItemId::Leftovers as usize] = Some(ItemHooks {
        on_turn_end: Some(turn_end_leftovers),
        ..ItemHooks::NONE
    });

    registry
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unhandled_items_are_no_ops() {
        assert!(ITEM_REGISTRY[ItemId::None as usize].is_none());
        assert!(ITEM_REGISTRY[ItemId::OranBerry as usize].is_none());
    }

    #[test]
    fn handled_items_route_to_their_event() {
        let leftovers = ITEM_REGISTRY[ItemId::Leftovers as usize].unwrap();
        assert!(leftovers.on_turn_end.is_some());
        assert!(leftovers.on_pre_damage_calc.is_none());

        let scope_lens = ITEM_REGISTRY[ItemId::ScopeLens as usize].unwrap();
        assert!(scope_lens.on_pre_damage_calc.is_some());
    }
}
