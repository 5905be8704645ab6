//! Structural invariants exercised through ops, effects, and full battles.

mod common;

use common::helpers::rental;
use factory_engine::context::BattleContext;
use factory_engine::dsl::Op;
use factory_engine::effects;
use factory_engine::engine::{BattleAction, BattleEngine, BattleResult};
use factory_engine::moves::{get_move_data, Effect, MoveId};
use factory_engine::ops::{AddSpikes, ModifyUserStat, SetReflect, SetWeatherOp};
use factory_engine::rng;
use factory_engine::species::SpeciesId;
use factory_engine::state::{stage, BattleState, Volatiles, Weather};

fn test_state() -> BattleState {
    BattleState::new()
}

#[test]
fn fresh_weather_sets_five_turns_and_refuses_repeats() {
    let mut state = test_state();
    let mut ctx = BattleContext::new(&mut state, 0, 1, get_move_data(MoveId::Sandstorm));

    SetWeatherOp::<{ Weather::Sandstorm as u8 }>::execute(&mut ctx);
    assert!(!ctx.result.failed);
    assert_eq!(ctx.state.field.weather, Weather::Sandstorm);
    assert_eq!(ctx.state.field.weather_turns, 5);

    // Second application fails and leaves the counter untouched.
    ctx.state.field.weather_turns = 3;
    SetWeatherOp::<{ Weather::Sandstorm as u8 }>::execute(&mut ctx);
    assert!(ctx.result.failed);
    assert_eq!(ctx.state.field.weather_turns, 3);

    // A different weather still overwrites.
    ctx.result.failed = false;
    SetWeatherOp::<{ Weather::Rain as u8 }>::execute(&mut ctx);
    assert!(!ctx.result.failed);
    assert_eq!(ctx.state.field.weather, Weather::Rain);
    assert_eq!(ctx.state.field.weather_turns, 5);
}

#[test]
fn fresh_screens_set_five_turns_and_refuse_repeats() {
    let mut state = test_state();
    let mut ctx = BattleContext::new(&mut state, 0, 1, get_move_data(MoveId::Reflect));

    SetReflect::execute(&mut ctx);
    assert!(!ctx.result.failed);
    assert_eq!(ctx.state.sides[0].reflect_turns, 5);

    ctx.state.sides[0].reflect_turns = 2;
    SetReflect::execute(&mut ctx);
    assert!(ctx.result.failed);
    assert_eq!(ctx.state.sides[0].reflect_turns, 2);
}

#[test]
fn spikes_stack_to_three_layers() {
    let mut state = test_state();
    let mut ctx = BattleContext::new(&mut state, 0, 1, get_move_data(MoveId::Spikes));

    for expected in 1..=3u8 {
        AddSpikes::execute(&mut ctx);
        assert!(!ctx.result.failed);
        assert_eq!(ctx.defender_side().spikes_layers, expected);
    }

    AddSpikes::execute(&mut ctx);
    assert!(ctx.result.failed);
    assert_eq!(ctx.defender_side().spikes_layers, 3);
}

#[test]
fn stat_shifts_round_trip_and_clamp() {
    let mut state = test_state();
    let mut ctx = BattleContext::new(&mut state, 0, 1, get_move_data(MoveId::SwordsDance));

    ModifyUserStat::<{ stage::ATK }, 2>::execute(&mut ctx);
    assert_eq!(ctx.attacker_slot().stages[stage::ATK], 2);
    ModifyUserStat::<{ stage::ATK }, { -2 }>::execute(&mut ctx);
    assert_eq!(ctx.attacker_slot().stages[stage::ATK], 0);
    assert!(!ctx.result.failed);

    // Push to the cap, then one more application reports failure.
    for _ in 0..3 {
        ModifyUserStat::<{ stage::ATK }, 2>::execute(&mut ctx);
    }
    assert_eq!(ctx.attacker_slot().stages[stage::ATK], 6);
    assert!(!ctx.result.failed);
    ModifyUserStat::<{ stage::ATK }, 2>::execute(&mut ctx);
    assert!(ctx.result.failed);
    assert_eq!(ctx.attacker_slot().stages[stage::ATK], 6);
}

#[test]
fn haze_resets_every_active_slot() {
    let mut state = test_state();
    state.slots[0].stages[stage::ATK] = 3;
    state.slots[0].stages[stage::EVASION] = -4;
    state.slots[1].stages[stage::DEF] = -2;
    state.slots[1].stages[stage::SPD] = 6;

    let mut ctx = BattleContext::new(&mut state, 0, 1, get_move_data(MoveId::Haze));
    effects::dispatch(Effect::Haze, &mut ctx);

    for slot in &state.slots {
        assert_eq!(slot.stages, [0i8; 7]);
    }
}

#[test]
fn stub_tags_fall_back_to_the_hit_composition() {
    rng::initialize(99);

    let mut state = test_state();
    state.mons[0].max_hp = 100;
    state.mons[0].current_hp = 100;
    state.mons[1].max_hp = 100;
    state.mons[1].current_hp = 100;

    // Metronome has no composition of its own; it must resolve as a plain
    // damaging hit with the move's data.
    rng::stage_rolls(&[0, 1, 0]);
    let mut ctx = BattleContext::new(&mut state, 0, 1, get_move_data(MoveId::Pound));
    effects::dispatch(Effect::Metronome, &mut ctx);

    assert!(!ctx.result.missed);
    assert!(ctx.result.damage > 0);
    assert!(state.mons[1].current_hp < 100);
}

#[test]
fn hp_and_stage_invariants_hold_across_a_long_battle() {
    rng::initialize(0xFACADE);

    let team_p1 = [
        rental(
            SpeciesId::Machamp,
            [MoveId::BodySlam, MoveId::BrickBreak, MoveId::Substitute, MoveId::BulkUp],
        ),
        rental(
            SpeciesId::Venusaur,
            [MoveId::GigaDrain, MoveId::LeechSeed, MoveId::Toxic, MoveId::SleepPowder],
        ),
    ];
    let team_p2 = [
        rental(
            SpeciesId::Starmie,
            [MoveId::IceBeam, MoveId::Thunderbolt, MoveId::Recover, MoveId::ConfuseRay],
        ),
        rental(
            SpeciesId::Skarmory,
            [MoveId::Spikes, MoveId::DoubleTeam, MoveId::Protect, MoveId::RockSlide],
        ),
    ];
    let mut battle = BattleEngine::init_teams(&team_p1, &team_p2, 50).unwrap();

    // Rotate through the movesets; replace a fainted lead first.
    fn pick(battle: &BattleEngine, side: usize, turn: usize) -> BattleAction {
        if battle.mon(side).is_fainted() {
            for idx in 0..2u8 {
                if battle.can_switch_to(side, idx) {
                    return BattleAction::switch_to(idx);
                }
            }
        }
        BattleAction::use_move((turn % 4) as u8)
    }

    for turn in 0..30 {
        if battle.result() != BattleResult::Ongoing {
            break;
        }
        let a1 = pick(&battle, 0, turn);
        let a2 = pick(&battle, 1, turn);
        if battle.execute_turn(a1, a2).is_err() {
            break;
        }

        for side in 0..2 {
            let mon = battle.mon(side);
            assert!(mon.current_hp <= mon.max_hp, "I1 on turn {turn}");
            for (i, &s) in battle.slot(side).stages.iter().enumerate() {
                assert!((-6..=6).contains(&s), "I2 stage {i} on turn {turn}");
            }
            let sub_up = battle.slot(side).has(Volatiles::SUBSTITUTE);
            assert_eq!(
                battle.slot(side).substitute_hp > 0,
                sub_up,
                "I3 on turn {turn}"
            );
        }
    }
}
