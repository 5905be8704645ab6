//! Demo host for the factory battle engine.
//!
//! Builds two rental teams (built-in demo or a JSON battle file), seeds the
//! RNG, and drives turns until the battle resolves, printing state as it
//! goes.
//!
//! Usage:
//!   cargo run -p factory_cli -- --seed 1234
//!   cargo run -p factory_cli -- --battle fixtures/battle.json
//!   RUST_LOG=factory_engine=debug cargo run -p factory_cli

mod teams;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use factory_engine::engine::{BattleAction, BattleEngine, BattleResult};
use factory_engine::items::ItemId;
use factory_engine::moves::{get_move_data, MoveId};
use factory_engine::natures::NatureId;
use factory_engine::rng;
use factory_engine::setup::{EvSpread, Rental};
use factory_engine::species::{get_species_data, SpeciesId};

use teams::BattleFile;

#[derive(Parser)]
#[command(name = "factory_cli", about = "Run a Battle Factory engine demo battle")]
struct Cli {
    /// RNG seed; 0 draws one from the OS.
    #[arg(long, default_value_t = 0)]
    seed: u32,

    /// Battle level (Battle Factory runs 50 or 100).
    #[arg(long, default_value_t = 50)]
    level: u8,

    /// Give up after this many turns.
    #[arg(long, default_value_t = 100)]
    max_turns: u16,

    /// JSON battle file with teams and an optional action script.
    #[arg(long)]
    battle: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    rng::initialize(cli.seed);

    let (team_p1, team_p2, script) = match &cli.battle {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let file: BattleFile = serde_json::from_str(&raw).context("parsing battle file")?;
            let p1 = file
                .p1
                .iter()
                .map(|spec| spec.to_rental())
                .collect::<Result<Vec<_>>>()?;
            let p2 = file
                .p2
                .iter()
                .map(|spec| spec.to_rental())
                .collect::<Result<Vec<_>>>()?;
            (p1, p2, file.actions)
        }
        None => (demo_team_red(), demo_team_blue(), Vec::new()),
    };

    let mut battle = BattleEngine::init_teams(&team_p1, &team_p2, cli.level)
        .context("setting up the battle")?;

    println!("=== factory battle, seed {} ===", cli.seed);
    print_side(&battle, 0);
    print_side(&battle, 1);

    for turn in 0..cli.max_turns {
        if battle.result() != BattleResult::Ongoing {
            break;
        }
        let scripted = script.get(turn as usize);
        let a1 = choose_action(&battle, 0, scripted.map(|pair| pair[0]));
        let a2 = choose_action(&battle, 1, scripted.map(|pair| pair[1]));

        battle
            .execute_turn(a1, a2)
            .with_context(|| format!("turn {}", turn + 1))?;

        println!("--- after turn {} ---", battle.turn());
        print_side(&battle, 0);
        print_side(&battle, 1);
    }

    match battle.result() {
        BattleResult::P1Wins => println!("player 1 wins"),
        BattleResult::P2Wins => println!("player 2 wins"),
        BattleResult::Ongoing => println!("no decision after {} turns", cli.max_turns),
    }
    Ok(())
}

/// Scripted index if one is given and legal, otherwise the first usable
/// move; a fainted active pokemon switches to the first live teammate.
fn choose_action(battle: &BattleEngine, side: usize, scripted: Option<u8>) -> BattleAction {
    if battle.mon(side).is_fainted() {
        for idx in 0..6u8 {
            if battle.can_switch_to(side, idx) {
                return BattleAction::switch_to(idx);
            }
        }
    }
    if let Some(index) = scripted {
        if index < 4 && battle.mon(side).pp[index as usize] > 0 {
            return BattleAction::use_move(index);
        }
    }
    let first_usable = battle
        .mon(side)
        .pp
        .iter()
        .position(|&pp| pp > 0)
        .unwrap_or(0) as u8;
    BattleAction::use_move(first_usable)
}

fn print_side(battle: &BattleEngine, side: usize) {
    let active = battle.active(side);
    let mon = battle.mon(side);
    let species = get_species_data(active.species);
    println!(
        "  p{}: {:<11} {:>3}/{:<3} hp  status {:?}  moves {}",
        side + 1,
        species.name,
        mon.current_hp,
        mon.max_hp,
        mon.status,
        battle
            .slot(side)
            .last_move_used
            .map(|m| get_move_data(m).name)
            .unwrap_or("-"),
    );
}

fn demo_team_red() -> Vec<Rental> {
    vec![
        Rental {
            species: SpeciesId::Machamp,
            moves: [
                MoveId::BrickBreak,
                MoveId::BodySlam,
                MoveId::RockSlide,
                MoveId::BulkUp,
            ],
            held_item: ItemId::ChoiceBand,
            nature: NatureId::Adamant,
            ev_spread: EvSpread::HP.union(EvSpread::ATK),
            ability_slot: 0,
        },
        Rental {
            species: SpeciesId::Starmie,
            moves: [
                MoveId::Surf,
                MoveId::IceBeam,
                MoveId::Thunderbolt,
                MoveId::Recover,
            ],
            held_item: ItemId::Leftovers,
            nature: NatureId::Timid,
            ev_spread: EvSpread::SP_ATK.union(EvSpread::SPD),
            ability_slot: 1,
        },
        Rental {
            species: SpeciesId::Skarmory,
            moves: [
                MoveId::Spikes,
                MoveId::DoubleEdge,
                MoveId::Protect,
                MoveId::Toxic,
            ],
            held_item: ItemId::Leftovers,
            nature: NatureId::Impish,
            ev_spread: EvSpread::HP.union(EvSpread::DEF),
            ability_slot: 1,
        },
    ]
}

fn demo_team_blue() -> Vec<Rental> {
    vec![
        Rental {
            species: SpeciesId::Salamence,
            moves: [
                MoveId::DragonClaw,
                MoveId::Earthquake,
                MoveId::RockSlide,
                MoveId::DragonDance,
            ],
            held_item: ItemId::DragonFang,
            nature: NatureId::Jolly,
            ev_spread: EvSpread::ATK.union(EvSpread::SPD),
            ability_slot: 0,
        },
        Rental {
            species: SpeciesId::Snorlax,
            moves: [
                MoveId::BodySlam,
                MoveId::ShadowBall,
                MoveId::Earthquake,
                MoveId::SwordsDance,
            ],
            held_item: ItemId::QuickClaw,
            nature: NatureId::Careful,
            ev_spread: EvSpread::HP.union(EvSpread::SP_DEF),
            ability_slot: 1,
        },
        Rental {
            species: SpeciesId::Gengar,
            moves: [
                MoveId::ShadowBall,
                MoveId::Thunderbolt,
                MoveId::WillOWisp,
                MoveId::ConfuseRay,
            ],
            held_item: ItemId::SpellTag,
            nature: NatureId::Timid,
            ev_spread: EvSpread::SP_ATK.union(EvSpread::SPD),
            ability_slot: 0,
        },
    ]
}
