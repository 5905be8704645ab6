//! JSON battle-file parsing: named species, moves, items, and natures
//! resolved against the engine's static tables.

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;

use factory_engine::items::ItemId;
use factory_engine::moves::move_by_name;
use factory_engine::natures::NatureId;
use factory_engine::setup::{EvSpread, Rental};
use factory_engine::species::species_by_name;

#[derive(Debug, Deserialize)]
pub struct BattleFile {
    pub p1: Vec<RentalSpec>,
    pub p2: Vec<RentalSpec>,
    /// Optional per-turn move indices `[p1, p2]`; the driver improvises
    /// once the script runs out.
    #[serde(default)]
    pub actions: Vec<[u8; 2]>,
}

#[derive(Debug, Deserialize)]
pub struct RentalSpec {
    pub species: String,
    pub moves: Vec<String>,
    #[serde(default)]
    pub item: Option<String>,
    #[serde(default)]
    pub nature: Option<String>,
    #[serde(default)]
    pub evs: Vec<String>,
    #[serde(default)]
    pub ability_slot: u8,
}

impl RentalSpec {
    pub fn to_rental(&self) -> Result<Rental> {
        let species = species_by_name(&self.species)
            .ok_or_else(|| anyhow!("unknown species {:?}", self.species))?;

        if self.moves.is_empty() || self.moves.len() > 4 {
            bail!("{}: a rental carries 1-4 moves", self.species);
        }
        let mut moves = [factory_engine::moves::MoveId::default(); 4];
        for (i, name) in self.moves.iter().enumerate() {
            moves[i] = move_by_name(name).ok_or_else(|| anyhow!("unknown move {name:?}"))?;
        }
        // Pad short movesets by repeating the first move.
        for i in self.moves.len()..4 {
            moves[i] = moves[0];
        }

        let held_item = match &self.item {
            None => ItemId::None,
            Some(name) => item_by_name(name)
                .with_context(|| format!("{}: unknown item {name:?}", self.species))?,
        };

        let nature = match &self.nature {
            None => NatureId::Hardy,
            Some(name) => nature_by_name(name)
                .ok_or_else(|| anyhow!("{}: unknown nature {name:?}", self.species))?,
        };

        let mut ev_spread = EvSpread::default();
        for stat in &self.evs {
            ev_spread = ev_spread.union(ev_flag(stat)?);
        }

        Ok(Rental {
            species,
            moves,
            held_item,
            nature,
            ev_spread,
            ability_slot: self.ability_slot,
        })
    }
}

fn ev_flag(name: &str) -> Result<EvSpread> {
    Ok(match name.to_ascii_lowercase().as_str() {
        "hp" => EvSpread::HP,
        "atk" | "attack" => EvSpread::ATK,
        "def" | "defense" => EvSpread::DEF,
        "spatk" | "sp_atk" | "spa" => EvSpread::SP_ATK,
        "spdef" | "sp_def" | "spd" => EvSpread::SP_DEF,
        "spe" | "speed" => EvSpread::SPD,
        other => bail!("unknown EV stat {other:?}"),
    })
}

fn item_by_name(name: &str) -> Result<ItemId> {
    Ok(match name.to_ascii_lowercase().as_str() {
        "none" => ItemId::None,
        "leftovers" => ItemId::Leftovers,
        "quick claw" => ItemId::QuickClaw,
        "scope lens" => ItemId::ScopeLens,
        "choice band" => ItemId::ChoiceBand,
        "focus band" => ItemId::FocusBand,
        "king's rock" | "kings rock" => ItemId::KingsRock,
        "shell bell" => ItemId::ShellBell,
        "lucky punch" => ItemId::LuckyPunch,
        "stick" => ItemId::Stick,
        "light ball" => ItemId::LightBall,
        "metal powder" => ItemId::MetalPowder,
        "black belt" => ItemId::BlackBelt,
        "black glasses" => ItemId::BlackGlasses,
        "charcoal" => ItemId::Charcoal,
        "dragon fang" => ItemId::DragonFang,
        "hard stone" => ItemId::HardStone,
        "magnet" => ItemId::Magnet,
        "metal coat" => ItemId::MetalCoat,
        "miracle seed" => ItemId::MiracleSeed,
        "mystic water" => ItemId::MysticWater,
        "never-melt ice" | "nevermeltice" => ItemId::NeverMeltIce,
        "poison barb" => ItemId::PoisonBarb,
        "sharp beak" => ItemId::SharpBeak,
        "silk scarf" => ItemId::SilkScarf,
        "silver powder" => ItemId::SilverPowder,
        "soft sand" => ItemId::SoftSand,
        "spell tag" => ItemId::SpellTag,
        "twisted spoon" => ItemId::TwistedSpoon,
        other => bail!("unsupported item {other:?}"),
    })
}

fn nature_by_name(name: &str) -> Option<NatureId> {
    use NatureId::*;
    Some(match name.to_ascii_lowercase().as_str() {
        "adamant" => Adamant,
        "bashful" => Bashful,
        "bold" => Bold,
        "brave" => Brave,
        "calm" => Calm,
        "careful" => Careful,
        "docile" => Docile,
        "gentle" => Gentle,
        "hardy" => Hardy,
        "hasty" => Hasty,
        "impish" => Impish,
        "jolly" => Jolly,
        "lax" => Lax,
        "lonely" => Lonely,
        "mild" => Mild,
        "modest" => Modest,
        "naive" => Naive,
        "naughty" => Naughty,
        "quiet" => Quiet,
        "quirky" => Quirky,
        "rash" => Rash,
        "relaxed" => Relaxed,
        "sassy" => Sassy,
        "serious" => Serious,
        "timid" => Timid,
        _ => return None,
    })
}
