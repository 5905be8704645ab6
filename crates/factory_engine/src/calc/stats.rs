//! Stat derivation from rental components.
//!
//! HP:     floor((2*base + iv + ev/4) * level / 100) + level + 10
//! Others: floor((floor((2*base + iv + ev/4) * level / 100) + 5) * nature)
//!
//! Nature is an integer fraction (9/10, 1/1, 11/10) applied last; HP is
//! never nature-modified. Shedinja's 1-HP special case is a caller flag so
//! the kernel stays species-agnostic.

use crate::natures::{apply_nature, NatureId};

/// Complete computed stat block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatBlock {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub sp_attack: u16,
    pub sp_defense: u16,
    pub speed: u16,
}

#[inline]
pub const fn calc_hp(base: u8, iv: u8, ev: u8, level: u8) -> u16 {
    let core = (2 * base as u32 + iv as u32 + ev as u32 / 4) * level as u32 / 100;
    (core + level as u32 + 10) as u16
}

/// Non-HP stat. `nature_stat_index` is the 0-4 index into the nature table
/// (atk, def, spd, sp_atk, sp_def).
#[inline]
pub const fn calc_stat(
    base: u8,
    iv: u8,
    ev: u8,
    level: u8,
    nature: NatureId,
    nature_stat_index: usize,
) -> u16 {
    let core = (2 * base as u32 + iv as u32 + ev as u32 / 4) * level as u32 / 100 + 5;
    apply_nature(core as u16, nature, nature_stat_index)
}

/// Compute the full block. `base` and `ivs`/`evs` are ordered
/// HP, Atk, Def, SpAtk, SpDef, Spd.
pub fn calc_stat_block(
    base: &[u8; 6],
    ivs: &[u8; 6],
    evs: &[u8; 6],
    level: u8,
    nature: NatureId,
    force_one_hp: bool,
) -> StatBlock {
    use crate::natures::nature_stat;

    StatBlock {
        hp: if force_one_hp {
            1
        } else {
            calc_hp(base[0], ivs[0], evs[0], level)
        },
        attack: calc_stat(base[1], ivs[1], evs[1], level, nature, nature_stat::ATK),
        defense: calc_stat(base[2], ivs[2], evs[2], level, nature, nature_stat::DEF),
        sp_attack: calc_stat(base[3], ivs[3], evs[3], level, nature, nature_stat::SP_ATK),
        sp_defense: calc_stat(base[4], ivs[4], evs[4], level, nature, nature_stat::SP_DEF),
        speed: calc_stat(base[5], ivs[5], evs[5], level, nature, nature_stat::SPD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hp_formula_reference_values() {
        // Level 50, base 80, perfect IV, no EVs:
        // (160 + 31 + 0) * 50 / 100 + 50 + 10 = 95 + 60 = 155.
        assert_eq!(calc_hp(80, 31, 0, 50), 155);
        // With 255 EVs: (160 + 31 + 63) * 50 / 100 + 60 = 127 + 60 = 187.
        assert_eq!(calc_hp(80, 31, 255, 50), 187);
    }

    #[test]
    fn nature_applies_to_the_right_stat() {
        // Base 100, IV 31, EV 0, level 50: (200 + 31) * 50 / 100 + 5 = 120.
        let neutral = calc_stat(100, 31, 0, 50, NatureId::Hardy, 0);
        assert_eq!(neutral, 120);
        let boosted = calc_stat(100, 31, 0, 50, NatureId::Adamant, 0);
        assert_eq!(boosted, 132); // 120 * 11 / 10
        let cut = calc_stat(100, 31, 0, 50, NatureId::Modest, 0);
        assert_eq!(cut, 108); // 120 * 9 / 10
    }

    #[test]
    fn one_hp_flag_overrides_the_formula() {
        let block = calc_stat_block(
            &[1, 90, 45, 30, 30, 40],
            &[31; 6],
            &[0; 6],
            50,
            NatureId::Hardy,
            true,
        );
        assert_eq!(block.hp, 1);
        assert!(block.attack > 1);
    }
}
