//! State-domain access masks.
//!
//! Ops declare the domains they touch; effects declare the domains they
//! allow. The pipeline's `run` refuses (at compile time) any op whose mask
//! is not a subset of the effect's.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Domains: u8 {
        /// Global state: weather, future sight, wish.
        const FIELD = 1 << 0;
        /// Per-team state: screens, hazards.
        const SIDE = 1 << 1;
        /// Per-position state: stat stages, volatiles.
        const SLOT = 1 << 2;
        /// Per-pokemon state: HP, status, PP.
        const MON = 1 << 3;
        /// Scoped scratch with no persistence (damage parameter payloads).
        const TRANSIENT = 1 << 4;
    }
}

/// Pre-combined masks for the common effect shapes.
pub mod domains {
    use super::Domains;

    /// Damage/secondary effects touching slot and mon state (most moves).
    pub const PURE: Domains = Domains::SLOT.union(Domains::MON);
    /// Weather-reading damage effects.
    pub const WEATHER: Domains = Domains::FIELD.union(PURE);
    /// Screen and hazard effects.
    pub const SCREEN: Domains = Domains::SIDE;
    /// Pure status application.
    pub const STATUS: Domains = Domains::MON;
    /// Pure stat-stage manipulation.
    pub const STAT_CHANGE: Domains = Domains::SLOT;
    /// Everything (Baton Pass and friends).
    pub const ALL: Domains = Domains::FIELD
        .union(Domains::SIDE)
        .union(Domains::SLOT)
        .union(Domains::MON)
        .union(Domains::TRANSIENT);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_covers_slot_and_mon_only() {
        assert!(domains::PURE.contains(Domains::SLOT));
        assert!(domains::PURE.contains(Domains::MON));
        assert!(!domains::PURE.contains(Domains::FIELD));
        assert!(!domains::PURE.contains(Domains::SIDE));
    }

    #[test]
    fn subset_checks_via_bits() {
        let op = Domains::SLOT;
        assert_eq!(op.bits() & !domains::PURE.bits(), 0);
        let field_op = Domains::FIELD;
        assert_ne!(field_op.bits() & !domains::PURE.bits(), 0);
    }
}
