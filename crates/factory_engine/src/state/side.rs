//! Side domain: per-team screens, hazards, and targeting.

/// Sentinel for "no follow-me target".
pub const NO_TARGET: u8 = 0xFF;

#[derive(Debug, Clone, Copy)]
pub struct SideState {
    // Screen timers, turns remaining; 0 = inactive.
    pub reflect_turns: u8,
    pub light_screen_turns: u8,
    pub safeguard_turns: u8,
    pub mist_turns: u8,

    /// Spikes layers, 0-3.
    pub spikes_layers: u8,

    /// Follow Me redirection target (doubles door-opener), 0xFF = none.
    pub follow_me_target: u8,
}

impl Default for SideState {
    fn default() -> Self {
        SideState {
            reflect_turns: 0,
            light_screen_turns: 0,
            safeguard_turns: 0,
            mist_turns: 0,
            spikes_layers: 0,
            follow_me_target: NO_TARGET,
        }
    }
}

impl SideState {
    #[inline]
    pub const fn has_reflect(&self) -> bool {
        self.reflect_turns > 0
    }

    #[inline]
    pub const fn has_light_screen(&self) -> bool {
        self.light_screen_turns > 0
    }

    #[inline]
    pub const fn has_safeguard(&self) -> bool {
        self.safeguard_turns > 0
    }

    #[inline]
    pub const fn has_mist(&self) -> bool {
        self.mist_turns > 0
    }

    #[inline]
    pub const fn has_spikes(&self) -> bool {
        self.spikes_layers > 0
    }

    pub fn reset(&mut self) {
        *self = SideState::default();
    }

    /// Decrement every active screen timer by one turn.
    pub fn tick_screens(&mut self) {
        self.reflect_turns = self.reflect_turns.saturating_sub(1);
        self.light_screen_turns = self.light_screen_turns.saturating_sub(1);
        self.safeguard_turns = self.safeguard_turns.saturating_sub(1);
        self.mist_turns = self.mist_turns.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screens_tick_down_independently() {
        let mut side = SideState {
            reflect_turns: 2,
            mist_turns: 1,
            ..Default::default()
        };
        side.tick_screens();
        assert!(side.has_reflect());
        assert!(!side.has_mist());
        side.tick_screens();
        assert!(!side.has_reflect());
    }
}
