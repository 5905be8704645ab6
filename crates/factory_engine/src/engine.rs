//! The battle engine: per-turn orchestration.
//!
//! A turn walks a fixed state machine:
//!
//! ```text
//! TurnGenesis        clear per-turn flags, fire OnTurnStart (Quick Claw)
//! PriorityDetermined action priority, effective speed, tie coin-flip
//! ActionsResolving   first actor, then second unless a faint/switch-out
//!                    short-circuits it
//! ActionsResolved    OnTurnEnd items, weather chip, status residuals,
//!                    leech seed, perish countdown, timer ticks
//! TurnTerminus       result sampling
//! ```
//!
//! The orchestrator owns everything effects must not: switching (including
//! Baton Pass state transfer and spikes on entry), Magic Coat reflection,
//! Pursuit interception, Choice locks, PP, and the pre-move action gate
//! (flinch, sleep, freeze, paralysis, confusion).

use tracing::{debug, trace};

use crate::calc::{self, apply_stat_stage, TurnOrder};
use crate::context::{BattleContext, EffectResult};
use crate::effects;
use crate::error::EngineError;
use crate::items::{self, ItemId, TurnEndEvent, TurnStartEvent};
use crate::moves::{get_move_data, Effect, MoveData, MoveFlags, MoveId};
use crate::rng;
use crate::setup::{setup_rental, Rental, RentalSetup};
use crate::species::AbilityId;
use crate::state::{stage, ActiveMon, BattleState, MonState, SlotState, Status, Volatiles, Weather};
use crate::types::Type;

pub const MAX_PARTY_SIZE: usize = 6;

/// One action per side per turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleAction {
    /// Use the move in slot 0-3.
    Move { index: u8 },
    /// Switch to the party member at 0-5.
    Switch { party_index: u8 },
    /// Flee. Always rejected in factory battles.
    Run,
}

impl BattleAction {
    pub const fn use_move(index: u8) -> Self {
        BattleAction::Move { index }
    }

    pub const fn switch_to(party_index: u8) -> Self {
        BattleAction::Switch { party_index }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BattleResult {
    P1Wins = 0,
    P2Wins = 1,
    Ongoing = 0xFF,
}

/// A party member's persistent record. The arena's `MonState` is
/// authoritative while the member is active; it is synced back here on
/// switch-out.
#[derive(Debug, Clone, Copy)]
struct PartyMember {
    setup: RentalSetup,
    moves: [MoveId; 4],
    held_item: ItemId,
}

#[derive(Debug, Clone)]
struct Party {
    members: Vec<PartyMember>,
    /// Index of the member currently in the battle slot.
    active: usize,
}

impl Party {
    fn from_rentals(rentals: &[Rental], level: u8) -> Result<Party, EngineError> {
        if rentals.is_empty() || rentals.len() > MAX_PARTY_SIZE {
            return Err(EngineError::InvalidTeamSize(rentals.len()));
        }
        let members = rentals
            .iter()
            .map(|rental| PartyMember {
                setup: setup_rental(rental, level),
                moves: rental.moves,
                held_item: rental.held_item,
            })
            .collect();
        Ok(Party { members, active: 0 })
    }
}

pub struct BattleEngine {
    state: BattleState,
    parties: [Party; 2],
    last_results: [EffectResult; 2],
    choice_lock: [Option<MoveId>; 2],
    turn: u16,
}

impl BattleEngine {
    // ======================================================================
    // Construction
    // ======================================================================

    /// One rental per side, the classic 1v1 knockout round.
    pub fn init(
        rental_p1: &Rental,
        rental_p2: &Rental,
        level: u8,
    ) -> Result<BattleEngine, EngineError> {
        Self::init_teams(std::slice::from_ref(rental_p1), std::slice::from_ref(rental_p2), level)
    }

    /// Full factory teams, up to six rentals per side. The first member of
    /// each team leads.
    pub fn init_teams(
        team_p1: &[Rental],
        team_p2: &[Rental],
        level: u8,
    ) -> Result<BattleEngine, EngineError> {
        let parties = [
            Party::from_rentals(team_p1, level)?,
            Party::from_rentals(team_p2, level)?,
        ];

        let mut state = BattleState::new();
        for side in 0..2 {
            let lead = &parties[side].members[0];
            state.mons[side] = lead.setup.mon;
            state.slots[side] = lead.setup.slot;
            state.actives[side] = lead.setup.active;
        }

        debug!(
            p1 = state.actives[0].species as u16,
            p2 = state.actives[1].species as u16,
            level,
            "battle initialized"
        );

        Ok(BattleEngine {
            state,
            parties,
            last_results: [EffectResult::new(), EffectResult::new()],
            choice_lock: [None, None],
            turn: 0,
        })
    }

    // ======================================================================
    // Observation
    // ======================================================================

    pub fn result(&self) -> BattleResult {
        let p1_alive = self.side_alive(0);
        let p2_alive = self.side_alive(1);
        match (p1_alive, p2_alive) {
            (true, false) => BattleResult::P1Wins,
            (false, true) => BattleResult::P2Wins,
            _ => BattleResult::Ongoing,
        }
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn mon(&self, side: usize) -> &MonState {
        &self.state.mons[side]
    }

    pub fn slot(&self, side: usize) -> &SlotState {
        &self.state.slots[side]
    }

    pub fn active(&self, side: usize) -> &ActiveMon {
        &self.state.actives[side]
    }

    /// Result scratch of the side's most recent effect invocation.
    pub fn last_result(&self, side: usize) -> &EffectResult {
        &self.last_results[side]
    }

    /// Whether `party_index` is a legal switch target for `side` right now.
    pub fn can_switch_to(&self, side: usize, party_index: u8) -> bool {
        self.validate_action(side, BattleAction::switch_to(party_index))
            .is_ok()
    }

    pub fn turn(&self) -> u16 {
        self.turn
    }

    fn side_alive(&self, side: usize) -> bool {
        if self.state.mons[side].is_alive() {
            return true;
        }
        let party = &self.parties[side];
        party
            .members
            .iter()
            .enumerate()
            .any(|(i, member)| i != party.active && member.setup.mon.is_alive())
    }

    fn has_live_replacement(&self, side: usize) -> bool {
        let party = &self.parties[side];
        party
            .members
            .iter()
            .enumerate()
            .any(|(i, member)| i != party.active && member.setup.mon.is_alive())
    }

    // ======================================================================
    // Turn execution
    // ======================================================================

    pub fn execute_turn(
        &mut self,
        action_p1: BattleAction,
        action_p2: BattleAction,
    ) -> Result<(), EngineError> {
        if self.result() != BattleResult::Ongoing {
            return Err(EngineError::BattleOver);
        }
        // A double knockout reports ONGOING (neither side won) but there is
        // nothing left to fight with.
        if !self.side_alive(0) && !self.side_alive(1) {
            return Err(EngineError::BattleOver);
        }
        self.validate_action(0, action_p1)?;
        self.validate_action(1, action_p2)?;

        self.turn += 1;
        debug!(turn = self.turn, ?action_p1, ?action_p2, "turn start");

        // ------------------------------------------------------------------
        // TurnGenesis: clear per-turn flags, fire OnTurnStart.
        // ------------------------------------------------------------------
        for slot in self.state.slots.iter_mut() {
            slot.clear_turn_flags();
        }

        let mut quick_claw = [false; 2];
        for side in 0..2 {
            let mut event = TurnStartEvent::default();
            items::fire_turn_start(&self.state, side as u8, &mut event);
            quick_claw[side] = event.priority_boost;
        }

        // ------------------------------------------------------------------
        // PriorityDetermined.
        // ------------------------------------------------------------------
        let actions = [action_p1, action_p2];
        let (first, second) = self.determine_order(&actions, quick_claw);
        trace!(first, second, "order determined");

        // ------------------------------------------------------------------
        // ActionsResolving.
        // ------------------------------------------------------------------
        let mut consumed = [false; 2];

        self.execute_action(first, &actions, &mut consumed);
        consumed[first] = true;

        let skip_second = self.state.mons[second].is_fainted()
            || self.last_results[first].switch_out
            || consumed[second];
        if skip_second {
            trace!(second, "second action skipped");
        } else {
            self.execute_action(second, &actions, &mut consumed);
        }

        // ------------------------------------------------------------------
        // ActionsResolved -> TurnEnd.
        // ------------------------------------------------------------------
        self.end_of_turn();

        Ok(())
    }

    fn validate_action(&self, side: usize, action: BattleAction) -> Result<(), EngineError> {
        match action {
            BattleAction::Run => Err(EngineError::RunNotAllowed),
            BattleAction::Move { index } => {
                if self.state.mons[side].is_fainted() && self.has_live_replacement(side) {
                    return Err(EngineError::FaintedActorMustSwitch);
                }
                if index > 3 {
                    return Err(EngineError::InvalidMoveIndex(index));
                }
                // A charging turn is forced and consumes no new selection.
                if self.state.slots[side].charging_move.is_some() {
                    return Ok(());
                }
                if self.state.mons[side].pp[index as usize] == 0 {
                    return Err(EngineError::NoPpRemaining(index));
                }
                if let Some(locked) = self.choice_lock[side] {
                    if self.parties[side].members[self.parties[side].active].moves
                        [index as usize]
                        != locked
                    {
                        return Err(EngineError::ChoiceLocked);
                    }
                }
                Ok(())
            }
            BattleAction::Switch { party_index } => {
                let party = &self.parties[side];
                let idx = party_index as usize;
                if idx >= party.members.len()
                    || idx == party.active
                    || party.members[idx].setup.mon.is_fainted()
                {
                    return Err(EngineError::InvalidSwitchTarget(party_index));
                }
                Ok(())
            }
        }
    }

    fn action_priority(&self, side: usize, action: BattleAction) -> i8 {
        match action {
            // Gen III: switches precede every move bracket.
            BattleAction::Switch { .. } | BattleAction::Run => 6,
            BattleAction::Move { index } => {
                let move_id = self.selected_move(side, index);
                get_move_data(move_id).priority
            }
        }
    }

    /// The move that will actually come out: a charged move overrides the
    /// host's selection.
    fn selected_move(&self, side: usize, index: u8) -> MoveId {
        self.state.slots[side]
            .charging_move
            .unwrap_or(self.parties[side].members[self.parties[side].active].moves[index as usize])
    }

    /// Order rule: priority bracket, then one-sided Quick Claw, then
    /// effective speed, then a single coin flip.
    fn determine_order(&self, actions: &[BattleAction; 2], quick_claw: [bool; 2]) -> (usize, usize) {
        let p1 = self.action_priority(0, actions[0]);
        let p2 = self.action_priority(1, actions[1]);

        let speed_1 =
            calc::effective_speed(self.state.actives[0].speed, &self.state.slots[0], &self.state.mons[0]);
        let speed_2 =
            calc::effective_speed(self.state.actives[1].speed, &self.state.slots[1], &self.state.mons[1]);

        let order = if p1 == p2 && quick_claw[0] != quick_claw[1] {
            if quick_claw[0] {
                TurnOrder::FirstActs
            } else {
                TurnOrder::SecondActs
            }
        } else {
            calc::determine_turn_order(p1, p2, speed_1, speed_2)
        };

        match order {
            TurnOrder::FirstActs => (0, 1),
            TurnOrder::SecondActs => (1, 0),
            TurnOrder::SpeedTie => {
                if rng::rand_below(2) == 0 {
                    (0, 1)
                } else {
                    (1, 0)
                }
            }
        }
    }

    fn execute_action(
        &mut self,
        side: usize,
        actions: &[BattleAction; 2],
        consumed: &mut [bool; 2],
    ) {
        match actions[side] {
            BattleAction::Move { index } => self.execute_move(side, index),
            BattleAction::Switch { party_index } => {
                self.intercept_with_pursuit(side, actions, consumed);
                // The victim may have fallen to the intercept; the trainer
                // completes the recall regardless.
                self.perform_switch(side, party_index as usize, false);
            }
            BattleAction::Run => unreachable!("rejected during validation"),
        }
    }

    // ------------------------------------------------------------------
    // Moves
    // ------------------------------------------------------------------

    fn execute_move(&mut self, actor: usize, move_index: u8) {
        let finishing_charge = self.state.slots[actor].charging_move.is_some();
        let move_id = self.selected_move(actor, move_index);
        let move_data = get_move_data(move_id);

        if !self.can_act(actor) {
            self.state.slots[actor].moved_this_turn = true;
            return;
        }

        let mut attacker = actor;
        let mut defender = actor ^ 1;

        // Magic Coat: an eligible status move aimed at a bouncing slot is
        // thrown back at its user before dispatch.
        if move_data.flags.contains(MoveFlags::MAGIC_COAT) && self.state.slots[defender].bounce_move
        {
            self.state.slots[defender].bounce_move = false;
            std::mem::swap(&mut attacker, &mut defender);
            trace!(actor, "move bounced by magic coat");
        }

        let result = self.dispatch_move(attacker, defender, move_data, None);
        self.last_results[actor] = result;

        let slot = &mut self.state.slots[actor];
        slot.moved_this_turn = true;
        slot.last_move_used = Some(move_id);

        if !finishing_charge {
            let pp = &mut self.state.mons[actor].pp[move_index as usize];
            *pp = pp.saturating_sub(1);

            if self.state.slots[actor].held_item == ItemId::ChoiceBand
                && self.choice_lock[actor].is_none()
            {
                self.choice_lock[actor] = Some(move_id);
            }
        }

        if self.state.mons[actor ^ 1].is_fainted() {
            debug!(side = actor ^ 1, "defender fainted");
        }

        // Baton Pass: honor the switch request with the preserving clear.
        if result.switch_out {
            if let Some(replacement) = self.first_live_replacement(actor) {
                self.perform_switch(actor, replacement, result.baton_pass);
            } else {
                self.last_results[actor].failed = true;
            }
        }
    }

    /// Run one effect against a fresh context and hand back its result.
    /// `power_override` doubles Pursuit on an intercept.
    fn dispatch_move(
        &mut self,
        attacker: usize,
        defender: usize,
        move_data: &'static MoveData,
        power_override: Option<u16>,
    ) -> EffectResult {
        let mut ctx =
            BattleContext::new(&mut self.state, attacker as u8, defender as u8, move_data);
        if let Some(power) = power_override {
            ctx.overrides.power = power;
        }
        trace!(
            attacker,
            defender,
            effect = ?move_data.effect,
            "dispatching effect"
        );
        effects::dispatch(move_data.effect, &mut ctx);
        ctx.result
    }

    /// The pre-move gate: flinch, sleep, freeze, paralysis, confusion.
    /// A blocked move consumes the action but no PP.
    fn can_act(&mut self, actor: usize) -> bool {
        if self.state.slots[actor].has(Volatiles::FLINCHED) {
            debug!(side = actor, "flinched");
            return false;
        }

        match self.state.mons[actor].status {
            Status::Sleep => {
                let mon = &mut self.state.mons[actor];
                mon.sleep_turns = mon.sleep_turns.saturating_sub(1);
                if mon.sleep_turns == 0 {
                    mon.cure_status();
                    debug!(side = actor, "woke up");
                } else {
                    debug!(side = actor, "fast asleep");
                    return false;
                }
            }
            Status::Freeze => {
                // 20% thaw chance per turn.
                if rng::rand_below(5) == 0 {
                    self.state.mons[actor].cure_status();
                    debug!(side = actor, "thawed out");
                } else {
                    debug!(side = actor, "frozen solid");
                    return false;
                }
            }
            Status::Paralysis => {
                if rng::rand_below(4) == 0 {
                    debug!(side = actor, "fully paralyzed");
                    return false;
                }
            }
            _ => {}
        }

        if self.state.slots[actor].has(Volatiles::CONFUSED) {
            let slot = &mut self.state.slots[actor];
            slot.confusion_turns = slot.confusion_turns.saturating_sub(1);
            if slot.confusion_turns == 0 {
                slot.clear(Volatiles::CONFUSED);
                debug!(side = actor, "snapped out of confusion");
            } else if rng::rand_below(2) == 0 {
                self.confusion_self_hit(actor);
                debug!(side = actor, "hurt itself in confusion");
                return false;
            }
        }

        true
    }

    /// The classic 40-power typeless physical self-hit: own attack against
    /// own defense, no STAB, no crit, no variance.
    fn confusion_self_hit(&mut self, actor: usize) {
        let active = self.state.actives[actor];
        let slot = &self.state.slots[actor];
        let attack = apply_stat_stage(active.attack, slot.stages[stage::ATK]);
        let defense = apply_stat_stage(active.defense, slot.stages[stage::DEF]).max(1);

        let mut damage = 2 * u32::from(active.level) / 5 + 2;
        damage = damage * 40 * u32::from(attack) / u32::from(defense);
        damage = damage / 50 + 2;

        self.state.mons[actor].apply_damage(damage.min(u32::from(u16::MAX)) as u16);
    }

    // ------------------------------------------------------------------
    // Switching
    // ------------------------------------------------------------------

    /// A fleeing target is intercepted by a pending opposing Pursuit at
    /// doubled power; the pursuer's action is consumed by the intercept.
    fn intercept_with_pursuit(
        &mut self,
        switching_side: usize,
        actions: &[BattleAction; 2],
        consumed: &mut [bool; 2],
    ) {
        let pursuer = switching_side ^ 1;
        if consumed[pursuer] || self.state.mons[pursuer].is_fainted() {
            return;
        }
        let Some((move_data, move_index)) = self.pending_pursuit(pursuer, actions) else {
            return;
        };

        // The intercept IS the pursuer's action this turn; the usual
        // pre-move gate still applies.
        if !self.can_act(pursuer) {
            self.state.slots[pursuer].moved_this_turn = true;
            consumed[pursuer] = true;
            return;
        }

        debug!(pursuer, target = switching_side, "pursuit intercepts the switch");
        let result = self.dispatch_move(
            pursuer,
            switching_side,
            move_data,
            Some(u16::from(move_data.power) * 2),
        );
        self.last_results[pursuer] = result;

        let slot = &mut self.state.slots[pursuer];
        slot.moved_this_turn = true;
        slot.last_move_used = Some(move_data.id);
        let pp = &mut self.state.mons[pursuer].pp[move_index as usize];
        *pp = pp.saturating_sub(1);

        consumed[pursuer] = true;
    }

    /// The pursuer's pending MOVE action, if it is Pursuit.
    fn pending_pursuit(
        &self,
        pursuer: usize,
        actions: &[BattleAction; 2],
    ) -> Option<(&'static MoveData, u8)> {
        match actions[pursuer] {
            BattleAction::Move { index } => {
                let move_id = self.selected_move(pursuer, index);
                let data = get_move_data(move_id);
                (data.effect == Effect::Pursuit).then_some((data, index))
            }
            _ => None,
        }
    }

    fn perform_switch(&mut self, side: usize, new_index: usize, baton_pass: bool) {
        let outgoing = self.parties[side].active;
        self.parties[side].members[outgoing].setup.mon = self.state.mons[side];

        let incoming = self.parties[side].members[new_index];
        debug!(
            side,
            outgoing,
            incoming = new_index,
            baton_pass,
            "switching"
        );

        if baton_pass {
            self.state.slots[side].clear_for_baton_pass(incoming.held_item);
        } else {
            self.state.slots[side].clear_on_switch(incoming.held_item);
        }

        self.state.mons[side] = incoming.setup.mon;
        self.state.mons[side].reset_toxic_counter();
        self.state.actives[side] = incoming.setup.active;
        self.parties[side].active = new_index;
        self.choice_lock[side] = None;

        self.apply_entry_hazards(side);
    }

    fn first_live_replacement(&self, side: usize) -> Option<usize> {
        let party = &self.parties[side];
        party
            .members
            .iter()
            .enumerate()
            .find(|(i, member)| *i != party.active && member.setup.mon.is_alive())
            .map(|(i, _)| i)
    }

    fn apply_entry_hazards(&mut self, side: usize) {
        let layers = self.state.sides[side].spikes_layers;
        if layers == 0 {
            return;
        }
        let active = &self.state.actives[side];
        let airborne = active.type1 == Type::Flying
            || active.type2 == Type::Flying
            || active.ability == AbilityId::Levitate;
        if airborne {
            return;
        }
        let max_hp = self.state.mons[side].max_hp;
        let damage = match layers {
            1 => max_hp / 8,
            2 => max_hp / 6,
            _ => max_hp / 4,
        }
        .max(1);
        self.state.mons[side].apply_damage(damage);
        debug!(side, layers, damage, "spikes bit the incoming pokemon");
    }

    // ------------------------------------------------------------------
    // End of turn
    // ------------------------------------------------------------------

    fn end_of_turn(&mut self) {
        // Item hooks first (Leftovers), then field residuals.
        for side in 0..2 {
            if self.state.mons[side].is_fainted() {
                continue;
            }
            let mut event = TurnEndEvent::default();
            items::fire_turn_end(&self.state, side as u8, &mut event);
            if event.heal_amount > 0 {
                self.state.mons[side].heal(event.heal_amount);
            }
            if event.damage_amount > 0 {
                self.state.mons[side].apply_damage(event.damage_amount);
            }
        }

        self.weather_chip();
        self.status_residuals();
        self.leech_seed_drain();
        self.perish_countdown();

        for side in self.state.sides.iter_mut() {
            side.tick_screens();
        }
        let field = &mut self.state.field;
        if field.weather != Weather::None && field.weather_turns > 0 {
            field.weather_turns -= 1;
            if field.weather_turns == 0 {
                debug!("weather faded");
                field.weather = Weather::None;
            }
        }

        for slot in self.state.slots.iter_mut() {
            slot.is_first_turn = false;
        }
    }

    fn weather_chip(&mut self) {
        let weather = self.state.field.weather;
        if !matches!(weather, Weather::Sandstorm | Weather::Hail) {
            return;
        }
        for side in 0..2 {
            if self.state.mons[side].is_fainted() {
                continue;
            }
            let active = &self.state.actives[side];
            let has_type = |t: Type| active.type1 == t || active.type2 == t;
            let immune = match weather {
                Weather::Sandstorm => {
                    has_type(Type::Rock) || has_type(Type::Ground) || has_type(Type::Steel)
                }
                Weather::Hail => has_type(Type::Ice),
                _ => true,
            };
            if !immune {
                let chip = (self.state.mons[side].max_hp / 16).max(1);
                self.state.mons[side].apply_damage(chip);
            }
        }
    }

    fn status_residuals(&mut self) {
        for side in 0..2 {
            let mon = &mut self.state.mons[side];
            if mon.is_fainted() {
                continue;
            }
            let max_hp = mon.max_hp;
            match mon.status {
                Status::Burn | Status::Poison => {
                    mon.apply_damage((max_hp / 8).max(1));
                }
                Status::Toxic => {
                    let counter = u32::from(mon.toxic_counter);
                    let damage = (u32::from(max_hp) * counter / 16).max(1) as u16;
                    mon.apply_damage(damage);
                    mon.toxic_counter = (mon.toxic_counter + 1).min(15);
                }
                _ => {}
            }
        }
    }

    fn leech_seed_drain(&mut self) {
        for side in 0..2 {
            if !self.state.slots[side].has(Volatiles::LEECH_SEED)
                || self.state.mons[side].is_fainted()
            {
                continue;
            }
            let planter = self.state.slots[side].leech_seed_target as usize;
            if planter >= self.state.mons.len() || self.state.mons[planter].is_fainted() {
                continue;
            }
            let drain = (self.state.mons[side].max_hp / 16).max(1);
            let drained = self.state.mons[side].apply_damage(drain);
            self.state.mons[planter].heal(drained);
        }
    }

    fn perish_countdown(&mut self) {
        for side in 0..2 {
            if !self.state.slots[side].has(Volatiles::PERISH_SONG)
                || self.state.mons[side].is_fainted()
            {
                continue;
            }
            let slot = &mut self.state.slots[side];
            slot.perish_count = slot.perish_count.saturating_sub(1);
            if slot.perish_count == 0 {
                let hp = self.state.mons[side].current_hp;
                self.state.mons[side].apply_damage(hp);
                debug!(side, "perish count hit zero");
            }
        }
    }
}
