//! Weather, screens, and hazards.

use crate::context::BattleContext;
use crate::dsl::{Domains, EffectApplied, Genesis, Op};
use crate::state::Weather;

/// Set weather `W` (a [`Weather`] discriminant) for five turns; fails if
/// that weather is already up.
pub struct SetWeatherOp<const W: u8>;

impl<const W: u8> Op for SetWeatherOp<W> {
    const DOMAINS: Domains = Domains::FIELD;
    type Input = Genesis;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        let weather = Weather::from_u8(W);
        if ctx.field().weather == weather {
            ctx.result.failed = true;
            return;
        }
        let field = ctx.field_mut();
        field.weather = weather;
        field.weather_turns = 5;
    }
}

pub struct SetReflect;

impl Op for SetReflect {
    const DOMAINS: Domains = Domains::SIDE;
    type Input = Genesis;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        if ctx.attacker_side().has_reflect() {
            ctx.result.failed = true;
            return;
        }
        ctx.attacker_side_mut().reflect_turns = 5;
    }
}

pub struct SetLightScreen;

impl Op for SetLightScreen {
    const DOMAINS: Domains = Domains::SIDE;
    type Input = Genesis;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        if ctx.attacker_side().has_light_screen() {
            ctx.result.failed = true;
            return;
        }
        ctx.attacker_side_mut().light_screen_turns = 5;
    }
}

pub struct SetSafeguard;

impl Op for SetSafeguard {
    const DOMAINS: Domains = Domains::SIDE;
    type Input = Genesis;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        if ctx.attacker_side().has_safeguard() {
            ctx.result.failed = true;
            return;
        }
        ctx.attacker_side_mut().safeguard_turns = 5;
    }
}

pub struct SetMist;

impl Op for SetMist {
    const DOMAINS: Domains = Domains::SIDE;
    type Input = Genesis;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        if ctx.attacker_side().has_mist() {
            ctx.result.failed = true;
            return;
        }
        ctx.attacker_side_mut().mist_turns = 5;
    }
}

/// Add a spikes layer to the defending side; fails at three layers.
pub struct AddSpikes;

impl Op for AddSpikes {
    const DOMAINS: Domains = Domains::SIDE;
    type Input = Genesis;
    type Output = EffectApplied;

    fn execute(ctx: &mut BattleContext<'_>) {
        if ctx.defender_side().spikes_layers >= 3 {
            ctx.result.failed = true;
            return;
        }
        ctx.defender_side_mut().spikes_layers += 1;
    }
}
