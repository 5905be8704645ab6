use criterion::{black_box, criterion_group, criterion_main, Criterion};

use factory_engine::calc::{calculate_damage, DamageParams};
use factory_engine::types::Type;

fn typical_params() -> DamageParams {
    DamageParams {
        level: 50,
        power: 95,
        move_type: Type::Water,
        attack: 120,
        attack_stage: 1,
        attacker_type1: Type::Water,
        attacker_type2: Type::Psychic,
        defense: 105,
        defense_stage: 0,
        defender_type1: Type::Fire,
        defender_type2: Type::Flying,
        crit_stage: 0,
        is_critical: false,
        skip_random: false,
    }
}

fn bench_damage_kernel(c: &mut Criterion) {
    factory_engine::rng::initialize(0xC0FFEE);
    let params = typical_params();

    c.bench_function("gen3_damage_full", |b| {
        b.iter(|| calculate_damage(black_box(&params)))
    });

    let deterministic = DamageParams {
        is_critical: true,
        skip_random: true,
        ..typical_params()
    };
    c.bench_function("gen3_damage_no_rng", |b| {
        b.iter(|| calculate_damage(black_box(&deterministic)))
    });
}

criterion_group!(benches, bench_damage_kernel);
criterion_main!(benches);
