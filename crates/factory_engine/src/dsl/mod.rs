//! The effect DSL: compile-time validated composition of atomic ops.
//!
//! An effect is a domain-scoped pipeline of ops. Two properties are checked
//! by the compiler, not at runtime:
//!
//! 1. **Domain access** — an op can only run inside an effect whose declared
//!    domain mask covers the op's mask (a const assert evaluated per
//!    monomorphisation).
//! 2. **Stage ordering** — ops run only once the pipeline has reached their
//!    input stage, enforced through the [`stage::AtLeast`] trait lattice, and
//!    branching converges by construction because both arms must return a
//!    pipeline at the declared convergence stage.
//!
//! Violations are build failures, which is what keeps the registry free of
//! load-time validation.

pub mod domain;
pub mod pipeline;
pub mod predicates;
pub mod stage;

pub use domain::{domains, Domains};
pub use pipeline::{begin, LoopBody, Op, Pipeline};
pub use predicates::{when, Predicate};
pub use stage::{
    AccuracyResolved, AtLeast, DamageApplied, DamageCalculated, EffectApplied, FaintChecked,
    Genesis, Stage, Terminus,
};
