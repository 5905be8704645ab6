//! Pipeline stages as zero-sized type-state tags.
//!
//! Progression:
//!
//! ```text
//! Genesis -> AccuracyResolved -> DamageCalculated -> DamageApplied
//!         -> EffectApplied -> FaintChecked -> Terminus
//! ```
//!
//! Ops declare an input and an output stage. An op may run once the
//! pipeline has reached (or passed) its input stage; stages in between may
//! be skipped when the intervening state is irrelevant (a status-only
//! effect jumps Genesis straight to EffectApplied).
//!
//! The ordering is a trait lattice: `B: AtLeast<A>` holds exactly when
//! `A` precedes or equals `B`, generated below for every legal pair so the
//! bound resolves on stable Rust with a plain where-clause.

mod sealed {
    pub trait Sealed {}
}

pub trait Stage: sealed::Sealed + 'static {
    const RANK: u8;
    const NAME: &'static str;
}

/// `Self` has reached (or passed) stage `S`.
pub trait AtLeast<S: Stage>: Stage {}

macro_rules! declare_stages {
    ($(($stage:ident, $rank:expr, $doc:literal)),+ $(,)?) => {
        $(
            #[doc = $doc]
            pub struct $stage;

            impl sealed::Sealed for $stage {}

            impl Stage for $stage {
                const RANK: u8 = $rank;
                const NAME: &'static str = stringify!($stage);
            }
        )+
    };
}

declare_stages!(
    (Genesis, 0, "Before any effect logic has run."),
    (AccuracyResolved, 1, "The accuracy check has been performed."),
    (DamageCalculated, 2, "The damage value has been computed."),
    (DamageApplied, 3, "Damage has been committed to the target."),
    (EffectApplied, 4, "Secondary effects have been applied."),
    (FaintChecked, 5, "Faint checks have been performed."),
    (Terminus, 6, "The effect is complete."),
);

// Generate the ordering lattice: the head stage is `AtLeast` itself and
// every later stage is `AtLeast` the head; recurse on the tail.
macro_rules! impl_stage_order {
    () => {};
    ($first:ident $(, $rest:ident)*) => {
        impl AtLeast<$first> for $first {}
        $(impl AtLeast<$first> for $rest {})*
        impl_stage_order!($($rest),*);
    };
}

impl_stage_order!(
    Genesis,
    AccuracyResolved,
    DamageCalculated,
    DamageApplied,
    EffectApplied,
    FaintChecked,
    Terminus
);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_reached<Later: AtLeast<Earlier>, Earlier: Stage>() {}

    #[test]
    fn ranks_are_strictly_ordered() {
        let ranks = [
            Genesis::RANK,
            AccuracyResolved::RANK,
            DamageCalculated::RANK,
            DamageApplied::RANK,
            EffectApplied::RANK,
            FaintChecked::RANK,
            Terminus::RANK,
        ];
        for pair in ranks.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn lattice_compiles_for_legal_pairs() {
        assert_reached::<Genesis, Genesis>();
        assert_reached::<Terminus, Genesis>();
        assert_reached::<EffectApplied, DamageApplied>();
        assert_reached::<FaintChecked, FaintChecked>();
        // The illegal direction (e.g. Genesis: AtLeast<Terminus>) fails to
        // compile, which is the property under test.
    }
}
