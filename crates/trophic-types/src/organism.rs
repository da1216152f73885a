//! The immutable organism value type.
//!
//! An [`Organism`] is a record of (species identity, vitality) with its
//! feeding capability baked into the type as two const generic booleans.
//! Carrying the capability at the type level lets the encounter engine
//! reject impossible pairings (two plants, mismatched species-identity
//! types) before the program runs.
//!
//! The species identity type `S` is opaque: the only requirement is
//! equality comparison (`S: PartialEq`), enforced at the type level --
//! instantiating an organism with a non-comparable species type fails to
//! compile. No ordering or hashing is required of `S`.
//!
//! Organisms are immutable values. [`Organism::with_vitality`],
//! [`Organism::add_vitality`], and [`Organism::kill`] return replacement
//! values; nothing is ever modified in place.

use serde::{Deserialize, Serialize};

use crate::diet::Diet;

/// Health measure of an organism. Zero means dead; never negative.
pub type Vitality = u64;

/// An immutable organism: species identity plus vitality, with the feeding
/// capability carried as const generic flags.
///
/// Prefer the four capability aliases over naming the flags directly:
/// [`Plant`], [`Herbivore`], [`Carnivore`], [`Omnivore`].
///
/// Two organisms are the same species only if their species identity values
/// compare equal AND their capability flags match exactly -- a carnivore
/// and a herbivore sharing a species identity value are different species.
///
/// A species identity type without equality comparison is rejected when the
/// organism is constructed, not at runtime:
///
/// ```compile_fail
/// use trophic_types::Carnivore;
///
/// struct Opaque; // no PartialEq
/// let broken = Carnivore::new(Opaque, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organism<S: PartialEq, const EATS_MEAT: bool, const EATS_PLANTS: bool> {
    species: S,
    vitality: Vitality,
}

/// An organism that eats neither meat nor plants; immobile.
pub type Plant<S> = Organism<S, false, false>;

/// An organism that eats plants only.
pub type Herbivore<S> = Organism<S, false, true>;

/// An organism that eats meat only.
pub type Carnivore<S> = Organism<S, true, false>;

/// An organism that eats both meat and plants.
pub type Omnivore<S> = Organism<S, true, true>;

impl<S: PartialEq, const EATS_MEAT: bool, const EATS_PLANTS: bool>
    Organism<S, EATS_MEAT, EATS_PLANTS>
{
    /// Create an organism with the given species identity and initial
    /// vitality.
    pub const fn new(species: S, vitality: Vitality) -> Self {
        Self { species, vitality }
    }

    /// Current vitality. No side effects.
    pub const fn vitality(&self) -> Vitality {
        self.vitality
    }

    /// True iff vitality is zero.
    pub const fn is_dead(&self) -> bool {
        self.vitality == 0
    }

    /// The species identity, by reference.
    pub const fn species(&self) -> &S {
        &self.species
    }

    /// The runtime view of the type-level capability flags.
    pub const fn diet(&self) -> Diet {
        Diet::from_flags(EATS_MEAT, EATS_PLANTS)
    }

    /// True iff both capability flags are false.
    pub const fn is_plant(&self) -> bool {
        !EATS_MEAT && !EATS_PLANTS
    }

    /// True iff this organism eats plants but not meat.
    pub const fn is_herbivore(&self) -> bool {
        !EATS_MEAT && EATS_PLANTS
    }

    /// True iff this organism eats meat but not plants.
    pub const fn is_carnivore(&self) -> bool {
        EATS_MEAT && !EATS_PLANTS
    }

    /// True iff this organism eats both meat and plants.
    pub const fn is_omnivore(&self) -> bool {
        EATS_MEAT && EATS_PLANTS
    }

    /// Whether this organism is capable of eating `other`.
    ///
    /// Evaluated against the *other's* plant-ness: a meat eater can eat any
    /// non-plant (including another carnivore), a plant eater can eat any
    /// plant. Capability alone does not imply consumption -- the encounter
    /// rule table gates the actual outcome.
    pub const fn can_eat<const M: bool, const P: bool>(&self, other: &Organism<S, M, P>) -> bool {
        (EATS_MEAT && !other.is_plant()) || (EATS_PLANTS && other.is_plant())
    }

    /// Whether `other` belongs to the same species as this organism.
    ///
    /// Requires both equal species identity values and exactly matching
    /// capability flag pairs.
    pub fn are_species_equal<const M: bool, const P: bool>(&self, other: &Organism<S, M, P>) -> bool {
        self.species == other.species && EATS_MEAT == M && EATS_PLANTS == P
    }

    /// A replacement organism with the same species and capability and the
    /// given vitality. Consumes the value; nothing is modified in place.
    #[must_use]
    pub fn with_vitality(self, vitality: Vitality) -> Self {
        let Self { species, vitality: _ } = self;
        Self { species, vitality }
    }

    /// A replacement organism with `delta` added to the vitality.
    ///
    /// The addition saturates at the integer ceiling; engine-internal
    /// deltas are halves of existing vitalities, so saturation is
    /// unreachable in practice.
    #[must_use]
    pub fn add_vitality(self, delta: Vitality) -> Self {
        let vitality = self.vitality.saturating_add(delta);
        self.with_vitality(vitality)
    }

    /// A replacement organism with vitality exactly zero.
    #[must_use]
    pub fn kill(self) -> Self {
        self.with_vitality(0)
    }
}
