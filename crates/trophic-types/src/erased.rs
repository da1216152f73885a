//! Runtime-erased organisms.
//!
//! The typed [`Organism`] carries its feeding capability as const generic
//! flags, so a `Vec` of organisms with mixed diets has no single element
//! type. [`AnyOrganism`] closes that gap: one variant per capability, each
//! wrapping the corresponding typed organism.
//!
//! Erasure trades the compile-time pairing checks for runtime ones -- the
//! engine's erased entry points check the plant-vs-plant precondition
//! eagerly and fail loudly instead of failing to compile.

use serde::{Deserialize, Serialize};

use crate::diet::Diet;
use crate::organism::{Carnivore, Herbivore, Omnivore, Organism, Plant, Vitality};

/// An organism with its feeding capability erased to a runtime tag.
///
/// Queries mirror the typed [`Organism`] API by delegating to the wrapped
/// value. Like the typed organism, an `AnyOrganism` is an immutable value:
/// mutators return replacements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnyOrganism<S: PartialEq> {
    /// An immobile plant.
    Plant(Plant<S>),
    /// A plant eater.
    Herbivore(Herbivore<S>),
    /// A meat eater.
    Carnivore(Carnivore<S>),
    /// An eater of both meat and plants.
    Omnivore(Omnivore<S>),
}

impl<S: PartialEq> AnyOrganism<S> {
    /// Create an erased organism of the given diet.
    pub const fn new(species: S, diet: Diet, vitality: Vitality) -> Self {
        match diet {
            Diet::Plant => Self::Plant(Organism::new(species, vitality)),
            Diet::Herbivore => Self::Herbivore(Organism::new(species, vitality)),
            Diet::Carnivore => Self::Carnivore(Organism::new(species, vitality)),
            Diet::Omnivore => Self::Omnivore(Organism::new(species, vitality)),
        }
    }

    /// The feeding capability tag.
    pub const fn diet(&self) -> Diet {
        match self {
            Self::Plant(_) => Diet::Plant,
            Self::Herbivore(_) => Diet::Herbivore,
            Self::Carnivore(_) => Diet::Carnivore,
            Self::Omnivore(_) => Diet::Omnivore,
        }
    }

    /// Current vitality. No side effects.
    pub const fn vitality(&self) -> Vitality {
        match self {
            Self::Plant(organism) => organism.vitality(),
            Self::Herbivore(organism) => organism.vitality(),
            Self::Carnivore(organism) => organism.vitality(),
            Self::Omnivore(organism) => organism.vitality(),
        }
    }

    /// True iff vitality is zero.
    pub const fn is_dead(&self) -> bool {
        self.vitality() == 0
    }

    /// The species identity, by reference.
    pub const fn species(&self) -> &S {
        match self {
            Self::Plant(organism) => organism.species(),
            Self::Herbivore(organism) => organism.species(),
            Self::Carnivore(organism) => organism.species(),
            Self::Omnivore(organism) => organism.species(),
        }
    }

    /// True iff both capability flags are false.
    pub const fn is_plant(&self) -> bool {
        self.diet().is_plant()
    }

    /// True iff this organism eats plants but not meat.
    pub const fn is_herbivore(&self) -> bool {
        self.diet().is_herbivore()
    }

    /// True iff this organism eats meat but not plants.
    pub const fn is_carnivore(&self) -> bool {
        self.diet().is_carnivore()
    }

    /// True iff this organism eats both meat and plants.
    pub const fn is_omnivore(&self) -> bool {
        self.diet().is_omnivore()
    }

    /// Whether this organism is capable of eating `other`.
    ///
    /// Same rule as the typed [`Organism::can_eat`]: evaluated against the
    /// other's plant-ness.
    pub const fn can_eat(&self, other: &Self) -> bool {
        (self.diet().eats_meat() && !other.is_plant())
            || (self.diet().eats_plants() && other.is_plant())
    }

    /// Whether `other` belongs to the same species: equal identity values
    /// and equal capability tags.
    pub fn are_species_equal(&self, other: &Self) -> bool {
        self.species() == other.species() && self.diet() == other.diet()
    }

    /// A replacement organism with the same species and capability and the
    /// given vitality. Consumes the value; nothing is modified in place.
    #[must_use]
    pub fn with_vitality(self, vitality: Vitality) -> Self {
        match self {
            Self::Plant(organism) => Self::Plant(organism.with_vitality(vitality)),
            Self::Herbivore(organism) => Self::Herbivore(organism.with_vitality(vitality)),
            Self::Carnivore(organism) => Self::Carnivore(organism.with_vitality(vitality)),
            Self::Omnivore(organism) => Self::Omnivore(organism.with_vitality(vitality)),
        }
    }

    /// A replacement organism with `delta` added to the vitality
    /// (saturating).
    #[must_use]
    pub fn add_vitality(self, delta: Vitality) -> Self {
        let vitality = self.vitality().saturating_add(delta);
        self.with_vitality(vitality)
    }

    /// A replacement organism with vitality exactly zero.
    #[must_use]
    pub fn kill(self) -> Self {
        self.with_vitality(0)
    }
}

impl<S: PartialEq> From<Plant<S>> for AnyOrganism<S> {
    fn from(organism: Plant<S>) -> Self {
        Self::Plant(organism)
    }
}

impl<S: PartialEq> From<Herbivore<S>> for AnyOrganism<S> {
    fn from(organism: Herbivore<S>) -> Self {
        Self::Herbivore(organism)
    }
}

impl<S: PartialEq> From<Carnivore<S>> for AnyOrganism<S> {
    fn from(organism: Carnivore<S>) -> Self {
        Self::Carnivore(organism)
    }
}

impl<S: PartialEq> From<Omnivore<S>> for AnyOrganism<S> {
    fn from(organism: Omnivore<S>) -> Self {
        Self::Omnivore(organism)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_matches_the_requested_diet() {
        let gazelle = AnyOrganism::new("gazelle", Diet::Herbivore, 60);
        assert_eq!(gazelle.diet(), Diet::Herbivore);
        assert_eq!(gazelle.vitality(), 60);
        assert_eq!(*gazelle.species(), "gazelle");
        assert!(gazelle.is_herbivore());
    }

    #[test]
    fn conversion_from_typed_organisms_keeps_the_capability() {
        let lion: AnyOrganism<&str> = Carnivore::new("lion", 100).into();
        let moss: AnyOrganism<&str> = Plant::new("moss", 40).into();

        assert!(matches!(lion, AnyOrganism::Carnivore(_)));
        assert!(matches!(moss, AnyOrganism::Plant(_)));
        assert_eq!(lion.diet(), Diet::Carnivore);
        assert_eq!(moss.diet(), Diet::Plant);
    }

    #[test]
    fn can_eat_agrees_with_the_typed_rule() {
        let lion = AnyOrganism::new("lion", Diet::Carnivore, 10);
        let gazelle = AnyOrganism::new("gazelle", Diet::Herbivore, 10);
        let moss = AnyOrganism::new("moss", Diet::Plant, 10);
        let bear = AnyOrganism::new("bear", Diet::Omnivore, 10);

        assert!(lion.can_eat(&gazelle));
        assert!(!lion.can_eat(&moss));
        assert!(gazelle.can_eat(&moss));
        assert!(!gazelle.can_eat(&lion));
        assert!(bear.can_eat(&lion));
        assert!(bear.can_eat(&moss));
        assert!(!moss.can_eat(&gazelle));
    }

    #[test]
    fn species_equality_requires_matching_diet_tags() {
        let wolf_carnivore = AnyOrganism::new("wolf", Diet::Carnivore, 10);
        let wolf_omnivore = AnyOrganism::new("wolf", Diet::Omnivore, 10);
        let other_wolf = AnyOrganism::new("wolf", Diet::Carnivore, 70);

        assert!(wolf_carnivore.are_species_equal(&other_wolf));
        assert!(!wolf_carnivore.are_species_equal(&wolf_omnivore));
    }

    #[test]
    fn mutators_return_new_values() {
        let original = AnyOrganism::new("gazelle", Diet::Herbivore, 60);
        let boosted = original.add_vitality(40);
        let killed = original.kill();

        assert_eq!(original.vitality(), 60);
        assert_eq!(boosted.vitality(), 100);
        assert_eq!(killed.vitality(), 0);
        assert!(killed.is_dead());
        assert_eq!(killed.diet(), Diet::Herbivore);
    }

    #[test]
    fn serde_round_trip_preserves_equality() {
        let bear = AnyOrganism::new("bear".to_owned(), Diet::Omnivore, 90);
        let encoded = serde_json::to_string(&bear).ok();
        assert!(encoded.is_some());

        if let Some(json) = encoded {
            let decoded: Option<AnyOrganism<String>> = serde_json::from_str(&json).ok();
            assert_eq!(decoded, Some(bear));
        }
    }
}
