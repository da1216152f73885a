//! Pairwise encounter resolution: the ordered rule table.
//!
//! [`encounter`] resolves the interaction between two organisms into
//! updated states and possibly a newly produced offspring. Rules are
//! evaluated strictly in order; the first matching rule determines the
//! outcome and no further rule is considered:
//!
//! | # | Rule | Outcome |
//! |---|------|---------|
//! | 1 | Either party dead | no effect |
//! | 2 | Same species | offspring at floor((v1 + v2) / 2), parents unchanged |
//! | 3 | Neither can eat the other | no effect |
//! | 4 | Mutual consumption (both non-plant) | fight: higher vitality wins, gains floor(loser / 2); tie kills both |
//! | 5 | One side is an edible plant | plant dies, eater gains the **full** plant vitality |
//! | 6 | One-directional consumption | eaten dies and eater gains floor(eaten / 2), unless eaten's vitality >= eater's (then no effect) |
//!
//! Note the asymmetry between rules 5 and 4/6: eating a plant transfers the
//! full vitality, eating an animal transfers half.
//!
//! All comparisons and additions use the pre-encounter vitalities of both
//! organisms. Each resolved rule emits a `tracing` event at trace level.
//!
//! Two plants can never meet. For the typed [`encounter`] this is rejected
//! at compile time; for the erased [`encounter_any`] it is checked eagerly
//! and reported as [`EncounterError::ImmobilePair`] before any rule runs.

use tracing::trace;

use trophic_types::{AnyOrganism, Diet, Organism, Vitality};

use crate::error::EncounterError;

// ---------------------------------------------------------------------------
// Capability profile
// ---------------------------------------------------------------------------

/// A capability view of one encounter participant.
///
/// Collapses the typed and erased organism representations into the data
/// the rule table actually consumes, so both frontends share one
/// resolution path.
pub(crate) struct Profile<'a, S> {
    species: &'a S,
    eats_meat: bool,
    eats_plants: bool,
    vitality: Vitality,
}

impl<'a, S: PartialEq> Profile<'a, S> {
    /// View a typed organism.
    pub(crate) const fn of<const M: bool, const P: bool>(organism: &'a Organism<S, M, P>) -> Self {
        Self {
            species: organism.species(),
            eats_meat: M,
            eats_plants: P,
            vitality: organism.vitality(),
        }
    }

    /// View a runtime-erased organism.
    pub(crate) const fn of_any(organism: &'a AnyOrganism<S>) -> Self {
        let diet = organism.diet();
        Self {
            species: organism.species(),
            eats_meat: diet.eats_meat(),
            eats_plants: diet.eats_plants(),
            vitality: organism.vitality(),
        }
    }

    const fn is_plant(&self) -> bool {
        !self.eats_meat && !self.eats_plants
    }

    const fn can_eat(&self, other: &Profile<'_, S>) -> bool {
        (self.eats_meat && !other.is_plant()) || (self.eats_plants && other.is_plant())
    }

    fn is_same_species(&self, other: &Profile<'_, S>) -> bool {
        self.species == other.species
            && self.eats_meat == other.eats_meat
            && self.eats_plants == other.eats_plants
    }

    const fn diet(&self) -> Diet {
        Diet::from_flags(self.eats_meat, self.eats_plants)
    }
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// The vitality outcome of one encounter, in argument order.
pub(crate) struct Resolution {
    /// New vitality of the first participant.
    pub(crate) first: Vitality,
    /// New vitality of the second participant.
    pub(crate) second: Vitality,
    /// Vitality of the produced offspring, if rule 2 matched.
    pub(crate) offspring: Option<Vitality>,
}

impl Resolution {
    const fn unchanged(first: Vitality, second: Vitality) -> Self {
        Self {
            first,
            second,
            offspring: None,
        }
    }
}

/// Evaluate the ordered rule table for one pair of participants.
///
/// Callers must have established the not-both-plants precondition.
// The trailing branch is unreachable by the capability model: rule 3
// filters out pairs with no feeding direction and rules 4-6 consume every
// remaining combination of directions. Reaching it is an internal logic
// defect, reported loudly rather than resolved to a default.
#[allow(clippy::unreachable)]
pub(crate) fn resolve<S: PartialEq>(lhs: &Profile<'_, S>, rhs: &Profile<'_, S>) -> Resolution {
    // Rule 1: an encounter with a dead party has no effect.
    if lhs.vitality == 0 || rhs.vitality == 0 {
        trace!(lhs = %lhs.diet(), rhs = %rhs.diet(), rule = "dead-party", "no effect");
        return Resolution::unchanged(lhs.vitality, rhs.vitality);
    }

    // Rule 2: two organisms of the same species mate. The offspring's
    // vitality is the floor of the parents' arithmetic mean; the parents
    // are unchanged. Same-species pairs never fall through to the
    // fight and consumption rules.
    if lhs.is_same_species(rhs) {
        let offspring = lhs.vitality.midpoint(rhs.vitality);
        trace!(
            diet = %lhs.diet(),
            lhs_vitality = lhs.vitality,
            rhs_vitality = rhs.vitality,
            offspring_vitality = offspring,
            rule = "mating",
            "same-species pair produced offspring"
        );
        return Resolution {
            first: lhs.vitality,
            second: rhs.vitality,
            offspring: Some(offspring),
        };
    }

    // Rule 3: organisms that cannot eat each other ignore each other.
    if !lhs.can_eat(rhs) && !rhs.can_eat(lhs) {
        trace!(lhs = %lhs.diet(), rhs = %rhs.diet(), rule = "mutual-inability", "no effect");
        return Resolution::unchanged(lhs.vitality, rhs.vitality);
    }

    // Rule 4: two animals that can eat each other fight. The higher
    // vitality wins and gains half the loser's vitality (floored); the
    // loser dies. An exact tie is a destructive fight that kills both.
    if !lhs.is_plant() && !rhs.is_plant() && lhs.can_eat(rhs) && rhs.can_eat(lhs) {
        let first_dies = rhs.vitality >= lhs.vitality;
        let second_dies = lhs.vitality >= rhs.vitality;
        trace!(
            lhs = %lhs.diet(),
            rhs = %rhs.diet(),
            lhs_vitality = lhs.vitality,
            rhs_vitality = rhs.vitality,
            rule = "fight",
            "mutual consumption resolved by vitality"
        );
        return Resolution {
            first: if first_dies {
                0
            } else {
                lhs.vitality.saturating_add(rhs.vitality / 2)
            },
            second: if second_dies {
                0
            } else {
                rhs.vitality.saturating_add(lhs.vitality / 2)
            },
            offspring: None,
        };
    }

    // Rule 5: an edible plant is always eaten, transferring its full
    // vitality to the eater.
    if rhs.is_plant() && lhs.can_eat(rhs) {
        trace!(
            eater = %lhs.diet(),
            plant_vitality = rhs.vitality,
            rule = "plant-predation",
            "plant consumed"
        );
        return Resolution {
            first: lhs.vitality.saturating_add(rhs.vitality),
            second: 0,
            offspring: None,
        };
    }
    if lhs.is_plant() && rhs.can_eat(lhs) {
        trace!(
            eater = %rhs.diet(),
            plant_vitality = lhs.vitality,
            rule = "plant-predation",
            "plant consumed"
        );
        return Resolution {
            first: 0,
            second: rhs.vitality.saturating_add(lhs.vitality),
            offspring: None,
        };
    }

    // Rule 6: consumption possible in exactly one direction. The would-be
    // meal escapes if its vitality is at least the eater's; otherwise it
    // dies and the eater gains half its vitality (floored).
    if lhs.can_eat(rhs) {
        if rhs.vitality >= lhs.vitality {
            trace!(lhs = %lhs.diet(), rhs = %rhs.diet(), rule = "predation-escape", "no effect");
            return Resolution::unchanged(lhs.vitality, rhs.vitality);
        }
        trace!(
            eater = %lhs.diet(),
            eaten = %rhs.diet(),
            eaten_vitality = rhs.vitality,
            rule = "predation",
            "one-directional consumption"
        );
        return Resolution {
            first: lhs.vitality.saturating_add(rhs.vitality / 2),
            second: 0,
            offspring: None,
        };
    }
    if rhs.can_eat(lhs) {
        if lhs.vitality >= rhs.vitality {
            trace!(lhs = %lhs.diet(), rhs = %rhs.diet(), rule = "predation-escape", "no effect");
            return Resolution::unchanged(lhs.vitality, rhs.vitality);
        }
        trace!(
            eater = %rhs.diet(),
            eaten = %lhs.diet(),
            eaten_vitality = lhs.vitality,
            rule = "predation",
            "one-directional consumption"
        );
        return Resolution {
            first: 0,
            second: rhs.vitality.saturating_add(lhs.vitality / 2),
            offspring: None,
        };
    }

    unreachable!("encounter rule table exhausted: no rule matched")
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Resolve an encounter between two typed organisms.
///
/// Returns the two organisms as modified by the encounter, in argument
/// order, plus the offspring if the pair mated. The inputs may have
/// different feeding capabilities but must share one species-identity type;
/// a pair with different species-identity types does not compile:
///
/// ```compile_fail
/// use trophic_engine::encounter;
/// use trophic_types::{Carnivore, Omnivore};
///
/// let lion = Carnivore::new("Panthera leo", 462);
/// let dog: Omnivore<u64> = Omnivore::new(1, 15);
/// let _ = encounter(lion, dog); // species-identity types differ
/// ```
///
/// Two plants can never meet -- plants are immobile. With the capabilities
/// statically known, the pairing is rejected at compile time:
///
/// ```compile_fail
/// use trophic_engine::encounter;
/// use trophic_types::Plant;
///
/// let moss = Plant::new("moss", 40);
/// let fern = Plant::new("fern", 10);
/// let _ = encounter(moss, fern); // two plants cannot meet
/// ```
///
/// # Examples
///
/// ```
/// use trophic_engine::encounter;
/// use trophic_types::{Carnivore, Herbivore};
///
/// let lion = Carnivore::new("Panthera leo", 100);
/// let gazelle = Herbivore::new("Gazella dorcas", 60);
///
/// let (lion, gazelle, offspring) = encounter(lion, gazelle);
/// assert_eq!(lion.vitality(), 130);
/// assert!(gazelle.is_dead());
/// assert!(offspring.is_none());
/// ```
pub fn encounter<S, const M1: bool, const P1: bool, const M2: bool, const P2: bool>(
    organism1: Organism<S, M1, P1>,
    organism2: Organism<S, M2, P2>,
) -> (
    Organism<S, M1, P1>,
    Organism<S, M2, P2>,
    Option<Organism<S, M1, P1>>,
)
where
    S: PartialEq + Clone,
{
    const {
        assert!(
            M1 || P1 || M2 || P2,
            "two plants cannot encounter each other: plants are immobile"
        );
    }

    let resolution = resolve(&Profile::of(&organism1), &Profile::of(&organism2));
    let offspring = resolution
        .offspring
        .map(|vitality| organism1.clone().with_vitality(vitality));
    (
        organism1.with_vitality(resolution.first),
        organism2.with_vitality(resolution.second),
        offspring,
    )
}

/// Resolve an encounter between two runtime-erased organisms.
///
/// Behaves exactly like [`encounter`] for every admissible pairing. The
/// plant-vs-plant precondition cannot be checked statically for erased
/// values, so it is checked eagerly here -- before any rule, including the
/// dead-party rule -- and reported as [`EncounterError::ImmobilePair`].
///
/// # Errors
///
/// Returns [`EncounterError::ImmobilePair`] if both organisms are plants.
pub fn encounter_any<S>(
    organism1: &AnyOrganism<S>,
    organism2: &AnyOrganism<S>,
) -> Result<(AnyOrganism<S>, AnyOrganism<S>, Option<AnyOrganism<S>>), EncounterError>
where
    S: PartialEq + Clone,
{
    if organism1.is_plant() && organism2.is_plant() {
        return Err(EncounterError::ImmobilePair);
    }

    let resolution = resolve(&Profile::of_any(organism1), &Profile::of_any(organism2));
    Ok((
        organism1.clone().with_vitality(resolution.first),
        organism2.clone().with_vitality(resolution.second),
        resolution
            .offspring
            .map(|vitality| organism1.clone().with_vitality(vitality)),
    ))
}
