//! Sequential encounter folds.
//!
//! An encounter series runs one organism through pairwise encounters with a
//! list of counterparts, left to right, keeping only the running state of
//! the first organism. Each counterpart's resulting state and any offspring
//! produced along the way are discarded.
//!
//! Two forms are provided:
//!
//! - [`encounter_series`], an explicit iterative fold over runtime-erased
//!   counterparts. Shapes decided at runtime; plant-vs-plant pairings are
//!   rejected eagerly with an error.
//! - [`encounter_series!`](crate::encounter_series), a macro over a
//!   statically-typed argument list. Shapes known at compile time; each
//!   step keeps the compile-time plant-vs-plant rejection of
//!   [`encounter`](crate::encounter).

use trophic_types::{AnyOrganism, Organism};

use crate::encounter::{Profile, resolve};
use crate::error::EncounterError;

/// Fold `organism1` through encounters with each counterpart in order,
/// returning its final state.
///
/// This is a pure left-fold of single encounters, projecting only the first
/// participant's result at each step. With an empty counterpart list the
/// origin is returned unchanged.
///
/// # Errors
///
/// Returns [`EncounterError::ImmobilePair`] if the origin is a plant and a
/// plant counterpart is reached. Counterparts after the offending one are
/// not evaluated.
///
/// # Examples
///
/// ```
/// use trophic_engine::encounter_series;
/// use trophic_types::{AnyOrganism, Carnivore, Herbivore};
///
/// let lion = Carnivore::new("Panthera leo", 100);
/// let herd: Vec<AnyOrganism<&str>> = vec![
///     Herbivore::new("Gazella dorcas", 60).into(),
///     Herbivore::new("Gazella dorcas", 90).into(),
/// ];
///
/// let lion = encounter_series(lion, &herd)?;
/// // First gazelle eaten (+30), then the second (+45).
/// assert_eq!(lion.vitality(), 175);
/// # Ok::<(), trophic_engine::EncounterError>(())
/// ```
pub fn encounter_series<S, const M1: bool, const P1: bool>(
    organism1: Organism<S, M1, P1>,
    counterparts: &[AnyOrganism<S>],
) -> Result<Organism<S, M1, P1>, EncounterError>
where
    S: PartialEq,
{
    let mut current = organism1;
    for counterpart in counterparts {
        if current.is_plant() && counterpart.is_plant() {
            return Err(EncounterError::ImmobilePair);
        }
        let resolution = resolve(&Profile::of(&current), &Profile::of_any(counterpart));
        current = current.with_vitality(resolution.first);
    }
    Ok(current)
}

/// Fold the first organism through encounters with each further argument,
/// left to right, evaluating to its final state.
///
/// The statically-typed sibling of [`encounter_series`]: arguments may mix
/// feeding capabilities freely, and every step is checked at compile time,
/// including the plant-vs-plant rejection.
///
/// # Examples
///
/// ```
/// use trophic_engine::encounter_series;
/// use trophic_types::{Carnivore, Herbivore};
///
/// let lion = Carnivore::new("Panthera leo", 100);
/// let gazelle = Herbivore::new("Gazella dorcas", 60);
/// let rival = Carnivore::new("Panthera tigris", 80);
///
/// let lion = encounter_series!(lion, gazelle, rival);
/// assert_eq!(lion.vitality(), 170);
/// ```
#[macro_export]
macro_rules! encounter_series {
    ($organism:expr $(,)?) => {
        $organism
    };
    ($organism:expr, $($counterpart:expr),+ $(,)?) => {{
        let folded = $organism;
        $(
            let (folded, _, _) = $crate::encounter(folded, $counterpart);
        )+
        folded
    }};
}
