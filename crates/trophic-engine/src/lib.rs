//! Pairwise encounter resolution for the trophic ecosystem model.
//!
//! The engine deterministically resolves the interaction between two
//! organisms -- fight, mate, eat, or nothing -- according to a strict,
//! ordered rule table, and folds an organism through sequences of such
//! encounters. It is purely functional: no shared mutable state, no I/O,
//! no randomness; every operation is a finite, total computation over its
//! inputs, safely parallelizable across independent pairs.
//!
//! # Modules
//!
//! - [`encounter`] -- The ordered rule table with its typed and
//!   runtime-erased entry points.
//! - [`error`] -- [`EncounterError`] for the erased entry points.
//! - [`series`] -- Sequential encounter folds, as a function over erased
//!   counterparts and as a statically-checked macro.
//!
//! # Static checking
//!
//! Invalid pairings are rejected before the program runs wherever the
//! types allow it: organisms with different species-identity types cannot
//! meet (single type parameter), species-identity types without equality
//! comparison cannot be constructed, and two statically-known plants fail
//! to compile in [`encounter`]. The runtime-erased entry points check the
//! plant-vs-plant precondition eagerly instead and return
//! [`EncounterError::ImmobilePair`].
//!
//! # Usage
//!
//! ```
//! use trophic_engine::encounter;
//! use trophic_types::{Carnivore, Herbivore};
//!
//! let lion = Carnivore::new("Panthera leo", 100);
//! let gazelle = Herbivore::new("Gazella dorcas", 60);
//!
//! // The gazelle is weaker than the lion: it is eaten, and the lion
//! // gains half its vitality.
//! let (lion, gazelle, offspring) = encounter(lion, gazelle);
//! assert_eq!(lion.vitality(), 130);
//! assert!(gazelle.is_dead());
//! assert!(offspring.is_none());
//!
//! // Two lions mate instead.
//! let second = Carnivore::new("Panthera leo", 70);
//! let (_, _, cub) = encounter(lion, second);
//! assert_eq!(cub.map(|c| c.vitality()), Some(100));
//! ```

pub mod encounter;
pub mod error;
pub mod series;

// Re-export the engine surface at crate root.
pub use encounter::{encounter, encounter_any};
pub use error::EncounterError;
pub use series::encounter_series;
