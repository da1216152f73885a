//! Organism value model for the trophic encounter engine.
//!
//! This crate is the single source of truth for the value types consumed by
//! `trophic-engine`: feeding capabilities, the immutable organism record,
//! and the runtime-erased organism used for heterogeneous collections.
//!
//! # Modules
//!
//! - [`diet`] -- The closed four-variant [`Diet`] enum derived from the two
//!   feeding flags (eats-meat, eats-plants).
//! - [`organism`] -- The immutable [`Organism`] value type with its feeding
//!   capability carried as const generic parameters, plus the four
//!   capability aliases.
//! - [`erased`] -- [`AnyOrganism`], the runtime-erased counterpart that
//!   trades static capability checking for a single homogeneous type.
//!
//! # Value semantics
//!
//! Every type here is an immutable value: "mutators" such as
//! [`Organism::with_vitality`] return a fresh value and never touch the
//! original. This makes results trivially comparable in tests and lets
//! independent encounter computations share inputs freely across threads.

pub mod diet;
pub mod erased;
pub mod organism;

// Re-export all public types at crate root for convenience.
pub use diet::Diet;
pub use erased::AnyOrganism;
pub use organism::{Carnivore, Herbivore, Omnivore, Organism, Plant, Vitality};
