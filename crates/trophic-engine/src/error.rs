//! Error types for the `trophic-engine` crate.
//!
//! The typed entry points have no error surface at all: invalid pairings
//! are rejected before the program runs. Only the runtime-erased entry
//! points can fail, and only by violating a precondition the type system
//! would otherwise have enforced.

/// Errors from encounter resolution over runtime-erased organisms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EncounterError {
    /// Both sides of the encounter are plants. Plants are immobile, so the
    /// pair can never meet; the typed API rejects this at compile time.
    #[error("two plants cannot encounter each other: plants are immobile")]
    ImmobilePair,
}
