//! Feeding capabilities.
//!
//! A capability is fully determined by two independent boolean abilities:
//! can-eat-meat and can-eat-plants. The four combinations form the closed
//! [`Diet`] enum:
//!
//! | Variant | eats meat | eats plants |
//! |---------|-----------|-------------|
//! | [`Diet::Plant`] | no | no |
//! | [`Diet::Herbivore`] | no | yes |
//! | [`Diet::Carnivore`] | yes | no |
//! | [`Diet::Omnivore`] | yes | yes |
//!
//! A plant is the combination where both flags are false -- there is no
//! separate "plant" tag. Every is-plant check anywhere in the workspace
//! reduces to this flag pair.

use serde::{Deserialize, Serialize};

/// The feeding capability of an organism.
///
/// Determines which encounters are possible: plants are immobile and can
/// never initiate consumption, while the three animal variants eat
/// according to their two ability flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diet {
    /// Eats neither meat nor plants; immobile.
    Plant,
    /// Eats plants only.
    Herbivore,
    /// Eats meat only.
    Carnivore,
    /// Eats both meat and plants.
    Omnivore,
}

impl Diet {
    /// Derive the diet from the two ability flags.
    pub const fn from_flags(eats_meat: bool, eats_plants: bool) -> Self {
        match (eats_meat, eats_plants) {
            (false, false) => Self::Plant,
            (false, true) => Self::Herbivore,
            (true, false) => Self::Carnivore,
            (true, true) => Self::Omnivore,
        }
    }

    /// Whether this diet includes meat.
    pub const fn eats_meat(self) -> bool {
        matches!(self, Self::Carnivore | Self::Omnivore)
    }

    /// Whether this diet includes plants.
    pub const fn eats_plants(self) -> bool {
        matches!(self, Self::Herbivore | Self::Omnivore)
    }

    /// True iff both ability flags are false.
    pub const fn is_plant(self) -> bool {
        matches!(self, Self::Plant)
    }

    /// True iff this diet eats plants but not meat.
    pub const fn is_herbivore(self) -> bool {
        matches!(self, Self::Herbivore)
    }

    /// True iff this diet eats meat but not plants.
    pub const fn is_carnivore(self) -> bool {
        matches!(self, Self::Carnivore)
    }

    /// True iff this diet eats both meat and plants.
    pub const fn is_omnivore(self) -> bool {
        matches!(self, Self::Omnivore)
    }
}

impl core::fmt::Display for Diet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Plant => "plant",
            Self::Herbivore => "herbivore",
            Self::Carnivore => "carnivore",
            Self::Omnivore => "omnivore",
        };
        write!(f, "{name}")
    }
}
