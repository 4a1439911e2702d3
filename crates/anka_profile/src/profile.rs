//! Profile data types.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Additive bonus applied per accented vowel, by diacritic category.
///
/// The bonus enters the pre-reduction sum of Expression and Motivation.
/// A policy of all zeros disables accent handling entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccentPolicy {
    pub acute: u32,
    pub grave: u32,
    pub circumflex: u32,
    pub umlaut: u32,
    pub tilde: u32,
}

impl AccentPolicy {
    /// Policy that ignores accents completely.
    pub const fn none() -> Self {
        Self {
            acute: 0,
            grave: 0,
            circumflex: 0,
            umlaut: 0,
            tilde: 0,
        }
    }

    /// The same bonus for every category.
    pub const fn uniform(bonus: u32) -> Self {
        Self {
            acute: bonus,
            grave: bonus,
            circumflex: bonus,
            umlaut: bonus,
            tilde: bonus,
        }
    }

    /// True when no category carries a bonus.
    pub const fn is_zero(&self) -> bool {
        self.acute == 0
            && self.grave == 0
            && self.circumflex == 0
            && self.umlaut == 0
            && self.tilde == 0
    }
}

impl Default for AccentPolicy {
    /// Tilde counts 6, every other diacritic counts 3.
    fn default() -> Self {
        Self {
            acute: 3,
            grave: 3,
            circumflex: 3,
            umlaut: 3,
            tilde: 6,
        }
    }
}

/// Which two numbers combine into the Mission number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionFormula {
    /// Mission = reduce(Expression + Destiny).
    ExpressionPlusDestiny,
    /// Mission = reduce(Destiny + Psychic Number).
    DestinyPlusPsychic,
}

impl MissionFormula {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ExpressionPlusDestiny => "expression+destiny",
            Self::DestinyPlusPsychic => "destiny+psychic",
        }
    }
}

/// A named, immutable bundle of calculation rules.
///
/// Profiles are plain data: the engine is parameterized entirely by the
/// fields below. Construct one, hand it to the calculation functions (or
/// install it via [`crate::set_active_profile`]), and never mutate it
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumerologyProfile {
    /// Profile name, used by fixtures and the CLI.
    pub name: String,
    /// Uppercase letter → value. Unmapped characters contribute nothing.
    pub letter_map: BTreeMap<char, u8>,
    /// Letters treated as vowels for Motivation/Impression splits.
    pub vowel_set: BTreeSet<char>,
    /// Connector words (DE, DA, ...) optionally excluded from name numbers.
    pub particle_set: BTreeSet<String>,
    /// Values exempt from digit reduction, traditionally {11, 22}.
    pub master_numbers: BTreeSet<u32>,
    /// Motivation algorithm: one global vowel sum (true) or per-word
    /// reduce-then-sum (false).
    pub use_global_vowel_sum: bool,
    /// Whether particle words count toward name-derived numbers.
    pub include_particles: bool,
    /// Accent bonus policy for Expression and Motivation.
    pub accent_policy: AccentPolicy,
    /// Formula selector for the Mission number.
    pub mission_formula: MissionFormula,
    /// Inclusive value range produced by the letter table, for karmic
    /// lessons and hidden tendencies.
    pub number_range: (u8, u8),
    /// Inclusive clamp applied to the subconscious response.
    pub subconscious_clamp: (u8, u8),
}

impl NumerologyProfile {
    /// True when `n` is a master number under this profile.
    pub fn is_master(&self, n: u32) -> bool {
        self.master_numbers.contains(&n)
    }

    /// True when `v` falls inside the profile's number range.
    pub fn in_range(&self, v: u32) -> bool {
        v >= u32::from(self.number_range.0) && v <= u32::from(self.number_range.1)
    }

    /// The values of the number range, ascending.
    pub fn range_values(&self) -> impl Iterator<Item = u32> + use<> {
        u32::from(self.number_range.0)..=u32::from(self.number_range.1)
    }

    /// Clamp a subconscious-response count into the configured bounds.
    pub fn clamp_subconscious(&self, count: u32) -> u32 {
        count.clamp(
            u32::from(self.subconscious_clamp.0),
            u32::from(self.subconscious_clamp.1),
        )
    }
}
