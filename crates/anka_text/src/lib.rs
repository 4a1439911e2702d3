//! Name normalization and diacritic classification.
//!
//! This crate prepares raw personal names for letter valuation:
//! - `normalize` strips diacritics (keeping the cedilla), uppercases, and
//!   collapses everything that is not a letter into single spaces.
//! - `accent_counts` classifies accented vowels of the *original* string
//!   into five diacritic categories. It must run before normalization,
//!   since normalization destroys the marks it counts.

pub mod accents;
pub mod normalize;

pub use accents::{AccentCounts, accent_counts};
pub use normalize::{RETAINED_LETTER, normalize, words};
