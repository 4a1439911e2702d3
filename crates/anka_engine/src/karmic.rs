//! Karmic analysis: lessons, hidden tendencies, subconscious response,
//! and karmic debts.
//!
//! All four read the raw (pre-reduction) letter values of the counted
//! words. Debts are detected in raw sums only; a reduced value can never
//! be a debt.

use std::collections::{BTreeMap, BTreeSet};

use anka_profile::NumerologyProfile;

use crate::valuate::{counted_words, letter_values};

/// The debt numbers, ascending.
pub const KARMIC_DEBT_NUMBERS: [u32; 4] = [13, 14, 16, 19];

/// Cap on the windowed detector's running sums. The largest debt number
/// is 19, so spans are never extended far past it.
pub const DEBT_SUM_BOUND: u32 = 40;

/// Which raw sums the debt detector examines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DebtDetector {
    /// Whole-word sums and the whole-name sum only.
    Strict,
    /// Additionally, every running sum accumulated from the start of a
    /// word (capped by [`DEBT_SUM_BOUND`]). The broader detector; the
    /// default.
    #[default]
    Windowed,
}

/// Occurrence count per produced letter value, over the counted words.
fn value_counts(name: &str, profile: &NumerologyProfile) -> BTreeMap<u32, u32> {
    let mut counts = BTreeMap::new();
    for w in counted_words(name, profile) {
        for (_, v) in letter_values(&w.normalized, profile) {
            *counts.entry(v).or_insert(0) += 1;
        }
    }
    counts
}

/// Values of the profile's number range produced by no letter of the
/// name, ascending.
///
/// Together with the produced values this partitions the range: for the
/// empty name every value of the range is a lesson.
pub fn karmic_lessons(name: &str, profile: &NumerologyProfile) -> Vec<u32> {
    let produced = value_counts(name, profile);
    profile
        .range_values()
        .filter(|v| !produced.contains_key(v))
        .collect()
}

/// Values of the number range occurring at least four times among the
/// name's letters, ascending.
pub fn hidden_tendencies(name: &str, profile: &NumerologyProfile) -> Vec<u32> {
    value_counts(name, profile)
        .into_iter()
        .filter(|&(v, n)| profile.in_range(v) && n >= 4)
        .map(|(v, _)| v)
        .collect()
}

/// Count of distinct produced values within the number range, clamped
/// into the profile's subconscious bounds.
pub fn subconscious_response(name: &str, profile: &NumerologyProfile) -> u32 {
    let distinct = value_counts(name, profile)
        .keys()
        .filter(|&&v| profile.in_range(v))
        .count() as u32;
    profile.clamp_subconscious(distinct)
}

/// Karmic debts detected in the raw letter sums of the name, deduplicated
/// and ascending. Always a subset of {13, 14, 16, 19}.
pub fn karmic_debts(name: &str, profile: &NumerologyProfile, detector: DebtDetector) -> Vec<u32> {
    let mut found = BTreeSet::new();
    let mut flag = |sum: u32| {
        if KARMIC_DEBT_NUMBERS.contains(&sum) {
            found.insert(sum);
        }
    };

    let mut name_sum = 0u32;
    for w in counted_words(name, profile) {
        // A hyphenated token normalizes to several words; spans never
        // cross the boundary.
        for word in w.normalized.split_whitespace() {
            let values: Vec<u32> = letter_values(word, profile)
                .into_iter()
                .map(|(_, v)| v)
                .collect();
            let word_sum: u32 = values.iter().sum();
            name_sum += word_sum;
            flag(word_sum);

            if detector == DebtDetector::Windowed {
                let mut running = 0u32;
                for v in values {
                    running += v;
                    if running > DEBT_SUM_BOUND {
                        break;
                    }
                    flag(running);
                }
            }
        }
    }
    flag(name_sum);

    found.into_iter().collect()
}
