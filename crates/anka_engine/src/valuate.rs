//! Per-character valuation and word accounting under a profile.

use anka_profile::{AccentPolicy, NumerologyProfile};
use anka_text::{AccentCounts, accent_counts, normalize};

/// Value of a single (normalized, uppercase) character, if mapped.
///
/// Unmapped characters — digits, punctuation, stray symbols — contribute
/// nothing. This skip-unknown policy is deliberate.
pub fn value_of(c: char, profile: &NumerologyProfile) -> Option<u32> {
    profile.letter_map.get(&c).map(|&v| u32::from(v))
}

/// Whether a character counts as a vowel under the profile.
pub fn is_vowel(c: char, profile: &NumerologyProfile) -> bool {
    profile.vowel_set.contains(&c)
}

/// The mapped letters of a word with their values, in order.
pub fn letter_values(word: &str, profile: &NumerologyProfile) -> Vec<(char, u32)> {
    word.chars()
        .filter_map(|c| value_of(c, profile).map(|v| (c, v)))
        .collect()
}

/// A whitespace token of the raw name together with its normalized form.
///
/// The raw form is kept so accent bonuses can be attributed to the word
/// the accented vowel came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountedWord {
    pub raw: String,
    pub normalized: String,
}

/// The words of a raw name that count toward name-derived numbers.
///
/// Tokens whose normalized form is empty are dropped; particle words are
/// dropped unless the profile includes them.
pub fn counted_words(raw_name: &str, profile: &NumerologyProfile) -> Vec<CountedWord> {
    raw_name
        .split_whitespace()
        .filter_map(|tok| {
            let normalized = normalize(tok);
            if normalized.is_empty() {
                return None;
            }
            if !profile.include_particles && profile.particle_set.contains(&normalized) {
                return None;
            }
            Some(CountedWord {
                raw: tok.to_owned(),
                normalized,
            })
        })
        .collect()
}

/// Accent bonus for one set of counts under a policy.
pub fn accent_bonus(policy: &AccentPolicy, counts: &AccentCounts) -> u32 {
    policy.acute * counts.acute
        + policy.grave * counts.grave
        + policy.circumflex * counts.circumflex
        + policy.umlaut * counts.umlaut
        + policy.tilde * counts.tilde
}

/// Accent bonus accumulated over the counted words of a raw name.
pub fn name_accent_bonus(raw_name: &str, profile: &NumerologyProfile) -> u32 {
    if profile.accent_policy.is_zero() {
        return 0;
    }
    counted_words(raw_name, profile)
        .iter()
        .map(|w| accent_bonus(&profile.accent_policy, &accent_counts(&w.raw)))
        .sum()
}

/// Raw (pre-reduction) sum of every mapped letter of the counted words.
pub fn name_letter_sum(raw_name: &str, profile: &NumerologyProfile) -> u32 {
    counted_words(raw_name, profile)
        .iter()
        .flat_map(|w| letter_values(&w.normalized, profile))
        .map(|(_, v)| v)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anka_profile::{official, reference};

    #[test]
    fn value_of_mapped_and_unmapped() {
        let p = official();
        assert_eq!(value_of('A', &p), Some(1));
        assert_eq!(value_of('Z', &p), Some(7));
        assert_eq!(value_of('Ç', &p), Some(6));
        assert_eq!(value_of('7', &p), None);
        assert_eq!(value_of('-', &p), None);
        assert_eq!(value_of(' ', &p), None);
    }

    #[test]
    fn vowel_classification() {
        let p = official();
        for c in ['A', 'E', 'I', 'O', 'U'] {
            assert!(is_vowel(c, &p), "{c}");
        }
        for c in ['B', 'Y', 'Ç'] {
            assert!(!is_vowel(c, &p), "{c}");
        }
    }

    #[test]
    fn letter_values_skip_unknown() {
        let p = official();
        let vals = letter_values("D AVILA2", &p);
        let letters: String = vals.iter().map(|&(c, _)| c).collect();
        assert_eq!(letters, "DAVILA");
    }

    #[test]
    fn counted_words_keeps_particles_when_included() {
        let p = official();
        let words = counted_words("jéssica paula de souza", &p);
        let norm: Vec<&str> = words.iter().map(|w| w.normalized.as_str()).collect();
        assert_eq!(norm, ["JESSICA", "PAULA", "DE", "SOUZA"]);
    }

    #[test]
    fn counted_words_drops_particles_when_excluded() {
        let p = reference();
        let words = counted_words("jéssica paula de souza", &p);
        let norm: Vec<&str> = words.iter().map(|w| w.normalized.as_str()).collect();
        assert_eq!(norm, ["JESSICA", "PAULA", "SOUZA"]);
    }

    #[test]
    fn counted_words_drops_empty_tokens() {
        let p = official();
        let words = counted_words("ana ... silva", &p);
        let norm: Vec<&str> = words.iter().map(|w| w.normalized.as_str()).collect();
        assert_eq!(norm, ["ANA", "SILVA"]);
    }

    #[test]
    fn name_letter_sum_reference_name() {
        // HAIRA=10, ZUPANC=30, STEINHAUSER=40 under the cabalistic table.
        let p = reference();
        assert_eq!(name_letter_sum("hairã zupanc steinhauser", &p), 80);
    }

    #[test]
    fn accent_bonus_per_category() {
        let p = official();
        // é is acute (2), ã is tilde (3) under the official policy.
        assert_eq!(name_accent_bonus("jéssica", &p), 2);
        assert_eq!(name_accent_bonus("hairã", &p), 3);
        assert_eq!(name_accent_bonus("jôse", &p), 7);
        assert_eq!(name_accent_bonus("ana", &p), 0);
    }

    #[test]
    fn accent_bonus_skips_excluded_particles() {
        let p = reference();
        // "dé" normalizes to the particle DE and is excluded entirely.
        assert_eq!(name_accent_bonus("ana dé prado", &p), 0);
    }
}
