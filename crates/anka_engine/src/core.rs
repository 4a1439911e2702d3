//! Core numbers: Expression, Motivation, Impression, Destiny, Psychic
//! Number, and Mission.
//!
//! Name numbers share one skeleton: normalize, drop excluded particles,
//! sum the mapped letter values of the selected letter class, apply the
//! accent bonus where the formula calls for one, reduce. Motivation is
//! the exception: per profile it either joins the global skeleton
//! (vowels, one sum, one reduction) or reduces each word on its own and
//! then reduces the sum of the word results.

use anka_profile::{MissionFormula, NumerologyProfile};
use anka_text::accent_counts;

use crate::audit::{self, AuditRecord, WordAudit};
use crate::date::CalendarDate;
use crate::reduce::reduce_keep_masters;
use crate::valuate::{accent_bonus, counted_words, is_vowel, value_of};

/// Which letters of a word a calculation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LetterClass {
    All,
    Vowels,
    Consonants,
}

impl LetterClass {
    fn keeps(self, c: char, profile: &NumerologyProfile) -> bool {
        match self {
            Self::All => true,
            Self::Vowels => is_vowel(c, profile),
            Self::Consonants => !is_vowel(c, profile),
        }
    }
}

/// Mapped letters of `word` restricted to a class, with values.
fn class_values(word: &str, profile: &NumerologyProfile, class: LetterClass) -> Vec<(char, u32)> {
    word.chars()
        .filter(|&c| class.keeps(c, profile))
        .filter_map(|c| value_of(c, profile).map(|v| (c, v)))
        .collect()
}

/// Shared skeleton of the globally-summed name numbers.
fn global_number(
    name: &str,
    profile: &NumerologyProfile,
    class: LetterClass,
    with_bonus: bool,
    operation: &'static str,
) -> u32 {
    let words = counted_words(name, profile);
    let capture = audit::debug_enabled();
    let mut breakdown = Vec::new();
    let mut letter_total = 0u32;
    for w in &words {
        let letters = class_values(&w.normalized, profile, class);
        let sum: u32 = letters.iter().map(|&(_, v)| v).sum();
        letter_total += sum;
        if capture {
            breakdown.push(WordAudit {
                word: w.normalized.clone(),
                letters,
                sum,
            });
        }
    }

    let bonus = if with_bonus && !profile.accent_policy.is_zero() {
        words
            .iter()
            .map(|w| accent_bonus(&profile.accent_policy, &accent_counts(&w.raw)))
            .sum()
    } else {
        0
    };

    let total = letter_total + bonus;
    let result = reduce_keep_masters(total, &profile.master_numbers);
    tracing::debug!(operation, input = name, profile = %profile.name, bonus, total, result);
    if capture {
        audit::capture(AuditRecord {
            operation,
            input: name.to_owned(),
            profile: profile.name.clone(),
            words: breakdown,
            accent_bonus: bonus,
            total,
            result,
        });
    }
    result
}

/// Motivation in per-word mode: each word's vowel sum (plus the bonus for
/// accents originating in that word) reduces on its own; the reduced
/// values are then summed and reduced again.
fn per_word_motivation(name: &str, profile: &NumerologyProfile) -> u32 {
    let words = counted_words(name, profile);
    let capture = audit::debug_enabled();
    let mut breakdown = Vec::new();
    let mut reduced_total = 0u32;
    let mut bonus_total = 0u32;
    for w in &words {
        let letters = class_values(&w.normalized, profile, LetterClass::Vowels);
        let mut sum: u32 = letters.iter().map(|&(_, v)| v).sum();
        if !profile.accent_policy.is_zero() {
            let bonus = accent_bonus(&profile.accent_policy, &accent_counts(&w.raw));
            bonus_total += bonus;
            sum += bonus;
        }
        reduced_total += reduce_keep_masters(sum, &profile.master_numbers);
        if capture {
            breakdown.push(WordAudit {
                word: w.normalized.clone(),
                letters,
                sum,
            });
        }
    }

    let result = reduce_keep_masters(reduced_total, &profile.master_numbers);
    tracing::debug!(
        operation = "motivation",
        input = name,
        profile = %profile.name,
        bonus = bonus_total,
        total = reduced_total,
        result
    );
    if capture {
        audit::capture(AuditRecord {
            operation: "motivation",
            input: name.to_owned(),
            profile: profile.name.clone(),
            words: breakdown,
            accent_bonus: bonus_total,
            total: reduced_total,
            result,
        });
    }
    result
}

/// Expression: every mapped letter of the counted words, accent bonus
/// included, one reduction.
pub fn expression(name: &str, profile: &NumerologyProfile) -> u32 {
    global_number(name, profile, LetterClass::All, true, "expression")
}

/// Motivation: vowels only, algorithm selected by
/// `profile.use_global_vowel_sum`.
pub fn motivation(name: &str, profile: &NumerologyProfile) -> u32 {
    if profile.use_global_vowel_sum {
        global_number(name, profile, LetterClass::Vowels, true, "motivation")
    } else {
        per_word_motivation(name, profile)
    }
}

/// Impression: consonants only, no accent bonus.
pub fn impression(name: &str, profile: &NumerologyProfile) -> u32 {
    global_number(name, profile, LetterClass::Consonants, false, "impression")
}

/// Destiny: digit sum of the zero-padded DDMMYYYY string, reduced.
pub fn destiny(birth: CalendarDate, profile: &NumerologyProfile) -> u32 {
    let sum: u32 = birth
        .digit_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .sum();
    reduce_keep_masters(sum, &profile.master_numbers)
}

/// Psychic Number: the birth day alone, reduced.
pub fn psychic_number(birth: CalendarDate, profile: &NumerologyProfile) -> u32 {
    reduce_keep_masters(birth.day, &profile.master_numbers)
}

/// Mission from already-computed parts, per the profile's formula.
pub fn mission_from_parts(
    expression: u32,
    destiny: u32,
    psychic: u32,
    profile: &NumerologyProfile,
) -> u32 {
    let sum = match profile.mission_formula {
        MissionFormula::ExpressionPlusDestiny => expression + destiny,
        MissionFormula::DestinyPlusPsychic => destiny + psychic,
    };
    reduce_keep_masters(sum, &profile.master_numbers)
}

/// Mission: combines two derived numbers per the profile's formula.
pub fn mission(name: &str, birth: CalendarDate, profile: &NumerologyProfile) -> u32 {
    mission_from_parts(
        expression(name, profile),
        destiny(birth, profile),
        psychic_number(birth, profile),
        profile,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use anka_profile::{builtin, official, pythagorean, reference};

    #[test]
    fn empty_name_yields_zero() {
        let p = official();
        for name in ["", "   ", "...", "1234"] {
            assert_eq!(expression(name, &p), 0, "{name:?}");
            assert_eq!(motivation(name, &p), 0, "{name:?}");
            assert_eq!(impression(name, &p), 0, "{name:?}");
        }
    }

    #[test]
    fn empty_letter_map_degrades_to_zero() {
        let mut p = official();
        p.letter_map.clear();
        assert_eq!(expression("maria silva", &p), 0);
        assert_eq!(motivation("maria silva", &p), 0);
        assert_eq!(impression("maria silva", &p), 0);
    }

    #[test]
    fn unmapped_characters_skipped() {
        let p = official();
        assert_eq!(expression("ana", &p), expression("a-n.a 22", &p));
    }

    #[test]
    fn destiny_reference_date() {
        let p = reference();
        let birth = CalendarDate::new(11, 5, 2000).expect("valid date");
        assert_eq!(destiny(birth, &p), 9);
    }

    #[test]
    fn psychic_preserves_masters() {
        let p = reference();
        let d11 = CalendarDate::new(11, 5, 2000).expect("valid date");
        let d28 = CalendarDate::new(28, 5, 1991).expect("valid date");
        assert_eq!(psychic_number(d11, &p), 11);
        assert_eq!(psychic_number(d28, &p), 1);
    }

    #[test]
    fn mission_formula_selects_operands() {
        let p = official();
        // expression+destiny = 8+9 = 17 -> 8
        assert_eq!(mission_from_parts(8, 9, 3, &p), 8);

        let mut alt = p.clone();
        alt.mission_formula = MissionFormula::DestinyPlusPsychic;
        // destiny+psychic = 9+3 = 12 -> 3
        assert_eq!(mission_from_parts(8, 9, 3, &alt), 3);
    }

    #[test]
    fn mission_formula_sensitivity() {
        // Switching the formula changes the result unless the operand
        // sums coincide.
        let name = "hairã zupanc steinhauser";
        let birth = CalendarDate::new(11, 5, 2000).expect("valid date");
        let e_d = reference();
        let mut d_p = reference();
        d_p.mission_formula = MissionFormula::DestinyPlusPsychic;
        // expression+destiny = 11+9 = 20 -> 2; destiny+psychic = 9+11 = 20 -> 2.
        // Equal operand sums coincide by construction here.
        assert_eq!(mission(name, birth, &e_d), mission(name, birth, &d_p));

        let other = CalendarDate::new(28, 5, 1991).expect("valid date");
        // expression+destiny = 11+8 = 19 -> 1; destiny+psychic = 8+1 = 9.
        assert_ne!(mission(name, other, &e_d), mission(name, other, &d_p));
    }

    #[test]
    fn motivation_modes_differ_on_accented_names() {
        let global = official();
        let per_word = reference();
        let name = "hairã zupanc steinhauser";
        assert_ne!(motivation(name, &global), motivation(name, &per_word));
    }

    #[test]
    fn pythagorean_ignores_accents() {
        let p = pythagorean();
        assert_eq!(expression("hairã", &p), expression("haira", &p));
    }

    #[test]
    fn builtin_profiles_stay_total() {
        let birth = CalendarDate::new(1, 1, 1970).expect("valid date");
        for name in ["", "ç", "maria-josé d'ávila", "x"] {
            for profile_name in anka_profile::BUILTIN_PROFILE_NAMES {
                let p = builtin(profile_name).expect("builtin profile");
                expression(name, &p);
                motivation(name, &p);
                impression(name, &p);
                mission(name, birth, &p);
            }
        }
    }
}
