//! Uppercase, diacritic-free rendering of a raw name.
//!
//! Normalization is NFD-based: the string is decomposed, combining marks
//! are dropped, and the result is uppercased. The cedilla is the one
//! diacritic that survives: `ç` carries its own value in the letter
//! tables, so it is swapped to a private-use placeholder before
//! decomposition and restored afterwards.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// The one letter whose diacritic survives normalization.
pub const RETAINED_LETTER: char = 'Ç';

/// Private-use stand-in that shields the retained letter from NFD.
const PLACEHOLDER: char = '\u{E000}';

/// Normalize a raw name for letter valuation.
///
/// Decomposes, drops combining marks (except on the retained letter),
/// uppercases, replaces any remaining non-letter character with a space,
/// collapses whitespace runs, and trims. `"Jôão d'Ávila"` becomes
/// `"JOAO D AVILA"`; `"Conceição"` becomes `"CONCEIÇAO"`.
pub fn normalize(raw: &str) -> String {
    let mut stripped = String::with_capacity(raw.len());
    let shielded = raw
        .chars()
        .map(|c| if c == 'ç' || c == 'Ç' { PLACEHOLDER } else { c });
    for c in shielded.nfd().filter(|c| !is_combining_mark(*c)) {
        if c == PLACEHOLDER {
            stripped.push(RETAINED_LETTER);
        } else if c.is_alphabetic() {
            stripped.extend(c.to_uppercase());
        } else {
            stripped.push(' ');
        }
    }

    // Collapse whitespace runs and trim in one pass.
    let mut out = String::with_capacity(stripped.len());
    for word in stripped.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Words of a normalized name.
pub fn words(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}
