//! Fixture record format.

use serde::Deserialize;

/// One regression case: literal input plus the pinned expectations.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureCase {
    /// Raw name, diacritics and all.
    pub name: String,
    /// Birth date, ISO `YYYY-MM-DD`.
    pub birth_date: String,
    /// Current date for the personal cycles; defaults to the birth date.
    #[serde(default)]
    pub current_date: Option<String>,
    /// Name of a built-in profile.
    pub profile: String,
    /// Pinned outputs. Absent fields are not compared.
    pub expected: Expected,
}

/// Expected outputs of a fixture case. All fields optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Expected {
    #[serde(default)]
    pub motivation: Option<u32>,
    #[serde(default)]
    pub expression: Option<u32>,
    #[serde(default)]
    pub impression: Option<u32>,
    #[serde(default)]
    pub destiny: Option<u32>,
    #[serde(default)]
    pub mission: Option<u32>,
    #[serde(default)]
    pub psychic_number: Option<u32>,
    #[serde(default)]
    pub subconscious_response: Option<u32>,
    /// [first, second, third]
    #[serde(default)]
    pub life_cycles: Option<[u32; 3]>,
    /// [first, second, main]
    #[serde(default)]
    pub challenges: Option<[u32; 3]>,
    /// [first, second, third, fourth]
    #[serde(default)]
    pub decisive_moments: Option<[u32; 4]>,
    /// [year, month, day]
    #[serde(default)]
    pub personal: Option<[u32; 3]>,
    #[serde(default)]
    pub karmic_lessons: Option<Vec<u32>>,
    #[serde(default)]
    pub karmic_debts: Option<Vec<u32>>,
    #[serde(default)]
    pub hidden_tendencies: Option<Vec<u32>>,
}

/// Parse an ordered fixture list from JSON.
pub fn load_fixtures(json: &str) -> Result<Vec<FixtureCase>, crate::HarnessError> {
    serde_json::from_str(json).map_err(|e| crate::HarnessError::Parse(e.to_string()))
}
