//! The aggregated numerology map.

use anka_profile::{NumerologyProfile, active_profile};
use serde::{Deserialize, Serialize};

use crate::core::{
    destiny, expression, impression, mission_from_parts, motivation, psychic_number,
};
use crate::date::CalendarDate;
use crate::karmic::{
    DebtDetector, hidden_tendencies, karmic_debts, karmic_lessons, subconscious_response,
};
use crate::temporal::{
    Challenges, DecisiveMoments, LifeCycles, PersonalCycles, challenges, decisive_moments,
    life_cycles, personal_cycles,
};

/// Every derived number for one (name, birth date, current date) under
/// one profile. A pure value: recomputed per call, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyMap {
    pub motivation: u32,
    pub expression: u32,
    pub impression: u32,
    pub destiny: u32,
    pub mission: u32,
    pub psychic_number: u32,
    pub subconscious_response: u32,
    pub karmic_lessons: Vec<u32>,
    pub karmic_debts: Vec<u32>,
    pub hidden_tendencies: Vec<u32>,
    pub life_cycles: LifeCycles,
    pub challenges: Challenges,
    pub decisive_moments: DecisiveMoments,
    pub personal: PersonalCycles,
}

/// Compute the full map under an explicit profile.
pub fn full_map(
    name: &str,
    birth: CalendarDate,
    current: CalendarDate,
    profile: &NumerologyProfile,
) -> NumerologyMap {
    let expression = expression(name, profile);
    let destiny = destiny(birth, profile);
    let psychic = psychic_number(birth, profile);
    NumerologyMap {
        motivation: motivation(name, profile),
        expression,
        impression: impression(name, profile),
        destiny,
        mission: mission_from_parts(expression, destiny, psychic, profile),
        psychic_number: psychic,
        subconscious_response: subconscious_response(name, profile),
        karmic_lessons: karmic_lessons(name, profile),
        karmic_debts: karmic_debts(name, profile, DebtDetector::default()),
        hidden_tendencies: hidden_tendencies(name, profile),
        life_cycles: life_cycles(birth, profile),
        challenges: challenges(birth),
        decisive_moments: decisive_moments(birth, profile),
        personal: personal_cycles(birth, current, profile),
    }
}

/// Compute the full map under the process-wide active profile.
pub fn full_map_active(name: &str, birth: CalendarDate, current: CalendarDate) -> NumerologyMap {
    full_map(name, birth, current, &active_profile())
}
