//! Fixture replay and reporting.

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

use anka_engine::{CalendarDate, NumerologyMap, full_map};
use anka_profile::builtin;

use crate::fixture::{FixtureCase, load_fixtures};

/// The embedded seed fixtures: the calibration cases the engine is pinned
/// against.
pub const SEED_FIXTURES: &str = include_str!("../fixtures/seed.json");

/// Errors from fixture loading or case setup.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum HarnessError {
    /// Fixture JSON failed to parse.
    Parse(String),
    /// A case names a profile that is not built in.
    UnknownProfile(String),
    /// A case carries an invalid date.
    Date(String),
}

impl Display for HarnessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "fixture parse error: {msg}"),
            Self::UnknownProfile(name) => write!(f, "unknown profile: {name}"),
            Self::Date(msg) => write!(f, "invalid fixture date: {msg}"),
        }
    }
}

impl Error for HarnessError {}

/// One field that came out different from the pinned expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDiff {
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

/// Outcome of one fixture case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    pub name: String,
    pub profile: String,
    pub diffs: Vec<FieldDiff>,
}

impl CaseReport {
    /// True when every compared field matched.
    pub fn passed(&self) -> bool {
        self.diffs.is_empty()
    }
}

/// Aggregate outcome of a fixture run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub total: usize,
    pub reports: Vec<CaseReport>,
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for report in &self.reports {
            if report.passed() {
                continue;
            }
            writeln!(f, "FAIL {} [{}]", report.name, report.profile)?;
            for d in &report.diffs {
                writeln!(
                    f,
                    "  {}: expected {}, got {}",
                    d.field, d.expected, d.actual
                )?;
            }
        }
        write!(f, "{}/{} passed", self.passed, self.total)
    }
}

fn check<T: PartialEq + Debug>(
    diffs: &mut Vec<FieldDiff>,
    field: &'static str,
    expected: Option<T>,
    actual: T,
) {
    if let Some(expected) = expected {
        if expected != actual {
            diffs.push(FieldDiff {
                field,
                expected: format!("{expected:?}"),
                actual: format!("{actual:?}"),
            });
        }
    }
}

fn diff_case(case: &FixtureCase, map: &NumerologyMap) -> Vec<FieldDiff> {
    let e = &case.expected;
    let mut diffs = Vec::new();
    check(&mut diffs, "motivation", e.motivation, map.motivation);
    check(&mut diffs, "expression", e.expression, map.expression);
    check(&mut diffs, "impression", e.impression, map.impression);
    check(&mut diffs, "destiny", e.destiny, map.destiny);
    check(&mut diffs, "mission", e.mission, map.mission);
    check(&mut diffs, "psychic_number", e.psychic_number, map.psychic_number);
    check(
        &mut diffs,
        "subconscious_response",
        e.subconscious_response,
        map.subconscious_response,
    );
    check(
        &mut diffs,
        "life_cycles",
        e.life_cycles,
        [
            map.life_cycles.first,
            map.life_cycles.second,
            map.life_cycles.third,
        ],
    );
    check(
        &mut diffs,
        "challenges",
        e.challenges,
        [map.challenges.first, map.challenges.second, map.challenges.main],
    );
    check(
        &mut diffs,
        "decisive_moments",
        e.decisive_moments,
        [
            map.decisive_moments.first,
            map.decisive_moments.second,
            map.decisive_moments.third,
            map.decisive_moments.fourth,
        ],
    );
    check(
        &mut diffs,
        "personal",
        e.personal,
        [map.personal.year, map.personal.month, map.personal.day],
    );
    check(
        &mut diffs,
        "karmic_lessons",
        e.karmic_lessons.clone(),
        map.karmic_lessons.clone(),
    );
    check(
        &mut diffs,
        "karmic_debts",
        e.karmic_debts.clone(),
        map.karmic_debts.clone(),
    );
    check(
        &mut diffs,
        "hidden_tendencies",
        e.hidden_tendencies.clone(),
        map.hidden_tendencies.clone(),
    );
    diffs
}

/// Replay one case.
pub fn run_case(case: &FixtureCase) -> Result<CaseReport, HarnessError> {
    let profile =
        builtin(&case.profile).ok_or_else(|| HarnessError::UnknownProfile(case.profile.clone()))?;
    let birth: CalendarDate = case
        .birth_date
        .parse()
        .map_err(|e: anka_engine::DateError| HarnessError::Date(e.to_string()))?;
    let current = match &case.current_date {
        Some(s) => s
            .parse()
            .map_err(|e: anka_engine::DateError| HarnessError::Date(e.to_string()))?,
        None => birth,
    };
    let map = full_map(&case.name, birth, current, &profile);
    Ok(CaseReport {
        name: case.name.clone(),
        profile: case.profile.clone(),
        diffs: diff_case(case, &map),
    })
}

/// Replay an ordered list of cases.
pub fn run_all(cases: &[FixtureCase]) -> Result<Summary, HarnessError> {
    let mut reports = Vec::with_capacity(cases.len());
    for case in cases {
        reports.push(run_case(case)?);
    }
    let passed = reports.iter().filter(|r| r.passed()).count();
    Ok(Summary {
        passed,
        total: reports.len(),
        reports,
    })
}

/// Load fixtures from JSON and replay them.
pub fn run_str(json: &str) -> Result<Summary, HarnessError> {
    run_all(&load_fixtures(json)?)
}
