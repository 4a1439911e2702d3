//! Date-derived cycles: life cycles, challenges, decisive moments, and
//! the personal year/month/day.

use anka_profile::NumerologyProfile;
use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::reduce::{reduce_allow_zero, reduce_keep_masters};

/// The three life cycles: month, day, year of birth, reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeCycles {
    pub first: u32,
    pub second: u32,
    pub third: u32,
}

/// The two challenges plus the main challenge. Zero is meaningful here,
/// so the zero-floor reduction applies throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenges {
    pub first: u32,
    pub second: u32,
    pub main: u32,
}

/// The four decisive moments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisiveMoments {
    pub first: u32,
    pub second: u32,
    pub third: u32,
    pub fourth: u32,
}

/// Personal year, month, and day relative to an externally supplied
/// current date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalCycles {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

/// Life cycles: reduced birth month, day, and year.
pub fn life_cycles(birth: CalendarDate, profile: &NumerologyProfile) -> LifeCycles {
    let masters = &profile.master_numbers;
    LifeCycles {
        first: reduce_keep_masters(birth.month, masters),
        second: reduce_keep_masters(birth.day, masters),
        third: reduce_keep_masters(birth.year, masters),
    }
}

/// Challenges from the absolute differences of the reduced date parts.
/// Masters play no role; zero is a valid outcome.
pub fn challenges(birth: CalendarDate) -> Challenges {
    let day = reduce_allow_zero(birth.day);
    let month = reduce_allow_zero(birth.month);
    let year = reduce_allow_zero(birth.year);
    let first = reduce_allow_zero(day.abs_diff(month));
    let second = reduce_allow_zero(day.abs_diff(year));
    Challenges {
        first,
        second,
        main: reduce_allow_zero(first.abs_diff(second)),
    }
}

/// The four decisive moments from pairwise raw sums of the date parts.
pub fn decisive_moments(birth: CalendarDate, profile: &NumerologyProfile) -> DecisiveMoments {
    let masters = &profile.master_numbers;
    let first = reduce_keep_masters(birth.day + birth.month, masters);
    let second = reduce_keep_masters(birth.day + birth.year, masters);
    DecisiveMoments {
        first,
        second,
        third: reduce_keep_masters(first + second, masters),
        fourth: reduce_keep_masters(birth.month + birth.year, masters),
    }
}

/// Personal cycles: the year number seeds the month number, which seeds
/// the day number.
pub fn personal_cycles(
    birth: CalendarDate,
    current: CalendarDate,
    profile: &NumerologyProfile,
) -> PersonalCycles {
    let masters = &profile.master_numbers;
    let year = reduce_keep_masters(birth.day + birth.month + current.year, masters);
    let month = reduce_keep_masters(year + current.month, masters);
    let day = reduce_keep_masters(month + current.day, masters);
    PersonalCycles { year, month, day }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anka_profile::reference;

    fn date(day: u32, month: u32, year: u32) -> CalendarDate {
        CalendarDate::new(day, month, year).expect("valid date")
    }

    #[test]
    fn life_cycles_preserve_masters() {
        let p = reference();
        let c = life_cycles(date(11, 5, 2000), &p);
        assert_eq!(c.first, 5);
        assert_eq!(c.second, 11);
        assert_eq!(c.third, 2);
    }

    #[test]
    fn challenges_reference_date() {
        // day 11 -> 2, month 5, year 2000 -> 2.
        let c = challenges(date(11, 5, 2000));
        assert_eq!(c.first, 3);
        assert_eq!(c.second, 0);
        assert_eq!(c.main, 3);
    }

    #[test]
    fn challenges_ignore_masters() {
        // day 29 -> 11 -> 2 under the zero-floor discipline.
        let c = challenges(date(29, 2, 2000));
        assert_eq!(c.first, 0);
        assert_eq!(c.second, 0);
        assert_eq!(c.main, 0);
    }

    #[test]
    fn decisive_moments_reference_date() {
        let p = reference();
        let m = decisive_moments(date(11, 5, 2000), &p);
        assert_eq!(m.first, 7); // 16
        assert_eq!(m.second, 4); // 2011
        assert_eq!(m.third, 11); // 7 + 4, master
        assert_eq!(m.fourth, 7); // 2005
    }

    #[test]
    fn personal_cycles_chain() {
        let p = reference();
        let cycles = personal_cycles(date(11, 5, 2000), date(6, 8, 2026), &p);
        // year: 11 + 5 + 2026 = 2042 -> 8
        assert_eq!(cycles.year, 8);
        // month: 8 + 8 = 16 -> 7
        assert_eq!(cycles.month, 7);
        // day: 7 + 6 = 13 -> 4
        assert_eq!(cycles.day, 4);
    }

    #[test]
    fn personal_cycles_can_hit_masters() {
        let p = reference();
        // year: 1 + 1 + 2008 = 2010 -> 3; month: 3 + 8 = 11, master.
        let cycles = personal_cycles(date(1, 1, 1970), date(1, 8, 2008), &p);
        assert_eq!(cycles.month, 11);
        // day: 11 + 1 = 12 -> 3.
        assert_eq!(cycles.day, 3);
    }
}
