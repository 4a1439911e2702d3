//! Deterministic numerology calculation engine.
//!
//! Given a name and a birth date, derives the core numbers (Expression,
//! Motivation, Impression, Destiny, Psychic Number, Mission), the karmic
//! analysis (lessons, hidden tendencies, subconscious response, debts),
//! and the temporal cycles, all under a caller-supplied
//! [`NumerologyProfile`](anka_profile::NumerologyProfile).
//!
//! Every calculation is pure and synchronous: no I/O, no clock reads, no
//! shared state beyond the optional active-profile slot and the
//! thread-local audit buffer. Identical inputs always produce a
//! structurally identical [`NumerologyMap`].

pub mod audit;
pub mod core;
pub mod date;
pub mod karmic;
pub mod map;
pub mod reduce;
pub mod temporal;
pub mod valuate;

pub use audit::{AuditRecord, WordAudit, audit_logs, clear_audit_logs, enable_debug_mode};
pub use crate::core::{destiny, expression, impression, mission, motivation, psychic_number};
pub use date::{CalendarDate, DateError};
pub use karmic::{
    DEBT_SUM_BOUND, DebtDetector, KARMIC_DEBT_NUMBERS, hidden_tendencies, karmic_debts,
    karmic_lessons, subconscious_response,
};
pub use map::{NumerologyMap, full_map, full_map_active};
pub use reduce::{digit_sum, reduce_allow_zero, reduce_keep_masters};
pub use temporal::{
    Challenges, DecisiveMoments, LifeCycles, PersonalCycles, challenges, decisive_moments,
    life_cycles, personal_cycles,
};

// Re-export the profile and text types used in the public signatures so
// callers can depend on this crate alone.
pub use anka_profile::{
    AccentPolicy, MissionFormula, NumerologyProfile, active_profile, builtin, official,
    pythagorean, reference, set_active_profile,
};
pub use anka_text::{AccentCounts, accent_counts, normalize};
