//! Calculation profiles: the complete, named rule bundles that determine
//! how every derived number is computed.
//!
//! A profile carries the letter table, vowel and particle sets, master
//! numbers, formula switches, and the accent-bonus policy. Calibration
//! variants of the engine are expressed as additional profile instances,
//! never as forked code paths.
//!
//! The crate also maintains a single process-wide active-profile slot
//! (see [`registry`]); every calculation entry point accepts an explicit
//! profile that bypasses the slot entirely.

pub mod builtin;
pub mod profile;
pub mod registry;

pub use builtin::{BUILTIN_PROFILE_NAMES, builtin, official, pythagorean, reference};
pub use profile::{AccentPolicy, MissionFormula, NumerologyProfile};
pub use registry::{active_profile, set_active_profile};
