//! Regression harness: replays literal fixture cases against the engine
//! and reports per-field diffs.
//!
//! Fixtures pin exact expected outputs for literal inputs. Every expected
//! field is optional, so a fixture asserts only what it knows; the
//! embedded seed set carries the calibration cases the engine was tuned
//! against.

pub mod fixture;
pub mod harness;

pub use fixture::{Expected, FixtureCase, load_fixtures};
pub use harness::{CaseReport, FieldDiff, HarnessError, SEED_FIXTURES, Summary, run_all, run_str};
