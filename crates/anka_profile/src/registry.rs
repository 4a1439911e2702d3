//! Process-wide active-profile slot.
//!
//! The slot holds an immutable snapshot behind an `Arc`; replacing it is
//! atomic from the caller's point of view, and readers keep whatever
//! snapshot they already took. There is no other mutation path. Callers
//! that want full isolation pass an explicit profile to the calculation
//! functions instead.

use std::sync::{Arc, LazyLock, RwLock};

use crate::builtin;
use crate::profile::NumerologyProfile;

static ACTIVE: LazyLock<RwLock<Arc<NumerologyProfile>>> =
    LazyLock::new(|| RwLock::new(Arc::new(builtin::official())));

/// Snapshot of the active profile. Cheap to clone, never invalidated by
/// a later [`set_active_profile`].
pub fn active_profile() -> Arc<NumerologyProfile> {
    ACTIVE
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .clone()
}

/// Replace the active profile with an immutable snapshot of `profile`.
pub fn set_active_profile(profile: NumerologyProfile) {
    let mut slot = ACTIVE
        .write()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    *slot = Arc::new(profile);
}
