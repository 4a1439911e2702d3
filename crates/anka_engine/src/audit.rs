//! Developer-only audit capture.
//!
//! While debug mode is on, the name-number calculators append one record
//! per call with the full per-word breakdown. The buffer is thread-local,
//! so concurrent test runs never share it; it is never part of the
//! production contract. Calculators also emit `tracing` events at debug
//! level regardless of the buffer state.

use std::cell::RefCell;

/// Per-word letter breakdown inside an [`AuditRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordAudit {
    /// Normalized word.
    pub word: String,
    /// Mapped letters with their values, in order.
    pub letters: Vec<(char, u32)>,
    /// Raw (pre-reduction) sum for this word.
    pub sum: u32,
}

/// One captured calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    /// Operation name ("expression", "motivation", "impression").
    pub operation: &'static str,
    /// Raw input name.
    pub input: String,
    /// Name of the profile in effect.
    pub profile: String,
    /// Per-word breakdown.
    pub words: Vec<WordAudit>,
    /// Accent bonus applied to the total.
    pub accent_bonus: u32,
    /// Pre-reduction total (bonus included).
    pub total: u32,
    /// Final reduced result.
    pub result: u32,
}

struct Trail {
    enabled: bool,
    records: Vec<AuditRecord>,
}

thread_local! {
    static TRAIL: RefCell<Trail> = const {
        RefCell::new(Trail {
            enabled: false,
            records: Vec::new(),
        })
    };
}

/// Turn audit capture on or off for the current thread.
pub fn enable_debug_mode(on: bool) {
    TRAIL.with(|t| t.borrow_mut().enabled = on);
}

/// Whether audit capture is currently enabled on this thread.
pub fn debug_enabled() -> bool {
    TRAIL.with(|t| t.borrow().enabled)
}

/// Snapshot of the captured records.
pub fn audit_logs() -> Vec<AuditRecord> {
    TRAIL.with(|t| t.borrow().records.clone())
}

/// Drop all captured records. Capture stays enabled.
pub fn clear_audit_logs() {
    TRAIL.with(|t| t.borrow_mut().records.clear());
}

/// Append a record if capture is enabled.
pub(crate) fn capture(record: AuditRecord) {
    TRAIL.with(|t| {
        let mut trail = t.borrow_mut();
        if trail.enabled {
            trail.records.push(record);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(op: &'static str) -> AuditRecord {
        AuditRecord {
            operation: op,
            input: "ana".to_owned(),
            profile: "official".to_owned(),
            words: vec![WordAudit {
                word: "ANA".to_owned(),
                letters: vec![('A', 1), ('N', 5), ('A', 1)],
                sum: 7,
            }],
            accent_bonus: 0,
            total: 7,
            result: 7,
        }
    }

    #[test]
    fn disabled_by_default_and_capture_gated() {
        clear_audit_logs();
        enable_debug_mode(false);
        capture(record("expression"));
        assert!(audit_logs().is_empty());

        enable_debug_mode(true);
        capture(record("expression"));
        capture(record("motivation"));
        let logs = audit_logs();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].operation, "expression");
        assert_eq!(logs[1].operation, "motivation");

        clear_audit_logs();
        assert!(audit_logs().is_empty());
        enable_debug_mode(false);
    }

    #[test]
    fn buffers_are_thread_local() {
        enable_debug_mode(true);
        capture(record("expression"));
        let from_other_thread = std::thread::spawn(audit_logs)
            .join()
            .expect("thread join");
        assert!(from_other_thread.is_empty());
        clear_audit_logs();
        enable_debug_mode(false);
    }
}
