//! Integration test for the developer audit trail.

use anka_engine::{
    audit_logs, clear_audit_logs, enable_debug_mode, expression, motivation, reference,
};

#[test]
fn capture_records_per_call() {
    let p = reference();
    clear_audit_logs();
    enable_debug_mode(true);

    expression("hairã zupanc steinhauser", &p);
    motivation("hairã zupanc steinhauser", &p);

    let logs = audit_logs();
    assert_eq!(logs.len(), 2);

    let exp = &logs[0];
    assert_eq!(exp.operation, "expression");
    assert_eq!(exp.profile, "reference");
    assert_eq!(exp.accent_bonus, 3);
    assert_eq!(exp.total, 83);
    assert_eq!(exp.result, 11);
    let words: Vec<&str> = exp.words.iter().map(|w| w.word.as_str()).collect();
    assert_eq!(words, ["HAIRA", "ZUPANC", "STEINHAUSER"]);
    let sums: Vec<u32> = exp.words.iter().map(|w| w.sum).collect();
    assert_eq!(sums, [10, 30, 40]);
    assert_eq!(exp.words[0].letters, [('H', 5), ('A', 1), ('I', 1), ('R', 2), ('A', 1)]);

    let mot = &logs[1];
    assert_eq!(mot.operation, "motivation");
    // Per-word mode: word sums carry the in-word bonus (6, 7, 18); the
    // recorded total is the sum of the reduced word values.
    let sums: Vec<u32> = mot.words.iter().map(|w| w.sum).collect();
    assert_eq!(sums, [6, 7, 18]);
    assert_eq!(mot.total, 22);
    assert_eq!(mot.result, 22);

    clear_audit_logs();
    enable_debug_mode(false);
    expression("ana", &p);
    assert!(audit_logs().is_empty());
}
