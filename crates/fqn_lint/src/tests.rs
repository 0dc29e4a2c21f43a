use super::*;

#[test]
fn test_init_tracing_is_repeatable() {
    init_tracing();
    init_tracing();
}

#[test]
fn test_rule_id() {
    assert_eq!(RULE_ID, "FullyQualifiedGlobalFunctions");
}
