//! Tests for tracing initialization.

use lesson_core::tracing::init_tracing;

#[test]
fn init_tracing_idempotent() {
    init_tracing("debug");
    init_tracing("warn");
    init_tracing("lesson_core=trace");
}

#[test]
fn invalid_directive_does_not_panic() {
    init_tracing("lesson_core=not_a_level");
}
