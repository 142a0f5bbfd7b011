//! End-to-end expression flows through the public API
//!
//! Drives the builder the way a front-end would: a stream of input events,
//! evaluation on demand, and display snapshots after every step.

use std::time::{Duration, Instant};

use libdeskcalc::display::{DisplaySink, WriteSink};
use libdeskcalc::{EvalError, ExpressionBuilder, InputEvent, DEFAULT_ERROR_CLEAR};

fn feed(builder: &mut ExpressionBuilder, input: &str, now: Instant) {
    for c in input.chars() {
        let event = InputEvent::from_char(c).expect("unmapped input char");
        builder.apply(event, now);
    }
}

#[test]
fn test_type_evaluate_chain() {
    let mut builder = ExpressionBuilder::new();
    let now = Instant::now();

    feed(&mut builder, "2+3*4=", now);
    assert_eq!(builder.display_text(), "14");

    // the result seeds the next expression
    feed(&mut builder, "+6=", now);
    assert_eq!(builder.display_text(), "20");
}

#[test]
fn test_display_glyph_input() {
    let mut builder = ExpressionBuilder::new();
    let now = Instant::now();

    // keypad buttons send × and ÷; they are canonicalized at the boundary
    feed(&mut builder, "8\u{00D7}4\u{00F7}2=", now);
    assert_eq!(builder.display_text(), "16");
}

#[test]
fn test_grouping_with_implicit_multiplication() {
    let mut builder = ExpressionBuilder::new();
    let now = Instant::now();

    // typing '(' after a value inserts '*('
    feed(&mut builder, "2(3+4)", now);
    assert_eq!(builder.expression(), "2*(3+4)");

    builder.apply(InputEvent::Equals, now);
    assert_eq!(builder.display_text(), "14");
}

#[test]
fn test_error_round_trip_and_recovery() {
    let mut builder = ExpressionBuilder::new();
    let now = Instant::now();

    feed(&mut builder, "5/0", now);
    let outcome = builder.apply(InputEvent::Equals, now);
    assert_eq!(outcome, Some(Err(EvalError::DivideByZero)));
    assert_eq!(builder.display_text(), "Error");

    // the sentinel clears on its own after the deadline
    assert!(builder.tick(now + DEFAULT_ERROR_CLEAR));
    assert_eq!(builder.display_text(), "0");
}

#[test]
fn test_typing_after_error_survives_stale_deadline() {
    let mut builder = ExpressionBuilder::new();
    let now = Instant::now();

    feed(&mut builder, "5/0=", now);
    assert_eq!(builder.display_text(), "Error");

    // user starts a new expression before the deadline fires
    feed(&mut builder, "12", now + Duration::from_millis(100));
    assert_eq!(builder.display_text(), "12");

    // the old deadline must not wipe it
    assert!(!builder.tick(now + DEFAULT_ERROR_CLEAR * 2));
    assert_eq!(builder.display_text(), "12");
}

#[test]
fn test_clear_and_backspace_controls() {
    let mut builder = ExpressionBuilder::new();
    let now = Instant::now();

    feed(&mut builder, "123", now);
    builder.apply(InputEvent::Backspace, now);
    assert_eq!(builder.display_text(), "12");

    builder.apply(InputEvent::Clear, now);
    assert_eq!(builder.display_text(), "0");
}

#[test]
fn test_rejected_partial_input_changes_nothing() {
    let mut builder = ExpressionBuilder::new();
    let now = Instant::now();

    // leading '+', double decimal, unmatched ')' are all silent no-ops
    feed(&mut builder, "+", now);
    assert_eq!(builder.display_text(), "0");

    feed(&mut builder, "3..", now);
    assert_eq!(builder.display_text(), "3.");

    feed(&mut builder, "5)", now);
    assert_eq!(builder.display_text(), "3.5");
}

#[test]
fn test_snapshots_through_display_sink() {
    let mut builder = ExpressionBuilder::new();
    let mut sink = WriteSink::new(Vec::new());
    let now = Instant::now();

    sink.render(builder.display_text()).unwrap();
    feed(&mut builder, "7+", now);
    sink.render(builder.display_text()).unwrap();
    builder.apply(InputEvent::Equals, now);
    sink.render(builder.display_text()).unwrap();

    let rendered = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(rendered, "0\n7+\n7\n");
}
