//! Command parser tests

use tonepot::command::{CommandOutcome, CommandParser, DIGIT_CAPACITY};
use tonepot::freq::Frequency;
use tonepot::status::INVALID_MSG;

fn parser_at(hz: u16) -> (CommandParser, Frequency, String) {
    (
        CommandParser::new(),
        Frequency::from_hz_clamped(hz),
        String::new(),
    )
}

fn feed(parser: &mut CommandParser, freq: &mut Frequency, out: &mut String, bytes: &[u8]) {
    for &b in bytes {
        parser.handle_byte(b, freq, out);
    }
}

#[test]
fn test_plus_steps_up_by_ten() {
    let (mut parser, mut freq, mut out) = parser_at(500);

    let outcome = parser.handle_byte(b'+', &mut freq, &mut out);

    assert_eq!(freq.hz(), 510);
    assert_eq!(outcome, Some(CommandOutcome::Stepped(freq)));
    assert_eq!(out, "\nFrequency updated to: 510 Hz\n");
}

#[test]
fn test_minus_steps_down_by_ten() {
    let (mut parser, mut freq, mut out) = parser_at(500);

    parser.handle_byte(b'-', &mut freq, &mut out);

    assert_eq!(freq.hz(), 490);
    assert_eq!(out, "\nFrequency updated to: 490 Hz\n");
}

#[test]
fn test_plus_clamps_at_ceiling() {
    let (mut parser, mut freq, mut out) = parser_at(995);

    parser.handle_byte(b'+', &mut freq, &mut out);

    // Clamped to 1000, not 1005, and silently: no invalid-range message.
    assert_eq!(freq.hz(), 1000);
    assert!(!out.contains("Invalid"));
    assert_eq!(out, "\nFrequency updated to: 1000 Hz\n");
}

#[test]
fn test_minus_clamps_at_floor() {
    let (mut parser, mut freq, mut out) = parser_at(55);

    parser.handle_byte(b'-', &mut freq, &mut out);

    assert_eq!(freq.hz(), 50);
    assert!(!out.contains("Invalid"));
}

#[test]
fn test_numeric_entry_sets_frequency() {
    let (mut parser, mut freq, mut out) = parser_at(50);

    feed(&mut parser, &mut freq, &mut out, b"500\n");

    assert_eq!(freq.hz(), 500);
    assert!(out.contains("\nReceived frequency: 500 Hz\n"));
    assert!(out.contains("\nFrequency set to: 500 Hz\n"));
}

#[test]
fn test_carriage_return_also_commits() {
    let (mut parser, mut freq, mut out) = parser_at(50);

    feed(&mut parser, &mut freq, &mut out, b"250\r");

    assert_eq!(freq.hz(), 250);
    assert!(out.contains("\nFrequency set to: 250 Hz\n"));
}

#[test]
fn test_out_of_range_entry_rejected() {
    let (mut parser, mut freq, mut out) = parser_at(500);

    feed(&mut parser, &mut freq, &mut out, b"2000\n");

    assert_eq!(freq.hz(), 500, "frequency must be left unchanged");
    // The parsed value is echoed before validation.
    assert!(out.contains("\nReceived frequency: 2000 Hz\n"));
    assert!(out.contains(INVALID_MSG));
    assert!(!out.contains("Frequency set to"));
}

#[test]
fn test_empty_commit_parses_as_zero_and_is_rejected() {
    let (mut parser, mut freq, mut out) = parser_at(500);

    let outcome = parser.handle_byte(b'\n', &mut freq, &mut out);

    assert_eq!(outcome, Some(CommandOutcome::Rejected(0)));
    assert_eq!(freq.hz(), 500);
    assert!(out.contains("\nReceived frequency: 0 Hz\n"));
    assert!(out.contains(INVALID_MSG));
}

#[test]
fn test_entry_buffer_cleared_after_rejection() {
    let (mut parser, mut freq, mut out) = parser_at(50);

    feed(&mut parser, &mut freq, &mut out, b"2000\n");
    assert_eq!(freq.hz(), 50);

    // A fresh entry right after must not see stale digits.
    feed(&mut parser, &mut freq, &mut out, b"300\n");
    assert_eq!(freq.hz(), 300);
}

#[test]
fn test_digits_past_capacity_are_dropped() {
    let (mut parser, mut freq, mut out) = parser_at(500);

    // Twelve digits into a nine-digit buffer: the excess is dropped, not
    // written out of bounds.
    for _ in 0..12 {
        parser.handle_byte(b'1', &mut freq, &mut out);
    }
    assert_eq!(parser.pending().len(), DIGIT_CAPACITY);

    let outcome = parser.handle_byte(b'\n', &mut freq, &mut out);
    assert_eq!(outcome, Some(CommandOutcome::Rejected(111_111_111)));
    assert_eq!(freq.hz(), 500);
}

#[test]
fn test_unrecognized_bytes_are_ignored() {
    let (mut parser, mut freq, mut out) = parser_at(500);

    for &b in b"xyz !@#\t\x08\x1b" {
        let outcome = parser.handle_byte(b, &mut freq, &mut out);
        assert_eq!(outcome, None);
    }

    assert_eq!(freq.hz(), 500);
    assert!(out.is_empty(), "ignored bytes must produce no output");
    assert!(parser.pending().is_empty());
}

#[test]
fn test_non_digit_bytes_do_not_join_an_entry() {
    let (mut parser, mut freq, mut out) = parser_at(50);

    // Interleaved garbage is dropped; the digits still commit as 400.
    feed(&mut parser, &mut freq, &mut out, b"4x0 0\n");

    assert_eq!(freq.hz(), 400);
}

#[test]
fn test_frequency_never_leaves_range() {
    let (mut parser, mut freq, mut out) = parser_at(50);

    let soup: &[u8] = b"++++999999999\n---0\n+50\n-\r2000\n~~~123";
    for &b in soup {
        parser.handle_byte(b, &mut freq, &mut out);
        assert!(
            (50..=1000).contains(&freq.hz()),
            "frequency {} escaped the valid range after byte {:?}",
            freq.hz(),
            b as char
        );
    }
}
