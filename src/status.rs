//! Status line templates for the serial link.
//!
//! Every outbound message the firmware produces goes through one of these
//! helpers. The byte sequences are part of the wire protocol; host-side
//! tooling matches on them, so the leading blank line and exact wording
//! must not change. Writes are byte-synchronous against the board's
//! blocking transmit; write errors are ignored.

use core::fmt::Write;

use crate::freq::Frequency;

/// Rejection text for numeric entry outside the valid range.
pub const INVALID_MSG: &str = "\nInvalid frequency. Enter a value between 50 and 1000.\n";

/// Periodic report, emitted roughly every two seconds.
pub fn periodic(out: &mut dyn Write, freq: Frequency) {
    let _ = write!(out, "\nFrequency is {} Hz\n", freq);
}

/// Immediate report after a `+` or `-` command.
pub fn updated(out: &mut dyn Write, freq: Frequency) {
    let _ = write!(out, "\nFrequency updated to: {} Hz\n", freq);
}

/// Echo of a committed numeric entry, emitted before range validation.
pub fn received(out: &mut dyn Write, hz: u32) {
    let _ = write!(out, "\nReceived frequency: {} Hz\n", hz);
}

/// Confirmation after a numeric entry passed validation.
pub fn set_confirmed(out: &mut dyn Write, freq: Frequency) {
    let _ = write!(out, "\nFrequency set to: {} Hz\n", freq);
}

/// Rejection of an out-of-range numeric entry.
pub fn invalid(out: &mut dyn Write) {
    let _ = out.write_str(INVALID_MSG);
}
