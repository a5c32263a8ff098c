//! Serial command handling.
//!
//! The link carries single-byte commands: `+` and `-` step the frequency
//! immediately, digits accumulate into a pending numeric entry, and a line
//! terminator commits that entry. Bytes are fed in one at a time by the
//! control loop; there is no echo, prompt, or multi-token grammar.

use core::fmt::Write;

use crate::freq::Frequency;
use crate::status;

/// Usable digits in a pending numeric entry.
pub const DIGIT_CAPACITY: usize = 9;

/// Accumulation buffer for a numeric entry being typed over serial.
///
/// Only digit bytes go in; anything past capacity is dropped rather than
/// written out of bounds.
pub struct DigitBuffer {
    buf: [u8; DIGIT_CAPACITY],
    len: usize,
}

impl DigitBuffer {
    /// Create empty buffer.
    pub const fn new() -> Self {
        Self {
            buf: [0u8; DIGIT_CAPACITY],
            len: 0,
        }
    }

    /// Append a digit byte. Returns `false` if the buffer is full and the
    /// digit was dropped.
    pub fn push(&mut self, digit: u8) -> bool {
        debug_assert!(digit.is_ascii_digit());
        if self.len < DIGIT_CAPACITY {
            self.buf[self.len] = digit;
            self.len += 1;
            true
        } else {
            false
        }
    }

    /// Clear buffer.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Get buffered digits as a string slice.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    /// Number of buffered digits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Parse the buffered digits as an unsigned decimal number.
    ///
    /// An empty buffer parses as 0, which range validation then rejects.
    pub fn value(&self) -> u32 {
        self.as_str().parse().unwrap_or(0)
    }
}

impl Default for DigitBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// What a byte did to the frequency, for callers that want to observe it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// `+` or `-` applied (result already clamped).
    Stepped(Frequency),
    /// Numeric entry committed and accepted.
    Set(Frequency),
    /// Numeric entry committed but out of range; frequency untouched.
    Rejected(u32),
}

/// Byte-at-a-time command parser.
pub struct CommandParser {
    digits: DigitBuffer,
}

impl CommandParser {
    /// Create parser with an empty entry buffer.
    pub const fn new() -> Self {
        Self {
            digits: DigitBuffer::new(),
        }
    }

    /// Digits accumulated so far (pending numeric entry).
    pub fn pending(&self) -> &str {
        self.digits.as_str()
    }

    /// Process a single inbound byte.
    ///
    /// Status lines are written to `out` as side effects. Returns
    /// `Some(outcome)` when the byte changed or tried to change the
    /// frequency, `None` while input is still accumulating or the byte is
    /// not a command.
    pub fn handle_byte(
        &mut self,
        byte: u8,
        freq: &mut Frequency,
        out: &mut dyn Write,
    ) -> Option<CommandOutcome> {
        match byte {
            b'+' => {
                *freq = freq.step_up();
                status::updated(out, *freq);
                Some(CommandOutcome::Stepped(*freq))
            }

            b'-' => {
                *freq = freq.step_down();
                status::updated(out, *freq);
                Some(CommandOutcome::Stepped(*freq))
            }

            b'0'..=b'9' => {
                // Digits past capacity are dropped, not buffered.
                self.digits.push(byte);
                None
            }

            // Commit the pending entry. The parsed value is echoed before
            // validation; out-of-range entries leave the frequency alone.
            b'\n' | b'\r' => {
                let requested = self.digits.value();
                self.digits.clear();

                status::received(out, requested);

                match Frequency::try_from_hz(requested) {
                    Some(f) => {
                        *freq = f;
                        status::set_confirmed(out, f);
                        Some(CommandOutcome::Set(f))
                    }
                    None => {
                        status::invalid(out);
                        Some(CommandOutcome::Rejected(requested))
                    }
                }
            }

            // Anything else: no state change, no output.
            _ => None,
        }
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}
