//! Frequency-to-hardware conversions.
//!
//! Pure helpers, separate from the board layer that applies them. The
//! sounder is modeled as a toggle timer: the output pin flips on every
//! compare match, so the square wave runs at half the match rate. The LED
//! gets an 8-bit duty derived from the frequency; the `mod 256` sawtooth is
//! deliberate: brightness cycles with frequency instead of growing
//! monotonically.

use crate::freq::Frequency;

/// Clock feeding the sounder's toggle timer, in Hz.
pub const SOUNDER_CLOCK_HZ: u32 = 16_000_000;

/// Compare value for the sounder toggle timer.
///
/// `divisor = clock / (2 * f) - 1`. Divide-by-zero is impossible:
/// [`Frequency`] is bounded away from zero by construction.
#[inline]
pub fn toggle_divisor(freq: Frequency) -> u32 {
    SOUNDER_CLOCK_HZ / (2 * freq.hz() as u32) - 1
}

/// Reverse of [`toggle_divisor`], for hardware that takes a frequency
/// directly instead of a compare value.
#[inline]
pub fn divisor_to_hz(divisor: u32) -> u32 {
    SOUNDER_CLOCK_HZ / (2 * (divisor + 1))
}

/// 8-bit LED duty for the given frequency: `(f / 4) mod 256`.
#[inline]
pub fn led_duty(freq: Frequency) -> u8 {
    ((freq.hz() / 4) % 256) as u8
}
