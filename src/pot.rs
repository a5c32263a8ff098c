//! Potentiometer sample mapping.
//!
//! Pure function of the raw 10-bit reading; no internal state. The board
//! layer owns the actual conversion start/wait and hands over a value in
//! `[0, ADC_MAX]`.

use crate::freq::{Frequency, FREQ_MAX_HZ, FREQ_MIN_HZ};

/// Full-scale raw reading of the 10-bit sampler.
pub const ADC_MAX: u16 = 1023;

/// Map a raw pot sample onto the valid frequency range.
///
/// Linear: 0 maps to 50 Hz, full scale maps to 1000 Hz. Readings above
/// full scale are treated as full scale.
#[inline]
pub fn frequency_from_sample(raw: u16) -> Frequency {
    let raw = raw.min(ADC_MAX) as u32;
    let span = (FREQ_MAX_HZ - FREQ_MIN_HZ) as u32;
    let hz = FREQ_MIN_HZ as u32 + (raw * span) / ADC_MAX as u32;
    Frequency::from_hz_clamped(hz as u16)
}
