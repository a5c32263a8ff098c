//! The authoritative frequency value.
//!
//! Pure logic, no hardware dependencies. Every constructor and operation
//! keeps the value inside the valid range, so downstream code (divisor
//! math in particular) never sees zero or an out-of-range frequency.

/// Lowest settable frequency in Hz.
pub const FREQ_MIN_HZ: u16 = 50;

/// Highest settable frequency in Hz.
pub const FREQ_MAX_HZ: u16 = 1000;

/// Step applied by the `+` / `-` serial commands.
pub const FREQ_STEP_HZ: u16 = 10;

/// Sounder/LED control frequency in Hz.
///
/// Invariant: always within `[FREQ_MIN_HZ, FREQ_MAX_HZ]` inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Frequency(u16);

impl Frequency {
    /// Lower bound of the valid range.
    pub const MIN: Frequency = Frequency(FREQ_MIN_HZ);

    /// Upper bound of the valid range.
    pub const MAX: Frequency = Frequency(FREQ_MAX_HZ);

    /// Get the value in Hz.
    #[inline]
    pub const fn hz(self) -> u16 {
        self.0
    }

    /// Build from a raw Hz value, clamping into the valid range.
    #[inline]
    pub fn from_hz_clamped(hz: u16) -> Self {
        Frequency(hz.clamp(FREQ_MIN_HZ, FREQ_MAX_HZ))
    }

    /// Build from a raw Hz value, rejecting anything out of range.
    ///
    /// Used by numeric entry, where out-of-range values are reported to the
    /// user instead of clamped.
    #[inline]
    pub fn try_from_hz(hz: u32) -> Option<Self> {
        if hz >= FREQ_MIN_HZ as u32 && hz <= FREQ_MAX_HZ as u32 {
            Some(Frequency(hz as u16))
        } else {
            None
        }
    }

    /// One `+` command: up by the step, clamped at the ceiling.
    #[inline]
    pub fn step_up(self) -> Self {
        Self::from_hz_clamped(self.0.saturating_add(FREQ_STEP_HZ))
    }

    /// One `-` command: down by the step, clamped at the floor.
    #[inline]
    pub fn step_down(self) -> Self {
        Self::from_hz_clamped(self.0.saturating_sub(FREQ_STEP_HZ))
    }
}

impl Default for Frequency {
    /// Startup value: the bottom of the range (50 Hz).
    fn default() -> Self {
        Frequency::MIN
    }
}

impl core::fmt::Display for Frequency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
