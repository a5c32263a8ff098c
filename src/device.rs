//! The control loop.
//!
//! One [`Controller`] owns all mutable device state and runs the whole
//! firmware as a cooperative, interrupt-free polling loop. Hardware sits
//! behind the [`Board`] trait so every tick is testable on the host with a
//! scripted board.
//!
//! Per ~1 ms tick:
//! 1. Sample the switch. OFF suspends: nothing else runs, counters freeze,
//!    serial input arriving during the suspend is lost.
//! 2. Every `PRINT_INTERVAL_TICKS` ticks, report the frequency.
//! 3. Consume at most one serial byte through the command parser.
//! 4. Read the pot and overwrite the frequency with the mapped value.
//! 5. Re-apply sounder divisor and LED duty, changed or not.

use core::fmt::Write;

use crate::command::CommandParser;
use crate::freq::Frequency;
use crate::{output, pot, status};

/// Ticks between periodic status reports (~2 s at the 1 ms tick).
pub const PRINT_INTERVAL_TICKS: u32 = 2000;

/// Pacing delay per tick, in milliseconds.
pub const TICK_MS: u32 = 1;

/// Hardware access for one board.
///
/// The `fmt::Write` supertrait is the blocking serial transmit; status
/// lines go out byte-synchronously through it.
pub trait Board: Write {
    /// Raw electrical level of the on/off switch pin.
    ///
    /// The pin is pulled up and the switch shorts it to ground, so HIGH
    /// means the device is OFF. The inversion is interpreted here in the
    /// core, not in the board layer.
    fn switch_is_high(&mut self) -> bool;

    /// Fetch one received serial byte if available. Never blocks.
    fn poll_serial(&mut self) -> Option<u8>;

    /// Raw pot sample in `[0, 1023]`. Blocks only for the conversion.
    fn read_pot(&mut self) -> u16;

    /// Apply a sounder toggle-timer compare value (see [`output::toggle_divisor`]).
    fn set_sounder_divisor(&mut self, divisor: u32);

    /// Apply an 8-bit LED duty cycle.
    fn set_led_duty(&mut self, duty: u8);

    /// Pacing delay.
    fn delay_ms(&mut self, ms: u32);

    /// Opaque low-power suspend: halts the loop until an external wake
    /// condition (the switch line, on real hardware) recurs.
    fn enter_low_power(&mut self);
}

/// All mutable device state, owned by the loop.
pub struct Controller {
    frequency: Frequency,
    parser: CommandParser,
    print_ticks: u32,
}

impl Controller {
    /// Create with the startup frequency (50 Hz) and an empty entry buffer.
    pub const fn new() -> Self {
        Self {
            frequency: Frequency::MIN,
            parser: CommandParser::new(),
            print_ticks: 0,
        }
    }

    /// Current frequency.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Run one loop iteration.
    pub fn tick<B: Board>(&mut self, board: &mut B) {
        if board.switch_is_high() {
            // Switch OFF. Suspend and touch nothing: no counters, no
            // command processing. Bytes received while OFF are lost.
            log::debug!("switch off, suspending");
            board.enter_low_power();
            return;
        }

        if self.print_ticks >= PRINT_INTERVAL_TICKS {
            status::periodic(board, self.frequency);
            self.print_ticks = 0;
        }

        if let Some(byte) = board.poll_serial() {
            self.parser.handle_byte(byte, &mut self.frequency, board);
        }

        // The pot overwrites the frequency every tick, even right after a
        // command applied one. A serial-set frequency is only effective
        // until this line runs.
        self.frequency = pot::frequency_from_sample(board.read_pot());

        board.set_sounder_divisor(output::toggle_divisor(self.frequency));
        board.set_led_duty(output::led_duty(self.frequency));

        board.delay_ms(TICK_MS);
        self.print_ticks += 1;
    }

    /// Run forever. The only pause is the board's low-power suspend.
    pub fn run<B: Board>(&mut self, board: &mut B) -> ! {
        loop {
            self.tick(board);
        }
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
