//! ESP-IDF board implementation of [`Board`].
//!
//! Owns every peripheral the control loop touches. The command link runs on
//! UART1 so `log` output on the console UART cannot interleave with status
//! lines.
//!
//! # Hardware Setup
//!
//! ```text
//! GPIO34 (ADC1_CH6) ◀────── potentiometer wiper
//! GPIO4             ◀────── on/off switch to GND (internal pull-up, HIGH = OFF)
//! GPIO18 (LEDC ch1) ──────▶ sounder (square wave, 50% duty)
//! GPIO5  (LEDC ch0) ──────▶ LED (8-bit duty)
//! GPIO17 (UART1 TX) ──────▶ command link, 9600 8N1
//! GPIO16 (UART1 RX) ◀──────
//! ```

use core::fmt;

use esp_idf_svc::hal::adc::attenuation::DB_11;
use esp_idf_svc::hal::adc::oneshot::config::AdcChannelConfig;
use esp_idf_svc::hal::adc::oneshot::{AdcChannelDriver, AdcDriver};
use esp_idf_svc::hal::adc::ADC1;
use esp_idf_svc::hal::delay::{FreeRtos, NON_BLOCK};
use esp_idf_svc::hal::gpio::{AnyIOPin, Gpio34, Input, IOPin, PinDriver, Pull};
use esp_idf_svc::hal::ledc::config::TimerConfig;
use esp_idf_svc::hal::ledc::{LedcDriver, LedcTimerDriver, Resolution};
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::hal::uart::{config as uart_config, UartDriver};
use esp_idf_svc::hal::units::Hertz;
use esp_idf_svc::sys::{self, esp, EspError};

use crate::device::Board;
use crate::output;
use crate::pot::ADC_MAX;

/// Scalar board knobs. Pin assignment is fixed by the wiring above.
pub struct BoardConfig {
    /// Command link bit rate.
    pub baud_rate: u32,
    /// LED PWM carrier frequency.
    pub led_pwm_hz: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            baud_rate: 9600,
            led_pwm_hz: 1000,
        }
    }
}

/// All peripherals behind the [`Board`] trait.
pub struct EspBoard {
    uart: UartDriver<'static>,
    switch: PinDriver<'static, AnyIOPin, Input>,
    pot: AdcChannelDriver<'static, Gpio34, AdcDriver<'static, ADC1>>,
    led: LedcDriver<'static>,
    sounder: LedcDriver<'static>,
}

impl EspBoard {
    /// Bring up UART, ADC, both LEDC channels, the switch input, and the
    /// GPIO wake source for light sleep.
    pub fn new(peripherals: Peripherals, config: BoardConfig) -> Result<Self, EspError> {
        let pins = peripherals.pins;

        let uart = UartDriver::new(
            peripherals.uart1,
            pins.gpio17,
            pins.gpio16,
            Option::<AnyIOPin>::None,
            Option::<AnyIOPin>::None,
            &uart_config::Config::new().baudrate(Hertz(config.baud_rate)),
        )?;

        let mut switch = PinDriver::input(pins.gpio4.downgrade())?;
        switch.set_pull(Pull::Up)?;

        let adc = AdcDriver::new(peripherals.adc1)?;
        let pot = AdcChannelDriver::new(
            adc,
            pins.gpio34,
            &AdcChannelConfig {
                attenuation: DB_11,
                ..Default::default()
            },
        )?;

        let led_timer = LedcTimerDriver::new(
            peripherals.ledc.timer0,
            &TimerConfig::default()
                .frequency(Hertz(config.led_pwm_hz))
                .resolution(Resolution::Bits8),
        )?;
        let led = LedcDriver::new(peripherals.ledc.channel0, led_timer, pins.gpio5)?;

        // The sounder channel holds 50% duty forever; only its timer
        // frequency changes, via ledc_set_freq in set_sounder_divisor.
        let sounder_timer = LedcTimerDriver::new(
            peripherals.ledc.timer1,
            &TimerConfig::default()
                .frequency(Hertz(crate::freq::FREQ_MIN_HZ as u32))
                .resolution(Resolution::Bits10),
        )?;
        let mut sounder = LedcDriver::new(peripherals.ledc.channel1, sounder_timer, pins.gpio18)?;
        let half = sounder.get_max_duty() / 2;
        sounder.set_duty(half)?;

        // Wake from light sleep when the switch line is pulled low (ON).
        esp!(unsafe {
            sys::gpio_wakeup_enable(
                sys::gpio_num_t_GPIO_NUM_4,
                sys::gpio_int_type_t_GPIO_INTR_LOW_LEVEL,
            )
        })?;
        esp!(unsafe { sys::esp_sleep_enable_gpio_wakeup() })?;

        Ok(Self {
            uart,
            switch,
            pot,
            led,
            sounder,
        })
    }
}

impl fmt::Write for EspBoard {
    /// Blocking transmit: pushes every byte into the UART before returning.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut rest = s.as_bytes();
        while !rest.is_empty() {
            let n = self.uart.write(rest).map_err(|_| fmt::Error)?;
            rest = &rest[n..];
        }
        Ok(())
    }
}

impl Board for EspBoard {
    fn switch_is_high(&mut self) -> bool {
        self.switch.is_high()
    }

    fn poll_serial(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        match self.uart.read(&mut byte, NON_BLOCK) {
            Ok(1) => Some(byte[0]),
            _ => None,
        }
    }

    fn read_pot(&mut self) -> u16 {
        // 12-bit oneshot reading scaled to the 10-bit contract.
        let raw = self.pot.read_raw().unwrap_or(0);
        (raw >> 2).min(ADC_MAX)
    }

    fn set_sounder_divisor(&mut self, divisor: u32) {
        // LEDC takes a frequency, not a compare value.
        let hz = output::divisor_to_hz(divisor).max(1);
        unsafe {
            let _ = sys::ledc_set_freq(
                sys::ledc_mode_t_LEDC_LOW_SPEED_MODE,
                sys::ledc_timer_t_LEDC_TIMER_1,
                hz,
            );
        }
    }

    fn set_led_duty(&mut self, duty: u8) {
        let _ = self.led.set_duty(duty as u32);
    }

    fn delay_ms(&mut self, ms: u32) {
        FreeRtos::delay_ms(ms);
    }

    fn enter_low_power(&mut self) {
        // Halts here until the wake source (switch line low) recurs.
        unsafe {
            let _ = sys::esp_light_sleep_start();
        }
    }
}
