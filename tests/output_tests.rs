//! Output conversion tests

use tonepot::freq::Frequency;
use tonepot::output::{divisor_to_hz, led_duty, toggle_divisor, SOUNDER_CLOCK_HZ};

#[test]
fn test_toggle_divisor_at_bounds() {
    // 16 MHz / (2 * 1000) - 1
    assert_eq!(toggle_divisor(Frequency::MAX), 7_999);
    // 16 MHz / (2 * 50) - 1
    assert_eq!(toggle_divisor(Frequency::MIN), 159_999);
}

#[test]
fn test_divisor_round_trips_exact_frequencies() {
    for hz in [50u16, 100, 250, 500, 800, 1000] {
        let f = Frequency::from_hz_clamped(hz);
        assert_eq!(divisor_to_hz(toggle_divisor(f)), hz as u32);
    }
}

#[test]
fn test_divisor_never_divides_by_zero() {
    // Frequency is bounded away from zero by construction, so the divisor
    // math is total over every constructible value.
    for hz in 0..=1100u16 {
        let f = Frequency::from_hz_clamped(hz);
        assert!(f.hz() >= 50);
        let d = toggle_divisor(f);
        assert!(d < SOUNDER_CLOCK_HZ);
    }
}

#[test]
fn test_led_duty_formula() {
    assert_eq!(led_duty(Frequency::MAX), 250); // 1000/4 = 250
    assert_eq!(led_duty(Frequency::MIN), 12); // 50/4 = 12
    assert_eq!(led_duty(Frequency::from_hz_clamped(100)), 25);
    assert_eq!(led_duty(Frequency::from_hz_clamped(443)), 110);
}

#[test]
fn test_led_duty_is_sawtooth_not_monotonic_by_design() {
    // (f / 4) mod 256: brightness cycles with frequency. Within the valid
    // range the wrap never fires (1000/4 = 250 < 256), so the curve is
    // monotonic here, but the mod is part of the contract.
    let mut prev = led_duty(Frequency::MIN);
    for hz in 51..=1000u16 {
        let duty = led_duty(Frequency::from_hz_clamped(hz));
        assert!(duty >= prev);
        prev = duty;
    }
}
