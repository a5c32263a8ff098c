//! tonepot - Main entry point
//!
//! Brings up the board and hands control to the polling loop. Everything
//! after bring-up is [`tonepot::Controller::run`]; there is no exit path.

#[cfg(target_os = "espidf")]
fn main() -> Result<(), esp_idf_svc::sys::EspError> {
    use esp_idf_svc::hal::peripherals::Peripherals;
    use tonepot::hal::{BoardConfig, EspBoard};
    use tonepot::Controller;

    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    let peripherals = Peripherals::take()?;
    let mut board = EspBoard::new(peripherals, BoardConfig::default())?;

    log::info!(
        "tonepot up, {} Hz initial, {} ms tick",
        tonepot::freq::FREQ_MIN_HZ,
        tonepot::device::TICK_MS
    );

    let mut controller = Controller::new();
    controller.run(&mut board)
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    // The firmware only runs against ESP-IDF; host builds exist for the
    // test suites in tests/.
    eprintln!("tonepot is device firmware; build for an ESP-IDF target");
}
