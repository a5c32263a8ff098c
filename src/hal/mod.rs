//! Hardware Abstraction Layer for tonepot.
//!
//! Thin wrappers around ESP-IDF peripherals.
//! Business logic stays in core modules, HAL is just I/O.

pub mod board;

pub use board::{BoardConfig, EspBoard};
