//! # tonepot
//!
//! Firmware for a one-knob tone box: a potentiometer, a serial command link,
//! a pitch-adjustable sounder, a dimmable LED, and an on/off switch with a
//! low-power sleep path.
//!
//! ## Architecture
//!
//! All behavior lives in a single cooperative polling loop ([`device::Controller`]).
//! Each ~1 ms tick it samples the switch, consumes at most one serial byte,
//! reads the pot, and re-applies both outputs. Business logic stays in the
//! core modules below and is fully testable on the host; hardware I/O sits
//! behind the [`device::Board`] trait with the ESP-IDF implementation in
//! [`hal`].

#![cfg_attr(not(test), no_std)]

pub mod command;
pub mod device;
pub mod freq;
pub mod output;
pub mod pot;
pub mod status;

#[cfg(target_os = "espidf")]
pub mod hal;

pub use command::{CommandOutcome, CommandParser};
pub use device::{Board, Controller};
pub use freq::Frequency;
