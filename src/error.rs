// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Crate-wide error type.
//!
//! The board peripherals never fail, but the drivers are generic over `embedded-hal` ports, so
//! whatever a port reports is carried up as its [`ErrorKind`](embedded_hal::digital::ErrorKind).

use derive_more::Display;
use embedded_hal::{digital, pwm};

/// Failure of one of the panel's hardware ports.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
pub enum Error {
    /// A button input could not be sampled.
    #[display("button input read failed: {_0:?}")]
    Button(digital::ErrorKind),

    /// The PWM duty register could not be written.
    #[display("PWM duty write failed: {_0:?}")]
    Pwm(pwm::ErrorKind),

    /// The seven-segment output port could not be written.
    #[display("segment port write failed: {_0:?}")]
    Display(digital::ErrorKind),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
