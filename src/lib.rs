// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Fan Panel Firmware
//!
//! Firmware for a three-button fan panel: a PWM-driven fan motor, three momentary buttons that
//! select speed presets, and a common-anode seven-segment digit echoing the last action. Targets
//! an STM32F777 MCU.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`drivers`] | Device-level drivers (seven-segment digit, fan PWM, debounced button) |
//! | [`control`] | Motor state and the polling control loop |
//! | `hw` | MCU-level wrappers around GPIO, TIM3, SysTick and USART (`board` feature) |
//! | `sim` | Simulated ports for host-side tests (`host` feature) |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test --features host
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo flash
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(any(test, feature = "host")), no_std)]

pub mod control;
pub mod drivers;
mod error;
#[cfg(feature = "board")]
pub mod hw;
#[cfg(any(test, feature = "host"))]
pub mod sim;

pub use error::{Error, Result};
