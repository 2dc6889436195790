// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Panel Control
//!
//! ## Modules
//!
//! - [`state`] - Speed presets and the motor state they drive.
//! - [`panel`] - The polling loop that maps button presses to presets, digits and PWM duty.

pub mod panel;
pub mod state;

pub use panel::{FanPanel, PanelButton, PanelButtons, Serviced};
pub use state::{MotorState, SpeedPreset};
