// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-level drivers that sit above the raw `hw/` layer and below the
//! control loop. Each one is generic over an `embedded-hal` port so it runs unchanged on the board
//! and against the simulator.
//!
//! ## Existing drivers
//!
//! - [`seven_segment`] – common-anode seven-segment digit on an 8-line output port
//! - [`fan`] – fan motor on a 16-bit Fast-PWM channel
//! - [`button`] – active-low momentary button with blocking debounce

pub mod button;
pub mod fan;
pub mod seven_segment;

pub use button::{Button, Timing};
pub use fan::Fan;
pub use seven_segment::{SegmentPort, SevenSegment};
