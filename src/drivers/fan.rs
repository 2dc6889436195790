// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Fan motor on a 16-bit Fast-PWM channel.
//!
//! The timer behind the channel is configured once by the `hw` layer (up-counting, edge-aligned,
//! non-inverted, prescaler [`PRESCALER`], top [`TOP`]). This driver only writes the duty register.
//! A new duty takes effect at the next period boundary.

use embedded_hal::pwm::{Error as _, SetDutyCycle};

use crate::{Error, Result};

/// System clock divider feeding the PWM counter.
pub const PRESCALER: u32 = 64;

/// Counter top value. The duty register spans the full 16-bit range.
pub const TOP: u16 = 0xFFFF;

/// PWM frequency in millihertz for a given timer input clock: `clock / (PRESCALER * (TOP + 1))`.
///
/// At 16 MHz this is 3814 mHz (about 3.8 Hz).
pub const fn pwm_frequency_millihertz(clock_hz: u32) -> u32 {
    let period_ticks = PRESCALER as u64 * (TOP as u64 + 1);
    (clock_hz as u64 * 1000 / period_ticks) as u32
}

/// Fan motor driven by a PWM channel.
pub struct Fan<C> {
    channel: C,
    duty: u16,
}

impl<C: SetDutyCycle> Fan<C> {
    /// Wrap an already configured PWM channel.
    ///
    /// The duty register is left untouched; the control loop stops the motor explicitly at
    /// startup.
    pub fn new(channel: C) -> Self {
        Self { channel, duty: 0 }
    }

    /// Write `duty` (0 = stopped, 65535 = full speed) straight into the duty register.
    ///
    /// No clamping or scaling is applied.
    pub fn set_motor_speed(&mut self, duty: u16) -> Result<()> {
        self.channel
            .set_duty_cycle(duty)
            .map_err(|e| Error::Pwm(e.kind()))?;
        self.duty = duty;
        Ok(())
    }

    /// Last duty value successfully written.
    #[inline]
    pub fn duty(&self) -> u16 {
        self.duty
    }

    pub fn free(self) -> C {
        self.channel
    }
}
