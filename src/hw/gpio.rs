// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! `embedded-hal` 1.0 adapters for the panel's GPIO.
//!
//! - `ButtonPin` exposes a pulled-up HAL input as an [`InputPin`].
//! - `SegmentBus` drives PE0..PE7 as one byte through a single BSRR store.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin};
use stm32f7xx_hal::{
    gpio::{self, Input, PullUp},
    pac,
};

use super::pins::SegmentPins;
use crate::drivers::SegmentPort;

/// Pulled-up button input.
pub struct ButtonPin<const P: char, const N: u8> {
    pin: gpio::Pin<P, N, Input<PullUp>>,
}

impl<const P: char, const N: u8> ButtonPin<P, N> {
    pub fn new(pin: gpio::Pin<P, N, Input<PullUp>>) -> Self {
        Self { pin }
    }

    pub fn free(self) -> gpio::Pin<P, N, Input<PullUp>> {
        self.pin
    }
}

impl<const P: char, const N: u8> ErrorType for ButtonPin<P, N> {
    type Error = Infallible;
}

impl<const P: char, const N: u8> InputPin for ButtonPin<P, N> {
    #[inline]
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.pin.is_high())
    }

    #[inline]
    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(self.pin.is_low())
    }
}

/// Low byte of GPIOE as the seven-segment port.
pub struct SegmentBus {
    pins: SegmentPins,
}

impl SegmentBus {
    /// Take ownership of PE0..PE7 (already configured as push-pull outputs).
    pub fn new(pins: SegmentPins) -> Self {
        Self { pins }
    }

    pub fn free(self) -> SegmentPins {
        self.pins
    }
}

impl ErrorType for SegmentBus {
    type Error = Infallible;
}

impl SegmentPort for SegmentBus {
    fn write_pattern(&mut self, pattern: u8) -> Result<(), Infallible> {
        // Owning `SegmentPins` guarantees nothing else drives PE0..PE7.
        let gpioe = unsafe { &*pac::GPIOE::ptr() };

        // Set bits in BS0..7, cleared bits in BR0..7: all eight lines change in one write.
        let set = u32::from(pattern);
        let reset = u32::from(!pattern) << 16;
        gpioe.bsrr.write(|w| unsafe { w.bits(set | reset) });
        Ok(())
    }
}
