// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Fan PWM on TIM3 channel 1 (PA6).
//!
//! This module configures TIM3 (16-bit) registers for up-counting, edge-aligned PWM with a
//! non-inverted output and exposes the compare register as an `embedded-hal`
//! [`SetDutyCycle`] channel.

use core::convert::Infallible;

use embedded_hal::pwm::{ErrorType, SetDutyCycle};
use stm32f7xx_hal::{
    gpio::{gpioa, Alternate},
    pac,
};

use crate::drivers::fan::{PRESCALER, TOP};

// CR1 fields
const CR1_DIR: u32 = 1 << 4;
const CR1_CMS: u32 = 0b11 << 5;
const CR1_ARPE: u32 = 1 << 7;

// CCMR1 (output compare) channel 1 fields
const CCMR1_CC1S: u32 = 0b11;
const CCMR1_OC1PE: u32 = 1 << 3;
const CCMR1_OC1M: u32 = (0b111 << 4) | (1 << 16);
const CCMR1_OC1M_PWM1: u32 = 0b110 << 4;

// CCER channel 1 fields
const CCER_CC1E: u32 = 1 << 0;
const CCER_CC1P: u32 = 1 << 1;
const CCER_CC1NP: u32 = 1 << 3;

/// TIM3 running as the fan's PWM generator.
pub struct FanTimer {
    tim: pac::TIM3,
    pin: gpioa::PA6<Alternate<2>>,
}

impl FanTimer {
    /// Configure TIM3 for Fast PWM on CH1: prescaler 64, top 0xFFFF, non-inverted, duty 0.
    pub fn fast_pwm(tim3: pac::TIM3, pin: gpioa::PA6<Alternate<2>>) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim3en().set_bit());

        let tim = tim3;

        // Disable counter while configuring
        tim.cr1.modify(|_, w| w.cen().clear_bit());

        // Timer clock / 64, full 16-bit period
        tim.psc.write(|w| unsafe { w.bits(PRESCALER - 1) });
        tim.arr.write(|w| unsafe { w.bits(u32::from(TOP)) });
        tim.ccr1.write(|w| unsafe { w.bits(0) });

        // CH1 as output, PWM mode 1 (high while CNT < CCR1), compare preload on
        tim.ccmr1_output().modify(|r, w| unsafe {
            w.bits((r.bits() & !(CCMR1_CC1S | CCMR1_OC1M)) | CCMR1_OC1M_PWM1 | CCMR1_OC1PE)
        });

        // Active-high output, enabled
        tim.ccer.modify(|r, w| unsafe {
            w.bits((r.bits() & !(CCER_CC1P | CCER_CC1NP)) | CCER_CC1E)
        });

        // Up-counting, edge-aligned, buffered auto-reload
        tim.cr1
            .modify(|r, w| unsafe { w.bits((r.bits() & !(CR1_DIR | CR1_CMS)) | CR1_ARPE) });

        // Latch PSC/ARR/CCR1, reset the counter
        tim.egr.write(|w| w.ug().set_bit());

        // Enable the counter
        tim.cr1.modify(|_, w| w.cen().set_bit());

        Self { tim, pin }
    }

    /// Current compare value.
    #[inline]
    pub fn duty(&self) -> u16 {
        self.tim.ccr1.read().bits() as u16
    }

    /// Consume the wrapper and return the timer and its output pin.
    pub fn free(self) -> (pac::TIM3, gpioa::PA6<Alternate<2>>) {
        self.tim.cr1.modify(|_, w| w.cen().clear_bit());
        (self.tim, self.pin)
    }
}

impl ErrorType for FanTimer {
    type Error = Infallible;
}

impl SetDutyCycle for FanTimer {
    #[inline]
    fn max_duty_cycle(&self) -> u16 {
        TOP
    }

    #[inline]
    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Infallible> {
        self.tim.ccr1.write(|w| unsafe { w.bits(u32::from(duty)) });
        Ok(())
    }
}
