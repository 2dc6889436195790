// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! SysTick busy-wait delay as an `embedded-hal` 1.0 [`DelayNs`].

use cortex_m::{delay::Delay, peripheral::SYST};
use embedded_hal::delay::DelayNs;

pub struct SysTickDelay {
    inner: Delay,
}

impl SysTickDelay {
    /// SysTick delay, needs core clock in Hz.
    pub fn new(syst: SYST, sysclk_hz: u32) -> Self {
        Self {
            inner: Delay::new(syst, sysclk_hz),
        }
    }

    pub fn free(self) -> SYST {
        self.inner.free()
    }
}

impl DelayNs for SysTickDelay {
    #[inline]
    fn delay_ns(&mut self, ns: u32) {
        // SysTick resolution is 1 us; round up so a wait is never shorter than asked.
        self.inner.delay_us(ns.div_ceil(1_000));
    }

    #[inline]
    fn delay_us(&mut self, us: u32) {
        self.inner.delay_us(us);
    }

    #[inline]
    fn delay_ms(&mut self, ms: u32) {
        self.inner.delay_ms(ms);
    }
}
