// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Simulated panel hardware for host-side tests.
//!
//! Everything runs on a virtual clock: [`SimDelay`] advances it instead of sleeping, and a
//! [`SimButton`] reads LOW while the clock is inside one of its scripted press windows. Each
//! simulated part is a cheap handle (`Clone` shares state), so a test keeps one handle for
//! inspection and hands the other to the driver under test.

use core::convert::Infallible;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, InputPin};
use embedded_hal::pwm::{self, SetDutyCycle};

use crate::drivers::fan::TOP;
use crate::drivers::SegmentPort;

/// Shared virtual monotonic clock with nanosecond resolution.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    now_ns: Rc<Cell<u64>>,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn now_ns(&self) -> u64 {
        self.now_ns.get()
    }

    #[inline]
    pub fn now_ms(&self) -> u64 {
        self.now_ns() / 1_000_000
    }

    pub fn advance_ns(&self, ns: u64) {
        self.now_ns.set(self.now_ns() + ns);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance_ns(ms * 1_000_000);
    }
}

/// Busy-wait stand-in that advances a [`SimClock`] and records every millisecond wait.
#[derive(Clone, Debug)]
pub struct SimDelay {
    clock: SimClock,
    waits: Rc<RefCell<Vec<u32>>>,
}

impl SimDelay {
    pub fn new(clock: &SimClock) -> Self {
        Self {
            clock: clock.clone(),
            waits: Rc::default(),
        }
    }

    /// Millisecond waits issued so far, in order.
    pub fn waits(&self) -> Vec<u32> {
        self.waits.borrow().clone()
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance_ns(u64::from(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits.borrow_mut().push(ms);
        self.clock.advance_ms(u64::from(ms));
    }
}

/// Active-low push button driven by a script of press windows.
///
/// A window `[start, end)` in clock milliseconds reads LOW; everything else reads HIGH.
#[derive(Clone, Debug)]
pub struct SimButton {
    clock: SimClock,
    presses: Rc<RefCell<Vec<(u64, u64)>>>,
    samples: Rc<Cell<usize>>,
}

impl SimButton {
    pub fn new(clock: &SimClock) -> Self {
        Self {
            clock: clock.clone(),
            presses: Rc::default(),
            samples: Rc::default(),
        }
    }

    /// Hold the button down from `start_ms` for `duration_ms`.
    pub fn press(&self, start_ms: u64, duration_ms: u64) {
        self.presses
            .borrow_mut()
            .push((start_ms, start_ms + duration_ms));
    }

    /// Hold the button down from the current clock time for `duration_ms`.
    pub fn press_now(&self, duration_ms: u64) {
        self.press(self.clock.now_ms(), duration_ms);
    }

    /// Whether the pin reads LOW at the current clock time.
    pub fn is_held(&self) -> bool {
        let now = self.clock.now_ms();
        self.presses
            .borrow()
            .iter()
            .any(|&(start, end)| start <= now && now < end)
    }

    /// Number of times the pin has been sampled.
    pub fn samples(&self) -> usize {
        self.samples.get()
    }
}

impl digital::ErrorType for SimButton {
    type Error = Infallible;
}

impl InputPin for SimButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.samples.set(self.samples.get() + 1);
        Ok(!self.is_held())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

/// Eight-line output port that records every pattern written.
#[derive(Clone, Debug, Default)]
pub struct SimSegmentPort {
    writes: Rc<RefCell<Vec<u8>>>,
}

impl SimSegmentPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<u8> {
        self.writes.borrow().clone()
    }

    pub fn last(&self) -> Option<u8> {
        self.writes.borrow().last().copied()
    }
}

impl digital::ErrorType for SimSegmentPort {
    type Error = Infallible;
}

impl SegmentPort for SimSegmentPort {
    fn write_pattern(&mut self, pattern: u8) -> Result<(), Self::Error> {
        self.writes.borrow_mut().push(pattern);
        Ok(())
    }
}

/// 16-bit PWM channel that records every duty register write.
#[derive(Clone, Debug, Default)]
pub struct SimPwm {
    writes: Rc<RefCell<Vec<u16>>>,
}

impl SimPwm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current duty register value (0 before the first write).
    pub fn duty(&self) -> u16 {
        self.writes.borrow().last().copied().unwrap_or(0)
    }

    pub fn writes(&self) -> Vec<u16> {
        self.writes.borrow().clone()
    }
}

impl pwm::ErrorType for SimPwm {
    type Error = Infallible;
}

impl SetDutyCycle for SimPwm {
    fn max_duty_cycle(&self) -> u16 {
        TOP
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.writes.borrow_mut().push(duty);
        Ok(())
    }
}
