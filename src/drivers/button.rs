// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Active-low momentary button with blocking debounce.
//!
//! The pin has a pull-up, so it reads HIGH when released and LOW when pressed. Both operations
//! busy-wait on the delay they are given; nothing else runs while they wait.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error as _, InputPin};

use crate::{Error, Result};

/// Debounce and release-poll intervals.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Timing {
    /// Delay between the first LOW sample and the confirming sample.
    pub debounce_ms: u32,
    /// Delay between samples while waiting for release.
    pub release_poll_ms: u32,
}

impl Timing {
    pub const DEFAULT: Self = Self {
        debounce_ms: 50,
        release_poll_ms: 20,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Debounced button on an active-low input.
pub struct Button<P> {
    pin: P,
    timing: Timing,
}

impl<P: InputPin> Button<P> {
    /// Wrap a pulled-up input with the default 50 ms / 20 ms timing.
    pub fn new(pin: P) -> Self {
        Self::with_timing(pin, Timing::DEFAULT)
    }

    pub fn with_timing(pin: P, timing: Timing) -> Self {
        Self { pin, timing }
    }

    #[inline]
    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Debounced press check.
    ///
    /// Returns `false` immediately if the pin reads HIGH. On LOW, waits the debounce interval and
    /// samples again; only a second LOW counts as a press.
    pub fn is_pressed<D: DelayNs>(&mut self, delay: &mut D) -> Result<bool> {
        if !self.is_low()? {
            return Ok(false);
        }
        delay.delay_ms(self.timing.debounce_ms);
        self.is_low()
    }

    /// Block until the pin reads HIGH, sampling every release-poll interval.
    ///
    /// There is no timeout: a stuck button blocks forever.
    pub fn wait_release<D: DelayNs>(&mut self, delay: &mut D) -> Result<()> {
        while self.is_low()? {
            delay.delay_ms(self.timing.release_poll_ms);
        }
        Ok(())
    }

    pub fn free(self) -> P {
        self.pin
    }

    #[inline]
    fn is_low(&mut self) -> Result<bool> {
        self.pin.is_low().map_err(|e| Error::Button(e.kind()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{SimButton, SimClock, SimDelay};

    fn rig() -> (SimClock, SimDelay, SimButton) {
        let clock = SimClock::new();
        let delay = SimDelay::new(&clock);
        let pin = SimButton::new(&clock);
        (clock, delay, pin)
    }

    #[test]
    fn released_returns_without_waiting() {
        let (clock, mut delay, pin) = rig();
        let mut button = Button::new(pin.clone());

        assert!(!button.is_pressed(&mut delay).unwrap());
        assert_eq!(pin.samples(), 1);
        assert_eq!(clock.now_ms(), 0);
        assert!(delay.waits().is_empty());
    }

    #[test]
    fn held_past_debounce_is_a_press() {
        let (clock, mut delay, pin) = rig();
        pin.press(0, 60);
        let mut button = Button::new(pin);

        assert!(button.is_pressed(&mut delay).unwrap());
        assert_eq!(delay.waits(), vec![50]);
        assert_eq!(clock.now_ms(), 50);
    }

    #[test]
    fn bounce_shorter_than_debounce_is_rejected() {
        let (clock, mut delay, pin) = rig();
        pin.press(0, 30);
        let mut button = Button::new(pin);

        assert!(!button.is_pressed(&mut delay).unwrap());
        // The bounce still costs the full debounce interval.
        assert_eq!(clock.now_ms(), 50);
    }

    #[test]
    fn release_wait_polls_every_20_ms() {
        let (clock, mut delay, pin) = rig();
        pin.press(0, 65);
        let mut button = Button::new(pin);

        button.wait_release(&mut delay).unwrap();
        assert_eq!(delay.waits(), vec![20, 20, 20, 20]);
        assert_eq!(clock.now_ms(), 80);
    }

    #[test]
    fn release_wait_on_released_pin_returns_at_once() {
        let (clock, mut delay, pin) = rig();
        let mut button = Button::new(pin);

        button.wait_release(&mut delay).unwrap();
        assert_eq!(clock.now_ms(), 0);
    }

    #[test]
    fn custom_timing_is_honoured() {
        let (_clock, mut delay, pin) = rig();
        pin.press(0, 15);
        let timing = Timing {
            debounce_ms: 10,
            release_poll_ms: 5,
        };
        let mut button = Button::with_timing(pin, timing);

        assert!(button.is_pressed(&mut delay).unwrap());
        button.wait_release(&mut delay).unwrap();
        assert_eq!(delay.waits(), vec![10, 5]);
    }
}
