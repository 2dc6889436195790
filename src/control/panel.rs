// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Polling control loop for the fan panel.
//!
//! Each call to [`FanPanel::poll_once`] checks the three buttons in a fixed order:
//!
//! 1. half speed: show 1, duty 50 %
//! 2. stop: show 0, duty 0
//! 3. toggle: flip the toggle flag, then show 3 / duty ~70 % or show 4 / duty ~85 %
//!
//! The checks are independent: a serviced button does not skip the ones after it, so several
//! buttons can be serviced in the same iteration. After servicing a button the loop blocks until
//! that button is released.
//!
//! Typical usage pattern:
//!
//! ```ignore
//! let mut panel = FanPanel::new(buttons, display, fan, delay, console)?;
//! panel.run()?;
//! ```

use core::convert::Infallible;
use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use embedded_hal::pwm::SetDutyCycle;

use super::{MotorState, SpeedPreset};
use crate::drivers::{Button, Fan, SegmentPort, SevenSegment};
use crate::Result;

/// One of the three panel buttons, in polling order.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PanelButton {
    HalfSpeed,
    Stop,
    ToggleHigh,
}

impl PanelButton {
    pub const ALL: [Self; 3] = [Self::HalfSpeed, Self::Stop, Self::ToggleHigh];

    /// Number printed next to the button on the panel (1..=3).
    pub const fn number(self) -> u8 {
        match self {
            Self::HalfSpeed => 1,
            Self::Stop => 2,
            Self::ToggleHigh => 3,
        }
    }

    const fn bit(self) -> u8 {
        1 << (self.number() - 1)
    }

    const fn action(self) -> &'static str {
        match self {
            Self::HalfSpeed => "half speed",
            Self::Stop => "stop",
            Self::ToggleHigh => "toggle high speed",
        }
    }
}

/// Set of buttons serviced during one loop iteration.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Serviced(u8);

impl Serviced {
    pub const NONE: Self = Self(0);

    #[inline]
    pub fn contains(self, button: PanelButton) -> bool {
        self.0 & button.bit() != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    fn insert(&mut self, button: PanelButton) {
        self.0 |= button.bit();
    }
}

/// The three buttons, one per panel action.
pub struct PanelButtons<B1, B2, B3> {
    pub half_speed: Button<B1>,
    pub stop: Button<B2>,
    pub toggle_high: Button<B3>,
}

/// Top-level panel state machine.
///
/// Owns every port it touches: the buttons, the digit, the fan channel, the busy-wait delay and a
/// log sink (`core::fmt::Write`; the USART console on the board, a `String` in tests).
pub struct FanPanel<B1, B2, B3, S, C, D, L> {
    buttons: PanelButtons<B1, B2, B3>,
    display: SevenSegment<S>,
    fan: Fan<C>,
    delay: D,
    log: L,
    state: MotorState,
    display_written: bool,
}

impl<B1, B2, B3, S, C, D, L> FanPanel<B1, B2, B3, S, C, D, L>
where
    B1: InputPin,
    B2: InputPin,
    B3: InputPin,
    S: SegmentPort,
    C: SetDutyCycle,
    D: DelayNs,
    L: Write,
{
    /// Assemble the panel and stop the motor.
    ///
    /// The display is not written: no digit shows until the first button action.
    pub fn new(
        buttons: PanelButtons<B1, B2, B3>,
        display: SevenSegment<S>,
        mut fan: Fan<C>,
        delay: D,
        mut log: L,
    ) -> Result<Self> {
        let state = MotorState::new();
        fan.set_motor_speed(state.current_duty())?;
        let _ = writeln!(log, "fan-panel: motor stopped, polling buttons");

        Ok(Self {
            buttons,
            display,
            fan,
            delay,
            log,
            state,
            display_written: false,
        })
    }

    /// Run one polling iteration and report which buttons were serviced.
    pub fn poll_once(&mut self) -> Result<Serviced> {
        let mut serviced = Serviced::NONE;

        if self.buttons.half_speed.is_pressed(&mut self.delay)? {
            self.apply(PanelButton::HalfSpeed, SpeedPreset::Half)?;
            self.buttons.half_speed.wait_release(&mut self.delay)?;
            self.log_release(PanelButton::HalfSpeed);
            serviced.insert(PanelButton::HalfSpeed);
        }

        if self.buttons.stop.is_pressed(&mut self.delay)? {
            self.apply(PanelButton::Stop, SpeedPreset::Stop)?;
            self.buttons.stop.wait_release(&mut self.delay)?;
            self.log_release(PanelButton::Stop);
            serviced.insert(PanelButton::Stop);
        }

        if self.buttons.toggle_high.is_pressed(&mut self.delay)? {
            let preset = self.state.toggle_high_speed();
            self.apply(PanelButton::ToggleHigh, preset)?;
            self.buttons.toggle_high.wait_release(&mut self.delay)?;
            self.log_release(PanelButton::ToggleHigh);
            serviced.insert(PanelButton::ToggleHigh);
        }

        Ok(serviced)
    }

    /// Poll forever. Only returns if a port reports an error.
    pub fn run(&mut self) -> Result<Infallible> {
        loop {
            self.poll_once()?;
        }
    }

    #[inline]
    pub fn state(&self) -> &MotorState {
        &self.state
    }

    /// Whether any digit has been shown since startup.
    #[inline]
    pub fn display_written(&self) -> bool {
        self.display_written
    }

    #[inline]
    pub fn log(&self) -> &L {
        &self.log
    }

    /// Show the preset's digit, then program its duty.
    fn apply(&mut self, button: PanelButton, preset: SpeedPreset) -> Result<()> {
        self.display.display_number(preset.digit())?;
        self.display_written = true;

        self.state.select(preset);
        self.fan.set_motor_speed(preset.duty())?;

        let _ = writeln!(
            self.log,
            "button {}: {} duty={} digit={}",
            button.number(),
            button.action(),
            preset.duty(),
            preset.digit()
        );
        Ok(())
    }

    fn log_release(&mut self, button: PanelButton) {
        let _ = writeln!(self.log, "button {}: released", button.number());
    }
}
