// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Motor state owned by the control loop.

/// The four speeds the panel can select. No other duty is ever programmed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SpeedPreset {
    /// Motor stopped, digit 0.
    Stop,
    /// 50 % duty, digit 1.
    Half,
    /// ~70 % duty, digit 3.
    High70,
    /// ~85 % duty, digit 4.
    High85,
}

impl SpeedPreset {
    pub const ALL: [Self; 4] = [Self::Stop, Self::Half, Self::High70, Self::High85];

    /// Duty register value for this preset.
    pub const fn duty(self) -> u16 {
        match self {
            Self::Stop => 0,
            Self::Half => 32_768,
            Self::High70 => 45_845,
            Self::High85 => 55_705,
        }
    }

    /// Digit shown when this preset is selected.
    ///
    /// The digit names the action, not the duty percentage: the two high speeds show 3 and 4.
    pub const fn digit(self) -> u8 {
        match self {
            Self::Stop => 0,
            Self::Half => 1,
            Self::High70 => 3,
            Self::High85 => 4,
        }
    }

    /// Preset whose duty register value is exactly `duty`, if any.
    pub const fn from_duty(duty: u16) -> Option<Self> {
        match duty {
            0 => Some(Self::Stop),
            32_768 => Some(Self::Half),
            45_845 => Some(Self::High70),
            55_705 => Some(Self::High85),
            _ => None,
        }
    }
}

/// Current speed plus the alternating flag of the toggle button.
///
/// Starts as (stopped, `false`) on every power-up.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MotorState {
    preset: SpeedPreset,
    toggle_flag: bool,
}

impl MotorState {
    pub const fn new() -> Self {
        Self {
            preset: SpeedPreset::Stop,
            toggle_flag: false,
        }
    }

    #[inline]
    pub fn preset(&self) -> SpeedPreset {
        self.preset
    }

    /// Duty register value of the current preset.
    #[inline]
    pub fn current_duty(&self) -> u16 {
        self.preset.duty()
    }

    #[inline]
    pub fn toggle_flag(&self) -> bool {
        self.toggle_flag
    }

    pub(crate) fn select(&mut self, preset: SpeedPreset) {
        self.preset = preset;
    }

    /// Flip the toggle flag and select the matching high speed: 70 % when the flag becomes
    /// `true`, 85 % when it becomes `false`.
    pub(crate) fn toggle_high_speed(&mut self) -> SpeedPreset {
        self.toggle_flag = !self.toggle_flag;
        let preset = if self.toggle_flag {
            SpeedPreset::High70
        } else {
            SpeedPreset::High85
        };
        self.preset = preset;
        preset
    }
}

impl Default for MotorState {
    fn default() -> Self {
        Self::new()
    }
}
