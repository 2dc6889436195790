// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! MCU-level wrappers for the STM32F777: GPIO adapters, TIM3 PWM, SysTick delay, USART console and
//! the board pin map.

pub mod delay;
pub mod gpio;
pub mod pins;
pub mod pwm;
pub mod usart;

pub use delay::SysTickDelay;
pub use gpio::{ButtonPin, SegmentBus};
pub use pins::BoardPins;
pub use pwm::FanTimer;
pub use usart::{Console, CONSOLE_BAUD};

/// Core clock: internal 16 MHz HSI, no PLL.
pub const SYSCLK_HZ: u32 = 16_000_000;
