// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the STM32F777 fan panel board.

use stm32f7xx_hal::{
    gpio::{gpioa, gpioe, gpiog, Alternate, Input, Output, PullUp, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOE, dp.GPIOG);
/// ```
pub struct BoardPins {
    pub display: SegmentPins,
    pub fan: FanPins,
    pub buttons: ButtonPins,
    pub usart1: Usart1Pins,
}

/// Seven-segment lines PE0..PE7. Bit `i` of a segment pattern drives PEi.
pub struct SegmentPins {
    pub pe0: gpioe::PE0<Output<PushPull>>,
    pub pe1: gpioe::PE1<Output<PushPull>>,
    pub pe2: gpioe::PE2<Output<PushPull>>,
    pub pe3: gpioe::PE3<Output<PushPull>>,
    pub pe4: gpioe::PE4<Output<PushPull>>,
    pub pe5: gpioe::PE5<Output<PushPull>>,
    pub pe6: gpioe::PE6<Output<PushPull>>,
    pub pe7: gpioe::PE7<Output<PushPull>>,
}

/// Fan PWM output
pub struct FanPins {
    pub pwm: gpioa::PA6<Alternate<2>>, // TIM3_CH1
}

/// Panel buttons, wired to ground with internal pull-ups.
pub struct ButtonPins {
    pub half_speed: gpiog::PG2<Input<PullUp>>,
    pub stop: gpiog::PG3<Input<PullUp>>,
    pub toggle_high: gpiog::PG4<Input<PullUp>>,
}

// USART1 TX/RX
pub struct Usart1Pins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    ///
    /// Segment lines come up as outputs but are not driven; the digit stays unchanged until the
    /// first button action.
    pub fn new(gpioa: pac::GPIOA, gpioe: pac::GPIOE, gpiog: pac::GPIOG) -> Self {
        let gpioa = gpioa.split();
        let gpioe = gpioe.split();
        let gpiog = gpiog.split();

        Self {
            display: SegmentPins {
                pe0: gpioe.pe0.into_push_pull_output(),
                pe1: gpioe.pe1.into_push_pull_output(),
                pe2: gpioe.pe2.into_push_pull_output(),
                pe3: gpioe.pe3.into_push_pull_output(),
                pe4: gpioe.pe4.into_push_pull_output(),
                pe5: gpioe.pe5.into_push_pull_output(),
                pe6: gpioe.pe6.into_push_pull_output(),
                pe7: gpioe.pe7.into_push_pull_output(),
            },

            fan: FanPins {
                pwm: gpioa.pa6.into_alternate::<2>(),
            },

            buttons: ButtonPins {
                half_speed: gpiog.pg2.into_pull_up_input(),
                stop: gpiog.pg3.into_pull_up_input(),
                toggle_high: gpiog.pg4.into_pull_up_input(),
            },

            usart1: Usart1Pins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },
        }
    }
}
