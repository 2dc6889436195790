#![no_main]
#![no_std]

use core::fmt::Write;

use cortex_m_rt::entry;
use panic_halt as _;

use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use fan_panel::control::{FanPanel, PanelButtons};
use fan_panel::drivers::{fan::pwm_frequency_millihertz, Button, Fan, SevenSegment};
use fan_panel::hw::{
    BoardPins, ButtonPin, Console, FanTimer, SegmentBus, SysTickDelay, CONSOLE_BAUD, SYSCLK_HZ,
};

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    // Clocks (HSI, 16 MHz)
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();
    let sysclk_hz = clocks.sysclk().raw();

    // GPIO: segment port as outputs, buttons as pulled-up inputs
    let pins = BoardPins::new(dp.GPIOA, dp.GPIOE, dp.GPIOG);

    // USART1 (DBG)
    let usart_cfg = Config {
        baud_rate: CONSOLE_BAUD.bps(),
        ..Default::default()
    };
    let serial = Serial::new(dp.USART1, (pins.usart1.tx, pins.usart1.rx), &clocks, usart_cfg);
    let mut console = Console::new(serial);

    let mhz = pwm_frequency_millihertz(sysclk_hz);
    let _ = writeln!(
        console,
        "fan-panel: sysclk {} Hz (expected {}), pwm {}.{:03} Hz",
        sysclk_hz,
        SYSCLK_HZ,
        mhz / 1000,
        mhz % 1000
    );

    // TIM3 Fast PWM on PA6
    let fan = Fan::new(FanTimer::fast_pwm(dp.TIM3, pins.fan.pwm));

    let display = SevenSegment::new(SegmentBus::new(pins.display));

    let buttons = PanelButtons {
        half_speed: Button::new(ButtonPin::new(pins.buttons.half_speed)),
        stop: Button::new(ButtonPin::new(pins.buttons.stop)),
        toggle_high: Button::new(ButtonPin::new(pins.buttons.toggle_high)),
    };

    let delay = SysTickDelay::new(cp.SYST, sysclk_hz);

    let mut panel = FanPanel::new(buttons, display, fan, delay, console)
        .unwrap_or_else(|err| panic!("fan-panel init failed: {err}"));

    match panel.run() {
        Ok(never) => match never {},
        Err(err) => panic!("fan-panel halted: {err}"),
    }
}
