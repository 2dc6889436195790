//! End-to-end panel scenarios on simulated hardware.

use fan_panel::control::{FanPanel, PanelButton, PanelButtons, SpeedPreset};
use fan_panel::drivers::seven_segment::SEGMENT_PATTERNS;
use fan_panel::drivers::{Button, Fan, SevenSegment};
use fan_panel::sim::{SimButton, SimClock, SimDelay, SimPwm, SimSegmentPort};

type Panel = FanPanel<SimButton, SimButton, SimButton, SimSegmentPort, SimPwm, SimDelay, String>;

struct Board {
    clock: SimClock,
    delay: SimDelay,
    half_speed: SimButton,
    stop: SimButton,
    toggle_high: SimButton,
    display: SimSegmentPort,
    pwm: SimPwm,
}

impl Board {
    fn new() -> Self {
        let clock = SimClock::new();
        Self {
            delay: SimDelay::new(&clock),
            half_speed: SimButton::new(&clock),
            stop: SimButton::new(&clock),
            toggle_high: SimButton::new(&clock),
            display: SimSegmentPort::new(),
            pwm: SimPwm::new(),
            clock,
        }
    }

    fn power_up(&self) -> Panel {
        let buttons = PanelButtons {
            half_speed: Button::new(self.half_speed.clone()),
            stop: Button::new(self.stop.clone()),
            toggle_high: Button::new(self.toggle_high.clone()),
        };
        FanPanel::new(
            buttons,
            SevenSegment::new(self.display.clone()),
            Fan::new(self.pwm.clone()),
            self.delay.clone(),
            String::new(),
        )
        .unwrap()
    }

    fn digit_shown(&self) -> Option<u8> {
        let pattern = self.display.last()?;
        // 2 and 3 share a pattern; report the higher digit the way the panel actions use it.
        SEGMENT_PATTERNS
            .iter()
            .rposition(|&p| p == pattern)
            .map(|digit| digit as u8)
    }
}

#[test]
fn power_up_state() {
    let board = Board::new();
    let panel = board.power_up();

    assert_eq!(panel.state().current_duty(), 0);
    assert!(!panel.state().toggle_flag());
    assert!(!panel.display_written());
    assert_eq!(board.digit_shown(), None);
    assert_eq!(board.pwm.writes(), vec![0]);
}

#[test]
fn held_half_speed_blocks_until_release_then_resumes() {
    let board = Board::new();
    let mut panel = board.power_up();
    board.half_speed.press(0, 1_000);

    let serviced = panel.poll_once().unwrap();
    assert!(serviced.contains(PanelButton::HalfSpeed));
    assert_eq!(board.digit_shown(), Some(1));
    assert_eq!(board.pwm.duty(), 32_768);

    // Debounce (50 ms) then 20 ms polls until the 1 s hold ends.
    let waits = board.delay.waits();
    assert_eq!(waits.first(), Some(&50));
    assert!(waits[1..].iter().all(|&ms| ms == 20));
    assert!(board.clock.now_ms() >= 1_000);

    // Polling resumes: an idle iteration takes no time and writes nothing.
    let before = board.clock.now_ms();
    assert!(panel.poll_once().unwrap().is_empty());
    assert_eq!(board.clock.now_ms(), before);
    assert_eq!(board.pwm.writes(), vec![0, 32_768]);
}

#[test]
fn stop_from_any_speed() {
    let board = Board::new();
    let mut panel = board.power_up();

    for speed_button in [&board.half_speed, &board.toggle_high, &board.toggle_high] {
        speed_button.press_now(80);
        panel.poll_once().unwrap();
        assert_ne!(board.pwm.duty(), 0);

        board.stop.press_now(80);
        panel.poll_once().unwrap();
        assert_eq!(board.digit_shown(), Some(0));
        assert_eq!(board.pwm.duty(), 0);
        assert_eq!(panel.state().preset(), SpeedPreset::Stop);
    }
}

#[test]
fn toggle_sequence_from_power_up() {
    let board = Board::new();
    let mut panel = board.power_up();

    let expected = [
        (true, 3, 45_845),
        (false, 4, 55_705),
        (true, 3, 45_845),
        (false, 4, 55_705),
    ];
    for (flag, digit, duty) in expected {
        board.toggle_high.press_now(70);
        panel.poll_once().unwrap();
        assert_eq!(panel.state().toggle_flag(), flag);
        assert_eq!(board.digit_shown(), Some(digit));
        assert_eq!(board.pwm.duty(), duty);
    }
}

#[test]
fn stop_does_not_reset_the_toggle() {
    let board = Board::new();
    let mut panel = board.power_up();

    board.toggle_high.press_now(70);
    panel.poll_once().unwrap();
    board.stop.press_now(70);
    panel.poll_once().unwrap();

    // The flag is still set, so the next toggle goes to 85 %.
    board.toggle_high.press_now(70);
    panel.poll_once().unwrap();
    assert_eq!(board.digit_shown(), Some(4));
    assert_eq!(board.pwm.duty(), 55_705);
}

#[test]
fn later_buttons_still_polled_after_an_earlier_one_fires() {
    let board = Board::new();
    let mut panel = board.power_up();
    board.half_speed.press(0, 60);
    board.toggle_high.press(0, 400);

    let serviced = panel.poll_once().unwrap();
    assert!(serviced.contains(PanelButton::HalfSpeed));
    assert!(!serviced.contains(PanelButton::Stop));
    assert!(serviced.contains(PanelButton::ToggleHigh));

    // Toggle ran last, so it wins.
    assert_eq!(board.pwm.writes(), vec![0, 32_768, 45_845]);
    assert_eq!(board.digit_shown(), Some(3));
}

#[test]
fn bounce_on_every_button_is_ignored() {
    let board = Board::new();
    let mut panel = board.power_up();
    board.half_speed.press(0, 10);
    board.stop.press(50, 10);
    board.toggle_high.press(100, 10);

    assert!(panel.poll_once().unwrap().is_empty());
    assert_eq!(board.delay.waits(), vec![50, 50, 50]);
    assert_eq!(board.pwm.writes(), vec![0]);
    assert!(!panel.display_written());
}

#[test]
fn console_log_traces_each_action() {
    let board = Board::new();
    let mut panel = board.power_up();

    board.half_speed.press_now(60);
    panel.poll_once().unwrap();
    board.stop.press_now(60);
    panel.poll_once().unwrap();

    let lines: Vec<&str> = panel.log().lines().collect();
    assert_eq!(
        lines,
        [
            "fan-panel: motor stopped, polling buttons",
            "button 1: half speed duty=32768 digit=1",
            "button 1: released",
            "button 2: stop duty=0 digit=0",
            "button 2: released",
        ]
    );
}
