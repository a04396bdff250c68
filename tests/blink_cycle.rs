//! End-to-end blink cycle tests against the mock platform
//!
//! Run with `cargo test --features mock`.

use pico_blink::devices::led::{BlinkError, BlinkPattern, BlinkTimer};
use pico_blink::parameters::{LedParams, ParamValue, ParameterStore};
use pico_blink::platform::mock::{MockClock, MockGpio, MockPort};
use pico_blink::platform::{GpioInterface, GpioMode, RegisterPin};

/// Poll once per simulated millisecond and record the lit time and toggles
fn run_for<G: GpioInterface>(
    blink: &mut BlinkTimer<'_, G, MockClock>,
    clock: &MockClock,
    ms: u32,
) -> (u32, u32) {
    let mut lit_ms = 0;
    let mut toggles = 0;
    for _ in 0..ms {
        clock.advance(1);
        if blink.poll().unwrap() {
            toggles += 1;
        }
        if blink.is_lit() {
            lit_ms += 1;
        }
    }
    (lit_ms, toggles)
}

#[test]
fn duty_cycle_from_parameters() {
    let mut store = ParameterStore::new();
    LedParams::register_defaults(&mut store).unwrap();
    store.set("LED_ON_MS", ParamValue::Int(250)).unwrap();
    store.set("LED_OFF_MS", ParamValue::Int(750)).unwrap();
    let params = LedParams::from_store(&store);
    assert!(params.is_valid());

    let mut gpio = MockGpio::new_input();
    let clock = MockClock::new();
    let mut blink = BlinkTimer::new(&mut gpio, &clock);
    blink.start_pattern(params.pattern()).unwrap();

    // Ten full periods
    let (lit_ms, toggles) = run_for(&mut blink, &clock, 10_000);
    assert_eq!(toggles, 20);
    assert_eq!(lit_ms, 2_500);
    assert!(!blink.is_lit());
}

#[test]
fn register_pin_matches_hal_pin() {
    let clock = MockClock::new();

    let mut gpio = MockGpio::new_input();
    let mut hal_blink = BlinkTimer::new(&mut gpio, &clock);
    let mut pin = RegisterPin::new(MockPort::new(), 7).unwrap();
    let mut reg_blink = BlinkTimer::new(&mut pin, &clock);

    hal_blink.start(30, 70).unwrap();
    reg_blink.start(30, 70).unwrap();

    for _ in 0..1_000 {
        clock.advance(1);
        assert_eq!(hal_blink.poll(), reg_blink.poll());
        assert_eq!(hal_blink.is_lit(), reg_blink.is_lit());
    }
}

#[test]
fn lifecycle_across_counter_wrap() {
    let mut gpio = MockGpio::new_input();
    let clock = MockClock::with_initial(u32::MAX - 2_000);
    let mut blink = BlinkTimer::new(&mut gpio, &clock);

    assert_eq!(blink.stop(), Err(BlinkError::NotStarted));
    blink.start_period(400).unwrap();
    assert_eq!(blink.start_period(400), Err(BlinkError::AlreadyStarted));
    assert_eq!(blink.pattern(), BlinkPattern::new(200, 200));

    // Window spans the wrap of the 32-bit counter
    let (lit_ms, toggles) = run_for(&mut blink, &clock, 4_000);
    assert_eq!(toggles, 20);
    assert_eq!(lit_ms, 2_000);

    blink.stop().unwrap();
    assert_eq!(blink.gpio().mode(), GpioMode::Input);

    let (_, toggles) = run_for(&mut blink, &clock, 4_000);
    assert_eq!(toggles, 0);
}

#[test]
fn reconfigure_mid_cycle() {
    let mut gpio = MockGpio::new_input();
    let clock = MockClock::new();
    let mut blink = BlinkTimer::new(&mut gpio, &clock);
    blink.start(500, 500).unwrap();

    let (_, toggles) = run_for(&mut blink, &clock, 250);
    assert_eq!(toggles, 0);

    // New timing takes effect on the next poll
    blink.configure_period(100);
    let (lit_ms, toggles) = run_for(&mut blink, &clock, 1_000);
    assert_eq!(toggles, 20);
    assert_eq!(lit_ms, 500);
}
