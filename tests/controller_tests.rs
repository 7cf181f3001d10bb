//! Integration tests for RgbLedController

mod common;
use common::*;

use rgb_led_driver::{
    ColorSpec, ConfigError, DriverError, DutyCycle, LedConfig, Polarity, PredefinedColor,
    RgbLedController, Srgb,
};

#[test]
fn cathode_duty_cycle_is_linear_for_every_component() {
    for c in 0..=u8::MAX {
        let expected = (c as u32 * 100 / 255) as u8;
        assert_eq!(Polarity::CommonCathode.duty_cycle(c), expected, "component {}", c);
    }
}

#[test]
fn anode_duty_cycle_is_inverted_for_every_component() {
    for c in 0..=u8::MAX {
        let expected = 100 - (c as u32 * 100 / 255) as u8;
        assert_eq!(Polarity::CommonAnode.duty_cycle(c), expected, "component {}", c);
    }
}

#[test]
fn anode_red_created_on_drives_red_low() {
    let config = LedConfig::new(Polarity::CommonAnode)
        .with_color(PredefinedColor::Red)
        .turned_on(true);
    let led = RgbLedController::new(SpyChannels::new(), config);

    assert_eq!(
        led.channels().history(),
        [Write::Red(0), Write::Green(100), Write::Blue(100)]
    );
}

#[test]
fn cathode_custom_created_off_drives_inactive_and_stages() {
    let config = LedConfig::new(Polarity::CommonCathode)
        .with_color(Srgb::new(128u8, 0, 0))
        .turned_on(false);
    let led = RgbLedController::new(SpyChannels::new(), config);

    assert_eq!(
        led.channels().history(),
        [Write::Red(0), Write::Green(0), Write::Blue(0)]
    );
    assert_eq!(led.duty_cycle().red, 50);
    assert!(!led.is_on());
}

#[test]
fn anode_created_off_drives_full_duty_cycle() {
    let config = LedConfig::new(Polarity::CommonAnode).with_color(PredefinedColor::White);
    let led = RgbLedController::new(SpyChannels::new(), config);

    assert_eq!(led.channels().history(), writes_for(DutyCycle::uniform(100)));
    assert_eq!(led.duty_cycle(), DutyCycle::uniform(0));
}

#[test]
fn custom_color_while_off_is_staged_until_turn_on() {
    let log = SetterLog::new();
    let config = LedConfig::new(Polarity::CommonCathode).turned_on(false);
    let mut led =
        RgbLedController::from_fns(Some(log.red()), Some(log.green()), Some(log.blue()), config)
            .unwrap();
    log.drain();

    led.set_custom_color(255, 51, 0);
    assert_eq!(log.len(), 0);

    led.turn_on();
    assert_eq!(log.drain()[..], [Write::Red(100), Write::Green(20), Write::Blue(0)]);
}

#[test]
fn predefined_color_while_off_does_not_touch_channels() {
    let config = LedConfig::new(Polarity::CommonAnode).turned_on(true);
    let mut led = RgbLedController::new(SpyChannels::new(), config);
    led.turn_off();
    led.channels_mut().drain();

    led.set_predefined_color(PredefinedColor::Cyan);
    assert!(led.channels().history().is_empty());
    assert_eq!(led.output(), DutyCycle::uniform(100));

    led.turn_on();
    assert_eq!(led.channels().history(), writes_for(DutyCycle::new(100, 0, 0)));
}

#[test]
fn turn_on_twice_sends_same_values() {
    let config = LedConfig::new(Polarity::CommonCathode)
        .with_color(PredefinedColor::Magenta)
        .turned_on(false);
    let mut led = RgbLedController::new(SpyChannels::new(), config);
    led.channels_mut().drain();

    led.turn_on();
    let first = led.channels_mut().drain();
    led.turn_on();
    let second = led.channels_mut().drain();

    assert_eq!(first, second);
    assert_eq!(first[..], writes_for(DutyCycle::new(100, 0, 100)));
    assert!(led.is_on());
}

#[test]
fn red_survives_off_on_cycle() {
    let config = LedConfig::new(Polarity::CommonAnode)
        .with_color(PredefinedColor::Green)
        .turned_on(true);
    let mut led = RgbLedController::new(SpyChannels::new(), config);

    led.set_predefined_color(PredefinedColor::Red);
    let applied = led.channels_mut().drain();
    let red = &applied[applied.len() - 3..];

    led.turn_off();
    led.channels_mut().drain();
    led.turn_on();

    assert_eq!(led.channels().history(), red);
    assert_eq!(red, writes_for(DutyCycle::new(0, 100, 100)));
}

#[test]
fn turn_off_while_off_still_writes_inactive() {
    let config = LedConfig::new(Polarity::CommonAnode);
    let mut led = RgbLedController::new(SpyChannels::new(), config);
    led.channels_mut().drain();

    led.turn_off();
    assert_eq!(led.channels().history(), writes_for(DutyCycle::uniform(100)));
}

#[test]
fn invalid_predefined_index_is_a_no_op() {
    let config = LedConfig::new(Polarity::CommonCathode)
        .with_color(PredefinedColor::Yellow)
        .turned_on(true);
    let mut led = RgbLedController::new(SpyChannels::new(), config);
    led.channels_mut().drain();

    led.set_predefined_color_index(7);
    led.set_predefined_color_index(200);

    assert!(led.channels().history().is_empty());
    assert_eq!(led.duty_cycle(), DutyCycle::new(100, 100, 0));

    led.set_predefined_color_index(0);
    assert_eq!(led.channels().history(), writes_for(DutyCycle::new(100, 0, 0)));
}

#[test]
fn missing_setter_fails_without_any_write() {
    let log = SetterLog::new();
    let config = LedConfig::new(Polarity::CommonCathode).turned_on(true);

    let result = RgbLedController::from_fns(Some(log.red()), Some(log.green()), None::<fn(u8)>, config);

    assert!(matches!(
        result,
        Err(DriverError::InvalidConfig(ConfigError::MissingChannel(rgb_led_driver::Channel::Blue)))
    ));
    drop(result);
    assert_eq!(log.len(), 0);
}

#[test]
fn raw_config_errors_surface_as_invalid_config() {
    fn create(polarity: u8, color: u8) -> Result<(), DriverError> {
        let config = LedConfig::from_raw(polarity, color, 0, 0, 0, true)?;
        let _led = RgbLedController::new(SpyChannels::new(), config);
        Ok(())
    }

    assert_eq!(create(1, 0), Ok(()));
    assert_eq!(
        create(2, 0),
        Err(DriverError::InvalidConfig(ConfigError::InvalidPolarity(2)))
    );
    assert_eq!(
        create(1, 9),
        Err(DriverError::InvalidConfig(ConfigError::InvalidColor(9)))
    );
}

#[test]
fn float_color_is_scaled_before_conversion() {
    let config = LedConfig::new(Polarity::CommonCathode)
        .with_color(ColorSpec::from(Srgb::new(0.0f32, 1.0, 0.0)))
        .turned_on(true);
    let led = RgbLedController::new(SpyChannels::new(), config);

    assert_eq!(led.output(), DutyCycle::new(0, 100, 0));
}

#[test]
fn borrowed_channels_outlive_the_controller() {
    let mut channels = SpyChannels::new();
    {
        let config = LedConfig::new(Polarity::CommonCathode).turned_on(true);
        let mut led = RgbLedController::new(&mut channels, config);
        led.set_custom_color(0, 0, 255);
    }

    assert_eq!(
        &channels.history()[3..],
        writes_for(DutyCycle::new(0, 0, 100))
    );
}
