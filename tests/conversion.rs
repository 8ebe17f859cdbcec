//! 시간 해석/환산/표시 회귀 테스트.
use fryflip::conversion::{
    convert_to_air_fryer, format_minutes, parse_time, time_factor, ConversionInput, Doneness,
    Thickness, NOTE_CONVECTION, NOTE_CONVENTIONAL,
};
use fryflip::units::TemperatureUnit;

fn input(oven_temp: f64, oven_minutes: f64, convection: bool) -> ConversionInput {
    ConversionInput {
        oven_temp,
        temp_unit: TemperatureUnit::Fahrenheit,
        oven_minutes,
        convection_recipe: convection,
        doneness: Doneness::Standard,
        thickness: Thickness::Normal,
    }
}

#[test]
fn parse_time_accepts_common_idioms() {
    assert_eq!(parse_time("30"), 30.0);
    assert_eq!(parse_time("1:15"), 75.0);
    assert_eq!(parse_time("1h15m"), 75.0);
    assert_eq!(parse_time("1H 15M"), 75.0);
    assert_eq!(parse_time("2h"), 120.0);
    assert_eq!(parse_time("45m"), 45.0);
    assert_eq!(parse_time(" 0:45 "), 45.0);
    assert_eq!(parse_time("12.5"), 12.5);
    assert_eq!(parse_time("25 min"), 25.0);
}

#[test]
fn parse_time_degrades_to_zero() {
    assert_eq!(parse_time(""), 0.0);
    assert_eq!(parse_time("abc"), 0.0);
    assert_eq!(parse_time("   "), 0.0);
    assert_eq!(parse_time(":"), 0.0);
}

#[test]
fn parse_time_clamps_to_ten_hours() {
    assert_eq!(parse_time("9999"), 600.0);
    assert_eq!(parse_time("20h"), 600.0);
    assert_eq!(parse_time("11:00"), 600.0);
}

#[test]
fn multi_colon_input_falls_through_to_digits() {
    // "1:2:3"는 시:분 형식이 아니므로 숫자만 남긴 "123"으로 해석된다
    assert_eq!(parse_time("1:2:3"), 123.0);
}

#[test]
fn conventional_recipe_scenario() {
    let result = convert_to_air_fryer(&input(400.0, 25.0, false));
    assert_eq!(result.air_temp, 375);
    assert_eq!(result.minutes, 20);
    assert_eq!(result.temp_display, "~375°F");
    assert_eq!(result.notes, vec![NOTE_CONVENTIONAL.to_string()]);
}

#[test]
fn convection_recipe_scenario() {
    let result = convert_to_air_fryer(&input(400.0, 25.0, true));
    assert_eq!(result.air_temp, 390);
    // 22.5분은 올림
    assert_eq!(result.minutes, 23);
    assert_eq!(result.temp_display, "~390°F");
    assert_eq!(result.notes, vec![NOTE_CONVECTION.to_string()]);
}

#[test]
fn thick_and_darker_compose_multiplicatively() {
    let factor = time_factor(false, Doneness::Darker, Thickness::Thick);
    assert!((factor - 0.882).abs() < 1e-12);
    let result = convert_to_air_fryer(&ConversionInput {
        doneness: Doneness::Darker,
        thickness: Thickness::Thick,
        ..input(400.0, 22.0, false)
    });
    assert_eq!(result.minutes, 19);
}

#[test]
fn lighter_and_thin_shorten_time() {
    let factor = time_factor(true, Doneness::Lighter, Thickness::Thin);
    assert!((factor - 0.9 * 0.95 * 0.95).abs() < 1e-12);
}

#[test]
fn celsius_uses_fahrenheit_drop() {
    // 200°C = 392°F, -25 = 367°F = 186.1°C
    let result = convert_to_air_fryer(&ConversionInput {
        temp_unit: TemperatureUnit::Celsius,
        ..input(200.0, 30.0, false)
    });
    assert_eq!(result.air_temp, 186);
    assert_eq!(result.temp_display, "~186°C");

    // 200°C, -10°F = 382°F = 194.4°C
    let result = convert_to_air_fryer(&ConversionInput {
        temp_unit: TemperatureUnit::Celsius,
        ..input(200.0, 30.0, true)
    });
    assert_eq!(result.air_temp, 194);
}

#[test]
fn inputs_are_clamped_before_transform() {
    let hot = convert_to_air_fryer(&input(900.0, 25.0, false));
    assert_eq!(hot.air_temp, 525);
    let cold = convert_to_air_fryer(&input(0.0, 25.0, false));
    assert_eq!(cold.air_temp, 75);
    let celsius = convert_to_air_fryer(&ConversionInput {
        temp_unit: TemperatureUnit::Celsius,
        ..input(400.0, 25.0, false)
    });
    // 290°C 상한 = 554°F, -25 = 529°F = 276.1°C
    assert_eq!(celsius.air_temp, 276);

    let long = convert_to_air_fryer(&input(400.0, 1000.0, false));
    assert_eq!(long.minutes, 192);
    let zero = convert_to_air_fryer(&input(400.0, 0.0, false));
    assert_eq!(zero.minutes, 1);
}

#[test]
fn nan_input_does_not_escape() {
    let result = convert_to_air_fryer(&input(f64::NAN, f64::NAN, false));
    assert_eq!(result.air_temp, 75);
    assert_eq!(result.minutes, 1);
}

#[test]
fn format_minutes_examples() {
    assert_eq!(format_minutes(45), "~45 min");
    assert_eq!(format_minutes(59), "~59 min");
    assert_eq!(format_minutes(60), "~1 hr 0 min");
    assert_eq!(format_minutes(75), "~1 hr 15 min");
    assert_eq!(format_minutes(120), "~2 hr 0 min");
}
