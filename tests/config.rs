use fryflip::config::{self, Config};
use fryflip::form::ConversionForm;
use fryflip::units::TemperatureUnit;

#[test]
fn missing_file_writes_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = config::load_from(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
}

#[test]
fn saved_form_round_trips() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = Config {
        language: "ko".into(),
        temperature_unit: TemperatureUnit::Celsius,
        last_form: Some(ConversionForm {
            temp_unit: TemperatureUnit::Celsius,
            oven_temp: Some(180.0),
            oven_time: "1h10m".into(),
            convection_recipe: true,
            ..ConversionForm::default()
        }),
        ..Config::default()
    };
    cfg.save_to(&path).expect("save");
    let loaded = config::load_from(&path).expect("load");
    assert_eq!(loaded, cfg);
    assert_eq!(loaded.initial_form().oven_time, "1h10m");
}

#[test]
fn partial_file_fills_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "temperature_unit = \"C\"\n").expect("write");
    let cfg = config::load_from(&path).expect("load");
    assert_eq!(cfg.language, "auto");
    let form = cfg.initial_form();
    assert_eq!(form.temp_unit, TemperatureUnit::Celsius);
    // 400°F = 204.4°C
    assert_eq!(form.oven_temp, Some(204.0));
}

#[test]
fn broken_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = [").expect("write");
    assert!(matches!(
        config::load_from(&path),
        Err(config::ConfigError::Serde(_))
    ));
}

#[test]
fn changing_the_unit_carries_over_to_the_saved_form() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let mut cfg = Config {
        last_form: Some(ConversionForm::default()),
        ..Config::default()
    };
    cfg.set_temperature_unit(TemperatureUnit::Celsius);
    cfg.save_to(&path).expect("save");

    let loaded = config::load_from(&path).expect("load");
    assert_eq!(loaded.temperature_unit, TemperatureUnit::Celsius);
    let form = loaded.initial_form();
    assert_eq!(form.temp_unit, TemperatureUnit::Celsius);
    assert_eq!(form.oven_temp, Some(204.0));
    assert_eq!(form.oven_time, "25");
}
