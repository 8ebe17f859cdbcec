//! 단위 정의 및 변환 모듈 모음.

pub mod temperature;

pub use temperature::{celsius_to_fahrenheit, fahrenheit_to_celsius, TemperatureUnit};
