use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::conversion::ConversionError;

/// 레시피에서 쓰는 온도 단위. 표시할 때는 `F`/`C` 한 글자를 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[default]
    #[serde(rename = "F", alias = "Fahrenheit")]
    Fahrenheit,
    #[serde(rename = "C", alias = "Celsius")]
    Celsius,
}

impl TemperatureUnit {
    /// 표시용 단위 문자.
    pub fn letter(self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Celsius => "C",
        }
    }

    /// 오븐 온도 입력의 허용 범위 (min, max).
    pub fn oven_range(self) -> (f64, f64) {
        match self {
            TemperatureUnit::Fahrenheit => (100.0, 550.0),
            TemperatureUnit::Celsius => (100.0, 290.0),
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.letter())
    }
}

impl FromStr for TemperatureUnit {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "f" | "°f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            "c" | "°c" | "celsius" => Ok(TemperatureUnit::Celsius),
            _ => Err(ConversionError::UnknownUnit(s.to_string())),
        }
    }
}

/// 섭씨를 화씨로 변환한다. `F = C*9/5 + 32`
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

/// 화씨를 섭씨로 변환한다. `C = (F-32)*5/9`
pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}
