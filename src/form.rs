use serde::{Deserialize, Serialize};

use crate::conversion::{self, ConversionInput, ConversionResult, Doneness, Thickness};
use crate::units::{celsius_to_fahrenheit, fahrenheit_to_celsius, TemperatureUnit};

/// 화면 입력 상태를 그대로 담는다. 시간은 사용자가 입력한 문자열을 보존한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionForm {
    pub temp_unit: TemperatureUnit,
    /// 비어 있으면 `None` (환산 시 0으로 간주)
    pub oven_temp: Option<f64>,
    pub oven_time: String,
    pub convection_recipe: bool,
    pub doneness: Doneness,
    pub thickness: Thickness,
}

impl Default for ConversionForm {
    fn default() -> Self {
        Self {
            temp_unit: TemperatureUnit::Fahrenheit,
            oven_temp: Some(400.0),
            oven_time: "25".to_string(),
            convection_recipe: false,
            doneness: Doneness::Standard,
            thickness: Thickness::Normal,
        }
    }
}

impl ConversionForm {
    /// 모든 입력을 기본값으로 되돌린다.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 온도 입력란 문자열을 반영한다. 빈 값이나 숫자가 아닌 값은 `None`.
    pub fn set_temp_text(&mut self, text: &str) {
        self.oven_temp = text.trim().parse::<f64>().ok();
    }

    /// 단위를 바꾸고 입력된 온도를 새 단위로 환산해 정수로 반올림한다.
    /// 이미 같은 단위면 아무것도 하지 않는다.
    pub fn convert_unit(&mut self, unit: TemperatureUnit) {
        if self.temp_unit == unit {
            return;
        }
        self.oven_temp = self.oven_temp.map(|t| {
            conversion::round_half_up(match unit {
                TemperatureUnit::Celsius => fahrenheit_to_celsius(t),
                TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(t),
            })
        });
        self.temp_unit = unit;
    }

    /// 파싱된 오븐 조리 시간 [min].
    pub fn oven_minutes(&self) -> f64 {
        conversion::parse_time(&self.oven_time)
    }

    pub fn to_input(&self) -> ConversionInput {
        ConversionInput {
            oven_temp: self.oven_temp.unwrap_or(0.0),
            temp_unit: self.temp_unit,
            oven_minutes: self.oven_minutes(),
            convection_recipe: self.convection_recipe,
            doneness: self.doneness,
            thickness: self.thickness,
        }
    }

    pub fn convert(&self) -> ConversionResult {
        conversion::convert_to_air_fryer(&self.to_input())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_visit() {
        let form = ConversionForm::default();
        let result = form.convert();
        assert_eq!(result.temp_display, "~375°F");
        assert_eq!(result.minutes, 20);
    }

    #[test]
    fn empty_temperature_clamps_to_minimum() {
        let mut form = ConversionForm::default();
        form.set_temp_text("");
        assert_eq!(form.oven_temp, None);
        // 0 → 100°F 하한 → 75°F
        assert_eq!(form.convert().air_temp, 75);
    }

    #[test]
    fn convert_unit_rescales_the_entered_temperature() {
        let mut form = ConversionForm::default();
        form.convert_unit(TemperatureUnit::Celsius);
        assert_eq!(form.temp_unit, TemperatureUnit::Celsius);
        // 400°F = 204.4°C
        assert_eq!(form.oven_temp, Some(204.0));

        form.convert_unit(TemperatureUnit::Celsius);
        assert_eq!(form.oven_temp, Some(204.0));

        form.convert_unit(TemperatureUnit::Fahrenheit);
        // 204°C = 399.2°F
        assert_eq!(form.oven_temp, Some(399.0));

        form.set_temp_text("");
        form.convert_unit(TemperatureUnit::Celsius);
        assert_eq!(form.oven_temp, None);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = ConversionForm {
            temp_unit: TemperatureUnit::Celsius,
            oven_temp: Some(180.0),
            oven_time: "1h".into(),
            convection_recipe: true,
            doneness: Doneness::Darker,
            thickness: Thickness::Thin,
        };
        form.reset();
        assert_eq!(form, ConversionForm::default());
    }
}
