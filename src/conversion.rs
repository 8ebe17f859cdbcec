//! 오븐 레시피 설정을 에어프라이어 설정으로 환산하는 핵심 계산 모듈.
//!
//! 모든 함수는 상태가 없고 실패하지 않는다. 범위를 벗어난 입력은 클램프되고,
//! 해석할 수 없는 시간 문자열은 0분이 된다.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::units::{celsius_to_fahrenheit, fahrenheit_to_celsius, TemperatureUnit};

/// `parse_time` 결과의 상한 [min].
pub const MAX_PARSED_MINUTES: f64 = 600.0;
/// 오븐 조리 시간 허용 범위 [min].
pub const OVEN_MINUTES_RANGE: (f64, f64) = (1.0, 240.0);

const CONVENTIONAL_DROP_F: f64 = 25.0;
const CONVECTION_DROP_F: f64 = 10.0;
const CONVENTIONAL_TIME_FACTOR: f64 = 0.8;
const CONVECTION_TIME_FACTOR: f64 = 0.9;
const NUDGE_DOWN: f64 = 0.95;
const NUDGE_UP: f64 = 1.05;

pub const NOTE_CONVENTIONAL: &str =
    "Original recipe was conventional oven—bigger adjustment applied.";
pub const NOTE_CONVECTION: &str = "Original recipe used convection—smaller adjustment applied.";

static HOURS_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)([0-9]+)h").expect("static regex"));
static MINUTES_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([0-9]+)m").expect("static regex"));

/// 문자열 옵션을 enum으로 변환할 때 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// 알 수 없는 온도 단위 문자열
    UnknownUnit(String),
    /// 알 수 없는 굽기 정도
    UnknownDoneness(String),
    /// 알 수 없는 두께
    UnknownThickness(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "unknown temperature unit: {u}"),
            ConversionError::UnknownDoneness(d) => write!(f, "unknown doneness: {d}"),
            ConversionError::UnknownThickness(t) => write!(f, "unknown thickness: {t}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 원하는 굽기 정도. 조리 시간에 ±5% 보정으로 반영된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Doneness {
    Lighter,
    #[default]
    Standard,
    Darker,
}

impl Doneness {
    pub const ALL: [Doneness; 3] = [Doneness::Lighter, Doneness::Standard, Doneness::Darker];

    pub fn as_str(self) -> &'static str {
        match self {
            Doneness::Lighter => "lighter",
            Doneness::Standard => "standard",
            Doneness::Darker => "darker",
        }
    }

    fn time_nudge(self) -> f64 {
        match self {
            Doneness::Lighter => NUDGE_DOWN,
            Doneness::Standard => 1.0,
            Doneness::Darker => NUDGE_UP,
        }
    }
}

/// 재료 두께 구분. 조리 시간에 ±5% 보정으로 반영된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Thickness {
    Thin,
    #[default]
    Normal,
    Thick,
}

impl Thickness {
    pub const ALL: [Thickness; 3] = [Thickness::Thin, Thickness::Normal, Thickness::Thick];

    pub fn as_str(self) -> &'static str {
        match self {
            Thickness::Thin => "thin",
            Thickness::Normal => "normal",
            Thickness::Thick => "thick",
        }
    }

    fn time_nudge(self) -> f64 {
        match self {
            Thickness::Thin => NUDGE_DOWN,
            Thickness::Normal => 1.0,
            Thickness::Thick => NUDGE_UP,
        }
    }
}

impl FromStr for Doneness {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lighter" | "light" => Ok(Doneness::Lighter),
            "standard" | "" => Ok(Doneness::Standard),
            "darker" | "dark" => Ok(Doneness::Darker),
            _ => Err(ConversionError::UnknownDoneness(s.to_string())),
        }
    }
}

impl FromStr for Thickness {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "thin" => Ok(Thickness::Thin),
            "normal" | "" => Ok(Thickness::Normal),
            "thick" => Ok(Thickness::Thick),
            _ => Err(ConversionError::UnknownThickness(s.to_string())),
        }
    }
}

/// 환산 요청 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionInput {
    /// 오븐 레시피 온도 [`temp_unit`]
    pub oven_temp: f64,
    pub temp_unit: TemperatureUnit,
    /// 오븐 레시피 조리 시간 [min], 소수 허용
    pub oven_minutes: f64,
    /// 원 레시피가 컨벡션(팬) 오븐 기준인지 여부
    pub convection_recipe: bool,
    pub doneness: Doneness,
    pub thickness: Thickness,
}

/// 환산 결과.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// 에어프라이어 조리 시간 [min], 항상 1 이상
    pub minutes: u32,
    /// 에어프라이어 온도 [입력과 같은 단위]
    pub air_temp: i64,
    /// 표시용 온도 문자열 (예: `~375°F`)
    pub temp_display: String,
    /// 적용된 보정에 대한 안내 문구
    pub notes: Vec<String>,
}

/// 자유 형식 시간 문자열을 분 단위로 해석한다.
///
/// `"75"`, `"1:15"`(시:분), `"1h15m"` 형식을 받는다. 해석할 수 없으면 0을
/// 반환하며 결과는 항상 [0, 600] 범위이다.
pub fn parse_time(input: &str) -> f64 {
    let s = input.trim();

    if s.contains(':') {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        if let [hours, minutes] = parts.as_slice() {
            return clamp(to_num(hours) * 60.0 + to_num(minutes), 0.0, MAX_PARSED_MINUTES);
        }
    }

    let hours = HOURS_MARKER.captures(s).map(|c| to_num(&c[1]));
    let minutes = MINUTES_MARKER.captures(s).map(|c| to_num(&c[1]));
    if hours.is_some() || minutes.is_some() {
        let total = hours.unwrap_or(0.0) * 60.0 + minutes.unwrap_or(0.0);
        return clamp(total, 0.0, MAX_PARSED_MINUTES);
    }

    clamp(to_num(s), 0.0, MAX_PARSED_MINUTES)
}

/// 오븐 레시피 설정을 에어프라이어 설정으로 환산한다.
pub fn convert_to_air_fryer(input: &ConversionInput) -> ConversionResult {
    let (t_min, t_max) = input.temp_unit.oven_range();
    let oven_temp = clamp(input.oven_temp, t_min, t_max);
    let oven_minutes = clamp(input.oven_minutes, OVEN_MINUTES_RANGE.0, OVEN_MINUTES_RANGE.1);

    let drop_f = temperature_drop_f(input.convection_recipe);
    let factor = time_factor(input.convection_recipe, input.doneness, input.thickness);

    // 온도 강하폭은 항상 화씨 기준으로 적용
    let air_temp = match input.temp_unit {
        TemperatureUnit::Fahrenheit => round_half_up(oven_temp - drop_f),
        TemperatureUnit::Celsius => {
            let target_f = celsius_to_fahrenheit(oven_temp) - drop_f;
            round_half_up(fahrenheit_to_celsius(target_f))
        }
    } as i64;

    let minutes = round_half_up(oven_minutes * factor).max(1.0) as u32;

    let note = if input.convection_recipe {
        NOTE_CONVECTION
    } else {
        NOTE_CONVENTIONAL
    };

    tracing::debug!(
        oven_temp,
        oven_minutes,
        unit = input.temp_unit.letter(),
        factor,
        air_temp,
        minutes,
        "converted oven settings"
    );

    ConversionResult {
        minutes,
        air_temp,
        temp_display: format!("~{air_temp}°{}", input.temp_unit.letter()),
        notes: vec![note.to_string()],
    }
}

/// 분을 표시용 문자열로 변환한다. 60분 이상이면 시간/분으로 나눈다.
pub fn format_minutes(minutes: u32) -> String {
    if minutes < 60 {
        return format!("~{minutes} min");
    }
    format!("~{} hr {} min", minutes / 60, minutes % 60)
}

/// 화씨 기준 온도 강하폭.
pub fn temperature_drop_f(convection_recipe: bool) -> f64 {
    if convection_recipe {
        CONVECTION_DROP_F
    } else {
        CONVENTIONAL_DROP_F
    }
}

/// 조리 시간 배율. 보정값은 곱으로 누적된다.
pub fn time_factor(convection_recipe: bool, doneness: Doneness, thickness: Thickness) -> f64 {
    let base = if convection_recipe {
        CONVECTION_TIME_FACTOR
    } else {
        CONVENTIONAL_TIME_FACTOR
    };
    base * doneness.time_nudge() * thickness.time_nudge()
}

/// NaN은 하한으로 보낸다.
fn clamp(n: f64, min: f64, max: f64) -> f64 {
    if n.is_nan() {
        return min;
    }
    n.clamp(min, max)
}

fn to_num(s: &str) -> f64 {
    let digits: String = s.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
    digits.parse::<f64>().unwrap_or(0.0)
}

/// 0.5는 항상 올림 (22.5 → 23).
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_num_strips_everything_but_digits_and_dot() {
        assert_eq!(to_num(" 12 min"), 12.0);
        assert_eq!(to_num("1.5"), 1.5);
        assert_eq!(to_num("1.2.3"), 0.0);
        assert_eq!(to_num("."), 0.0);
        assert_eq!(to_num(""), 0.0);
    }

    #[test]
    fn clamp_sends_nan_to_min() {
        assert_eq!(clamp(f64::NAN, 1.0, 240.0), 1.0);
        assert_eq!(clamp(f64::INFINITY, 1.0, 240.0), 240.0);
    }

    #[test]
    fn round_half_up_matches_expected_ties() {
        assert_eq!(round_half_up(22.5), 23.0);
        assert_eq!(round_half_up(19.404), 19.0);
        assert_eq!(round_half_up(0.49), 0.0);
    }

    #[test]
    fn option_strings_parse() {
        assert_eq!("Darker".parse::<Doneness>(), Ok(Doneness::Darker));
        assert_eq!("thick".parse::<Thickness>(), Ok(Thickness::Thick));
        assert!(matches!(
            "crispy".parse::<Thickness>(),
            Err(ConversionError::UnknownThickness(_))
        ));
    }
}
