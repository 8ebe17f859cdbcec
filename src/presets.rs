use crate::conversion::{round_half_up, Doneness, Thickness};
use crate::form::ConversionForm;
use crate::metrics::{MetricEvent, MetricsSink};
use crate::units::{fahrenheit_to_celsius, TemperatureUnit};

/// 자주 쓰는 음식의 오븐 레시피 프리셋. 온도는 화씨로 저장한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub label: &'static str,
    pub oven_temp_f: f64,
    pub oven_minutes: u32,
    pub doneness: Doneness,
    pub thickness: Thickness,
    pub convection_recipe: bool,
}

pub const PRESETS: [Preset; 4] = [
    Preset {
        label: "Fries",
        oven_temp_f: 400.0,
        oven_minutes: 16,
        doneness: Doneness::Standard,
        thickness: Thickness::Thin,
        convection_recipe: false,
    },
    Preset {
        label: "Wings",
        oven_temp_f: 390.0,
        oven_minutes: 22,
        doneness: Doneness::Darker,
        thickness: Thickness::Thick,
        convection_recipe: false,
    },
    Preset {
        label: "Nuggets",
        oven_temp_f: 400.0,
        oven_minutes: 12,
        doneness: Doneness::Standard,
        thickness: Thickness::Normal,
        convection_recipe: false,
    },
    Preset {
        label: "Broccoli",
        oven_temp_f: 380.0,
        oven_minutes: 10,
        doneness: Doneness::Lighter,
        thickness: Thickness::Normal,
        convection_recipe: true,
    },
];

/// 이름으로 프리셋을 찾는다 (대소문자 무시).
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    let name = name.trim();
    PRESETS.iter().find(|p| p.label.eq_ignore_ascii_case(name))
}

impl Preset {
    /// 지정한 단위로 표현한 오븐 온도. 섭씨는 정수로 반올림한다.
    pub fn oven_temp_in(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Fahrenheit => self.oven_temp_f,
            TemperatureUnit::Celsius => round_half_up(fahrenheit_to_celsius(self.oven_temp_f)),
        }
    }

    /// 폼의 단위는 유지한 채 나머지 입력을 프리셋 값으로 채운다.
    pub fn apply_to(&self, form: &mut ConversionForm) {
        form.oven_temp = Some(self.oven_temp_in(form.temp_unit));
        form.oven_time = self.oven_minutes.to_string();
        form.convection_recipe = self.convection_recipe;
        form.doneness = self.doneness;
        form.thickness = self.thickness;
    }
}

/// 프리셋을 적용하고 `preset` 이벤트를 기록한다. 알 수 없는 이름이면 폼을 건드리지 않는다.
pub fn apply_preset(label: &str, form: &mut ConversionForm, sink: &dyn MetricsSink) -> bool {
    let Some(preset) = find_preset(label) else {
        tracing::debug!(label, "unknown preset");
        return false;
    };
    preset.apply_to(form);
    sink.record(MetricEvent::now("preset").with("label", preset.label));
    true
}
