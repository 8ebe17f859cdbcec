//! 복사/인쇄/내보내기용 결과 카드 텍스트.

use crate::conversion::{format_minutes, ConversionResult};
use crate::form::ConversionForm;
use crate::i18n::{keys, Translator};
use crate::units::TemperatureUnit;

/// 안내문에 표시하는 기본 온도 강하폭.
pub fn typical_drop_label(unit: TemperatureUnit) -> &'static str {
    match unit {
        TemperatureUnit::Fahrenheit => "25°F",
        TemperatureUnit::Celsius => "15°C",
    }
}

/// 한 줄 요약 (예: `~375°F • ~20 min • Shake halfway`).
pub fn summary_line(result: &ConversionResult, tr: &Translator) -> String {
    format!(
        "{} • {} • {}",
        result.temp_display,
        format_minutes(result.minutes),
        tr.t(keys::CARD_SHAKE)
    )
}

/// "how it works" 안내문.
pub fn how_it_works(unit: TemperatureUnit, tr: &Translator) -> String {
    tr.t(keys::CARD_HOW_IT_WORKS)
        .replace("{drop}", typical_drop_label(unit))
}

/// 결과 카드 전체 텍스트.
pub fn render_card(form: &ConversionForm, result: &ConversionResult, tr: &Translator) -> String {
    let mut lines = vec![
        tr.t(keys::CARD_TITLE).to_string(),
        format!("{}: {}", tr.t(keys::CARD_TEMPERATURE), result.temp_display),
        format!(
            "{}: {}",
            tr.t(keys::CARD_TIME),
            format_minutes(result.minutes)
        ),
        format!("{}: {}", tr.t(keys::CARD_METHOD), tr.t(keys::CARD_METHOD_TEXT)),
    ];
    lines.extend(result.notes.iter().map(|n| format!("- {n}")));
    lines.push(String::new());
    lines.push(how_it_works(form.temp_unit, tr));
    lines.push(tr.t(keys::CARD_SAFETY).to_string());
    lines.join("\n")
}
