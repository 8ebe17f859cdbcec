use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CONVERT: &str = "main_menu.convert";
    pub const MAIN_MENU_PRESETS: &str = "main_menu.presets";
    pub const MAIN_MENU_TIMER: &str = "main_menu.timer";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CONVERT_HEADING: &str = "convert.heading";
    pub const PROMPT_UNIT: &str = "prompt.unit";
    pub const PROMPT_OVEN_TEMP: &str = "prompt.oven_temp";
    pub const PROMPT_OVEN_TIME: &str = "prompt.oven_time";
    pub const PROMPT_CONVECTION: &str = "prompt.convection";
    pub const PROMPT_DONENESS: &str = "prompt.doneness";
    pub const PROMPT_THICKNESS: &str = "prompt.thickness";

    pub const PRESETS_HEADING: &str = "presets.heading";
    pub const PRESETS_PROMPT: &str = "presets.prompt";
    pub const PRESETS_UNKNOWN: &str = "presets.unknown";

    pub const TIMER_HEADING: &str = "timer.heading";
    pub const TIMER_START: &str = "timer.start";
    pub const TIMER_STOP: &str = "timer.stop";
    pub const TIMER_HALFWAY: &str = "timer.halfway";
    pub const TIMER_DONE: &str = "timer.done";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_LANGUAGE: &str = "settings.language";

    pub const LABEL_UNIT: &str = "label.unit";
    pub const LABEL_OVEN_TEMP: &str = "label.oven_temp";
    pub const LABEL_OVEN_TIME: &str = "label.oven_time";
    pub const LABEL_CONVECTION: &str = "label.convection";
    pub const LABEL_DONENESS: &str = "label.doneness";
    pub const LABEL_THICKNESS: &str = "label.thickness";
    pub const LABEL_RESET: &str = "label.reset";
    pub const LABEL_SAVE_CARD: &str = "label.save_card";
    pub const LABEL_COPY_CARD: &str = "label.copy_card";

    pub const DONENESS_LIGHTER: &str = "doneness.lighter";
    pub const DONENESS_STANDARD: &str = "doneness.standard";
    pub const DONENESS_DARKER: &str = "doneness.darker";
    pub const THICKNESS_THIN: &str = "thickness.thin";
    pub const THICKNESS_NORMAL: &str = "thickness.normal";
    pub const THICKNESS_THICK: &str = "thickness.thick";

    pub const CARD_TITLE: &str = "card.title";
    pub const CARD_TEMPERATURE: &str = "card.temperature";
    pub const CARD_TIME: &str = "card.time";
    pub const CARD_SHAKE: &str = "card.shake";
    pub const CARD_METHOD: &str = "card.method";
    pub const CARD_METHOD_TEXT: &str = "card.method_text";
    pub const CARD_HOW_IT_WORKS: &str = "card.how_it_works";
    pub const CARD_SAFETY: &str = "card.safety";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    Ko,
    #[default]
    En,
}

impl Language {
    /// `ko`, `en-GB`, `ko_KR.UTF-8` 같은 태그에서 언어를 읽는다.
    /// `auto`나 지원하지 않는 언어는 `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['.', '_', '-']).next()?.to_lowercase();
        match primary.as_str() {
            "ko" => Some(Language::Ko),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    pack: HashMap<String, String>,
}

impl Translator {
    /// 내장 문자열만 쓰는 번역기.
    pub fn new(lang: Language) -> Self {
        Self {
            lang,
            pack: HashMap::new(),
        }
    }

    /// `<pack_dir>/<code>.toml`(없으면 `locales/<code>.toml`)의 문자열이 내장
    /// 문자열보다 우선한다.
    pub fn new_with_pack(lang: Language, pack_dir: Option<&str>) -> Self {
        let pack = pack_dir
            .into_iter()
            .chain(["locales"])
            .find_map(|dir| read_pack(&Path::new(dir).join(format!("{}.toml", lang.as_code()))))
            .unwrap_or_default();
        Self { lang, pack }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 한국어 번역이 없으면 영어 문자열을 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.pack.get(key) {
            return v;
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// CLI 플래그, 설정, 시스템 로케일 순으로 언어를 고른다. 모두 `auto`면 영어.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> Language {
    Language::from_tag(cli_arg)
        .or_else(|| config_lang.and_then(Language::from_tag))
        .or_else(system_language)
        .unwrap_or_default()
}

fn system_language() -> Option<Language> {
    get_locale()
        .into_iter()
        .chain(["LANG", "LC_ALL"].into_iter().filter_map(|v| std::env::var(v).ok()))
        .find_map(|tag| Language::from_tag(&tag))
}

fn read_pack(path: &Path) -> Option<HashMap<String, String>> {
    let content = fs::read_to_string(path).ok()?;
    let pack = flatten_pack(&content)?;
    tracing::debug!(path = %path.display(), entries = pack.len(), "loaded language pack");
    Some(pack)
}

/// `[label] reset = "..."` 는 `label.reset` 키가 된다. 문자열이 아닌 값은 버린다.
pub(crate) fn flatten_pack(src: &str) -> Option<HashMap<String, String>> {
    let root: toml::Table = toml::from_str(src).ok()?;
    let mut pack = HashMap::new();
    let mut pending: Vec<(String, toml::Value)> = root.into_iter().collect();
    while let Some((key, value)) = pending.pop() {
        match value {
            toml::Value::String(s) => {
                pack.insert(key, s);
            }
            toml::Value::Table(table) => {
                pending.extend(table.into_iter().map(|(k, v)| (format!("{key}.{k}"), v)));
            }
            _ => {}
        }
    }
    (!pack.is_empty()).then_some(pack)
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        APP_TITLE => "FryFlip 에어프라이어 변환기",
        MAIN_MENU_TITLE => "\n=== FryFlip 에어프라이어 변환기 ===",
        MAIN_MENU_CONVERT => "1) 레시피 변환",
        MAIN_MENU_PRESETS => "2) 프리셋",
        MAIN_MENU_TIMER => "3) 타이머",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        CONVERT_HEADING => "\n-- 레시피 변환 --",
        PROMPT_UNIT => "온도 단위 (F/C, 엔터=유지): ",
        PROMPT_OVEN_TEMP => "오븐 온도: ",
        PROMPT_OVEN_TIME => "오븐 시간 (예: 25, 1:15, 1h15m): ",
        PROMPT_CONVECTION => "컨벡션 오븐 레시피인가요? (y/N): ",
        PROMPT_DONENESS => "굽기 정도 (lighter/standard/darker): ",
        PROMPT_THICKNESS => "두께 (thin/normal/thick): ",
        PRESETS_HEADING => "\n-- 프리셋 --",
        PRESETS_PROMPT => "프리셋 이름 (엔터=취소): ",
        PRESETS_UNKNOWN => "알 수 없는 프리셋입니다.",
        TIMER_HEADING => "\n-- 타이머 --",
        TIMER_START => "시작",
        TIMER_STOP => "정지",
        TIMER_HALFWAY => "절반 지났습니다. 흔들거나 뒤집어 주세요!",
        TIMER_DONE => "완료! 속까지 익었는지 확인하세요.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 기본 온도 단위:",
        SETTINGS_OPTIONS => "1) °F  2) °C",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "기본 온도 단위가 변경되었습니다:",
        SETTINGS_LANGUAGE => "언어",
        LABEL_UNIT => "단위",
        LABEL_OVEN_TEMP => "오븐 온도",
        LABEL_OVEN_TIME => "오븐 시간",
        LABEL_CONVECTION => "컨벡션(팬) 오븐 레시피",
        LABEL_DONENESS => "굽기 정도",
        LABEL_THICKNESS => "두께",
        LABEL_RESET => "초기화",
        LABEL_SAVE_CARD => "카드 저장…",
        LABEL_COPY_CARD => "복사",
        DONENESS_LIGHTER => "연하게",
        DONENESS_STANDARD => "보통",
        DONENESS_DARKER => "진하게",
        THICKNESS_THIN => "얇음",
        THICKNESS_NORMAL => "보통",
        THICKNESS_THICK => "두꺼움",
        CARD_TITLE => "에어프라이어 설정",
        CARD_TEMPERATURE => "온도",
        CARD_TIME => "시간",
        CARD_SHAKE => "중간에 흔들기",
        CARD_METHOD => "방법",
        CARD_METHOD_TEXT => "필요하면 예열하세요. 중간에 흔들거나 뒤집어 주세요.",
        CARD_HOW_IT_WORKS => {
            "오븐 온도를 약 {drop} 낮추고 시간을 약 20% 줄인 값이 시작점입니다. 컨벡션 레시피는 보정 폭이 작고, 두께와 굽기 정도는 시간을 ±5% 조정합니다."
        }
        CARD_SAFETY => "식품 안전 기준 내부 온도를 항상 지키세요. 기기마다 차이가 있으니 일찍 확인하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        APP_TITLE => "FryFlip Air-Fryer Converter",
        MAIN_MENU_TITLE => "\n=== FryFlip Air-Fryer Converter ===",
        MAIN_MENU_CONVERT => "1) Convert a recipe",
        MAIN_MENU_PRESETS => "2) Presets",
        MAIN_MENU_TIMER => "3) Timer",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        CONVERT_HEADING => "\n-- Convert a recipe --",
        PROMPT_UNIT => "Temperature unit (F/C, enter to keep): ",
        PROMPT_OVEN_TEMP => "Oven temperature: ",
        PROMPT_OVEN_TIME => "Oven time (e.g. 25, 1:15, 1h15m): ",
        PROMPT_CONVECTION => "Is this a convection-oven recipe? (y/N): ",
        PROMPT_DONENESS => "Doneness (lighter/standard/darker): ",
        PROMPT_THICKNESS => "Thickness (thin/normal/thick): ",
        PRESETS_HEADING => "\n-- Presets --",
        PRESETS_PROMPT => "Preset name (enter to cancel): ",
        PRESETS_UNKNOWN => "Unknown preset.",
        TIMER_HEADING => "\n-- Timer --",
        TIMER_START => "Start",
        TIMER_STOP => "Stop",
        TIMER_HALFWAY => "Halfway there. Shake or turn the food!",
        TIMER_DONE => "Done! Check that it is cooked through.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current default temperature unit:",
        SETTINGS_OPTIONS => "1) °F  2) °C",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; unit unchanged.",
        SETTINGS_SAVED => "Default temperature unit changed to:",
        SETTINGS_LANGUAGE => "Language",
        LABEL_UNIT => "Unit",
        LABEL_OVEN_TEMP => "Oven temperature",
        LABEL_OVEN_TIME => "Oven time",
        LABEL_CONVECTION => "Recipe is for a convection/fan oven",
        LABEL_DONENESS => "Doneness",
        LABEL_THICKNESS => "Thickness",
        LABEL_RESET => "Reset",
        LABEL_SAVE_CARD => "Save card…",
        LABEL_COPY_CARD => "Copy",
        DONENESS_LIGHTER => "Lighter",
        DONENESS_STANDARD => "Standard",
        DONENESS_DARKER => "Darker",
        THICKNESS_THIN => "Thin",
        THICKNESS_NORMAL => "Normal",
        THICKNESS_THICK => "Thick",
        CARD_TITLE => "Air fryer settings",
        CARD_TEMPERATURE => "Temperature",
        CARD_TIME => "Time",
        CARD_SHAKE => "Shake halfway",
        CARD_METHOD => "Method",
        CARD_METHOD_TEXT => "Preheat if required. Shake/turn halfway.",
        CARD_HOW_IT_WORKS => {
            "FryFlip reduces oven temperature by ~{drop} and time by ~20% as a starting point. If your recipe already used a convection/fan oven, adjustments are smaller. Thickness & doneness tweak time by ~±5%."
        }
        CARD_SAFETY => "Always follow food-safety guidance for internal temperatures. Appliances vary, so check early.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        _ => "[missing translation]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_falls_back_to_english() {
        let tr = Translator::new(Language::Ko);
        assert_eq!(tr.t(keys::LABEL_RESET), "초기화");
        assert_eq!(tr.t("no.such.key"), "[missing translation]");
    }

    #[test]
    fn locale_tags_map_to_languages() {
        assert_eq!(Language::from_tag("ko_KR.UTF-8"), Some(Language::Ko));
        assert_eq!(Language::from_tag("en-GB"), Some(Language::En));
        assert_eq!(Language::from_tag(" KO "), Some(Language::Ko));
        assert_eq!(Language::from_tag("auto"), None);
        assert_eq!(Language::from_tag("fr_FR"), None);
        assert_eq!(Language::from_tag(""), None);
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("ko", Some("en")), Language::Ko);
        assert_eq!(resolve_language("auto", Some("en-GB")), Language::En);
    }

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let src = "title = \"Hi\"\n[card.shake]\nlabel = \"Toss\"\n[label]\nreset = \"Start over\"\ncount = 3\n";
        let pack = flatten_pack(src).expect("pack");
        assert_eq!(pack.get("label.reset").map(String::as_str), Some("Start over"));
        assert_eq!(pack.get("card.shake.label").map(String::as_str), Some("Toss"));
        assert_eq!(pack.get("title").map(String::as_str), Some("Hi"));
        assert!(!pack.contains_key("label.count"));
        assert!(flatten_pack("count = 3").is_none());
    }

    #[test]
    fn pack_strings_override_builtins() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("en.toml"), "[label]\nreset = \"Start over\"\n").expect("write");
        let tr = Translator::new_with_pack(Language::En, dir.path().to_str());
        assert_eq!(tr.t(keys::LABEL_RESET), "Start over");
        assert_eq!(tr.t(keys::LABEL_UNIT), "Unit");
        assert_eq!(tr.language(), Language::En);
    }
}
