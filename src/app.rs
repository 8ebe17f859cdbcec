use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::form::ConversionForm;
use crate::i18n::{self, Translator};
use crate::metrics::MetricsSink;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 옵션 문자열 해석 오류
    Conversion(ConversionError),
    /// JSON 출력 오류
    Json(serde_json::Error),
    /// 알 수 없는 프리셋 이름
    UnknownPreset(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "I/O error: {e}"),
            AppError::Config(e) => write!(f, "{e}"),
            AppError::Conversion(e) => write!(f, "invalid option: {e}"),
            AppError::Json(e) => write!(f, "JSON error: {e}"),
            AppError::UnknownPreset(name) => write!(f, "unknown preset: {name}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ConversionError> for AppError {
    fn from(value: ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        AppError::Json(value)
    }
}

/// CLI 대화형 모드의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator, sink: &dyn MetricsSink) -> Result<(), AppError> {
    let mut form: ConversionForm = config.initial_form();
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Convert => ui_cli::handle_convert(tr, &mut form, sink)?,
            MenuChoice::Presets => ui_cli::handle_presets(tr, &mut form, sink)?,
            MenuChoice::Timer => ui_cli::handle_timer(tr, &form, sink)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                form.convert_unit(config.temperature_unit);
                config.last_form = Some(form.clone());
                config.save()?;
            }
            MenuChoice::Exit => {
                config.last_form = Some(form);
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
