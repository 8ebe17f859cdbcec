use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::form::ConversionForm;
use crate::units::TemperatureUnit;

/// 기본 설정 파일 경로.
pub const CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (`auto`, `en`, `ko`)
    pub language: String,
    /// 새 폼의 기본 온도 단위
    pub temperature_unit: TemperatureUnit,
    /// `RUST_LOG`가 없을 때 쓰는 로그 필터
    pub log_level: String,
    /// 언어팩 디렉터리 (없으면 `locales/`)
    pub locale_dir: Option<String>,
    /// 마지막으로 사용한 입력
    pub last_form: Option<ConversionForm>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            temperature_unit: TemperatureUnit::Fahrenheit,
            log_level: "info".to_string(),
            locale_dir: None,
            last_form: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Serde(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(Path::new(CONFIG_PATH))
}

/// 지정한 경로에서 설정을 읽는다. 파일이 없으면 기본값을 저장하고 반환한다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        tracing::info!(path = %path.display(), "wrote default config");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_PATH))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 기본 온도 단위를 바꾼다. 저장된 입력도 새 단위로 환산한다.
    pub fn set_temperature_unit(&mut self, unit: TemperatureUnit) {
        self.temperature_unit = unit;
        if let Some(form) = self.last_form.as_mut() {
            form.convert_unit(unit);
        }
    }

    /// 저장된 입력이 있으면 그것을, 없으면 기본 단위로 새 폼을 만든다.
    pub fn initial_form(&self) -> ConversionForm {
        self.last_form.clone().unwrap_or_else(|| {
            let mut form = ConversionForm::default();
            form.convert_unit(self.temperature_unit);
            form
        })
    }
}
