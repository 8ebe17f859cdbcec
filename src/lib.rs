//! 오븐 레시피 → 에어프라이어 환산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 쓴다.

pub mod app;
pub mod card;
pub mod config;
pub mod conversion;
pub mod form;
pub mod i18n;
pub mod logging;
pub mod metrics;
pub mod presets;
pub mod timer;
pub mod ui_cli;
pub mod units;

pub use conversion::{convert_to_air_fryer, format_minutes, parse_time};
