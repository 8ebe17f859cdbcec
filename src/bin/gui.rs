#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::time::{Duration, Instant};
use std::{env, fs, path::Path};
use fryflip::{
    card, config,
    conversion::{format_minutes, ConversionResult, Doneness, Thickness},
    form::ConversionForm,
    i18n::{self, keys},
    logging,
    metrics::{MetricEvent, MetricsSink, TracingSink},
    presets::{self, PRESETS},
    timer::{CookTimer, TimerEvent},
    units::TemperatureUnit,
};

const BRAND_GREEN: egui::Color32 = egui::Color32::from_rgb(0x0f, 0x7a, 0x42);
const PANEL_GREEN: egui::Color32 = egui::Color32::from_rgb(0xf4, 0xfb, 0xf6);
/// 마지막 입력 이후 이만큼 조용하면 설정을 저장한다.
const SAVE_DELAY: Duration = Duration::from_secs(1);

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en/ko)
    let mut cli_lang: Option<String> = None;
    let mut verbose = false;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        } else if a == "--verbose" || a == "-v" {
            verbose = true;
        }
        i += 1;
    }

    let app_cfg = config::load_or_default().unwrap_or_default();
    logging::init(verbose, &app_cfg.log_level);

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([460.0, 720.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "FryFlip",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg, cli_lang))),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["fryflip.png", "icon.png", "assets/icon.png", "../fryflip.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

/// 변경 후 `SAVE_DELAY`가 지났으면 저장할 때다.
fn save_due(dirty_since: Option<Instant>, now: Instant) -> bool {
    dirty_since.is_some_and(|t| now.saturating_duration_since(t) >= SAVE_DELAY)
}

/// 온도 입력란에 표시할 문자열.
fn temp_text_for(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn doneness_key(d: Doneness) -> &'static str {
    match d {
        Doneness::Lighter => keys::DONENESS_LIGHTER,
        Doneness::Standard => keys::DONENESS_STANDARD,
        Doneness::Darker => keys::DONENESS_DARKER,
    }
}

fn thickness_key(t: Thickness) -> &'static str {
    match t {
        Thickness::Thin => keys::THICKNESS_THIN,
        Thickness::Normal => keys::THICKNESS_NORMAL,
        Thickness::Thick => keys::THICKNESS_THICK,
    }
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    sink: TracingSink,
    form: ConversionForm,
    saved_form: ConversionForm,
    /// 저장되지 않은 변경이 처음 생긴 시각
    dirty_since: Option<Instant>,
    /// `--lang` 값. 이번 실행에만 적용되고 설정 파일에는 쓰지 않는다.
    lang_override: Option<String>,
    temp_text: String,
    // 타이머
    timer: CookTimer,
    last_tick: Option<Instant>,
    timer_banner: Option<String>,
    status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config, lang_override: Option<String>) -> Self {
        let lang = i18n::resolve_language(
            lang_override.as_deref().unwrap_or("auto"),
            Some(config.language.as_str()),
        );
        let tr = i18n::Translator::new_with_pack(lang, config.locale_dir.as_deref());
        let form = config.initial_form();
        Self {
            temp_text: temp_text_for(form.oven_temp),
            saved_form: form.clone(),
            dirty_since: None,
            lang_override,
            form,
            config,
            tr,
            sink: TracingSink,
            timer: CookTimer::new(),
            last_tick: None,
            timer_banner: None,
            status: None,
        }
    }

    /// 화면에서 고른 언어는 `--lang` 값을 대신하고 설정에 저장된다.
    fn set_language(&mut self, code: &str) {
        self.lang_override = None;
        self.config.language = code.to_string();
        let lang = i18n::resolve_language(code, None);
        self.tr = i18n::Translator::new_with_pack(lang, self.config.locale_dir.as_deref());
        self.persist();
    }

    fn persist(&mut self) {
        self.config.last_form = Some(self.form.clone());
        if let Err(e) = self.config.save() {
            tracing::warn!(error = %e, "failed to save config");
        }
        self.saved_form = self.form.clone();
        self.dirty_since = None;
    }

    /// 폼이 바뀌었으면 저장을 예약하고, 입력이 멈춘 뒤에만 실제로 쓴다.
    fn persist_if_settled(&mut self, ctx: &egui::Context) {
        if self.form == self.saved_form {
            self.dirty_since = None;
            return;
        }
        let now = Instant::now();
        let since = *self.dirty_since.get_or_insert(now);
        if save_due(Some(since), now) {
            self.persist();
        } else {
            ctx.request_repaint_after(SAVE_DELAY.saturating_sub(now.saturating_duration_since(since)));
        }
    }

    fn apply_preset(&mut self, label: &str) {
        if presets::apply_preset(label, &mut self.form, &self.sink) {
            self.temp_text = temp_text_for(self.form.oven_temp);
        }
    }

    fn start_timer(&mut self) {
        let secs = self.timer.start_for(&self.form.oven_time);
        self.last_tick = Some(Instant::now());
        self.timer_banner = None;
        self.sink
            .record(MetricEvent::now("timer_start").with("seconds", secs));
    }

    fn stop_timer(&mut self) {
        self.timer.stop();
        self.last_tick = None;
    }

    fn advance_timer(&mut self) {
        let Some(mut last) = self.last_tick else {
            return;
        };
        while self.timer.is_running() && last.elapsed() >= Duration::from_secs(1) {
            last += Duration::from_secs(1);
            match self.timer.tick() {
                TimerEvent::Halfway { .. } => {
                    self.timer_banner = Some(self.tr.t(keys::TIMER_HALFWAY).to_string())
                }
                TimerEvent::Finished => {
                    self.timer_banner = Some(self.tr.t(keys::TIMER_DONE).to_string())
                }
                TimerEvent::Running { .. } | TimerEvent::Idle => {}
            }
        }
        self.last_tick = self.timer.is_running().then_some(last);
    }

    fn save_card(&mut self, text: &str) {
        let Some(path) = FileDialog::new()
            .set_file_name("fryflip.txt")
            .add_filter("Text", &["txt"])
            .save_file()
        else {
            return;
        };
        self.status = Some(match fs::write(&path, text) {
            Ok(()) => path.display().to_string(),
            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
    }

    fn ui_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(
                egui::RichText::new(self.tr.t(keys::APP_TITLE))
                    .color(BRAND_GREEN)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let current = self
                    .lang_override
                    .clone()
                    .unwrap_or_else(|| self.config.language.clone());
                let mut lang = current.clone();
                egui::ComboBox::from_id_source("lang")
                    .selected_text(lang.clone())
                    .show_ui(ui, |ui| {
                        for code in ["auto", "en", "ko"] {
                            ui.selectable_value(&mut lang, code.to_string(), code);
                        }
                    });
                if lang != current {
                    self.set_language(&lang);
                }
            });
        });
    }

    fn ui_presets(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            let mut clicked = None;
            for p in PRESETS.iter() {
                if ui.button(p.label).clicked() {
                    clicked = Some(p.label);
                }
            }
            if let Some(label) = clicked {
                self.apply_preset(label);
            }
        });
    }

    fn ui_form(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label(self.tr.t(keys::LABEL_UNIT));
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut self.form.temp_unit, TemperatureUnit::Fahrenheit, "°F");
                    ui.selectable_value(&mut self.form.temp_unit, TemperatureUnit::Celsius, "°C");
                });
                ui.end_row();

                ui.label(self.tr.t(keys::LABEL_OVEN_TEMP));
                if ui.text_edit_singleline(&mut self.temp_text).changed() {
                    self.form.set_temp_text(&self.temp_text);
                }
                ui.end_row();

                ui.label(self.tr.t(keys::LABEL_OVEN_TIME));
                ui.add(egui::TextEdit::singleline(&mut self.form.oven_time).hint_text("25, 1:15, 1h15m"));
                ui.end_row();

                ui.label(self.tr.t(keys::LABEL_DONENESS));
                let tr = &self.tr;
                egui::ComboBox::from_id_source("doneness")
                    .selected_text(tr.t(doneness_key(self.form.doneness)))
                    .show_ui(ui, |ui| {
                        for d in Doneness::ALL {
                            ui.selectable_value(&mut self.form.doneness, d, tr.t(doneness_key(d)));
                        }
                    });
                ui.end_row();

                ui.label(self.tr.t(keys::LABEL_THICKNESS));
                egui::ComboBox::from_id_source("thickness")
                    .selected_text(tr.t(thickness_key(self.form.thickness)))
                    .show_ui(ui, |ui| {
                        for t in Thickness::ALL {
                            ui.selectable_value(&mut self.form.thickness, t, tr.t(thickness_key(t)));
                        }
                    });
                ui.end_row();
            });
        ui.checkbox(&mut self.form.convection_recipe, self.tr.t(keys::LABEL_CONVECTION));
        if ui.button(self.tr.t(keys::LABEL_RESET)).clicked() {
            self.form.reset();
            self.temp_text = temp_text_for(self.form.oven_temp);
        }
    }

    fn ui_result(&mut self, ui: &mut egui::Ui, result: &ConversionResult) {
        egui::Frame::group(ui.style())
            .fill(PANEL_GREEN)
            .show(ui, |ui| {
                ui.label(egui::RichText::new(self.tr.t(keys::CARD_TITLE)).strong());
                ui.label(
                    egui::RichText::new(format!(
                        "{}   {}",
                        result.temp_display,
                        format_minutes(result.minutes)
                    ))
                    .size(28.0)
                    .color(BRAND_GREEN),
                );
                ui.label(self.tr.t(keys::CARD_METHOD_TEXT));
                for note in &result.notes {
                    ui.add(egui::Label::new(egui::RichText::new(note).small()).wrap(true));
                }
            });

        let card_text = card::render_card(&self.form, result, &self.tr);
        ui.horizontal(|ui| {
            if ui.button(self.tr.t(keys::LABEL_COPY_CARD)).clicked() {
                ui.ctx().output_mut(|o| o.copied_text = card_text.clone());
            }
            if ui.button(self.tr.t(keys::LABEL_SAVE_CARD)).clicked() {
                self.save_card(&card_text);
            }
            if self.timer.is_running() {
                ui.label(egui::RichText::new(self.timer.display()).monospace().strong());
                if ui.button(self.tr.t(keys::TIMER_STOP)).clicked() {
                    self.stop_timer();
                }
            } else if ui.button(self.tr.t(keys::TIMER_START)).clicked() {
                self.start_timer();
            }
        });
        if let Some(banner) = &self.timer_banner {
            ui.colored_label(BRAND_GREEN, banner);
        }
        if let Some(status) = &self.status {
            ui.small(status);
        }
    }

    fn ui_explainer(&self, ui: &mut egui::Ui) {
        ui.separator();
        ui.add(
            egui::Label::new(
                egui::RichText::new(card::how_it_works(self.form.temp_unit, &self.tr)).small(),
            )
            .wrap(true),
        );
        ui.add(egui::Label::new(egui::RichText::new(self.tr.t(keys::CARD_SAFETY)).small()).wrap(true));
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.advance_timer();
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui_header(ui);
            ui.separator();
            self.ui_presets(ui);
            ui.add_space(8.0);
            self.ui_form(ui);
            ui.add_space(8.0);
            let result = self.form.convert();
            self.ui_result(ui, &result);
            self.ui_explainer(ui);
        });
        self.persist_if_settled(ctx);
        if self.timer.is_running() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}

impl Drop for GuiApp {
    fn drop(&mut self) {
        // 창을 닫기 직전의 입력이 아직 저장 대기 중일 수 있다
        if self.form != self.saved_form {
            self.persist();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_text_round_trips_whole_degrees() {
        assert_eq!(temp_text_for(Some(400.0)), "400");
        assert_eq!(temp_text_for(Some(204.0)), "204");
        assert_eq!(temp_text_for(None), "");
    }

    #[test]
    fn every_option_has_a_label() {
        let tr = i18n::Translator::new(i18n::Language::En);
        for d in Doneness::ALL {
            assert_ne!(tr.t(doneness_key(d)), "[missing translation]");
        }
        for t in Thickness::ALL {
            assert_ne!(tr.t(thickness_key(t)), "[missing translation]");
        }
    }

    #[test]
    fn saves_wait_for_typing_to_settle() {
        let start = Instant::now();
        assert!(!save_due(None, start));
        assert!(!save_due(Some(start), start));
        assert!(!save_due(Some(start), start + Duration::from_millis(400)));
        assert!(save_due(Some(start), start + SAVE_DELAY));
        // 시계가 거꾸로 가도 저장하지 않는다
        assert!(!save_due(Some(start + SAVE_DELAY), start));
    }

    #[test]
    fn lang_flag_is_not_written_into_config() {
        let app = GuiApp::new(config::Config::default(), Some("ko".into()));
        assert_eq!(app.tr.language(), i18n::Language::Ko);
        assert_eq!(app.config.language, "auto");
        assert_eq!(app.lang_override.as_deref(), Some("ko"));
        assert!(app.dirty_since.is_none());
    }

    #[test]
    fn saved_language_applies_without_a_flag() {
        let cfg = config::Config {
            language: "ko".into(),
            ..config::Config::default()
        };
        let app = GuiApp::new(cfg, None);
        assert_eq!(app.tr.language(), i18n::Language::Ko);
    }
}
