use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::app::AppError;
use crate::card;
use crate::config::Config;
use crate::conversion::{format_minutes, Doneness, Thickness};
use crate::form::ConversionForm;
use crate::i18n::{keys, Translator};
use crate::metrics::{MetricEvent, MetricsSink};
use crate::presets::{self, PRESETS};
use crate::timer::{CookTimer, TimerEvent};
use crate::units::TemperatureUnit;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    Presets,
    Timer,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CONVERT));
    println!("{}", tr.t(keys::MAIN_MENU_PRESETS));
    println!("{}", tr.t(keys::MAIN_MENU_TIMER));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::Presets),
            "3" => return Ok(MenuChoice::Timer),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 레시피 입력을 받아 환산 결과를 출력한다. 엔터는 현재 값을 유지한다.
pub fn handle_convert(
    tr: &Translator,
    form: &mut ConversionForm,
    sink: &dyn MetricsSink,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONVERT_HEADING));
    let unit = read_line(tr.t(keys::PROMPT_UNIT))?;
    if !unit.trim().is_empty() {
        match unit.parse::<TemperatureUnit>() {
            Ok(u) => form.temp_unit = u,
            Err(e) => println!("{e}"),
        }
    }
    let temp = read_line(tr.t(keys::PROMPT_OVEN_TEMP))?;
    if !temp.trim().is_empty() {
        form.set_temp_text(&temp);
    }
    let time = read_line(tr.t(keys::PROMPT_OVEN_TIME))?;
    if !time.trim().is_empty() {
        form.oven_time = time.trim().to_string();
    }
    let conv = read_line(tr.t(keys::PROMPT_CONVECTION))?;
    match conv.trim().to_lowercase().as_str() {
        "y" | "yes" | "예" => form.convection_recipe = true,
        "n" | "no" | "아니오" => form.convection_recipe = false,
        _ => {}
    }
    let doneness = read_line(tr.t(keys::PROMPT_DONENESS))?;
    if !doneness.trim().is_empty() {
        form.doneness = doneness.parse::<Doneness>().unwrap_or(form.doneness);
    }
    let thickness = read_line(tr.t(keys::PROMPT_THICKNESS))?;
    if !thickness.trim().is_empty() {
        form.thickness = thickness.parse::<Thickness>().unwrap_or(form.thickness);
    }

    let result = form.convert();
    sink.record(
        MetricEvent::now("convert")
            .with("unit", form.temp_unit)
            .with("minutes", result.minutes),
    );
    println!();
    println!("{}", card::render_card(form, &result, tr));
    Ok(())
}

/// 프리셋 목록을 보여주고 선택한 프리셋을 폼에 적용한다.
pub fn handle_presets(
    tr: &Translator,
    form: &mut ConversionForm,
    sink: &dyn MetricsSink,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PRESETS_HEADING));
    print_presets(form.temp_unit);
    let name = read_line(tr.t(keys::PRESETS_PROMPT))?;
    if name.trim().is_empty() {
        return Ok(());
    }
    if !presets::apply_preset(&name, form, sink) {
        println!("{}", tr.t(keys::PRESETS_UNKNOWN));
        return Ok(());
    }
    let result = form.convert();
    println!("{}", card::summary_line(&result, tr));
    Ok(())
}

/// 프리셋 목록을 지정 단위로 출력한다.
pub fn print_presets(unit: TemperatureUnit) {
    for p in PRESETS.iter() {
        println!(
            "  {:<9} {:>4}°{}  {:>3} min  {:<8} {:<6} {}",
            p.label,
            p.oven_temp_in(unit),
            unit,
            p.oven_minutes,
            p.doneness.as_str(),
            p.thickness.as_str(),
            if p.convection_recipe { "convection" } else { "" }
        );
    }
}

/// 현재 폼의 오븐 시간 기준으로 타이머를 실행한다.
pub fn handle_timer(
    tr: &Translator,
    form: &ConversionForm,
    sink: &dyn MetricsSink,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::TIMER_HEADING));
    let result = form.convert();
    println!("{}", card::summary_line(&result, tr));
    run_countdown(tr, &form.oven_time, sink)
}

/// 1초마다 남은 시간을 갱신하며 카운트다운을 표시한다.
pub fn run_countdown(tr: &Translator, oven_time: &str, sink: &dyn MetricsSink) -> Result<(), AppError> {
    let mut timer = CookTimer::new();
    let secs = timer.start_for(oven_time);
    sink.record(MetricEvent::now("timer_start").with("seconds", secs));
    println!("{} {}", tr.t(keys::TIMER_START), format_minutes(secs.div_ceil(60)));
    loop {
        print!("\r{}   ", timer.display());
        io::stdout().flush()?;
        thread::sleep(Duration::from_secs(1));
        match timer.tick() {
            TimerEvent::Halfway { .. } => println!("\n{}", tr.t(keys::TIMER_HALFWAY)),
            TimerEvent::Finished | TimerEvent::Idle => {
                println!("\r0:00   \n{}", tr.t(keys::TIMER_DONE));
                break;
            }
            TimerEvent::Running { .. } => {}
        }
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} °{}", tr.t(keys::SETTINGS_CURRENT), cfg.temperature_unit);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    let unit = match sel.trim() {
        "1" => TemperatureUnit::Fahrenheit,
        "2" => TemperatureUnit::Celsius,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    };
    cfg.set_temperature_unit(unit);
    println!("{} °{}", tr.t(keys::SETTINGS_SAVED), cfg.temperature_unit);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    let n = io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    if n == 0 {
        return Err(AppError::Io(io::Error::from(io::ErrorKind::UnexpectedEof)));
    }
    Ok(buf)
}
