use clap::{Parser, Subcommand};
use fryflip::{
    app,
    app::AppError,
    card, config,
    conversion::{self, ConversionInput, Doneness, Thickness},
    form::ConversionForm,
    i18n::{self, Translator},
    logging,
    metrics::{MetricEvent, MetricsSink, TracingSink},
    presets, ui_cli,
    units::TemperatureUnit,
};

#[derive(Parser)]
#[command(name = "fryflip_cli")]
#[command(author, version, about = "Convert oven recipes to air-fryer settings")]
struct Cli {
    /// UI language (auto, en, ko)
    #[arg(short = 'L', long, global = true, default_value = "auto")]
    lang: String,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one oven recipe and print the air-fryer settings
    Convert {
        /// Oven temperature
        #[arg(short, long)]
        temp: f64,

        /// Temperature unit (F or C)
        #[arg(short, long, default_value = "F")]
        unit: TemperatureUnit,

        /// Oven time, e.g. "25", "1:15" or "1h15m"
        #[arg(long, default_value = "25")]
        time: String,

        /// The recipe already assumes a convection/fan oven
        #[arg(short, long)]
        convection: bool,

        /// lighter, standard or darker
        #[arg(short, long, default_value = "standard")]
        doneness: Doneness,

        /// thin, normal or thick
        #[arg(long, default_value = "normal")]
        thickness: Thickness,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the built-in presets
    Presets {
        /// Show temperatures in this unit
        #[arg(short, long, default_value = "F")]
        unit: TemperatureUnit,
    },

    /// Convert a built-in preset
    Preset {
        /// Preset name, e.g. fries
        name: String,

        /// Temperature unit (F or C)
        #[arg(short, long, default_value = "F")]
        unit: TemperatureUnit,
    },

    /// Run a countdown sized from an oven time
    Timer {
        /// Oven time, e.g. "25", "1:15" or "1h15m"
        time: String,
    },

    /// Print the result card for the saved (or default) form
    Card,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    let mut cfg = match config::load_or_default() {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{err}");
            config::Config::default()
        }
    };
    logging::init(cli.verbose, &cfg.log_level);

    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(lang, cfg.locale_dir.as_deref());
    let sink = TracingSink;

    if let Err(err) = try_run(cli.command, &mut cfg, &tr, &sink) {
        eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(
    command: Option<Commands>,
    cfg: &mut config::Config,
    tr: &Translator,
    sink: &dyn MetricsSink,
) -> Result<(), AppError> {
    match command {
        None => app::run(cfg, tr, sink),
        Some(Commands::Convert {
            temp,
            unit,
            time,
            convection,
            doneness,
            thickness,
            json,
        }) => {
            let input = ConversionInput {
                oven_temp: temp,
                temp_unit: unit,
                oven_minutes: conversion::parse_time(&time),
                convection_recipe: convection,
                doneness,
                thickness,
            };
            let result = conversion::convert_to_air_fryer(&input);
            sink.record(
                MetricEvent::now("convert")
                    .with("unit", unit)
                    .with("minutes", result.minutes),
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let form = ConversionForm {
                    temp_unit: unit,
                    oven_temp: Some(temp),
                    oven_time: time,
                    convection_recipe: convection,
                    doneness,
                    thickness,
                };
                println!("{}", card::render_card(&form, &result, tr));
            }
            Ok(())
        }
        Some(Commands::Presets { unit }) => {
            ui_cli::print_presets(unit);
            Ok(())
        }
        Some(Commands::Preset { name, unit }) => {
            let mut form = ConversionForm {
                temp_unit: unit,
                ..ConversionForm::default()
            };
            if !presets::apply_preset(&name, &mut form, sink) {
                return Err(AppError::UnknownPreset(name));
            }
            let result = form.convert();
            println!("{}", card::render_card(&form, &result, tr));
            Ok(())
        }
        Some(Commands::Timer { time }) => ui_cli::run_countdown(tr, &time, sink),
        Some(Commands::Card) => {
            let form = cfg.initial_form();
            println!("{}", card::render_card(&form, &form.convert(), tr));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fryflip::i18n::Language;
    use fryflip::metrics::MemorySink;

    #[test]
    fn card_subcommand_parses() {
        let cli = Cli::try_parse_from(["fryflip_cli", "card"]).expect("parse");
        assert!(matches!(cli.command, Some(Commands::Card)));
        assert_eq!(cli.lang, "auto");
    }

    #[test]
    fn convert_accepts_unit_letters() {
        let cli = Cli::try_parse_from(["fryflip_cli", "convert", "--temp", "200", "--unit", "C"])
            .expect("parse");
        match cli.command {
            Some(Commands::Convert { temp, unit, .. }) => {
                assert_eq!(temp, 200.0);
                assert_eq!(unit, TemperatureUnit::Celsius);
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn card_runs_without_touching_metrics() {
        let mut cfg = config::Config::default();
        let tr = Translator::new(Language::En);
        let sink = MemorySink::default();
        try_run(Some(Commands::Card), &mut cfg, &tr, &sink).expect("card");
        assert!(sink.names().is_empty());
    }
}
