//! irobo CLI entry point.

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use irobo_runtime::{Repl, parse_map_file, parse_script_file, to_json, to_json_pretty};
use irobo_translations::{Locale, tables};
use serde::Serialize;

/// How a file should be parsed when its extension does not decide it.
#[derive(Clone, Copy, PartialEq, Eq)]
enum InputKind {
    Script,
    Map,
}

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    locale: Locale,
    force: Option<InputKind>,
    compact: bool,
    show_help: bool,
    show_version: bool,
    show_words: bool,
    show_languages: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-c" | "--compact" => config.compact = true,
            "--script" => config.force = Some(InputKind::Script),
            "--map" => config.force = Some(InputKind::Map),
            "--words" => config.show_words = true,
            "--languages" => config.show_languages = true,
            "-l" | "--language" => {
                i += 1;
                if i >= args.len() {
                    return Err("--language requires a value".into());
                }
                config.locale = args[i].parse()?;
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("irobo {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if config.show_languages {
        for locale in Locale::ALL {
            println!("{locale}");
        }
        return Ok(());
    }

    if config.show_words {
        print_words(config.locale);
        return Ok(());
    }

    // Interactive REPL when no files are given
    if config.files.is_empty() {
        Repl::with_locale(config.locale)?.run()?;
        return Ok(());
    }

    for path in &config.files {
        let json = match input_kind(path, config.force)? {
            InputKind::Script => render(&parse_script_file(path, config.locale)?, config.compact)?,
            InputKind::Map => render(&parse_map_file(path)?, config.compact)?,
        };
        println!("{json}");
    }

    Ok(())
}

fn input_kind(
    path: &Path,
    force: Option<InputKind>,
) -> Result<InputKind, Box<dyn std::error::Error>> {
    if let Some(kind) = force {
        return Ok(kind);
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some("irobo") => Ok(InputKind::Script),
        Some("map") => Ok(InputKind::Map),
        _ => Err(format!(
            "cannot tell whether {} is a script or a map; pass --script or --map",
            path.display()
        )
        .into()),
    }
}

fn render<T: Serialize>(value: &T, compact: bool) -> irobo_foundation::Result<String> {
    if compact {
        to_json(value)
    } else {
        to_json_pretty(value)
    }
}

fn print_words(locale: Locale) {
    println!(
        "\x1b[1mKeywords:\x1b[0m {}",
        tables::localized_keywords(locale).join(", ")
    );
    println!(
        "\x1b[1mAtoms:\x1b[0m {}",
        tables::localized_atoms(locale).join(", ")
    );
    println!(
        "\x1b[1mBuiltins:\x1b[0m {}",
        tables::localized_builtins(locale).join(", ")
    );
}

fn print_help() {
    println!(
        "\x1b[1mirobo\x1b[0m - Parser for the irobo robot scripting language

\x1b[1mUSAGE:\x1b[0m
    irobo [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Script (.irobo) or map (.map) files to parse

\x1b[1mOPTIONS:\x1b[0m
    -h, --help            Print help information
    -V, --version         Print version information
    -l, --language CODE   Keyword language: en, fy, or nl (default: en)
    -c, --compact         Print compact JSON instead of pretty
    --script              Treat every file as a script
    --map                 Treat every file as a map
    --words               List the vocabulary for the chosen language
    --languages           List supported language codes

\x1b[1mEXAMPLES:\x1b[0m
    irobo                       Start the interactive REPL
    irobo walk.irobo            Parse a script, print its JSON tree
    irobo -l nl loop.irobo      Parse with Dutch keywords
    irobo world.map             Parse a map file
    irobo -l fy --words         Show the West Frisian vocabulary

Scripts are decoded as UTF-16, maps as ASCII. Output goes to stdout;
errors go to stderr with their 1-based line:column position."
    );
}
