//! # armory
//!
//! A CLI tool that renders a game item catalog into categorized tables.
//!
//! ## Overview
//!
//! armory is built on top of armorylib. It loads the catalog once, builds one
//! table per requested item type, and appends each table to a single output
//! document: an HTML page (default), aligned terminal text, or JSON.
//!
//! ## Usage
//!
//! ```bash
//! # One-handed weapons from ./items.json as an HTML page
//! armory onehanded > weapons.html
//!
//! # Several tables in one page, from a served catalog
//! armory show bow crossbow thrown --catalog https://example.org/items.json
//!
//! # Terminal output
//! armory shield --output text
//!
//! # List the recognized types
//! armory types
//! ```

mod render;

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use armorylib::{ItemType, TableOptions, DEFAULT_CATALOG};
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::info;

use render::{OutputFormat, Presenter};

/// Add the arguments shared by the root command and `show`
fn show_args(cmd: Command, required: bool) -> Command {
    cmd.arg(
        Arg::new("type")
            .value_name("TYPE")
            .action(ArgAction::Append)
            .required(required)
            .value_parser(|s: &str| s.parse::<ItemType>())
            .help("Item type(s) to tabulate, by short name or identifier (see `armory types`)"),
    )
}

/// Build the clap Command structure
fn build_command() -> Command {
    let root = Command::new("armory")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Render a game item catalog into categorized tables")
        .subcommand_negates_reqs(true)
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .global(true)
                .default_value(DEFAULT_CATALOG)
                .help("Catalog file path or http(s) URL"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .global(true)
                .default_value("html")
                .value_parser(OutputFormat::NAMES)
                .help("Output format"),
        )
        .arg(
            Arg::new("out")
                .short('o')
                .long("out")
                .global(true)
                .value_name("FILE")
                .help("Write to FILE instead of stdout"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Log more (-v info, -vv debug)"),
        );

    show_args(root, true)
        .subcommand(show_args(
            Command::new("show").about("Tabulate item types (default command)"),
            true,
        ))
        .subcommand(Command::new("types").about("List the recognized item types"))
}

/// Extract the output format from matches
fn extract_format(matches: &ArgMatches) -> OutputFormat {
    matches
        .get_one::<String>("output")
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}

/// Extract the requested types from matches
fn extract_types(matches: &ArgMatches) -> Vec<ItemType> {
    matches
        .get_many::<ItemType>("type")
        .map(|v| v.copied().collect())
        .unwrap_or_default()
}

/// Build table options from matches
fn extract_options(matches: &ArgMatches) -> TableOptions {
    let location = matches
        .get_one::<String>("catalog")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_CATALOG);
    TableOptions::new()
        .catalog(location)
        .item_types(extract_types(matches))
}

/// Handler for the show command
fn show_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let options = extract_options(matches);
    let format = extract_format(matches);
    let to_terminal = matches.get_one::<String>("out").is_none();

    let mut presenter = Presenter::new(format, to_terminal && console::colors_enabled());
    let count = armorylib::render(&options, presenter.sink())
        .with_context(|| format!("could not load catalog from {}", options.source))?;
    info!("rendered {count} table(s)");

    Ok(presenter.finish()?)
}

/// Handler for the types command
fn types_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    if extract_format(matches) == OutputFormat::Json {
        let rows: Vec<serde_json::Value> = ItemType::ALL
            .iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.short_name(),
                    "identifier": t.identifier(),
                    "category": t.category(),
                })
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&rows)? + "\n");
    }

    let mut out = String::new();
    for t in ItemType::ALL {
        out.push_str(&format!(
            "{:<12}{:<26}{}\n",
            t.short_name(),
            t.identifier(),
            t.category()
        ));
    }
    Ok(out)
}

/// Write output to the chosen destination
fn write_output(output: &str, destination: Option<&String>) -> anyhow::Result<()> {
    match destination {
        Some(path) => fs::write(Path::new(path), output)
            .with_context(|| format!("could not write {path}"))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Set up env_logger; RUST_LOG overrides the -v level
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let (output, sub) = match matches.subcommand() {
        Some(("types", sub)) => (types_handler(sub)?, sub),
        Some(("show", sub)) => (show_handler(sub)?, sub),
        // Root command (no subcommand) is treated as show
        _ => (show_handler(matches)?, matches),
    };
    write_output(&output, sub.get_one::<String>("out"))
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
