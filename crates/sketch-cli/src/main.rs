use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;
use sketch_cli::{logging, run_delegate, run_errors, run_schema, SketchConfig};
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("sketchbook")
        .version(sketch_cli::VERSION)
        .about("Run the delegation, error metadata and schema sketches")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("TOML file overriding the sketch inputs"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print one JSON document per sketch"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .help("Tracing filter, overrides RUST_LOG"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON on stderr"),
        )
        .subcommand(Command::new("delegate").about("Read names through a shared template"))
        .subcommand(Command::new("errors").about("Build errors carrying model/field metadata"))
        .subcommand(Command::new("schema").about("Show the Book extension and resolve its title"))
        .subcommand(Command::new("all").about("Run every sketch (default)"))
}

fn emit<T: Serialize>(json: bool, report: &T, lines: Vec<String>) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(report).context("failed to serialize report")?);
    } else {
        for line in lines {
            println!("{line}");
        }
    }
    Ok(())
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    logging::init(
        matches.get_one::<String>("log-level").map(String::as_str),
        matches.get_flag("log-json"),
    )?;

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => SketchConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SketchConfig::default(),
    };
    let json = matches.get_flag("json");

    let sketch = matches.subcommand_name().unwrap_or("all");
    tracing::debug!(sketch, json, "Running sketch");

    if matches!(sketch, "delegate" | "all") {
        let report = run_delegate(&config).context("delegation sketch failed")?;
        emit(json, &report, report.lines())?;
    }
    if matches!(sketch, "errors" | "all") {
        let report = run_errors(&config);
        emit(json, &report, report.lines())?;
    }
    if matches!(sketch, "schema" | "all") {
        let report = run_schema().context("schema sketch failed")?;
        emit(json, &report, report.lines())?;
    }
    Ok(())
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
