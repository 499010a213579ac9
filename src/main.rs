mod debug_report;

use gamepaste::{Catalog, CatalogError, Options, UnknownGamePolicy, detect_and_extract_verbose};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_ENV: &str = "GAMEPASTE_LOG";

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let catalog = match load_catalog(config.catalog.as_ref()) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let options = Options { unknown_games: config.unknown_games, ..Default::default() };
    let res = detect_and_extract_verbose(&config.input, catalog.games(), &options);

    if config.json {
        match serde_json::to_string_pretty(&res.suggestion) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: failed to serialize result: {err}");
                std::process::exit(1);
            }
        }
    } else {
        debug_report::print_run(&config.input, &catalog, &res, config.color);
    }
}

struct CliConfig {
    input: String,
    catalog: Option<PathBuf>,
    unknown_games: UnknownGamePolicy,
    json: bool,
    color: bool,
}

#[derive(Debug, thiserror::Error)]
enum LoadError {
    #[error("failed to read catalog {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("invalid catalog {path}: {source}")]
    Catalog { path: String, source: CatalogError },
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog, LoadError> {
    let Some(path) = path else {
        return Ok(Catalog::builtin());
    };
    let shown = path.display().to_string();
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io { path: shown.clone(), source })?;
    let catalog = Catalog::from_json(&json).map_err(|source| LoadError::Catalog { path: shown, source })?;
    tracing::debug!(games = catalog.len(), "catalog loaded");
    Ok(catalog)
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut catalog: Option<PathBuf> = None;
    let mut unknown_games = UnknownGamePolicy::Surface;
    let mut json = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("gamepaste {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--json" => json = true,
            "--suppress-unknown" => unknown_games = UnknownGamePolicy::Suppress,
            "--catalog" => {
                let value = args.next().ok_or_else(|| "error: --catalog expects a path".to_string())?;
                catalog = Some(PathBuf::from(value));
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--catalog=") => {
                catalog = Some(PathBuf::from(arg.trim_start_matches("--catalog=")));
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                input = Some(std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" "));
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, catalog, unknown_games, json, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "gamepaste {version}

Identify a daily puzzle result and read its score.

Usage:
  gamepaste [OPTIONS] [--] <text...>
  pbpaste | gamepaste [OPTIONS]

Options:
  --catalog <path>       JSON list of accepted games. Default: every
                         supported game.
  --suppress-unknown     Report no game when the detected one is not in the
                         catalog.
  --json                 Print the suggestion as JSON.
  --color                Force ANSI color output.
  --no-color             Disable ANSI color output.
  -h, --help             Show this help message.
  -V, --version          Print version information.

Environment:
  {log_env}          Log filter (tracing EnvFilter syntax). Default: warn

Exit codes:
  0  Success.
  1  Internal error (catalog could not be loaded).
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        log_env = LOG_ENV,
    )
}
