mod debug_report;

use omnialias::{Disposition, ExportFormat, MemoryStorage, Options, Session, suggest_verbose};
use serde::Serialize;
use serde_json::Value;
use std::io::{self, IsTerminal, Read};
use tracing_log::LogTracer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_ENV: &str = "OMNIALIAS_LOG";

fn main() {
    init_logging();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

struct CliConfig {
    input: String,
    aliases_file: Option<String>,
    inline_aliases: Vec<(String, String)>,
    options: Options,
    commit: bool,
    disposition: Disposition,
    export: Option<ExportFormat>,
    json: bool,
    color: bool,
}

fn run(config: CliConfig) -> omnialias::Result<()> {
    let storage = match &config.aliases_file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|err| omnialias::Error::Storage(format!("failed to read {path}: {err}")))?;
            let value: Value = serde_json::from_str(&text)?;
            MemoryStorage::with_value(&config.options.storage_key, value)
        }
        None => MemoryStorage::new(),
    };

    tracing::debug!(input = %config.input, commit = config.commit, json = config.json, "running");

    let json = config.json;
    let navigator = move |url: &str, disposition: Disposition| print_navigation(url, disposition, json);
    let mut session = Session::new(navigator, storage, config.options.clone());
    session.load()?;
    for (alias, template) in &config.inline_aliases {
        session.add_alias(alias, template)?;
    }

    if let Some(format) = config.export {
        let file = session.export(format)?;
        println!("{}", file.contents);
        return Ok(());
    }

    if config.commit {
        session.on_input_changed(&config.input);
        session.on_input_entered(&config.input, config.disposition);
        return Ok(());
    }

    let res = suggest_verbose(session.store(), &config.input, &config.options);
    if config.json {
        println!("{}", serde_json::to_string_pretty(&res.results)?);
    } else {
        debug_report::print_run(&res, config.color);
    }
    Ok(())
}

#[derive(Serialize)]
struct Navigation<'a> {
    url: &'a str,
    disposition: Disposition,
}

fn print_navigation(url: &str, disposition: Disposition, json: bool) {
    if !json {
        println!("{url}\t{disposition:?}");
        return;
    }
    match serde_json::to_string(&Navigation { url, disposition }) {
        Ok(line) => println!("{line}"),
        Err(err) => eprintln!("error: {err}"),
    }
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut aliases_file = None;
    let mut inline_aliases = Vec::new();
    let mut options = Options::default();
    let mut commit = false;
    let mut disposition = Disposition::CurrentTab;
    let mut export = None;
    let mut json = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("omnialias {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--commit" => commit = true,
            "--json" => json = true,
            "--aliases" => {
                let value = args.next().ok_or_else(|| "error: --aliases expects a file".to_string())?;
                aliases_file = Some(value);
            }
            "--alias" => {
                let value = args.next().ok_or_else(|| "error: --alias expects <name>=<template>".to_string())?;
                inline_aliases.push(parse_inline_alias(&value)?);
            }
            "--limit" => {
                let value = args.next().ok_or_else(|| "error: --limit expects a value".to_string())?;
                options.suggestion_limit = parse_limit(&value)?;
            }
            "--disposition" => {
                let value = args.next().ok_or_else(|| "error: --disposition expects a value".to_string())?;
                disposition = value.parse().map_err(|err| format!("error: {err}"))?;
            }
            "--export" => {
                let value = args.next().ok_or_else(|| "error: --export expects json or csv".to_string())?;
                export = Some(value.parse().map_err(|err| format!("error: {err}"))?);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--limit=") => {
                options.suggestion_limit = parse_limit(arg.trim_start_matches("--limit="))?;
            }
            _ if arg.starts_with("--alias=") => {
                inline_aliases.push(parse_inline_alias(arg.trim_start_matches("--alias="))?);
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None if export.is_some() => String::new(),
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() && export.is_none() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, aliases_file, inline_aliases, options, commit, disposition, export, json, color })
}

fn parse_inline_alias(value: &str) -> Result<(String, String), String> {
    value
        .split_once('=')
        .map(|(alias, template)| (alias.to_string(), template.to_string()))
        .ok_or_else(|| format!("error: invalid --alias '{value}' (expected <name>=<template>)"))
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value.parse().map_err(|_| format!("error: invalid --limit '{value}' (expected a positive integer)"))
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = fmt::layer().with_writer(io::stderr).with_target(false);
    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    // The library logs through `log`; bridge its records into the subscriber.
    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        let _ = LogTracer::init();
    }
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "omnialias {version}

Rank aliases against typed input and resolve committed input to a URL.

Usage:
  omnialias [OPTIONS] [--] <input...>
  omnialias [OPTIONS] --export <json|csv>

Options:
  --aliases <file>           JSON object mapping alias to URL template.
  --alias <name>=<template>  Add an alias (repeatable).
  --limit <n>                Number of suggestions to show. Default: {limit}
  --commit                   Resolve the input and print the final URL.
  --disposition <where>      current, foreground or background. Default: current
  --export <json|csv>        Print the alias table instead of resolving.
  --json                     Print suggestions (or the committed navigation) as JSON.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}=<filter>         Log filter directives, e.g. debug or omnialias=trace. Default: warn

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        limit = Options::default().suggestion_limit,
        log_env = LOG_ENV,
    )
}
