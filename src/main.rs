use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use log::{info, warn};
use serde_json::{json, Value};

use zoo_enclosures::zoo::{
    self,
    adapter::{json_catalog, static_catalog::StaticCatalog},
    port::catalog::Catalog,
    Analysis,
};

const USAGE: &str = "\
usage: zoo-enclosures <SPECIES> <QUANTITY> [--catalog PATH] [--json]
       zoo-enclosures --stdin [--catalog PATH]

  --catalog PATH   load species and enclosures from a JSON catalog
  --json           print the result as a JSON document
  --stdin          answer one JSON request per line, e.g. {\"animal\": \"MACACO\", \"quantidade\": 2}";

#[derive(Debug, Default, PartialEq, Eq)]
struct Config {
    species: Option<String>,
    quantity: Option<String>,
    catalog: Option<PathBuf>,
    json: bool,
    stdin: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Config, String> {
    let mut config = Config::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--catalog" | "-c" => {
                let path = args.next().ok_or("--catalog requires a path")?;
                config.catalog = Some(PathBuf::from(path));
            }
            "--json" => config.json = true,
            "--stdin" => config.stdin = true,
            // Negative quantities are still positional arguments.
            flag if flag.starts_with("--") => return Err(format!("unknown argument: {flag}")),
            _ if config.species.is_none() => config.species = Some(arg.clone()),
            _ if config.quantity.is_none() => config.quantity = Some(arg.clone()),
            _ => return Err(format!("unexpected argument: {arg}")),
        }
    }

    if !config.stdin && config.quantity.is_none() {
        return Err("expected a species and a quantity".to_string());
    }

    Ok(config)
}

fn load_catalog(path: Option<&PathBuf>) -> anyhow::Result<StaticCatalog> {
    let Some(path) = path else {
        return Ok(StaticCatalog::default_zoo());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("while reading catalog {}", path.display()))?;
    let catalog = json_catalog::from_str(&text)
        .with_context(|| format!("while parsing catalog {}", path.display()))?;

    info!(
        "loaded catalog {} with {} enclosures",
        path.display(),
        catalog.list_enclosures().len()
    );
    Ok(catalog)
}

fn handle_line(catalog: &impl Catalog, line: &str) -> Value {
    match serde_json::from_str::<Value>(line) {
        Ok(request) => zoo::analyze_json(catalog, &request).to_json(),
        Err(e) => {
            warn!("invalid request {line:?}: {e}");
            json!({"erro": "invalid json"})
        }
    }
}

fn serve_stdin(catalog: &impl Catalog) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in io::stdin().lock().lines() {
        let line = line.context("while reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(out, "{}", handle_line(catalog, &line))?;
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log_panics::init();

    let config = match parse_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let catalog = match load_catalog(config.catalog.as_ref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::from(2);
        }
    };

    if config.stdin {
        return match serve_stdin(&catalog) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e:#}");
                ExitCode::from(2)
            }
        };
    }

    let species = config.species.unwrap_or_default();
    let quantity = config.quantity.unwrap_or_default();
    let analysis = zoo::analyze(&catalog, &species, &quantity);

    if config.json {
        println!("{}", analysis.to_json());
    } else {
        println!("{analysis}");
    }

    match analysis {
        Analysis::Viable(_) => ExitCode::SUCCESS,
        Analysis::Failed(_) => ExitCode::from(1),
    }
}
