use anyhow::{Context, Result};
use blockwise_config::{Config, OutputFormat};
use blockwise_engine::parsing::{ParsedDoc, parse_document_with, snapshot};
use std::{env, path::PathBuf, process};
use xi_rope::Rope;

#[derive(Debug, PartialEq, Eq)]
struct Args {
    path: PathBuf,
    json: bool,
}

/// `blockwise [--json] <file.md>`; `None` on anything else.
fn parse_args(args: &[String]) -> Option<Args> {
    let mut json = false;
    let mut path = None;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ if arg.starts_with("--") => return None,
            _ if path.is_none() => path = Some(PathBuf::from(arg)),
            _ => return None,
        }
    }
    Some(Args { path: path?, json })
}

fn render(doc: &ParsedDoc, format: OutputFormat, preview: Option<usize>) -> Result<String> {
    match format {
        OutputFormat::Outline => {
            Ok(snapshot::normalize_with_preview(&doc.root, preview).to_string())
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(doc)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("blockwise", String::as_str);

    let Some(cli) = parse_args(&args) else {
        eprintln!("Usage: {program} [--json] <file.md>");
        process::exit(1);
    };

    let config = match Config::load() {
        Ok(Some(config)) => {
            log::debug!("Loaded config from {}", Config::config_path().display());
            config
        }
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    let source = std::fs::read_to_string(&cli.path)
        .with_context(|| format!("Failed to read {}", cli.path.display()))?;
    let rope = Rope::from(source.as_str());
    let doc = parse_document_with(&rope, config.parse_options())
        .with_context(|| format!("Failed to parse {}", cli.path.display()))?;
    log::info!(
        "Parsed {} ({} lines, {} top-level blocks)",
        cli.path.display(),
        doc.line_count,
        doc.root.children.len()
    );

    print!("{}", render(&doc, format, config.output.preview())?);
    Ok(())
}
