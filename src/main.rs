use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use xist_ai_lib::{init_logging, AppConfig, ConfigStore, DetectionEngine};

fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}

/// First argument that is neither a flag nor a flag's value
fn positional(args: &[String]) -> Option<String> {
    const VALUE_FLAGS: &[&str] = &["--text", "--label", "--config", "--out"];
    let mut skip_next = false;
    for arg in args.iter().skip(1) {
        if skip_next {
            skip_next = false;
            continue;
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            skip_next = true;
            continue;
        }
        if arg == "-" || !arg.starts_with("--") {
            return Some(arg.clone());
        }
    }
    None
}

fn load_config(args: &[String]) -> Result<AppConfig> {
    if let Some(path) = parse_arg_value(args, "--config") {
        return ConfigStore::load_from_path(&PathBuf::from(&path))
            .with_context(|| format!("loading config from {path}"));
    }
    match ConfigStore::default_config_dir() {
        Some(dir) => ConfigStore::new(dir).load().context("loading default config"),
        None => Ok(AppConfig::default()),
    }
}

fn read_content(args: &[String]) -> Result<String> {
    if let Some(text) = parse_arg_value(args, "--text") {
        return Ok(text);
    }
    match positional(args).as_deref() {
        Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading content from stdin")?;
            Ok(buf)
        }
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {path}")),
        None => bail!("no content given: pass a file path, `-` for stdin, or --text"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || has_flag(&args, "--help") {
        eprintln!(
            "Usage:\n  xistAI <path|-> [--text <content>] [--label <name>] [--config <json_path>] [--out <json_path>]\n\nNotes:\n  - `-` reads the content from stdin.\n  - Logging honours RUST_LOG; set XIST_DISABLE_FILE_LOG=1 to skip the log file."
        );
        return Ok(());
    }

    let config = load_config(&args)?;
    init_logging(&config.logging);

    let content = read_content(&args)?;
    let label = parse_arg_value(&args, "--label").unwrap_or_else(|| "User".to_string());

    let engine = Arc::new(DetectionEngine::new(config.engine).context("building detection engine")?);
    let result = engine.analyze_concurrent(&content, &label).await;

    let json = serde_json::to_string_pretty(&result).context("serializing analysis result")?;
    match parse_arg_value(&args, "--out") {
        Some(out) => {
            std::fs::write(&out, json).with_context(|| format!("writing {out}"))?;
            info!(path = %out, "result.written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
