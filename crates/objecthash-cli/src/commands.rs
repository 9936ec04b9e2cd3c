use std::io::Read;

use anyhow::{bail, Context};
use colored::Colorize;
use objecthash_core::{
    canonicalize, digest_from_hex, digest_with, redact_path, redaction_placeholder, salt,
    split_path, unsalt, HashOptions,
};
use objecthash_types::Value;
use serde_json::json;
use tracing::debug;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let options = if cli.no_normalize { HashOptions::raw() } else { HashOptions::default() };
    let format = cli.format;
    match cli.command {
        Command::Hash(args) => cmd_hash(args, &options, &format),
        Command::Float(args) => cmd_float(args, &format),
        Command::Placeholder(args) => cmd_placeholder(args, &format),
        Command::Redact(args) => cmd_redact(args, &options),
        Command::Verify(args) => cmd_verify(args, &options, &format),
        Command::Salt(args) => {
            let value = load_value(args.file.as_deref())?;
            print_value(&salt(&value, &mut rand::thread_rng()))
        }
        Command::Unsalt(args) => {
            let value = load_value(args.file.as_deref())?;
            print_value(&unsalt(&value)?)
        }
    }
}

fn cmd_hash(args: InputArgs, options: &HashOptions, format: &OutputFormat) -> anyhow::Result<()> {
    let value = load_value(args.file.as_deref())?;
    let digest = digest_with(&value, options)?;
    match format {
        OutputFormat::Text => println!("{digest}"),
        OutputFormat::Json => println!("{}", json!({ "digest": digest })),
    }
    Ok(())
}

fn cmd_float(args: FloatArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let form = canonicalize(args.value)?;
    match format {
        OutputFormat::Text => println!("{form}"),
        OutputFormat::Json => println!("{}", json!({ "value": args.value, "canonical": form })),
    }
    Ok(())
}

fn cmd_placeholder(args: PlaceholderArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let digest = digest_from_hex(&args.digest)?;
    let placeholder = redaction_placeholder(&digest);
    match format {
        OutputFormat::Text => {
            if let Value::String(text) = &placeholder {
                println!("{text}");
            }
        }
        OutputFormat::Json => println!("{}", placeholder.to_json()),
    }
    Ok(())
}

fn cmd_redact(args: RedactArgs, options: &HashOptions) -> anyhow::Result<()> {
    let value = load_value(args.file.as_deref())?;
    let redacted = redact_document(&value, &args.paths, options)?;
    print_value(&redacted)
}

fn cmd_verify(args: VerifyArgs, options: &HashOptions, format: &OutputFormat) -> anyhow::Result<()> {
    let value = load_value(args.file.as_deref())?;
    let expected = digest_from_hex(&args.expect)?;
    let actual = digest_with(&value, options)?;
    let matches = actual == expected;
    match format {
        OutputFormat::Text => {
            if matches {
                println!("{} Digest verified", "✓".green().bold());
                println!("  Digest: {}", actual.to_hex().yellow());
            } else {
                println!("{} Digest mismatch", "✗".red().bold());
                println!("  Expected: {}", expected.to_hex().yellow());
                println!("  Actual:   {}", actual.to_hex().yellow());
            }
        }
        OutputFormat::Json => println!(
            "{}",
            json!({ "verified": matches, "expected": expected, "actual": actual })
        ),
    }
    if !matches {
        bail!("digest mismatch");
    }
    Ok(())
}

/// Redact every path in turn. Each redaction leaves the root digest intact.
fn redact_document(value: &Value, paths: &[String], options: &HashOptions) -> anyhow::Result<Value> {
    let mut current = value.clone();
    for path in paths {
        current = redact_path(&current, &split_path(path), options)
            .with_context(|| format!("cannot redact `{path}`"))?;
        debug!(path = %path, "redacted path");
    }
    Ok(current)
}

fn read_input(file: Option<&str>) -> anyhow::Result<String> {
    match file {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("cannot read {path}"))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read standard input")?;
            Ok(buf)
        }
    }
}

fn load_value(file: Option<&str>) -> anyhow::Result<Value> {
    let text = read_input(file)?;
    parse_value(&text)
}

fn parse_value(text: &str) -> anyhow::Result<Value> {
    let json: serde_json::Value = serde_json::from_str(text).context("input is not valid JSON")?;
    Ok(Value::from_json(&json))
}

fn print_value(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
