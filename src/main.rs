use anyhow::Context;
use clap::Parser;
use colored::*;
use std::io::Read;

mod args;

use args::Args;
use pose_direction::config::AppConfig;
use pose_direction::registry::Registry;
use pose_direction::types::{Classification, LandmarkFrame};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let registry = Registry::with_builtin();

    if args.list {
        println!("Registered Classifiers:");
        println!("{:<6} | {:<32} | {:<24}", "Id", "Display Name", "Outputs");
        println!("{}", "-".repeat(68));
        for spec in registry.specs() {
            println!(
                "{:<6} | {:<32} | {}",
                spec.id,
                spec.display_name,
                spec.output_names.join(", ")
            );
        }
        return Ok(());
    }

    // 0. Load Config
    let config = AppConfig::load()?;

    // 1. Pick the classifier
    let strategy = resolve_strategy(args.strategy, &config.defaults.strategy);
    let pipeline = registry
        .build(&strategy)
        .ok_or_else(|| anyhow::anyhow!("Unknown strategy '{}'. Try --list.", strategy))?;
    println!("Active Classifier: {}", pipeline.name());

    // 2. Read and parse the frame
    let raw = read_input(args.file.as_deref())?;
    let frame = LandmarkFrame::from_json_str(&raw)?;

    // 3. Classify
    let result = pipeline.classify(&frame);

    if args.json || config.output.json {
        // spec lookup cannot fail here: build() above found the same id
        if let Some(spec) = registry.spec(&strategy) {
            let mut obj = serde_json::Map::new();
            obj.insert(spec.output_names[0].to_string(), result.label().into());
            obj.insert(spec.output_names[1].to_string(), result.code().into());
            println!("{}", serde_json::Value::Object(obj));
        }
    } else {
        print_result(result, config.output.color);
    }

    Ok(())
}

fn resolve_strategy(cli: Option<String>, config_default: &str) -> String {
    cli.unwrap_or_else(|| config_default.to_string())
}

fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("Failed to read {}", p)),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn print_result(result: Classification, color: bool) {
    let line = format!("{} (code {})", result.label(), result.code());
    if !color {
        println!("{}", line);
        return;
    }
    let styled = match result {
        Classification::Forward => line.green(),
        Classification::Left | Classification::Right => line.cyan(),
        Classification::MissingKeypoints | Classification::AngleTooSmall => line.yellow(),
    };
    println!("{}", styled);
}
