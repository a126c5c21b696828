//! Sketch Judge - offline harness for the stroke classifier
//!
//! Emits exercise prompts and evaluates recorded stroke files the way the
//! drawing UI would: timing gate first, shape classifier second.

use sketch_judge::analysis::classifier::classify;
use sketch_judge::analysis::timing_gate::{evaluate_timing, GateVerdict};
use sketch_judge::app::cli::{Cli, Commands};
use sketch_judge::app::config::Config;
use sketch_judge::app::stroke_file::StrokeFile;
use sketch_judge::capture::types::ShapeLabel;
use sketch_judge::exercise::prompt::random_prompt;
use sketch_judge::exercise::session::{Evaluation, RejectReason};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse();

    // Initialize tracing (--verbose enables debug-level output)
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config
    let config = if let Some(path) = &cli.config {
        Config::load(path)?
    } else {
        Config::load_default()?
    };

    match cli.command {
        Commands::Prompt => run_prompt(&config)?,
        Commands::Evaluate {
            input,
            shape,
            elapsed,
        } => run_evaluate(&input, &shape, elapsed, &config)?,
        Commands::Init { force } => run_init(force, &config)?,
        Commands::Config => run_config(&config)?,
    }

    Ok(())
}

fn run_prompt(config: &Config) -> anyhow::Result<()> {
    let prompt = random_prompt();
    if config.output.json {
        println!("{}", serde_json::to_string_pretty(&prompt)?);
    } else {
        println!("{}", prompt.text);
    }
    Ok(())
}

fn run_evaluate(
    input: &PathBuf,
    shape: &str,
    elapsed_override: Option<f64>,
    config: &Config,
) -> anyhow::Result<()> {
    let expected: ShapeLabel = shape.parse()?;
    let file = StrokeFile::load(input, config.capture.max_points)?;

    // A recorder that lost the start timestamp reports no elapsed time;
    // treat it as zero so the gate fails closed.
    let elapsed = elapsed_override.or(file.elapsed_secs).unwrap_or_else(|| {
        warn!("no elapsed time recorded; treating as 0 (gate will reject)");
        0.0
    });

    let strokes = file.strokes();
    info!(
        input = %input.display(),
        shape = %expected,
        strokes = strokes.len(),
        elapsed_secs = elapsed,
        "evaluating stroke file"
    );

    let timing = evaluate_timing(elapsed);
    let shape_match = if timing.is_accept() {
        classify(&strokes, expected)
    } else {
        false
    };
    let evaluation = Evaluation { timing, shape_match };

    report(&evaluation, expected, config)?;
    Ok(())
}

fn report(evaluation: &Evaluation, expected: ShapeLabel, config: &Config) -> anyhow::Result<()> {
    if config.output.json {
        let verdict = serde_json::json!({
            "expected": expected,
            "timing_accepted": evaluation.timing == GateVerdict::Accept,
            "shape_match": evaluation.shape_match,
            "passed": evaluation.passed(),
        });
        println!("{}", serde_json::to_string_pretty(&verdict)?);
        return Ok(());
    }

    // The two fixed user-facing messages live here, at the caller, not in
    // the decision core.
    match evaluation.rejection() {
        None => println!("Passed: the drawing matches '{expected}'."),
        Some(RejectReason::TooFast) => {
            println!("Rejected: insufficient time for analysis. Try again.")
        }
        Some(RejectReason::ShapeMismatch) => {
            println!("Rejected: drawing incorrect or not achievable by a human. Try again.")
        }
    }
    Ok(())
}

fn run_init(force: bool, config: &Config) -> anyhow::Result<()> {
    let path = Config::default_path();
    if path.exists() && !force {
        warn!(path = %path.display(), "config already exists; use --force to overwrite");
        return Ok(());
    }
    config.save(&path)?;
    info!(path = %path.display(), "wrote configuration");
    Ok(())
}

fn run_config(config: &Config) -> anyhow::Result<()> {
    println!("{}", config.to_toml()?);
    Ok(())
}
