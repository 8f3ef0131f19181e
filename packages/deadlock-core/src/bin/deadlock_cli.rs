//! Deadlock Detection CLI
//!
//! Loads a scenario, reports the detection result, applies recovery actions
//! in order (redetecting after each) and prints the final system summary.
//!
//! # Usage
//!
//! ```bash
//! # Built-in example, terminate P0
//! cargo run --bin deadlock-cli -- --preset classic-ring --action terminate:0
//!
//! # Scenario file under the multiple-instance model, JSON output
//! cargo run --bin deadlock-cli -- --scenario ring.yaml --model multiple --format json
//! ```
//!
//! Exit codes: 0 safe, 1 deadlocked, 2 error.

use clap::{Parser, ValueEnum};
use deadlock_core::config::parse_model;
use deadlock_core::features::resource_state::StateSnapshot;
use deadlock_core::{
    DeadlockResult, DetectionSession, Preset, ProcessId, RecoveryOutcome, Report, ScenarioConfig,
};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "deadlock-cli")]
#[command(about = "Wait-for graph deadlock detection and recovery", long_about = None)]
struct Cli {
    /// Scenario YAML file (schema v1)
    #[arg(short, long, conflicts_with = "preset")]
    scenario: Option<PathBuf>,

    /// Built-in scenario (classic-ring, multi-instance-safe)
    #[arg(short, long)]
    preset: Option<String>,

    /// Override the scenario's resource model (single, multiple)
    #[arg(short, long)]
    model: Option<String>,

    /// Recovery action, repeatable, applied in order (terminate:N, preempt:N)
    #[arg(short = 'a', long = "action", value_parser = parse_action)]
    actions: Vec<Action>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Verbose logging on stderr
    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Terminate(ProcessId),
    Preempt(ProcessId),
}

fn parse_action(raw: &str) -> Result<Action, String> {
    let (verb, pid) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected <terminate|preempt>:<pid>, got '{}'", raw))?;
    let pid = pid
        .trim()
        .trim_start_matches(['P', 'p'])
        .parse::<usize>()
        .map(ProcessId::new)
        .map_err(|e| format!("invalid process id in '{}': {}", raw, e))?;
    match verb.trim().to_lowercase().as_str() {
        "terminate" | "t" => Ok(Action::Terminate(pid)),
        "preempt" | "p" => Ok(Action::Preempt(pid)),
        other => Err(format!("unknown action '{}'", other)),
    }
}

/// JSON document for `--format json`
#[derive(Serialize)]
struct Output<'a> {
    initial: DeadlockResult,
    actions: Vec<RecoveryOutcome>,
    result: &'a DeadlockResult,
    state: StateSnapshot,
    report: Report,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(cli) {
        Ok(true) => ExitCode::from(1),
        Ok(false) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns whether the final state is deadlocked
fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let mut config = match (&cli.scenario, &cli.preset) {
        (Some(path), _) => ScenarioConfig::from_yaml(path)?,
        (None, Some(name)) => Preset::from_str(name)?.scenario(),
        (None, None) => Preset::default().scenario(),
    };
    if let Some(name) = &cli.model {
        config = config.with_model(parse_model(name)?);
    }

    let mut session = DetectionSession::from_config(&config)?;
    let initial = session.latest().clone();

    let text = matches!(cli.format, Format::Text);
    if text {
        println!("Model: {}", session.model());
        println!("{}", initial.headline());
    }

    let mut applied = Vec::with_capacity(cli.actions.len());
    for action in &cli.actions {
        let outcome = match *action {
            Action::Terminate(pid) => session.terminate(Some(pid))?,
            Action::Preempt(pid) => session.preempt(Some(pid))?,
        };
        if text {
            println!("{}", outcome);
            println!("{}", session.latest().headline());
        }
        applied.push(outcome);
    }

    match cli.format {
        Format::Text => {
            println!();
            print!("{}", session.summarize());
        }
        Format::Json => {
            let output = Output {
                initial,
                actions: applied,
                result: session.latest(),
                state: session.state().snapshot(),
                report: session.summarize(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(session.is_deadlocked())
}
