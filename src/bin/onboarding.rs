//! Onboarding - headless runner for the input dispatch chain and tutorial

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use onboarding::app::{App, AppConfig, Script, TickReport};
use onboarding::{build_info, health};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "onboarding")]
#[command(about = "Mode-filtered input dispatch and a gated tutorial", long_about = None)]
struct Cli {
    /// Configuration profile (defaults to APP_PROFILE, then "release")
    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a session script through the dispatch chain and tutorial
    Run {
        /// Script file; the built-in demo runs when omitted
        #[arg(long, value_name = "FILE")]
        script: Option<PathBuf>,

        /// Override the configured tick rate (Hz)
        #[arg(long, value_name = "HZ")]
        tick_rate: Option<f64>,

        /// Print every tick, not only the eventful ones
        #[arg(long)]
        all_ticks: bool,
    },
    /// Run health checks and exit with 0 (pass), 1 (fail) or 2 (warnings)
    Health,
    /// Print build information
    Version,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match &cli.profile {
        Some(profile) => AppConfig::load(profile),
        None => AppConfig::load_from_env(),
    }
    .context("failed to load configuration")?;

    init_logging(&config.logging.filter);

    match cli.command {
        Commands::Run {
            script,
            tick_rate,
            all_ticks,
        } => {
            if let Some(rate) = tick_rate {
                config.runner.tick_rate_hz = rate;
            }
            run(config, script, all_ticks)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Health => {
            let report = health::run_all_checks();
            health::print_report(&report);
            Ok(ExitCode::from(report.exit_code() as u8))
        }
        Commands::Version => {
            println!("{}", build_info::detailed_info());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// RUST_LOG wins over the configured filter
fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(config: AppConfig, script_path: Option<PathBuf>, all_ticks: bool) -> Result<()> {
    let script = match &script_path {
        Some(path) => Script::load(path)
            .with_context(|| format!("failed to load script {}", path.display()))?,
        None => Script::demo(),
    };
    info!(
        source = %script_path.as_ref().map_or("demo".into(), |p| p.display().to_string()),
        commands = script.commands().len(),
        "Running script"
    );

    let mut app = App::new(config);
    for report in app.run_script(&script) {
        if all_ticks || report.is_eventful() {
            print_tick(&report);
        }
    }

    let sequencer = app.sequencer();
    let summary = format!(
        "{} ticks, {:.2?} simulated, phase {}",
        app.tick_count(),
        app.elapsed(),
        sequencer.current()
    );
    if sequencer.is_complete() {
        println!("\n{} {summary}", "✓".green());
    } else {
        println!("\n{} {summary}", "…".yellow());
    }

    Ok(())
}

fn print_tick(report: &TickReport) {
    let mut line = format!(
        "{} {}",
        format!("[{:>5}]", report.tick).dimmed(),
        format!("{:<8}", report.mode.name()).cyan()
    );
    if !report.handled {
        line.push_str(&format!(" {}", "dropped".red()));
    }
    for reaction in &report.reactions {
        line.push_str(&format!(" {}", reaction.to_string().green()));
    }
    for event in &report.events {
        line.push_str(&format!(" {}", event.to_string().yellow()));
    }
    println!("{line}");
}
