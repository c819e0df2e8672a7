mod cli;

use clap::Parser;
use deploy_assess::config;
use deploy_assess::engine::{tables, ScoringEngine};
use deploy_assess::error::AssessError;
use deploy_assess::report;
use deploy_assess::responses;
use deploy_assess::sample::sample_responses;
use deploy_assess::types::config::RangePolicy;
use deploy_assess::types::report::AssessmentReport;
use std::io::IsTerminal;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run(cli: cli::Cli) -> Result<i32, AssessError> {
    match cli.command {
        cli::Commands::Assess(cmd) => {
            let mut loaded = responses::load_responses(&cmd.responses)?;
            let root = cmd
                .responses
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let cfg = config::load_config(root)?;

            let policy = if cmd.clamp {
                RangePolicy::Clamp
            } else {
                cfg.range_policy()
            };
            responses::apply_range_policy(&mut loaded, policy)?;

            let assessment = ScoringEngine::new().assess(&loaded)?;
            let format = cmd.format.map(Into::into).unwrap_or(cfg.output_format());
            let rendered = report::render(&AssessmentReport::new(assessment, &cfg), format)?;
            print!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Sample(cmd) => {
            let cfg = config::load_config(&std::env::current_dir()?)?;
            let assessment = ScoringEngine::new().assess(&sample_responses())?;
            let format = cmd.format.map(Into::into).unwrap_or(cfg.output_format());
            let rendered = report::render(&AssessmentReport::new(assessment, &cfg), format)?;
            print!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Factors => {
            let engine = ScoringEngine::new();
            for (category, weight) in engine.weights().iter() {
                println!("{category} ({}, weight {weight:.2}):", category.weight_name());
                for (name, key) in tables::profile(category).factors {
                    println!("  {key} -> {name}");
                }
            }
            println!(
                "bands: >= {:.1} strong, >= {:.1} separate, >= {:.1} hybrid, else integration",
                tables::STRONG_THRESHOLD,
                tables::MODERATE_THRESHOLD,
                tables::HYBRID_THRESHOLD
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != exit_code::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_input_error() {
                exit_code::INVALID_INPUT
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
