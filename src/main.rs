use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use mission_arith::utils::logger;
use mission_arith::{ArithEngine, ArithError, CliConfig, RunPlan};
use std::io::Write;

fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("error: {:#}", e);
            std::process::exit(exit_code(&e));
        }
    }
}

/// Returns the exit code for a completed run.
fn run(config: &CliConfig) -> anyhow::Result<i32> {
    if config.is_batch() {
        tracing::info!("Running in batch mode");
    }

    let plan = RunPlan::from_cli(config)?;
    let engine = ArithEngine::new(plan);
    let report = engine.run().context("failed to run calculations")?;

    if engine.plan().output_path.is_none() {
        let rendered = engine.render(&report)?;
        std::io::stdout()
            .write_all(rendered.as_bytes())
            .map_err(ArithError::IoError)?;
    }

    if report.failed() > 0 {
        tracing::error!("{} of {} calculations failed", report.failed(), report.evaluations.len());
        return Ok(2);
    }

    Ok(0)
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ArithError>()
        .map_or(3, ArithError::exit_code)
}
