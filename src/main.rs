//! Entry point for dbmcp.
use std::process::ExitCode;

use clap::Parser;
use dbmcp::{
    cli::{execute_cli_command, CliCommand, GenerateArgs, GenerateProfile, ParsedCommand},
    lib::telemetry,
    runtime::{self, RuntimeExit},
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<(), RuntimeExit> {
    telemetry::init_tracing().map_err(RuntimeExit::from_error)?;
    let args = GenerateArgs::parse();
    let command = args.into_command().map_err(RuntimeExit::from_error)?;

    match command {
        ParsedCommand::Generate(profile) => generate(profile),
        ParsedCommand::Cli(command) => handle_cli_command(command),
    }
}

fn generate(profile: GenerateProfile) -> Result<(), RuntimeExit> {
    let config = runtime::load_config(&profile).map_err(RuntimeExit::from_error)?;
    let output = runtime::run_generate(profile, config)?;
    println!("{output}");
    Ok(())
}

fn handle_cli_command(command: CliCommand) -> Result<(), RuntimeExit> {
    let message = execute_cli_command(command).map_err(RuntimeExit::from_error)?;
    println!("{message}");
    Ok(())
}
