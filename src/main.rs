use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use thriftgen::generate;
use thriftgen::schema::Program;

#[derive(Parser, Debug)]
#[command(
    name = "thriftgen",
    version,
    about = "Rust output backend for the Thrift IDL compiler"
)]
struct Cli {
    #[arg(
        value_name = "DOCUMENT",
        help = "Path to a validated AST document (JSON). Reads stdin when omitted"
    )]
    input: Option<PathBuf>,
    #[arg(
        long,
        short = 'o',
        value_name = "FILE",
        help = "Write the generated unit to this file instead of stdout"
    )]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let json = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| format!("Failed to read {}: {err}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|err| format!("Failed to read stdin: {err}"))?;
            buf
        }
    };

    let program: Program = serde_json::from_str(&json)
        .map_err(|err| format!("Failed to parse AST document: {err}"))?;
    debug!(document = %program.name, "AST document loaded.");

    let unit = generate(&program).map_err(|err| format!("Generation failed: {err}"))?;

    match &cli.output {
        Some(path) => fs::write(path, &unit)
            .map_err(|err| format!("Failed to write {}: {err}", path.display()))?,
        None => print!("{unit}"),
    }

    Ok(())
}
