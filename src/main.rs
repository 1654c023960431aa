use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use kinsfolk::batch::generate;
use kinsfolk::config::Settings;
use kinsfolk::input::Form;
use kinsfolk::{server, Result};

#[derive(Parser)]
#[command(name = "kinsfolk")]
#[command(about = "Genealogical record facts to QuickStatements batches", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (defaults to ./kinsfolk.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the batch for a JSON form.
    Generate {
        /// Form file; read from stdin when omitted
        form: Option<PathBuf>,
    },
    /// Serve POST /v1/statements.
    Serve {
        /// Overrides server.bind
        #[arg(long)]
        bind: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log.filter));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    match run(cli.command, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, settings: Settings) -> Result<()> {
    match command {
        Command::Generate { form } => {
            let json = match form {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut json = String::new();
                    std::io::stdin().read_to_string(&mut json)?;
                    json
                }
            };
            let batch = generate(&Form::from_json(&json)?, &settings.output)?;
            println!("{batch}");
            Ok(())
        }
        Command::Serve { bind } => {
            let bind = bind.unwrap_or(settings.server.bind);
            let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
            runtime.block_on(server::serve(&bind, settings.output))
        }
    }
}
