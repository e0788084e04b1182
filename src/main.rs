mod cli;
mod cli_help;

use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{BuildArgs, Cli, Commands};
use rigcheck::{advisor, system};

fn dispatch(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Analyze {
            build: BuildArgs { build, catalog },
            json,
        } => system::run(&build, catalog.as_deref(), json),
        Commands::Component {
            category,
            file,
            json,
        } => system::run_component(category, &file, json),
        Commands::Advise {
            build: BuildArgs { build, catalog },
            provider,
            model,
            output,
        } => advisor::run(
            &provider,
            &build,
            catalog.as_deref(),
            model.as_deref(),
            output.as_deref(),
        ),
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "rigcheck", &mut io::stdout());
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    if let Err(err) = dispatch(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
