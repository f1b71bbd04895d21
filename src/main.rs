use clap::Parser;
use tracing_subscriber::EnvFilter;

mod classify;
mod cli;
mod core;
mod parsing;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("msa_classify=debug,info")
    } else {
        EnvFilter::new("msa_classify=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    cli::classify::run(&cli)?;

    Ok(())
}
