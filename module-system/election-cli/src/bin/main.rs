use anyhow::Context;
use election_cli::{clap, ElectionWorkflow};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct App {
    #[clap(subcommand)]
    workflow: ElectionWorkflow,
}

fn main() -> Result<(), anyhow::Error> {
    // Logs go to stderr, stdout only carries the output of the workflow
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into()) // If no logging config is set. default to `info` level logs
                .from_env_lossy(), // Parse the log level from the RUST_LOG env var if set
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Unable to set global default subscriber")?;

    let invocation = <App as clap::Parser>::parse();
    let output = invocation.workflow.run()?;
    println!("{output}");

    Ok(())
}
