use clap::Parser;
use loose_version::cli::{Cli, run};
use loose_version::config::Config;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_filter()))
        .with_writer(std::io::stderr)
        .init();

    run(cli.command, &config, &mut std::io::stdout().lock())
}
