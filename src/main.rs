mod check_cmd;
mod cmd;
mod render_cmd;

use anyhow::Result;
use clap::Parser;
use grout_editor::cli::{Cli, Command};
use grout_editor::config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Render(args) => {
            let config = config::load()?;
            render_cmd::run(&args, &config)
        }
        Command::Check(args) => check_cmd::run(&args.input, args.json),
        Command::Config(config_cmd) => cmd::config::run(config_cmd),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
