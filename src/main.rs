//! CLI entry point for terrain map extraction and viewing

use clap::Parser;
use terramap::io::cli::{Cli, CommandRunner};

fn main() -> terramap::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();
    CommandRunner::new(cli).run()
}
