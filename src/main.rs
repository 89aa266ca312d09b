#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! gitlab-extract-variable — export a GitLab project's CI/CD variables.

mod cli;
mod commands;
mod config;
mod export;
mod gitlab;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, init_logging, write_error};
use config::ExportConfig;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let ctx = OutputCtx::new(cli.json, cli.debug);

    let result = ExportConfig::from_cli(&cli).and_then(|config| commands::run(&config, &ctx));
    if let Err(err) = result {
        write_error(&err, &ctx);
        std::process::exit(err.exit_code());
    }
}
