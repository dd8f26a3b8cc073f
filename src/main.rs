mod cli;
mod db;
mod document;
mod error;
mod fragment;
mod logging;
mod models;
mod settings;
mod substitute;
mod updater;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let config_path = cli.overrides.config_path();
    let settings = cli.overrides.resolve();

    let result = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => cli::run::run(&settings),
        Commands::Jobs => cli::jobs::list(&settings),
        Commands::Init => cli::init::run(&settings, &config_path),
        Commands::Config => cli::config::show(&settings, &config_path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
