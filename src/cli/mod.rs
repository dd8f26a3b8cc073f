pub mod config;
pub mod init;
pub mod jobs;
pub mod run;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::fragment::FragmentStyle;
use crate::settings::{load_settings_from, settings_path, shellexpand_path, Settings};

#[derive(Parser)]
#[command(
    name = "menu-price-update",
    about = "Apply a pending price change to a menu source file."
)]
pub struct Cli {
    #[command(flatten)]
    pub overrides: Overrides,

    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Query pending price changes and rewrite the input file into the output file (default).
    Run,
    /// List the pending price changes for the unit.
    Jobs,
    /// Create the price change database and write the settings file.
    Init,
    /// Print the effective settings.
    Config,
}

/// Per-invocation values that take precedence over the settings file.
#[derive(Args, Default)]
pub struct Overrides {
    /// Settings file (default: ~/.config/menu-price-update/settings.json)
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// Unit (store) id passed to the price change query
    #[arg(long = "unit-id", global = true)]
    pub unit_id: Option<i64>,
    /// PLU code of the item to reprice
    #[arg(long, global = true)]
    pub plu: Option<String>,
    /// Price currently in the input file
    #[arg(long = "old-price", global = true)]
    pub old_price: Option<String>,
    /// Price to write
    #[arg(long = "new-price", global = true)]
    pub new_price: Option<String>,
    /// File to read
    #[arg(long, global = true)]
    pub input: Option<String>,
    /// File to write
    #[arg(long, global = true)]
    pub output: Option<String>,
    /// SQLite database holding the price changes
    #[arg(long, global = true)]
    pub db: Option<String>,
    /// Fragment layout to search for
    #[arg(long, value_enum, global = true)]
    pub style: Option<FragmentStyle>,
}

impl Overrides {
    pub fn config_path(&self) -> PathBuf {
        match &self.config {
            Some(p) => PathBuf::from(shellexpand_path(p)),
            None => settings_path(),
        }
    }

    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(v) = self.unit_id {
            settings.unit_id = v;
        }
        if let Some(v) = &self.plu {
            settings.plu = v.clone();
        }
        if let Some(v) = &self.old_price {
            settings.old_price = v.clone();
        }
        if let Some(v) = &self.new_price {
            settings.new_price = v.clone();
        }
        if let Some(v) = &self.input {
            settings.input_path = v.clone();
        }
        if let Some(v) = &self.output {
            settings.output_path = v.clone();
        }
        if let Some(v) = &self.db {
            settings.db_path = v.clone();
        }
        if let Some(v) = self.style {
            settings.style = v;
        }
        settings
    }

    /// Settings file contents with the command-line values laid over them.
    pub fn resolve(&self) -> Settings {
        self.apply(load_settings_from(&self.config_path()))
    }
}
