use colored::Colorize;

use crate::db::SqliteSource;
use crate::error::Result;
use crate::settings::{shellexpand_path, Settings};
use crate::updater;

pub fn run(settings: &Settings) -> Result<()> {
    let source = SqliteSource::new(shellexpand_path(&settings.db_path));
    let result = updater::run(settings, &source)?;

    if result.query_failed {
        println!("{}", "Price change query failed; see log.".yellow());
    } else {
        println!("{} pending price change(s) for unit {}", result.jobs.len(), settings.unit_id);
    }
    if result.replaced {
        println!("{} {}", "Updated".green(), result.output_path.display());
    } else {
        println!("{} {} (no match)", "Copied".dimmed(), result.output_path.display());
    }
    Ok(())
}
