use comfy_table::{Cell, Table};

use crate::db::{PriceChangeSource, SqliteSource};
use crate::error::Result;
use crate::settings::{shellexpand_path, Settings};

pub fn list(settings: &Settings) -> Result<()> {
    let source = SqliteSource::new(shellexpand_path(&settings.db_path));
    let jobs = source.price_changes(settings.unit_id)?;

    if jobs.is_empty() {
        println!("No pending price changes for unit {}.", settings.unit_id);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["PLU", "Old Price", "New Price"]);
    for job in jobs {
        table.add_row(vec![
            Cell::new(job.plu),
            Cell::new(job.price_old),
            Cell::new(job.price_new),
        ]);
    }
    println!("Price changes for unit {}\n{table}", settings.unit_id);
    Ok(())
}
