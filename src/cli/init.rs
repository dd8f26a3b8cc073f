use std::path::{Path, PathBuf};

use crate::db::{get_connection, init_db};
use crate::error::Result;
use crate::settings::{save_settings_to, shellexpand_path, Settings};

pub fn run(settings: &Settings, config_path: &Path) -> Result<()> {
    let db_path = PathBuf::from(shellexpand_path(&settings.db_path));
    if let Some(dir) = db_path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let conn = get_connection(&db_path)?;
    init_db(&conn)?;
    tracing::info!(path = %db_path.display(), "database ready");

    save_settings_to(config_path, settings)?;

    println!("Database:  {}", db_path.display());
    println!("Settings:  {}", config_path.display());
    Ok(())
}
