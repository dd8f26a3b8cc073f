use std::path::Path;

use crate::error::{Result, UpdateError};
use crate::settings::Settings;

pub fn show(settings: &Settings, config_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| UpdateError::Settings(e.to_string()))?;
    println!("# {}", config_path.display());
    println!("{json}");
    Ok(())
}
