//! Database initialization command.

use console::style;

use crate::config::Settings;
use crate::repository::bootstrap;

/// Create the flagged_images table if it does not exist.
pub fn cmd_init_db(settings: &Settings) -> anyhow::Result<()> {
    bootstrap::ensure_schema(&settings.database_path)?;

    println!(
        "{} Initialized flag database at {}",
        style("✓").green(),
        settings.database_path.display()
    );

    Ok(())
}
