//! Store status command.

use console::style;

use crate::config::Settings;
use crate::repository::bootstrap;

/// Print the stored flag count and the most recent entries.
pub async fn cmd_status(settings: &Settings, limit: i64) -> anyhow::Result<()> {
    bootstrap::ensure_schema(&settings.database_path)?;

    let flags = settings.create_db_context().flags();

    let count = flags.count().await?;
    println!(
        "{} {} flags stored in {}",
        style("→").cyan(),
        count,
        settings.database_path.display()
    );

    for record in flags.recent(limit).await? {
        println!(
            "  #{} [{}] \"{}\" seed={} model={}",
            record.id, record.created_at, record.image_prompt, record.seed, record.model_name
        );
    }

    Ok(())
}
