//! Folder command handlers

use nessus6::Result;

use crate::cli::prompt::confirm_delete;
use crate::cli::{CommandContext, GlobalOptions};
use crate::output::{self, Column};

const FOLDER_COLUMNS: [Column; 4] = [
    Column::text("ID", "id"),
    Column::text("NAME", "name"),
    Column::text("TYPE", "type"),
    Column::text("UNREAD", "unread_count"),
];

/// Run the `folder list` command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.folders().list().await;
    let format = ctx.format;
    ctx.close().await;

    output::print_list(&result?, "folders", &FOLDER_COLUMNS, format)
}

/// Run the `folder create` command
pub async fn create(opts: &GlobalOptions, name: &str) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.folders().create(name).await;
    ctx.close().await;
    let created = result?;

    match created.get("id") {
        Some(id) => output::print_success(&format!("Created folder '{}' ({})", name, id)),
        None => output::print_success(&format!("Created folder '{}'", name)),
    }
    Ok(())
}

/// Run the `folder rename` command
pub async fn rename(opts: &GlobalOptions, folder_id: u64, name: &str) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.folders().rename(folder_id, name).await;
    ctx.close().await;
    result?;

    output::print_success(&format!("Renamed folder {} to '{}'", folder_id, name));
    Ok(())
}

/// Run the `folder delete` command
pub async fn delete(opts: &GlobalOptions, folder_id: u64, yes: bool) -> Result<()> {
    if !confirm_delete(&format!("folder {}", folder_id), yes)? {
        return Ok(());
    }

    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.folders().delete(folder_id).await;
    ctx.close().await;
    result?;

    output::print_success(&format!("Deleted folder {}", folder_id));
    Ok(())
}
