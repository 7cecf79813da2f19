//! Policy command handlers

use nessus6::Result;

use crate::cli::prompt::confirm_delete;
use crate::cli::{CommandContext, GlobalOptions};
use crate::output::{self, Column};

const POLICY_COLUMNS: [Column; 5] = [
    Column::text("ID", "id"),
    Column::text("NAME", "name"),
    Column::text("OWNER", "owner"),
    Column::text("VISIBILITY", "visibility"),
    Column::timestamp("MODIFIED", "last_modification_date"),
];

/// Run the `policy list` command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.policies().list().await;
    let format = ctx.format;
    ctx.close().await;

    output::print_list(&result?, "policies", &POLICY_COLUMNS, format)
}

/// Run the `policy show` command
pub async fn show(opts: &GlobalOptions, policy_id: u64) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.policies().details(policy_id).await;
    let format = ctx.format;
    ctx.close().await;

    output::print_object(&result?, format)
}

/// Run the `policy copy` command
pub async fn copy(opts: &GlobalOptions, policy_id: u64) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.policies().copy(policy_id).await;
    let format = ctx.format;
    ctx.close().await;
    let copied = result?;

    match copied.get("name").and_then(|n| n.as_str()) {
        Some(name) => output::print_success(&format!("Copied policy {} to '{}'", policy_id, name)),
        None => output::print_object(&copied, format)?,
    }
    Ok(())
}

/// Run the `policy delete` command
pub async fn delete(opts: &GlobalOptions, policy_id: u64, yes: bool) -> Result<()> {
    if !confirm_delete(&format!("policy {}", policy_id), yes)? {
        return Ok(());
    }

    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.policies().delete(policy_id).await;
    ctx.close().await;
    result?;

    output::print_success(&format!("Deleted policy {}", policy_id));
    Ok(())
}
