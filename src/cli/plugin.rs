//! Plugin command handlers

use nessus6::Result;

use crate::cli::{CommandContext, GlobalOptions};
use crate::output::{self, Column};

const FAMILY_COLUMNS: [Column; 3] = [
    Column::text("ID", "id"),
    Column::text("NAME", "name"),
    Column::text("PLUGINS", "count"),
];

const PLUGIN_COLUMNS: [Column; 2] = [Column::text("ID", "id"), Column::text("NAME", "name")];

/// Run the `plugin families` command
pub async fn families(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.plugins().families().await;
    let format = ctx.format;
    ctx.close().await;

    output::print_list(&result?, "families", &FAMILY_COLUMNS, format)
}

/// Run the `plugin family` command
pub async fn family(opts: &GlobalOptions, family_id: u64) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.plugins().family_details(family_id).await;
    let format = ctx.format;
    ctx.close().await;

    output::print_list(&result?, "plugins", &PLUGIN_COLUMNS, format)
}

/// Run the `plugin show` command
pub async fn show(opts: &GlobalOptions, plugin_id: u64) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.plugins().plugin_details(plugin_id).await;
    let format = ctx.format;
    ctx.close().await;

    output::print_object(&result?, format)
}
