//! Scanner command handlers

use nessus6::Result;

use crate::cli::{CommandContext, GlobalOptions};
use crate::output::{self, Column};

const SCANNER_COLUMNS: [Column; 5] = [
    Column::text("ID", "id"),
    Column::text("NAME", "name"),
    Column::text("TYPE", "type"),
    Column::text("STATUS", "status"),
    Column::text("ENGINE", "engine_version"),
];

const AGENT_COLUMNS: [Column; 5] = [
    Column::text("ID", "id"),
    Column::text("NAME", "name"),
    Column::text("PLATFORM", "platform"),
    Column::text("STATUS", "status"),
    Column::timestamp("LAST SEEN", "last_connect"),
];

/// Run the `scanner list` command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.scanners().list().await;
    let format = ctx.format;
    ctx.close().await;

    output::print_list(&result?, "scanners", &SCANNER_COLUMNS, format)
}

/// Run the `scanner agents` command
pub async fn agents(opts: &GlobalOptions, scanner_id: u64) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.scanners().list_agents(scanner_id).await;
    let format = ctx.format;
    ctx.close().await;

    output::print_list(&result?, "agents", &AGENT_COLUMNS, format)
}
