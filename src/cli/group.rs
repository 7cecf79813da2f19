//! Group command handlers

use nessus6::Result;

use crate::cli::{CommandContext, GlobalOptions};
use crate::output::{self, Column};

const GROUP_COLUMNS: [Column; 3] = [
    Column::text("ID", "id"),
    Column::text("NAME", "name"),
    Column::text("USERS", "user_count"),
];

const MEMBER_COLUMNS: [Column; 3] = [
    Column::text("ID", "id"),
    Column::text("USERNAME", "username"),
    Column::text("NAME", "name"),
];

/// Run the `group list` command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.groups().list().await;
    let format = ctx.format;
    ctx.close().await;

    output::print_list(&result?, "groups", &GROUP_COLUMNS, format)
}

/// Run the `group members` command
pub async fn members(opts: &GlobalOptions, group_id: u64) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.groups().list_users(group_id).await;
    let format = ctx.format;
    ctx.close().await;

    output::print_list(&result?, "users", &MEMBER_COLUMNS, format)
}
