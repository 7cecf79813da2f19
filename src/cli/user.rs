//! User command handlers

use nessus6::Result;

use crate::cli::prompt::confirm_delete;
use crate::cli::{CommandContext, GlobalOptions};
use crate::output::{self, Column};

const USER_COLUMNS: [Column; 6] = [
    Column::text("ID", "id"),
    Column::text("USERNAME", "username"),
    Column::text("NAME", "name"),
    Column::text("EMAIL", "email"),
    Column::text("PERMISSIONS", "permissions"),
    Column::timestamp("LAST LOGIN", "lastlogin"),
];

/// Run the `user list` command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.users().list().await;
    let format = ctx.format;
    ctx.close().await;

    output::print_list(&result?, "users", &USER_COLUMNS, format)
}

/// Run the `user show` command
pub async fn show(opts: &GlobalOptions, user_id: u64) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.users().get(user_id).await;
    let format = ctx.format;
    ctx.close().await;

    output::print_object(&result?, format)
}

/// Run the `user delete` command
pub async fn delete(opts: &GlobalOptions, user_id: u64, yes: bool) -> Result<()> {
    if !confirm_delete(&format!("user {}", user_id), yes)? {
        return Ok(());
    }

    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.users().delete(user_id).await;
    ctx.close().await;
    result?;

    output::print_success(&format!("Deleted user {}", user_id));
    Ok(())
}
