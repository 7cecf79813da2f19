//! Server command handlers

use nessus6::Result;

use crate::cli::{CommandContext, GlobalOptions};
use crate::output;

/// Run the `server status` command
pub async fn status(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.server().status().await;
    let format = ctx.format;
    ctx.close().await;

    output::print_object(&result?, format)
}

/// Run the `server properties` command
pub async fn properties(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.server().properties().await;
    let format = ctx.format;
    ctx.close().await;

    output::print_object(&result?, format)
}
