//! Session command handlers

use nessus6::Result;

use crate::cli::{CommandContext, GlobalOptions};
use crate::output;

/// Run the `session show` command
pub async fn show(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.session().get().await;
    let format = ctx.format;
    ctx.close().await;

    output::print_object(&result?, format)
}
