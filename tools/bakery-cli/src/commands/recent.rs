//! Recently viewed products commands.

use anyhow::Result;
use bakery_store::RecentlyViewed;

use super::{RecentArgs, RecentCommand};
use crate::context::Context;

/// Run the recent command.
pub async fn run(args: RecentArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let recent = RecentlyViewed::with_limit(&store, ctx.config.store.recent_limit);

    let ids = match args.command {
        RecentCommand::View { product } => {
            let ids = recent.record(&product)?;
            ctx.output.debug(&format!("Recorded view of {}", product));
            ids
        }
        RecentCommand::List => recent.list()?,
    };

    if ctx.output.is_json() {
        ctx.output.json(&ids);
        return Ok(());
    }

    if ids.is_empty() {
        ctx.output.info("No recently viewed products.");
        return Ok(());
    }

    ctx.output.header("Recently viewed");
    for (i, id) in ids.iter().enumerate() {
        ctx.output.table_row(&[&format!("{}.", i + 1), id], &[4, 32]);
    }

    Ok(())
}
