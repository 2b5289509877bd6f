//! Wishlist commands.

use anyhow::Result;
use bakery_store::Wishlist;
use serde_json::json;

use super::{WishlistArgs, WishlistCommand};
use crate::context::Context;

/// Run the wishlist command.
pub async fn run(args: WishlistArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let wishlist = Wishlist::new(&store);

    match args.command {
        WishlistCommand::Toggle { product } => {
            let present = wishlist.toggle(&product)?;
            if ctx.output.is_json() {
                ctx.output.json(&json!({ "product_id": product, "in_wishlist": present }));
            } else if present {
                ctx.output.success(&format!("Added {} to the wishlist", product));
            } else {
                ctx.output.success(&format!("Removed {} from the wishlist", product));
            }
        }
        WishlistCommand::Has { product } => {
            let present = wishlist.contains(&product)?;
            if ctx.output.is_json() {
                ctx.output.json(&json!({ "product_id": product, "in_wishlist": present }));
            } else {
                ctx.output.info(&format!(
                    "{} is {}in the wishlist",
                    product,
                    if present { "" } else { "not " }
                ));
            }
        }
        WishlistCommand::List => {
            let ids = wishlist.list()?;
            if ctx.output.is_json() {
                ctx.output.json(&ids);
                return Ok(());
            }
            if ids.is_empty() {
                ctx.output.info("Wishlist is empty.");
                return Ok(());
            }
            ctx.output.header("Wishlist");
            for id in &ids {
                ctx.output.list_item(id);
            }
        }
    }

    Ok(())
}
