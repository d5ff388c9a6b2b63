//! Random picks over comma-separated lists.

use super::{Context, Handler, Reply};
use rand::seq::SliceRandom;

/// Split on commas, trim, and drop empty items.
fn split_items(args: &str) -> Vec<&str> {
    args.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// `c a, b, c`: pick one item.
pub struct ChooseHandler;

impl Handler for ChooseHandler {
    fn handle(&self, ctx: &Context<'_>) -> Reply {
        let items = split_items(ctx.args);
        match items.choose(&mut rand::thread_rng()) {
            Some(choice) => Reply::text(*choice),
            None => Reply::text(format!(
                "Give me some choices, e.g. {}c tea, coffee",
                ctx.view.prefix
            )),
        }
    }
}

/// `o a, b, c`: shuffle the items.
pub struct OrderHandler;

impl Handler for OrderHandler {
    fn handle(&self, ctx: &Context<'_>) -> Reply {
        let mut items = split_items(ctx.args);
        if items.is_empty() {
            return Reply::text(format!(
                "Give me something to order, e.g. {}o first, second, third",
                ctx.view.prefix
            ));
        }
        items.shuffle(&mut rand::thread_rng());
        Reply::text(items.join(", "))
    }
}
