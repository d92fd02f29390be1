//! Cart commands.

use anyhow::Result;
use rocket_cart::{Cart, CartStore, Outcome, RecordingNotifier, UpdateProductAmount};
use serde::Serialize;

use super::{AmountArgs, ProductArgs};
use crate::context::Context;
use crate::output::{format_price, Output};

/// JSON shape printed after a cart command.
#[derive(Serialize)]
struct CartReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<Outcome>,
    toasts: Vec<rocket_cart::Toast>,
    cart: &'a Cart,
}

/// Show the cart.
pub fn show(ctx: &Context) -> Result<()> {
    let (store, _) = ctx.open_store()?;
    let cart = store.cart();

    if ctx.output.is_json() {
        ctx.output.json(&CartReport {
            outcome: None,
            toasts: Vec::new(),
            cart: &cart,
        });
        return Ok(());
    }

    print_cart(&ctx.output, &cart);
    Ok(())
}

/// Add one unit of a product.
pub async fn add(args: ProductArgs, ctx: &Context) -> Result<()> {
    let (store, notifier) = ctx.open_store()?;

    let spinner = ctx.output.spinner(&format!("Adding product {}...", args.id));
    let outcome = store.add_product(args.id).await;
    spinner.finish_and_clear();

    report(ctx, &store, &notifier, outcome);
    Ok(())
}

/// Remove a product.
pub fn remove(args: ProductArgs, ctx: &Context) -> Result<()> {
    let (store, notifier) = ctx.open_store()?;
    let outcome = store.remove_product(args.id);

    report(ctx, &store, &notifier, outcome);
    Ok(())
}

/// Set a product's amount.
pub async fn set(args: AmountArgs, ctx: &Context) -> Result<()> {
    let (store, notifier) = ctx.open_store()?;

    let spinner = ctx
        .output
        .spinner(&format!("Setting product {} to {}...", args.id, args.amount));
    let outcome = store
        .update_product_amount(UpdateProductAmount::new(args.id, args.amount))
        .await;
    spinner.finish_and_clear();

    if outcome == Outcome::Ignored {
        if args.amount <= 0 {
            ctx.output
                .debug(&format!("Amount {} ignored; amounts must be at least 1", args.amount));
        } else {
            ctx.output
                .debug(&format!("Product {} is not in the cart", args.id));
        }
    }

    report(ctx, &store, &notifier, outcome);
    Ok(())
}

/// Step a product's amount by one in either direction.
pub async fn step(args: ProductArgs, delta: i64, ctx: &Context) -> Result<()> {
    let (store, notifier) = ctx.open_store()?;

    let spinner = ctx.output.spinner(&format!("Updating product {}...", args.id));
    let outcome = if delta >= 0 {
        store.increment(args.id).await
    } else {
        store.decrement(args.id).await
    };
    spinner.finish_and_clear();

    report(ctx, &store, &notifier, outcome);
    Ok(())
}

fn report(ctx: &Context, store: &CartStore, notifier: &RecordingNotifier, outcome: Outcome) {
    let toasts = notifier.take();
    let cart = store.cart();

    if ctx.output.is_json() {
        ctx.output.json(&CartReport {
            outcome: Some(outcome),
            toasts,
            cart: &cart,
        });
        return;
    }

    for toast in &toasts {
        ctx.output.toast(toast);
    }
    if outcome.is_change() {
        print_cart(&ctx.output, &cart);
    }
}

fn print_cart(output: &Output, cart: &Cart) {
    if cart.is_empty() {
        output.info("Your cart is empty");
        return;
    }

    output.header("Cart");
    let widths = [6, 32, 12, 6, 12];
    output.table_row(&["ID", "PRODUCT", "PRICE", "QTY", "SUBTOTAL"], &widths);
    for item in cart {
        let id = item.id.to_string();
        let price = format_price(item.price);
        let amount = item.amount.to_string();
        let subtotal = format_price(item.price * item.amount as f64);
        output.table_row(&[&id, &item.title, &price, &amount, &subtotal], &widths);
    }
    println!();
    output.kv("Products", &cart.len().to_string());
    output.kv("Items", &cart.total_items().to_string());
}
