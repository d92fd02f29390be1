//! Catalog listing.

use anyhow::{Context as _, Result};
use rocket_cart::{Product, ProductId};
use serde::Serialize;

use crate::context::Context;
use crate::output::format_price;

#[derive(Serialize)]
struct ListedProduct {
    #[serde(flatten)]
    product: Product,
    in_cart: i64,
}

/// List the catalog with the amount of each product already in the cart.
pub async fn run(ctx: &Context) -> Result<()> {
    let (store, _) = ctx.open_store()?;

    let spinner = ctx.output.spinner("Fetching products...");
    let products = store.catalog().products().await;
    spinner.finish_and_clear();

    let products = products.with_context(|| {
        format!("Failed to fetch products from {}", ctx.config.api.base_url)
    })?;
    let amounts = store.cart().amounts();
    let in_cart = |id: ProductId| amounts.get(&id).copied().unwrap_or(0);

    if ctx.output.is_json() {
        let listed: Vec<ListedProduct> = products
            .into_iter()
            .map(|product| ListedProduct {
                in_cart: in_cart(product.id),
                product,
            })
            .collect();
        ctx.output.json(&listed);
        return Ok(());
    }

    if products.is_empty() {
        ctx.output.info("The catalog is empty");
        return Ok(());
    }

    ctx.output.header("Products");
    let widths = [6, 32, 12, 8];
    ctx.output
        .table_row(&["ID", "PRODUCT", "PRICE", "IN CART"], &widths);
    for product in &products {
        let amount = in_cart(product.id);
        let badge = if amount > 0 { amount.to_string() } else { String::new() };
        let id = product.id.to_string();
        let price = format_price(product.price);
        ctx.output
            .table_row(&[&id, &product.title, &price, &badge], &widths);
    }

    Ok(())
}
