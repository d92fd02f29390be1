//! The cart store.

use crate::api::CatalogApi;
use crate::error::CartError;
use crate::notify::{messages, Notifier, Toast};
use crate::storage::CartStorage;
use rocket_commerce::{Cart, CommerceError, ProductId, Stock};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// Arguments to [`CartStore::update_product_amount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: i64,
}

impl UpdateProductAmount {
    pub fn new(product_id: ProductId, amount: i64) -> Self {
        Self { product_id, amount }
    }
}

/// What a cart operation did.
///
/// Callers may ignore it; the shopper has already been told through the
/// notifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// A new item was appended with amount 1.
    Added,
    /// An existing item's amount went up by one.
    Incremented,
    /// An item was removed.
    Removed,
    /// An item's amount was set.
    Updated,
    /// Nothing to change (non-positive amount, or product not in the cart).
    Ignored,
    /// Stock could not cover the request; cart unchanged.
    OutOfStock,
    /// Service, storage or cart error; cart unchanged.
    Failed,
}

impl Outcome {
    /// Whether the cart was changed.
    pub fn is_change(self) -> bool {
        matches!(
            self,
            Outcome::Added | Outcome::Incremented | Outcome::Removed | Outcome::Updated
        )
    }
}

/// Shopping cart state with stock-checked mutations.
///
/// The store is constructed once and shared (typically as `Arc<CartStore>`)
/// with every consumer. It loads the persisted cart on construction and
/// rewrites storage after each successful mutation, before publishing the
/// new cart to subscribers.
///
/// Operations do not serialize against each other. Each one works on the
/// cart as it was when the operation started and replaces the whole cart
/// when it finishes, so two overlapping operations are last-write-wins.
pub struct CartStore {
    state: watch::Sender<Cart>,
    storage: CartStorage,
    catalog: Arc<dyn CatalogApi>,
    notifier: Arc<dyn Notifier>,
}

impl CartStore {
    /// Create a store, loading the cart from `storage`.
    pub fn new(
        storage: CartStorage,
        catalog: impl CatalogApi + 'static,
        notifier: impl Notifier + 'static,
    ) -> Self {
        let cart = storage.load();
        let (state, _) = watch::channel(cart);
        Self {
            state,
            storage,
            catalog: Arc::new(catalog),
            notifier: Arc::new(notifier),
        }
    }

    /// Snapshot of the current cart.
    pub fn cart(&self) -> Cart {
        self.state.borrow().clone()
    }

    /// Receive every cart published after a successful mutation.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.state.subscribe()
    }

    /// The catalog the store checks against.
    pub fn catalog(&self) -> &dyn CatalogApi {
        self.catalog.as_ref()
    }

    /// Add one unit of a product.
    ///
    /// Appends the product with amount 1 if it is not in the cart, otherwise
    /// increments it. Either way the stock service must report at least one
    /// unit, and an increment must not exceed the reported stock.
    #[instrument(skip_all, fields(product_id = %product_id))]
    pub async fn add_product(&self, product_id: ProductId) -> Outcome {
        let result = self.try_add_product(product_id).await;
        self.finish(result, Some(messages::PRODUCT_ADDED), messages::ADD_FAILED)
    }

    /// Remove a product's item.
    #[instrument(skip_all, fields(product_id = %product_id))]
    pub fn remove_product(&self, product_id: ProductId) -> Outcome {
        let result = self.try_remove_product(product_id);
        self.finish(
            result,
            Some(messages::PRODUCT_REMOVED),
            messages::REMOVE_FAILED,
        )
    }

    /// Set a product's amount to exactly `update.amount`.
    ///
    /// Non-positive amounts are ignored without contacting any service.
    /// A product that is not in the cart is ignored after the stock check.
    /// Both cases, and success, are silent.
    #[instrument(skip_all, fields(product_id = %update.product_id, amount = update.amount))]
    pub async fn update_product_amount(&self, update: UpdateProductAmount) -> Outcome {
        if update.amount <= 0 {
            debug!("ignoring non-positive amount");
            return Outcome::Ignored;
        }
        let result = self.try_update_product_amount(update).await;
        self.finish(result, None, messages::UPDATE_FAILED)
    }

    /// Raise a product's amount by one through [`Self::update_product_amount`].
    ///
    /// An amount already at `i64::MAX` is asked for again and fails the stock
    /// check.
    pub async fn increment(&self, product_id: ProductId) -> Outcome {
        let amount = self.current_amount(product_id).saturating_add(1);
        self.update_product_amount(UpdateProductAmount::new(product_id, amount))
            .await
    }

    /// Lower a product's amount by one through [`Self::update_product_amount`].
    ///
    /// An item at amount 1 stays at 1.
    pub async fn decrement(&self, product_id: ProductId) -> Outcome {
        let amount = self.current_amount(product_id) - 1;
        self.update_product_amount(UpdateProductAmount::new(product_id, amount))
            .await
    }

    fn current_amount(&self, product_id: ProductId) -> i64 {
        self.state
            .borrow()
            .get(product_id)
            .map_or(0, |item| item.amount)
    }

    async fn try_add_product(&self, product_id: ProductId) -> Result<Outcome, CartError> {
        let mut cart = self.cart();

        let stock = self.catalog.stock(product_id).await?;
        if !stock.is_available() {
            return Err(shortfall(product_id, 1, stock).into());
        }

        let outcome = match cart.get(product_id).map(|item| item.amount) {
            None => {
                let product = self.catalog.product(product_id).await?;
                cart.push_product(product)?;
                Outcome::Added
            }
            Some(current) => {
                let Some(amount) = current.checked_add(1) else {
                    return Err(shortfall(product_id, current, stock).into());
                };
                stock.ensure(product_id, amount)?;
                cart.set_amount(product_id, amount)?;
                Outcome::Incremented
            }
        };

        self.commit(cart)?;
        Ok(outcome)
    }

    fn try_remove_product(&self, product_id: ProductId) -> Result<Outcome, CartError> {
        let mut cart = self.cart();
        cart.remove(product_id)?;
        self.commit(cart)?;
        Ok(Outcome::Removed)
    }

    async fn try_update_product_amount(
        &self,
        update: UpdateProductAmount,
    ) -> Result<Outcome, CartError> {
        let mut cart = self.cart();

        let stock = self.catalog.stock(update.product_id).await?;
        stock.ensure(update.product_id, update.amount)?;

        if !cart.contains(update.product_id) {
            debug!("product not in cart");
            return Ok(Outcome::Ignored);
        }
        cart.set_amount(update.product_id, update.amount)?;
        self.commit(cart)?;
        Ok(Outcome::Updated)
    }

    /// Persist, then publish.
    fn commit(&self, cart: Cart) -> Result<(), CartError> {
        self.storage.save(&cart)?;
        info!(items = cart.len(), total = cart.total_items(), "cart updated");
        self.state.send_replace(cart);
        Ok(())
    }

    /// Turn an operation result into a toast and an [`Outcome`].
    fn finish(
        &self,
        result: Result<Outcome, CartError>,
        success: Option<&str>,
        failure: &str,
    ) -> Outcome {
        match result {
            Ok(outcome) => {
                if let Some(message) = success {
                    self.notifier.notify(Toast::success(message));
                }
                outcome
            }
            Err(e) if e.is_out_of_stock() => {
                info!(reason = %e, "rejected");
                self.notifier.notify(Toast::warning(messages::OUT_OF_STOCK));
                Outcome::OutOfStock
            }
            Err(e) => {
                warn!(error = %e, "cart operation failed");
                self.notifier.notify(Toast::error(failure));
                Outcome::Failed
            }
        }
    }
}

fn shortfall(product_id: ProductId, requested: i64, stock: Stock) -> CommerceError {
    CommerceError::InsufficientStock {
        product_id,
        requested,
        available: stock.amount,
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &*self.state.borrow())
            .field("storage", &self.storage)
            .finish_non_exhaustive()
    }
}
