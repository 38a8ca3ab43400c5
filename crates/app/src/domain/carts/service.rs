//! Carts service.
//!
//! Every operation is one `load → mutate → save` cycle against the configured
//! [`CartStore`]. Two requests racing on the same context resolve
//! last-write-wins at the granularity of that whole cycle.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::domain::{
    carts::{
        errors::CartsServiceError,
        lookup::ProductLookup,
        models::{Cart, CartContextUuid, CartSummary},
        store::CartStore,
    },
    products::records::ProductUuid,
};

#[derive(Clone)]
pub struct StoreCartsService {
    lookup: Arc<dyn ProductLookup>,
    store: Arc<dyn CartStore>,
}

impl StoreCartsService {
    #[must_use]
    pub fn new(lookup: Arc<dyn ProductLookup>, store: Arc<dyn CartStore>) -> Self {
        Self { lookup, store }
    }

    async fn load(&self, context: CartContextUuid) -> Result<Cart, CartsServiceError> {
        Ok(self.store.load(context).await?)
    }

    async fn save(&self, context: CartContextUuid, cart: &Cart) -> Result<(), CartsServiceError> {
        Ok(self.store.save(context, cart.clone()).await?)
    }
}

impl Debug for StoreCartsService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("StoreCartsService").finish_non_exhaustive()
    }
}

#[async_trait]
impl CartsService for StoreCartsService {
    async fn get_cart(&self, context: CartContextUuid) -> Result<Cart, CartsServiceError> {
        self.load(context).await
    }

    async fn add_item(
        &self,
        context: CartContextUuid,
        product: ProductUuid,
        quantity: i64,
    ) -> Result<Cart, CartsServiceError> {
        if quantity < 1 {
            return Err(CartsServiceError::InvalidQuantity(quantity));
        }

        let snapshot = self
            .lookup
            .resolve(product)
            .await?
            .ok_or(CartsServiceError::ProductNotFound)?;

        let mut cart = self.load(context).await?;

        cart.add(product, snapshot, quantity)?;

        self.save(context, &cart).await?;

        info!(
            cart_context = %context,
            product_uuid = %product,
            quantity,
            total = cart.total(),
            "added item to cart"
        );

        Ok(cart)
    }

    async fn remove_item(
        &self,
        context: CartContextUuid,
        product: ProductUuid,
    ) -> Result<Cart, CartsServiceError> {
        let mut cart = self.load(context).await?;

        if !cart.remove(product) {
            debug!(cart_context = %context, product_uuid = %product, "product not in cart");

            return Ok(cart);
        }

        self.save(context, &cart).await?;

        info!(cart_context = %context, product_uuid = %product, "removed item from cart");

        Ok(cart)
    }

    async fn update_quantity(
        &self,
        context: CartContextUuid,
        product: ProductUuid,
        quantity: i64,
    ) -> Result<Cart, CartsServiceError> {
        if quantity < 0 {
            return Err(CartsServiceError::InvalidQuantity(quantity));
        }

        let mut cart = self.load(context).await?;

        cart.update_quantity(product, quantity)?;

        self.save(context, &cart).await?;

        info!(
            cart_context = %context,
            product_uuid = %product,
            quantity,
            "updated cart item quantity"
        );

        Ok(cart)
    }

    async fn empty_cart(&self, context: CartContextUuid) -> Result<Cart, CartsServiceError> {
        let cart = Cart::new();

        self.save(context, &cart).await?;

        info!(cart_context = %context, "emptied cart");

        Ok(cart)
    }

    async fn checkout(&self, context: CartContextUuid) -> Result<CartSummary, CartsServiceError> {
        let cart = self.load(context).await?;
        let summary = cart.summary();

        self.save(context, &Cart::new()).await?;

        info!(
            cart_context = %context,
            line_count = summary.lines.len(),
            total = summary.total,
            "checked out cart"
        );

        Ok(summary)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the cart for a context, empty if none has been stored.
    async fn get_cart(&self, context: CartContextUuid) -> Result<Cart, CartsServiceError>;

    /// Add `quantity` units of a product, merging with an existing line.
    async fn add_item(
        &self,
        context: CartContextUuid,
        product: ProductUuid,
        quantity: i64,
    ) -> Result<Cart, CartsServiceError>;

    /// Remove a product's line. Removing an absent product succeeds.
    async fn remove_item(
        &self,
        context: CartContextUuid,
        product: ProductUuid,
    ) -> Result<Cart, CartsServiceError>;

    /// Replace a line's quantity; `0` removes it.
    async fn update_quantity(
        &self,
        context: CartContextUuid,
        product: ProductUuid,
        quantity: i64,
    ) -> Result<Cart, CartsServiceError>;

    /// Remove every line from the cart.
    async fn empty_cart(&self, context: CartContextUuid) -> Result<Cart, CartsServiceError>;

    /// Return the cart as it stands and leave an empty cart behind.
    async fn checkout(&self, context: CartContextUuid) -> Result<CartSummary, CartsServiceError>;
}
