//! Cart Models
//!
//! The cart is a plain value: an ordered list of lines, at most one per
//! product. Every mutation validates first and only then writes, so a call
//! that returns an error leaves the cart exactly as it was.

use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        carts::{errors::CartError, lookup::ProductSnapshot},
        products::records::ProductUuid,
    },
    uuids::TypedUuid,
};

/// Owner of a cart: a browser session or a customer.
#[derive(Debug)]
pub struct CartContext;

/// Cart Context UUID
pub type CartContextUuid = TypedUuid<CartContext>;

/// One product within a cart, with name and price frozen at the time it was
/// first added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCartLine")]
pub struct CartLine {
    product: ProductUuid,
    display_name: String,
    unit_price: u64,
    quantity: u32,
}

impl CartLine {
    /// Build a line from stored parts.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] when `quantity` is not in `1..=u32::MAX`,
    /// or when `unit_price × quantity` does not fit in a `u64`.
    pub fn new(
        product: ProductUuid,
        snapshot: ProductSnapshot,
        quantity: i64,
    ) -> Result<Self, CartError> {
        let checked = positive_quantity(quantity)?;

        line_total(snapshot.unit_price, checked).ok_or(CartError::InvalidQuantity(quantity))?;

        Ok(Self {
            product,
            display_name: snapshot.display_name,
            unit_price: snapshot.unit_price,
            quantity: checked,
        })
    }

    pub fn product(&self) -> ProductUuid {
        self.product
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Price of a single unit, in minor currency units.
    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price × quantity`.
    pub fn subtotal(&self) -> u64 {
        u64::from(self.quantity).saturating_mul(self.unit_price)
    }
}

#[derive(Deserialize)]
struct RawCartLine {
    product: ProductUuid,
    display_name: String,
    unit_price: u64,
    quantity: i64,
}

impl TryFrom<RawCartLine> for CartLine {
    type Error = CartError;

    fn try_from(raw: RawCartLine) -> Result<Self, Self::Error> {
        Self::new(
            raw.product,
            ProductSnapshot {
                display_name: raw.display_name,
                unit_price: raw.unit_price,
            },
            raw.quantity,
        )
    }
}

/// Cart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from previously persisted lines, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::DuplicateLine`] if two lines share a product, or
    /// [`CartError::InvalidQuantity`] if the lines' total does not fit in a `u64`.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Result<Self, CartError> {
        let mut cart = Self::new();

        for line in lines {
            if cart.line(line.product).is_some() {
                return Err(CartError::DuplicateLine(line.product));
            }

            if cart
                .total_replacing(line.product, line.unit_price, line.quantity)
                .is_none()
            {
                return Err(CartError::InvalidQuantity(i64::from(line.quantity)));
            }

            cart.lines.push(line);
        }

        Ok(cart)
    }

    /// Add `quantity` units of a product.
    ///
    /// An existing line for the product has its quantity increased and keeps
    /// the snapshot it was created with; otherwise a new line is appended
    /// from `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] when `quantity < 1`, or when the
    /// resulting quantity or cart total would overflow.
    pub fn add(
        &mut self,
        product: ProductUuid,
        snapshot: ProductSnapshot,
        quantity: i64,
    ) -> Result<(), CartError> {
        let requested = positive_quantity(quantity)?;

        let (unit_price, combined) = match self.line(product) {
            Some(line) => (
                line.unit_price,
                line.quantity
                    .checked_add(requested)
                    .ok_or(CartError::InvalidQuantity(quantity))?,
            ),
            None => (snapshot.unit_price, requested),
        };

        if self.total_replacing(product, unit_price, combined).is_none() {
            return Err(CartError::InvalidQuantity(quantity));
        }

        match self.lines.iter_mut().find(|line| line.product == product) {
            Some(line) => line.quantity = combined,
            None => self.lines.push(CartLine {
                product,
                display_name: snapshot.display_name,
                unit_price,
                quantity: combined,
            }),
        }

        Ok(())
    }

    /// Remove the line for `product`. Returns whether a line was removed;
    /// removing an absent product is not an error.
    pub fn remove(&mut self, product: ProductUuid) -> bool {
        let before = self.lines.len();

        self.lines.retain(|line| line.product != product);

        self.lines.len() != before
    }

    /// Set the quantity of an existing line. `0` removes the line; a product
    /// without a line is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] when `quantity` is negative, exceeds
    /// `u32::MAX`, or would overflow the cart total.
    pub fn update_quantity(&mut self, product: ProductUuid, quantity: i64) -> Result<(), CartError> {
        if quantity == 0 {
            self.remove(product);

            return Ok(());
        }

        let replacement = positive_quantity(quantity)?;

        let Some(unit_price) = self.line(product).map(CartLine::unit_price) else {
            return Ok(());
        };

        if self
            .total_replacing(product, unit_price, replacement)
            .is_none()
        {
            return Err(CartError::InvalidQuantity(quantity));
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.product == product) {
            line.quantity = replacement;
        }

        Ok(())
    }

    /// Remove every line.
    pub fn empty(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product: ProductUuid) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product == product)
    }

    /// Sum of every line's subtotal, in minor currency units.
    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .fold(0_u64, |total, line| total.saturating_add(line.subtotal()))
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Read-only view for rendering.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self.lines.clone(),
            total: self.total(),
        }
    }

    /// The cart total if the line for `product` had the given price and
    /// quantity, or `None` if it would not fit in a `u64`.
    fn total_replacing(&self, product: ProductUuid, unit_price: u64, quantity: u32) -> Option<u64> {
        self.lines
            .iter()
            .filter(|line| line.product != product)
            .try_fold(line_total(unit_price, quantity)?, |total, line| {
                total.checked_add(line_total(line.unit_price, line.quantity)?)
            })
    }
}

impl TryFrom<Vec<CartLine>> for Cart {
    type Error = CartError;

    fn try_from(lines: Vec<CartLine>) -> Result<Self, Self::Error> {
        Self::from_lines(lines)
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}

/// Cart lines and their total, as handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub total: u64,
}

impl From<Cart> for CartSummary {
    fn from(cart: Cart) -> Self {
        let total = cart.total();

        Self {
            lines: cart.lines,
            total,
        }
    }
}

fn positive_quantity(quantity: i64) -> Result<u32, CartError> {
    u32::try_from(quantity)
        .ok()
        .filter(|quantity| *quantity > 0)
        .ok_or(CartError::InvalidQuantity(quantity))
}

fn line_total(unit_price: u64, quantity: u32) -> Option<u64> {
    u64::from(quantity).checked_mul(unit_price)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn snapshot(name: &str, unit_price: u64) -> ProductSnapshot {
        ProductSnapshot {
            display_name: name.to_string(),
            unit_price,
        }
    }

    fn quantities(cart: &Cart) -> Vec<(ProductUuid, u32)> {
        cart.lines()
            .iter()
            .map(|line| (line.product(), line.quantity()))
            .collect()
    }

    #[test]
    fn add_to_empty_cart_creates_line() -> TestResult {
        let sku1 = ProductUuid::new();
        let mut cart = Cart::new();

        cart.add(sku1, snapshot("SKU1", 500), 2)?;

        assert_eq!(cart.len(), 1);
        assert_eq!(quantities(&cart), vec![(sku1, 2)]);
        assert_eq!(cart.lines().first().map(CartLine::unit_price), Some(500));
        assert_eq!(cart.total(), 1000);

        Ok(())
    }

    #[test]
    fn add_existing_product_increments_quantity() -> TestResult {
        let sku1 = ProductUuid::new();
        let mut cart = Cart::new();

        cart.add(sku1, snapshot("SKU1", 500), 2)?;
        cart.add(sku1, snapshot("SKU1", 500), 3)?;

        assert_eq!(quantities(&cart), vec![(sku1, 5)], "expected a single line");

        Ok(())
    }

    #[test]
    fn add_existing_product_keeps_original_snapshot() -> TestResult {
        let sku1 = ProductUuid::new();
        let mut cart = Cart::new();

        cart.add(sku1, snapshot("Old name", 500), 1)?;
        cart.add(sku1, snapshot("New name", 900), 1)?;

        let line = cart.line(sku1).ok_or("line missing")?;

        assert_eq!(line.display_name(), "Old name");
        assert_eq!(line.unit_price(), 500);
        assert_eq!(cart.total(), 1000);

        Ok(())
    }

    #[test]
    fn add_preserves_insertion_order() -> TestResult {
        let (a, b, c) = (ProductUuid::new(), ProductUuid::new(), ProductUuid::new());
        let mut cart = Cart::new();

        cart.add(b, snapshot("B", 1), 1)?;
        cart.add(a, snapshot("A", 1), 1)?;
        cart.add(c, snapshot("C", 1), 1)?;
        cart.add(a, snapshot("A", 1), 1)?;

        assert_eq!(quantities(&cart), vec![(b, 1), (a, 2), (c, 1)]);

        Ok(())
    }

    #[test]
    fn add_rejects_non_positive_quantity() {
        let sku1 = ProductUuid::new();
        let mut cart = Cart::new();

        for quantity in [0, -1, i64::MIN] {
            let result = cart.add(sku1, snapshot("SKU1", 500), quantity);

            assert!(
                matches!(result, Err(CartError::InvalidQuantity(q)) if q == quantity),
                "expected InvalidQuantity for {quantity}, got {result:?}"
            );
        }

        assert!(cart.is_empty());
    }

    #[test]
    fn add_rejects_quantity_overflow_and_leaves_cart_unchanged() -> TestResult {
        let sku1 = ProductUuid::new();
        let mut cart = Cart::new();

        cart.add(sku1, snapshot("SKU1", 1), i64::from(u32::MAX))?;

        let before = cart.clone();
        let result = cart.add(sku1, snapshot("SKU1", 1), 1);

        assert!(matches!(result, Err(CartError::InvalidQuantity(1))));
        assert_eq!(cart, before);

        Ok(())
    }

    #[test]
    fn add_rejects_total_overflow_and_leaves_cart_unchanged() -> TestResult {
        let (a, b) = (ProductUuid::new(), ProductUuid::new());
        let mut cart = Cart::new();

        cart.add(a, snapshot("A", u64::MAX / 2), 2)?;

        let before = cart.clone();
        let result = cart.add(b, snapshot("B", 2), 1);

        assert!(matches!(result, Err(CartError::InvalidQuantity(1))));
        assert_eq!(cart, before);

        Ok(())
    }

    #[test]
    fn remove_drops_only_matching_line() -> TestResult {
        let (sku1, sku2) = (ProductUuid::new(), ProductUuid::new());
        let mut cart = Cart::new();

        cart.add(sku1, snapshot("SKU1", 500), 2)?;
        cart.add(sku2, snapshot("SKU2", 250), 1)?;

        assert!(cart.remove(sku1));
        assert_eq!(quantities(&cart), vec![(sku2, 1)]);

        let after_first = cart.clone();

        assert!(!cart.remove(sku1));
        assert_eq!(cart, after_first, "second remove should be a no-op");

        Ok(())
    }

    #[test]
    fn update_quantity_replaces_rather_than_increments() -> TestResult {
        let sku1 = ProductUuid::new();
        let mut cart = Cart::new();

        cart.add(sku1, snapshot("SKU1", 500), 2)?;
        cart.update_quantity(sku1, 7)?;

        assert_eq!(quantities(&cart), vec![(sku1, 7)]);
        assert_eq!(cart.total(), 3500);

        Ok(())
    }

    #[test]
    fn update_quantity_zero_matches_remove() -> TestResult {
        let (sku1, sku2) = (ProductUuid::new(), ProductUuid::new());
        let mut cart = Cart::new();

        cart.add(sku1, snapshot("SKU1", 500), 2)?;
        cart.add(sku2, snapshot("SKU2", 250), 1)?;

        let mut removed = cart.clone();
        removed.remove(sku1);

        cart.update_quantity(sku1, 0)?;

        assert_eq!(cart, removed);

        Ok(())
    }

    #[test]
    fn update_quantity_negative_is_rejected() -> TestResult {
        let sku1 = ProductUuid::new();
        let mut cart = Cart::new();

        cart.add(sku1, snapshot("SKU1", 500), 2)?;

        let before = cart.clone();
        let result = cart.update_quantity(sku1, -3);

        assert!(matches!(result, Err(CartError::InvalidQuantity(-3))));
        assert_eq!(cart, before);

        Ok(())
    }

    #[test]
    fn update_quantity_for_absent_product_is_noop() -> TestResult {
        let mut cart = Cart::new();

        cart.update_quantity(ProductUuid::new(), 4)?;

        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn update_quantity_above_u32_is_rejected() -> TestResult {
        let sku1 = ProductUuid::new();
        let mut cart = Cart::new();

        cart.add(sku1, snapshot("SKU1", 1), 1)?;

        let result = cart.update_quantity(sku1, i64::from(u32::MAX) + 1);

        assert!(matches!(result, Err(CartError::InvalidQuantity(_))));
        assert_eq!(quantities(&cart), vec![(sku1, 1)]);

        Ok(())
    }

    #[test]
    fn empty_clears_all_lines() -> TestResult {
        let mut cart = Cart::new();

        cart.add(ProductUuid::new(), snapshot("A", 100), 1)?;
        cart.add(ProductUuid::new(), snapshot("B", 200), 3)?;
        cart.empty();

        assert!(cart.lines().is_empty());
        assert_eq!(cart.total(), 0);

        Ok(())
    }

    #[test]
    fn item_count_sums_quantities() -> TestResult {
        let mut cart = Cart::new();

        cart.add(ProductUuid::new(), snapshot("A", 100), 2)?;
        cart.add(ProductUuid::new(), snapshot("B", 200), 3)?;

        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.len(), 2);

        Ok(())
    }

    #[test]
    fn summary_matches_lines_and_total() -> TestResult {
        let mut cart = Cart::new();

        cart.add(ProductUuid::new(), snapshot("A", 125), 4)?;

        let summary = cart.summary();

        assert_eq!(summary.lines, cart.lines());
        assert_eq!(summary.total, 500);
        assert_eq!(CartSummary::from(cart), summary);

        Ok(())
    }

    #[test]
    fn from_lines_rejects_duplicates() -> TestResult {
        let sku1 = ProductUuid::new();

        let lines = [
            CartLine::new(sku1, snapshot("SKU1", 100), 1)?,
            CartLine::new(sku1, snapshot("SKU1", 100), 2)?,
        ];

        let result = Cart::from_lines(lines);

        assert!(
            matches!(result, Err(CartError::DuplicateLine(product)) if product == sku1),
            "expected DuplicateLine, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn deserializing_rejects_zero_quantity() {
        let json = format!(
            r#"[{{"product":"{}","display_name":"SKU1","unit_price":100,"quantity":0}}]"#,
            ProductUuid::new()
        );

        let result = serde_json::from_str::<Cart>(&json);

        assert!(result.is_err(), "zero quantity must not deserialize");
    }

    #[test]
    fn serializes_as_plain_line_list() -> TestResult {
        let sku1 = ProductUuid::new();
        let mut cart = Cart::new();

        cart.add(sku1, snapshot("SKU1", 500), 2)?;

        let value = serde_json::to_value(&cart)?;

        assert_eq!(
            value,
            serde_json::json!([{
                "product": sku1.to_string(),
                "display_name": "SKU1",
                "unit_price": 500,
                "quantity": 2,
            }])
        );

        let restored: Cart = serde_json::from_value(value)?;

        assert_eq!(restored, cart);

        Ok(())
    }
}
