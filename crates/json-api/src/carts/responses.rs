//! Cart response bodies.

use rusty_money::iso::Currency;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::carts::models::{Cart, CartLine, CartSummary};

use crate::money::format_minor;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// Product the line is for
    pub product: Uuid,

    /// Product name as it was when first added
    pub display_name: String,

    /// Price of one unit in minor units, frozen when first added
    pub unit_price: u64,

    pub quantity: u32,

    /// `unit_price × quantity`
    pub subtotal: u64,
}

impl From<&CartLine> for CartLineResponse {
    fn from(line: &CartLine) -> Self {
        Self {
            product: line.product().into_uuid(),
            display_name: line.display_name().to_string(),
            unit_price: line.unit_price(),
            quantity: line.quantity(),
            subtotal: line.subtotal(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Lines in the order they were first added
    pub lines: Vec<CartLineResponse>,

    /// Sum of line subtotals in minor units
    pub total: u64,

    /// `total` rendered in the store currency
    pub total_formatted: String,

    /// Units across every line
    pub item_count: u64,
}

impl CartResponse {
    pub(crate) fn new(lines: &[CartLine], total: u64, currency: &'static Currency) -> Self {
        Self {
            lines: lines.iter().map(Into::into).collect(),
            total,
            total_formatted: format_minor(total, currency),
            item_count: lines.iter().map(|line| u64::from(line.quantity())).sum(),
        }
    }

    pub(crate) fn from_cart(cart: &Cart, currency: &'static Currency) -> Self {
        Self::new(cart.lines(), cart.total(), currency)
    }

    pub(crate) fn from_summary(summary: &CartSummary, currency: &'static Currency) -> Self {
        Self::new(&summary.lines, summary.total, currency)
    }
}
