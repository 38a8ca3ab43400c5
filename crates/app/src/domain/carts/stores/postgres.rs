//! Postgres Cart Store

use async_trait::async_trait;
use sqlx::{FromRow, Postgres, Row, postgres::PgRow, query, query_as};
use tracing::debug;
use uuid::Uuid;

use crate::{
    database::{Db, try_get_amount},
    domain::{
        carts::{
            lookup::ProductSnapshot,
            models::{Cart, CartContextUuid, CartLine},
            store::{CartStore, CartStoreError},
        },
        products::records::ProductUuid,
    },
};

const GET_CART_LINES_SQL: &str = include_str!("../sql/get_cart_lines.sql");
const UPSERT_CART_SQL: &str = include_str!("../sql/upsert_cart.sql");
const DELETE_CART_SQL: &str = include_str!("../sql/delete_cart.sql");
const DELETE_CART_LINES_SQL: &str = include_str!("../sql/delete_cart_lines.sql");
const INSERT_CART_LINES_SQL: &str = include_str!("../sql/insert_cart_lines.sql");

/// Carts that outlive the session, one row set per customer context.
#[derive(Debug, Clone)]
pub struct PgCartStore {
    db: Db,
}

impl PgCartStore {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

/// Column-wise form of a cart, bound as Postgres arrays.
#[derive(Debug, Default)]
struct LineColumns {
    products: Vec<Uuid>,
    positions: Vec<i32>,
    display_names: Vec<String>,
    unit_prices: Vec<i64>,
    quantities: Vec<i64>,
}

impl TryFrom<Cart> for LineColumns {
    type Error = CartStoreError;

    fn try_from(cart: Cart) -> Result<Self, Self::Error> {
        let mut columns = Self::default();

        for (position, line) in cart.lines().iter().enumerate() {
            columns.products.push(line.product().into_uuid());
            columns.positions.push(i32::try_from(position)?);
            columns.display_names.push(line.display_name().to_string());
            columns.unit_prices.push(i64::try_from(line.unit_price())?);
            columns.quantities.push(i64::from(line.quantity()));
        }

        Ok(columns)
    }
}

#[async_trait]
impl CartStore for PgCartStore {
    async fn load(&self, context: CartContextUuid) -> Result<Cart, CartStoreError> {
        let mut tx = self.db.begin().await?;

        let lines = query_as::<Postgres, CartLine>(GET_CART_LINES_SQL)
            .bind(context.into_uuid())
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Cart::from_lines(lines)?)
    }

    async fn save(&self, context: CartContextUuid, cart: Cart) -> Result<(), CartStoreError> {
        let mut tx = self.db.begin().await?;

        if cart.is_empty() {
            query(DELETE_CART_SQL)
                .bind(context.into_uuid())
                .execute(&mut *tx)
                .await?;

            tx.commit().await?;

            debug!(cart_context = %context, "deleted stored cart");

            return Ok(());
        }

        let line_count = cart.len();
        let columns = LineColumns::try_from(cart)?;

        query(UPSERT_CART_SQL)
            .bind(context.into_uuid())
            .execute(&mut *tx)
            .await?;

        query(DELETE_CART_LINES_SQL)
            .bind(context.into_uuid())
            .execute(&mut *tx)
            .await?;

        query(INSERT_CART_LINES_SQL)
            .bind(context.into_uuid())
            .bind(columns.products)
            .bind(columns.positions)
            .bind(columns.display_names)
            .bind(columns.unit_prices)
            .bind(columns.quantities)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(cart_context = %context, line_count, "saved cart");

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for CartLine {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let snapshot = ProductSnapshot {
            display_name: row.try_get("display_name")?,
            unit_price: try_get_amount(row, "unit_price")?,
        };

        CartLine::new(
            ProductUuid::from_uuid(row.try_get("product_uuid")?),
            snapshot,
            row.try_get("quantity")?,
        )
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })
    }
}
