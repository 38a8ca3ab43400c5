//! Property tests for cart arithmetic and idempotence.

use proptest::prelude::*;
use storefront_app::domain::{
    carts::{CartError, ProductSnapshot, models::Cart},
    products::records::ProductUuid,
};
use uuid::Uuid;

fn product(n: u8) -> ProductUuid {
    ProductUuid::from_uuid(Uuid::from_u128(u128::from(n) + 1))
}

fn snapshot(n: u8) -> ProductSnapshot {
    ProductSnapshot {
        display_name: format!("SKU{n}"),
        unit_price: u64::from(n) * 125 + 99,
    }
}

/// `(product index, quantity)` pairs drawn from a small catalog so lines collide.
fn additions() -> impl Strategy<Value = Vec<(u8, i64)>> {
    prop::collection::vec((0_u8..5, 1_i64..1_000), 0..24)
}

fn cart_from(additions: &[(u8, i64)]) -> Result<Cart, CartError> {
    let mut cart = Cart::new();

    for &(n, quantity) in additions {
        cart.add(product(n), snapshot(n), quantity)?;
    }

    Ok(cart)
}

proptest! {
    #[test]
    fn repeated_adds_sum_quantities(quantities in prop::collection::vec(1_i64..10_000, 1..16)) {
        let mut cart = Cart::new();

        for &quantity in &quantities {
            cart.add(product(0), snapshot(0), quantity)?;
        }

        let expected: i64 = quantities.iter().sum();

        prop_assert_eq!(cart.len(), 1);
        prop_assert_eq!(cart.line(product(0)).map(|line| i64::from(line.quantity())), Some(expected));
    }

    #[test]
    fn add_order_does_not_change_quantities(additions in additions()) {
        let forward = cart_from(&additions)?;

        let mut reversed = additions.clone();
        reversed.reverse();
        let backward = cart_from(&reversed)?;

        for n in 0..5 {
            prop_assert_eq!(
                forward.line(product(n)).map(|line| line.quantity()),
                backward.line(product(n)).map(|line| line.quantity())
            );
        }
        prop_assert_eq!(forward.total(), backward.total());
    }

    #[test]
    fn remove_is_idempotent(additions in additions(), target in 0_u8..5) {
        let mut once = cart_from(&additions)?;
        once.remove(product(target));

        let mut twice = once.clone();
        twice.remove(product(target));

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn update_to_zero_matches_remove(additions in additions(), target in 0_u8..5) {
        let mut updated = cart_from(&additions)?;
        updated.update_quantity(product(target), 0)?;

        let mut removed = cart_from(&additions)?;
        removed.remove(product(target));

        prop_assert_eq!(updated, removed);
    }

    #[test]
    fn total_is_sum_of_line_subtotals(additions in additions()) {
        let cart = cart_from(&additions)?;

        let expected: u128 = additions
            .iter()
            .map(|&(n, quantity)| {
                u128::from(snapshot(n).unit_price) * u128::try_from(quantity).unwrap_or_default()
            })
            .sum();

        prop_assert_eq!(u128::from(cart.total()), expected);
    }

    #[test]
    fn empty_always_clears(additions in additions()) {
        let mut cart = cart_from(&additions)?;

        cart.empty();

        prop_assert!(cart.lines().is_empty());
        prop_assert_eq!(cart.total(), 0);
    }

    #[test]
    fn invalid_quantities_leave_cart_unchanged(
        additions in additions(),
        target in 0_u8..5,
        quantity in i64::MIN..1,
    ) {
        let before = cart_from(&additions)?;

        let mut after = before.clone();
        let added = after.add(product(target), snapshot(target), quantity);

        prop_assert!(matches!(added, Err(CartError::InvalidQuantity(q)) if q == quantity));
        prop_assert_eq!(&after, &before);

        if quantity < 0 {
            let updated = after.update_quantity(product(target), quantity);

            prop_assert!(matches!(updated, Err(CartError::InvalidQuantity(_))));
            prop_assert_eq!(&after, &before);
        }
    }
}
