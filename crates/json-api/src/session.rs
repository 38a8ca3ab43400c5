//! Cart session cookie middleware.
//!
//! Each browser is identified by an opaque cart context kept in a cookie.
//! Handlers read the context from the depot and pass it to the cart service
//! explicitly.

use salvo::{
    http::cookie::{Cookie, SameSite},
    prelude::*,
};
use tracing::debug;

use storefront_app::domain::carts::models::CartContextUuid;

use crate::extensions::*;

pub(crate) const CART_COOKIE: &str = "storefront_cart";

#[handler]
pub(crate) async fn cart_session(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let existing = req
        .cookie(CART_COOKIE)
        .and_then(|cookie| cookie.value().parse::<CartContextUuid>().ok());

    let context = existing.unwrap_or_else(|| {
        let context = CartContextUuid::new();

        res.add_cookie(session_cookie(context));

        debug!(cart_context = %context, "issued cart session");

        context
    });

    depot.insert_cart_context(context);

    ctrl.call_next(req, depot, res).await;
}

fn session_cookie(context: CartContextUuid) -> Cookie<'static> {
    Cookie::build((CART_COOKIE, context.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
