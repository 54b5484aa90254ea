//! Projects a cart snapshot into the page chrome.

use crate::{
    escape::html_escape_into,
    models::{CartLine, CartSnapshot},
    page::{Badge, CartRow, DrawerBody, EMPTY_CART_NOTICE, StorefrontPage},
};

/// Full re-render from a fresh snapshot. Idempotent: the same snapshot always
/// produces the same page state, however many times it is applied. Rows are
/// keyed and replaced wholesale; there is no diffing.
pub fn render(page: &mut StorefrontPage, cart: &CartSnapshot) {
    page.badge = if cart.count > 0 {
        Badge {
            visible: true,
            text: cart.count.to_string(),
        }
    } else {
        Badge::default()
    };

    page.subtotal = cart.subtotal.clone();
    page.shipping = cart.shipping.clone();
    page.total = cart.total.clone();
    page.free_shipping_over = cart.free_shipping_over.clone();

    if cart.items.is_empty() {
        page.body = DrawerBody::Empty {
            notice: EMPTY_CART_NOTICE.to_string(),
        };
        return;
    }

    let rows = cart
        .items
        .iter()
        .map(|line| CartRow {
            key: line.key.clone(),
            quantity: line.quantity,
            markup: line_markup(line),
        })
        .collect();
    page.body = DrawerBody::Rows(rows);
}

/// Markup for one drawer row. Every user-influenced field goes through the
/// HTML escaper before interpolation; a size is appended as a parenthetical.
fn line_markup(line: &CartLine) -> String {
    let mut out = String::with_capacity(160);
    if let Some(url) = &line.image_url {
        out.push_str("<img class=\"cart-item-img\" src=\"");
        html_escape_into(&mut out, url);
        out.push_str("\" alt=\"\">");
    }
    out.push_str("<span class=\"cart-item-name\">");
    html_escape_into(&mut out, &line.name);
    if let Some(size) = &line.size {
        out.push_str(" (");
        html_escape_into(&mut out, size);
        out.push(')');
    }
    out.push_str("</span><span class=\"cart-item-unit\">");
    html_escape_into(&mut out, &line.unit_price);
    out.push_str("</span><span class=\"cart-item-total\">");
    html_escape_into(&mut out, &line.line_total);
    out.push_str("</span>");
    out
}
