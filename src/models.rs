use crate::dto::cart::{CartLinePayload, CartPayload};

/// UI guardrail for line quantities; the server clamps on its own.
pub const MAX_LINE_QUANTITY: u32 = 99;

/// Complete server-issued cart state. Every mutation replaces the previous
/// snapshot wholesale; the client never patches one locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshot {
    pub count: u32,
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
    pub free_shipping_over: Option<String>,
    pub items: Vec<CartLine>,
}

/// One cart entry. `key` is the server's opaque identifier and distinguishes
/// product+size combinations, so the same product in two sizes is two lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub key: String,
    pub product_id: i64,
    pub name: String,
    pub size: Option<String>,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
    pub image_url: Option<String>,
}

/// Display info the product page already has on hand; shown verbatim in the
/// size dialog header.
#[derive(Debug, Clone)]
pub struct AddDisplay {
    pub title: String,
    pub price: String,
}

/// Add attempt parked while the size dialog collects a choice.
#[derive(Debug, Clone)]
pub struct PendingAdd {
    pub product_id: i64,
    pub quantity: u32,
    pub title: String,
    pub price: String,
}

impl From<CartPayload> for CartSnapshot {
    fn from(payload: CartPayload) -> Self {
        Self {
            count: payload.count,
            subtotal: payload.subtotal_brl,
            shipping: payload.shipping_brl,
            total: payload.total_brl,
            free_shipping_over: payload.free_over_brl,
            items: payload.items.into_iter().map(CartLine::from).collect(),
        }
    }
}

impl From<CartLinePayload> for CartLine {
    fn from(payload: CartLinePayload) -> Self {
        Self {
            key: payload.key,
            product_id: payload.product_id,
            name: payload.name,
            size: non_empty(payload.size),
            quantity: payload.qty,
            unit_price: payload.unit_price_brl,
            line_total: payload.line_total_brl,
            image_url: non_empty(payload.image_url),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
