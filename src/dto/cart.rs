use serde::Deserialize;

/// Full cart payload as served by `GET /api/cart` and embedded in every
/// mutation reply. Optional fields default so a sparse reply still decodes.
#[derive(Debug, Clone, Deserialize)]
pub struct CartPayload {
    pub count: u32,
    pub subtotal_brl: String,
    #[serde(default)]
    pub shipping_brl: String,
    pub total_brl: String,
    #[serde(default)]
    pub free_over_brl: Option<String>,
    #[serde(default)]
    pub items: Vec<CartLinePayload>,
}

/// One cart line on the wire. The server sends empty strings, not nulls,
/// for a missing size or image.
#[derive(Debug, Clone, Deserialize)]
pub struct CartLinePayload {
    pub key: String,
    #[serde(default)]
    pub product_id: i64,
    pub name: String,
    #[serde(default)]
    pub size: String,
    pub qty: u32,
    pub unit_price_brl: String,
    pub line_total_brl: String,
    #[serde(default)]
    pub image_url: String,
}

/// Reply to `POST /api/cart/add`. One permissive shape covers the success,
/// size-required and rejection variants; `Default` is the all-negative reply
/// the client falls back to when the body cannot be read.
#[derive(Debug, Default, Deserialize)]
pub struct AddReply {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub cart: Option<CartPayload>,
    #[serde(default)]
    pub need_size: bool,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Reply to the update/remove/clear mutations.
#[derive(Debug, Default, Deserialize)]
pub struct MutateReply {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub cart: Option<CartPayload>,
    #[serde(default)]
    pub error: Option<String>,
}
