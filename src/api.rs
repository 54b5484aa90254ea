use crate::{
    config::DrawerConfig,
    dto::cart::{AddReply, CartPayload, MutateReply},
    error::{CartError, CartResult, TransportError},
    models::CartSnapshot,
};

/// Raw reply from the cart service before any per-operation decoding.
#[derive(Debug, Clone)]
pub struct RawReply {
    pub status: u16,
    pub body: String,
}

/// Seam between the cart client and the HTTP stack; tests script it with a
/// canned implementation.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, path: &str) -> Result<RawReply, TransportError>;
    async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<RawReply, TransportError>;
}

/// Shared-ownership transport: delegate through an `Arc` so a single
/// transport can be handed to a [`CartApi`] while callers retain a handle.
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn get(&self, path: &str) -> Result<RawReply, TransportError> {
        (**self).get(path).await
    }

    async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<RawReply, TransportError> {
        (**self).post(path, body).await
    }
}

/// Production transport: JSON over HTTP against the storefront backend.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &DrawerConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<RawReply, TransportError> {
        let response = self.client.get(self.url(path)).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawReply { status, body })
    }

    async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<RawReply, TransportError> {
        let response = self.client.post(self.url(path)).json(&body).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawReply { status, body })
    }
}

/// How the server answered an add attempt.
#[derive(Debug, Clone)]
pub enum AddOutcome {
    /// Line accepted; the reply carries the fresh snapshot.
    Added {
        cart: CartSnapshot,
        message: Option<String>,
    },
    /// The variant needs a size before it can go in.
    SizeRequired { sizes: Vec<String> },
    /// Business rejection (out of stock, unknown product) or an unreadable reply.
    Failed { message: Option<String> },
}

/// Client for the four cart operations plus clear. One-shot calls only: no
/// retry, no backoff, no cache beyond the snapshot handed to the caller.
pub struct CartApi<T> {
    transport: T,
}

impl<T: Transport> CartApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// `GET /api/cart`. Unlike the mutation replies, an unreadable body is an
    /// error here: there is no cart to fall back on.
    pub async fn fetch_cart(&self) -> CartResult<CartSnapshot> {
        let reply = self.transport.get("/api/cart").await?;
        let payload: CartPayload = serde_json::from_str(&reply.body)?;
        Ok(payload.into())
    }

    /// `POST /api/cart/add`. A readable-but-negative reply is not an error;
    /// the outcome enum carries the branch the session acts on. An unreadable
    /// body degrades to [`AddOutcome::Failed`] with no message.
    pub async fn add_item(
        &self,
        product_id: i64,
        qty: u32,
        size: &str,
    ) -> Result<AddOutcome, TransportError> {
        let body = serde_json::json!({ "product_id": product_id, "qty": qty, "size": size });
        let reply = self.transport.post("/api/cart/add", body).await?;

        let parsed: AddReply = match serde_json::from_str(&reply.body) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(status = reply.status, error = %err, "unreadable add reply");
                AddReply::default()
            }
        };

        if parsed.need_size && !parsed.sizes.is_empty() {
            return Ok(AddOutcome::SizeRequired {
                sizes: parsed.sizes,
            });
        }
        if parsed.ok {
            if let Some(cart) = parsed.cart {
                return Ok(AddOutcome::Added {
                    cart: cart.into(),
                    message: parsed.message,
                });
            }
            tracing::warn!("add reply claimed success without a cart payload");
        }
        Ok(AddOutcome::Failed {
            message: parsed.error,
        })
    }

    /// `POST /api/cart/update`. Quantity 0 is removal; the server decides the
    /// resulting line set either way.
    pub async fn update_quantity(&self, key: &str, qty: u32) -> CartResult<CartSnapshot> {
        let body = serde_json::json!({ "key": key, "qty": qty });
        let reply = self.transport.post("/api/cart/update", body).await?;
        Self::mutation_snapshot(reply)
    }

    /// `POST /api/cart/remove`.
    pub async fn remove_item(&self, key: &str) -> CartResult<CartSnapshot> {
        let body = serde_json::json!({ "key": key });
        let reply = self.transport.post("/api/cart/remove", body).await?;
        Self::mutation_snapshot(reply)
    }

    /// `POST /api/cart/clear`: empties the cart in one call.
    pub async fn clear(&self) -> CartResult<CartSnapshot> {
        let reply = self
            .transport
            .post("/api/cart/clear", serde_json::json!({}))
            .await?;
        Self::mutation_snapshot(reply)
    }

    fn mutation_snapshot(reply: RawReply) -> CartResult<CartSnapshot> {
        let parsed: MutateReply = serde_json::from_str(&reply.body)?;
        if parsed.ok {
            if let Some(cart) = parsed.cart {
                return Ok(cart.into());
            }
        }
        match parsed.error {
            Some(message) => Err(CartError::Rejected(message)),
            None => Err(CartError::Incomplete),
        }
    }
}
