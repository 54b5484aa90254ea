use std::{env, time::Duration};

const DEFAULT_HTTP_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_TOAST_DISMISS_MS: u64 = 3_200;

#[derive(Debug, Clone)]
pub struct DrawerConfig {
    pub base_url: String,
    pub http_timeout: Duration,
    pub toast_dismiss: Duration,
}

impl DrawerConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http_timeout: Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS),
            toast_dismiss: Duration::from_millis(DEFAULT_TOAST_DISMISS_MS),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = env::var("CART_API_BASE_URL")?;
        let http_timeout = env::var("CART_HTTP_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS));
        let toast_dismiss = env::var("CART_TOAST_DISMISS_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(DEFAULT_TOAST_DISMISS_MS));
        Ok(Self {
            base_url,
            http_timeout,
            toast_dismiss,
        })
    }
}
