use storefront_cart_drawer::{CartApi, DrawerConfig, HttpTransport};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Operational smoke check: fetches the live cart once and logs what the
// drawer would render. Needs CART_API_BASE_URL in the environment.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storefront_cart_drawer=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DrawerConfig::from_env()?;
    let api = CartApi::new(HttpTransport::new(&config)?);

    let cart = api.fetch_cart().await?;
    tracing::info!(
        count = cart.count,
        subtotal = %cart.subtotal,
        shipping = %cart.shipping,
        total = %cart.total,
        "cart fetched"
    );
    for line in &cart.items {
        tracing::info!(
            key = %line.key,
            name = %line.name,
            qty = line.quantity,
            line_total = %line.line_total,
            "cart line"
        );
    }

    Ok(())
}
