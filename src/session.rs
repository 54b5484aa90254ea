//! Top-level drawer controller: open/close lifecycle, toast notices, and the
//! add-to-cart decision flow tying the API client, renderer and size dialog
//! together.

use std::{collections::HashSet, sync::Arc, time::Duration};

use tokio::{sync::Mutex, task::JoinHandle, time};
use tracing::{debug, warn};

use crate::{
    api::{AddOutcome, CartApi, Transport},
    config::DrawerConfig,
    error::CartError,
    models::{AddDisplay, CartSnapshot, MAX_LINE_QUANTITY, PendingAdd},
    page::{StorefrontPage, Toast, ToastKind},
    render::render,
};

const MSG_ADDED: &str = "Adicionado ao carrinho!";
const MSG_GENERIC_FAILURE: &str = "Não foi possível concluir. Tente novamente.";
const MSG_PICK_A_SIZE: &str = "Escolha um tamanho.";
const MSG_SELECTION_PENDING: &str = "Finalize a seleção de tamanho em andamento.";

/// The three controls rebound on every rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Decrement,
    Increment,
    Remove,
}

/// One session per storefront page. Hosts call the async methods from their
/// event handlers and sync [`StorefrontPage`] to the DOM after each one; all
/// failures are converted to a toast here and none escape.
pub struct DrawerSession<T> {
    api: CartApi<T>,
    page: Arc<Mutex<StorefrontPage>>,
    pending: Mutex<Option<PendingAdd>>,
    inflight_keys: Mutex<HashSet<String>>,
    toast_timer: Mutex<Option<JoinHandle<()>>>,
    toast_dismiss: Duration,
}

impl<T: Transport> DrawerSession<T> {
    pub fn new(api: CartApi<T>, config: &DrawerConfig) -> Self {
        Self {
            api,
            page: Arc::new(Mutex::new(StorefrontPage::default())),
            pending: Mutex::new(None),
            inflight_keys: Mutex::new(HashSet::new()),
            toast_timer: Mutex::new(None),
            toast_dismiss: config.toast_dismiss,
        }
    }

    /// Current page projection for the host to sync.
    pub async fn page(&self) -> StorefrontPage {
        self.page.lock().await.clone()
    }

    /// Opening through the cart trigger always re-fetches, so the drawer
    /// never shows a snapshot from a previous page load.
    pub async fn open_drawer(&self) {
        match self.api.fetch_cart().await {
            Ok(cart) => {
                let mut page = self.page.lock().await;
                render(&mut page, &cart);
                page.drawer_open = true;
            }
            Err(err) => {
                warn!(error = %err, "cart fetch failed");
                self.show_toast(ToastKind::Error, MSG_GENERIC_FAILURE).await;
            }
        }
    }

    /// Pure visibility toggle; no network on close.
    pub async fn close_drawer(&self) {
        self.page.lock().await.drawer_open = false;
    }

    /// Entry point the product page calls; runs the full add protocol. The
    /// first attempt goes out without a size; if the server demands one, the
    /// attempt is parked and the size dialog opens over `display`'s info.
    pub async fn add_to_cart(&self, product_id: i64, quantity: u32, display: AddDisplay) {
        let selection_pending = self.pending.lock().await.is_some();
        if selection_pending {
            debug!(product_id, "add attempted while a size selection is pending");
            self.show_toast(ToastKind::Error, MSG_SELECTION_PENDING).await;
            return;
        }

        match self.api.add_item(product_id, quantity, "").await {
            Ok(AddOutcome::Added { cart, message }) => self.finish_add(&cart, message).await,
            Ok(AddOutcome::SizeRequired { sizes }) => {
                *self.pending.lock().await = Some(PendingAdd {
                    product_id,
                    quantity,
                    title: display.title.clone(),
                    price: display.price.clone(),
                });
                let mut page = self.page.lock().await;
                page.dialog.open_with(&display.title, &display.price, sizes);
            }
            Ok(AddOutcome::Failed { message }) => {
                self.show_toast(
                    ToastKind::Error,
                    message.as_deref().unwrap_or(MSG_GENERIC_FAILURE),
                )
                .await;
            }
            Err(err) => {
                warn!(error = %err, product_id, "add request failed");
                self.show_toast(ToastKind::Error, MSG_GENERIC_FAILURE).await;
            }
        }
    }

    /// Marks one dialog option as the exclusive selection.
    pub async fn choose_size(&self, option: &str) {
        self.page.lock().await.dialog.select(option);
    }

    /// Confirms the dialog. Without a selection this only shows a notice and
    /// keeps the dialog open; with one, the parked add is retried with the
    /// chosen size.
    pub async fn confirm_size(&self) {
        let choice = {
            let page = self.page.lock().await;
            if !page.dialog.is_open() {
                return;
            }
            page.dialog.selected_size().map(str::to_string)
        };
        let Some(size) = choice else {
            self.show_toast(ToastKind::Error, MSG_PICK_A_SIZE).await;
            return;
        };

        let pending = self.pending.lock().await.take();
        self.page.lock().await.dialog.close();
        let Some(pending) = pending else {
            debug!("size confirmed with nothing parked");
            return;
        };

        match self
            .api
            .add_item(pending.product_id, pending.quantity, &size)
            .await
        {
            Ok(AddOutcome::Added { cart, message }) => self.finish_add(&cart, message).await,
            Ok(AddOutcome::SizeRequired { .. }) => {
                // the choice came from the server's own list; a second demand
                // means the catalog changed underneath us
                warn!(product_id = pending.product_id, "size demanded again after one was chosen");
                self.show_toast(ToastKind::Error, MSG_GENERIC_FAILURE).await;
            }
            Ok(AddOutcome::Failed { message }) => {
                self.show_toast(
                    ToastKind::Error,
                    message.as_deref().unwrap_or(MSG_GENERIC_FAILURE),
                )
                .await;
            }
            Err(err) => {
                warn!(error = %err, product_id = pending.product_id, "retried add failed");
                self.show_toast(ToastKind::Error, MSG_GENERIC_FAILURE).await;
            }
        }
    }

    /// Backdrop or close button: drop the dialog and the parked add, no retry.
    pub async fn dismiss_size_dialog(&self) {
        self.pending.lock().await.take();
        self.page.lock().await.dialog.close();
    }

    /// Handler for the three per-row controls. Reads the quantity the row
    /// currently displays, never a value captured when the row was built;
    /// renders replace rows wholesale, so either the row exists with a
    /// current value or the action is stale and dropped.
    pub async fn row_action(&self, key: &str, action: RowAction) {
        let shown = self.page.lock().await.displayed_quantity(key);
        let Some(shown) = shown else {
            debug!(key, "row action on a key no longer displayed");
            return;
        };

        // one in-flight mutation per key; extra clicks drop until it lands
        {
            let mut inflight = self.inflight_keys.lock().await;
            if !inflight.insert(key.to_string()) {
                debug!(key, "mutation already in flight for this row");
                return;
            }
        }

        let result = match action {
            RowAction::Decrement => self.api.update_quantity(key, shown.saturating_sub(1)).await,
            RowAction::Increment => {
                self.api
                    .update_quantity(key, (shown + 1).min(MAX_LINE_QUANTITY))
                    .await
            }
            RowAction::Remove => self.api.remove_item(key).await,
        };

        self.inflight_keys.lock().await.remove(key);

        match result {
            Ok(cart) => {
                let mut page = self.page.lock().await;
                render(&mut page, &cart);
            }
            Err(err) => self.report_cart_error(err, "row mutation failed").await,
        }
    }

    /// Empties the cart in one call and re-renders the empty drawer.
    pub async fn clear_cart(&self) {
        match self.api.clear().await {
            Ok(cart) => {
                let mut page = self.page.lock().await;
                render(&mut page, &cart);
            }
            Err(err) => self.report_cart_error(err, "cart clear failed").await,
        }
    }

    async fn finish_add(&self, cart: &CartSnapshot, message: Option<String>) {
        {
            let mut page = self.page.lock().await;
            render(&mut page, cart);
            page.drawer_open = true;
        }
        self.show_toast(
            ToastKind::Success,
            message.as_deref().unwrap_or(MSG_ADDED),
        )
        .await;
    }

    async fn report_cart_error(&self, err: CartError, context: &'static str) {
        warn!(error = %err, "{}", context);
        let message = match err {
            CartError::Rejected(message) => message,
            _ => MSG_GENERIC_FAILURE.to_string(),
        };
        self.show_toast(ToastKind::Error, &message).await;
    }

    /// Shows a transient notice and (re)schedules its dismissal. A new toast
    /// replaces the text and cancels the previous timer, so it always gets
    /// the full display window.
    async fn show_toast(&self, kind: ToastKind, message: &str) {
        let mut timer = self.toast_timer.lock().await;
        if let Some(handle) = timer.take() {
            handle.abort();
        }

        self.page.lock().await.toast = Some(Toast {
            kind,
            message: message.to_string(),
        });

        let page = Arc::clone(&self.page);
        let dismiss_after = self.toast_dismiss;
        *timer = Some(tokio::spawn(async move {
            time::sleep(dismiss_after).await;
            page.lock().await.toast = None;
        }));
    }
}
