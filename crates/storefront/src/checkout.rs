//! Checkout handoff.
//!
//! The cart is handed read-only to a [`CheckoutBackend`], which turns its
//! (variant, quantity) pairs into a checkout session. [`CheckoutButton`] is
//! the control that starts it: it disables itself while the request is in
//! flight, so a second click is ignored rather than starting a second
//! session, and it re-enables itself when the request finishes either way.

use std::cell::{Cell, RefCell};
use std::future::Future;

use tracing::instrument;
use url::Url;

use crate::cart::{CartStorage, CartStore};
use crate::error::{AppError, report};
use crate::shopify::{CheckoutLine, CheckoutSession, ShopifyError};

/// Notice shown when checkout is attempted with nothing in the cart.
pub const EMPTY_CART_NOTICE: &str = "Your cart is empty";

/// Something that can turn checkout lines into a checkout session.
pub trait CheckoutBackend {
    /// Request a checkout session for `lines`.
    fn create_checkout(
        &self,
        lines: &[CheckoutLine],
    ) -> impl Future<Output = Result<CheckoutSession, ShopifyError>>;
}

/// A dismissable message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of pressing the checkout button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Navigate here to pay.
    Redirect(Url),
    /// Checkout did not start; the cart is unchanged.
    Failed(Notice),
    /// A request was already in flight.
    Ignored,
}

/// Visible state of the checkout control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Idle,
    /// Disabled with a loading indicator.
    Pending,
}

/// The checkout control.
#[derive(Debug, Default)]
pub struct CheckoutButton {
    state: Cell<ButtonState>,
    notice: RefCell<Option<Notice>>,
}

/// Re-enables the button when dropped, including when the submit future is
/// dropped mid-request.
struct PendingGuard<'a>(&'a Cell<ButtonState>);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(ButtonState::Idle);
    }
}

impl CheckoutButton {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ButtonState {
        self.state.get()
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.state.get() == ButtonState::Pending
    }

    /// The notice from the last failed attempt, if not dismissed.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.notice.borrow().clone()
    }

    pub fn dismiss_notice(&self) {
        self.notice.replace(None);
    }

    /// Start checkout for the current cart contents.
    ///
    /// The cart is only read. On failure the error is reported, a notice is
    /// stored on the button, and the button is re-enabled so the user can
    /// retry.
    #[instrument(skip_all, fields(lines = cart.len()))]
    pub async fn submit<S, B>(&self, cart: &CartStore<S>, backend: &B) -> CheckoutOutcome
    where
        S: CartStorage,
        B: CheckoutBackend,
    {
        if self.is_disabled() {
            tracing::debug!("Checkout already pending, ignoring click");
            return CheckoutOutcome::Ignored;
        }

        self.dismiss_notice();

        if cart.is_empty() {
            return self.fail(Notice::new(EMPTY_CART_NOTICE));
        }

        let lines = CheckoutLine::from_items(cart.items());

        self.state.set(ButtonState::Pending);
        let guard = PendingGuard(&self.state);
        let result = backend.create_checkout(&lines).await;
        drop(guard);

        match result {
            Ok(session) => {
                tracing::info!(url = %session.checkout_url, "Redirecting to checkout");
                CheckoutOutcome::Redirect(session.checkout_url)
            }
            Err(e) => {
                let err = AppError::from(e);
                report(&err);
                self.fail(Notice::new(err.user_message()))
            }
        }
    }

    fn fail(&self, notice: Notice) -> CheckoutOutcome {
        self.notice.replace(Some(notice.clone()));
        CheckoutOutcome::Failed(notice)
    }
}
