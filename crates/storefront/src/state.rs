//! Page state shared across widgets.
//!
//! [`PageState`] is built once per page session. It owns the cart and hands
//! it out by reference: `&CartStore` to readers such as checkout,
//! `&mut CartStore` to the controls that mutate it. The cart drawer is kept
//! in sync through a cart subscription rather than being redrawn by hand.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use fiber_x_core::CurrencyCode;

use crate::cart::{CartDrawer, CartStorage, CartStore, SubscriptionId};
use crate::checkout::{CheckoutBackend, CheckoutButton, CheckoutOutcome};
use crate::error::{AppError, report};
use crate::landing::{
    Accordion, LandingConfig, MobileMenu, MotionPolicy, ScrollAnimations, SectionTracker,
};

/// Everything one page session needs.
pub struct PageState<S: CartStorage> {
    cart: CartStore<S>,
    drawer: Rc<RefCell<CartDrawer>>,
    drawer_subscription: SubscriptionId,
    checkout: CheckoutButton,
    /// Mobile navigation drawer.
    pub menu: MobileMenu,
    /// Active nav link.
    pub sections: SectionTracker,
    /// Benefit panels.
    pub accordion: Accordion,
    /// Scroll reveal bookkeeping.
    pub animations: ScrollAnimations,
    /// Reduced motion and pausing.
    pub motion: MotionPolicy,
}

impl<S: CartStorage> std::fmt::Debug for PageState<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageState")
            .field("cart", &self.cart)
            .field("drawer", &self.drawer)
            .field("checkout", &self.checkout)
            .field("menu", &self.menu)
            .field("sections", &self.sections)
            .field("motion", &self.motion)
            .finish_non_exhaustive()
    }
}

/// Page-level settings that come from the document rather than config.
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    /// Section ids that have a nav link.
    pub linked_sections: Vec<String>,
    /// Reported logical core count, if known.
    pub hardware_concurrency: Option<u32>,
}

impl<S: CartStorage> PageState<S> {
    /// Wire up a page around an opened cart.
    ///
    /// The drawer is rendered once from the restored cart and then follows
    /// every cart change.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Render` if the initial drawer render fails.
    pub fn new(
        mut cart: CartStore<S>,
        currency: CurrencyCode,
        landing: LandingConfig,
        options: PageOptions,
    ) -> Result<Self, AppError> {
        let mut drawer = CartDrawer::new(currency)
            .with_items_container()
            .with_count_badge();
        drawer.render(cart.items())?;
        let drawer = Rc::new(RefCell::new(drawer));

        let subscriber = Rc::clone(&drawer);
        let drawer_subscription = cart.subscribe(move |event, items| {
            if let Err(e) = subscriber.borrow_mut().refresh(event, items) {
                report(&AppError::from(e));
            }
        });

        Ok(Self {
            cart,
            drawer,
            drawer_subscription,
            checkout: CheckoutButton::new(),
            menu: MobileMenu::new(),
            sections: SectionTracker::new(options.linked_sections),
            accordion: Accordion::new(landing),
            animations: ScrollAnimations::new(),
            motion: MotionPolicy::for_device(options.hardware_concurrency),
        })
    }

    #[must_use]
    pub const fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    pub const fn cart_mut(&mut self) -> &mut CartStore<S> {
        &mut self.cart
    }

    /// The cart drawer as last rendered.
    #[must_use]
    pub fn drawer(&self) -> Ref<'_, CartDrawer> {
        self.drawer.borrow()
    }

    /// Mutable access for open/close and acknowledgments.
    #[must_use]
    pub fn drawer_mut(&self) -> RefMut<'_, CartDrawer> {
        self.drawer.borrow_mut()
    }

    #[must_use]
    pub const fn checkout_button(&self) -> &CheckoutButton {
        &self.checkout
    }

    /// Press the checkout button.
    pub async fn checkout<B: CheckoutBackend>(&self, backend: &B) -> CheckoutOutcome {
        self.checkout.submit(&self.cart, backend).await
    }

    /// Stop syncing the drawer and hand the cart back.
    #[must_use]
    pub fn into_cart(mut self) -> CartStore<S> {
        self.cart.unsubscribe(self.drawer_subscription);
        self.cart
    }
}
