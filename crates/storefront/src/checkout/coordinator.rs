//! The checkout coordinator.

use larek_core::{
    BusEvent, Cart, CartItem, Catalog, CheckoutStep, EventBus, OrderDraft, ProductId,
    ValidationError,
};
use tracing::{debug, info, warn};

use super::events::{StoreEvent, UiEvent};
use super::screen::{ContactForm, Modal, PaymentForm, Screen};
use super::CheckoutError;
use crate::api::LarekApi;

/// Read-only view of a session's state, handed to the view layer.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutState<'a> {
    pub catalog: &'a Catalog,
    pub cart: &'a Cart,
    pub draft: &'a OrderDraft,
    pub modal: &'a Modal,
}

/// Sequences one session through catalog, cart and the two checkout steps.
///
/// All state is owned here and mutated only inside [`Coordinator::dispatch`].
pub struct Coordinator<A> {
    api: A,
    catalog: Catalog,
    cart: Cart,
    draft: OrderDraft,
    modal: Modal,
    bus: EventBus<StoreEvent>,
}

impl<A: LarekApi> Coordinator<A> {
    /// Create a coordinator with an empty catalog, cart and draft.
    pub fn new(api: A) -> Self {
        Self {
            api,
            catalog: Catalog::new(),
            cart: Cart::new(),
            draft: OrderDraft::new(),
            modal: Modal::default(),
            bus: EventBus::new(),
        }
    }

    /// The bus [`StoreEvent`]s are published on. Subscribe here.
    pub const fn bus_mut(&mut self) -> &mut EventBus<StoreEvent> {
        &mut self.bus
    }

    /// Borrow everything the views need.
    #[must_use]
    pub const fn state(&self) -> CheckoutState<'_> {
        CheckoutState {
            catalog: &self.catalog,
            cart: &self.cart,
            draft: &self.draft,
            modal: &self.modal,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    #[must_use]
    pub const fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Fetch the product list and feed it in as [`UiEvent::CatalogLoaded`].
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Network`]; the current catalog is kept.
    pub async fn load_catalog(&mut self) -> Result<usize, CheckoutError> {
        let products = self.api.get_products().await?;
        let count = products.len();
        self.dispatch(UiEvent::CatalogLoaded(products)).await?;
        Ok(count)
    }

    /// Handle one UI event.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::Validation`] when a form step fails; the form is
    ///   re-shown with the errors.
    /// - [`CheckoutError::Network`] when the order call fails; the contact
    ///   screen shows the alert and the cart is kept.
    /// - [`CheckoutError::EmptyCart`] when checkout starts with no items.
    pub async fn dispatch(&mut self, event: UiEvent) -> Result<(), CheckoutError> {
        debug!(event = ?event.kind(), "Handling UI event");

        match event {
            UiEvent::CatalogLoaded(products) => {
                let count = products.len();
                self.catalog.set_products(products);
                self.bus.emit(&StoreEvent::CatalogUpdated { count });
            }
            UiEvent::ProductSelected(id) => {
                if self.catalog.find(&id).is_some() {
                    self.show(Screen::Product(id));
                } else {
                    warn!(product_id = %id, "Selected product is not in the catalog");
                }
            }
            UiEvent::AddToCart(id) => self.add_to_cart(&id),
            UiEvent::RemoveFromCart(id) => {
                if self.cart.remove(&id) {
                    self.cart_changed();
                }
                if matches!(self.modal.screen(), Some(Screen::Cart)) {
                    self.show(Screen::Cart);
                }
            }
            UiEvent::CartOpened => self.show(Screen::Cart),
            UiEvent::CheckoutRequested => {
                if self.cart.is_empty() {
                    self.show(Screen::Cart);
                    return Err(CheckoutError::EmptyCart);
                }
                self.show(Screen::Payment(PaymentForm::default()));
            }
            UiEvent::PaymentMethodSelected(method) => {
                self.draft.set_payment_method(method);
            }
            UiEvent::AddressInput(address) => self.draft.set_delivery_address(address),
            UiEvent::PaymentSubmitted { address } => {
                self.draft.set_delivery_address(address);
                if let Err(err) = self.draft.advance() {
                    self.show(Screen::Payment(PaymentForm {
                        errors: err.errors().to_vec(),
                    }));
                    return Err(err.into());
                }
                self.show(Screen::Contact(ContactForm::default()));
            }
            UiEvent::ContactInput { email, phone } => {
                if !self.on_contact_step() {
                    warn!("Ignoring contact input outside the contact step");
                    return Ok(());
                }
                self.draft.set_email(email);
                self.draft.set_phone(phone);
                let outcome = self.draft.validate_second_step();
                if let Some(form) = self.contact_form() {
                    form.apply(outcome.as_ref().map(|_| ()));
                }
            }
            UiEvent::ContactSubmitted { email, phone } => {
                if !self.on_contact_step() {
                    return self.back_to_payment();
                }
                self.draft.set_email(email);
                self.draft.set_phone(phone);
                return self.submit_order().await;
            }
            UiEvent::SuccessClosed | UiEvent::ModalClosed => {
                self.modal.close();
                self.bus.emit(&StoreEvent::ModalClosed);
            }
        }

        Ok(())
    }

    fn add_to_cart(&mut self, id: &ProductId) {
        let Some(product) = self.catalog.find(id) else {
            warn!(product_id = %id, "Cannot add unknown product to cart");
            return;
        };
        if !product.is_purchasable() {
            debug!(product_id = %id, "Ignoring add for product without a price");
            return;
        }
        if self.cart.add(CartItem::from(product)) {
            self.cart_changed();
        }
    }

    /// Contact events need the draft past step 1 and the contact screen up.
    fn on_contact_step(&self) -> bool {
        self.draft.step() == CheckoutStep::Contact
            && matches!(self.modal.screen(), Some(Screen::Contact(_)))
    }

    /// A contact submit that arrived before step 1 passed.
    fn back_to_payment(&mut self) -> Result<(), CheckoutError> {
        match self.draft.validate_first_step() {
            Err(err) if self.draft.step() == CheckoutStep::Payment => {
                self.show(Screen::Payment(PaymentForm {
                    errors: err.errors().to_vec(),
                }));
                Err(err.into())
            }
            _ => {
                warn!("Ignoring contact submit outside the contact step");
                Ok(())
            }
        }
    }

    /// Validate step 2, submit, and move to the success screen.
    async fn submit_order(&mut self) -> Result<(), CheckoutError> {
        if let Some(form) = self.contact_form() {
            form.alert = None;
        }
        let request = match self.draft.to_request(&self.cart) {
            Ok(request) => request,
            Err(err) => {
                if let Some(form) = self.contact_form() {
                    form.apply(Err::<(), &ValidationError>(&err));
                }
                return Err(err.into());
            }
        };

        if request.items.is_empty() {
            self.show(Screen::Cart);
            return Err(CheckoutError::EmptyCart);
        }

        // What the customer saw when they pressed "Pay".
        let total = self.cart.total();

        match self.api.create_order(&request).await {
            Ok(confirmation) => {
                info!(order_id = %confirmation.id, total = %total, "Order placed");
                self.cart.clear();
                self.draft = OrderDraft::new();
                self.cart_changed();
                self.bus.emit(&StoreEvent::OrderPlaced {
                    id: confirmation.id,
                    total: confirmation.total,
                });
                self.show(Screen::Success { total });
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "Order submission failed");
                let message = format!("Order failed: {err}");
                if let Some(form) = self.contact_form() {
                    form.alert = Some(message.clone());
                }
                self.bus.emit(&StoreEvent::OrderFailed { message });
                Err(err.into())
            }
        }
    }

    /// The contact form, if the contact screen is showing.
    fn contact_form(&mut self) -> Option<&mut ContactForm> {
        match self.modal.screen_mut() {
            Some(Screen::Contact(form)) => Some(form),
            _ => None,
        }
    }

    fn show(&mut self, screen: Screen) {
        let kind = screen.kind();
        self.modal.show(screen);
        self.bus.emit(&StoreEvent::ScreenShown(kind));
    }

    fn cart_changed(&self) {
        self.bus.emit(&StoreEvent::CartChanged {
            count: self.cart.len(),
            total: self.cart.total(),
        });
    }
}
