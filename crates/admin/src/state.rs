//! Engine facade handed to the UI layer.
//!
//! `AdminState` composes the three stores, the notification queue, and the
//! per-entity delete confirmations. The UI reads collections through the
//! store fields and routes every mutation through the methods here, which
//! attach the toast notifications the dashboard shows.

use tracing::{info, instrument};

use orderdesk_core::{CustomerId, OrderId, ProductId};

use crate::forms::{CustomerForm, FormError, FormMode, OrderForm, ProductForm};
use crate::models::{Customer, Order, Product};
use crate::notify::Notifications;
use crate::seed;
use crate::store::{CustomerStore, OrderStore, ProductStore, StoreError};
use crate::views::{self, DeleteConfirmation};

/// The dashboard state engine.
#[derive(Debug, Default)]
pub struct AdminState {
    /// Customer collection.
    pub customers: CustomerStore,
    /// Product catalog.
    pub products: ProductStore,
    /// Order collection.
    pub orders: OrderStore,
    /// Pending toasts for the UI to drain.
    pub notifications: Notifications,
    customer_delete: DeleteConfirmation<CustomerId>,
    product_delete: DeleteConfirmation<ProductId>,
    order_delete: DeleteConfirmation<OrderId>,
}

impl AdminState {
    /// An engine with empty stores.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            customers: CustomerStore::new(),
            products: ProductStore::new(),
            orders: OrderStore::new(),
            notifications: Notifications::new(),
            customer_delete: DeleteConfirmation::new(),
            product_delete: DeleteConfirmation::new(),
            order_delete: DeleteConfirmation::new(),
        }
    }

    /// An engine loaded with the fixed sample data, the process-start
    /// state of the dashboard.
    #[must_use]
    #[instrument]
    pub fn with_seed_data() -> Self {
        let mut state = Self::new();
        state.customers.replace_all(seed::customers());
        state.products.replace_all(seed::products());
        state.orders.replace_all(seed::orders());
        info!(
            customers = state.customers.len(),
            products = state.products.len(),
            orders = state.orders.len(),
            "seed data loaded"
        );
        state
    }

    // Customers

    /// Open the customer form for a new record.
    pub fn open_customer_create(&mut self) -> CustomerForm {
        CustomerForm::create(&mut self.customers)
    }

    /// Open the customer form pre-filled for editing, if the id resolves.
    #[must_use]
    pub fn open_customer_edit(&self, id: &CustomerId) -> Option<CustomerForm> {
        self.customers.get(id).map(CustomerForm::edit)
    }

    /// Submit a customer form, queueing the outcome toast.
    ///
    /// # Errors
    ///
    /// Propagates the form's [`FormError`]; the matching error toast is
    /// queued either way, so callers only need the value for control flow
    /// (e.g. keeping the form open and rendering its field errors).
    pub fn submit_customer(&mut self, form: &CustomerForm) -> Result<Customer, FormError> {
        let result = form.submit(&mut self.customers);
        match (&result, form.mode()) {
            (Ok(_), FormMode::Create) => self.notifications.success("Customer created successfully"),
            (Ok(_), FormMode::Edit) => self.notifications.success("Customer updated successfully"),
            (Err(error), _) => self.notify_rejection(error),
        }
        result
    }

    /// Ask for confirmation before deleting a customer.
    pub fn request_customer_delete(&mut self, id: CustomerId) {
        self.customer_delete.request(id);
    }

    /// The customer deletion awaiting confirmation, if any.
    #[must_use]
    pub const fn pending_customer_delete(&self) -> Option<&CustomerId> {
        self.customer_delete.pending()
    }

    /// Dismiss the pending customer deletion.
    pub fn cancel_customer_delete(&mut self) {
        self.customer_delete.cancel();
    }

    /// Run the confirmed customer deletion.
    ///
    /// Returns `Ok(None)` when no deletion was pending. Orders that copied
    /// this customer's contact fields are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the record disappeared between
    /// request and confirmation; an error toast is queued.
    pub fn confirm_customer_delete(&mut self) -> Result<Option<Customer>, StoreError> {
        let Some(id) = self.customer_delete.confirm() else {
            return Ok(None);
        };

        match self.customers.delete(&id) {
            Ok(customer) => Ok(Some(customer)),
            Err(error) => {
                self.notifications.error(error.to_string());
                Err(error)
            }
        }
    }

    /// Customers matching the search term, in insertion order.
    #[must_use]
    pub fn customers_matching(&self, term: &str) -> Vec<&Customer> {
        views::filter(self.customers.list(), term)
    }

    // Products

    /// Open the product form for a new record.
    pub fn open_product_create(&mut self) -> ProductForm {
        ProductForm::create(&mut self.products)
    }

    /// Open the product form pre-filled for editing, if the id resolves.
    #[must_use]
    pub fn open_product_edit(&self, id: &ProductId) -> Option<ProductForm> {
        self.products.get(id).map(ProductForm::edit)
    }

    /// Submit a product form, queueing the outcome toast.
    ///
    /// # Errors
    ///
    /// Propagates the form's [`FormError`]; see [`Self::submit_customer`].
    pub fn submit_product(&mut self, form: &ProductForm) -> Result<Product, FormError> {
        let result = form.submit(&mut self.products);
        match (&result, form.mode()) {
            (Ok(_), FormMode::Create) => self.notifications.success("Product created successfully"),
            (Ok(_), FormMode::Edit) => self.notifications.success("Product updated successfully"),
            (Err(error), _) => self.notify_rejection(error),
        }
        result
    }

    /// Ask for confirmation before deleting a product.
    pub fn request_product_delete(&mut self, id: ProductId) {
        self.product_delete.request(id);
    }

    /// The product deletion awaiting confirmation, if any.
    #[must_use]
    pub const fn pending_product_delete(&self) -> Option<&ProductId> {
        self.product_delete.pending()
    }

    /// Dismiss the pending product deletion.
    pub fn cancel_product_delete(&mut self) {
        self.product_delete.cancel();
    }

    /// Run the confirmed product deletion.
    ///
    /// Returns `Ok(None)` when no deletion was pending. Orders that copied
    /// this product's name and price keep their lines unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the record disappeared between
    /// request and confirmation; an error toast is queued.
    pub fn confirm_product_delete(&mut self) -> Result<Option<Product>, StoreError> {
        let Some(id) = self.product_delete.confirm() else {
            return Ok(None);
        };

        match self.products.delete(&id) {
            Ok(product) => Ok(Some(product)),
            Err(error) => {
                self.notifications.error(error.to_string());
                Err(error)
            }
        }
    }

    /// Products matching the search term, in insertion order.
    #[must_use]
    pub fn products_matching(&self, term: &str) -> Vec<&Product> {
        views::filter(self.products.list(), term)
    }

    // Orders

    /// Open the order form for a new record.
    pub fn open_order_create(&mut self) -> OrderForm {
        OrderForm::create(&mut self.orders)
    }

    /// Open the order form pre-filled for editing, if the id resolves.
    #[must_use]
    pub fn open_order_edit(&self, id: &OrderId) -> Option<OrderForm> {
        self.orders.get(id).map(OrderForm::edit)
    }

    /// Submit an order form, queueing the outcome toast.
    ///
    /// # Errors
    ///
    /// Propagates the form's [`FormError`]; see [`Self::submit_customer`].
    pub fn submit_order(&mut self, form: &OrderForm) -> Result<Order, FormError> {
        let result = form.submit(&mut self.orders);
        match (&result, form.mode()) {
            (Ok(_), FormMode::Create) => self.notifications.success("Order created successfully"),
            (Ok(_), FormMode::Edit) => self.notifications.success("Order updated successfully"),
            (Err(error), _) => self.notify_rejection(error),
        }
        result
    }

    /// Ask for confirmation before deleting an order.
    pub fn request_order_delete(&mut self, id: OrderId) {
        self.order_delete.request(id);
    }

    /// The order deletion awaiting confirmation, if any.
    #[must_use]
    pub const fn pending_order_delete(&self) -> Option<&OrderId> {
        self.order_delete.pending()
    }

    /// Dismiss the pending order deletion.
    pub fn cancel_order_delete(&mut self) {
        self.order_delete.cancel();
    }

    /// Run the confirmed order deletion.
    ///
    /// Returns `Ok(None)` when no deletion was pending.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the record disappeared between
    /// request and confirmation; an error toast is queued.
    pub fn confirm_order_delete(&mut self) -> Result<Option<Order>, StoreError> {
        let Some(id) = self.order_delete.confirm() else {
            return Ok(None);
        };

        match self.orders.delete(&id) {
            Ok(order) => Ok(Some(order)),
            Err(error) => {
                self.notifications.error(error.to_string());
                Err(error)
            }
        }
    }

    /// Orders matching the search term, in insertion order.
    #[must_use]
    pub fn orders_matching(&self, term: &str) -> Vec<&Order> {
        views::filter(self.orders.list(), term)
    }

    fn notify_rejection(&mut self, error: &FormError) {
        match error {
            FormError::Validation(_) => {
                self.notifications.error("Please fix the errors in the form");
            }
            FormError::Store(store_error) => self.notifications.error(store_error.to_string()),
        }
    }
}
