//! Order form controller.
//!
//! The heaviest of the three forms: alongside validation it owns the
//! customer/product selection lookups, delegating the derived-field rules
//! to [`crate::compose`].

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use orderdesk_core::{CustomerId, Email, Money, PaymentMode, PaymentType, Phone, ProductId};

use crate::compose::{OrderDraft, order_total};
use crate::models::{Order, OrderItem};
use crate::store::{CustomerStore, OrderStore, ProductStore};

use super::{FieldErrors, FormError, FormMode, is_blank};

/// Controller for the order create/edit form.
#[derive(Debug, Clone)]
pub struct OrderForm {
    mode: FormMode,
    /// The draft under edit; plain fields are written directly, items and
    /// selections go through the methods below.
    pub draft: OrderDraft,
}

impl OrderForm {
    /// Open the form for a new order, reserving its id from the store.
    pub fn create(store: &mut OrderStore) -> Self {
        Self {
            mode: FormMode::Create,
            draft: OrderDraft::new(store.next_id()),
        }
    }

    /// Open the form pre-filled from an existing order.
    #[must_use]
    pub fn edit(order: &Order) -> Self {
        Self {
            mode: FormMode::Edit,
            draft: OrderDraft::from_order(order),
        }
    }

    /// Whether this form creates or edits.
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    /// React to the customer select box changing.
    ///
    /// When the id resolves in the customer store, the customer's contact
    /// fields are copied onto the draft. An id that no longer resolves
    /// keeps the reference but leaves earlier copies untouched.
    pub fn select_customer(&mut self, id: &CustomerId, customers: &CustomerStore) {
        match customers.get(id) {
            Some(customer) => self.draft.select_customer(customer),
            None => self.draft.customer_id = Some(id.clone()),
        }
    }

    /// React to a line's product select box changing.
    ///
    /// When the id resolves in the product store, the catalog name and
    /// price land on the line (overwriting any edited price) and the
    /// totals are recomputed. Returns `false` when the line index is out
    /// of range.
    pub fn select_product(&mut self, index: usize, id: &ProductId, products: &ProductStore) -> bool {
        match products.get(id) {
            Some(product) => self.draft.select_product(index, product),
            None => {
                let Some(item) = self.draft.items.get_mut(index) else {
                    return false;
                };
                item.product_id = Some(id.clone());
                true
            }
        }
    }

    /// Validate the draft into an order record, stamping timestamps.
    ///
    /// A new order gets `created_at = updated_at = now`; an edit keeps its
    /// original `created_at` and re-stamps only `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns the per-field error map when any rule fails.
    pub fn validate_at(&self, now: DateTime<Utc>) -> Result<Order, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.draft.customer_id.is_none() {
            errors.insert("customerId", "Customer is required");
        }

        let payment_mode = match self.draft.payment_mode.parse::<PaymentMode>() {
            Ok(mode) => Some(mode),
            Err(_) => {
                errors.insert("paymentMode", "Payment mode is required");
                None
            }
        };

        let payment_type = match self.draft.payment_type.parse::<PaymentType>() {
            Ok(ty) => Some(ty),
            Err(_) => {
                errors.insert("paymentType", "Payment type is required");
                None
            }
        };

        if is_blank(&self.draft.address_line1) {
            errors.insert("addressLine1", "Address line 1 is required");
        }
        if is_blank(&self.draft.postal_code) {
            errors.insert("postalCode", "Postal code is required");
        }
        if is_blank(&self.draft.city) {
            errors.insert("city", "City is required");
        }
        if is_blank(&self.draft.state) {
            errors.insert("state", "State is required");
        }

        let email = Email::parse(&self.draft.email)
            .map_err(|_| errors.insert("email", "Valid email is required"))
            .ok();

        let mobile_number = Phone::parse(&self.draft.mobile_number)
            .map_err(|_| {
                errors.insert(
                    "mobileNumber",
                    "Valid phone number is required (format: 555-123-4567)",
                );
            })
            .ok();

        if self.draft.items.is_empty() {
            errors.insert("items", "At least one item is required");
        }

        let mut items = Vec::with_capacity(self.draft.items.len());
        for (index, item) in self.draft.items.iter().enumerate() {
            if item.quantity == 0 {
                errors.insert(
                    format!("item-{index}-quantity"),
                    "Quantity must be greater than 0",
                );
            }

            match &item.product_id {
                Some(product_id) => items.push(OrderItem {
                    product_id: product_id.clone(),
                    product_name: item.product_name.clone(),
                    quantity: item.quantity,
                    price: item.price,
                    discount: item.discount,
                    total: item.total,
                }),
                None => errors.insert(format!("item-{index}-productId"), "Product is required"),
            }
        }

        let total: Money = order_total(&self.draft.items);

        match (
            &self.draft.customer_id,
            payment_mode,
            payment_type,
            email,
            mobile_number,
        ) {
            (Some(customer_id), Some(payment_mode), Some(payment_type), Some(email), Some(mobile))
                if errors.is_empty() =>
            {
                Ok(Order {
                    id: self.draft.id.clone(),
                    customer_id: customer_id.clone(),
                    customer_name: self.draft.customer_name.clone(),
                    items,
                    status: self.draft.status,
                    payment_mode,
                    payment_type,
                    address_line1: self.draft.address_line1.clone(),
                    address_line2: self.draft.address_line2.clone(),
                    address_line3: self.draft.address_line3.clone(),
                    postal_code: self.draft.postal_code.clone(),
                    city: self.draft.city.clone(),
                    state: self.draft.state.clone(),
                    mobile_number: mobile,
                    email,
                    created_at: self.draft.created_at.unwrap_or(now),
                    updated_at: now,
                    total,
                })
            }
            _ => Err(errors),
        }
    }

    /// Validate and persist the draft, stamping timestamps from the wall
    /// clock.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Validation`] when the draft fails validation,
    /// or [`FormError::Store`] when the store rejects the mutation. The
    /// store is untouched in either case.
    #[instrument(skip_all, fields(id = %self.draft.id, mode = ?self.mode))]
    pub fn submit(&self, store: &mut OrderStore) -> Result<Order, FormError> {
        let order = self
            .validate_at(Utc::now())
            .map_err(FormError::Validation)?;

        match self.mode {
            FormMode::Create => store.add(order.clone())?,
            FormMode::Edit => store.update(order.clone())?,
        }

        debug!(total = %order.total, items = order.items.len(), "order saved");
        Ok(order)
    }
}
