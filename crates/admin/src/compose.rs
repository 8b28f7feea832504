//! Order drafts and the rules that keep derived fields consistent.
//!
//! The order form edits an [`OrderDraft`] rather than an order record.
//! Every edit routes through the functions here so the derived fields can
//! never drift:
//!
//! - selecting a customer copies its contact fields onto the draft
//!   (denormalized; later customer edits or deletion leave them untouched);
//! - selecting a product copies its name and catalog price onto the line,
//!   overwriting any edited price (deliberate policy: picking a product
//!   resets its price to catalog), then recomputes the line total;
//! - any quantity/price/discount change recomputes the line total as
//!   `quantity * price - discount` — a discount exceeding the line value
//!   yields a negative total, carried through unchanged;
//! - any change to the item list recomputes the order total as the sum of
//!   the line totals, zero when the list is empty.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderdesk_core::{CustomerId, Money, OrderId, OrderStatus, ProductId};

use crate::models::{Customer, Order, Product};

/// A line's derived total.
#[must_use]
pub fn line_total(quantity: u32, price: Money, discount: Money) -> Money {
    price * quantity - discount
}

/// An order's derived total over its line totals.
#[must_use]
pub fn order_total(items: &[DraftItem]) -> Money {
    items.iter().map(|item| item.total).sum()
}

/// One in-progress line in the order form.
///
/// `product_id` stays `None` until a product is picked; validation rejects
/// submission while any line has no product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftItem {
    /// Selected product, if any.
    pub product_id: Option<ProductId>,
    /// Product name as of selection time.
    pub product_name: String,
    /// Units ordered.
    pub quantity: u32,
    /// Unit price; seeded from the catalog on selection, editable after.
    pub price: Money,
    /// Absolute discount for the line.
    pub discount: Money,
    /// Derived line total.
    pub total: Money,
}

impl DraftItem {
    /// A fresh, empty line: one unit of nothing.
    #[must_use]
    pub fn new() -> Self {
        Self {
            product_id: None,
            product_name: String::new(),
            quantity: 1,
            price: Money::ZERO,
            discount: Money::ZERO,
            total: Money::ZERO,
        }
    }

    fn recompute(&mut self) {
        self.total = line_total(self.quantity, self.price, self.discount);
    }
}

impl Default for DraftItem {
    fn default() -> Self {
        Self::new()
    }
}

/// The in-progress order held by the order form.
///
/// Select-box and text fields are kept raw (strings) until validation;
/// items are structured because the UI edits them through typed intents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    /// The id this order will be saved under, assigned at form open.
    pub id: OrderId,
    /// Selected customer, if any.
    pub customer_id: Option<CustomerId>,
    /// Customer name as of selection time.
    pub customer_name: String,
    /// In-progress lines.
    pub items: Vec<DraftItem>,
    /// Lifecycle status, `pending` for new drafts.
    pub status: OrderStatus,
    /// Raw payment mode select value.
    pub payment_mode: String,
    /// Raw payment type select value.
    pub payment_type: String,
    /// Shipping address, first line.
    pub address_line1: String,
    /// Shipping address, second line.
    pub address_line2: String,
    /// Shipping address, third line.
    pub address_line3: String,
    /// Shipping postal code.
    pub postal_code: String,
    /// Shipping city.
    pub city: String,
    /// Shipping state or region.
    pub state: String,
    /// Raw contact phone, copied from the customer on selection.
    pub mobile_number: String,
    /// Raw contact email, copied from the customer on selection.
    pub email: String,
    /// Present when editing an existing order; preserved on save.
    pub created_at: Option<DateTime<Utc>>,
    /// Derived order total.
    pub total: Money,
}

impl OrderDraft {
    /// A fresh draft for a new order under the given id.
    #[must_use]
    pub fn new(id: OrderId) -> Self {
        Self {
            id,
            customer_id: None,
            customer_name: String::new(),
            items: Vec::new(),
            status: OrderStatus::Pending,
            payment_mode: String::new(),
            payment_type: String::new(),
            address_line1: String::new(),
            address_line2: String::new(),
            address_line3: String::new(),
            postal_code: String::new(),
            city: String::new(),
            state: String::new(),
            mobile_number: String::new(),
            email: String::new(),
            created_at: None,
            total: Money::ZERO,
        }
    }

    /// A draft pre-filled from an existing order, for editing.
    #[must_use]
    pub fn from_order(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            customer_id: Some(order.customer_id.clone()),
            customer_name: order.customer_name.clone(),
            items: order
                .items
                .iter()
                .map(|item| DraftItem {
                    product_id: Some(item.product_id.clone()),
                    product_name: item.product_name.clone(),
                    quantity: item.quantity,
                    price: item.price,
                    discount: item.discount,
                    total: item.total,
                })
                .collect(),
            status: order.status,
            payment_mode: order.payment_mode.to_string(),
            payment_type: order.payment_type.to_string(),
            address_line1: order.address_line1.clone(),
            address_line2: order.address_line2.clone(),
            address_line3: order.address_line3.clone(),
            postal_code: order.postal_code.clone(),
            city: order.city.clone(),
            state: order.state.clone(),
            mobile_number: order.mobile_number.as_str().to_owned(),
            email: order.email.as_str().to_owned(),
            created_at: Some(order.created_at),
            total: order.total,
        }
    }

    /// Copy the selected customer's contact fields onto the draft.
    ///
    /// The copies are taken at selection time and never track later edits
    /// to the customer record.
    pub fn select_customer(&mut self, customer: &Customer) {
        self.customer_id = Some(customer.id.clone());
        self.customer_name = customer.name.clone();
        self.email = customer.email.as_str().to_owned();
        self.mobile_number = customer.phone.as_str().to_owned();
    }

    /// Drop the customer selection.
    ///
    /// Already-copied contact fields stay as they are; only the reference
    /// is cleared.
    pub fn clear_customer(&mut self) {
        self.customer_id = None;
    }

    /// Append a fresh line and return its index.
    pub fn add_item(&mut self) -> usize {
        self.items.push(DraftItem::new());
        self.total = order_total(&self.items);
        self.items.len() - 1
    }

    /// Remove the line at `index`. Returns `false` when out of range.
    pub fn remove_item(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }

        self.items.remove(index);
        self.total = order_total(&self.items);
        true
    }

    /// Put the selected product on the line at `index`.
    ///
    /// Copies the catalog name and price (overwriting any edited price) and
    /// recomputes the line and order totals. Returns `false` when the index
    /// is out of range.
    pub fn select_product(&mut self, index: usize, product: &Product) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };

        item.product_id = Some(product.id.clone());
        item.product_name = product.name.clone();
        item.price = product.price;
        item.recompute();
        self.total = order_total(&self.items);
        true
    }

    /// Set a line's quantity and recompute the totals.
    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> bool {
        self.edit_item(index, |item| item.quantity = quantity)
    }

    /// Set a line's unit price and recompute the totals.
    pub fn set_price(&mut self, index: usize, price: Money) -> bool {
        self.edit_item(index, |item| item.price = price)
    }

    /// Set a line's discount and recompute the totals.
    pub fn set_discount(&mut self, index: usize, discount: Money) -> bool {
        self.edit_item(index, |item| item.discount = discount)
    }

    /// Recompute every line total and the order total from scratch.
    ///
    /// Idempotent; the edit methods keep the draft consistent on their own.
    pub fn recompute_totals(&mut self) {
        for item in &mut self.items {
            item.recompute();
        }
        self.total = order_total(&self.items);
    }

    fn edit_item(&mut self, index: usize, edit: impl FnOnce(&mut DraftItem)) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };

        edit(item);
        item.recompute();
        self.total = order_total(&self.items);
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use orderdesk_core::{CustomerId, Email, Phone, ProductId};
    use rust_decimal_macros::dec;

    use super::*;

    fn ann() -> Customer {
        Customer {
            id: CustomerId::parse("CUST-0001").unwrap(),
            name: "Ann Lee".to_owned(),
            email: Email::parse("ann@x.com").unwrap(),
            phone: Phone::parse("555-111-2222").unwrap(),
            address: "1 Rd".to_owned(),
        }
    }

    fn laptop() -> Product {
        Product {
            id: ProductId::parse("PROD-001").unwrap(),
            name: "Laptop".to_owned(),
            description: "High-performance laptop".to_owned(),
            price: Money::new(dec!(1200)),
            stock: 10,
            category: "Electronics".to_owned(),
        }
    }

    fn draft() -> OrderDraft {
        OrderDraft::new(OrderId::from_seq(1))
    }

    #[test]
    fn test_line_total_formula() {
        assert_eq!(
            line_total(2, Money::new(dec!(1200)), Money::ZERO),
            Money::new(dec!(2400))
        );
        assert_eq!(
            line_total(3, Money::new(dec!(100)), Money::new(dec!(15))),
            Money::new(dec!(285))
        );
    }

    #[test]
    fn test_line_total_not_clamped_below_zero() {
        let total = line_total(1, Money::new(dec!(10)), Money::new(dec!(25)));
        assert_eq!(total, Money::new(dec!(-15)));
    }

    #[test]
    fn test_select_customer_copies_contact_fields() {
        let mut draft = draft();
        draft.select_customer(&ann());

        assert_eq!(draft.customer_id, Some(CustomerId::parse("CUST-0001").unwrap()));
        assert_eq!(draft.customer_name, "Ann Lee");
        assert_eq!(draft.email, "ann@x.com");
        assert_eq!(draft.mobile_number, "555-111-2222");
    }

    #[test]
    fn test_copied_fields_do_not_track_customer_edits() {
        let mut customer = ann();
        let mut draft = draft();
        draft.select_customer(&customer);

        customer.name = "Ann Chang".to_owned();
        customer.email = Email::parse("chang@x.com").unwrap();

        assert_eq!(draft.customer_name, "Ann Lee");
        assert_eq!(draft.email, "ann@x.com");
    }

    #[test]
    fn test_clear_customer_keeps_copies() {
        let mut draft = draft();
        draft.select_customer(&ann());
        draft.clear_customer();

        assert_eq!(draft.customer_id, None);
        assert_eq!(draft.customer_name, "Ann Lee");
    }

    #[test]
    fn test_select_product_copies_name_and_catalog_price() {
        let mut draft = draft();
        let index = draft.add_item();
        draft.select_product(index, &laptop());

        let item = &draft.items[index];
        assert_eq!(item.product_id, Some(ProductId::parse("PROD-001").unwrap()));
        assert_eq!(item.product_name, "Laptop");
        assert_eq!(item.price, Money::new(dec!(1200)));
        assert_eq!(item.total, Money::new(dec!(1200)));
    }

    #[test]
    fn test_select_product_overwrites_edited_price() {
        let mut draft = draft();
        let index = draft.add_item();
        draft.select_product(index, &laptop());
        draft.set_price(index, Money::new(dec!(999)));
        assert_eq!(draft.items[index].price, Money::new(dec!(999)));

        // Re-selecting resets to catalog price.
        draft.select_product(index, &laptop());
        assert_eq!(draft.items[index].price, Money::new(dec!(1200)));
        assert_eq!(draft.total, Money::new(dec!(1200)));
    }

    #[test]
    fn test_item_edits_recompute_line_and_order_totals() {
        let mut draft = draft();
        let index = draft.add_item();
        draft.select_product(index, &laptop());

        draft.set_quantity(index, 2);
        assert_eq!(draft.items[index].total, Money::new(dec!(2400)));
        assert_eq!(draft.total, Money::new(dec!(2400)));

        draft.set_discount(index, Money::new(dec!(400)));
        assert_eq!(draft.items[index].total, Money::new(dec!(2000)));
        assert_eq!(draft.total, Money::new(dec!(2000)));
    }

    #[test]
    fn test_oversized_discount_goes_negative_unclamped() {
        let mut draft = draft();
        let index = draft.add_item();
        draft.select_product(index, &laptop());
        draft.set_discount(index, Money::new(dec!(2000)));

        assert_eq!(draft.items[index].total, Money::new(dec!(-800)));
        assert_eq!(draft.total, Money::new(dec!(-800)));
    }

    #[test]
    fn test_remove_item_recomputes_order_total() {
        let mut draft = draft();
        let first = draft.add_item();
        draft.select_product(first, &laptop());
        let second = draft.add_item();
        draft.select_product(second, &laptop());
        assert_eq!(draft.total, Money::new(dec!(2400)));

        assert!(draft.remove_item(first));
        assert_eq!(draft.total, Money::new(dec!(1200)));
    }

    #[test]
    fn test_empty_items_yield_zero_total() {
        let mut draft = draft();
        let index = draft.add_item();
        draft.select_product(index, &laptop());
        draft.remove_item(index);

        assert!(draft.items.is_empty());
        assert_eq!(draft.total, Money::ZERO);
    }

    #[test]
    fn test_out_of_range_edits_are_rejected() {
        let mut draft = draft();
        assert!(!draft.set_quantity(0, 2));
        assert!(!draft.remove_item(0));
        assert!(!draft.select_product(3, &laptop()));
    }

    #[test]
    fn test_recompute_totals_is_idempotent() {
        let mut draft = draft();
        let index = draft.add_item();
        draft.select_product(index, &laptop());
        draft.set_quantity(index, 2);

        let before = draft.clone();
        draft.recompute_totals();
        draft.recompute_totals();
        assert_eq!(draft, before);
    }

    #[test]
    fn test_from_order_preserves_created_at() {
        let order = crate::seed::orders()
            .into_iter()
            .next()
            .expect("seed orders");
        let draft = OrderDraft::from_order(&order);

        assert_eq!(draft.created_at, Some(order.created_at));
        assert_eq!(draft.total, order.total);
        assert_eq!(draft.payment_mode, "Credit Card");
    }
}
