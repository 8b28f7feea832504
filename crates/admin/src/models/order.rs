//! Order domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use orderdesk_core::{
    CustomerId, Email, Money, OrderId, OrderStatus, PaymentMode, PaymentType, Phone, ProductId,
};

/// One product line inside an order.
///
/// `product_name` and `price` are denormalized copies taken from the catalog
/// at selection time. Invariant: `total == quantity * price - discount`; a
/// discount exceeding the line value yields a negative total, carried
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Product name as of selection time.
    pub product_name: String,
    /// Units ordered, always positive in a validated order.
    pub quantity: u32,
    /// Unit price; seeded from the catalog, editable per line.
    pub price: Money,
    /// Absolute discount applied to the whole line.
    pub discount: Money,
    /// Derived line total.
    pub total: Money,
}

/// An order record.
///
/// Invariants:
/// - `total` equals the sum of all `items[].total`.
/// - `customer_name`, `email`, and `mobile_number` are denormalized copies of
///   the referenced customer's fields as of selection time; they do not track
///   later customer edits or deletion.
/// - `created_at` is stamped once at creation; `updated_at` changes on every
///   successful edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order ID (`ORD-NNNN`).
    pub id: OrderId,
    /// The customer this order was placed for.
    pub customer_id: CustomerId,
    /// Customer name as of selection time.
    pub customer_name: String,
    /// Product lines; never empty in a validated order.
    pub items: Vec<OrderItem>,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// How the order is paid.
    pub payment_mode: PaymentMode,
    /// Payment schedule.
    pub payment_type: PaymentType,
    /// Shipping address, first line.
    pub address_line1: String,
    /// Shipping address, second line (may be empty).
    pub address_line2: String,
    /// Shipping address, third line (may be empty).
    pub address_line3: String,
    /// Shipping postal code.
    pub postal_code: String,
    /// Shipping city.
    pub city: String,
    /// Shipping state or region.
    pub state: String,
    /// Contact phone as of customer selection time.
    pub mobile_number: Phone,
    /// Contact email as of customer selection time.
    pub email: Email,
    /// Stamped once when the order is first saved.
    pub created_at: DateTime<Utc>,
    /// Re-stamped on every successful save.
    pub updated_at: DateTime<Utc>,
    /// Derived order total.
    pub total: Money,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn sample_order() -> Order {
        Order {
            id: OrderId::parse("ORD-001").unwrap(),
            customer_id: CustomerId::parse("CUST-001").unwrap(),
            customer_name: "John Doe".to_owned(),
            items: vec![OrderItem {
                product_id: ProductId::parse("PROD-001").unwrap(),
                product_name: "Laptop".to_owned(),
                quantity: 1,
                price: Money::new(dec!(1200)),
                discount: Money::new(dec!(100)),
                total: Money::new(dec!(1100)),
            }],
            status: OrderStatus::Pending,
            payment_mode: PaymentMode::CreditCard,
            payment_type: PaymentType::FullPayment,
            address_line1: "123 Main St".to_owned(),
            address_line2: "Apt 4B".to_owned(),
            address_line3: String::new(),
            postal_code: "10001".to_owned(),
            city: "New York".to_owned(),
            state: "NY".to_owned(),
            mobile_number: "555-123-4567".parse().unwrap(),
            email: "john.doe@example.com".parse().unwrap(),
            created_at: "2023-06-01T10:30:00Z".parse().unwrap(),
            updated_at: "2023-06-01T10:30:00Z".parse().unwrap(),
            total: Money::new(dec!(1100)),
        }
    }

    #[test]
    fn test_serde_shape_matches_ui_boundary() {
        let json = serde_json::to_value(sample_order()).unwrap();
        assert_eq!(json["id"], "ORD-001");
        assert_eq!(json["customerId"], "CUST-001");
        assert_eq!(json["customerName"], "John Doe");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["paymentMode"], "Credit Card");
        assert_eq!(json["paymentType"], "Full Payment");
        assert_eq!(json["addressLine1"], "123 Main St");
        assert_eq!(json["mobileNumber"], "555-123-4567");
        assert_eq!(json["items"][0]["productId"], "PROD-001");
        assert_eq!(json["items"][0]["productName"], "Laptop");
    }

    #[test]
    fn test_serde_roundtrip() {
        let order = sample_order();
        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(back, order);
    }
}
