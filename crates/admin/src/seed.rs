//! The fixed sample data loaded on process start.
//!
//! There is no persistence; every run starts from this set. The ids use
//! three-digit suffixes, so the first generated id after seeding is
//! `<PREFIX>-0005` (customers/orders) or `<PREFIX>-0006` (products).

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;

use orderdesk_core::{
    CustomerId, Email, Money, OrderId, OrderStatus, PaymentMode, PaymentType, Phone, ProductId,
};

use crate::models::{Customer, Order, OrderItem, Product};

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap_or(DateTime::UNIX_EPOCH)
}

fn customer(id: &str, name: &str, email: &str, phone: &str, address: &str) -> Customer {
    Customer {
        id: CustomerId::parse(id).expect("seed customer id"),
        name: name.to_owned(),
        email: Email::parse(email).expect("seed customer email"),
        phone: Phone::parse(phone).expect("seed customer phone"),
        address: address.to_owned(),
    }
}

/// The sample customers.
#[must_use]
pub fn customers() -> Vec<Customer> {
    vec![
        customer(
            "CUST-001",
            "John Doe",
            "john.doe@example.com",
            "555-123-4567",
            "123 Main St, New York, NY 10001",
        ),
        customer(
            "CUST-002",
            "Jane Smith",
            "jane.smith@example.com",
            "555-987-6543",
            "456 Oak Ave, Beverly Hills, CA 90210",
        ),
        customer(
            "CUST-003",
            "Robert Johnson",
            "robert.j@example.com",
            "555-456-7890",
            "789 Pine St, Chicago, IL 60601",
        ),
        customer(
            "CUST-004",
            "Emily Davis",
            "emily.davis@example.com",
            "555-789-0123",
            "321 Elm St, Boston, MA 02108",
        ),
    ]
}

fn product(id: &str, name: &str, description: &str, price: Money, stock: u32, category: &str) -> Product {
    Product {
        id: ProductId::parse(id).expect("seed product id"),
        name: name.to_owned(),
        description: description.to_owned(),
        price,
        stock,
        category: category.to_owned(),
    }
}

/// The sample product catalog.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        product(
            "PROD-001",
            "Laptop",
            "High-performance laptop with 16GB RAM and 512GB SSD",
            Money::new(dec!(1200)),
            10,
            "Electronics",
        ),
        product(
            "PROD-002",
            "Smartphone",
            "Latest smartphone with 128GB storage and dual camera",
            Money::new(dec!(800)),
            15,
            "Electronics",
        ),
        product(
            "PROD-003",
            "Headphones",
            "Noise-cancelling wireless headphones",
            Money::new(dec!(100)),
            30,
            "Audio",
        ),
        product(
            "PROD-004",
            "Tablet",
            "10-inch tablet with 64GB storage",
            Money::new(dec!(500)),
            8,
            "Electronics",
        ),
        product(
            "PROD-005",
            "Smart Watch",
            "Fitness tracking smartwatch with heart rate monitor",
            Money::new(dec!(250)),
            20,
            "Wearables",
        ),
    ]
}

struct SeedItem {
    product_id: &'static str,
    product_name: &'static str,
    quantity: u32,
    price: Money,
    discount: Money,
    total: Money,
}

fn item(seed: &SeedItem) -> OrderItem {
    OrderItem {
        product_id: ProductId::parse(seed.product_id).expect("seed item product id"),
        product_name: seed.product_name.to_owned(),
        quantity: seed.quantity,
        price: seed.price,
        discount: seed.discount,
        total: seed.total,
    }
}

/// The sample orders.
///
/// Totals are consistent with the line items by construction; a test below
/// keeps that honest.
#[must_use]
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::parse("ORD-001").expect("seed order id"),
            customer_id: CustomerId::parse("CUST-001").expect("seed order customer"),
            customer_name: "John Doe".to_owned(),
            items: vec![item(&SeedItem {
                product_id: "PROD-001",
                product_name: "Laptop",
                quantity: 1,
                price: Money::new(dec!(1200)),
                discount: Money::new(dec!(100)),
                total: Money::new(dec!(1100)),
            })],
            status: OrderStatus::Pending,
            payment_mode: PaymentMode::CreditCard,
            payment_type: PaymentType::FullPayment,
            address_line1: "123 Main St".to_owned(),
            address_line2: "Apt 4B".to_owned(),
            address_line3: String::new(),
            postal_code: "10001".to_owned(),
            city: "New York".to_owned(),
            state: "NY".to_owned(),
            mobile_number: Phone::parse("555-123-4567").expect("seed order phone"),
            email: Email::parse("john.doe@example.com").expect("seed order email"),
            created_at: ts("2023-06-01T10:30:00.000Z"),
            updated_at: ts("2023-06-01T10:30:00.000Z"),
            total: Money::new(dec!(1100)),
        },
        Order {
            id: OrderId::parse("ORD-002").expect("seed order id"),
            customer_id: CustomerId::parse("CUST-002").expect("seed order customer"),
            customer_name: "Jane Smith".to_owned(),
            items: vec![item(&SeedItem {
                product_id: "PROD-002",
                product_name: "Smartphone",
                quantity: 2,
                price: Money::new(dec!(800)),
                discount: Money::new(dec!(50)),
                total: Money::new(dec!(1550)),
            })],
            status: OrderStatus::Shipped,
            payment_mode: PaymentMode::PayPal,
            payment_type: PaymentType::Installment,
            address_line1: "456 Oak Ave".to_owned(),
            address_line2: String::new(),
            address_line3: String::new(),
            postal_code: "90210".to_owned(),
            city: "Beverly Hills".to_owned(),
            state: "CA".to_owned(),
            mobile_number: Phone::parse("555-987-6543").expect("seed order phone"),
            email: Email::parse("jane.smith@example.com").expect("seed order email"),
            created_at: ts("2023-06-10T14:20:00.000Z"),
            updated_at: ts("2023-06-11T09:15:00.000Z"),
            total: Money::new(dec!(1550)),
        },
        Order {
            id: OrderId::parse("ORD-003").expect("seed order id"),
            customer_id: CustomerId::parse("CUST-003").expect("seed order customer"),
            customer_name: "Robert Johnson".to_owned(),
            items: vec![item(&SeedItem {
                product_id: "PROD-003",
                product_name: "Headphones",
                quantity: 3,
                price: Money::new(dec!(100)),
                discount: Money::new(dec!(15)),
                total: Money::new(dec!(285)),
            })],
            status: OrderStatus::Delivered,
            payment_mode: PaymentMode::BankTransfer,
            payment_type: PaymentType::FullPayment,
            address_line1: "789 Pine St".to_owned(),
            address_line2: "Suite 101".to_owned(),
            address_line3: "Building A".to_owned(),
            postal_code: "60601".to_owned(),
            city: "Chicago".to_owned(),
            state: "IL".to_owned(),
            mobile_number: Phone::parse("555-456-7890").expect("seed order phone"),
            email: Email::parse("robert.j@example.com").expect("seed order email"),
            created_at: ts("2023-06-15T08:45:00.000Z"),
            updated_at: ts("2023-06-18T11:30:00.000Z"),
            total: Money::new(dec!(285)),
        },
        Order {
            id: OrderId::parse("ORD-004").expect("seed order id"),
            customer_id: CustomerId::parse("CUST-004").expect("seed order customer"),
            customer_name: "Emily Davis".to_owned(),
            items: vec![item(&SeedItem {
                product_id: "PROD-004",
                product_name: "Tablet",
                quantity: 1,
                price: Money::new(dec!(500)),
                discount: Money::ZERO,
                total: Money::new(dec!(500)),
            })],
            status: OrderStatus::Cancelled,
            payment_mode: PaymentMode::CreditCard,
            payment_type: PaymentType::FullPayment,
            address_line1: "321 Elm St".to_owned(),
            address_line2: String::new(),
            address_line3: String::new(),
            postal_code: "02108".to_owned(),
            city: "Boston".to_owned(),
            state: "MA".to_owned(),
            mobile_number: Phone::parse("555-789-0123").expect("seed order phone"),
            email: Email::parse("emily.davis@example.com").expect("seed order email"),
            created_at: ts("2023-06-20T16:10:00.000Z"),
            updated_at: ts("2023-06-21T09:05:00.000Z"),
            total: Money::new(dec!(500)),
        },
    ]
}
