//! Entity records owned by the stores.
//!
//! These are validated domain objects; raw form input lives in the draft
//! types under [`crate::compose`] and [`crate::forms`] until validation.

pub mod customer;
pub mod order;
pub mod product;

pub use customer::Customer;
pub use order::{Order, OrderItem};
pub use product::Product;
