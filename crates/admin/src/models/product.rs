//! Product domain type.

use serde::{Deserialize, Serialize};

use orderdesk_core::{Money, ProductId};

/// A catalog product.
///
/// `price` is the catalog price copied onto order lines at selection time;
/// editing it later never reaches into existing orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID (`PROD-NNNN`).
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Catalog price, non-negative.
    pub price: Money,
    /// Units in stock.
    pub stock: u32,
    /// Category label used for search and display.
    pub category: String,
}
