//! Customer domain type.

use serde::{Deserialize, Serialize};

use orderdesk_core::{CustomerId, Email, Phone};

/// A customer record.
///
/// Mutated only by whole-record replacement through the customer store;
/// orders keep denormalized copies of the contact fields rather than
/// references, so editing or deleting a customer never reaches into
/// existing orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Unique customer ID (`CUST-NNNN`).
    pub id: CustomerId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: Email,
    /// Contact phone number.
    pub phone: Phone,
    /// Free-text postal address.
    pub address: String,
}
