//! Form controllers.
//!
//! Each controller holds a draft (the raw, not-yet-validated record the UI
//! is editing), validates on submit, and either persists to the matching
//! store or rejects with a per-field error map. Validation fails closed:
//! any field error blocks the whole submission and nothing is persisted.
//! A successful submit is the close signal: the UI dismisses the form and
//! shows the queued success toast; on rejection it stays open and renders
//! the field errors inline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::StoreError;

pub mod customer;
pub mod order;
pub mod product;

pub use customer::{CustomerDraft, CustomerForm};
pub use order::OrderForm;
pub use product::{ProductDraft, ProductForm};

/// Whether a form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// The draft will be `add`ed under a freshly assigned id.
    Create,
    /// The draft will `update` the record it was opened from.
    Edit,
}

/// Per-field validation messages, keyed the way the UI renders them
/// (camelCase field names; order lines use `item-<index>-<field>`).
///
/// Keys iterate in a stable order so rendered messages do not jump around.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// An empty error map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Record a message for a field, replacing any earlier one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// The message for a field, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Whether any field has a message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Why a submission did not persist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The draft failed validation; nothing was persisted.
    #[error("please fix the errors in the form")]
    Validation(FieldErrors),
    /// The store rejected the mutation (stale edit, duplicate id).
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// True when the value is empty once trimmed; used for required-field
/// checks.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_iterate_in_field_order() {
        let mut errors = FieldErrors::new();
        errors.insert("phone", "Valid phone number is required");
        errors.insert("address", "Address is required");
        errors.insert("email", "Valid email is required");

        let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, ["address", "email", "phone"]);
    }

    #[test]
    fn test_field_errors_serialize_as_plain_map() {
        let mut errors = FieldErrors::new();
        errors.insert("email", "Valid email is required");

        let json = serde_json::to_value(&errors).expect("serialize");
        assert_eq!(json["email"], "Valid email is required");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(!is_blank(" x "));
    }
}
