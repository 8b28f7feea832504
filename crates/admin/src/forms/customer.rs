//! Customer form controller.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use orderdesk_core::{CustomerId, Email, Phone};

use crate::models::Customer;
use crate::store::CustomerStore;

use super::{FieldErrors, FormError, FormMode, is_blank};

/// Raw customer fields as the UI submits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    /// The id this customer will be saved under, assigned at form open.
    pub id: CustomerId,
    /// Raw name input.
    pub name: String,
    /// Raw email input.
    pub email: String,
    /// Raw phone input.
    pub phone: String,
    /// Raw address input.
    pub address: String,
}

/// Controller for the customer create/edit form.
#[derive(Debug, Clone)]
pub struct CustomerForm {
    mode: FormMode,
    /// The draft under edit; the UI writes fields directly.
    pub draft: CustomerDraft,
}

impl CustomerForm {
    /// Open the form for a new customer, reserving its id from the store.
    pub fn create(store: &mut CustomerStore) -> Self {
        Self {
            mode: FormMode::Create,
            draft: CustomerDraft {
                id: store.next_id(),
                name: String::new(),
                email: String::new(),
                phone: String::new(),
                address: String::new(),
            },
        }
    }

    /// Open the form pre-filled from an existing customer.
    #[must_use]
    pub fn edit(customer: &Customer) -> Self {
        Self {
            mode: FormMode::Edit,
            draft: CustomerDraft {
                id: customer.id.clone(),
                name: customer.name.clone(),
                email: customer.email.as_str().to_owned(),
                phone: customer.phone.as_str().to_owned(),
                address: customer.address.clone(),
            },
        }
    }

    /// Whether this form creates or edits.
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    /// Validate the draft into a customer record.
    ///
    /// # Errors
    ///
    /// Returns the per-field error map when any rule fails; the map is
    /// never empty in that case.
    pub fn validate(&self) -> Result<Customer, FieldErrors> {
        let mut errors = FieldErrors::new();

        if is_blank(&self.draft.name) {
            errors.insert("name", "Name is required");
        }

        let email = Email::parse(&self.draft.email)
            .map_err(|_| errors.insert("email", "Valid email is required"))
            .ok();

        let phone = Phone::parse(&self.draft.phone)
            .map_err(|_| {
                errors.insert(
                    "phone",
                    "Valid phone number is required (format: 555-123-4567)",
                );
            })
            .ok();

        if is_blank(&self.draft.address) {
            errors.insert("address", "Address is required");
        }

        match (email, phone) {
            (Some(email), Some(phone)) if errors.is_empty() => Ok(Customer {
                id: self.draft.id.clone(),
                name: self.draft.name.clone(),
                email,
                phone,
                address: self.draft.address.clone(),
            }),
            _ => Err(errors),
        }
    }

    /// Validate and persist the draft.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Validation`] when the draft fails validation,
    /// or [`FormError::Store`] when the store rejects the mutation (e.g.
    /// the record was deleted while the edit form was open). The store is
    /// untouched in either case.
    #[instrument(skip_all, fields(id = %self.draft.id, mode = ?self.mode))]
    pub fn submit(&self, store: &mut CustomerStore) -> Result<Customer, FormError> {
        let customer = self.validate().map_err(FormError::Validation)?;

        match self.mode {
            FormMode::Create => store.add(customer.clone())?,
            FormMode::Edit => store.update(customer.clone())?,
        }

        debug!("customer saved");
        Ok(customer)
    }
}
