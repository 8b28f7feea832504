//! Product form controller.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use orderdesk_core::{Money, ProductId};

use crate::models::Product;
use crate::store::ProductStore;

use super::{FieldErrors, FormError, FormMode, is_blank};

/// Raw product fields as the UI submits them.
///
/// `price` and `stock` stay text until validation; number inputs submit
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    /// The id this product will be saved under, assigned at form open.
    pub id: ProductId,
    /// Raw name input.
    pub name: String,
    /// Raw description input.
    pub description: String,
    /// Raw price input.
    pub price: String,
    /// Raw stock input.
    pub stock: String,
    /// Raw category input.
    pub category: String,
}

/// Controller for the product create/edit form.
#[derive(Debug, Clone)]
pub struct ProductForm {
    mode: FormMode,
    /// The draft under edit; the UI writes fields directly.
    pub draft: ProductDraft,
}

impl ProductForm {
    /// Open the form for a new product, reserving its id from the store.
    pub fn create(store: &mut ProductStore) -> Self {
        Self {
            mode: FormMode::Create,
            draft: ProductDraft {
                id: store.next_id(),
                name: String::new(),
                description: String::new(),
                price: String::new(),
                stock: String::new(),
                category: String::new(),
            },
        }
    }

    /// Open the form pre-filled from an existing product.
    #[must_use]
    pub fn edit(product: &Product) -> Self {
        Self {
            mode: FormMode::Edit,
            draft: ProductDraft {
                id: product.id.clone(),
                name: product.name.clone(),
                description: product.description.clone(),
                price: product.price.amount().to_string(),
                stock: product.stock.to_string(),
                category: product.category.clone(),
            },
        }
    }

    /// Whether this form creates or edits.
    #[must_use]
    pub const fn mode(&self) -> FormMode {
        self.mode
    }

    /// Validate the draft into a product record.
    ///
    /// # Errors
    ///
    /// Returns the per-field error map when any rule fails.
    pub fn validate(&self) -> Result<Product, FieldErrors> {
        let mut errors = FieldErrors::new();

        if is_blank(&self.draft.name) {
            errors.insert("name", "Name is required");
        }
        if is_blank(&self.draft.description) {
            errors.insert("description", "Description is required");
        }
        if is_blank(&self.draft.category) {
            errors.insert("category", "Category is required");
        }

        let price = match Money::parse(&self.draft.price) {
            Ok(price) if !price.is_negative() => Some(price),
            _ => {
                errors.insert(
                    "price",
                    "Price must be a valid number greater than or equal to 0",
                );
                None
            }
        };

        let stock = match self.draft.stock.trim().parse::<u32>() {
            Ok(stock) => Some(stock),
            Err(_) => {
                errors.insert(
                    "stock",
                    "Stock must be a valid integer greater than or equal to 0",
                );
                None
            }
        };

        match (price, stock) {
            (Some(price), Some(stock)) if errors.is_empty() => Ok(Product {
                id: self.draft.id.clone(),
                name: self.draft.name.clone(),
                description: self.draft.description.clone(),
                price,
                stock,
                category: self.draft.category.clone(),
            }),
            _ => Err(errors),
        }
    }

    /// Validate and persist the draft.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Validation`] when the draft fails validation,
    /// or [`FormError::Store`] when the store rejects the mutation. The
    /// store is untouched in either case.
    #[instrument(skip_all, fields(id = %self.draft.id, mode = ?self.mode))]
    pub fn submit(&self, store: &mut ProductStore) -> Result<Product, FormError> {
        let product = self.validate().map_err(FormError::Validation)?;

        match self.mode {
            FormMode::Create => store.add(product.clone())?,
            FormMode::Edit => store.update(product.clone())?,
        }

        debug!("product saved");
        Ok(product)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn filled_form(store: &mut ProductStore) -> ProductForm {
        let mut form = ProductForm::create(store);
        form.draft.name = "Laptop".to_owned();
        form.draft.description = "High-performance laptop".to_owned();
        form.draft.price = "1200".to_owned();
        form.draft.stock = "10".to_owned();
        form.draft.category = "Electronics".to_owned();
        form
    }

    #[test]
    fn test_valid_draft_submits() {
        let mut store = ProductStore::new();
        let saved = filled_form(&mut store).submit(&mut store).unwrap();

        assert_eq!(saved.id.as_str(), "PROD-0001");
        assert_eq!(saved.price, Money::new(dec!(1200)));
        assert_eq!(saved.stock, 10);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_decimal_price_accepted() {
        let mut store = ProductStore::new();
        let mut form = filled_form(&mut store);
        form.draft.price = "19.99".to_owned();

        let saved = form.submit(&mut store).unwrap();
        assert_eq!(saved.price, Money::new(dec!(19.99)));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut store = ProductStore::new();
        let mut form = filled_form(&mut store);
        form.draft.price = "-5".to_owned();

        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get("price"),
            Some("Price must be a valid number greater than or equal to 0")
        );
    }

    #[test]
    fn test_non_numeric_price_rejected() {
        let mut store = ProductStore::new();
        let mut form = filled_form(&mut store);
        form.draft.price = "free".to_owned();

        assert!(form.validate().unwrap_err().get("price").is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn test_fractional_or_negative_stock_rejected() {
        let mut store = ProductStore::new();

        for bad in ["2.5", "-1", "lots", ""] {
            let mut form = filled_form(&mut store);
            form.draft.stock = bad.to_owned();
            let errors = form.validate().unwrap_err();
            assert_eq!(
                errors.get("stock"),
                Some("Stock must be a valid integer greater than or equal to 0"),
                "stock input {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_zero_stock_and_zero_price_accepted() {
        let mut store = ProductStore::new();
        let mut form = filled_form(&mut store);
        form.draft.price = "0".to_owned();
        form.draft.stock = "0".to_owned();

        let saved = form.validate().unwrap();
        assert_eq!(saved.price, Money::ZERO);
        assert_eq!(saved.stock, 0);
    }

    #[test]
    fn test_blank_text_fields_rejected() {
        let mut store = ProductStore::new();
        let mut form = filled_form(&mut store);
        form.draft.name = " ".to_owned();
        form.draft.description = String::new();
        form.draft.category = "\t".to_owned();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_edit_roundtrips_price_and_stock_text() {
        let mut store = ProductStore::new();
        let saved = filled_form(&mut store).submit(&mut store).unwrap();

        let form = ProductForm::edit(&saved);
        assert_eq!(form.draft.price, "1200");
        assert_eq!(form.draft.stock, "10");
        assert_eq!(form.mode(), FormMode::Edit);
    }
}
