//! Table view descriptors.
//!
//! Tables render whatever their store holds, filtered by a search term and
//! in insertion order; nothing here sorts or mutates. Cell rendering goes
//! through typed column descriptors instead of duck-typed renderers, so the
//! view layer stays decoupled from each entity's concrete shape.

use serde::{Deserialize, Serialize};

pub mod tables;

/// One column of a table: a header and a typed cell extractor.
pub struct Column<R> {
    /// Header label.
    pub header: &'static str,
    /// Extracts the display value for one row.
    pub extract: fn(&R) -> String,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Column<R> {}

/// A record type a table knows how to display and search.
pub trait TableRow: Sized {
    /// Columns in display order.
    fn columns() -> &'static [Column<Self>];

    /// The field values the search box matches against.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match over the search fields.
    ///
    /// `needle` must already be lowercased; [`filter`] takes care of that.
    fn matches(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Filter rows by a search term, preserving insertion order.
///
/// The match is a case-insensitive substring test across the entity's
/// fixed search fields; an empty or whitespace-only term matches
/// everything.
#[must_use]
pub fn filter<'a, R: TableRow>(rows: &'a [R], term: &str) -> Vec<&'a R> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return rows.iter().collect();
    }

    rows.iter().filter(|row| row.matches(&needle)).collect()
}

/// Render one row through the entity's column descriptors.
#[must_use]
pub fn render_row<R: TableRow + 'static>(row: &R) -> Vec<String> {
    R::columns().iter().map(|col| (col.extract)(row)).collect()
}

/// Header labels in display order.
#[must_use]
pub fn headers<R: TableRow + 'static>() -> Vec<&'static str> {
    R::columns().iter().map(|col| col.header).collect()
}

/// What a table row asks the surrounding page to do.
///
/// Delete is two-phase: the intent only opens a confirmation, tracked by
/// [`DeleteConfirmation`]; the store mutation runs on explicit confirm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", content = "id", rename_all = "lowercase")]
pub enum RowIntent<Id> {
    /// Open the read-only detail view.
    View(Id),
    /// Open the edit form.
    Edit(Id),
    /// Ask for delete confirmation.
    Delete(Id),
}

/// Tracks the pending "are you sure?" step between a delete intent and the
/// store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation<Id> {
    pending: Option<Id>,
}

impl<Id> DeleteConfirmation<Id> {
    /// No deletion pending.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Open the confirmation for `id`, replacing any earlier request.
    pub fn request(&mut self, id: Id) {
        self.pending = Some(id);
    }

    /// The id awaiting confirmation, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&Id> {
        self.pending.as_ref()
    }

    /// Dismiss the confirmation without deleting.
    pub fn cancel(&mut self) -> Option<Id> {
        self.pending.take()
    }

    /// Confirm, handing back the id so the caller can run the deletion.
    pub fn confirm(&mut self) -> Option<Id> {
        self.pending.take()
    }
}

impl<Id> Default for DeleteConfirmation<Id> {
    fn default() -> Self {
        Self::new()
    }
}
