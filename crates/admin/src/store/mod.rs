//! In-memory entity stores.
//!
//! Each store exclusively owns one entity collection in insertion order and
//! is the only component permitted to mutate it. Mutations are synchronous
//! and immediately consistent; every successful mutation is announced to
//! subscribed listeners before the call returns.
//!
//! Two defects of the dashboard this engine replaces are closed here:
//! - ids come from a per-store monotonic sequence instead of a random
//!   4-digit draw, and `add` rejects duplicates outright;
//! - `update`/`delete` on an unknown id report [`StoreError::NotFound`]
//!   instead of silently doing nothing.

use core::fmt;

use thiserror::Error;
use tracing::{debug, instrument};

use orderdesk_core::{CustomerId, OrderId, ProductId};

use crate::models::{Customer, Order, Product};

/// An entity ID a store can generate and sequence.
pub trait RecordId: Clone + Eq + fmt::Display {
    /// Format a sequence number as an ID.
    fn from_seq(seq: u32) -> Self;
    /// The numeric suffix of this ID, if it fits `u32`.
    fn seq(&self) -> Option<u32>;
}

macro_rules! impl_record_id {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl RecordId for $ty {
                fn from_seq(seq: u32) -> Self {
                    Self::from_seq(seq)
                }

                fn seq(&self) -> Option<u32> {
                    Self::seq(self)
                }
            }
        )+
    };
}

impl_record_id!(CustomerId, ProductId, OrderId);

/// A record type a store can own.
pub trait Record: Clone {
    /// The typed ID keying this record.
    type Id: RecordId;

    /// Entity name used in errors and log events.
    const ENTITY: &'static str;

    /// The record's ID.
    fn id(&self) -> &Self::Id;
}

impl Record for Customer {
    type Id = CustomerId;

    const ENTITY: &'static str = "customer";

    fn id(&self) -> &CustomerId {
        &self.id
    }
}

impl Record for Product {
    type Id = ProductId;

    const ENTITY: &'static str = "product";

    fn id(&self) -> &ProductId {
        &self.id
    }
}

impl Record for Order {
    type Id = OrderId;

    const ENTITY: &'static str = "order";

    fn id(&self) -> &OrderId {
        &self.id
    }
}

/// Errors a store operation can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// `update` or `delete` named an id not present in the collection.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity name of the store.
        entity: &'static str,
        /// The id that was not found.
        id: String,
    },
    /// `add` was given a record whose id is already present.
    #[error("{entity} id {id} already exists")]
    DuplicateId {
        /// Entity name of the store.
        entity: &'static str,
        /// The colliding id.
        id: String,
    },
}

/// A change announced to store listeners after a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent<Id> {
    /// A record was appended.
    Added(Id),
    /// A record was replaced wholesale.
    Updated(Id),
    /// A record was removed.
    Deleted(Id),
    /// The whole collection was replaced (initial seed load).
    Replaced {
        /// Number of records now in the collection.
        count: usize,
    },
}

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerToken(u64);

type Listener<Id> = Box<dyn FnMut(&ChangeEvent<Id>)>;

/// An in-memory store owning one entity collection.
///
/// Records stay in insertion order; there is no sorting beyond it. The
/// store also owns the id sequence for its entity type: [`Store::next_id`]
/// hands out `<PREFIX>-NNNN` ids that never repeat for the store's
/// lifetime.
pub struct Store<R: Record> {
    records: Vec<R>,
    next_seq: u32,
    next_token: u64,
    listeners: Vec<(ListenerToken, Listener<R::Id>)>,
}

impl<R: Record> Store<R> {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            next_seq: 1,
            next_token: 0,
            listeners: Vec::new(),
        }
    }

    /// All records, in insertion order.
    #[must_use]
    pub fn list(&self) -> &[R] {
        &self.records
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Whether a record with this id exists.
    #[must_use]
    pub fn contains(&self, id: &R::Id) -> bool {
        self.get(id).is_some()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Hand out the next generated id for this store.
    ///
    /// Ids are monotonic and unique for the store's lifetime, even across
    /// seed loads (the sequence advances past every id it sees).
    pub fn next_id(&mut self) -> R::Id {
        let id = R::Id::from_seq(self.next_seq);
        self.next_seq += 1;
        id
    }

    /// Append a record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if a record with the same id is
    /// already present; the collection is untouched in that case.
    #[instrument(skip_all, fields(entity = R::ENTITY, id = %record.id()))]
    pub fn add(&mut self, record: R) -> Result<(), StoreError> {
        if self.contains(record.id()) {
            return Err(StoreError::DuplicateId {
                entity: R::ENTITY,
                id: record.id().to_string(),
            });
        }

        self.advance_past(record.id());
        let id = record.id().clone();
        self.records.push(record);
        debug!("record added");
        self.emit(&ChangeEvent::Added(id));
        Ok(())
    }

    /// Replace the record with the same id wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record carries the id; the
    /// collection is untouched in that case.
    #[instrument(skip_all, fields(entity = R::ENTITY, id = %record.id()))]
    pub fn update(&mut self, record: R) -> Result<(), StoreError> {
        let id = record.id().clone();
        let Some(slot) = self.records.iter_mut().find(|r| *r.id() == id) else {
            return Err(StoreError::NotFound {
                entity: R::ENTITY,
                id: id.to_string(),
            });
        };

        *slot = record;
        debug!("record updated");
        self.emit(&ChangeEvent::Updated(id));
        Ok(())
    }

    /// Remove the record with this id and return it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record carries the id.
    #[instrument(skip_all, fields(entity = R::ENTITY, id = %id))]
    pub fn delete(&mut self, id: &R::Id) -> Result<R, StoreError> {
        let Some(pos) = self.records.iter().position(|r| r.id() == id) else {
            return Err(StoreError::NotFound {
                entity: R::ENTITY,
                id: id.to_string(),
            });
        };

        let record = self.records.remove(pos);
        debug!("record deleted");
        self.emit(&ChangeEvent::Deleted(id.clone()));
        Ok(record)
    }

    /// Replace the whole collection, used for the initial seed load.
    ///
    /// The id sequence restarts past the highest numeric suffix present so
    /// generated ids never collide with seeded ones.
    #[instrument(skip_all, fields(entity = R::ENTITY, count = records.len()))]
    pub fn replace_all(&mut self, records: Vec<R>) {
        self.next_seq = records
            .iter()
            .filter_map(|r| r.id().seq())
            .max()
            .map_or(1, |max| max + 1);
        let count = records.len();
        self.records = records;
        debug!("collection replaced");
        self.emit(&ChangeEvent::Replaced { count });
    }

    /// Register a listener called synchronously after every mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerToken
    where
        F: FnMut(&ChangeEvent<R::Id>) + 'static,
    {
        let token = ListenerToken(self.next_token);
        self.next_token += 1;
        self.listeners.push((token, Box::new(listener)));
        token
    }

    /// Drop a listener. Returns whether the token was still registered.
    pub fn unsubscribe(&mut self, token: ListenerToken) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(t, _)| *t != token);
        self.listeners.len() != before
    }

    fn advance_past(&mut self, id: &R::Id) {
        if let Some(seq) = id.seq() {
            self.next_seq = self.next_seq.max(seq.saturating_add(1));
        }
    }

    fn emit(&mut self, event: &ChangeEvent<R::Id>) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}

impl<R: Record> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record + fmt::Debug> fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("entity", &R::ENTITY)
            .field("records", &self.records)
            .field("next_seq", &self.next_seq)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Store holding the customer collection.
pub type CustomerStore = Store<Customer>;
/// Store holding the product catalog.
pub type ProductStore = Store<Product>;
/// Store holding the order collection.
pub type OrderStore = Store<Order>;
