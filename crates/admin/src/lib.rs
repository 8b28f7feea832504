//! OrderDesk Admin - dashboard state engine.
//!
//! This crate holds everything behind the order-management dashboard's UI:
//! the in-memory entity stores, the order composition rule, the form
//! controllers, and the table view descriptors. The UI layer (routing,
//! markup, toast rendering) is an external collaborator: it dispatches
//! intents into [`state::AdminState`] and renders whatever the engine
//! exposes.
//!
//! # Architecture
//!
//! - [`store`] - Generic in-memory store owning one entity collection
//! - [`models`] - Customer, Product, and Order records
//! - [`compose`] - Order drafts and the derived-field rules
//! - [`forms`] - Validation and submission of drafts
//! - [`views`] - Typed table columns, search filtering, row intents
//! - [`notify`] - Toast-shaped notifications for the UI to drain
//! - [`seed`] - The fixed sample data loaded on process start
//! - [`state`] - The engine facade composing all of the above
//!
//! All data lives for the process lifetime only; a fresh
//! [`state::AdminState::with_seed_data`] resets to the sample set.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod compose;
pub mod forms;
pub mod models;
pub mod notify;
pub mod seed;
pub mod state;
pub mod store;
pub mod views;
