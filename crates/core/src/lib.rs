//! OrderDesk Core - Shared types library.
//!
//! This crate provides common types used across all OrderDesk components:
//! - `admin` - The dashboard state engine (stores, forms, views)
//! - `integration-tests` - Cross-module scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no clock reads, no stores.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, phone numbers,
//!   money, and status enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
