//! Integration tests for OrderDesk.
//!
//! The tests under `tests/` drive the engine the way the dashboard UI
//! does: open a form on [`orderdesk_admin::state::AdminState`], edit the
//! draft, submit, and observe collections, notifications, and errors
//! through the public API only.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p orderdesk-integration-tests
//! ```

use orderdesk_admin::forms::CustomerForm;
use orderdesk_admin::state::AdminState;

/// Install a test subscriber honoring `RUST_LOG`, once per process.
///
/// Later calls are no-ops, so every test can call this first.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// An engine loaded with the fixed sample data.
#[must_use]
pub fn seeded_state() -> AdminState {
    init_tracing();
    AdminState::with_seed_data()
}

/// A customer form filled with Ann Lee's valid details.
pub fn ann_lee_form(state: &mut AdminState) -> CustomerForm {
    let mut form = state.open_customer_create();
    form.draft.name = "Ann Lee".to_owned();
    form.draft.email = "ann@x.com".to_owned();
    form.draft.phone = "555-111-2222".to_owned();
    form.draft.address = "1 Rd".to_owned();
    form
}
