//! The order-total invariants across item add/remove/edit sequences.

#![allow(clippy::unwrap_used)]

use orderdesk_admin::compose::{OrderDraft, line_total, order_total};
use orderdesk_admin::forms::OrderForm;
use orderdesk_admin::state::AdminState;
use orderdesk_core::{CustomerId, Money, ProductId};
use orderdesk_integration_tests::seeded_state;
use rust_decimal_macros::dec;

fn totals_hold(draft: &OrderDraft) {
    for item in &draft.items {
        assert_eq!(
            item.total,
            line_total(item.quantity, item.price, item.discount)
        );
    }
    assert_eq!(draft.total, order_total(&draft.items));
}

fn open_order_form(state: &mut AdminState) -> OrderForm {
    let mut form = state.open_order_create();
    form.select_customer(&CustomerId::parse("CUST-001").unwrap(), &state.customers);
    form
}

#[test]
fn totals_stay_consistent_through_every_edit() {
    let mut state = seeded_state();
    let mut form = open_order_form(&mut state);
    let laptop = ProductId::parse("PROD-001").unwrap();
    let headphones = ProductId::parse("PROD-003").unwrap();

    let first = form.draft.add_item();
    totals_hold(&form.draft);

    form.select_product(first, &laptop, &state.products);
    totals_hold(&form.draft);
    assert_eq!(form.draft.total, Money::new(dec!(1200)));

    form.draft.set_quantity(first, 3);
    totals_hold(&form.draft);
    assert_eq!(form.draft.total, Money::new(dec!(3600)));

    let second = form.draft.add_item();
    form.select_product(second, &headphones, &state.products);
    form.draft.set_quantity(second, 2);
    form.draft.set_discount(second, Money::new(dec!(15)));
    totals_hold(&form.draft);
    assert_eq!(form.draft.total, Money::new(dec!(3785)));

    form.draft.set_price(first, Money::new(dec!(1000)));
    totals_hold(&form.draft);
    assert_eq!(form.draft.total, Money::new(dec!(3185)));

    form.draft.remove_item(first);
    totals_hold(&form.draft);
    assert_eq!(form.draft.total, Money::new(dec!(185)));

    form.draft.remove_item(0);
    totals_hold(&form.draft);
    assert_eq!(form.draft.total, Money::ZERO);
}

#[test]
fn recomputing_without_edits_changes_nothing() {
    let mut state = seeded_state();
    let mut form = open_order_form(&mut state);
    let index = form.draft.add_item();
    form.select_product(index, &ProductId::parse("PROD-002").unwrap(), &state.products);
    form.draft.set_quantity(index, 2);
    form.draft.set_discount(index, Money::new(dec!(50)));

    let before = form.draft.clone();
    form.draft.recompute_totals();
    assert_eq!(form.draft, before);
}

#[test]
fn oversized_discount_carries_negative_totals_unclamped() {
    let mut state = seeded_state();
    let mut form = open_order_form(&mut state);
    let index = form.draft.add_item();
    form.select_product(index, &ProductId::parse("PROD-003").unwrap(), &state.products);

    // Discount exceeds the line value: 1 * 100 - 250 = -150.
    form.draft.set_discount(index, Money::new(dec!(250)));
    totals_hold(&form.draft);
    assert_eq!(form.draft.items[index].total, Money::new(dec!(-150)));
    assert_eq!(form.draft.total, Money::new(dec!(-150)));
    assert!(form.draft.total.is_negative());
}

#[test]
fn saved_orders_preserve_the_invariant() {
    let mut state = seeded_state();
    let mut form = open_order_form(&mut state);
    let index = form.draft.add_item();
    form.select_product(index, &ProductId::parse("PROD-001").unwrap(), &state.products);
    form.draft.set_quantity(index, 2);
    form.draft.payment_mode = "Credit Card".to_owned();
    form.draft.payment_type = "Full Payment".to_owned();
    form.draft.address_line1 = "1 Rd".to_owned();
    form.draft.postal_code = "10001".to_owned();
    form.draft.city = "New York".to_owned();
    form.draft.state = "NY".to_owned();

    let saved = state.submit_order(&form).unwrap();
    let sum: Money = saved.items.iter().map(|item| item.total).sum();
    assert_eq!(saved.total, sum);

    // The same holds for every seeded order.
    for order in state.orders.list() {
        let sum: Money = order.items.iter().map(|item| item.total).sum();
        assert_eq!(order.total, sum);
    }
}
