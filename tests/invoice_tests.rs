//! Integration tests for the invoice tracker

use proptest::prelude::*;
use quoin::prelude::*;

#[test]
fn test_set_status_scenario_property_c() {
    let tracker = InvoiceTracker::seeded();
    let initial = tracker.get(3).unwrap().clone();
    assert_eq!(initial.property, "Property C");
    assert_eq!(initial.status, InvoiceStatus::Overdue);

    let (tracker, outcome) = tracker.reduce(
        InvoiceAction::SetStatus {
            id: 3,
            status: InvoiceStatus::Paid,
        },
        &SystemClock,
    );

    assert_eq!(outcome, UpdateOutcome::Updated);
    let invoice = tracker.get(3).unwrap();
    assert_eq!(invoice.status, InvoiceStatus::Paid);
    assert_eq!(invoice.amount, 6000.0);
    assert_eq!(invoice.due_date.to_string(), "2023-09-01");
}

#[test]
fn test_set_status_leaves_other_invoices_alone() {
    let mut tracker = InvoiceTracker::seeded();
    let before = tracker.clone();

    tracker.set_status(2, InvoiceStatus::Overdue);

    assert_eq!(tracker.invoices()[0], before.invoices()[0]);
    assert_eq!(tracker.invoices()[2], before.invoices()[2]);
    assert_eq!(tracker.get(2).unwrap().status, InvoiceStatus::Overdue);
}

#[test]
fn test_setting_current_status_still_counts_as_update() {
    let mut tracker = InvoiceTracker::seeded();
    let before = tracker.clone();

    assert_eq!(tracker.set_status(2, InvoiceStatus::Paid), UpdateOutcome::Updated);
    assert_eq!(tracker, before);
}

fn any_status() -> impl Strategy<Value = InvoiceStatus> {
    prop_oneof![
        Just(InvoiceStatus::Pending),
        Just(InvoiceStatus::Paid),
        Just(InvoiceStatus::Overdue),
    ]
}

proptest! {
    #[test]
    fn prop_unknown_ids_are_noops(id in 4u32.., status in any_status()) {
        let tracker = InvoiceTracker::seeded();
        let original = tracker.clone();

        let (tracker, outcome) = tracker.reduce(InvoiceAction::SetStatus { id, status }, &SystemClock);

        prop_assert_eq!(outcome, UpdateOutcome::NotFound);
        prop_assert_eq!(tracker, original);
    }

    #[test]
    fn prop_set_status_touches_only_status(id in 1u32..=3, status in any_status()) {
        let tracker = InvoiceTracker::seeded();
        let original = tracker.get(id).unwrap().clone();

        let (tracker, _) = tracker.reduce(InvoiceAction::SetStatus { id, status }, &SystemClock);

        let invoice = tracker.get(id).unwrap();
        prop_assert_eq!(invoice.status, status);
        prop_assert_eq!(invoice.amount, original.amount);
        prop_assert_eq!(invoice.due_date, original.due_date);
        prop_assert_eq!(&invoice.property, &original.property);
    }
}
