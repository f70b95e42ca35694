//! Event-flow tests for the headless contact session.

mod mocks;

use contact_book::{
    Contact, ContactDraft, ContactId, ContactSession, ContactStore, FormMode, Metrics, Row,
    StoreError,
};
use mocks::MockContactSource;

fn directory() -> Vec<Contact> {
    vec![
        Contact::new(
            ContactId::new("1").unwrap(),
            ContactDraft::new("Ann", "Lee", "555-1"),
        ),
        Contact::new(
            ContactId::new("2").unwrap(),
            ContactDraft::new("Bob", "Ray", "555-2"),
        ),
    ]
}

async fn booted() -> ContactSession {
    let mut session = ContactSession::new(ContactStore::new());
    assert!(session.bootstrap(&MockContactSource::new(directory())).await);
    session
}

fn row_ids(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .filter_map(|row| match row {
            Row::Contact(c) => Some(c.id.to_string()),
            Row::Message { .. } => None,
        })
        .collect()
}

#[tokio::test]
async fn test_bootstrap_seeds_store() {
    let source = MockContactSource::new(directory());
    let mut session = ContactSession::new(ContactStore::new());

    assert!(session.bootstrap(&source).await);
    assert_eq!(source.fetch_count(), 1);
    assert_eq!(row_ids(&session.rows()), vec!["1", "2"]);
    assert!(session.empty_notice().is_none());
}

#[tokio::test]
async fn test_failed_bootstrap_leaves_store_empty() {
    let metrics = Metrics::new();
    let mut session = ContactSession::new(ContactStore::new().with_metrics(metrics.clone()));

    assert!(!session.bootstrap(&MockContactSource::failing("network down")).await);
    assert!(session.store().is_empty());
    assert!(session.rows().is_empty());
    assert_eq!(session.empty_notice(), Some("No contacts found."));
    assert_eq!(metrics.load_failures_total(), 1);
}

#[tokio::test]
async fn test_failed_reload_keeps_prior_state() {
    let mut session = booted().await;
    assert!(!session.bootstrap(&MockContactSource::failing("timeout")).await);
    assert_eq!(session.store().len(), 2);
}

#[tokio::test]
async fn test_search_keystrokes_rerender() {
    let mut session = booted().await;

    session.set_query("b");
    assert_eq!(row_ids(&session.rows()), vec!["2"]);

    session.set_query("555");
    assert_eq!(row_ids(&session.rows()), vec!["1", "2"]);

    session.set_query("xyz");
    assert_eq!(
        session.rows(),
        vec![Row::Message {
            text: "No contacts found.".to_string()
        }]
    );
}

#[tokio::test]
async fn test_edit_flow_updates_in_place() {
    let mut session = booted().await;
    let bob = session.store().contacts()[1].clone();

    session.open_edit(&bob);
    assert_eq!(session.form().unwrap().mode, FormMode::Edit(bob.id.clone()));
    assert_eq!(session.form().unwrap().draft.first_name, "Bob");

    session.draft_mut().unwrap().first_name = "Bobby".to_string();
    let updated = session.submit_form().unwrap().unwrap();

    assert_eq!(updated.id, bob.id);
    assert_eq!(updated.last_name, "Ray");
    assert!(session.form().is_none());
    assert_eq!(session.store().contacts()[1].first_name, "Bobby");
}

#[tokio::test]
async fn test_add_flow_appends() {
    let mut session = booted().await;

    session.open_create();
    {
        let draft = session.draft_mut().unwrap();
        draft.first_name = "Cat".to_string();
        draft.phone = "555-3".to_string();
    }
    let cat = session.submit_form().unwrap().unwrap();

    assert_eq!(row_ids(&session.rows()), vec!["1".to_string(), "2".to_string(), cat.id.to_string()]);
}

#[tokio::test]
async fn test_edit_of_deleted_contact_reports_not_found() {
    let mut session = booted().await;
    let ann = session.store().contacts()[0].clone();

    session.open_edit(&ann);
    session.request_delete(ann.id.clone());
    assert!(session.confirm_delete());

    let result = session.submit_form();
    assert_eq!(result, Err(StoreError::NotFound(ann.id)));
    assert!(session.form().is_none());
    assert_eq!(session.store().len(), 1);
}

#[tokio::test]
async fn test_cancelled_delete_keeps_contact() {
    let mut session = booted().await;
    session.request_delete(ContactId::new("2").unwrap());
    session.cancel_delete();

    assert!(!session.confirm_delete());
    assert_eq!(session.store().len(), 2);
}
