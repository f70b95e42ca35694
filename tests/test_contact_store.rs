//! Behavioural tests for the contact store's query/mutation protocol.

use contact_book::{
    Contact, ContactDraft, ContactId, ContactStore, SearchOutcome, StoreError, ValidationPolicy,
};
use std::collections::HashSet;

fn id(value: &str) -> ContactId {
    ContactId::new(value).unwrap()
}

fn contact(value: &str, first: &str, phone: &str) -> Contact {
    Contact::new(id(value), ContactDraft::new(first, "", phone))
}

fn ids(contacts: &[Contact]) -> Vec<String> {
    contacts.iter().map(|c| c.id.to_string()).collect()
}

/// The two-contact collection used by the scenarios.
fn ann_and_bob() -> ContactStore {
    let mut store = ContactStore::new();
    store.bulk_load(vec![
        contact("1", "Ann", "555-1"),
        contact("2", "Bob", "555-2"),
    ]);
    store
}

#[test]
fn test_scenario_search() {
    let store = ann_and_bob();

    assert_eq!(ids(store.search("an").contacts()), vec!["1"]);
    assert_eq!(ids(store.search("555").contacts()), vec!["1", "2"]);
    assert_eq!(
        store.search("zzz"),
        SearchOutcome::Empty {
            message: "No contacts found.".to_string()
        }
    );
}

#[test]
fn test_scenario_add() {
    let mut store = ann_and_bob();
    let cat = store.add(ContactDraft::new("Cat", "", "")).unwrap();

    assert_eq!(store.len(), 3);
    assert_eq!(store.contacts()[2], cat);
    assert!(cat.id != id("1") && cat.id != id("2"));
}

#[test]
fn test_scenario_update() {
    let mut store = ann_and_bob();
    store
        .update(&id("2"), ContactDraft::new("Bobby", "", "555-2"))
        .unwrap();

    let contacts = store.contacts();
    assert_eq!(ids(contacts), vec!["1", "2"]);
    assert_eq!(contacts[0].first_name, "Ann");
    assert_eq!(contacts[1].first_name, "Bobby");
}

#[test]
fn test_scenario_delete_then_list() {
    let mut store = ann_and_bob();
    assert!(store.delete(&id("1")));
    assert_eq!(ids(store.search("").contacts()), vec!["2"]);
}

#[test]
fn test_added_ids_are_pairwise_distinct() {
    let mut store = ann_and_bob();
    let mut seen = HashSet::new();
    for n in 0..200 {
        let added = store.add(ContactDraft::new(format!("P{}", n), "", "")).unwrap();
        assert!(seen.insert(added.id));
    }
    assert_eq!(store.len(), 202);
}

#[test]
fn test_ids_not_reused_after_delete() {
    let mut store = ContactStore::new();
    let first = store.add(ContactDraft::new("Ann", "", "")).unwrap();
    assert!(store.delete(&first.id));

    let second = store.add(ContactDraft::new("Ann", "", "")).unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn test_ids_not_reused_after_reload() {
    let mut store = ContactStore::new();
    let first = store.add(ContactDraft::new("Ann", "", "")).unwrap();
    store.bulk_load(Vec::new());

    let second = store.add(ContactDraft::new("Bob", "", "")).unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn test_delete_and_update_preserve_order() {
    let mut store = ContactStore::new();
    store.bulk_load(vec![
        contact("a", "A", ""),
        contact("b", "B", ""),
        contact("c", "C", ""),
        contact("d", "D", ""),
    ]);

    store.update(&id("c"), ContactDraft::new("Cee", "", "")).unwrap();
    store.delete(&id("b"));
    let added = store.add(ContactDraft::new("E", "", "")).unwrap();

    assert_eq!(
        ids(store.contacts()),
        vec!["a".to_string(), "c".to_string(), "d".to_string(), added.id.to_string()]
    );
}

#[test]
fn test_search_matches_exact_subset_in_order() {
    let mut store = ContactStore::new();
    store.bulk_load(vec![
        contact("1", "Maria", "0101"),
        contact("2", "", "0202"),
        contact("3", "MARK", ""),
        contact("4", "Tom", "mar-123"),
        contact("5", "Zed", "9999"),
    ]);

    let query = "Mar";
    let needle = query.to_lowercase();
    let expected: Vec<String> = store
        .contacts()
        .iter()
        .filter(|c| {
            c.first_name.to_lowercase().contains(&needle) || c.phone.to_lowercase().contains(&needle)
        })
        .map(|c| c.id.to_string())
        .collect();

    assert_eq!(ids(store.search(query).contacts()), expected);
    assert_eq!(expected, vec!["1", "3", "4"]);
}

#[test]
fn test_search_ignores_last_name() {
    let mut store = ContactStore::new();
    store.bulk_load(vec![Contact::new(
        id("1"),
        ContactDraft::new("Ann", "Whitaker", "555"),
    )]);
    assert!(store.search("whit").is_empty());
}

#[test]
fn test_empty_query_returns_collection_unchanged() {
    let store = ann_and_bob();
    match store.search("") {
        SearchOutcome::Found { contacts } => assert_eq!(contacts, store.contacts()),
        other => panic!("Expected Found, got: {:?}", other),
    }
}

#[test]
fn test_placeholder_is_never_mixed_with_contacts() {
    let store = ann_and_bob();
    let outcome = store.search("nobody");
    assert!(outcome.is_empty());
    assert!(outcome.contacts().is_empty());
    assert_eq!(store.len(), 2);
}

#[test]
fn test_search_on_empty_store_is_placeholder() {
    let store = ContactStore::new();
    assert_eq!(
        store.search("ann"),
        SearchOutcome::Empty {
            message: "No contacts found.".to_string()
        }
    );
    assert_eq!(
        store.search(""),
        SearchOutcome::Found {
            contacts: Vec::new()
        }
    );
}

#[test]
fn test_update_twice_equals_once() {
    let mut once = ann_and_bob();
    let mut twice = ann_and_bob();
    let draft = ContactDraft::new("Bobby", "B", "555-22");

    let a = once.update(&id("2"), draft.clone()).unwrap();
    twice.update(&id("2"), draft.clone()).unwrap();
    let b = twice.update(&id("2"), draft).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.id, id("2"));
    assert_eq!(once.contacts(), twice.contacts());
}

#[test]
fn test_delete_nonexistent_changes_nothing() {
    let mut store = ann_and_bob();
    let before = store.contacts().to_vec();
    assert!(!store.delete(&id("nonexistent")));
    assert_eq!(store.contacts(), before.as_slice());
}

#[test]
fn test_update_nonexistent_is_recoverable() {
    let mut store = ann_and_bob();
    let result = store.update(&id("nonexistent"), ContactDraft::new("X", "", ""));
    assert_eq!(result, Err(StoreError::NotFound(id("nonexistent"))));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_permissive_store_accepts_empty_first_name() {
    let mut store = ContactStore::with_policy(ValidationPolicy::Permissive);
    store.bulk_load(vec![contact("1", "Ann", "555-1")]);

    let blank = store.add(ContactDraft::new("", "", "")).unwrap();
    assert_eq!(store.len(), 2);
    assert!(store.update(&blank.id, ContactDraft::default()).is_ok());
}
