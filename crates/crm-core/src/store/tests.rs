//! Store Integration Tests
//!
//! Lead and reminder stores running against the in-memory storage double.

use std::cell::Cell;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::{
    CrmError, LeadDraft, LeadPatch, Priority, ReminderDraft, ReminderKind, ReminderPatch,
};
use crate::seed;

use super::{LeadStore, MemoryStorage, ReminderStore, LEADS_KEY};

fn empty_lead_store() -> (Rc<MemoryStorage>, LeadStore<Rc<MemoryStorage>>) {
    // Start from an empty document rather than an absent one so the seed
    // fallback stays out of the way
    let storage = Rc::new(MemoryStorage::with_entry(LEADS_KEY, "[]"));
    let store = LeadStore::new(Rc::clone(&storage));
    (storage, store)
}

fn draft(name: &str, column: &str) -> LeadDraft {
    LeadDraft {
        name: name.to_string(),
        email: format!("{}@example.test", name.to_lowercase().replace(' ', ".")),
        phone: "(555) 010-2233".to_string(),
        estimated_value: 1500.0,
        date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
        column: column.to_string(),
    }
}

fn due(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
}

fn reminder_draft(lead_id: u32, title: &str, due_at: &str) -> ReminderDraft {
    ReminderDraft {
        lead_id,
        lead_name: "Acme Corp".to_string(),
        kind: ReminderKind::Call,
        title: title.to_string(),
        notes: String::new(),
        reminder_date_time: due(due_at),
        priority: Priority::Medium,
    }
}

#[test]
fn create_assigns_unique_strictly_increasing_ids() {
    let (_, store) = empty_lead_store();
    let a = store.create(draft("Alpha", seed::COLD_LEAD)).unwrap();
    let b = store.create(draft("Beta", seed::COLD_LEAD)).unwrap();
    let c = store.create(draft("Gamma", seed::HOT_LEAD)).unwrap();
    assert!(a.id < b.id && b.id < c.id);

    // Deleting the max id must not cause reuse
    store.delete(c.id).unwrap();
    let d = store.create(draft("Delta", seed::HOT_LEAD)).unwrap();
    assert!(d.id > b.id);
    assert_ne!(d.id, a.id);
    assert_ne!(d.id, b.id);
}

#[test]
fn list_falls_back_to_seed_when_document_absent() {
    let store = LeadStore::new(MemoryStorage::new());
    let leads = store.list();
    assert_eq!(leads.len(), seed::leads().len());
}

#[test]
fn list_falls_back_to_seed_when_document_corrupt() {
    let store = LeadStore::new(MemoryStorage::with_entry(LEADS_KEY, "{not json"));
    let leads = store.list();
    assert_eq!(leads.len(), seed::leads().len());
}

#[test]
fn list_falls_back_to_seed_when_storage_unreadable() {
    let storage = Rc::new(MemoryStorage::new());
    let store = LeadStore::new(Rc::clone(&storage));
    storage.set_fail_reads(true);
    assert_eq!(store.list().len(), seed::leads().len());
}

#[test]
fn get_by_id_fails_with_not_found() {
    let (_, store) = empty_lead_store();
    assert!(matches!(store.get_by_id(42), Err(CrmError::NotFound(_))));
}

#[test]
fn update_merges_patch_and_advances_updated_at() {
    let (_, store) = empty_lead_store();
    let created = store.create(draft("Alpha", seed::COLD_LEAD)).unwrap();

    let updated = store
        .update(
            created.id,
            LeadPatch {
                estimated_value: Some(9999.0),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.estimated_value, 9999.0);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.column, created.column);
    assert!(updated.updated_at > created.updated_at);
    assert_eq!(updated.created_at, created.created_at);

    let fetched = store.get_by_id(created.id).unwrap();
    assert_eq!(fetched, updated);
}

#[test]
fn delete_removes_permanently() {
    let (_, store) = empty_lead_store();
    let created = store.create(draft("Alpha", seed::COLD_LEAD)).unwrap();
    store.delete(created.id).unwrap();

    assert!(matches!(
        store.get_by_id(created.id),
        Err(CrmError::NotFound(_))
    ));
    assert!(store.list().iter().all(|l| l.id != created.id));
    assert!(matches!(
        store.delete(created.id),
        Err(CrmError::NotFound(_))
    ));
}

#[test]
fn duplicate_copies_everything_but_identity() {
    let (_, store) = empty_lead_store();
    let source = store.create(draft("Alpha", seed::ESTIMATE_SENT)).unwrap();
    let copy = store.duplicate(source.id).unwrap();

    assert_ne!(copy.id, source.id);
    assert_eq!(copy.name, source.name);
    assert_eq!(copy.email, source.email);
    assert_eq!(copy.phone, source.phone);
    assert_eq!(copy.estimated_value, source.estimated_value);
    assert_eq!(copy.date, source.date);
    assert_eq!(copy.column, source.column);
    assert_eq!(store.list().len(), 2);
}

#[test]
fn archive_hides_from_active_but_keeps_record() {
    let (_, store) = empty_lead_store();
    let created = store.create(draft("Alpha", seed::COLD_LEAD)).unwrap();
    store.archive(created.id).unwrap();

    let archived = store.get_by_id(created.id).unwrap();
    assert!(archived.archived);
    assert!(store.active().is_empty());
    assert_eq!(store.list().len(), 1);
}

#[test]
fn change_stage_updates_column() {
    let (_, store) = empty_lead_store();
    let created = store.create(draft("Alpha", seed::COLD_LEAD)).unwrap();
    let moved = store.change_stage(created.id, seed::HOT_LEAD).unwrap();
    assert_eq!(moved.column, seed::HOT_LEAD);
    assert_eq!(store.get_by_id(created.id).unwrap().column, seed::HOT_LEAD);
}

#[test]
fn change_stage_rejects_unconfigured_stage() {
    let (_, store) = empty_lead_store();
    let created = store.create(draft("Alpha", seed::COLD_LEAD)).unwrap();
    let err = store.change_stage(created.id, "Warm Lead").unwrap_err();
    assert!(matches!(err, CrmError::Validation(_)));
    // No mutation happened
    assert_eq!(store.get_by_id(created.id).unwrap().column, seed::COLD_LEAD);
}

#[test]
fn write_failure_surfaces_storage_error_and_keeps_state() {
    let (storage, store) = empty_lead_store();
    let created = store.create(draft("Alpha", seed::COLD_LEAD)).unwrap();

    storage.set_fail_writes(true);
    let err = store
        .update(
            created.id,
            LeadPatch {
                name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, CrmError::Storage(_)));

    storage.set_fail_writes(false);
    assert_eq!(store.get_by_id(created.id).unwrap().name, "Alpha");
}

#[test]
fn mutations_notify_subscribers_once_each() {
    let (_, store) = empty_lead_store();
    let notified = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&notified);
    store.subscribe(move || counter.set(counter.get() + 1));

    let created = store.create(draft("Alpha", seed::COLD_LEAD)).unwrap();
    assert_eq!(notified.get(), 1);
    store.change_stage(created.id, seed::HOT_LEAD).unwrap();
    assert_eq!(notified.get(), 2);
    store.delete(created.id).unwrap();
    assert_eq!(notified.get(), 3);

    // A read is not a mutation
    let _ = store.list();
    assert_eq!(notified.get(), 3);
}

#[test]
fn failed_mutation_does_not_notify() {
    let (storage, store) = empty_lead_store();
    let notified = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&notified);
    store.subscribe(move || counter.set(counter.get() + 1));

    storage.set_fail_writes(true);
    assert!(store.create(draft("Alpha", seed::COLD_LEAD)).is_err());
    assert_eq!(notified.get(), 0);
}

#[test]
fn reminder_crud_round_trip() {
    let store = ReminderStore::new(MemoryStorage::new());
    assert!(store.list().is_empty());

    let created = store
        .create(reminder_draft(7, "Call about estimate", "2024-06-12T10:00:00"))
        .unwrap();
    assert_eq!(created.id, 1);
    assert!(!created.completed);

    let updated = store
        .update(
            created.id,
            ReminderPatch {
                title: Some("Call about revised estimate".to_string()),
                priority: Some(Priority::High),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.title, "Call about revised estimate");
    assert_eq!(updated.priority, Priority::High);
    assert_eq!(updated.kind, created.kind);
    assert!(updated.updated_at > created.updated_at);

    store.delete(created.id).unwrap();
    assert!(matches!(
        store.get_by_id(created.id),
        Err(CrmError::NotFound(_))
    ));
}

#[test]
fn reminders_filter_by_lead() {
    let store = ReminderStore::new(MemoryStorage::new());
    store
        .create(reminder_draft(1, "First", "2024-06-12T10:00:00"))
        .unwrap();
    store
        .create(reminder_draft(2, "Second", "2024-06-12T11:00:00"))
        .unwrap();
    store
        .create(reminder_draft(1, "Third", "2024-06-13T10:00:00"))
        .unwrap();

    let for_one = store.list_by_lead(1);
    assert_eq!(for_one.len(), 2);
    assert!(for_one.iter().all(|r| r.lead_id == 1));
    // Weak reference: a lead id with no lead behind it is still queryable
    assert!(store.list_by_lead(99).is_empty());
}

#[test]
fn mark_completed_sets_flag_and_timestamp() {
    let store = ReminderStore::new(MemoryStorage::new());
    let created = store
        .create(reminder_draft(1, "Call", "2024-06-12T10:00:00"))
        .unwrap();

    let done = store.mark_completed(created.id).unwrap();
    assert!(done.completed);
    assert!(done.completed_at.is_some());
    assert_eq!(done.title, created.title);
}

#[test]
fn upcoming_and_overdue_windows() {
    let store = ReminderStore::new(MemoryStorage::new());
    let now = due("2024-06-10T12:00:00");

    let past = store
        .create(reminder_draft(1, "Past", "2024-06-09T09:00:00"))
        .unwrap();
    let soon = store
        .create(reminder_draft(1, "Soon", "2024-06-12T09:00:00"))
        .unwrap();
    let far = store
        .create(reminder_draft(1, "Far", "2024-07-01T09:00:00"))
        .unwrap();
    store.mark_completed(far.id).unwrap();

    let upcoming = store.upcoming(now);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].id, soon.id);

    let overdue = store.overdue(now);
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].id, past.id);
}

#[test]
fn clear_all_empties_the_document() {
    let store = ReminderStore::new(MemoryStorage::new());
    store
        .create(reminder_draft(1, "Call", "2024-06-12T10:00:00"))
        .unwrap();
    store.clear_all().unwrap();
    assert!(store.list().is_empty());
}

#[test]
fn documents_survive_a_store_rebuild() {
    // A fresh store over the same backend sees the same records: the
    // document, not the store instance, is canonical
    let storage = Rc::new(MemoryStorage::with_entry(LEADS_KEY, "[]"));
    let id = {
        let store = LeadStore::new(Rc::clone(&storage));
        store.create(draft("Alpha", seed::COLD_LEAD)).unwrap().id
    };
    let reopened = LeadStore::new(Rc::clone(&storage));
    assert_eq!(reopened.get_by_id(id).unwrap().name, "Alpha");
}
