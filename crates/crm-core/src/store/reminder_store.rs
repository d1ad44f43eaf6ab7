//! Reminder Store
//!
//! CRUD over the follow-up reminder collection. Same shape as the lead
//! store, but an absent or unreadable document yields an empty list, not
//! seed data.

use std::cell::RefCell;

use chrono::{Days, Duration, NaiveDateTime, Utc};

use crate::domain::{CrmError, CrmResult, Reminder, ReminderDraft, ReminderPatch};

use super::traits::StoragePort;

/// Durable storage key; existing documents depend on it
pub const REMINDERS_KEY: &str = "pipeline_pro_reminders";

pub struct ReminderStore<S: StoragePort> {
    storage: S,
    listeners: RefCell<Vec<Box<dyn Fn()>>>,
}

impl<S: StoragePort> ReminderStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Register a listener notified after every successful mutation
    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    pub fn list(&self) -> Vec<Reminder> {
        match self.storage.load(REMINDERS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(reminders) => reminders,
                Err(err) => {
                    log::warn!("reminder document unreadable, starting empty: {}", err);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                log::warn!("reminder storage unavailable, starting empty: {}", err);
                Vec::new()
            }
        }
    }

    /// Reminders attached to one lead (weak reference, no existence check)
    pub fn list_by_lead(&self, lead_id: u32) -> Vec<Reminder> {
        self.list()
            .into_iter()
            .filter(|r| r.lead_id == lead_id)
            .collect()
    }

    pub fn get_by_id(&self, id: u32) -> CrmResult<Reminder> {
        self.list()
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| CrmError::NotFound(format!("reminder {}", id)))
    }

    /// Append a new reminder; drafts are stored as-is, validation is the
    /// form layer's job
    pub fn create(&self, draft: ReminderDraft) -> CrmResult<Reminder> {
        let mut reminders = self.list();
        let now = Utc::now();
        let reminder = Reminder {
            id: next_id(&reminders),
            lead_id: draft.lead_id,
            lead_name: draft.lead_name,
            kind: draft.kind,
            title: draft.title,
            notes: draft.notes,
            reminder_date_time: draft.reminder_date_time,
            priority: draft.priority,
            completed: false,
            completed_at: None,
            created_at: now,
            updated_at: now,
        };
        reminders.push(reminder.clone());
        self.persist(&reminders)?;
        self.notify();
        Ok(reminder)
    }

    pub fn update(&self, id: u32, patch: ReminderPatch) -> CrmResult<Reminder> {
        let mut reminders = self.list();
        let reminder = reminders
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| CrmError::NotFound(format!("reminder {}", id)))?;
        patch.apply(reminder);
        reminder.updated_at = next_stamp(reminder.updated_at);
        let updated = reminder.clone();
        self.persist(&reminders)?;
        self.notify();
        Ok(updated)
    }

    pub fn delete(&self, id: u32) -> CrmResult<()> {
        let mut reminders = self.list();
        let before = reminders.len();
        reminders.retain(|r| r.id != id);
        if reminders.len() == before {
            return Err(CrmError::NotFound(format!("reminder {}", id)));
        }
        self.persist(&reminders)?;
        self.notify();
        Ok(())
    }

    pub fn mark_completed(&self, id: u32) -> CrmResult<Reminder> {
        self.update(
            id,
            ReminderPatch {
                completed: Some(true),
                completed_at: Some(Some(Utc::now())),
                ..Default::default()
            },
        )
    }

    /// Not-completed reminders due within the next seven days
    pub fn upcoming(&self, now: NaiveDateTime) -> Vec<Reminder> {
        let horizon = now
            .checked_add_days(Days::new(7))
            .unwrap_or(NaiveDateTime::MAX);
        self.list()
            .into_iter()
            .filter(|r| {
                !r.completed
                    && r.reminder_date_time >= now
                    && r.reminder_date_time <= horizon
            })
            .collect()
    }

    /// Not-completed reminders whose due time has already passed
    pub fn overdue(&self, now: NaiveDateTime) -> Vec<Reminder> {
        self.list()
            .into_iter()
            .filter(|r| !r.completed && r.reminder_date_time < now)
            .collect()
    }

    /// Drop the whole reminder document
    pub fn clear_all(&self) -> CrmResult<()> {
        self.storage.remove(REMINDERS_KEY)?;
        self.notify();
        Ok(())
    }

    fn persist(&self, reminders: &[Reminder]) -> CrmResult<()> {
        let raw = serde_json::to_string(reminders)
            .map_err(|err| CrmError::Storage(err.to_string()))?;
        self.storage.save(REMINDERS_KEY, &raw)?;
        log::debug!("persisted {} reminders", reminders.len());
        Ok(())
    }

    fn notify(&self) {
        for listener in self.listeners.borrow().iter() {
            listener();
        }
    }
}

fn next_id(reminders: &[Reminder]) -> u32 {
    reminders.iter().map(|r| r.id).max().unwrap_or(0) + 1
}

fn next_stamp(previous: chrono::DateTime<Utc>) -> chrono::DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
