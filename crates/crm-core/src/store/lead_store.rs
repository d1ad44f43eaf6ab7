//! Lead Store
//!
//! CRUD over the lead collection. The serialized document behind the
//! storage port is canonical; every operation reloads it in full and
//! every mutation rewrites it in full (last-write-wins, single tab).

use std::cell::RefCell;

use chrono::{Duration, Utc};

use crate::domain::{CrmError, CrmResult, Lead, LeadDraft, LeadPatch};
use crate::seed;

use super::columns;
use super::traits::StoragePort;

/// Durable storage key; existing documents depend on it
pub const LEADS_KEY: &str = "pipeline_pro_leads";

pub struct LeadStore<S: StoragePort> {
    storage: S,
    listeners: RefCell<Vec<Box<dyn Fn()>>>,
}

impl<S: StoragePort> LeadStore<S> {
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

    /// All leads, archived included
    ///
    /// Falls back to the bundled seed set when the document is absent or
    /// unreadable. The fallback is not written back; it becomes durable
    /// on the first mutation.
    pub fn list(&self) -> Vec<Lead> {
        match self.storage.load(LEADS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(leads) => leads,
                Err(err) => {
                    log::warn!("lead document unreadable, using seed data: {}", err);
                    seed::leads()
                }
            },
            Ok(None) => seed::leads(),
            Err(err) => {
                log::warn!("lead storage unavailable, using seed data: {}", err);
                seed::leads()
            }
        }
    }

    /// Leads visible on the board and in stats
    pub fn active(&self) -> Vec<Lead> {
        self.list().into_iter().filter(|l| !l.archived).collect()
    }

    pub fn get_by_id(&self, id: u32) -> CrmResult<Lead> {
        self.list()
            .into_iter()
            .find(|l| l.id == id)
            .ok_or_else(|| CrmError::NotFound(format!("lead {}", id)))
    }

    pub fn create(&self, draft: LeadDraft) -> CrmResult<Lead> {
        let mut leads = self.list();
        let now = Utc::now();
        let lead = Lead {
            id: next_id(&leads),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            estimated_value: draft.estimated_value,
            date: draft.date,
            column: draft.column,
            archived: false,
            created_at: now,
            updated_at: now,
        };
        leads.push(lead.clone());
        self.persist(&leads)?;
        self.notify();
        Ok(lead)
    }

    pub fn update(&self, id: u32, patch: LeadPatch) -> CrmResult<Lead> {
        let mut leads = self.list();
        let lead = leads
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| CrmError::NotFound(format!("lead {}", id)))?;
        patch.apply(lead);
        lead.updated_at = next_stamp(lead.updated_at);
        let updated = lead.clone();
        self.persist(&leads)?;
        self.notify();
        Ok(updated)
    }

    /// Hide a lead from active views without deleting it
    pub fn archive(&self, id: u32) -> CrmResult<Lead> {
        self.update(
            id,
            LeadPatch {
                archived: Some(true),
                ..Default::default()
            },
        )
    }

    pub fn delete(&self, id: u32) -> CrmResult<()> {
        let mut leads = self.list();
        let before = leads.len();
        leads.retain(|l| l.id != id);
        if leads.len() == before {
            return Err(CrmError::NotFound(format!("lead {}", id)));
        }
        self.persist(&leads)?;
        self.notify();
        Ok(())
    }

    /// Clone an existing lead into a new record with a fresh id
    pub fn duplicate(&self, id: u32) -> CrmResult<Lead> {
        let source = self.get_by_id(id)?;
        let mut leads = self.list();
        let now = Utc::now();
        let copy = Lead {
            id: next_id(&leads),
            created_at: now,
            updated_at: now,
            ..source
        };
        leads.push(copy.clone());
        self.persist(&leads)?;
        self.notify();
        Ok(copy)
    }

    /// Move a lead to another pipeline stage
    ///
    /// Rejects titles that name no configured stage; a silently accepted
    /// typo here would make the lead vanish from the board.
    pub fn change_stage(&self, id: u32, new_stage: &str) -> CrmResult<Lead> {
        if !columns::is_configured(new_stage) {
            return Err(CrmError::Validation(format!(
                "'{}' is not a configured stage",
                new_stage
            )));
        }
        self.update(
            id,
            LeadPatch {
                column: Some(new_stage.to_string()),
                ..Default::default()
            },
        )
    }

    fn persist(&self, leads: &[Lead]) -> CrmResult<()> {
        let raw = serde_json::to_string(leads)
            .map_err(|err| CrmError::Storage(err.to_string()))?;
        self.storage.save(LEADS_KEY, &raw)?;
        log::debug!("persisted {} leads", leads.len());
        Ok(())
    }

    fn notify(&self) {
        for listener in self.listeners.borrow().iter() {
            listener();
        }
    }
}

/// max(existing ids) + 1; deleted ids are never reused
fn next_id(leads: &[Lead]) -> u32 {
    leads.iter().map(|l| l.id).max().unwrap_or(0) + 1
}

/// `updated_at` must grow strictly even when the wall clock has not
/// advanced between rapid edits
fn next_stamp(previous: chrono::DateTime<Utc>) -> chrono::DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
