//! Lead Entity
//!
//! A prospective customer record tracked through pipeline stages.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A sales lead on the kanban board
///
/// The serialized field names are the durable storage layout and must not
/// change: existing documents written under `pipeline_pro_leads` use them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Unique identifier, never reused after deletion
    #[serde(rename = "Id")]
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Non-negative deal amount
    pub estimated_value: f64,
    /// Calendar date associated with the lead
    pub date: NaiveDate,
    /// Stage title; joined against `Column::title` by string equality
    pub column: String,
    /// Archived leads are hidden from active views but not deleted
    #[serde(default)]
    pub archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Lead {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Fields supplied by the form layer when creating a lead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub estimated_value: f64,
    pub date: NaiveDate,
    pub column: String,
}

/// Partial update; `None` fields keep their current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub estimated_value: Option<f64>,
    pub date: Option<NaiveDate>,
    pub column: Option<String>,
    pub archived: Option<bool>,
}

impl LeadPatch {
    /// Merge this patch into an existing record (timestamps are the store's job)
    pub fn apply(&self, lead: &mut Lead) {
        if let Some(name) = &self.name {
            lead.name = name.clone();
        }
        if let Some(email) = &self.email {
            lead.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            lead.phone = phone.clone();
        }
        if let Some(value) = self.estimated_value {
            lead.estimated_value = value;
        }
        if let Some(date) = self.date {
            lead.date = date;
        }
        if let Some(column) = &self.column {
            lead.column = column.clone();
        }
        if let Some(archived) = self.archived {
            lead.archived = archived;
        }
    }

    /// Patch carrying every field of a draft (used by the edit form)
    pub fn from_draft(draft: &LeadDraft) -> Self {
        Self {
            name: Some(draft.name.clone()),
            email: Some(draft.email.clone()),
            phone: Some(draft.phone.clone()),
            estimated_value: Some(draft.estimated_value),
            date: Some(draft.date),
            column: Some(draft.column.clone()),
            archived: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Lead {
        Lead {
            id: 3,
            name: "Acme Corp".to_string(),
            email: "contact@acme.test".to_string(),
            phone: "555-0101".to_string(),
            estimated_value: 1200.0,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            column: "Cold Lead".to_string(),
            archived: false,
            created_at: Utc.with_ymd_and_hms(2024, 5, 20, 9, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 5, 20, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn patch_merges_only_set_fields() {
        let mut lead = sample();
        let patch = LeadPatch {
            column: Some("Hot Lead".to_string()),
            ..Default::default()
        };
        patch.apply(&mut lead);
        assert_eq!(lead.column, "Hot Lead");
        assert_eq!(lead.name, "Acme Corp");
        assert_eq!(lead.estimated_value, 1200.0);
    }

    #[test]
    fn storage_layout_uses_original_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("Id").is_some());
        assert!(json.get("estimatedValue").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("estimated_value").is_none());
    }

    #[test]
    fn archived_defaults_to_false_when_absent() {
        let raw = r#"{"Id":1,"name":"a","email":"b","phone":"c",
            "estimatedValue":10.0,"date":"2024-06-01","column":"Cold Lead",
            "createdAt":"2024-05-20T09:00:00Z","updatedAt":"2024-05-20T09:00:00Z"}"#;
        let lead: Lead = serde_json::from_str(raw).unwrap();
        assert!(!lead.archived);
    }
}
