//! Reminder Entity
//!
//! A scheduled follow-up task, weakly tied to a lead by id.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Kind of follow-up action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    #[default]
    Call,
    Email,
    Meeting,
    Task,
}

impl ReminderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderKind::Call => "call",
            ReminderKind::Email => "email",
            ReminderKind::Meeting => "meeting",
            ReminderKind::Task => "task",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "email" => ReminderKind::Email,
            "meeting" => ReminderKind::Meeting,
            "task" => ReminderKind::Task,
            _ => ReminderKind::Call,
        }
    }
}

/// Reminder priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }
}

/// A follow-up reminder
///
/// `lead_id` is a weak reference: it is never checked against the lead
/// store and a reminder may outlive its lead. `lead_name` is denormalized
/// for display when that happens.
///
/// Serialized field names are the durable layout under
/// `pipeline_pro_reminders` and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    #[serde(rename = "Id")]
    pub id: u32,
    pub lead_id: u32,
    pub lead_name: String,
    #[serde(rename = "type")]
    pub kind: ReminderKind,
    pub title: String,
    #[serde(default)]
    pub notes: String,
    /// Wall-clock due time
    pub reminder_date_time: NaiveDateTime,
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Reminder {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Fields supplied by the form layer when creating a reminder
///
/// Validation (non-empty title, future due time) is the form's
/// responsibility; the store accepts drafts as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderDraft {
    pub lead_id: u32,
    pub lead_name: String,
    pub kind: ReminderKind,
    pub title: String,
    pub notes: String,
    pub reminder_date_time: NaiveDateTime,
    pub priority: Priority,
}

/// Partial update; `None` fields keep their current value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderPatch {
    pub kind: Option<ReminderKind>,
    pub title: Option<String>,
    pub notes: Option<String>,
    pub reminder_date_time: Option<NaiveDateTime>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
    pub completed_at: Option<Option<DateTime<Utc>>>,
}

impl ReminderPatch {
    pub fn apply(&self, reminder: &mut Reminder) {
        if let Some(kind) = self.kind {
            reminder.kind = kind;
        }
        if let Some(title) = &self.title {
            reminder.title = title.clone();
        }
        if let Some(notes) = &self.notes {
            reminder.notes = notes.clone();
        }
        if let Some(due) = self.reminder_date_time {
            reminder.reminder_date_time = due;
        }
        if let Some(priority) = self.priority {
            reminder.priority = priority;
        }
        if let Some(completed) = self.completed {
            reminder.completed = completed;
        }
        if let Some(completed_at) = self.completed_at {
            reminder.completed_at = completed_at;
        }
    }

    pub fn from_draft(draft: &ReminderDraft) -> Self {
        Self {
            kind: Some(draft.kind),
            title: Some(draft.title.clone()),
            notes: Some(draft.notes.clone()),
            reminder_date_time: Some(draft.reminder_date_time),
            priority: Some(draft.priority),
            completed: None,
            completed_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_strings() {
        assert_eq!(ReminderKind::Meeting.as_str(), "meeting");
        assert_eq!(ReminderKind::from_str("task"), ReminderKind::Task);
        assert_eq!(ReminderKind::from_str("unknown"), ReminderKind::Call);
    }

    #[test]
    fn kind_serializes_under_type_key() {
        let json = format!(
            "{{\"k\":{}}}",
            serde_json::to_string(&ReminderKind::Email).unwrap()
        );
        assert_eq!(json, "{\"k\":\"email\"}");
    }

    #[test]
    fn completed_at_is_omitted_until_set() {
        let reminder = Reminder {
            id: 1,
            lead_id: 2,
            lead_name: "Acme Corp".to_string(),
            kind: ReminderKind::Call,
            title: "Check in".to_string(),
            notes: String::new(),
            reminder_date_time: NaiveDateTime::parse_from_str(
                "2024-06-10T18:00:00",
                "%Y-%m-%dT%H:%M:%S",
            )
            .unwrap(),
            priority: Priority::Medium,
            completed: false,
            completed_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&reminder).unwrap();
        assert!(json.get("completedAt").is_none());
        assert!(json.get("leadId").is_some());
        assert_eq!(json.get("type").unwrap(), "call");
    }
}
