//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde/chrono for serialization).

mod entity;
mod lead;
mod reminder;
mod stage;
mod user;

pub use entity::{CrmError, CrmResult, Entity};
pub use lead::{Lead, LeadDraft, LeadPatch};
pub use reminder::{Priority, Reminder, ReminderDraft, ReminderKind, ReminderPatch};
pub use stage::Column;
pub use user::User;
