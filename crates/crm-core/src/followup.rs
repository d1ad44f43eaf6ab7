//! Follow-Up Categorization
//!
//! Pure bucketing of reminders by due time relative to a caller-supplied
//! wall-clock `now`. Weeks start on Sunday. Insertion order of the input
//! is preserved within each bucket; any further sorting is the UI's call.

use chrono::{Datelike, Days, NaiveDateTime};

use crate::domain::Reminder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Overdue,
    Today,
    Tomorrow,
    ThisWeek,
    Later,
    Completed,
}

impl Bucket {
    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Overdue => "Overdue",
            Bucket::Today => "Today",
            Bucket::Tomorrow => "Tomorrow",
            Bucket::ThisWeek => "This Week",
            Bucket::Later => "Later",
            Bucket::Completed => "Completed",
        }
    }
}

/// Reminders grouped for the follow-up dashboard, in section order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Categorized {
    pub overdue: Vec<Reminder>,
    pub today: Vec<Reminder>,
    pub tomorrow: Vec<Reminder>,
    pub this_week: Vec<Reminder>,
    pub later: Vec<Reminder>,
    pub completed: Vec<Reminder>,
}

impl Categorized {
    /// Sections paired with their labels, in display order
    pub fn sections(&self) -> [(Bucket, &Vec<Reminder>); 6] {
        [
            (Bucket::Overdue, &self.overdue),
            (Bucket::Today, &self.today),
            (Bucket::Tomorrow, &self.tomorrow),
            (Bucket::ThisWeek, &self.this_week),
            (Bucket::Later, &self.later),
            (Bucket::Completed, &self.completed),
        ]
    }
}

/// Which bucket a single reminder falls into at `now`
///
/// Completion wins over every date rule. A reminder due earlier today is
/// Today, not Overdue: only due times before the start of the current day
/// count as overdue.
pub fn bucket_for(reminder: &Reminder, now: NaiveDateTime) -> Bucket {
    if reminder.completed {
        return Bucket::Completed;
    }

    let due = reminder.reminder_date_time.date();
    let today = now.date();

    if due < today {
        return Bucket::Overdue;
    }
    if due == today {
        return Bucket::Today;
    }
    if Some(due) == today.checked_add_days(Days::new(1)) {
        return Bucket::Tomorrow;
    }

    // Remainder of the current week, Sunday-based
    let into_week = today.weekday().num_days_from_sunday() as u64;
    let week_end = today.checked_add_days(Days::new(6 - into_week));
    match week_end {
        Some(end) if due <= end => Bucket::ThisWeek,
        _ => Bucket::Later,
    }
}

pub fn categorize(reminders: &[Reminder], now: NaiveDateTime) -> Categorized {
    let mut out = Categorized::default();
    for reminder in reminders {
        let bucket = match bucket_for(reminder, now) {
            Bucket::Overdue => &mut out.overdue,
            Bucket::Today => &mut out.today,
            Bucket::Tomorrow => &mut out.tomorrow,
            Bucket::ThisWeek => &mut out.this_week,
            Bucket::Later => &mut out.later,
            Bucket::Completed => &mut out.completed,
        };
        bucket.push(reminder.clone());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Priority, ReminderKind};
    use chrono::Utc;

    fn reminder(id: u32, due: &str, completed: bool) -> Reminder {
        Reminder {
            id,
            lead_id: 1,
            lead_name: "Acme Corp".to_string(),
            kind: ReminderKind::Call,
            title: format!("Reminder {}", id),
            notes: String::new(),
            reminder_date_time: parse(due),
            priority: Priority::Medium,
            completed,
            completed_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn parse(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    #[test]
    fn buckets_relative_to_a_monday_noon() {
        let now = parse("2024-06-10T12:00:00");
        assert_eq!(
            bucket_for(&reminder(1, "2024-06-09T09:00:00", false), now),
            Bucket::Overdue
        );
        assert_eq!(
            bucket_for(&reminder(2, "2024-06-10T18:00:00", false), now),
            Bucket::Today
        );
        assert_eq!(
            bucket_for(&reminder(3, "2024-06-11T09:00:00", false), now),
            Bucket::Tomorrow
        );
        assert_eq!(
            bucket_for(&reminder(4, "2024-06-14T09:00:00", false), now),
            Bucket::ThisWeek
        );
        assert_eq!(
            bucket_for(&reminder(5, "2024-07-01T09:00:00", false), now),
            Bucket::Later
        );
    }

    #[test]
    fn completed_wins_over_any_date() {
        let now = parse("2024-06-10T12:00:00");
        assert_eq!(
            bucket_for(&reminder(1, "2024-06-01T09:00:00", true), now),
            Bucket::Completed
        );
        assert_eq!(
            bucket_for(&reminder(2, "2024-07-01T09:00:00", true), now),
            Bucket::Completed
        );
    }

    #[test]
    fn earlier_today_is_today_not_overdue() {
        let now = parse("2024-06-10T12:00:00");
        assert_eq!(
            bucket_for(&reminder(1, "2024-06-10T08:00:00", false), now),
            Bucket::Today
        );
    }

    #[test]
    fn saturday_is_still_this_week_sunday_is_not() {
        let now = parse("2024-06-10T12:00:00");
        assert_eq!(
            bucket_for(&reminder(1, "2024-06-15T09:00:00", false), now),
            Bucket::ThisWeek
        );
        // Next Sunday starts a new week
        assert_eq!(
            bucket_for(&reminder(2, "2024-06-16T09:00:00", false), now),
            Bucket::Later
        );
    }

    #[test]
    fn categorize_preserves_insertion_order() {
        let now = parse("2024-06-10T12:00:00");
        let reminders = vec![
            reminder(1, "2024-06-09T09:00:00", false),
            reminder(2, "2024-06-08T09:00:00", false),
            reminder(3, "2024-06-10T15:00:00", false),
        ];
        let grouped = categorize(&reminders, now);
        let overdue_ids: Vec<u32> = grouped.overdue.iter().map(|r| r.id).collect();
        assert_eq!(overdue_ids, vec![1, 2]);
        assert_eq!(grouped.today.len(), 1);
        assert!(grouped.completed.is_empty());
    }
}
