//! Bundled Seed Data
//!
//! Fixed stage configuration, fallback leads for an empty or unreadable
//! store, and the mock user table. Built in code rather than parsed from
//! an embedded document so the fallback path cannot itself fail.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::domain::{Column, Lead};

/// Configured stage titles
pub const COLD_LEAD: &str = "Cold Lead";
pub const HOT_LEAD: &str = "Hot Lead";
pub const ESTIMATE_SENT: &str = "Estimate Sent";
pub const CLOSED: &str = "Closed";

/// Mock user table entry (the only place passwords exist)
pub struct SeedUser {
    pub id: u32,
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const USERS: &[SeedUser] = &[
    SeedUser {
        id: 1,
        email: "admin@pipelinepro.com",
        password: "admin123",
        name: "Admin User",
        role: "Administrator",
    },
    SeedUser {
        id: 2,
        email: "user@pipelinepro.com",
        password: "user123",
        name: "Regular User",
        role: "User",
    },
];

/// The fixed stage set, already in display order
pub fn columns() -> Vec<Column> {
    vec![
        column(1, COLD_LEAD, 1, "#64748b"),
        column(2, HOT_LEAD, 2, "#f59e0b"),
        column(3, ESTIMATE_SENT, 3, "#3b82f6"),
        column(4, CLOSED, 4, "#10b981"),
    ]
}

/// Fallback leads used when the durable store is empty or unreadable
pub fn leads() -> Vec<Lead> {
    vec![
        lead(1, "Sarah Mitchell", "sarah.mitchell@brightworks.com", "(555) 012-3847", 4500.0, ymd(2024, 5, 28), COLD_LEAD, ts(2024, 5, 28, 9, 15)),
        lead(2, "James Okafor", "j.okafor@novatech.io", "(555) 019-4462", 12800.0, ymd(2024, 5, 30), HOT_LEAD, ts(2024, 5, 30, 14, 2)),
        lead(3, "Linda Tran", "linda@tranlandscaping.com", "(555) 014-7730", 2300.0, ymd(2024, 6, 1), COLD_LEAD, ts(2024, 6, 1, 8, 40)),
        lead(4, "Miguel Santos", "miguel.santos@harborview.net", "(555) 016-9921", 8750.0, ymd(2024, 6, 3), ESTIMATE_SENT, ts(2024, 6, 3, 11, 25)),
        lead(5, "Priya Raman", "priya.raman@cedarhomes.com", "(555) 011-5584", 15600.0, ymd(2024, 6, 4), HOT_LEAD, ts(2024, 6, 4, 16, 48)),
        lead(6, "Tom Becker", "tbecker@beckerauto.com", "(555) 018-2216", 3900.0, ymd(2024, 6, 5), ESTIMATE_SENT, ts(2024, 6, 5, 10, 5)),
        lead(7, "Alice Zhang", "alice.zhang@summitlaw.com", "(555) 013-6608", 21000.0, ymd(2024, 6, 6), CLOSED, ts(2024, 6, 6, 13, 30)),
        lead(8, "David Kim", "david.kim@kimconsulting.org", "(555) 017-8145", 6200.0, ymd(2024, 6, 7), COLD_LEAD, ts(2024, 6, 7, 9, 55)),
    ]
}

fn column(id: u32, title: &str, order: i32, color: &str) -> Column {
    Column {
        id,
        title: title.to_string(),
        order,
        color: color.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn lead(
    id: u32,
    name: &str,
    email: &str,
    phone: &str,
    estimated_value: f64,
    date: NaiveDate,
    column: &str,
    created: DateTime<Utc>,
) -> Lead {
    Lead {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        estimated_value,
        date,
        column: column.to_string(),
        archived: false,
        created_at: created,
        updated_at: created,
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("valid seed timestamp")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_lead_ids_are_unique() {
        let leads = leads();
        let mut ids: Vec<u32> = leads.iter().map(|l| l.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), leads.len());
    }

    #[test]
    fn seed_leads_reference_configured_stages() {
        let titles: Vec<String> = columns().into_iter().map(|c| c.title).collect();
        for lead in leads() {
            assert!(titles.contains(&lead.column), "unknown stage {}", lead.column);
        }
    }

    #[test]
    fn columns_are_in_display_order() {
        let cols = columns();
        assert!(cols.windows(2).all(|w| w[0].order < w[1].order));
    }
}
