//! Pipeline View Model
//!
//! Pure functions from a (leads, columns) snapshot to the board grouping
//! and the header statistics. Nothing here mutates; callers recompute on
//! every render from current store state.

use crate::domain::{Column, Lead};
use crate::seed;

/// One kanban column with its matched leads
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnGroup {
    pub column: Column,
    pub leads: Vec<Lead>,
    pub count: usize,
    pub total_value: f64,
}

/// The whole board, columns in display order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardView {
    pub groups: Vec<ColumnGroup>,
}

/// Group active leads under the configured columns.
///
/// The join is nominal: exact string equality between `lead.column` and
/// `column.title`. A lead whose stage matches no configured title is
/// silently dropped from the board; the store-level stage validation
/// exists to keep that from happening in the first place.
pub fn board_view(leads: &[Lead], columns: &[Column]) -> BoardView {
    let mut ordered: Vec<&Column> = columns.iter().collect();
    ordered.sort_by_key(|c| c.order);

    let groups = ordered
        .into_iter()
        .map(|column| {
            let matched: Vec<Lead> = leads
                .iter()
                .filter(|l| !l.archived && l.column == column.title)
                .cloned()
                .collect();
            let total_value = matched.iter().map(|l| l.estimated_value).sum();
            ColumnGroup {
                column: column.clone(),
                count: matched.len(),
                total_value,
                leads: matched,
            }
        })
        .collect();

    BoardView { groups }
}

/// Header statistics over the active lead set
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PipelineStats {
    /// Total estimated value in not-yet-closed stages
    pub pipeline_value: f64,
    /// Total estimated value in the closed stage
    pub closed_value: f64,
    /// Number of active (non-archived) leads
    pub active_leads: usize,
}

pub fn stats(leads: &[Lead]) -> PipelineStats {
    let mut stats = PipelineStats::default();
    for lead in leads.iter().filter(|l| !l.archived) {
        stats.active_leads += 1;
        if lead.column == seed::CLOSED {
            stats.closed_value += lead.estimated_value;
        } else {
            stats.pipeline_value += lead.estimated_value;
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn lead(id: u32, column: &str, value: f64, archived: bool) -> Lead {
        let created = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        Lead {
            id,
            name: format!("Lead {}", id),
            email: format!("lead{}@example.test", id),
            phone: "555-0100".to_string(),
            estimated_value: value,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            column: column.to_string(),
            archived,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn groups_by_exact_title_match() {
        let leads = vec![
            lead(1, "Cold Lead", 100.0, false),
            lead(2, "Hot Lead", 200.0, false),
            lead(3, "Cold Lead", 50.0, false),
        ];
        let board = board_view(&leads, &seed::columns());
        assert_eq!(board.groups[0].column.title, "Cold Lead");
        assert_eq!(board.groups[0].count, 2);
        assert_eq!(board.groups[0].total_value, 150.0);
        assert_eq!(board.groups[1].count, 1);
    }

    #[test]
    fn unmatched_stage_is_dropped_from_board() {
        let leads = vec![lead(1, "Warm Lead", 100.0, false)];
        let board = board_view(&leads, &seed::columns());
        let total: usize = board.groups.iter().map(|g| g.count).sum();
        assert_eq!(total, 0);
    }

    #[test]
    fn archived_leads_are_excluded_from_board() {
        let leads = vec![
            lead(1, "Cold Lead", 100.0, true),
            lead(2, "Cold Lead", 40.0, false),
        ];
        let board = board_view(&leads, &seed::columns());
        assert_eq!(board.groups[0].count, 1);
        assert_eq!(board.groups[0].leads[0].id, 2);
    }

    #[test]
    fn columns_sorted_by_order_even_when_shuffled() {
        let mut columns = seed::columns();
        columns.reverse();
        let board = board_view(&[], &columns);
        let titles: Vec<&str> = board
            .groups
            .iter()
            .map(|g| g.column.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Cold Lead", "Hot Lead", "Estimate Sent", "Closed"]);
    }

    #[test]
    fn stats_split_open_and_closed_value() {
        let leads = vec![
            lead(1, "Cold Lead", 100.0, false),
            lead(2, "Closed", 300.0, false),
            lead(3, "Hot Lead", 50.0, true),
        ];
        let stats = stats(&leads);
        assert_eq!(stats.pipeline_value, 100.0);
        assert_eq!(stats.closed_value, 300.0);
        assert_eq!(stats.active_leads, 2);
    }
}
