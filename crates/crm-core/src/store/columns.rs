//! Column Catalog
//!
//! Read-only access to the fixed stage configuration. Columns are bundled
//! data, never persisted, so there is no store struct here.

use crate::domain::{Column, CrmError, CrmResult};
use crate::seed;

/// All configured stages, sorted by ascending display order
pub fn all() -> Vec<Column> {
    let mut columns = seed::columns();
    columns.sort_by_key(|c| c.order);
    columns
}

/// Stage lookup by title
pub fn by_title(title: &str) -> CrmResult<Column> {
    seed::columns()
        .into_iter()
        .find(|c| c.title == title)
        .ok_or_else(|| CrmError::NotFound(format!("column '{}'", title)))
}

/// Whether `title` names a configured stage
pub fn is_configured(title: &str) -> bool {
    seed::columns().iter().any(|c| c.title == title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_title() {
        assert_eq!(by_title("Hot Lead").unwrap().color, "#f59e0b");
        assert!(matches!(
            by_title("Lukewarm Lead"),
            Err(CrmError::NotFound(_))
        ));
    }

    #[test]
    fn configured_check() {
        assert!(is_configured("Closed"));
        assert!(!is_configured("closed"));
    }
}
