//! Column Services
//!
//! Columns are bundled configuration; the latency is simulated anyway so
//! the board load path behaves like the other services.

use crm_core::domain::Column;
use crm_core::store;

use super::delay;

/// Get all columns, sorted by display order
pub async fn get_all() -> Result<Vec<Column>, String> {
    delay(200).await;
    Ok(store::all_columns())
}

/// Get column by title
pub async fn get_by_title(title: String) -> Result<Column, String> {
    delay(150).await;
    store::column_by_title(&title).map_err(|e| e.to_string())
}
