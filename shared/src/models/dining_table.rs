//! Dining Table Model

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult, ErrorCode};
use crate::validation::{MAX_NAME_LEN, validate_required_text};

/// Dining table entity
///
/// Immutable once created. Ordering and equality follow the table id so a
/// `Vec<DiningTable>` sorted by id behaves as a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: i64,
    pub name: String,
    /// Seats at this table (always >= 1)
    pub capacity: u32,
}

impl DiningTable {
    /// Create a table, rejecting a zero capacity
    pub fn new(id: i64, name: impl Into<String>, capacity: u32) -> AppResult<Self> {
        let name = name.into();
        validate_required_text(&name, "name", MAX_NAME_LEN)?;
        if capacity == 0 {
            return Err(AppError::new(ErrorCode::InvalidCapacity).with_detail("table_id", id));
        }
        Ok(Self { id, name, capacity })
    }
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTableCreate {
    pub name: String,
    pub capacity: u32,
}

impl DiningTableCreate {
    /// Validate the payload and assign the id chosen by the store
    pub fn into_table(self, id: i64) -> AppResult<DiningTable> {
        DiningTable::new(id, self.name, self.capacity)
    }
}
