//! Restaurant Model

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::DiningTable;
use crate::error::{AppError, AppResult, ErrorCode};
use crate::validation::{
    MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MIN_DESCRIPTION_LEN, validate_min_text,
    validate_required_text,
};

/// Restaurant with its opening hours and table inventory
///
/// `opening_time < closing_time` holds for every value built through
/// [`Restaurant::new`]. Tables are unique by id and kept ordered by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    tables: Vec<DiningTable>,
}

/// Create restaurant payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    pub description: String,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
}

/// Restaurant listing entry (no table inventory)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantSummary {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
}

impl Restaurant {
    /// Validate the payload and build a restaurant with no tables
    pub fn new(id: i64, data: RestaurantCreate) -> AppResult<Self> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&data.description, "description", MAX_DESCRIPTION_LEN)?;
        validate_min_text(&data.description, "description", MIN_DESCRIPTION_LEN)?;

        if data.closing_time <= data.opening_time {
            return Err(AppError::new(ErrorCode::InvalidBusinessHours)
                .with_detail("opening_time", data.opening_time.to_string())
                .with_detail("closing_time", data.closing_time.to_string()));
        }

        Ok(Self {
            id,
            name: data.name,
            description: data.description,
            opening_time: data.opening_time,
            closing_time: data.closing_time,
            tables: Vec::new(),
        })
    }

    /// Builder-style variant of [`Restaurant::add_table`]
    pub fn with_tables(mut self, tables: impl IntoIterator<Item = DiningTable>) -> AppResult<Self> {
        for table in tables {
            self.add_table(table)?;
        }
        Ok(self)
    }

    /// Add a table to the inventory
    pub fn add_table(&mut self, table: DiningTable) -> AppResult<()> {
        match self.tables.binary_search_by_key(&table.id, |t| t.id) {
            Ok(_) => Err(AppError::new(ErrorCode::DuplicateTable).with_detail("table_id", table.id)),
            Err(pos) => {
                self.tables.insert(pos, table);
                Ok(())
            }
        }
    }

    /// Remove a table from the inventory
    pub fn remove_table(&mut self, table_id: i64) -> AppResult<DiningTable> {
        self.tables
            .binary_search_by_key(&table_id, |t| t.id)
            .map(|pos| self.tables.remove(pos))
            .map_err(|_| AppError::table_not_found(table_id))
    }

    /// Tables ordered by id
    pub fn tables(&self) -> &[DiningTable] {
        &self.tables
    }

    pub fn table(&self, table_id: i64) -> Option<&DiningTable> {
        self.tables
            .binary_search_by_key(&table_id, |t| t.id)
            .ok()
            .map(|pos| &self.tables[pos])
    }

    /// Seats across the whole inventory
    pub fn total_capacity(&self) -> u32 {
        self.tables.iter().map(|t| t.capacity).sum()
    }

    /// Whether `[start, end)` lies within opening hours
    pub fn is_open_during(&self, start: NaiveTime, end: NaiveTime) -> bool {
        start < end && self.opening_time <= start && end <= self.closing_time
    }

    pub fn summary(&self) -> RestaurantSummary {
        RestaurantSummary {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            opening_time: self.opening_time,
            closing_time: self.closing_time,
        }
    }
}
