//! Allocation Optimizer
//!
//! Picks the table(s) for a party from the tables the availability filter
//! left free. Preference order:
//!
//! 1. one table whose capacity equals the party size (always, even unoptimized)
//! 2. with `optimize`: smaller tables whose capacities sum exactly to the party
//! 3. with `optimize`: the smallest table bigger than the party
//!
//! Pure functions of their inputs; ties resolve to the lowest table ids.

mod finder;
mod optimizer;
mod strategy;

pub use finder::{find_tables, find_tables_indexed};
pub use optimizer::{Allocation, AllocationKind, select_tables, select_tables_with};
pub use strategy::AllocationStrategy;
