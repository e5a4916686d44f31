use serde::{Deserialize, Serialize};
use shared::models::DiningTable;

use super::AllocationStrategy;

/// Which rule produced an allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationKind {
    /// One table with capacity equal to the party size
    Exact,
    /// Several smaller tables summing exactly to the party size
    Combined,
    /// The smallest table bigger than the party
    Oversized,
}

/// Tables chosen for a party, ascending by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub tables: Vec<DiningTable>,
    pub kind: AllocationKind,
}

impl Allocation {
    fn new(tables: Vec<&DiningTable>, kind: AllocationKind) -> Self {
        Self {
            tables: tables.into_iter().cloned().collect(),
            kind,
        }
    }

    pub fn seats(&self) -> u32 {
        self.tables.iter().map(|t| t.capacity).sum()
    }

    pub fn table_ids(&self) -> Vec<i64> {
        self.tables.iter().map(|t| t.id).collect()
    }
}

/// Choose tables for `party_size` among `available` with pair-only combining
///
/// `None` is the normal "no table" outcome, not an error.
pub fn select_tables(
    available: &[DiningTable],
    party_size: u32,
    optimize: bool,
) -> Option<Vec<DiningTable>> {
    select_tables_with(available, party_size, optimize, AllocationStrategy::PairOnly)
        .map(|allocation| allocation.tables)
}

/// [`select_tables`] with an explicit combination strategy
pub fn select_tables_with(
    available: &[DiningTable],
    party_size: u32,
    optimize: bool,
    strategy: AllocationStrategy,
) -> Option<Allocation> {
    if available.is_empty() {
        return None;
    }

    let mut ordered: Vec<&DiningTable> = available.iter().collect();
    ordered.sort_by_key(|t| t.id);

    if let Some(exact) = ordered.iter().find(|t| t.capacity == party_size) {
        return Some(Allocation::new(vec![*exact], AllocationKind::Exact));
    }

    // Unoptimized requests only ever get an exact-capacity table
    if !optimize {
        return None;
    }

    let (smaller, bigger): (Vec<&DiningTable>, Vec<&DiningTable>) =
        ordered.into_iter().partition(|t| t.capacity < party_size);

    if let Some(tables) = exact_sum_combination(&smaller, party_size, strategy.max_tables()) {
        return Some(Allocation::new(tables, AllocationKind::Combined));
    }

    bigger
        .into_iter()
        .min_by_key(|t| (t.capacity, t.id))
        .map(|table| Allocation::new(vec![table], AllocationKind::Oversized))
}

/// First combination of 2..=max_tables tables whose capacities sum to
/// `target`, trying fewer tables first and lower ids first within a size
fn exact_sum_combination<'a>(
    tables: &[&'a DiningTable],
    target: u32,
    max_tables: usize,
) -> Option<Vec<&'a DiningTable>> {
    let largest = max_tables.min(tables.len());
    (2..=largest).find_map(|size| {
        let mut picked = Vec::with_capacity(size);
        combination_with_sum(tables, 0, size, u64::from(target), &mut picked)
            .then(|| picked.iter().map(|&i| tables[i]).collect())
    })
}

fn combination_with_sum(
    tables: &[&DiningTable],
    from: usize,
    remaining: usize,
    target: u64,
    picked: &mut Vec<usize>,
) -> bool {
    if remaining == 0 {
        return target == 0;
    }
    for i in from..tables.len() {
        if tables.len() - i < remaining {
            break;
        }
        let capacity = u64::from(tables[i].capacity);
        if capacity > target {
            continue;
        }
        picked.push(i);
        if combination_with_sum(tables, i + 1, remaining - 1, target - capacity, picked) {
            return true;
        }
        picked.pop();
    }
    false
}
