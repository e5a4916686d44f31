use serde::{Deserialize, Serialize};

/// How far the combination step may go when no single table fits exactly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AllocationStrategy {
    /// Only pairs of smaller tables are combined
    #[default]
    PairOnly,
    /// Any 2..=max_tables smaller tables, fewest tables first
    AnySubset { max_tables: usize },
}

impl AllocationStrategy {
    /// Parse the `ALLOCATION_STRATEGY` value
    pub fn from_name(name: &str, max_tables: usize) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pair" | "pair_only" => Some(Self::PairOnly),
            "subset" | "any_subset" => Some(Self::AnySubset {
                max_tables: max_tables.max(2),
            }),
            _ => None,
        }
    }

    /// Largest number of tables one combination may use
    pub fn max_tables(&self) -> usize {
        match self {
            Self::PairOnly => 2,
            Self::AnySubset { max_tables } => (*max_tables).max(2),
        }
    }
}
