//! Per-category spending aggregation
//!
//! A pure reduction over the fetched diary entries. Entries whose label
//! matches one of the six fixed categories accumulate under that category;
//! anything else lands in a single unrecognized bucket. The grand total
//! covers both.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{Category, DiaryEntry};

/// Summed spending for one advice invocation, discarded after use
#[derive(Debug, Clone, Default)]
pub struct SpendingTotals {
    by_category: HashMap<Category, Decimal>,
    unrecognized: Decimal,
    total: Decimal,
}

impl SpendingTotals {
    /// Reduce a set of entries to category totals and a grand total.
    /// Order-independent; an empty set yields all zeros.
    pub fn from_entries(entries: &[DiaryEntry]) -> Self {
        let mut totals = Self::default();
        for entry in entries {
            match Category::parse(&entry.category) {
                Some(category) => {
                    *totals.by_category.entry(category).or_insert(Decimal::ZERO) += entry.amount;
                }
                None => totals.unrecognized += entry.amount,
            }
            totals.total += entry.amount;
        }
        totals
    }

    /// Total recorded spend for a category (zero if none)
    pub fn category_total(&self, category: Category) -> Decimal {
        self.by_category
            .get(&category)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Spend recorded under labels that match no known category
    pub fn unrecognized_total(&self) -> Decimal {
        self.unrecognized
    }

    /// Total spend across all entries, unrecognized labels included
    pub fn total_spend(&self) -> Decimal {
        self.total
    }
}
