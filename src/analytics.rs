use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// Sum of amounts for one category label.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub(crate) struct CategorySum {
    pub(crate) name: String,
    pub(crate) sum: f64,
}

/// Sum of amounts for one calendar month, labelled `yyyy-MM`.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub(crate) struct MonthSum {
    pub(crate) month: String,
    pub(crate) sum: f64,
}

/// Aggregated view of one reporting period. Serializing this struct produces
/// the entire stdout contract of a successful run.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub(crate) struct AnalyticsResult {
    pub(crate) by_category: Vec<CategorySum>,
    pub(crate) by_month: Vec<MonthSum>,
    pub(crate) total: f64,
}

/// Fold the record set into per-category sums, per-month sums and a grand
/// total in one pass.
///
/// Categories group by exact string equality; no trimming, no case folding,
/// no sign inversion. The month key is the date truncated to `yyyy-MM`, so
/// lexical order equals chronological order. Both views are materialized
/// sorted ascending by key. An empty record set yields empty views and a
/// total of exactly 0.0.
pub(crate) fn aggregate(transactions: &[Transaction]) -> AnalyticsResult {
    let mut by_category: BTreeMap<String, f64> = BTreeMap::new();
    let mut by_month: BTreeMap<String, f64> = BTreeMap::new();
    let mut total = 0.0;

    for t in transactions {
        *by_category.entry(t.category.clone()).or_insert(0.0) += t.amount;
        let month = t.date.format("%Y-%m").to_string();
        *by_month.entry(month).or_insert(0.0) += t.amount;
        total += t.amount;
    }

    AnalyticsResult {
        by_category: by_category
            .into_iter()
            .map(|(name, sum)| CategorySum { name, sum })
            .collect(),
        by_month: by_month
            .into_iter()
            .map(|(month, sum)| MonthSum { month, sum })
            .collect(),
        total,
    }
}
