use crate::schema::{ComplianceCategory, ScoredDataset};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Total recorded payments for one accepted payment column across all
/// entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyTotal {
    pub period: NaiveDate,
    pub label: String,
    pub total: f64,
}

/// Per-period payment totals, sorted by period ascending. This is the
/// time-series a rendering collaborator plots as the monthly trend.
pub fn monthly_totals(dataset: &ScoredDataset) -> Vec<MonthlyTotal> {
    let mut totals: Vec<MonthlyTotal> = dataset
        .payment_columns
        .iter()
        .enumerate()
        .map(|(col_idx, column)| {
            let total = dataset
                .records
                .iter()
                .filter_map(|record| record.payments.get(col_idx).and_then(|p| p.amount))
                .sum();
            MonthlyTotal {
                period: column.period,
                label: column.header.clone(),
                total,
            }
        })
        .collect();

    totals.sort_by_key(|t| t.period);
    totals
}

/// Indices of the top `n` records by numeric total payment, descending.
/// Ties keep dataset order.
pub fn top_payers(dataset: &ScoredDataset, n: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..dataset.records.len()).collect();
    indices.sort_by(|&a, &b| {
        dataset.records[b]
            .total_payment
            .partial_cmp(&dataset.records[a].total_payment)
            .unwrap_or(Ordering::Equal)
    });
    indices.truncate(n);
    indices
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub non_compliant: usize,
    pub partially_compliant: usize,
    pub compliant: usize,
}

impl CategoryBreakdown {
    pub fn total(&self) -> usize {
        self.non_compliant + self.partially_compliant + self.compliant
    }
}

pub fn category_breakdown(dataset: &ScoredDataset) -> CategoryBreakdown {
    let mut breakdown = CategoryBreakdown::default();
    for record in &dataset.records {
        match record.category {
            ComplianceCategory::NonCompliant => breakdown.non_compliant += 1,
            ComplianceCategory::PartiallyCompliant => breakdown.partially_compliant += 1,
            ComplianceCategory::Compliant => breakdown.compliant += 1,
        }
    }
    breakdown
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryStats {
    pub taxpayer_count: usize,
    pub total_payment: f64,
    pub average_payment: f64,
}

/// Headline statistics over the full record set.
pub fn summary_stats(dataset: &ScoredDataset) -> SummaryStats {
    let taxpayer_count = dataset.records.len();
    let total_payment: f64 = dataset.records.iter().map(|r| r.total_payment).sum();
    let average_payment = if taxpayer_count == 0 {
        0.0
    } else {
        total_payment / taxpayer_count as f64
    };

    SummaryStats {
        taxpayer_count,
        total_payment,
        average_payment,
    }
}
