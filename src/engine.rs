use crate::activity::active_months;
use crate::detector::detect_indexed;
use crate::error::Result;
use crate::format::{format_amount, format_score};
use crate::resolver::{normalize_header, resolve_schema, ResolvedSchema};
use crate::schema::{
    ComplianceCategory, PaymentCell, PaymentColumn, RawDataset, ScoredDataset, ScoredRecord,
    TaxCategory,
};
use crate::scorer::{compliance_score, longest_gap, payment_count, payment_indicators};
use crate::utils::parse_period;
use log::debug;

/// Runs the full scoring pipeline for one fiscal year and tax category:
/// resolve the schema, detect payment columns, then derive every record.
/// The input dataset is never mutated; each record is built as a fresh
/// owned value so rows carry no shared state.
pub struct ComplianceEngine {
    fiscal_year: i32,
    tax_category: TaxCategory,
}

impl ComplianceEngine {
    pub fn new(fiscal_year: i32, tax_category: TaxCategory) -> Self {
        Self {
            fiscal_year,
            tax_category,
        }
    }

    pub fn score_dataset(&self, dataset: &RawDataset) -> Result<ScoredDataset> {
        let mut headers: Vec<String> = dataset
            .headers
            .iter()
            .map(|h| normalize_header(h))
            .collect();

        let resolved = resolve_schema(&headers, self.tax_category)?;
        resolved.apply_canonical_labels(&mut headers);

        let working = RawDataset::new(headers, dataset.rows.clone());

        let columns = detect_indexed(&working, &resolved, self.fiscal_year)?;
        debug!(
            "Detected {} payment columns for fiscal year {}",
            columns.len(),
            self.fiscal_year
        );

        let records = working
            .rows
            .iter()
            .enumerate()
            .map(|(row_idx, _)| self.score_row(&working, row_idx, &resolved, &columns))
            .collect();

        Ok(ScoredDataset {
            fiscal_year: self.fiscal_year,
            tax_category: self.tax_category,
            records,
            payment_columns: columns.into_iter().map(|(_, column)| column).collect(),
        })
    }

    fn score_row(
        &self,
        working: &RawDataset,
        row_idx: usize,
        resolved: &ResolvedSchema,
        columns: &[(usize, PaymentColumn)],
    ) -> ScoredRecord {
        let name = working
            .cell(row_idx, resolved.unit_name)
            .as_text()
            .unwrap_or_default();
        let status = working
            .cell(row_idx, resolved.status)
            .as_text()
            .unwrap_or_default();
        let classification = resolved
            .classification
            .and_then(|idx| working.cell(row_idx, idx).as_text());

        // Unparseable activation dates degrade to None, never an error.
        let activation_date = working
            .cell(row_idx, resolved.activation_date)
            .as_text()
            .and_then(|text| parse_period(&text));

        let payments: Vec<PaymentCell> = columns
            .iter()
            .map(|(col_idx, column)| PaymentCell {
                period_label: column.header.clone(),
                amount: working.cell(row_idx, *col_idx).as_number(),
            })
            .collect();

        let total_payment: f64 = payments.iter().filter_map(|p| p.amount).sum();

        let amounts: Vec<Option<f64>> = payments.iter().map(|p| p.amount).collect();
        let indicators = payment_indicators(&amounts);
        let count = payment_count(&indicators);
        let max_gap = longest_gap(&indicators);

        let months = active_months(activation_date, self.fiscal_year);
        let score = compliance_score(count, months, max_gap);

        ScoredRecord {
            name,
            status,
            activation_date,
            classification,
            payments,
            total_payment,
            total_payment_display: format_amount(total_payment),
            active_months: months,
            payment_count: count,
            compliance_score: score,
            compliance_score_display: format_score(score),
            category: ComplianceCategory::from_score(score),
        }
    }
}

pub fn score_dataset(
    dataset: &RawDataset,
    fiscal_year: i32,
    tax_category: TaxCategory,
) -> Result<ScoredDataset> {
    ComplianceEngine::new(fiscal_year, tax_category).score_dataset(dataset)
}
