//! # Payment Compliance
//!
//! A library for scoring per-taxpayer payment compliance from a periodic
//! tabular ledger: each row is a taxpayer entity, each eligible column is a
//! calendar period's payment amount.
//!
//! ## Core Concepts
//!
//! - **Schema resolution**: ledger headers arrive aliased and inconsistently
//!   cased; a priority table maps them onto canonical fields
//! - **Payment column detection**: the remaining headers are interpreted as
//!   calendar periods through a chain of date formats and accepted only for
//!   the target fiscal year, and only when the column holds numeric data
//! - **Active months**: how long the entity's tax obligation ran within the
//!   fiscal year, derived from its activation date
//! - **Gap-tolerant scoring**: gaps under three consecutive missed periods
//!   are fully forgiven; longer gaps score by payment count over active
//!   months
//!
//! The engine is a pure, stateless transformation: ingestion, rendering and
//! export are external collaborators.
//!
//! ## Example
//!
//! ```rust,ignore
//! use payment_compliance::*;
//!
//! let dataset = RawDataset::new(
//!     vec![
//!         "NAMA UNIT".to_string(),
//!         "STATUS".to_string(),
//!         "TMT".to_string(),
//!         "Jan-24".to_string(),
//!         "Feb-24".to_string(),
//!     ],
//!     vec![vec![
//!         CellValue::Text("Warung Sari".to_string()),
//!         CellValue::Text("AKTIF".to_string()),
//!         CellValue::Text("2024-01-01".to_string()),
//!         CellValue::Number(500_000.0),
//!         CellValue::Number(450_000.0),
//!     ]],
//! );
//!
//! let scored = score_payment_compliance(&dataset, 2024, TaxCategory::FoodAndBeverage)?;
//! for record in &scored.records {
//!     println!("{}: {} ({:?})", record.name, record.compliance_score_display, record.category);
//! }
//! ```

pub mod activity;
pub mod detector;
pub mod engine;
pub mod error;
pub mod format;
pub mod resolver;
pub mod schema;
pub mod scorer;
pub mod summary;
pub mod utils;

pub use activity::active_months;
pub use detector::detect_payment_columns;
pub use engine::{score_dataset, ComplianceEngine};
pub use error::{ComplianceError, Result};
pub use format::{format_amount, format_score};
pub use resolver::{field_aliases, normalize_header, resolve_schema, ResolvedSchema};
pub use schema::*;
pub use scorer::{compliance_score, longest_gap, payment_count, payment_indicators};
pub use summary::{
    category_breakdown, monthly_totals, summary_stats, top_payers, CategoryBreakdown,
    MonthlyTotal, SummaryStats,
};
pub use utils::*;

use log::{debug, info};

pub struct ComplianceProcessor;

impl ComplianceProcessor {
    pub fn process(
        dataset: &RawDataset,
        fiscal_year: i32,
        tax_category: TaxCategory,
    ) -> Result<ScoredDataset> {
        validate_fiscal_year(fiscal_year)?;

        info!(
            "Scoring payment compliance for fiscal year {} ({:?})",
            fiscal_year, tax_category
        );
        debug!(
            "Dataset contains {} rows and {} columns",
            dataset.rows.len(),
            dataset.headers.len()
        );

        let scored = engine::score_dataset(dataset, fiscal_year, tax_category)?;

        debug!(
            "Accepted {} payment columns, scored {} records",
            scored.payment_columns.len(),
            scored.records.len()
        );

        Ok(scored)
    }
}

pub fn score_payment_compliance(
    dataset: &RawDataset,
    fiscal_year: i32,
    tax_category: TaxCategory,
) -> Result<ScoredDataset> {
    ComplianceProcessor::process(dataset, fiscal_year, tax_category)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_end_to_end_processing() {
        let dataset = RawDataset::new(
            vec![
                "UPPPD".to_string(),
                "STATUS".to_string(),
                "TMT".to_string(),
                "Jan-24".to_string(),
                "Feb-24".to_string(),
                "Mar-24".to_string(),
            ],
            vec![vec![
                text("Restoran Melati"),
                text("AKTIF"),
                text("2024-01-15"),
                CellValue::Number(1_000_000.0),
                CellValue::Number(0.0),
                CellValue::Number(1_200_000.0),
            ]],
        );

        let result = score_payment_compliance(&dataset, 2024, TaxCategory::FoodAndBeverage);
        assert!(result.is_ok());

        let scored = result.unwrap();
        assert_eq!(scored.records.len(), 1);

        let record = &scored.records[0];
        assert_eq!(record.name, "Restoran Melati");
        assert_eq!(record.active_months, 12);
        assert_eq!(record.payment_count, 2);
        // One missed month: forgiven.
        assert_eq!(record.compliance_score, 100.0);
        assert_eq!(record.category, ComplianceCategory::Compliant);
        assert_eq!(record.total_payment_display, "2,200,000.00");
    }

    #[test]
    fn test_rejects_out_of_range_fiscal_year() {
        let dataset = RawDataset::new(
            vec!["NM UNIT".to_string(), "STATUS".to_string(), "TMT".to_string()],
            vec![],
        );

        let err = score_payment_compliance(&dataset, 1980, TaxCategory::Other).unwrap_err();
        assert!(matches!(err, ComplianceError::InvalidFiscalYear(1980)));
    }
}
