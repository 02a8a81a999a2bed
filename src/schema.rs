use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single cell of the raw ledger. Spreadsheet ingestion produces a mix of
/// numbers, free text and blanks; no cell type is trusted until parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Empty,
}

impl CellValue {
    /// Numeric view of the cell. Text is parsed after trimming; anything
    /// unparseable degrades to `None` rather than an error.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            CellValue::Empty => None,
        }
    }

    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Number(n) => Some(n.to_string()),
            CellValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            CellValue::Empty => None,
        }
    }
}

/// The raw tabular ledger as handed over by the ingestion collaborator.
/// Row-major; column order is significant and preserved throughout.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RawDataset {
    #[schemars(description = "Column headers exactly as they appear in the source sheet")]
    pub headers: Vec<String>,

    #[schemars(description = "One entry per taxpayer entity; cells are positional against `headers`")]
    pub rows: Vec<Vec<CellValue>>,
}

impl RawDataset {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { headers, rows }
    }

    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        static EMPTY: CellValue = CellValue::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub enum TaxCategory {
    #[schemars(description = "Food and beverage establishments (MAKAN MINUM)")]
    FoodAndBeverage,

    #[schemars(
        description = "Arts and entertainment services (JASA KESENIAN DAN HIBURAN). Mandates a classification column."
    )]
    Entertainment,

    #[schemars(description = "Any other local tax type (LAINNYA)")]
    Other,
}

impl TaxCategory {
    pub fn requires_classification(&self) -> bool {
        matches!(self, TaxCategory::Entertainment)
    }
}

/// Canonical semantic fields the resolver maps aliased headers onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub enum CanonicalField {
    UnitName,
    Status,
    ActivationDate,
    Classification,
}

impl CanonicalField {
    /// The canonical header written into the working dataset, in the
    /// ledger's own vocabulary.
    pub fn canonical_label(&self) -> &'static str {
        match self {
            CanonicalField::UnitName => "NM UNIT",
            CanonicalField::Status => "STATUS",
            CanonicalField::ActivationDate => "TMT",
            CanonicalField::Classification => "KLASIFIKASI",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub enum ComplianceCategory {
    NonCompliant,
    PartiallyCompliant,
    Compliant,
}

impl ComplianceCategory {
    /// Bin boundaries are right-edge inclusive: exactly 50.0 is still
    /// NonCompliant, exactly 100.0 is Compliant. Scores above 100 are
    /// possible (payment count is not window-restricted) and land in the
    /// top bin.
    pub fn from_score(score: f64) -> Self {
        if score <= 50.0 {
            ComplianceCategory::NonCompliant
        } else if score <= 99.9 {
            ComplianceCategory::PartiallyCompliant
        } else {
            ComplianceCategory::Compliant
        }
    }
}

/// A payment column accepted by the detector: the original header text plus
/// the calendar period it parsed to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentColumn {
    pub header: String,
    pub period: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PaymentCell {
    pub period_label: String,
    /// Parsed amount; `None` when the source cell was blank or non-numeric.
    pub amount: Option<f64>,
}

/// One fully derived taxpayer record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScoredRecord {
    pub name: String,
    pub status: String,

    #[schemars(description = "Date the tax obligation began; None when the source cell was unparseable")]
    pub activation_date: Option<NaiveDate>,

    #[schemars(description = "Present only for the entertainment tax category")]
    pub classification: Option<String>,

    pub payments: Vec<PaymentCell>,

    pub total_payment: f64,
    #[schemars(description = "Grouped-thousands rendering of total_payment, e.g. \"1,234,567.89\"")]
    pub total_payment_display: String,

    #[schemars(description = "Months the entity was obligated to pay within the fiscal year, 0..=12")]
    pub active_months: u32,

    #[schemars(description = "Payment columns with a strictly positive amount, across all accepted columns")]
    pub payment_count: u32,

    pub compliance_score: f64,
    #[schemars(description = "Two-decimal rendering of compliance_score")]
    pub compliance_score_display: String,

    pub category: ComplianceCategory,
}

/// The engine's full output: augmented records plus the accepted payment
/// columns in original left-to-right order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScoredDataset {
    pub fiscal_year: i32,
    pub tax_category: TaxCategory,
    pub records: Vec<ScoredRecord>,
    pub payment_columns: Vec<PaymentColumn>,
}

impl ScoredDataset {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(ScoredDataset)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}
