use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComplianceError {
    #[error("Required column '{field}' not found under any known alias")]
    MissingRequiredColumn { field: String },

    #[error("Column 'KLASIFIKASI' is required for the entertainment tax category")]
    MissingClassificationColumn,

    #[error("No valid payment columns found for fiscal year {fiscal_year}")]
    NoPaymentColumns { fiscal_year: i32 },

    #[error("Invalid fiscal year {0}: must be between 2000 and 2100")]
    InvalidFiscalYear(i32),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ComplianceError>;
