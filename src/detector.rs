use crate::error::{ComplianceError, Result};
use crate::resolver::ResolvedSchema;
use crate::schema::{PaymentColumn, RawDataset};
use crate::utils::parse_period;
use chrono::Datelike;
use log::debug;

fn column_has_numeric_cell(dataset: &RawDataset, col: usize) -> bool {
    dataset
        .rows
        .iter()
        .any(|row| row.get(col).and_then(|cell| cell.as_number()).is_some())
}

/// Classifies every non-canonical column as a payment period or not. A
/// column is accepted only when its header parses as a calendar period, the
/// parsed year matches the fiscal year, and at least one cell in the column
/// is numeric. Rejected columns are skipped silently; an empty accepted set
/// is fatal.
///
/// Accepted columns keep their original header text and left-to-right order.
pub fn detect_payment_columns(
    dataset: &RawDataset,
    resolved: &ResolvedSchema,
    fiscal_year: i32,
) -> Result<Vec<PaymentColumn>> {
    let indexed = detect_indexed(dataset, resolved, fiscal_year)?;
    Ok(indexed.into_iter().map(|(_, column)| column).collect())
}

/// As [`detect_payment_columns`], but carrying each accepted column's
/// position in the dataset for per-row cell access.
pub(crate) fn detect_indexed(
    dataset: &RawDataset,
    resolved: &ResolvedSchema,
    fiscal_year: i32,
) -> Result<Vec<(usize, PaymentColumn)>> {
    let mut accepted = Vec::new();

    for (idx, header) in dataset.headers.iter().enumerate() {
        if resolved.is_canonical(idx) {
            continue;
        }

        let period = match parse_period(header) {
            Some(date) => date,
            None => continue,
        };

        if period.year() != fiscal_year {
            debug!(
                "Column '{}' parsed to {} outside fiscal year {}, skipping",
                header, period, fiscal_year
            );
            continue;
        }

        if !column_has_numeric_cell(dataset, idx) {
            debug!("Column '{}' has no numeric cells, skipping", header);
            continue;
        }

        accepted.push((
            idx,
            PaymentColumn {
                header: header.clone(),
                period,
            },
        ));
    }

    if accepted.is_empty() {
        return Err(ComplianceError::NoPaymentColumns { fiscal_year });
    }

    Ok(accepted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{normalize_header, resolve_schema};
    use crate::schema::{CellValue, TaxCategory};

    fn dataset(headers: &[&str], rows: Vec<Vec<CellValue>>) -> RawDataset {
        RawDataset::new(headers.iter().map(|h| normalize_header(h)).collect(), rows)
    }

    fn num(v: f64) -> CellValue {
        CellValue::Number(v)
    }

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    #[test]
    fn test_accepts_fiscal_year_columns_in_order() {
        let ds = dataset(
            &["NM UNIT", "STATUS", "TMT", "Jan-24", "Feb-24", "KETERANGAN"],
            vec![vec![
                text("Warung Sari"),
                text("AKTIF"),
                text("2023-05-01"),
                num(100.0),
                num(0.0),
                text("ok"),
            ]],
        );
        let resolved = resolve_schema(&ds.headers, TaxCategory::Other).unwrap();

        let columns = detect_payment_columns(&ds, &resolved, 2024).unwrap();
        let headers: Vec<&str> = columns.iter().map(|c| c.header.as_str()).collect();
        assert_eq!(headers, vec!["JAN-24", "FEB-24"]);
    }

    #[test]
    fn test_rejects_wrong_year() {
        let ds = dataset(
            &["NM UNIT", "STATUS", "TMT", "Jan-23", "Feb-23"],
            vec![vec![
                text("Warung Sari"),
                text("AKTIF"),
                text("2023-05-01"),
                num(100.0),
                num(200.0),
            ]],
        );
        let resolved = resolve_schema(&ds.headers, TaxCategory::Other).unwrap();

        let err = detect_payment_columns(&ds, &resolved, 2024).unwrap_err();
        assert!(matches!(
            err,
            ComplianceError::NoPaymentColumns { fiscal_year: 2024 }
        ));
    }

    #[test]
    fn test_rejects_column_with_no_numeric_cells() {
        let ds = dataset(
            &["NM UNIT", "STATUS", "TMT", "Jan-24", "Feb-24"],
            vec![
                vec![
                    text("A"),
                    text("AKTIF"),
                    text("2024-01-01"),
                    text("belum bayar"),
                    num(50.0),
                ],
                vec![text("B"), text("AKTIF"), text("2024-01-01"), CellValue::Empty, num(75.0)],
            ],
        );
        let resolved = resolve_schema(&ds.headers, TaxCategory::Other).unwrap();

        let columns = detect_payment_columns(&ds, &resolved, 2024).unwrap();
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].header, "FEB-24");
    }

    #[test]
    fn test_numeric_text_cells_count_as_numeric() {
        let ds = dataset(
            &["NM UNIT", "STATUS", "TMT", "Mar-24"],
            vec![vec![
                text("A"),
                text("AKTIF"),
                text("2024-01-01"),
                text(" 1250.50 "),
            ]],
        );
        let resolved = resolve_schema(&ds.headers, TaxCategory::Other).unwrap();

        let columns = detect_payment_columns(&ds, &resolved, 2024).unwrap();
        assert_eq!(columns.len(), 1);
        assert_eq!(
            columns[0].period,
            chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }
}
