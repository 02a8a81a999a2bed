use crate::error::{ComplianceError, Result};
use crate::schema::{CanonicalField, TaxCategory};

/// Known header spellings per canonical field, in priority order. Lookup is
/// first-match against the normalized header set; no reflection, just a
/// static table.
pub fn field_aliases(field: CanonicalField) -> &'static [&'static str] {
    match field {
        CanonicalField::UnitName => &["NM UNIT", "NAMA UNIT", "UPPPD", "UNIT", "UNIT PAJAK"],
        CanonicalField::Status => &["STATUS"],
        CanonicalField::ActivationDate => &["TMT"],
        CanonicalField::Classification => &["KLASIFIKASI", "KATEGORI", "JENIS"],
    }
}

pub fn normalize_header(header: &str) -> String {
    header.trim().to_uppercase()
}

/// Column positions of the resolved canonical fields within the normalized
/// header list. `classification` is populated only for the entertainment
/// category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSchema {
    pub unit_name: usize,
    pub status: usize,
    pub activation_date: usize,
    pub classification: Option<usize>,
}

impl ResolvedSchema {
    pub fn is_canonical(&self, index: usize) -> bool {
        index == self.unit_name
            || index == self.status
            || index == self.activation_date
            || self.classification == Some(index)
    }

    /// Rewrites the matched headers to their canonical labels, leaving every
    /// other header untouched. The untouched remainder is what the payment
    /// column detector scans.
    pub fn apply_canonical_labels(&self, headers: &mut [String]) {
        headers[self.unit_name] = CanonicalField::UnitName.canonical_label().to_string();
        headers[self.status] = CanonicalField::Status.canonical_label().to_string();
        headers[self.activation_date] =
            CanonicalField::ActivationDate.canonical_label().to_string();
        if let Some(idx) = self.classification {
            headers[idx] = CanonicalField::Classification.canonical_label().to_string();
        }
    }
}

fn find_column(headers: &[String], field: CanonicalField) -> Option<usize> {
    field_aliases(field)
        .iter()
        .find_map(|alias| headers.iter().position(|h| h == alias))
}

/// Maps aliased headers onto canonical fields. `headers` must already be
/// normalized (see [`normalize_header`]). Fails naming the first required
/// field that cannot be resolved; classification is required only when the
/// tax category mandates it.
pub fn resolve_schema(headers: &[String], category: TaxCategory) -> Result<ResolvedSchema> {
    let required = [
        CanonicalField::UnitName,
        CanonicalField::Status,
        CanonicalField::ActivationDate,
    ];

    let mut indices = [0usize; 3];
    for (slot, field) in indices.iter_mut().zip(required) {
        *slot = find_column(headers, field).ok_or_else(|| {
            ComplianceError::MissingRequiredColumn {
                field: field.canonical_label().to_string(),
            }
        })?;
    }

    let classification = if category.requires_classification() {
        Some(
            find_column(headers, CanonicalField::Classification)
                .ok_or(ComplianceError::MissingClassificationColumn)?,
        )
    } else {
        None
    };

    Ok(ResolvedSchema {
        unit_name: indices[0],
        status: indices[1],
        activation_date: indices[2],
        classification,
    })
}
