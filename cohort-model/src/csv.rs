//! Admin CSV export.

use crate::enrollment::Enrollment;

/// Header row of the export, fixed business fields.
pub const CSV_HEADER: &str = "ID,Name,Email,Phone,Type,Plan,Payment Status,Transaction ID,Created At";

/// Renders records as CSV, one row per record, newest-first order preserved
/// from the input.
///
/// Fields are comma-joined without quoting; a value containing a comma
/// shifts the remaining columns.
#[must_use]
pub fn to_csv(records: &[Enrollment]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for record in records {
        lines.push(
            [
                record.id.to_string(),
                record.name.clone(),
                record.email.clone(),
                record.phone.clone(),
                record.kind.to_string(),
                record.plan.to_string(),
                record.payment_status.to_string(),
                record.transaction_id.clone().unwrap_or_default(),
                record.created_at.to_rfc3339(),
            ]
            .join(","),
        );
    }
    lines.join("\n")
}
