//! JSON and CSV export, JSON backup restore.

use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::info;

use brier_core::errors::{BrierResult, StoreError, ValidationError};
use brier_core::models::{PredictionRecord, PredictionStatus};

pub const CSV_HEADER: &str = "ID,Event,Fear,Probability,Category,Status,Outcome,Created,Resolved";

fn serialization_failed(reason: impl ToString) -> StoreError {
    StoreError::SerializationFailed {
        reason: reason.to_string(),
    }
}

fn io_failed(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |e| StoreError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Pretty-printed JSON array of `records`.
pub fn to_json(records: &[PredictionRecord]) -> BrierResult<String> {
    Ok(serde_json::to_string_pretty(records).map_err(serialization_failed)?)
}

/// Parse a JSON backup.
///
/// Probabilities are range-checked by deserialization; blank `event` or
/// `fear` text is rejected here.
pub fn from_json(json: &str) -> BrierResult<Vec<PredictionRecord>> {
    let records: Vec<PredictionRecord> =
        serde_json::from_str(json).map_err(serialization_failed)?;
    for record in &records {
        for (field, value) in [("event", &record.event), ("fear", &record.fear)] {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyField {
                    field: field.to_string(),
                }
                .into());
            }
        }
    }
    Ok(records)
}

/// Write a JSON backup to `path`.
pub fn save_json(path: &Path, records: &[PredictionRecord]) -> BrierResult<()> {
    let json = to_json(records)?;
    std::fs::write(path, json).map_err(io_failed(path))?;
    info!(path = %path.display(), count = records.len(), "backup written");
    Ok(())
}

/// Read a JSON backup from `path`.
pub fn load_json(path: &Path) -> BrierResult<Vec<PredictionRecord>> {
    let json = std::fs::read_to_string(path).map_err(io_failed(path))?;
    let records = from_json(&json)?;
    info!(path = %path.display(), count = records.len(), "backup loaded");
    Ok(records)
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Double embedded quotes and wrap in quotes.
fn quoted(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// One CSV line per record under [`CSV_HEADER`]. Outcome and resolution
/// time are empty for pending records.
pub fn to_csv(records: &[PredictionRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    for record in records {
        let (status, outcome, resolved) = match &record.status {
            PredictionStatus::Pending => ("pending", String::new(), String::new()),
            PredictionStatus::Resolved {
                outcome,
                resolved_at,
                ..
            } => ("resolved", outcome.to_string(), timestamp(*resolved_at)),
        };
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "\n{},{},{},{},{},{},{},{},{}",
            record.id,
            quoted(&record.event),
            quoted(&record.fear),
            record.probability.percent(),
            record.category,
            status,
            outcome,
            timestamp(record.created_at),
            resolved,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::{pending, resolved};

    #[test]
    fn quotes_are_doubled() {
        assert_eq!(quoted(r#"say "hi""#), r#""say ""hi""""#);
    }

    #[test]
    fn empty_export_is_header_only() {
        assert_eq!(to_csv(&[]), CSV_HEADER);
    }

    #[test]
    fn pending_rows_leave_resolution_columns_empty() {
        let csv = to_csv(&[pending(40)]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.ends_with(",pending,,2024-06-01T12:00:00.000Z,"));
    }

    #[test]
    fn resolved_rows_carry_outcome_and_time() {
        let csv = to_csv(&[resolved(70, true)]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "fixture-70,\"Fixture event\",\"Fixture fear\",70,other,resolved,true,\
             2024-06-01T12:00:00.000Z,2024-06-01T13:00:00.000Z"
        );
    }
}
