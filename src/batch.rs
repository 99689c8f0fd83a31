//! Batch calculations from CSV
//!
//! Input columns: `id,calculator,amount,rate,years,extra1,extra2,extra3`
//! (field meaning per calculator is listed on [`RawFields`]). Rows are calculated
//! in parallel; a row that cannot be calculated is reported, never fatal.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::{info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::calculator::{calculate, RawFields};
use crate::catalog::CalculatorKind;
use crate::error::{Result, WealthError};
use crate::format::round_to;

/// Raw CSV row
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BatchRow {
    pub id: String,
    pub calculator: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub rate: String,
    #[serde(default)]
    pub years: String,
    #[serde(default)]
    pub extra1: String,
    #[serde(default)]
    pub extra2: String,
    #[serde(default)]
    pub extra3: String,
}

impl BatchRow {
    pub fn fields(&self) -> RawFields {
        RawFields {
            amount: self.amount.clone(),
            rate: self.rate.clone(),
            years: self.years.clone(),
            extra1: self.extra1.clone(),
            extra2: self.extra2.clone(),
            extra3: self.extra3.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    Ok,
    /// Missing or non-positive input; no result, as on screen
    Incomplete,
    /// The row names no known calculator
    Error,
}

/// One output row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutcome {
    pub id: String,
    pub calculator: String,
    pub status: BatchStatus,
    pub primary_value: Option<f64>,
    pub invested: Option<f64>,
    pub gain: Option<f64>,
    pub detail: String,
}

/// Load batch rows from a CSV file
pub fn load_requests(path: &Path) -> Result<Vec<BatchRow>> {
    let file = File::open(path).map_err(|e| WealthError::io(path, e))?;
    load_requests_from_reader(file)
}

/// Load batch rows from any reader (with header row)
///
/// Rows may stop early; trailing columns they leave out read as blank.
pub fn load_requests_from_reader<R: Read>(reader: R) -> Result<Vec<BatchRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::new();
    for result in csv_reader.deserialize() {
        let row: BatchRow = result?;
        rows.push(row);
    }
    Ok(rows)
}

/// Calculate a single row
pub fn run_row(row: &BatchRow) -> BatchOutcome {
    let kind = match CalculatorKind::from_id(&row.calculator) {
        Ok(kind) => kind,
        Err(e) => {
            warn!("row {}: {}", row.id, e);
            return BatchOutcome {
                id: row.id.clone(),
                calculator: row.calculator.clone(),
                status: BatchStatus::Error,
                primary_value: None,
                invested: None,
                gain: None,
                detail: e.to_string(),
            };
        }
    };

    match calculate(kind, &row.fields()) {
        Some(outcome) => {
            let detail = outcome
                .lines()
                .iter()
                .map(|(label, value)| format!("{}={:.2}", label, value))
                .collect::<Vec<_>>()
                .join("; ");
            BatchOutcome {
                id: row.id.clone(),
                calculator: kind.id().to_string(),
                status: BatchStatus::Ok,
                primary_value: Some(round_to(outcome.headline(), 2)),
                invested: outcome.invested().map(|v| round_to(v, 2)),
                gain: outcome.gain().map(|v| round_to(v, 2)),
                detail,
            }
        }
        None => BatchOutcome {
            id: row.id.clone(),
            calculator: kind.id().to_string(),
            status: BatchStatus::Incomplete,
            primary_value: None,
            invested: None,
            gain: None,
            detail: String::new(),
        },
    }
}

/// Calculate every row in parallel, preserving input order
pub fn run_batch(rows: &[BatchRow]) -> Vec<BatchOutcome> {
    let outcomes: Vec<BatchOutcome> = rows.par_iter().map(run_row).collect();

    let ok = outcomes.iter().filter(|o| o.status == BatchStatus::Ok).count();
    info!("batch: {} rows, {} calculated, {} skipped", rows.len(), ok, rows.len() - ok);
    outcomes
}

/// Write outcomes as CSV with a header row
pub fn write_outcomes<W: Write>(writer: W, outcomes: &[BatchOutcome]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for outcome in outcomes {
        csv_writer.serialize(outcome)?;
    }
    csv_writer.flush().map_err(|e| WealthError::io("<batch output>", e))?;
    Ok(())
}

/// Write outcomes to a CSV file
pub fn write_outcomes_to_path(path: &Path, outcomes: &[BatchOutcome]) -> Result<()> {
    let file = File::create(path).map_err(|e| WealthError::io(path, e))?;
    write_outcomes(file, outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
id,calculator,amount,rate,years,extra1,extra2,extra3
a1,sip,5000,12,10,,,
a2,lumpsum,100000,12,10,,,
a3,fd-calculator,200000,6.5,2,4,,
a4,swp,1000000,8,10,,,
a5,emi,1000,10,5,,,
a6,retirement,50000,12,30,,,
";

    #[test]
    fn test_load_and_run_sample() {
        let rows = load_requests_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(rows.len(), 6);

        let outcomes = run_batch(&rows);
        let ids: Vec<_> = outcomes.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["a1", "a2", "a3", "a4", "a5", "a6"]);

        assert_eq!(outcomes[0].status, BatchStatus::Ok);
        assert_eq!(outcomes[0].invested, Some(600_000.0));
        assert!((outcomes[1].primary_value.unwrap() - 310_584.82).abs() < 0.01);
        assert_eq!(outcomes[2].calculator, "fd");
        // SWP without a withdrawal amount is incomplete
        assert_eq!(outcomes[3].status, BatchStatus::Incomplete);
        assert_eq!(outcomes[4].status, BatchStatus::Error);
        assert_eq!(outcomes[5].status, BatchStatus::Ok);
    }

    #[test]
    fn test_short_rows_read_as_blank_fields() {
        let text = "\
id,calculator,amount,rate,years,extra1,extra2,extra3
a1,sip,5000,12,10
a2,lumpsum,100000,12,10
a3,swp,1000000,8,10,10000
";
        let rows = load_requests_from_reader(text.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].extra1, "");
        assert_eq!(rows[2].extra1, "10000");
        assert_eq!(rows[2].extra3, "");

        let outcomes = run_batch(&rows);
        assert!(outcomes.iter().all(|o| o.status == BatchStatus::Ok));
        assert!((outcomes[1].primary_value.unwrap() - 310_584.82).abs() < 0.01);
    }

    #[test]
    fn test_malformed_row_reports_csv_error_once() {
        // No calculator column at all
        let text = "id,amount\na1,5000\n";
        let err = load_requests_from_reader(text.as_bytes()).unwrap_err();
        assert!(matches!(err, WealthError::Csv(_)));
        let message = err.to_string();
        assert_eq!(message.matches("CSV").count(), 1, "{}", message);
    }

    #[test]
    fn test_write_outcomes_csv() {
        let rows = load_requests_from_reader(SAMPLE.as_bytes()).unwrap();
        let outcomes = run_batch(&rows[..1]);

        let mut buf = Vec::new();
        write_outcomes(&mut buf, &outcomes).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("id,calculator,status,primary_value,invested,gain,detail")
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("a1,sip,ok,"));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("requests.csv");
        let output = dir.path().join("results.csv");
        std::fs::write(&input, SAMPLE).unwrap();

        let rows = load_requests(&input).unwrap();
        write_outcomes_to_path(&output, &run_batch(&rows)).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written.lines().count(), 7);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_requests(Path::new("/nonexistent/requests.csv")).unwrap_err();
        assert!(matches!(err, WealthError::Io { .. }));
    }
}
