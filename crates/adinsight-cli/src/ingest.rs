//! CSV ingestion adapter.
//!
//! The insight core treats ingestion as an external collaborator that
//! produces typed rows; this module is that collaborator for the CLI. Unlike
//! narrative-service failures, ingest errors propagate: malformed input is a
//! caller problem, not something the pipeline papers over.

use std::io::Read;
use std::path::Path;

use adinsight_core::Row;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("csv parse error in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// Load typed rows from a CSV file with a header line.
///
/// Expected columns: `date,impressions,clicks,spend,platform` and an
/// optional `campaign_id`.
///
/// # Errors
///
/// Returns [`IngestError::Io`] if the file cannot be opened and
/// [`IngestError::Csv`] on any record that fails to parse.
pub fn load_rows(path: &Path) -> Result<Vec<Row>, IngestError> {
    let label = path.display().to_string();
    let file = std::fs::File::open(path).map_err(|source| IngestError::Io {
        path: label.clone(),
        source,
    })?;
    parse_rows(file, &label)
}

fn parse_rows<R: Read>(reader: R, label: &str) -> Result<Vec<Row>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<Row>() {
        let row = record.map_err(|source| IngestError::Csv {
            path: label.to_owned(),
            source,
        })?;
        rows.push(row);
    }
    Ok(rows)
}
