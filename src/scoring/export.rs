//! Result export
//!
//! Records are written as a JSON array in node order.

use super::record::{ExplainedRecord, ScoreRecord};
use crate::error::{ScoringError, ScoringResult};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Serializes score records
#[derive(Debug, Clone, Copy)]
pub struct ResultExporter {
    /// Two-space indented output instead of a single line
    pub pretty: bool,
}

impl Default for ResultExporter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl ResultExporter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Write any serializable record slice to a writer
    pub fn write<W: Write, T: Serialize>(&self, writer: W, records: &[T]) -> ScoringResult<()> {
        if self.pretty {
            serde_json::to_writer_pretty(writer, records)?;
        } else {
            serde_json::to_writer(writer, records)?;
        }
        Ok(())
    }

    pub fn to_string(&self, records: &[ScoreRecord]) -> ScoringResult<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(records)?
        } else {
            serde_json::to_string(records)?
        };
        Ok(text)
    }

    /// Write `{id, raw_score, norm_score}` records to a file
    pub fn write_to_path(&self, path: impl AsRef<Path>, records: &[ScoreRecord]) -> ScoringResult<()> {
        self.write_file(path.as_ref(), records)
    }

    /// Write records with their feature breakdown to a file
    pub fn write_explained_to_path(
        &self,
        path: impl AsRef<Path>,
        records: &[ExplainedRecord],
    ) -> ScoringResult<()> {
        self.write_file(path.as_ref(), records)
    }

    fn write_file<T: Serialize>(&self, path: &Path, records: &[T]) -> ScoringResult<()> {
        let io_err = |source| ScoringError::Io {
            path: path.display().to_string(),
            source,
        };
        let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
        self.write(&mut writer, records)?;
        writer.flush().map_err(io_err)?;
        info!("Wrote {} records to {}", records.len(), path.display());
        Ok(())
    }
}

/// The `n` highest normalized scores, ties kept in node order
pub fn top_records(records: &[ScoreRecord], n: usize) -> Vec<&ScoreRecord> {
    let mut ranked: Vec<&ScoreRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.norm_score.total_cmp(&a.norm_score));
    ranked.truncate(n);
    ranked
}
