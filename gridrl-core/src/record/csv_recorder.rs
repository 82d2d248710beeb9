use super::{Record, RecordValue, Recorder};
use anyhow::Result;
use log::warn;
use std::{fs::File, path::Path};

/// Write records to a CSV file.
///
/// The column layout is taken from the first written record: the step key
/// (`"episode"` by default) comes first, the remaining keys follow in sorted
/// order. Later records missing a column produce an empty cell.
pub struct CsvRecorder {
    wtr: csv::Writer<File>,
    step_key: String,
    columns: Option<Vec<String>>,
}

impl CsvRecorder {
    /// Construct a [`CsvRecorder`] writing to the file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            wtr: csv::Writer::from_path(path)?,
            step_key: "episode".to_string(),
            columns: None,
        })
    }

    /// Construct a [`CsvRecorder`] with a custom step key.
    pub fn with_step_key<P: AsRef<Path>>(path: P, step_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            wtr: csv::Writer::from_path(path)?,
            step_key: step_key.into(),
            columns: None,
        })
    }

    fn cell(&self, record: &Record, column: &str) -> String {
        match record.get(column) {
            Some(RecordValue::Scalar(v)) => v.to_string(),
            Some(RecordValue::String(s)) => s.clone(),
            Some(RecordValue::DateTime(t)) => t.to_rfc3339(),
            None => String::new(),
        }
    }
}

impl Recorder for CsvRecorder {
    /// Write a given [`Record`] as a CSV row.
    fn write(&mut self, record: Record) {
        if self.columns.is_none() {
            let mut columns = record
                .keys()
                .filter(|k| k.as_str() != self.step_key)
                .cloned()
                .collect::<Vec<_>>();
            columns.sort();
            columns.insert(0, self.step_key.clone());
            if let Err(e) = self.wtr.write_record(&columns) {
                warn!("Failed to write CSV header: {}", e);
            }
            self.columns = Some(columns);
        }

        if let Some(columns) = &self.columns {
            let row = columns
                .iter()
                .map(|c| self.cell(&record, c))
                .collect::<Vec<_>>();
            if let Err(e) = self.wtr.write_record(&row) {
                warn!("Failed to write CSV row: {}", e);
            }
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.wtr.flush() {
            warn!("Failed to flush CSV writer: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn writes_header_and_rows() -> Result<()> {
        let dir = TempDir::new("csv_recorder")?;
        let path = dir.path().join("curve.csv");

        let mut recorder = CsvRecorder::new(&path)?;
        for i in 0..3 {
            let mut record = Record::from_scalar("episode", i as f32);
            record.insert("inv_moves", RecordValue::Scalar(1.0 / (i + 1) as f32));
            recorder.write(record);
        }
        recorder.flush();

        let contents = std::fs::read_to_string(&path)?;
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("episode,inv_moves"));
        assert_eq!(lines.next(), Some("0,1"));
        assert_eq!(contents.lines().count(), 4);
        Ok(())
    }

    #[test]
    fn custom_step_key_leads_the_columns() -> Result<()> {
        let dir = TempDir::new("csv_recorder")?;
        let path = dir.path().join("eval.csv");

        let mut recorder = CsvRecorder::with_step_key(&path, "rollout")?;
        let mut record = Record::from_scalar("rollout", 0.0);
        record.insert("eval_moves", RecordValue::Scalar(98.0));
        recorder.write(record);
        recorder.flush();

        let contents = std::fs::read_to_string(&path)?;
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("rollout,eval_moves"));
        assert_eq!(lines.next(), Some("0,98"));
        Ok(())
    }
}
