//! CSV export writer.
//!
//! Two modes per entity type:
//! - append: one row at a time into a standing `<stem>.csv`, header written once
//! - dump: a whole table into a fresh `<stem>_<timestamp>.csv`

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::NaiveDateTime;
use csv::WriterBuilder;
use log::{debug, error, info};

use crate::constants::EXPORT_TIMESTAMP_FORMAT;
use crate::errors::{Error, Result};

/// A row type that can be written by [`ExportWriter`].
pub trait ExportRow {
    /// File name stem, e.g. `bmi_records`.
    const STEM: &'static str;
    /// Column names, in the order returned by [`ExportRow::fields`].
    const HEADERS: &'static [&'static str];

    fn fields(&self) -> Result<Vec<String>>;
}

/// Formats a timestamp for a full export file name.
pub fn export_timestamp(at: NaiveDateTime) -> String {
    at.format(EXPORT_TIMESTAMP_FORMAT).to_string()
}

/// Writes CSV snapshots under a single export directory.
#[derive(Debug, Clone)]
pub struct ExportWriter {
    export_dir: PathBuf,
    // Held across the header check and the append of a standing file.
    append_lock: Arc<Mutex<()>>,
}

impl ExportWriter {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        ExportWriter {
            export_dir: export_dir.into(),
            append_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Path of the standing append log for `R`.
    pub fn standing_path<R: ExportRow>(&self) -> PathBuf {
        self.export_dir.join(format!("{}.csv", R::STEM))
    }

    /// Path of a timestamped full dump for `R`.
    pub fn snapshot_path<R: ExportRow>(&self, stamp: &str) -> PathBuf {
        self.export_dir.join(format!("{}_{}.csv", R::STEM, stamp))
    }

    /// Appends one row to the standing file, creating it with a header row if
    /// it does not exist yet or is empty.
    pub fn append<R: ExportRow>(&self, row: &R) -> Result<PathBuf> {
        let _guard = self
            .append_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        fs::create_dir_all(&self.export_dir)?;
        let path = self.standing_path::<R>();
        let needs_header = fs::metadata(&path)
            .map(|meta| meta.len() == 0)
            .unwrap_or(true);

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if needs_header {
            writer.write_record(R::HEADERS)?;
        }
        writer.write_record(row.fields()?)?;
        writer.flush()?;

        debug!("Appended {} row to {}", R::STEM, path.display());
        Ok(path)
    }

    /// Writes every row into a new timestamped file.
    pub fn dump<R: ExportRow>(&self, rows: &[R], stamp: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.export_dir)?;
        let path = self.snapshot_path::<R>(stamp);

        let mut writer = WriterBuilder::new().has_headers(false).from_path(&path)?;
        writer.write_record(R::HEADERS)?;
        for row in rows {
            writer.write_record(row.fields()?)?;
        }
        writer.flush()?;

        info!("Exported {} {} to {}", rows.len(), R::STEM, path.display());
        Ok(path)
    }
}

/// Appends `row` when append-mode exporting is configured.
///
/// The file write runs on the blocking thread pool.
pub async fn append_row<R>(writer: Option<&Arc<ExportWriter>>, row: &R) -> Result<()>
where
    R: ExportRow + Clone + Send + 'static,
{
    let Some(writer) = writer.cloned() else {
        return Ok(());
    };
    let row = row.clone();
    let appended = tokio::task::spawn_blocking(move || writer.append(&row))
        .await
        .map_err(|e| Error::Unexpected(format!("Export task failed: {e}")))?;
    appended.map(|_| ()).map_err(|e| {
        error!("Failed to append {} export row: {}", R::STEM, e);
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::Barrier;
    use std::thread;
    use tempfile::tempdir;

    #[derive(Clone)]
    struct Sample {
        id: i32,
        note: &'static str,
    }

    impl ExportRow for Sample {
        const STEM: &'static str = "samples";
        const HEADERS: &'static [&'static str] = &["id", "note"];

        fn fields(&self) -> Result<Vec<String>> {
            Ok(vec![self.id.to_string(), self.note.to_string()])
        }
    }

    #[test]
    fn test_append_writes_header_once() {
        let dir = tempdir().unwrap();
        let writer = ExportWriter::new(dir.path().join("exports"));

        let path = writer.append(&Sample { id: 1, note: "first" }).unwrap();
        writer.append(&Sample { id: 2, note: "second, with comma" }).unwrap();

        assert_eq!(path, dir.path().join("exports").join("samples.csv"));
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "id,note\n1,first\n2,\"second, with comma\"\n"
        );
    }

    #[test]
    fn test_concurrent_first_appends_write_one_header() {
        for _ in 0..20 {
            let dir = tempdir().unwrap();
            let writer = Arc::new(ExportWriter::new(dir.path()));
            let start = Arc::new(Barrier::new(8));

            let handles: Vec<_> = (0..8)
                .map(|id| {
                    let writer = writer.clone();
                    let start = start.clone();
                    thread::spawn(move || {
                        start.wait();
                        writer.append(&Sample { id, note: "x" }).unwrap();
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }

            let content = fs::read_to_string(writer.standing_path::<Sample>()).unwrap();
            assert_eq!(content.lines().filter(|l| *l == "id,note").count(), 1);
            assert_eq!(content.lines().count(), 9);
        }
    }

    #[tokio::test]
    async fn test_append_row_without_writer_is_noop() {
        append_row::<Sample>(None, &Sample { id: 1, note: "a" })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_append_row_writes_on_blocking_pool() {
        let dir = tempdir().unwrap();
        let writer = Arc::new(ExportWriter::new(dir.path()));

        append_row(Some(&writer), &Sample { id: 3, note: "c" })
            .await
            .unwrap();

        let content = fs::read_to_string(writer.standing_path::<Sample>()).unwrap();
        assert_eq!(content, "id,note\n3,c\n");
    }

    #[test]
    fn test_append_adds_header_to_empty_existing_file() {
        let dir = tempdir().unwrap();
        let writer = ExportWriter::new(dir.path());
        fs::write(writer.standing_path::<Sample>(), "").unwrap();

        writer.append(&Sample { id: 9, note: "x" }).unwrap();

        let content = fs::read_to_string(writer.standing_path::<Sample>()).unwrap();
        assert_eq!(content, "id,note\n9,x\n");
    }

    #[test]
    fn test_dump_writes_timestamped_file() {
        let dir = tempdir().unwrap();
        let writer = ExportWriter::new(dir.path());
        let stamp = export_timestamp(
            NaiveDate::from_ymd_opt(2025, 3, 4)
                .unwrap()
                .and_hms_opt(5, 6, 7)
                .unwrap(),
        );
        assert_eq!(stamp, "20250304_050607");

        let rows = vec![Sample { id: 1, note: "a" }, Sample { id: 2, note: "b" }];
        let path = writer.dump(&rows, &stamp).unwrap();

        assert_eq!(path.file_name().unwrap(), "samples_20250304_050607.csv");
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "id,note\n1,a\n2,b\n");
    }

    #[test]
    fn test_dump_of_empty_table_has_only_header() {
        let dir = tempdir().unwrap();
        let writer = ExportWriter::new(dir.path());
        let rows: Vec<Sample> = Vec::new();

        let path = writer.dump(&rows, "20250101_000000").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "id,note\n");
    }

    #[test]
    fn test_append_reports_io_failure() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "file").unwrap();
        let writer = ExportWriter::new(&blocker);

        let err = writer.append(&Sample { id: 1, note: "a" }).unwrap_err();
        assert!(matches!(err, crate::errors::Error::Export(_)));
    }
}
