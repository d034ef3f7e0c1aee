//! File I/O utilities with atomic writes
//!
//! Provides safe CSV file operations that won't corrupt data on failure.
//! A missing file is never an error here: readers get `None` and decide what
//! absence means for them.

use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::SplitError;

/// Read every row of a headed CSV file, or `None` if the file doesn't exist
pub fn read_csv<T, P>(path: P) -> Result<Option<Vec<T>>, SplitError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "file absent, treating as empty");
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| SplitError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for (index, result) in reader.deserialize().enumerate() {
        let row: T = result.map_err(|e| {
            SplitError::Storage(format!(
                "Failed to parse {} at row {}: {}",
                path.display(),
                index + 1,
                e
            ))
        })?;
        rows.push(row);
    }

    Ok(Some(rows))
}

/// Write a headed CSV file atomically (write to temp, then rename)
///
/// The header row is always written, even when `rows` is empty. The file is
/// either completely written or not modified at all.
pub fn write_csv_atomic<T, P>(path: P, headers: &[&str], rows: &[T]) -> Result<(), SplitError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SplitError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory so the rename stays atomic
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| SplitError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    writer
        .write_record(headers)
        .map_err(|e| SplitError::Storage(format!("Failed to write header: {}", e)))?;

    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| SplitError::Storage(format!("Failed to serialize row: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| SplitError::Storage(format!("Failed to flush data: {}", e)))?;

    let file = writer
        .into_inner()
        .map_err(|e| SplitError::Storage(format!("Failed to finish writing: {}", e)))?;
    file.sync_all()
        .map_err(|e| SplitError::Storage(format!("Failed to sync data: {}", e)))?;
    drop(file);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SplitError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Write raw bytes to `path` atomically (write to temp, then rename)
pub fn write_bytes_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), SplitError> {
    let path = path.as_ref();

    let mut temp_name = path.as_os_str().to_os_string();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    let mut file = File::create(&temp_path).map_err(|e| {
        SplitError::Storage(format!(
            "Failed to create temp file {}: {}",
            temp_path.display(),
            e
        ))
    })?;
    file.write_all(bytes)
        .and_then(|_| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SplitError::Storage(format!("Failed to write {}: {}", temp_path.display(), e))
        })?;
    drop(file);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SplitError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Append one line to a file, creating it if needed
pub(crate) fn append_line<P: AsRef<Path>>(path: P, line: &str) -> Result<(), SplitError> {
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;
    writeln!(file, "{}", line)?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        #[serde(rename = "Name")]
        name: String,
        #[serde(rename = "Value")]
        value: i32,
    }

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.csv");

        let rows: Option<Vec<Row>> = read_csv(&path).unwrap();
        assert!(rows.is_none());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        let rows = vec![
            Row {
                name: "a".into(),
                value: 1,
            },
            Row {
                name: "b, with comma".into(),
                value: 2,
            },
        ];

        write_csv_atomic(&path, &["Name", "Value"], &rows).unwrap();
        let loaded: Vec<Row> = read_csv(&path).unwrap().unwrap();
        assert_eq!(loaded, rows);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Name,Value\n"));
    }

    #[test]
    fn test_empty_write_keeps_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.csv");

        write_csv_atomic::<Row, _>(&path, &["Name", "Value"], &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "Name,Value\n");

        let loaded: Vec<Row> = read_csv(&path).unwrap().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        write_csv_atomic::<Row, _>(&path, &["Name", "Value"], &[]).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("test.csv.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.csv");

        write_csv_atomic::<Row, _>(&path, &["Name", "Value"], &[]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_malformed_row_reports_position() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.csv");
        fs::write(&path, "Name,Value\na,1\nb,not-a-number\n").unwrap();

        let err = read_csv::<Row, _>(&path).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_write_bytes_atomic_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("export.json");
        fs::write(&path, "old").unwrap();

        write_bytes_atomic(&path, b"{}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert!(!temp_dir.path().join("export.json.tmp").exists());
    }

    #[test]
    fn test_write_bytes_atomic_missing_parent_fails_cleanly() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("export.json");

        assert!(write_bytes_atomic(&path, b"{}").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_append_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.txt");
        append_line(&path, "one").unwrap();
        append_line(&path, "two").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }
}
