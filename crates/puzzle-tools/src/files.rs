//! JSON file helpers.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::ToolError;

/// Read a candidates file: a JSON array of loosely-typed puzzle objects.
/// Entries stay as raw values so one bad entry can't sink the whole file.
pub fn read_puzzle_array(path: &Path) -> Result<Vec<Value>, ToolError> {
    if !path.exists() {
        return Err(ToolError::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let value: Value = serde_json::from_reader(BufReader::new(file))?;
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(ToolError::NotAnArray(path.to_path_buf())),
    }
}

/// Pretty-print `value` to `path`, creating parent directories.
///
/// The JSON goes to a sibling temp file first and is renamed into place, so
/// `path` is either untouched or complete.
pub fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ToolError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp = path.with_extension("json.tmp");
    let written = File::create(&tmp)
        .map_err(ToolError::from)
        .and_then(|file| {
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
            Ok(())
        });

    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_creates_dirs_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output").join("level_0001_candidates.json");
        let data = json!([{"id": "puzzle_a", "fen": "8/8/8/8/8/8/8/8 w - - 0 1"}]);

        write_json_pretty(&path, &data).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n  {"));
        assert!(!path.with_extension("json.tmp").exists());

        let items = read_puzzle_array(&path).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], "puzzle_a");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_puzzle_array(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ToolError::FileNotFound(_)));
    }

    #[test]
    fn test_read_rejects_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("set.json");
        fs::write(&path, r#"{"levelId": "0001"}"#).unwrap();
        assert!(matches!(
            read_puzzle_array(&path).unwrap_err(),
            ToolError::NotAnArray(_)
        ));
    }

    #[test]
    fn test_read_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "[{").unwrap();
        assert!(matches!(read_puzzle_array(&path).unwrap_err(), ToolError::Json(_)));
    }
}
