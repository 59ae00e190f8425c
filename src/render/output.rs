//! Writing the record files.

use super::json::{to_json_array, to_jsonl};
use crate::error::Result;
use crate::model::UserRecord;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Paths of the two files written for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Pretty-printed JSON array
    pub json: PathBuf,
    /// JSON Lines companion
    pub jsonl: PathBuf,
}

/// Path of the JSON Lines file that accompanies a JSON array file.
///
/// A trailing `.json` becomes `.jsonl`; any other path gets `.jsonl` appended.
pub fn jsonl_path_for(path: &Path) -> PathBuf {
    let mut raw = path.as_os_str().to_os_string();
    if path.to_string_lossy().ends_with(".json") {
        raw.push("l");
    } else {
        raw.push(".jsonl");
    }
    PathBuf::from(raw)
}

/// Stage `contents` in a temporary file next to `target`.
fn stage(target: &Path, contents: &str) -> Result<NamedTempFile> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.as_file().sync_all()?;
    Ok(file)
}

/// Write `records` to `path` as a JSON array and beside it as JSON Lines.
///
/// Both documents are rendered and staged before either target is touched.
/// When placing the second file fails the first one is removed again, so a
/// failed call leaves neither output behind.
pub fn write_outputs(path: impl AsRef<Path>, records: &[UserRecord]) -> Result<OutputPaths> {
    let json_path = path.as_ref().to_path_buf();
    let jsonl_path = jsonl_path_for(&json_path);

    let array = to_json_array(records)?;
    let lines = to_jsonl(records)?;

    let staged_json = stage(&json_path, &array)?;
    let staged_jsonl = stage(&jsonl_path, &lines)?;

    staged_json.persist(&json_path).map_err(|e| e.error)?;
    if let Err(e) = staged_jsonl.persist(&jsonl_path) {
        tracing::warn!(json = %json_path.display(), "removing JSON output after JSONL write failed");
        let _ = fs::remove_file(&json_path);
        return Err(e.error.into());
    }
    tracing::debug!(json = %json_path.display(), jsonl = %jsonl_path.display(), records = records.len(), "wrote outputs");

    Ok(OutputPaths {
        json: json_path,
        jsonl: jsonl_path,
    })
}
