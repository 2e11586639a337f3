use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// File name prefix for saved receipts.
pub const RECEIPT_PREFIX: &str = "ElectricityBill_";

/// File name extension for saved receipts.
pub const RECEIPT_EXT: &str = "txt";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("customer id {0:?} cannot be used as a file name")]
    InvalidFileName(String),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Receipt file name for a customer id: `ElectricityBill_<id>.txt`.
pub fn receipt_file_name(customer_id: &str) -> String {
    format!("{RECEIPT_PREFIX}{customer_id}.{RECEIPT_EXT}")
}

/// Resolve the receipt path for `customer_id` inside `out_dir`.
///
/// The id is used verbatim, but it must stay a single path component:
/// separators, NUL, and the `.`/`..` names are rejected so a receipt can
/// never land outside `out_dir`.
pub fn receipt_path(out_dir: &Path, customer_id: &str) -> Result<PathBuf, StoreError> {
    let bad = customer_id.is_empty()
        || customer_id == "."
        || customer_id == ".."
        || customer_id.contains(['/', '\\', '\0']);
    if bad {
        return Err(StoreError::InvalidFileName(customer_id.to_string()));
    }
    Ok(out_dir.join(receipt_file_name(customer_id)))
}

/// Atomic write: write to temp file in same dir, then rename.
///
/// The destination is overwritten if it exists. On failure the temp file is
/// removed when it drops and any previous destination content is untouched.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<(), StoreError> {
    let wrap = |source: io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(wrap)?;
    tmp.write_all(data).map_err(wrap)?;
    tmp.flush().map_err(wrap)?;
    tmp.persist(path).map_err(|e| wrap(e.error))?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "receipt written");
    Ok(())
}

/// Write a receipt for `customer_id` into `out_dir` and return its path.
pub fn save_receipt(out_dir: &Path, customer_id: &str, text: &str) -> Result<PathBuf, StoreError> {
    let path = receipt_path(out_dir, customer_id)?;
    write_atomic(&path, text.as_bytes())?;
    Ok(path)
}
