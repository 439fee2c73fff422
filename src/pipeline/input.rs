//! Input validation: read a local PDF file into memory.
//!
//! The host hands the pipeline raw bytes; this stage exists for the
//! callers that start from a path instead (the CLI, file-watcher
//! hosts). We validate the PDF magic bytes (`%PDF`) before submitting
//! so callers get a meaningful local error rather than a round-trip to
//! the service that ends in a 415.

use crate::error::ExtractError;
use std::path::Path;
use tracing::debug;

/// Magic prefix every PDF file starts with.
const PDF_MAGIC: &[u8; 4] = b"%PDF";

/// Read a local PDF file, validating existence, readability, and the
/// `%PDF` magic bytes.
pub fn read_pdf(path: impl AsRef<Path>) -> Result<Vec<u8>, ExtractError> {
    let path = path.as_ref();

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(ExtractError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Err(_) => {
            return Err(ExtractError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
    };

    if bytes.len() < PDF_MAGIC.len() || &bytes[..PDF_MAGIC.len()] != PDF_MAGIC {
        let mut magic = [0u8; 4];
        let n = bytes.len().min(4);
        magic[..n].copy_from_slice(&bytes[..n]);
        return Err(ExtractError::NotAPdf {
            path: path.to_path_buf(),
            magic,
        });
    }

    debug!("Read local PDF: {} ({} bytes)", path.display(), bytes.len());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_reported() {
        let result = read_pdf("/definitely/not/a/real/file.pdf");
        assert!(matches!(result, Err(ExtractError::FileNotFound { .. })));
    }

    #[test]
    fn non_pdf_magic_is_rejected() {
        let mut tmp = tempfile::NamedTempFile::new().expect("tempfile");
        tmp.write_all(b"PK\x03\x04not a pdf").expect("write");

        let result = read_pdf(tmp.path());
        assert!(matches!(
            result,
            Err(ExtractError::NotAPdf { magic, .. }) if &magic == b"PK\x03\x04"
        ));
    }

    #[test]
    fn truncated_file_is_rejected() {
        let mut tmp = tempfile::NamedTempFile::new().expect("tempfile");
        tmp.write_all(b"%P").expect("write");

        assert!(matches!(read_pdf(tmp.path()), Err(ExtractError::NotAPdf { .. })));
    }

    #[test]
    fn valid_pdf_bytes_are_returned() {
        let mut tmp = tempfile::NamedTempFile::new().expect("tempfile");
        tmp.write_all(b"%PDF-1.7 minimal").expect("write");

        let bytes = read_pdf(tmp.path()).expect("valid PDF must be read");
        assert!(bytes.starts_with(b"%PDF"));
    }
}
