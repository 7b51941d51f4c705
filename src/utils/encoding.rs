//! File reading with UTF-8 fast path and detected-encoding fallback.
//!
//! Source files are usually UTF-8; everything else goes through BOM
//! detection and chardetng, decoded with replacement characters so a stray
//! legacy-encoded file never aborts a report.

use anyhow::{Context, Result};
use chardetng::EncodingDetector;
use encoding_rs::{UTF_16BE, UTF_16LE};
use std::path::Path;

/// Read a source file as text.
///
/// Order of attempts: UTF-16 BOM, strict UTF-8, chardetng guess. The
/// fallback decodes take whatever the detected encoding produces, replacing
/// invalid sequences. A UTF-8 BOM is stripped.
pub fn read_file_safe(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read file: {}", path.display()))?;

    if bytes.starts_with(&[0xff, 0xfe]) {
        let (decoded, _, _) = UTF_16LE.decode(&bytes);
        return Ok(decoded.into_owned());
    }
    if bytes.starts_with(&[0xfe, 0xff]) {
        let (decoded, _, _) = UTF_16BE.decode(&bytes);
        return Ok(decoded.into_owned());
    }

    match String::from_utf8(bytes) {
        Ok(content) => Ok(strip_utf8_bom(content)),
        Err(err) => {
            let bytes = err.into_bytes();
            let mut detector = EncodingDetector::new();
            detector.feed(&bytes, true);
            let encoding = detector.guess(None, true);
            let (decoded, _, _) = encoding.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

fn strip_utf8_bom(content: String) -> String {
    match content.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_plain_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("print('héllo')".as_bytes()).unwrap();
        file.flush().unwrap();

        let content = read_file_safe(file.path()).unwrap();
        assert_eq!(content, "print('héllo')");
    }

    #[test]
    fn strips_utf8_bom() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xef, 0xbb, 0xbf]).unwrap();
        file.write_all("import os".as_bytes()).unwrap();
        file.flush().unwrap();

        let content = read_file_safe(file.path()).unwrap();
        assert_eq!(content, "import os");
    }

    #[test]
    fn decodes_utf16_le_bom() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe]).unwrap();
        for unit in "x = 1".encode_utf16() {
            file.write_all(&unit.to_le_bytes()).unwrap();
        }
        file.flush().unwrap();

        let content = read_file_safe(file.path()).unwrap();
        assert_eq!(content, "x = 1");
    }

    #[test]
    fn recovers_non_utf8_with_replacement() {
        let mut file = NamedTempFile::new().unwrap();
        // Latin-1 "café"
        file.write_all(&[b'c', b'a', b'f', 0xe9]).unwrap();
        file.flush().unwrap();

        let content = read_file_safe(file.path()).unwrap();
        assert!(content.starts_with("caf"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_file_safe(Path::new("/nonexistent/file.py")).unwrap_err();
        assert!(err.to_string().contains("failed to read file"));
    }
}
