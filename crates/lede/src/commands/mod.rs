//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};

pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod stats;
pub mod summarize;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read all of `reader` as UTF-8, failing once more than `max_bytes` arrive.
pub fn read_bounded<R: Read>(reader: R, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let limit = max_bytes.map_or(u64::MAX, |max| (max as u64).saturating_add(1));
    let mut bytes = Vec::new();
    reader
        .take(limit)
        .read_to_end(&mut bytes)
        .context("failed to read standard input")?;
    if let Some(max) = max_bytes
        && bytes.len() > max
    {
        anyhow::bail!("input too large: standard input exceeds {max} bytes");
    }
    String::from_utf8(bytes).context("standard input is not valid UTF-8")
}

/// Input named on the command line: a file, or stdin for `-` or nothing.
///
/// Markdown files (`.md`) are reduced to prose.
pub fn read_document(file: Option<&Utf8Path>, max_bytes: Option<usize>) -> anyhow::Result<String> {
    match file {
        Some(path) if path.as_str() != "-" => {
            let content = read_input_file(path, max_bytes)?;
            if path.extension() == Some("md") {
                Ok(lede_core::markdown::to_prose(&content))
            } else {
                Ok(content)
            }
        }
        _ => read_bounded(std::io::stdin().lock(), max_bytes),
    }
}

/// Display name for an optional input path.
pub fn input_label(file: Option<&Utf8PathBuf>) -> &str {
    match file {
        Some(path) if path.as_str() != "-" => path.as_str(),
        _ => "<stdin>",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_read_within_limit() {
        let text = read_bounded("hello world".as_bytes(), Some(11)).unwrap();
        assert_eq!(text, "hello world");
    }

    #[test]
    fn bounded_read_over_limit() {
        let err = read_bounded("hello world".as_bytes(), Some(5)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn bounded_read_unlimited() {
        assert_eq!(read_bounded("abc".as_bytes(), None).unwrap(), "abc");
    }

    #[test]
    fn bounded_read_with_largest_limit() {
        assert_eq!(read_bounded("abc".as_bytes(), Some(usize::MAX)).unwrap(), "abc");
    }

    #[test]
    fn file_over_limit_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("big.txt")).unwrap();
        std::fs::write(&path, "x".repeat(64)).unwrap();
        let err = read_input_file(&path, Some(10)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn markdown_file_becomes_prose() {
        let tmp = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("doc.md")).unwrap();
        std::fs::write(&path, "# Heading\n\nBody *text* here.\n").unwrap();
        let text = read_document(Some(&path), None).unwrap();
        assert_eq!(text, "Body text here.");
    }

    #[test]
    fn stdin_label() {
        assert_eq!(input_label(None), "<stdin>");
        let dash = Utf8PathBuf::from("-");
        assert_eq!(input_label(Some(&dash)), "<stdin>");
    }
}
