//! Text decoding with a Latin-1 fallback

use std::borrow::Cow;
use std::path::Path;

/// Decode `bytes` as UTF-8, falling back to Latin-1
///
/// Returns `None` for empty input so callers can skip the file.
pub fn decode_text(bytes: &[u8]) -> Option<Cow<'_, str>> {
    if bytes.is_empty() {
        return None;
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => Some(Cow::Borrowed(text)),
        Err(_) => Some(Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect())),
    }
}

/// Read a file as text, or `None` if it cannot be read or is empty
pub fn read_text_file(path: &Path) -> Option<String> {
    let bytes = std::fs::read(path).ok()?;
    decode_text(&bytes).map(Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_is_borrowed() {
        let decoded = decode_text("naïve".as_bytes()).unwrap();
        assert!(matches!(decoded, Cow::Borrowed("naïve")));
    }

    #[test]
    fn test_invalid_utf8_falls_back_to_latin1() {
        // "café" in Latin-1
        let decoded = decode_text(&[0x63, 0x61, 0x66, 0xE9]).unwrap();
        assert_eq!(decoded, "café");
    }

    #[test]
    fn test_empty_is_skipped() {
        assert!(decode_text(&[]).is_none());
    }

    #[test]
    fn test_read_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.md");
        std::fs::write(&good, "hello").unwrap();
        let empty = dir.path().join("empty.md");
        std::fs::write(&empty, "").unwrap();

        assert_eq!(read_text_file(&good).as_deref(), Some("hello"));
        assert_eq!(read_text_file(&empty), None);
        assert_eq!(read_text_file(&dir.path().join("missing.md")), None);
        assert_eq!(read_text_file(dir.path()), None);
    }
}
