//! Prefix/suffix delimited URL extraction

/// Extract every substring of `text` that starts with `prefix` and runs
/// through the nearest following `suffix`.
///
/// Scanning goes left to right from a cursor:
/// - find the next `prefix` at or after the cursor, at `start`;
/// - find the next `suffix` at or after `start` (it may overlap the prefix);
/// - with no suffix, move the cursor one character past `start`;
/// - otherwise emit `text[start..suffix_end]` and move the cursor one
///   character past the suffix's first character.
///
/// A later prefix that falls inside an emitted span is therefore skipped,
/// while matches may still share characters with the span before them.
/// Empty markers yield no matches.
pub fn extract_urls<'a>(text: &'a str, prefix: &str, suffix: &str) -> Vec<&'a str> {
    let mut urls = Vec::new();
    if prefix.is_empty() || suffix.is_empty() {
        return urls;
    }

    let mut cursor = 0;
    while let Some(rest) = text.get(cursor..) {
        let Some(offset) = rest.find(prefix) else {
            break;
        };
        let start = cursor + offset;

        match text[start..].find(suffix) {
            None => cursor = start + char_len_at(text, start),
            Some(offset) => {
                let suffix_start = start + offset;
                urls.push(&text[start..suffix_start + suffix.len()]);
                cursor = suffix_start + char_len_at(text, suffix_start);
            }
        }
    }

    urls
}

/// Byte length of the character starting at `idx`
fn char_len_at(text: &str, idx: usize) -> usize {
    text[idx..].chars().next().map_or(1, char::len_utf8)
}
