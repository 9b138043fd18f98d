use std::borrow::Cow;

/// Replace `$1`, `$2`, ... in `template` with capture groups from the regex
/// match, then trim trailing whitespace and dots.
///
/// Returns borrowed data when the template contains no `$N` placeholders.
pub(crate) fn substitute<'a>(template: &'a str, captures: &fancy_regex::Captures) -> Cow<'a, str> {
    if !template.contains('$') {
        return Cow::Borrowed(template.trim_end_matches(|c: char| c.is_whitespace() || c == '.'));
    }

    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '$' {
            if let Some(&d) = chars.peek() {
                if d.is_ascii_digit() {
                    chars.next();
                    let idx = (d as u8 - b'0') as usize;
                    if let Some(m) = captures.get(idx) {
                        result.push_str(m.as_str());
                    }
                    continue;
                }
            }
        }
        result.push(c);
    }

    let trimmed_len = result
        .trim_end_matches(|c: char| c.is_whitespace() || c == '.')
        .len();
    result.truncate(trimmed_len);
    Cow::Owned(result)
}

/// Get capture group `i` as a string, or `""` if it didn't participate.
pub(crate) fn capture_or_empty(captures: &fancy_regex::Captures, i: usize) -> String {
    captures.get(i).map(|m| m.as_str()).unwrap_or("").to_string()
}

/// Canonicalize a version string captured from a UA: iOS-style underscores
/// become dots ("16_6" → "16.6"), trailing dots are dropped.
pub(crate) fn normalize_version(raw: &str) -> String {
    raw.replace('_', ".").trim_end_matches('.').to_string()
}
