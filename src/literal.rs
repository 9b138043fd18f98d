use regex_syntax::hir::literal::{ExtractKind, Extractor};
use regex_syntax::parse;

/// Upper bound on literals per pattern; past this the prefilter stops paying
/// for itself and the entry is cheaper to always try.
const MAX_LITERALS: usize = 16;

/// Extract prefix literals from a regex pattern, for use as Aho-Corasick
/// prefilter needles. Returns lowercased literals of at least `min_len`
/// bytes, or an empty vec when no usable set exists — the caller must then
/// treat the entry as an "always candidate" and try it on every input.
///
/// Patterns regex_syntax cannot parse (lookaround and other PCRE-isms) also
/// yield an empty vec.
pub(crate) fn prefix_literals(pattern: &str, min_len: usize) -> Vec<String> {
    let hir = match parse(pattern) {
        Ok(h) => h,
        Err(_) => return Vec::new(),
    };

    let mut extractor = Extractor::new();
    extractor.kind(ExtractKind::Prefix);
    let seq = extractor.extract(&hir);

    // An inexact or unbounded sequence means the literals don't cover every
    // way the pattern can match; still usable as a prefilter only if every
    // branch produced something.
    let Some(literals) = seq.literals() else {
        return Vec::new();
    };

    let needles: Vec<String> = literals
        .iter()
        .filter_map(|lit| {
            let s = std::str::from_utf8(lit.as_bytes()).ok()?;
            (s.len() >= min_len).then(|| s.to_lowercase())
        })
        .collect();

    if needles.len() != literals.len() || needles.len() > MAX_LITERALS {
        return Vec::new();
    }
    needles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_token() {
        assert_eq!(prefix_literals("Firefox/", 3), vec!["firefox/"]);
    }

    #[test]
    fn alternation_keeps_every_branch() {
        let lits = prefix_literals("iPhone|iPod", 3);
        assert!(lits.contains(&"iphone".to_string()));
        assert!(lits.contains(&"ipod".to_string()));
    }

    #[test]
    fn short_branch_disables_the_set() {
        // "X11" passes min_len but a 2-byte branch would not cover the
        // pattern, so the whole set is rejected.
        assert!(prefix_literals("X11|NT", 3).is_empty());
    }

    #[test]
    fn unparseable_pattern_yields_empty() {
        assert!(prefix_literals(r"Android(?!.*Mobile)", 3).is_empty());
    }
}
