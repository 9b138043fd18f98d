use aho_corasick::{AhoCorasick, AhoCorasickKind, MatchKind};
use rayon::prelude::*;

use crate::error::Result;
use crate::literal::prefix_literals;

/// Word-boundary-like prefix applied to every rule regex: start of string or
/// a non-alphanumeric boundary. Keeps "OS" from matching inside "macOS" etc.
const BOUNDARY_PREFIX: &str = r"(?:^|[^A-Z0-9_\-])";

/// Minimum needle length worth handing to the prefilter.
const MIN_LITERAL_LEN: usize = 3;

/// Build the boundary-prefixed, case-insensitive form of a rule pattern.
pub(crate) fn full_pattern(pattern: &str) -> String {
    format!("(?i){}(?:{})", BOUNDARY_PREFIX, pattern)
}

/// Compile one rule regex with the boundary prefix and case-insensitive flag.
pub(crate) fn compile_rule(pattern: &str) -> Result<fancy_regex::Regex> {
    Ok(fancy_regex::Regex::new(&full_pattern(pattern))?)
}

struct Entry<T> {
    regex: fancy_regex::Regex,
    data: T,
}

/// Result of a successful match: the entry's data plus the regex captures,
/// for `$N` template substitution.
pub(crate) struct MatchResult<'a, T> {
    pub data: &'a T,
    pub captures: fancy_regex::Captures<'a>,
}

/// Ordered first-match-wins rule list with an Aho-Corasick prefilter.
///
/// Literal needles extracted from each pattern gate which regexes run; an
/// entry with no extractable literals is tried on every input. Entry order
/// is match priority, so candidates are checked in ascending index.
pub(crate) struct CompiledParser<T> {
    prefilter: AhoCorasick,
    /// Maps needle (pattern) id → entry index.
    needle_to_entry: Vec<usize>,
    /// Entries with no usable needle, ascending.
    always: Vec<usize>,
    entries: Vec<Entry<T>>,
}

impl<T> CompiledParser<T> {
    /// Build from `(regex_pattern, data)` pairs; iteration order becomes
    /// match priority. Regex compilation runs in parallel.
    pub fn build(items: impl IntoIterator<Item = (String, T)>) -> Result<Self>
    where
        T: Send,
    {
        let (patterns, data): (Vec<String>, Vec<T>) = items.into_iter().unzip();

        let regexes: Vec<fancy_regex::Regex> = patterns
            .par_iter()
            .map(|p| compile_rule(p))
            .collect::<Result<Vec<_>>>()?;

        let mut needles: Vec<String> = Vec::new();
        let mut needle_to_entry: Vec<usize> = Vec::new();
        let mut always: Vec<usize> = Vec::new();

        for (idx, pattern) in patterns.iter().enumerate() {
            let literals = prefix_literals(pattern, MIN_LITERAL_LEN);
            if literals.is_empty() {
                always.push(idx);
            } else {
                for lit in literals {
                    needles.push(lit);
                    needle_to_entry.push(idx);
                }
            }
        }

        let prefilter = AhoCorasick::builder()
            .kind(Some(AhoCorasickKind::DFA))
            .match_kind(MatchKind::Standard)
            .build(&needles)?;

        let entries = regexes
            .into_iter()
            .zip(data)
            .map(|(regex, data)| Entry { regex, data })
            .collect();

        Ok(Self {
            prefilter,
            needle_to_entry,
            always,
            entries,
        })
    }

    /// Find the first matching entry in priority order.
    pub fn match_first<'a>(&'a self, ua: &'a str) -> Option<MatchResult<'a, T>> {
        // Candidate set: always-checked entries plus prefilter hits.
        let ua_lower = ua.to_lowercase();
        let mut candidates: Vec<usize> = self.always.clone();
        for m in self.prefilter.find_overlapping_iter(&ua_lower) {
            candidates.push(self.needle_to_entry[m.pattern().as_usize()]);
        }
        candidates.sort_unstable();
        candidates.dedup();

        for idx in candidates {
            let entry = &self.entries[idx];
            if let Ok(Some(captures)) = entry.regex.captures(ua) {
                return Some(MatchResult {
                    data: &entry.data,
                    captures,
                });
            }
        }
        None
    }
}
