use serde::Deserialize;

// ---------------------------------------------------------------------------
// Operating systems  (rules/oss.yml) — ordered list, first match wins
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct OsEntry {
    pub regex: String,
    pub name: String,
    /// Version template with `$N` capture placeholders; absent when the
    /// pattern carries no version information.
    #[serde(default)]
    pub version: Option<String>,
}

// ---------------------------------------------------------------------------
// Browsers  (rules/browsers.yml) — same shape as OS entries
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct BrowserEntry {
    pub regex: String,
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
}

// ---------------------------------------------------------------------------
// Device signals  (rules/device_signals.yml)
//
// Three pattern lists; each is OR-combined into a single marker regex.
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct SignalRules {
    pub tablet: Vec<String>,
    pub mobile: Vec<String>,
    pub pc: Vec<String>,
}
