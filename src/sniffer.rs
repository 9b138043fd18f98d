use std::path::Path;

use fancy_regex::Regex;

use crate::error::Result;
use crate::helpers::{capture_or_empty, normalize_version, substitute};
use crate::parser::{full_pattern, CompiledParser, MatchResult};
use crate::rules;
use crate::ua_parser::{UaParser, UaProfile};

const OSS_YAML: &str = include_str!("../rules/oss.yml");
const BROWSERS_YAML: &str = include_str!("../rules/browsers.yml");
const SIGNALS_YAML: &str = include_str!("../rules/device_signals.yml");

struct OsData {
    name: String,
    version_template: Option<String>,
}

struct BrowserData {
    name: String,
    version_template: Option<String>,
}

/// Device-class marker regexes, one per list in `device_signals.yml`.
struct SignalRegexes {
    tablet: Regex,
    mobile: Regex,
    pc: Regex,
}

impl SignalRegexes {
    fn compile(rules: &rules::SignalRules) -> Result<Self> {
        Ok(Self {
            tablet: combine_markers(&rules.tablet)?,
            mobile: combine_markers(&rules.mobile)?,
            pc: combine_markers(&rules.pc)?,
        })
    }
}

/// OR a marker pattern list into a single boundary-prefixed regex.
fn combine_markers(patterns: &[String]) -> Result<Regex> {
    let combined = patterns.join("|");
    Ok(Regex::new(&full_pattern(&combined))?)
}

/// Built-in [`UaParser`] backed by the YAML regex rules.
///
/// Stateless after construction; `parse` is a pure lookup and is safe to
/// call from any number of threads. Construction compiles every rule, so
/// build one sniffer and share it.
pub struct UaSniffer {
    os_parser: CompiledParser<OsData>,
    browser_parser: CompiledParser<BrowserData>,
    signals: SignalRegexes,
}

impl UaSniffer {
    /// Build from the rules embedded at compile time.
    pub fn new() -> Result<Self> {
        Self::from_yaml(OSS_YAML, BROWSERS_YAML, SIGNALS_YAML)
    }

    /// Build from a rules directory containing `oss.yml`, `browsers.yml`
    /// and `device_signals.yml`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        Self::from_yaml(
            &std::fs::read_to_string(dir.join("oss.yml"))?,
            &std::fs::read_to_string(dir.join("browsers.yml"))?,
            &std::fs::read_to_string(dir.join("device_signals.yml"))?,
        )
    }

    fn from_yaml(oss: &str, browsers: &str, signals: &str) -> Result<Self> {
        let os_entries: Vec<rules::OsEntry> = serde_yaml::from_str(oss)?;
        let browser_entries: Vec<rules::BrowserEntry> = serde_yaml::from_str(browsers)?;
        let signal_rules: rules::SignalRules = serde_yaml::from_str(signals)?;

        let os_parser = CompiledParser::build(os_entries.into_iter().map(|e| {
            (
                e.regex,
                OsData {
                    name: e.name,
                    version_template: e.version,
                },
            )
        }))?;

        let browser_parser = CompiledParser::build(browser_entries.into_iter().map(|e| {
            (
                e.regex,
                BrowserData {
                    name: e.name,
                    version_template: e.version,
                },
            )
        }))?;

        Ok(Self {
            os_parser,
            browser_parser,
            signals: SignalRegexes::compile(&signal_rules)?,
        })
    }

    fn matches(re: &Regex, ua: &str) -> bool {
        re.is_match(ua).unwrap_or(false)
    }
}

impl UaParser for UaSniffer {
    fn parse(&self, ua: &str) -> UaProfile {
        let (os_family, os_version) = match self.os_parser.match_first(ua) {
            Some(m) => resolve(&m, &m.data.name, m.data.version_template.as_deref()),
            None => (String::new(), String::new()),
        };

        let (browser_family, browser_version) = match self.browser_parser.match_first(ua) {
            Some(m) => resolve(&m, &m.data.name, m.data.version_template.as_deref()),
            None => (String::new(), String::new()),
        };

        let is_tablet = Self::matches(&self.signals.tablet, ua);
        let is_mobile = Self::matches(&self.signals.mobile, ua);
        // Desktop-OS tokens appear inside mobile UAs, so pc only holds when
        // nothing marked the UA as a handheld.
        let is_pc = !is_tablet && !is_mobile && Self::matches(&self.signals.pc, ua);

        UaProfile {
            is_tablet,
            is_mobile,
            is_pc,
            os_family,
            os_version,
            browser_family,
            browser_version,
        }
    }
}

/// Resolve an entry match into `(name, version)`. Without a template the
/// version falls back to capture group 1, matching how most rules are
/// written; either way the captured text is normalized.
fn resolve<T>(m: &MatchResult<'_, T>, name: &str, template: Option<&str>) -> (String, String) {
    let version = match template {
        Some(tpl) => substitute(tpl, &m.captures).into_owned(),
        None => capture_or_empty(&m.captures, 1),
    };
    (name.to_string(), normalize_version(&version))
}
