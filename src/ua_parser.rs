/// Everything the classifier needs from a parsed User-Agent.
///
/// The three flags mirror the usual UA-library trichotomy and are normally
/// mutually exclusive; the classifier resolves any overlap by fixed priority
/// (tablet, then mobile, then pc).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UaProfile {
    pub is_tablet: bool,
    pub is_mobile: bool,
    pub is_pc: bool,
    pub os_family: String,
    pub os_version: String,
    pub browser_family: String,
    pub browser_version: String,
}

/// Capability boundary for User-Agent parsing.
///
/// Implementations must be total: an empty or garbled string yields a
/// default profile (all flags false, empty labels), never an error. The
/// built-in implementation is [`crate::UaSniffer`]; any other UA library can
/// be adapted behind this trait.
pub trait UaParser {
    fn parse(&self, ua: &str) -> UaProfile;
}
