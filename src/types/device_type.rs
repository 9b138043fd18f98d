/// Final device classification, including the iPad-as-Mac correction which
/// plain User-Agent parsing cannot produce on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Smartphone,
    Tablet,
    /// Desktop-class macOS User-Agent, but touch-capable with a tablet-sized
    /// viewport. Almost certainly an iPad requesting the desktop site.
    TabletLikelyIpad,
    LaptopOrDesktop,
    Unknown,
}

impl DeviceType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "smartphone" => Some(Self::Smartphone),
            "tablet" => Some(Self::Tablet),
            "tablet (likely ipad)" => Some(Self::TabletLikelyIpad),
            "laptop/desktop" => Some(Self::LaptopOrDesktop),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Smartphone => "smartphone",
            Self::Tablet => "tablet",
            Self::TabletLikelyIpad => "tablet (likely iPad)",
            Self::LaptopOrDesktop => "laptop/desktop",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
