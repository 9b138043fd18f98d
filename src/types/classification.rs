use super::DeviceType;

/// Readings reported by client-side script. Every field is optional: the
/// probe runs after the first render, so early calls see `None`.
///
/// Only `inner_width` and `max_touch_points` feed the classification
/// heuristic; the rest are carried for observability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientSignals {
    /// `window.innerWidth`, in CSS pixels.
    pub inner_width: Option<u32>,
    /// `window.innerHeight`.
    pub inner_height: Option<u32>,
    /// `navigator.maxTouchPoints`; 0 means no touch capability.
    pub max_touch_points: Option<u32>,
    /// `window.screen.width`.
    pub screen_width: Option<u32>,
    /// `window.screen.height`.
    pub screen_height: Option<u32>,
}

impl ClientSignals {
    /// Signals with only the two heuristic-relevant readings set.
    pub fn probe(inner_width: Option<u32>, max_touch_points: Option<u32>) -> Self {
        Self {
            inner_width,
            max_touch_points,
            ..Self::default()
        }
    }
}

/// Result of one classification call. A transient value object: the inputs
/// are echoed back exactly as given (absent stays absent), regardless of the
/// defaults the heuristic substituted internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub device_type: DeviceType,
    /// OS family label, e.g. "Windows", "Mac OS X", "iOS", "Android".
    /// Empty when the User-Agent is unparseable.
    pub os_family: String,
    pub os_version: String,
    /// Browser family label, e.g. "Chrome", "Safari", "Firefox".
    pub browser_family: String,
    pub browser_version: String,
    /// The probe readings exactly as passed in.
    pub signals: ClientSignals,
    /// The raw User-Agent exactly as passed in.
    pub user_agent: String,
}
