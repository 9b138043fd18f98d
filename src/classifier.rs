use crate::types::{Classification, ClientSignals, DeviceType};
use crate::ua_parser::UaParser;

/// Widest viewport an iPad reports in practice (12.9" iPad Pro, landscape).
/// Touch-enabled desktop monitors are wider, so the bound keeps them from
/// being downgraded to tablet.
const IPAD_MAX_VIEWPORT_WIDTH: u32 = 1366;

/// Stand-in width while the client probe has not reported yet. Desktop-scale
/// on purpose: an absent reading must never trigger the tablet override.
const UNREPORTED_VIEWPORT_WIDTH: u32 = 10_000;

/// Classify the requesting device from its User-Agent and probe signals.
///
/// Total function: every input, including a missing or empty User-Agent and
/// absent probe readings, produces a well-formed [`Classification`]. The
/// probe defaults below exist only for the override check; the returned
/// record echoes the original inputs, absence included. Each call is
/// independent and idempotent, so callers simply re-invoke once late probe
/// readings arrive.
pub fn classify(
    parser: &dyn UaParser,
    user_agent: Option<&str>,
    signals: ClientSignals,
) -> Classification {
    let ua = user_agent.unwrap_or("");
    let profile = parser.parse(ua);

    // Fixed priority: tablet beats mobile beats pc.
    let mut device_type = if profile.is_tablet {
        DeviceType::Tablet
    } else if profile.is_mobile {
        DeviceType::Smartphone
    } else if profile.is_pc {
        DeviceType::LaptopOrDesktop
    } else {
        DeviceType::Unknown
    };

    let width = signals.inner_width.unwrap_or(UNREPORTED_VIEWPORT_WIDTH);
    let touch = signals.max_touch_points.unwrap_or(0);

    // iPads on iPadOS 13+ request desktop sites with a macOS User-Agent, but
    // still expose touch points and a tablet-sized viewport.
    if device_type == DeviceType::LaptopOrDesktop
        && matches!(profile.os_family.as_str(), "Mac OS X" | "macOS")
        && touch > 0
        && width <= IPAD_MAX_VIEWPORT_WIDTH
    {
        device_type = DeviceType::TabletLikelyIpad;
    }

    Classification {
        device_type,
        os_family: profile.os_family,
        os_version: profile.os_version,
        browser_family: profile.browser_family,
        browser_version: profile.browser_version,
        signals,
        user_agent: ua.to_string(),
    }
}
