use std::path::Path;
use std::sync::{Arc, OnceLock};

use device_classifier::{classify, ClientSignals, DeviceType, UaSniffer};
use fixtures::fixtures;
use serde::Deserialize;

// Global UaSniffer instance that is initialized once
static SNIFFER_INSTANCE: OnceLock<Arc<UaSniffer>> = OnceLock::new();

fn shared_sniffer() -> Arc<UaSniffer> {
    SNIFFER_INSTANCE
        .get_or_init(|| Arc::new(UaSniffer::new().expect("failed to build UaSniffer")))
        .clone()
}

const MAC_DESKTOP_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15";

const WINDOWS_CHROME_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

// ---------------------------------------------------------------------------
// Fixture-driven sniffer + base classification checks
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ClassificationFixture {
    user_agent: String,
    #[serde(default)]
    os_family: String,
    #[serde(default)]
    os_version: String,
    #[serde(default)]
    browser_family: String,
    #[serde(default)]
    browser_version: String,
    device_type: String,
}

#[fixtures(["tests/fixtures/classification.yml"])]
#[test]
fn test_classification_fixtures(path: &Path) {
    let sniffer = shared_sniffer();
    let content = std::fs::read_to_string(path).unwrap();
    let fixtures: Vec<ClassificationFixture> = serde_yaml::from_str(&content).unwrap();

    for f in &fixtures {
        let c = classify(
            sniffer.as_ref(),
            Some(&f.user_agent),
            ClientSignals::default(),
        );
        assert_eq!(
            c.os_family, f.os_family,
            "os family mismatch for UA: {}",
            f.user_agent
        );
        assert_eq!(
            c.os_version, f.os_version,
            "os version mismatch for UA: {}",
            f.user_agent
        );
        assert_eq!(
            c.browser_family, f.browser_family,
            "browser family mismatch for UA: {}",
            f.user_agent
        );
        assert_eq!(
            c.browser_version, f.browser_version,
            "browser version mismatch for UA: {}",
            f.user_agent
        );
        assert_eq!(
            c.device_type.as_str(),
            f.device_type,
            "device type mismatch for UA: {}",
            f.user_agent
        );
    }
}

// ---------------------------------------------------------------------------
// End-to-end scenarios
// ---------------------------------------------------------------------------

#[test]
fn empty_everything_is_a_well_formed_unknown() {
    let sniffer = shared_sniffer();
    let c = classify(sniffer.as_ref(), None, ClientSignals::default());
    assert_eq!(c.device_type, DeviceType::Unknown);
    assert_eq!(c.os_family, "");
    assert_eq!(c.browser_family, "");
    assert_eq!(c.user_agent, "");
    assert_eq!(c.signals.inner_width, None);
    assert_eq!(c.signals.max_touch_points, None);
}

#[test]
fn windows_chrome_desktop_with_probe() {
    let sniffer = shared_sniffer();
    let signals = ClientSignals::probe(Some(1920), Some(0));
    let c = classify(sniffer.as_ref(), Some(WINDOWS_CHROME_UA), signals);
    assert_eq!(c.device_type, DeviceType::LaptopOrDesktop);
    assert_eq!(c.os_family, "Windows");
    assert_eq!(c.browser_family, "Chrome");
    assert_eq!(c.signals, signals);
    assert_eq!(c.user_agent, WINDOWS_CHROME_UA);
}

#[test]
fn ipad_requesting_desktop_site_is_corrected() {
    // Desktop-class macOS UA, but the probe reports touch and a tablet-sized
    // viewport: this is an iPad.
    let sniffer = shared_sniffer();
    let c = classify(
        sniffer.as_ref(),
        Some(MAC_DESKTOP_UA),
        ClientSignals::probe(Some(1180), Some(5)),
    );
    assert_eq!(c.device_type, DeviceType::TabletLikelyIpad);
    assert_eq!(c.os_family, "Mac OS X");
    assert_eq!(c.browser_family, "Safari");
}

#[test]
fn real_mac_without_touch_stays_desktop() {
    let sniffer = shared_sniffer();
    let c = classify(
        sniffer.as_ref(),
        Some(MAC_DESKTOP_UA),
        ClientSignals::probe(Some(1280), Some(0)),
    );
    assert_eq!(c.device_type, DeviceType::LaptopOrDesktop);
}

#[test]
fn staggered_probe_arrival_refines_the_result() {
    // First render: probe not reported yet. The sentinel width keeps the
    // override off, so the UA-only answer stands.
    let sniffer = shared_sniffer();
    let first = classify(sniffer.as_ref(), Some(MAC_DESKTOP_UA), ClientSignals::default());
    assert_eq!(first.device_type, DeviceType::LaptopOrDesktop);

    // Probe reported: the same call, re-invoked, refines the classification.
    let second = classify(
        sniffer.as_ref(),
        Some(MAC_DESKTOP_UA),
        ClientSignals::probe(Some(1024), Some(5)),
    );
    assert_eq!(second.device_type, DeviceType::TabletLikelyIpad);
}

#[test]
fn sniffer_is_shareable_across_threads() {
    let sniffer = shared_sniffer();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let sniffer = Arc::clone(&sniffer);
            std::thread::spawn(move || {
                let c = classify(
                    sniffer.as_ref(),
                    Some(WINDOWS_CHROME_UA),
                    ClientSignals::default(),
                );
                assert_eq!(c.device_type, DeviceType::LaptopOrDesktop);
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
}

#[test]
fn totality_over_awkward_inputs() {
    let sniffer = shared_sniffer();
    let uas = [
        "",
        " ",
        "Mozilla/5.0",
        "()()()",
        "\u{0}\u{1}\u{2}",
        "ＭｏｚｉｌｌａアンドロイドiPhone",
    ];
    let probes = [
        ClientSignals::default(),
        ClientSignals::probe(Some(0), None),
        ClientSignals::probe(None, Some(0)),
        ClientSignals::probe(Some(u32::MAX), Some(u32::MAX)),
    ];
    for ua in uas {
        for signals in probes {
            let c = classify(sniffer.as_ref(), Some(ua), signals);
            assert_eq!(c.user_agent, ua);
            assert_eq!(c.signals, signals);
        }
    }
}
