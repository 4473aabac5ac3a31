//! Browserslist-style query parsing for the documented support matrix.

use std::sync::LazyLock;

use lightningcss::targets::Browsers;
use regex::Regex;

/// The documentation site's fixed support matrix.
pub const DEFAULT_BROWSERS: [&str; 4] = ["last 3 versions", "> 5%", "firefox > 3", "ie >= 8"];

/// `<browser> >= <version>` or `<browser> > <version>`.
static VERSION_QUERY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z_]+)\s*(>=|>)\s*(\d+)(?:\.(\d+))?$").expect("Invalid version query regex")
});

/// Coverage-style queries that pin the matrix to the modern baseline rather
/// than one browser.
static COVERAGE_QUERY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(last \d+ versions|> ?\d+(\.\d+)?%)$").expect("Invalid coverage query regex")
});

/// Version in lightningcss encoding: `major << 16 | minor << 8 | patch`.
fn encode(major: u32, minor: u32) -> u32 {
    (major << 16) | (minor << 8)
}

/// Queries union: the matrix supports the oldest version any query names.
fn widen(slot: &mut Option<u32>, version: u32) {
    *slot = Some(slot.map_or(version, |current| current.min(version)));
}

/// Translate browserslist-style queries into lightningcss targets.
///
/// Named queries set a per-browser minimum; coverage queries (`last N
/// versions`, `> x%`) map onto a fixed modern baseline. Unrecognized queries
/// are logged and skipped.
pub fn parse_browsers(queries: &[String]) -> Browsers {
    let mut browsers = Browsers::default();

    for query in queries {
        let query = query.trim();

        if COVERAGE_QUERY.is_match(query) {
            apply_modern_baseline(&mut browsers);
            continue;
        }

        let Some(caps) = VERSION_QUERY.captures(query) else {
            tracing::warn!("Skipping unrecognized browser query: {query}");
            continue;
        };

        let name = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let op = caps.get(2).map(|m| m.as_str()).unwrap_or(">=");
        let major: u32 = caps
            .get(3)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);
        let minor: u32 = caps
            .get(4)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);

        // A strict "> N" bound means the next major up.
        let version = if op == ">" && minor == 0 {
            encode(major + 1, 0)
        } else {
            encode(major, minor)
        };

        let slot = match name {
            "android" => &mut browsers.android,
            "chrome" => &mut browsers.chrome,
            "edge" => &mut browsers.edge,
            "firefox" => &mut browsers.firefox,
            "ie" => &mut browsers.ie,
            "ios_saf" | "ios" => &mut browsers.ios_saf,
            "opera" => &mut browsers.opera,
            "safari" => &mut browsers.safari,
            "samsung" => &mut browsers.samsung,
            _ => {
                tracing::warn!("Skipping unknown browser name: {name}");
                continue;
            }
        };
        widen(slot, version);
    }

    browsers
}

/// Recent evergreen releases standing in for `last N versions` / usage-share
/// queries, which need a live caniuse dataset to resolve exactly.
fn apply_modern_baseline(browsers: &mut Browsers) {
    widen(&mut browsers.chrome, encode(109, 0));
    widen(&mut browsers.edge, encode(109, 0));
    widen(&mut browsers.firefox, encode(109, 0));
    widen(&mut browsers.safari, encode(15, 6));
    widen(&mut browsers.ios_saf, encode(15, 6));
    widen(&mut browsers.opera, encode(95, 0));
}
