//! Build metadata
//!
//! `build.rs` bumps a build counter on every recompile and stamps the build
//! time. Both arrive here as compile-time environment variables; a crate built
//! without the script (e.g. from a packaged source) reports build 0.

use serde::Serialize;

pub const BUILD_NUMBER: u64 = build_number_or_zero(option_env!("FITREPORT_BUILD_NUMBER"));

/// UTC, ISO 8601
pub const BUILD_TIMESTAMP: &str = match option_env!("FITREPORT_BUILD_TIMESTAMP") {
    Some(stamp) => stamp,
    None => "unknown",
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

const fn build_number_or_zero(raw: Option<&str>) -> u64 {
    match raw {
        Some(s) => match parse_u64(s) {
            Some(n) => n,
            None => 0,
        },
        None => 0,
    }
}

/// Decimal digits only; anything else (including "") is rejected
const fn parse_u64(s: &str) -> Option<u64> {
    let digits = s.as_bytes();
    if digits.is_empty() {
        return None;
    }
    let mut value: u64 = 0;
    let mut i = 0;
    while i < digits.len() {
        let d = digits[i];
        if !d.is_ascii_digit() {
            return None;
        }
        value = value * 10 + (d - b'0') as u64;
        i += 1;
    }
    Some(value)
}

/// Snapshot of the metadata above, for the CLI summary
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub description: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
            description: DESCRIPTION,
        }
    }

    /// `fitreport 1.0.0 (build 12)`
    pub fn producer(&self) -> String {
        format!("{} {} (build {})", self.name, self.version, self.build_number)
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

/// Banner on stderr so stdout stays clean for the JSON summary
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    let rule = "-".repeat(47);
    eprintln!("{}", rule);
    eprintln!("  Fitness Report Engine ({})", info.name);
    eprintln!("  {} | build {} | compiled {}", info.version, info.build_number, info.build_timestamp);
    eprintln!("{}", rule);
}
