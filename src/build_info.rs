//! Build metadata
//!
//! `build.rs` stamps each compile with a build number and timestamp; both are
//! read back here and reported by `/v1/health` and the startup banner.

use std::fmt;

use serde::Serialize;

/// Version, build number and compile time of the running binary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            build_number: build_number(option_env!("HYAKUMI_BUILD_NUMBER")),
            build_timestamp: option_env!("HYAKUMI_BUILD_TIMESTAMP").unwrap_or("unknown"),
        }
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (build {}, compiled {})",
            self.name, self.version, self.build_number, self.build_timestamp
        )
    }
}

/// Unset or unparseable build numbers report as 0
fn build_number(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    eprintln!("Hyakumi food composition API");
    eprintln!("{}", BuildInfo::current());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_number_falls_back_to_zero() {
        assert_eq!(build_number(Some("42")), 42);
        assert_eq!(build_number(Some("")), 0);
        assert_eq!(build_number(Some("12a")), 0);
        assert_eq!(build_number(None), 0);
    }

    #[test]
    fn test_current_uses_package_metadata() {
        let info = BuildInfo::current();
        assert_eq!(info.name, "hyakumi");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.to_string().starts_with("hyakumi "));
    }
}
