use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use super::platform::{Architecture, Platform};
use crate::github::ReleaseAsset;

// Architecture patterns run against the file name as published. Platform
// detection runs plain substring checks against the lower-cased name.
static MAC_APPLE_SILICON: LazyLock<Regex> = LazyLock::new(|| pattern(r"aarch64|arm64"));
static MAC_INTEL: LazyLock<Regex> = LazyLock::new(|| pattern(r"x64|x86_64|intel"));
static MAC_UNIVERSAL: LazyLock<Regex> = LazyLock::new(|| pattern(r"universal"));
static WINDOWS_ARM64: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"win.*arm64|windows.*arm64|arm64.*\.exe"));
static LINUX_ARM64: LazyLock<Regex> = LazyLock::new(|| pattern(r"arm64|aarch64"));

fn pattern(expr: &str) -> Regex {
    Regex::new(&format!("(?i){}", expr)).expect("asset pattern must compile")
}

/// A release asset placed on a platform and architecture
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ClassifiedDownload {
    pub platform: Platform,
    #[serde(rename = "arch")]
    pub architecture: Architecture,
    pub filename: String,
    pub size: u64,
    #[serde(rename = "downloadUrl")]
    pub download_url: String,
}

/// Classifies a release asset by its file name.
///
/// Platforms are tried in the order macOS, Windows, Linux and the first
/// match wins. Returns `None` for anything that is not an installer for one
/// of them (checksums, source archives, READMEs).
pub fn classify(asset: &ReleaseAsset) -> Option<ClassifiedDownload> {
    let (platform, architecture) = classify_name(&asset.name)?;

    Some(ClassifiedDownload {
        platform,
        architecture,
        filename: asset.name.clone(),
        size: asset.size,
        download_url: asset.browser_download_url.clone(),
    })
}

/// Platform and architecture for a file name, if it targets one we ship.
pub fn classify_name(name: &str) -> Option<(Platform, Architecture)> {
    let lower = name.to_lowercase();

    if lower.contains("mac") || lower.contains("darwin") || lower.ends_with(".dmg") {
        let arch = if MAC_APPLE_SILICON.is_match(name) {
            Architecture::AppleSilicon
        } else if MAC_INTEL.is_match(name) {
            Architecture::Intel
        } else if MAC_UNIVERSAL.is_match(name) {
            Architecture::Universal
        } else {
            Architecture::Universal
        };
        return Some((Platform::MacOs, arch));
    }

    if lower.contains("win") || lower.ends_with(".exe") || lower.ends_with(".msi") {
        let arch = if WINDOWS_ARM64.is_match(name) {
            Architecture::Arm64
        } else {
            Architecture::X64
        };
        return Some((Platform::Windows, arch));
    }

    if lower.contains("linux")
        || lower.ends_with(".appimage")
        || lower.ends_with(".deb")
        || lower.ends_with(".rpm")
    {
        let arch = if LINUX_ARM64.is_match(name) {
            Architecture::Arm64
        } else {
            Architecture::X64
        };
        return Some((Platform::Linux, arch));
    }

    None
}
