//! Manual check of what the download page would show for the latest release.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use log::warn;
use std::io::Write;

use crate::asset::{Platform, classify_name};
use crate::github::{FetchError, GetLatestRelease, GitHubRepo, RateLimit, Release};

use super::config::Config;

#[tracing::instrument(skip(config))]
pub async fn check(config: Config) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report(&config.github, &config.repo, &mut out).await
}

/// Prints the latest release, its assets grouped by platform and the
/// current API rate limit. Fails if the release cannot be fetched.
pub async fn report<G: GetLatestRelease>(
    github: &G,
    repo: &GitHubRepo,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "Repository: {}", repo)?;
    writeln!(out, "Public repository, no authentication required")?;
    writeln!(out)?;
    writeln!(out, "Fetching latest release...")?;

    let release = match github.latest_release(repo).await {
        Ok(release) => release,
        Err(e) => {
            if let FetchError::Status { body, .. } = &e {
                if !body.trim().is_empty() {
                    writeln!(out, "Response: {}", body.trim())?;
                }
            }
            return Err(e).with_context(|| format!("Failed to fetch latest release of {}", repo));
        }
    };

    writeln!(out)?;
    print_release(&release, out)?;
    print_assets(&release, out)?;

    match github.rate_limit().await {
        Ok(rate) => print_rate_limit(&rate, out)?,
        Err(e) => warn!("Could not read API rate limit: {}", e),
    }

    writeln!(out, "All checks passed!")?;
    Ok(())
}

fn print_release(release: &Release, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Release Details:")?;
    writeln!(out, "  Version: {}", release.tag_name)?;
    writeln!(out, "  Name: {}", release.name.as_deref().unwrap_or("-"))?;
    writeln!(
        out,
        "  Published: {}",
        release
            .published_at
            .as_deref()
            .map(format_timestamp)
            .unwrap_or_else(|| "unpublished".to_string())
    )?;
    writeln!(out, "  Assets: {}", release.assets.len())?;
    writeln!(out)?;
    Ok(())
}

fn print_assets(release: &Release, out: &mut impl Write) -> Result<()> {
    let mut groups: [(&str, Vec<String>); 4] = [
        (Platform::MacOs.display_name(), Vec::new()),
        (Platform::Windows.display_name(), Vec::new()),
        (Platform::Linux.display_name(), Vec::new()),
        ("Other", Vec::new()),
    ];

    for asset in &release.assets {
        let size = format_file_size(asset.size);
        let (index, line) = match classify_name(&asset.name) {
            Some((platform, arch)) => (
                platform_index(platform),
                format!("{} ({}, {})", asset.name, arch.label(), size),
            ),
            None => (3, format!("{} ({})", asset.name, size)),
        };
        groups[index].1.push(line);
    }

    writeln!(out, "Assets by Platform:")?;
    writeln!(out)?;
    for (title, lines) in groups.iter().filter(|(_, lines)| !lines.is_empty()) {
        writeln!(out, "  {}:", title)?;
        for line in lines {
            writeln!(out, "    - {}", line)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn print_rate_limit(rate: &RateLimit, out: &mut impl Write) -> Result<()> {
    writeln!(out, "API Rate Limit:")?;
    writeln!(out, "  Used: {} / {}", rate.used, rate.limit)?;
    writeln!(out, "  Remaining: {}", rate.remaining)?;
    writeln!(out, "  Resets: {}", format_reset(rate.reset))?;
    writeln!(out)?;
    Ok(())
}

fn platform_index(platform: Platform) -> usize {
    match platform {
        Platform::MacOs => 0,
        Platform::Windows => 1,
        Platform::Linux => 2,
    }
}

/// RFC 3339 timestamp in local time; anything unparsable is shown as is.
fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| {
            t.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S %:z")
                .to_string()
        })
        .unwrap_or_else(|_| raw.to_string())
}

fn format_reset(epoch_secs: i64) -> String {
    DateTime::from_timestamp(epoch_secs, 0)
        .map(|t| t.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|| epoch_secs.to_string())
}

/// Human readable size in base 1024 units, at most two decimals.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut exponent = 0;
    let mut next = 1024u64;
    while exponent < UNITS.len() - 1 && bytes >= next {
        exponent += 1;
        next = next.saturating_mul(1024);
    }
    let value = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (value * 100.0).round() / 100.0;

    format!("{} {}", rounded, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{MockGetLatestRelease, ReleaseAsset};
    use reqwest::StatusCode;

    fn test_repo() -> GitHubRepo {
        GitHubRepo {
            owner: "owner".to_string(),
            repo: "repo".to_string(),
        }
    }

    fn test_release() -> Release {
        let asset = |name: &str, size: u64| ReleaseAsset {
            name: name.to_string(),
            size,
            browser_download_url: format!("https://example.com/{}", name),
        };
        Release {
            tag_name: "v1.2.0".to_string(),
            name: Some("NotWallet 1.2.0".to_string()),
            published_at: Some("2024-05-01T12:00:00Z".to_string()),
            assets: vec![
                asset("NotWallet-1.2.0-arm64.dmg", 52_428_800),
                asset("NotWallet-Setup-x64.exe", 1536),
                asset("notwallet_1.0.0_arm64.AppImage", 1024),
                asset("README.txt", 12),
            ],
        }
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(12), "12 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(52_428_800), "50 MB");
        assert_eq!(format_file_size(1_288_490_189), "1.2 GB");
        assert_eq!(format_file_size(5 * 1024 * 1024 * 1024 * 1024), "5120 GB");
    }

    #[test]
    fn test_format_timestamp_unparsable() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[tokio::test]
    async fn test_report_lists_assets_by_platform() {
        let mut github = MockGetLatestRelease::new();
        github
            .expect_latest_release()
            .times(1)
            .returning(|_| Ok(test_release()));
        github.expect_rate_limit().times(1).returning(|| {
            Ok(RateLimit {
                limit: 60,
                used: 3,
                remaining: 57,
                reset: 1_700_000_000,
            })
        });

        let mut out = Vec::new();
        report(&github, &test_repo(), &mut out).await.unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Repository: owner/repo"));
        assert!(out.contains("  Version: v1.2.0"));
        assert!(out.contains("  Assets: 4"));
        assert!(out.contains("  macOS:\n    - NotWallet-1.2.0-arm64.dmg (Apple Silicon, 50 MB)"));
        assert!(out.contains("  Windows:\n    - NotWallet-Setup-x64.exe (x64, 1.5 KB)"));
        assert!(out.contains("  Linux:\n    - notwallet_1.0.0_arm64.AppImage (ARM64, 1 KB)"));
        assert!(out.contains("  Other:\n    - README.txt (12 Bytes)"));
        assert!(out.contains("  Used: 3 / 60"));
        assert!(out.contains("  Remaining: 57"));
        assert!(out.ends_with("All checks passed!\n"));
    }

    #[tokio::test]
    async fn test_report_skips_empty_groups() {
        let mut github = MockGetLatestRelease::new();
        github.expect_latest_release().returning(|_| {
            Ok(Release {
                tag_name: "v1.0.0".to_string(),
                assets: vec![ReleaseAsset {
                    name: "NotWallet.dmg".to_string(),
                    size: 0,
                    browser_download_url: "https://example.com/NotWallet.dmg".to_string(),
                }],
                ..Default::default()
            })
        });
        github.expect_rate_limit().returning(|| Err(FetchError::Timeout));

        let mut out = Vec::new();
        report(&github, &test_repo(), &mut out).await.unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("  macOS:"));
        assert!(!out.contains("  Windows:"));
        assert!(!out.contains("  Other:"));
        assert!(out.contains("  Published: unpublished"));
        // Rate limit failure is not fatal
        assert!(!out.contains("API Rate Limit:"));
        assert!(out.contains("All checks passed!"));
    }

    #[tokio::test]
    async fn test_report_fails_on_upstream_error() {
        let mut github = MockGetLatestRelease::new();
        github.expect_latest_release().times(1).returning(|_| {
            Err(FetchError::Status {
                status: StatusCode::NOT_FOUND,
                body: r#"{"message":"Not Found"}"#.to_string(),
            })
        });
        github.expect_rate_limit().never();

        let mut out = Vec::new();
        let err = report(&github, &test_repo(), &mut out).await.unwrap_err();
        let out = String::from_utf8(out).unwrap();

        assert!(err.to_string().contains("owner/repo"));
        assert_eq!(
            err.downcast_ref::<FetchError>().and_then(FetchError::status),
            Some(StatusCode::NOT_FOUND)
        );
        assert!(out.contains(r#"Response: {"message":"Not Found"}"#));
        assert!(!out.contains("All checks passed!"));
    }
}
