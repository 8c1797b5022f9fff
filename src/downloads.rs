//! Download page payload built from a release.

use serde::Serialize;

use crate::asset::{ClassifiedDownload, Platform, classify};
use crate::github::Release;

/// Classified downloads grouped by platform, each in release asset order
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct PlatformDownloads {
    pub macos: Vec<ClassifiedDownload>,
    pub windows: Vec<ClassifiedDownload>,
    pub linux: Vec<ClassifiedDownload>,
}

impl PlatformDownloads {
    pub fn get(&self, platform: Platform) -> &[ClassifiedDownload] {
        match platform {
            Platform::MacOs => &self.macos,
            Platform::Windows => &self.windows,
            Platform::Linux => &self.linux,
        }
    }

    fn push(&mut self, download: ClassifiedDownload) {
        match download.platform {
            Platform::MacOs => self.macos.push(download),
            Platform::Windows => self.windows.push(download),
            Platform::Linux => self.linux.push(download),
        }
    }

    pub fn len(&self) -> usize {
        self.macos.len() + self.windows.len() + self.linux.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Response body of the download endpoint
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DownloadsResponse {
    pub version: String,
    pub published_at: Option<String>,
    pub downloads: PlatformDownloads,
}

impl DownloadsResponse {
    /// Classifies every asset of `release`. Assets that match no platform
    /// are left out.
    pub fn from_release(release: &Release) -> Self {
        let mut downloads = PlatformDownloads::default();

        for download in release.assets.iter().filter_map(classify) {
            downloads.push(download);
        }

        Self {
            version: release.tag_name.clone(),
            published_at: release.published_at.clone(),
            downloads,
        }
    }
}
