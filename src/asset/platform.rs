use serde::Serialize;

/// Operating system a release asset targets
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
}

impl Platform {
    /// Wire name, also the key of the platform's bucket in the response
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        }
    }

    /// Name shown to people
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::MacOs => "macOS",
            Platform::Windows => "Windows",
            Platform::Linux => "Linux",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPU target, serialized as the label the download page shows
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Architecture {
    #[serde(rename = "Apple Silicon")]
    AppleSilicon,
    Intel,
    Universal,
    #[serde(rename = "x64")]
    X64,
    #[serde(rename = "ARM64")]
    Arm64,
}

impl Architecture {
    pub fn label(&self) -> &'static str {
        match self {
            Architecture::AppleSilicon => "Apple Silicon",
            Architecture::Intel => "Intel",
            Architecture::Universal => "Universal",
            Architecture::X64 => "x64",
            Architecture::Arm64 => "ARM64",
        }
    }
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_serializes_as_bucket_key() {
        for platform in [Platform::MacOs, Platform::Windows, Platform::Linux] {
            let json = serde_json::to_value(platform).unwrap();
            assert_eq!(json, platform.as_str());
        }
    }

    #[test]
    fn test_architecture_serializes_as_label() {
        for arch in [
            Architecture::AppleSilicon,
            Architecture::Intel,
            Architecture::Universal,
            Architecture::X64,
            Architecture::Arm64,
        ] {
            let json = serde_json::to_value(arch).unwrap();
            assert_eq!(json, arch.label());
        }
    }

    #[test]
    fn test_platform_display_name() {
        assert_eq!(Platform::MacOs.display_name(), "macOS");
        assert_eq!(Platform::MacOs.to_string(), "macos");
    }
}
