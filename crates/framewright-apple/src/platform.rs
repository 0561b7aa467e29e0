//! Apple platform catalog
//!
//! Every build target is a [`PlatformVariant`]. All toolchain facts are pure
//! functions of the variant with an exhaustive `match`, so adding a variant
//! forces every mapping to be revisited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FrameworkError;

/// Instruction-set architecture slices of a universal binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Architecture {
    #[serde(rename = "arm64")]
    Arm64,
    #[serde(rename = "arm64_32")]
    Arm64_32,
    #[serde(rename = "armv7k")]
    Armv7k,
    #[serde(rename = "x86_64")]
    X86_64,
}

impl Architecture {
    pub const ALL: [Architecture; 4] = [Self::Arm64, Self::Arm64_32, Self::Armv7k, Self::X86_64];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arm64 => "arm64",
            Self::Arm64_32 => "arm64_32",
            Self::Armv7k => "armv7k",
            Self::X86_64 => "x86_64",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Architecture {
    type Err = FrameworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|arch| arch.as_str() == s)
            .ok_or_else(|| FrameworkError::UnknownArchitecture(s.to_string()))
    }
}

/// UI device classes declared in `UIDeviceFamily`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceFamily {
    Phone,
    Pad,
    Tv,
    Watch,
    TvFourK,
    Mac,
}

impl DeviceFamily {
    /// Numeric code written into the property list
    pub fn code(&self) -> u8 {
        match self {
            Self::Phone => 1,
            Self::Pad => 2,
            Self::Tv => 3,
            Self::Watch => 4,
            Self::TvFourK => 5,
            Self::Mac => 6,
        }
    }
}

/// A single Apple build target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlatformVariant {
    #[serde(rename = "tvos")]
    TvOs,
    #[serde(rename = "tvos-simulator")]
    TvOsSimulator,
    #[serde(rename = "ios")]
    Ios,
    #[serde(rename = "ios-simulator")]
    IosSimulator,
    #[serde(rename = "macos")]
    MacOs,
    #[serde(rename = "mac-catalyst")]
    MacCatalyst,
    #[serde(rename = "watchos")]
    WatchOs,
    #[serde(rename = "watchos-simulator")]
    WatchOsSimulator,
}

impl PlatformVariant {
    /// Every variant, in catalog order
    pub const ALL: [PlatformVariant; 8] = [
        Self::TvOs,
        Self::TvOsSimulator,
        Self::Ios,
        Self::IosSimulator,
        Self::MacOs,
        Self::MacCatalyst,
        Self::WatchOs,
        Self::WatchOsSimulator,
    ];

    /// Short identifier used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TvOs => "tvos",
            Self::TvOsSimulator => "tvos-simulator",
            Self::Ios => "ios",
            Self::IosSimulator => "ios-simulator",
            Self::MacOs => "macos",
            Self::MacCatalyst => "mac-catalyst",
            Self::WatchOs => "watchos",
            Self::WatchOsSimulator => "watchos-simulator",
        }
    }

    /// Apple platform label, as listed in `CFBundleSupportedPlatforms`
    pub fn raw_label(&self) -> &'static str {
        match self {
            Self::TvOs => "AppleTVOS",
            Self::TvOsSimulator => "AppleTVSimulator",
            Self::Ios => "iPhoneOS",
            Self::IosSimulator => "iPhoneSimulator",
            Self::MacOs => "MacOSX",
            Self::MacCatalyst => "MacCatalyst",
            Self::WatchOs => "WatchOS",
            Self::WatchOsSimulator => "WatchSimulator",
        }
    }

    /// SDK identifier passed to the SDK locator.
    ///
    /// Mac Catalyst builds against the macOS SDK.
    pub fn sdk_name(&self) -> String {
        match self {
            Self::MacCatalyst => Self::MacOs.sdk_name(),
            Self::TvOs
            | Self::TvOsSimulator
            | Self::Ios
            | Self::IosSimulator
            | Self::MacOs
            | Self::WatchOs
            | Self::WatchOsSimulator => self.raw_label().to_lowercase(),
        }
    }

    /// Architectures to build, in the order tools receive them
    pub fn architectures(&self) -> &'static [Architecture] {
        use Architecture::*;
        match self {
            Self::TvOs => &[Arm64],
            // x86_64 is not built for the tvOS simulator yet.
            Self::TvOsSimulator => &[Arm64],
            Self::Ios => &[Arm64],
            Self::IosSimulator => &[Arm64, X86_64],
            Self::MacOs => &[Arm64, X86_64],
            Self::MacCatalyst => &[Arm64, X86_64],
            Self::WatchOs => &[Armv7k, Arm64_32],
            Self::WatchOsSimulator => &[Arm64, X86_64],
        }
    }

    /// Compiler flag that sets the minimum OS version.
    ///
    /// Mac Catalyst needs an explicit target in front of the flag name.
    pub fn min_version_flag_name(&self) -> &'static str {
        match self {
            Self::TvOs => "-mtvos-version-min",
            Self::TvOsSimulator => "-mtvos-simulator-version-min",
            Self::Ios => "-miphoneos-version-min",
            Self::IosSimulator => "-mios-simulator-version-min",
            Self::MacOs => "-mmacosx-version-min",
            Self::MacCatalyst => "-target x86_64-apple-ios-macabi -miphoneos-version-min",
            Self::WatchOs => "-mwatchos-version-min",
            Self::WatchOsSimulator => "-mwatchos-simulator-version-min",
        }
    }

    /// Device families supported by bundles for this platform
    pub fn device_families(&self) -> &'static [DeviceFamily] {
        use DeviceFamily::*;
        match self {
            Self::TvOs | Self::TvOsSimulator => &[Tv, TvFourK],
            Self::Ios | Self::IosSimulator => &[Phone, Pad],
            Self::MacOs | Self::MacCatalyst => &[Pad, Mac],
            Self::WatchOs | Self::WatchOsSimulator => &[Watch],
        }
    }

    /// Numeric `UIDeviceFamily` codes
    pub fn device_family_codes(&self) -> Vec<u8> {
        self.device_families().iter().map(DeviceFamily::code).collect()
    }

    /// `CMAKE_SYSTEM_NAME` for cross-compilation
    pub fn cmake_system_name(&self) -> &'static str {
        match self {
            Self::TvOs | Self::TvOsSimulator => "tvOS",
            Self::Ios | Self::IosSimulator => "iOS",
            Self::MacOs | Self::MacCatalyst => "Darwin",
            Self::WatchOs | Self::WatchOsSimulator => "watchOS",
        }
    }

    pub fn is_simulator(&self) -> bool {
        match self {
            Self::TvOsSimulator | Self::IosSimulator | Self::WatchOsSimulator => true,
            Self::TvOs | Self::Ios | Self::MacOs | Self::MacCatalyst | Self::WatchOs => false,
        }
    }

    /// Whether frameworks for this platform use the `Versions/A` layout
    pub fn requires_versioned_bundle(&self) -> bool {
        match self {
            Self::MacOs | Self::MacCatalyst => true,
            Self::TvOs
            | Self::TvOsSimulator
            | Self::Ios
            | Self::IosSimulator
            | Self::WatchOs
            | Self::WatchOsSimulator => false,
        }
    }

    /// Clang target triple for one architecture slice
    pub fn target_triple(&self, arch: Architecture) -> String {
        let os = match self {
            Self::TvOs => "tvos",
            Self::TvOsSimulator => "tvos-simulator",
            Self::Ios => "ios",
            Self::IosSimulator => "ios-simulator",
            Self::MacOs => "macosx",
            Self::MacCatalyst => "ios-macabi",
            Self::WatchOs => "watchos",
            Self::WatchOsSimulator => "watchos-simulator",
        };
        format!("{}-apple-{}", arch.as_str(), os)
    }
}

impl fmt::Display for PlatformVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlatformVariant {
    type Err = FrameworkError;

    /// Accepts the short identifier or the Apple platform label, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s) || p.raw_label().eq_ignore_ascii_case(s))
            .ok_or_else(|| FrameworkError::UnknownPlatform(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mappings_are_total_and_non_empty() {
        for platform in PlatformVariant::ALL {
            assert!(!platform.sdk_name().is_empty(), "{platform}");
            assert!(!platform.architectures().is_empty(), "{platform}");
            assert!(!platform.device_family_codes().is_empty(), "{platform}");
            assert!(!platform.min_version_flag_name().is_empty(), "{platform}");
            assert!(!platform.cmake_system_name().is_empty(), "{platform}");
        }
    }

    #[test]
    fn test_mappings_are_stable() {
        for platform in PlatformVariant::ALL {
            assert_eq!(platform.sdk_name(), platform.sdk_name());
            assert_eq!(platform.architectures(), platform.architectures());
            assert_eq!(platform.device_family_codes(), platform.device_family_codes());
        }
    }

    #[test]
    fn test_sdk_names() {
        assert_eq!(PlatformVariant::Ios.sdk_name(), "iphoneos");
        assert_eq!(PlatformVariant::IosSimulator.sdk_name(), "iphonesimulator");
        assert_eq!(PlatformVariant::TvOs.sdk_name(), "appletvos");
        assert_eq!(PlatformVariant::TvOsSimulator.sdk_name(), "appletvsimulator");
        assert_eq!(PlatformVariant::WatchOs.sdk_name(), "watchos");
        assert_eq!(PlatformVariant::WatchOsSimulator.sdk_name(), "watchsimulator");
        assert_eq!(PlatformVariant::MacOs.sdk_name(), "macosx");
    }

    #[test]
    fn test_catalyst_uses_macos_sdk() {
        assert_eq!(
            PlatformVariant::MacCatalyst.sdk_name(),
            PlatformVariant::MacOs.sdk_name()
        );
        assert_ne!(
            PlatformVariant::MacCatalyst.raw_label(),
            PlatformVariant::MacOs.raw_label()
        );
    }

    #[test]
    fn test_tv_platforms_have_single_architecture() {
        assert_eq!(PlatformVariant::TvOs.architectures(), &[Architecture::Arm64]);
        assert_eq!(
            PlatformVariant::TvOsSimulator.architectures(),
            &[Architecture::Arm64]
        );
    }

    #[test]
    fn test_architecture_order() {
        assert_eq!(
            PlatformVariant::MacOs.architectures(),
            &[Architecture::Arm64, Architecture::X86_64]
        );
        assert_eq!(
            PlatformVariant::WatchOs.architectures(),
            &[Architecture::Armv7k, Architecture::Arm64_32]
        );
    }

    #[test]
    fn test_device_family_codes() {
        assert_eq!(PlatformVariant::Ios.device_family_codes(), vec![1, 2]);
        assert_eq!(PlatformVariant::IosSimulator.device_family_codes(), vec![1, 2]);
        assert_eq!(PlatformVariant::MacOs.device_family_codes(), vec![2, 6]);
        assert_eq!(PlatformVariant::MacCatalyst.device_family_codes(), vec![2, 6]);
        assert_eq!(PlatformVariant::WatchOs.device_family_codes(), vec![4]);
        assert_eq!(PlatformVariant::WatchOsSimulator.device_family_codes(), vec![4]);
        assert_eq!(PlatformVariant::TvOs.device_family_codes(), vec![3, 5]);
        assert_eq!(PlatformVariant::TvOsSimulator.device_family_codes(), vec![3, 5]);
    }

    #[test]
    fn test_catalyst_flag_is_multi_token() {
        let flag = PlatformVariant::MacCatalyst.min_version_flag_name();
        assert!(flag.split_whitespace().count() > 1);
        assert!(flag.ends_with("-miphoneos-version-min"));
        assert_eq!(
            PlatformVariant::MacOs.min_version_flag_name(),
            "-mmacosx-version-min"
        );
    }

    #[test]
    fn test_cmake_system_names() {
        assert_eq!(PlatformVariant::Ios.cmake_system_name(), "iOS");
        assert_eq!(PlatformVariant::TvOsSimulator.cmake_system_name(), "tvOS");
        assert_eq!(PlatformVariant::WatchOs.cmake_system_name(), "watchOS");
        assert_eq!(PlatformVariant::MacCatalyst.cmake_system_name(), "Darwin");
    }

    #[test]
    fn test_versioned_bundle_only_for_desktop() {
        let versioned: Vec<_> = PlatformVariant::ALL
            .into_iter()
            .filter(PlatformVariant::requires_versioned_bundle)
            .collect();
        assert_eq!(
            versioned,
            vec![PlatformVariant::MacOs, PlatformVariant::MacCatalyst]
        );
    }

    #[test]
    fn test_target_triples() {
        assert_eq!(
            PlatformVariant::IosSimulator.target_triple(Architecture::X86_64),
            "x86_64-apple-ios-simulator"
        );
        assert_eq!(
            PlatformVariant::MacCatalyst.target_triple(Architecture::Arm64),
            "arm64-apple-ios-macabi"
        );
        assert_eq!(
            PlatformVariant::MacOs.target_triple(Architecture::Arm64),
            "arm64-apple-macosx"
        );
    }

    #[test]
    fn test_parse_platform() {
        assert_eq!("ios".parse::<PlatformVariant>().unwrap(), PlatformVariant::Ios);
        assert_eq!(
            "iPhoneSimulator".parse::<PlatformVariant>().unwrap(),
            PlatformVariant::IosSimulator
        );
        assert_eq!(
            "MAC-CATALYST".parse::<PlatformVariant>().unwrap(),
            PlatformVariant::MacCatalyst
        );
        assert!(matches!(
            "android".parse::<PlatformVariant>(),
            Err(FrameworkError::UnknownPlatform(_))
        ));
    }

    #[test]
    fn test_parse_architecture() {
        for arch in Architecture::ALL {
            assert_eq!(arch.as_str().parse::<Architecture>().unwrap(), arch);
        }
        assert!("i386".parse::<Architecture>().is_err());
    }

    #[test]
    fn test_serde_names_match_identifiers() {
        for platform in PlatformVariant::ALL {
            let json = serde_json::to_string(&platform).unwrap();
            assert_eq!(json, format!("\"{}\"", platform.as_str()));
        }
    }
}
