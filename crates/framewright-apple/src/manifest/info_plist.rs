//! Framework `Info.plist` rendering

use std::fmt::Write as _;
use std::io::Cursor;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::platform::PlatformVariant;
use crate::toolchain::Toolchain;

/// Caller-supplied bundle facts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleDescriptor {
    pub name: String,
    pub version: String,
    pub identifier: String,
    pub min_os_version: String,
}

impl BundleDescriptor {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        identifier: impl Into<String>,
        min_os_version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            identifier: identifier.into(),
            min_os_version: min_os_version.into(),
        }
    }
}

/// Render the property list, resolving the SDK version through `toolchain`.
///
/// Fails when the SDK version cannot be resolved.
pub fn render_info_plist(
    bundle: &BundleDescriptor,
    platform: PlatformVariant,
    toolchain: &Toolchain,
) -> Result<String> {
    let sdk_version = toolchain.sdk_version(platform)?;
    Ok(render_info_plist_for_sdk(bundle, platform, &sdk_version))
}

/// Render the property list for an already known SDK version
pub fn render_info_plist_for_sdk(
    bundle: &BundleDescriptor,
    platform: PlatformVariant,
    sdk_version: &str,
) -> String {
    let sdk_name = platform.sdk_name();

    let mut families = String::new();
    for code in platform.device_family_codes() {
        let _ = writeln!(families, "\t\t<integer>{}</integer>", code);
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>CFBundleDevelopmentRegion</key>
	<string>en</string>
	<key>CFBundleExecutable</key>
	<string>{name}</string>
	<key>CFBundleIdentifier</key>
	<string>{identifier}</string>
	<key>CFBundleInfoDictionaryVersion</key>
	<string>6.0</string>
	<key>CFBundleName</key>
	<string>{name}</string>
	<key>CFBundlePackageType</key>
	<string>FMWK</string>
	<key>CFBundleShortVersionString</key>
	<string>{version}</string>
	<key>CFBundleVersion</key>
	<string>1</string>
	<key>MinimumOSVersion</key>
	<string>{min_os}</string>
	<key>CFBundleSupportedPlatforms</key>
	<array>
		<string>{label}</string>
	</array>
	<key>UIDeviceFamily</key>
	<array>
{families}	</array>
	<key>DTPlatformName</key>
	<string>{sdk_name}</string>
	<key>DTPlatformVersion</key>
	<string>{sdk_version}</string>
	<key>DTSDKName</key>
	<string>{sdk_name}{sdk_version}</string>
</dict>
</plist>
"#,
        name = escape(&bundle.name),
        identifier = escape(&bundle.identifier),
        version = escape(&bundle.version),
        min_os = escape(&bundle.min_os_version),
        label = platform.raw_label(),
        families = families,
        sdk_name = sdk_name,
        sdk_version = escape(sdk_version),
    )
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Parse rendered or on-disk property list text back into a dictionary.
///
/// Returns `None` when the document parses but its root is not a dictionary.
pub fn read_info_plist(text: &str) -> Result<Option<plist::Dictionary>> {
    let value = plist::Value::from_reader(Cursor::new(text.as_bytes()))?;
    Ok(value.into_dictionary())
}
