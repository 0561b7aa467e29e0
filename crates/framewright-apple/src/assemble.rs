//! Framework bundle assembly from a built library and its headers

use std::path::{Path, PathBuf};

use tracing::info;

use framewright_core::config::FrameworkConfig;
use framewright_core::fs;

use crate::error::{FrameworkError, Result};
use crate::manifest::{
    read_info_plist, render_info_plist, render_module_map, BundleDescriptor, ModuleHeader,
};
use crate::platform::PlatformVariant;
use crate::repackage::repackage;
use crate::toolchain::Toolchain;

/// Everything needed to assemble one framework
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkSpec {
    pub bundle: BundleDescriptor,
    /// Built static or dynamic library
    pub binary: PathBuf,
    /// Public header directory, copied to `Headers/`
    pub headers: Option<PathBuf>,
    pub module_header: ModuleHeader,
}

impl FrameworkSpec {
    /// Build from the `[framework]` config section.
    ///
    /// Relative paths are resolved against `base_dir`. Without an explicit
    /// umbrella setting the umbrella header defaults to `<name>.h`.
    pub fn from_config(config: &FrameworkConfig, base_dir: &Path) -> Result<Self> {
        let name = config
            .name
            .clone()
            .ok_or_else(|| FrameworkError::MissingSetting("framework.name".to_string()))?;
        let identifier = config
            .identifier
            .clone()
            .ok_or_else(|| FrameworkError::MissingSetting("framework.identifier".to_string()))?;
        let binary = config
            .binary
            .as_ref()
            .map(|b| base_dir.join(b))
            .ok_or_else(|| FrameworkError::MissingSetting("framework.binary".to_string()))?;

        let module_header = match (&config.umbrella_header, &config.umbrella_directory) {
            (_, Some(dir)) => ModuleHeader::UmbrellaDirectory(dir.clone()),
            (Some(header), None) => ModuleHeader::UmbrellaHeader(header.clone()),
            (None, None) => ModuleHeader::UmbrellaHeader(format!("{}.h", name)),
        };

        Ok(Self {
            bundle: BundleDescriptor::new(
                name,
                config.version.clone(),
                identifier,
                config.min_os_version.clone(),
            ),
            binary,
            headers: config.headers.as_ref().map(|h| base_dir.join(h)),
            module_header,
        })
    }
}

/// Assemble `<output_dir>/<platform>/<Name>.framework` and return its path.
///
/// Desktop platforms get the versioned layout. Failures leave whatever was
/// already written in place.
pub fn assemble(
    toolchain: &Toolchain,
    spec: &FrameworkSpec,
    platform: PlatformVariant,
    output_dir: &Path,
) -> Result<PathBuf> {
    let name = &spec.bundle.name;
    let framework = output_dir
        .join(platform.as_str())
        .join(format!("{}.framework", name));

    if framework.symlink_metadata().is_ok() {
        return Err(FrameworkError::invalid_framework(
            &framework,
            "already exists; remove it before assembling again",
        ));
    }
    if !spec.binary.is_file() {
        return Err(FrameworkError::invalid_framework(
            &framework,
            format!("binary {} not found", spec.binary.display()),
        ));
    }

    info!(framework = %framework.display(), platform = %platform, "assembling framework");
    let runner = toolchain.runner();

    fs::create_dir_all(&framework)?;
    fs::copy_recursive(runner, &spec.binary, &framework.join(name))?;

    let headers = framework.join("Headers");
    match spec.headers {
        Some(ref source) => fs::copy_recursive(runner, source, &headers)?,
        None => fs::create_dir_all(&headers)?,
    }

    let modules = framework.join("Modules");
    fs::create_dir_all(&modules)?;
    fs::write_text(
        &render_module_map(name, &spec.module_header),
        &modules.join("module.modulemap"),
    )?;

    let plist = render_info_plist(&spec.bundle, platform, toolchain)?;
    check_info_plist(&framework, &plist, name)?;
    fs::write_text(&plist, &framework.join("Info.plist"))?;

    if platform.requires_versioned_bundle() {
        repackage(runner, &framework, name)?;
    }

    info!(framework = %framework.display(), "framework assembled");
    Ok(framework)
}

/// The rendered property list must parse and name the bundle's executable
fn check_info_plist(framework: &Path, text: &str, name: &str) -> Result<()> {
    let dict = read_info_plist(text)?;
    let executable = dict
        .as_ref()
        .and_then(|dict| dict.get("CFBundleExecutable"))
        .and_then(|value| value.as_string());
    if executable != Some(name) {
        return Err(FrameworkError::invalid_framework(
            framework,
            "rendered Info.plist does not name the framework binary",
        ));
    }
    Ok(())
}
