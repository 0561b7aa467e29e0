//! framewright Apple support
//!
//! Turns cross-compiled native libraries into Apple framework bundles.
//!
//! - [`platform`]: the closed catalog of build targets and their toolchain facts
//! - [`toolchain`]: SDK path/version and compiler lookup through `xcrun`
//! - [`manifest`]: module map, Info.plist and CMake toolchain fragment text
//! - [`repackage`]: flat framework to `Versions/A` layout conversion
//! - [`environment`], [`universal`], [`assemble`]: building blocks for a full
//!   framework build

pub mod assemble;
pub mod environment;
pub mod error;
pub mod manifest;
pub mod platform;
pub mod repackage;
pub mod toolchain;
pub mod universal;

pub use assemble::{assemble, FrameworkSpec};
pub use environment::BuildEnvironment;
pub use error::{FrameworkError, Result};
pub use manifest::{
    read_info_plist, render_cmake_toolchain, render_info_plist, render_info_plist_for_sdk,
    render_module_map, BundleDescriptor, ModuleHeader,
};
pub use platform::{Architecture, DeviceFamily, PlatformVariant};
pub use repackage::repackage;
pub use toolchain::{Toolchain, ToolchainInfo, DEFAULT_LOCATOR};
pub use universal::merge_universal;
