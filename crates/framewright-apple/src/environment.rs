//! Cross-compilation environment for native build commands
//!
//! The variables here are what a build script (and the CMake toolchain
//! fragment) needs to target one platform. Like the runner's default
//! environment, nothing else from the parent process is inherited except
//! `PATH`.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::manifest::{FIND_ROOT_VAR, PLATFORM_NAME_VAR, SDKROOT_VAR};
use crate::platform::PlatformVariant;
use crate::toolchain::{Toolchain, ToolchainInfo};

/// Environment variables for building one platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BuildEnvironment {
    vars: BTreeMap<String, String>,
}

impl BuildEnvironment {
    /// Resolve the toolchain for `platform` and derive the environment
    pub fn resolve(
        toolchain: &Toolchain,
        platform: PlatformVariant,
        min_os_version: &str,
        find_root: Option<&Path>,
    ) -> Result<Self> {
        let info = toolchain.resolve(platform)?;
        Ok(Self::from_toolchain(&info, min_os_version, find_root))
    }

    /// Derive the environment from already resolved toolchain facts
    pub fn from_toolchain(
        info: &ToolchainInfo,
        min_os_version: &str,
        find_root: Option<&Path>,
    ) -> Self {
        let platform = info.platform;
        let sdk_path = info.sdk_path.to_string_lossy().into_owned();

        let mut flags = vec!["-isysroot".to_string(), sdk_path.clone()];
        for arch in platform.architectures() {
            flags.push("-arch".to_string());
            flags.push(arch.to_string());
        }
        flags.push(format!(
            "{}={}",
            platform.min_version_flag_name(),
            min_os_version
        ));
        let flags = flags.join(" ");

        let archs = platform
            .architectures()
            .iter()
            .map(|a| a.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let mut vars = BTreeMap::new();
        if let Ok(path) = std::env::var("PATH") {
            vars.insert("PATH".to_string(), path);
        }
        vars.insert("CC".to_string(), info.cc.to_string_lossy().into_owned());
        vars.insert("CXX".to_string(), info.cxx.to_string_lossy().into_owned());
        vars.insert(SDKROOT_VAR.to_string(), sdk_path);
        vars.insert(PLATFORM_NAME_VAR.to_string(), platform.sdk_name());
        vars.insert("ARCHS".to_string(), archs);
        vars.insert("CFLAGS".to_string(), flags.clone());
        vars.insert("CXXFLAGS".to_string(), flags.clone());
        vars.insert("LDFLAGS".to_string(), flags);
        if let Some(root) = find_root {
            vars.insert(
                FIND_ROOT_VAR.to_string(),
                root.to_string_lossy().into_owned(),
            );
        }

        Self { vars }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    /// Environment map for [`framewright_core::RunOptions::env`]
    pub fn to_env(&self) -> HashMap<String, String> {
        self.vars.clone().into_iter().collect()
    }
}
