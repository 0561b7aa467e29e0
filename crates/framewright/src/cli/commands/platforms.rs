//! Platforms command - list the platform catalog

use clap::Args;
use serde::Serialize;
use tracing::info;

use framewright_apple::{Architecture, PlatformVariant};

use crate::cli::output::{header, key_value};
use crate::cli::{Cli, OutputFormat};

/// List supported platforms and their toolchain facts
#[derive(Debug, Args)]
pub struct PlatformsCommand {}

/// Derived facts for one platform
#[derive(Debug, Serialize)]
pub struct PlatformFacts {
    pub id: PlatformVariant,
    pub label: &'static str,
    pub sdk: String,
    pub architectures: &'static [Architecture],
    pub min_version_flag: &'static str,
    pub device_families: Vec<u8>,
    pub cmake_system_name: &'static str,
    pub simulator: bool,
    pub versioned_bundle: bool,
}

impl From<PlatformVariant> for PlatformFacts {
    fn from(platform: PlatformVariant) -> Self {
        Self {
            id: platform,
            label: platform.raw_label(),
            sdk: platform.sdk_name(),
            architectures: platform.architectures(),
            min_version_flag: platform.min_version_flag_name(),
            device_families: platform.device_family_codes(),
            cmake_system_name: platform.cmake_system_name(),
            simulator: platform.is_simulator(),
            versioned_bundle: platform.requires_versioned_bundle(),
        }
    }
}

impl PlatformsCommand {
    /// Execute the platforms command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!("executing platforms command");
        let facts: Vec<PlatformFacts> = PlatformVariant::ALL
            .into_iter()
            .map(PlatformFacts::from)
            .collect();

        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&facts)?),
            OutputFormat::Text => {
                for (i, fact) in facts.iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    println!("{} ({})", header(fact.id.as_str()), fact.label);
                    println!("{}", key_value("SDK", &fact.sdk));
                    let archs: Vec<&str> = fact.architectures.iter().map(|a| a.as_str()).collect();
                    println!("{}", key_value("Architectures", &archs.join(", ")));
                    println!("{}", key_value("Min version flag", fact.min_version_flag));
                    let families: Vec<String> =
                        fact.device_families.iter().map(u8::to_string).collect();
                    println!("{}", key_value("Device families", &families.join(", ")));
                    println!("{}", key_value("CMake system", fact.cmake_system_name));
                }
            }
        }

        Ok(())
    }
}
