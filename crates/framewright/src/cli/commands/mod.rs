//! CLI commands

mod assemble;
mod build;
mod cmake_toolchain;
mod completions;
mod env;
mod modulemap;
mod platforms;
mod plist;
mod repackage;
mod toolchain;
mod universal;

pub use assemble::AssembleCommand;
pub use build::BuildCommand;
pub use cmake_toolchain::CmakeToolchainCommand;
pub use completions::CompletionsCommand;
pub use env::EnvCommand;
pub use modulemap::ModulemapCommand;
pub use platforms::PlatformsCommand;
pub use plist::PlistCommand;
pub use repackage::RepackageCommand;
pub use toolchain::ToolchainCommand;
pub use universal::UniversalCommand;
