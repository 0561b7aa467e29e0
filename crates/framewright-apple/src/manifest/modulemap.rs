//! Clang module map rendering

use serde::{Deserialize, Serialize};

/// How a module declares its public headers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "path")]
pub enum ModuleHeader {
    /// A single header that includes the whole public API
    UmbrellaHeader(String),
    /// A directory whose headers make up the public API
    UmbrellaDirectory(String),
}

/// Render a framework module map.
///
/// ```text
/// framework module Foo {
///   umbrella header "Foo.h"
///   export *
/// }
/// ```
pub fn render_module_map(name: &str, header: &ModuleHeader) -> String {
    let umbrella = match header {
        ModuleHeader::UmbrellaHeader(path) => format!("umbrella header \"{}\"", path),
        ModuleHeader::UmbrellaDirectory(path) => format!("umbrella \"{}\"", path),
    };
    format!(
        "framework module {} {{\n  {}\n  export *\n}}\n",
        name, umbrella
    )
}
