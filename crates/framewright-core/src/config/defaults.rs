//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "framewright.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "framewright.yaml";

/// Get list of config file names to search for, in priority order
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".framewright.toml",
        ".framewright.yaml",
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# framewright configuration

[framework]
name = "MyLib"
version = "1.0.0"
identifier = "com.example.MyLib"
min_os_version = "13.0"
binary = "build/libMyLib.a"
headers = "include"
umbrella_header = "MyLib.h"

[toolchain]
locator = "xcrun"
shell = "/bin/sh"

[build]
command = ["cmake", "--build", "build"]
working_dir = "."
output_dir = "build/framewright"
"#;
