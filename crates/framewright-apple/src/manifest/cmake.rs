//! CMake toolchain fragment for Apple cross-compilation
//!
//! The fragment is static text. It reads its inputs from environment
//! variables when CMake evaluates it, see [`crate::environment`].

/// Environment variable holding the SDK name of the target platform
pub const PLATFORM_NAME_VAR: &str = "PLATFORM_NAME";

/// Environment variable holding the SDK root path
pub const SDKROOT_VAR: &str = "SDKROOT";

/// Environment variable holding an extra find-root path
pub const FIND_ROOT_VAR: &str = "FRAMEWRIGHT_FIND_ROOT";

const FRAGMENT: &str = r#"include(Platform/Darwin)

list(APPEND CMAKE_FIND_ROOT_PATH "$ENV{FRAMEWRIGHT_FIND_ROOT}")

set(CMAKE_XCODE_ATTRIBUTE_CODE_SIGNING_REQUIRED "NO")
set(CMAKE_XCODE_ATTRIBUTE_ENABLE_BITCODE "NO")

if(NOT "$ENV{PLATFORM_NAME}" MATCHES "macosx")
  set(UNIX True)
  set(APPLE True)
  set(CMAKE_MACOSX_BUNDLE True)
  set(CMAKE_CROSSCOMPILING True)
  set(CMAKE_OSX_SYSROOT "$ENV{SDKROOT}")
endif()
"#;

/// Render the toolchain fragment
pub fn render_cmake_toolchain() -> String {
    FRAGMENT.to_string()
}
