//! Text artifacts a framework bundle needs: module map, Info.plist and the
//! CMake toolchain fragment. Rendering does no I/O; callers write the text.

mod cmake;
mod info_plist;
mod modulemap;

pub use cmake::{render_cmake_toolchain, FIND_ROOT_VAR, PLATFORM_NAME_VAR, SDKROOT_VAR};
pub use info_plist::{
    read_info_plist, render_info_plist, render_info_plist_for_sdk, BundleDescriptor,
};
pub use modulemap::{render_module_map, ModuleHeader};
