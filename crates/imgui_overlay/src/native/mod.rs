//! Native GUI backend loading

pub mod loader;

pub use loader::{
    library_file_name, platform_id, resource_name, BackendLoader, EmbeddedLibraries, NativeLoadError, NativeLoader,
    StaticLibraries,
};
