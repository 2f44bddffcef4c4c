//! Loads the platform build of the native GUI backend
//!
//! The host ships one library per platform as an embedded resource named
//! `{prefix}.{platform}.{library}`. Loading extracts the matching bytes into a
//! fresh temporary directory and opens them with the dynamic loader; unloading
//! closes the library and removes the directory.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use libloading::Library;
use tempfile::TempDir;
use thiserror::Error;

use crate::config::NativeLoaderConfig;

/// Native backend load errors
#[derive(Error, Debug)]
pub enum NativeLoadError {
    /// No backend build exists for this OS/architecture pair
    #[error("Unsupported platform: {os}/{arch}")]
    UnsupportedPlatform {
        /// Operating system
        os: String,
        /// CPU architecture
        arch: String,
    },

    /// The host does not embed the expected resource
    #[error("Embedded library resource not found: {0}")]
    MissingResource(String),

    /// Extraction to disk failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The dynamic loader rejected the library
    #[error("Dynamic load failed: {0}")]
    Load(#[from] libloading::Error),
}

/// Source of embedded native library bytes
pub trait EmbeddedLibraries {
    /// Bytes of the resource called `name`
    fn library_bytes(&self, name: &str) -> Option<Cow<'_, [u8]>>;
}

/// Resources compiled into the host binary, e.g. with `include_bytes!`
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticLibraries(pub &'static [(&'static str, &'static [u8])]);

impl EmbeddedLibraries for StaticLibraries {
    fn library_bytes(&self, name: &str) -> Option<Cow<'_, [u8]>> {
        self.0
            .iter()
            .find(|(resource, _)| *resource == name)
            .map(|(_, bytes)| Cow::Borrowed(*bytes))
    }
}

/// Platform identifier used in resource names
pub fn platform_id(os: &str, arch: &str) -> Option<&'static str> {
    match (os, arch) {
        ("windows", "x86") => Some("win_x86"),
        ("windows", "x86_64") => Some("win_x64"),
        ("windows", "aarch64") => Some("win_arm64"),
        ("linux", "x86_64") => Some("linux_x64"),
        ("macos", _) => Some("osx"),
        _ => None,
    }
}

/// File name of the backend library on `os`
pub fn library_file_name(os: &str) -> Option<&'static str> {
    match os {
        "windows" => Some("cimgui.dll"),
        "linux" => Some("libcimgui.so"),
        "macos" => Some("libcimgui.dylib"),
        _ => None,
    }
}

/// Embedded resource name for a platform build
pub fn resource_name(prefix: &str, platform: &str, library: &str) -> String {
    format!("{prefix}.{platform}.{library}")
}

struct LoadedLibrary {
    library: Library,
    path: PathBuf,
    dir: TempDir,
}

/// Extracts and holds the native backend library
pub struct NativeLoader<L: EmbeddedLibraries> {
    libraries: L,
    config: NativeLoaderConfig,
    loaded: Option<LoadedLibrary>,
}

impl<L: EmbeddedLibraries> NativeLoader<L> {
    /// Create a loader over `libraries`
    pub fn new(libraries: L, config: NativeLoaderConfig) -> Self {
        Self {
            libraries,
            config,
            loaded: None,
        }
    }

    /// Load the build for the running platform
    ///
    /// Succeeds without doing anything when a library is already loaded.
    pub fn try_load(&mut self) -> Result<(), NativeLoadError> {
        self.try_load_for(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Load the build for an explicit OS/architecture pair
    pub fn try_load_for(&mut self, os: &str, arch: &str) -> Result<(), NativeLoadError> {
        if self.loaded.is_some() {
            return Ok(());
        }

        let unsupported = || NativeLoadError::UnsupportedPlatform {
            os: os.to_string(),
            arch: arch.to_string(),
        };
        let platform = platform_id(os, arch).ok_or_else(unsupported)?;
        let file_name = library_file_name(os).ok_or_else(unsupported)?;

        let name = resource_name(&self.config.resource_prefix, platform, file_name);
        let bytes = self
            .libraries
            .library_bytes(&name)
            .ok_or_else(|| NativeLoadError::MissingResource(name.clone()))?;

        let dir = tempfile::Builder::new().prefix(&self.config.temp_dir_prefix).tempdir()?;
        let path = dir.path().join(file_name);
        std::fs::write(&path, &bytes)?;

        // SAFETY: the bytes are the host's own embedded backend build; its
        // initialisers are trusted the same way the host binary is.
        let library = unsafe { Library::new(&path) }?;

        log::info!("Loaded native GUI backend {} from {}", name, path.display());
        self.loaded = Some(LoadedLibrary { library, path, dir });
        Ok(())
    }

    /// Close the library and delete its temporary directory
    ///
    /// Cleanup failures are logged, never returned.
    pub fn unload(&mut self) {
        let Some(loaded) = self.loaded.take() else {
            return;
        };

        if let Err(e) = loaded.library.close() {
            log::warn!("Failed to close native GUI backend: {}", e);
        }
        let dir = loaded.dir.path().to_path_buf();
        if let Err(e) = loaded.dir.close() {
            log::warn!("Failed to remove {}: {}", dir.display(), e);
        }

        log::info!("Unloaded native GUI backend");
    }

    /// Whether a library is loaded
    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// The loaded library, for symbol lookup
    pub fn library(&self) -> Option<&Library> {
        self.loaded.as_ref().map(|loaded| &loaded.library)
    }

    /// Where the loaded library was extracted
    pub fn library_path(&self) -> Option<&Path> {
        self.loaded.as_ref().map(|loaded| loaded.path.as_path())
    }
}

/// Loads and unloads the native GUI backend for the overlay component
pub trait BackendLoader {
    /// Load the backend; a no-op success when already loaded
    fn try_load(&mut self) -> Result<(), NativeLoadError>;

    /// Unload the backend and remove anything written to disk for it
    fn unload(&mut self);

    /// Whether the backend is loaded
    fn is_loaded(&self) -> bool;
}

impl<L: EmbeddedLibraries> BackendLoader for NativeLoader<L> {
    fn try_load(&mut self) -> Result<(), NativeLoadError> {
        NativeLoader::try_load(self)
    }

    fn unload(&mut self) {
        NativeLoader::unload(self);
    }

    fn is_loaded(&self) -> bool {
        NativeLoader::is_loaded(self)
    }
}

impl<L: EmbeddedLibraries> Drop for NativeLoader<L> {
    fn drop(&mut self) {
        self.unload();
    }
}
