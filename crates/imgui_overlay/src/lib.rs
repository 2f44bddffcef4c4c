//! # ImGui Overlay
//!
//! Draws an immediate-mode GUI on top of a host game renderer.
//!
//! ## Features
//!
//! - **Input bridging**: host mouse and keyboard state polled into the GUI each
//!   frame, with the host's own input suppressed while the GUI captures it
//! - **Clipped rendering**: every GUI draw command becomes one scissored mesh
//!   group drawn after the scene
//! - **Texture handles**: generation-checked handles let UI code show host
//!   textures without keeping them alive
//! - **Soft-failing native backend**: a missing platform build disables the
//!   overlay, never the host
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use imgui_overlay::prelude::*;
//!
//! let mut overlay = Overlay::with_embedded(OverlayConfig::default(), gui, StaticLibraries(EMBEDDED));
//! overlay.initialize();
//!
//! // every frame
//! overlay.pre_draw(frame_time, &mut input, &device)?;
//! overlay.draw(&mut device, |gui| build_debug_windows(gui))?;
//!
//! // at shutdown
//! overlay.dispose(&mut device);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod frame;
pub mod gui;
pub mod host;
pub mod input;
pub mod native;
pub mod render;
pub mod textures;

mod overlay;

pub use overlay::{Overlay, OverlayState};

#[cfg(test)]
mod tests;

/// Common imports for hosts embedding the overlay
pub mod prelude {
    pub use crate::{
        config::{Config, OverlayConfig, StyleConfig},
        foundation::time::FrameTime,
        frame::{BridgeError, FrameBridge},
        gui::{GuiBackend, GuiInput, TextureId},
        host::{GraphicsDevice, HostInput, TextureKey, TextureRegistry},
        native::{NativeLoader, StaticLibraries},
        Overlay, OverlayState,
    };
}
