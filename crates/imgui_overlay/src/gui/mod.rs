//! GUI library boundary
//!
//! Architecture:
//! - backend: traits the immediate-mode GUI library is driven through
//! - draw_data: per-frame draw-command-list batch it produces
//! - keys: its key-code enumeration

pub mod backend;
pub mod draw_data;
pub mod keys;

pub use backend::{FontAtlasPixels, GuiBackend, GuiError, GuiInput};
pub use draw_data::{DrawCmd, DrawData, DrawIdx, DrawList, DrawVert, TextureId};
pub use keys::GuiKey;
