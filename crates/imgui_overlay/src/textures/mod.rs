//! Texture handles exchanged with the GUI library

pub mod bindings;

pub use bindings::TextureBindings;
