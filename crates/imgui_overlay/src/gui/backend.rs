//! GUI library interface
//!
//! The immediate-mode GUI library is consumed as a black box. These traits are
//! the only surface the overlay touches: input ingestion, frame begin/end,
//! style, font atlas extraction and the per-frame draw batch.

use thiserror::Error;

use super::draw_data::{DrawData, TextureId};
use super::keys::GuiKey;
use crate::config::StyleConfig;

/// Errors reported by the GUI library
#[derive(Error, Debug)]
pub enum GuiError {
    /// The library could not create its context
    #[error("GUI context creation failed: {0}")]
    ContextCreation(String),

    /// The font atlas has no pixel data (already cleared or never built)
    #[error("Font atlas has no pixel data")]
    MissingFontAtlas,
}

/// Rasterized font atlas as handed out by the GUI library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontAtlasPixels {
    /// Atlas width in pixels
    pub width: u32,
    /// Atlas height in pixels
    pub height: u32,
    /// Bytes per pixel; RGBA8 atlases report 4
    pub bytes_per_pixel: u32,
    /// Row-major pixel data
    pub pixels: Vec<u8>,
}

/// Input-event ingestion side of the GUI library
pub trait GuiInput {
    /// Absolute mouse position in screen pixels
    fn add_mouse_pos_event(&mut self, x: f32, y: f32);

    /// Button state; index 0..5 is left, right, middle, extra 1, extra 2
    fn add_mouse_button_event(&mut self, button: usize, down: bool);

    /// Wheel movement in notches
    fn add_mouse_wheel_event(&mut self, horizontal: f32, vertical: f32);

    /// Key state
    fn add_key_event(&mut self, key: GuiKey, down: bool);

    /// Text input character
    fn add_input_character(&mut self, c: char);

    /// Whether the GUI wants exclusive mouse input
    fn wants_capture_mouse(&self) -> bool;

    /// Whether the GUI wants exclusive keyboard input
    fn wants_capture_keyboard(&self) -> bool;
}

/// Context, frame and output side of the GUI library
pub trait GuiBackend: GuiInput {
    /// Create the library context; called once per process
    fn create_context(&mut self) -> Result<(), GuiError>;

    /// Destroy the library context
    fn destroy_context(&mut self);

    /// Push the style table into the context
    fn apply_style(&mut self, style: &StyleConfig);

    /// Seconds since the previous frame; always positive
    fn set_delta_time(&mut self, delta_time: f32);

    /// Display size in pixels
    fn set_display_size(&mut self, width: f32, height: f32);

    /// Framebuffer pixels per display unit
    fn set_display_framebuffer_scale(&mut self, x: f32, y: f32);

    /// Rasterized font atlas in RGBA8
    fn font_atlas_rgba32(&mut self) -> Result<FontAtlasPixels, GuiError>;

    /// Register the handle the font atlas is drawn with
    fn set_font_texture_id(&mut self, id: TextureId);

    /// Release the library's CPU copy of the atlas pixels
    fn clear_font_tex_data(&mut self);

    /// Open a new frame
    fn new_frame(&mut self);

    /// Close the current frame and return its draw batch
    fn render(&mut self) -> DrawData;
}
