//! Host graphics device
//!
//! Textures live in a host-owned arena keyed by [`TextureKey`]. A key carries
//! its slot's generation, so once the host destroys a texture the key stops
//! resolving even if the slot is reused.

use thiserror::Error;

use super::rasterizer::RasterizerCombiner;
use crate::render::effect::TexturedEffect;
use crate::render::mesh::{BlendDepthState, MeshGroup, Rectangle};

slotmap::new_key_type! {
    /// Identity of a host texture: arena slot plus generation
    pub struct TextureKey;
}

/// Errors reported by the host graphics device
#[derive(Error, Debug)]
pub enum DeviceError {
    /// Texture allocation or upload failed
    #[error("Texture creation failed: {0}")]
    TextureCreation(String),

    /// A draw call failed
    #[error("Draw call failed: {0}")]
    Draw(String),
}

/// Liveness queries against the host's texture arena
pub trait TextureRegistry {
    /// Whether `key` still names a live texture
    fn is_texture_alive(&self, key: TextureKey) -> bool;
}

/// The parts of the host's graphics device the overlay drives
pub trait GraphicsDevice: TextureRegistry {
    /// Back buffer size in pixels
    fn back_buffer_size(&self) -> (u32, u32);

    /// Create a texture from tightly packed RGBA8 pixels
    fn create_texture(&mut self, width: u32, height: u32, rgba: &[u8]) -> Result<TextureKey, DeviceError>;

    /// Destroy a texture created through [`GraphicsDevice::create_texture`]
    fn destroy_texture(&mut self, key: TextureKey);

    /// Current scissor rectangle
    fn scissor_rectangle(&self) -> Rectangle;

    /// Replace the scissor rectangle
    fn set_scissor_rectangle(&mut self, rect: Rectangle);

    /// Current blend and depth settings
    fn blend_depth_state(&self) -> BlendDepthState;

    /// Replace the blend and depth settings used by subsequent draws
    fn set_blend_depth_state(&mut self, state: BlendDepthState);

    /// The host's combined rasterizer settings
    fn rasterizer_combiner_mut(&mut self) -> &mut RasterizerCombiner;

    /// Push the combined rasterizer settings onto the device
    ///
    /// Implementations call [`RasterizerCombiner::apply_to`] with the device's
    /// active low-level state.
    fn apply_rasterizer_state(&mut self);

    /// Draw one mesh group as a textured triangle list
    fn draw_group(&mut self, group: &MeshGroup, effect: &TexturedEffect) -> Result<(), DeviceError>;
}
