//! Host engine boundary
//!
//! The host game engine is consumed as a black box through these traits: input
//! devices, texture arena, scissor/rasterizer state and group drawing. The host
//! calls into the overlay at fixed points of its frame loop.

pub mod device;
pub mod input;
pub mod rasterizer;

pub use device::{DeviceError, GraphicsDevice, TextureKey, TextureRegistry};
pub use input::{HostInput, KeyCode, KeyboardState, MouseButtons, MouseState};
pub use rasterizer::{CullMode, NativeRasterizerState, RasterizerCombiner};
