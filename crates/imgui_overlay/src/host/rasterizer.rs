//! Rasterizer state with a first-class scissor toggle
//!
//! The host combines several rasterizer settings into one state object before
//! it reaches the device. Scissor testing is one of those settings, so UI
//! clipping can be switched on for the overlay's draw and back off afterwards
//! without touching anything else.

/// Triangle culling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CullMode {
    /// Draw both windings
    None,
    /// Cull clockwise faces
    #[default]
    CullClockwiseFace,
    /// Cull counter-clockwise faces
    CullCounterClockwiseFace,
}

/// Low-level rasterizer state currently bound on the device
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NativeRasterizerState {
    /// Culling
    pub cull_mode: CullMode,
    /// Constant depth bias
    pub depth_bias: f32,
    /// Slope-scaled depth bias
    pub slope_scale_depth_bias: f32,
    /// Whether fragments outside the scissor rectangle are discarded
    pub scissor_test_enable: bool,
}

/// Host-side rasterizer settings, combined and applied to the device
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RasterizerCombiner {
    /// Culling
    pub cull_mode: CullMode,
    /// Constant depth bias
    pub depth_bias: f32,
    /// Slope-scaled depth bias
    pub slope_scale_depth_bias: f32,
    scissor_test_enable: bool,
}

impl RasterizerCombiner {
    /// Whether scissor testing is requested; `false` until set
    pub const fn scissor_test_enable(&self) -> bool {
        self.scissor_test_enable
    }

    /// Request scissor testing on or off for subsequent applies
    pub fn set_scissor_test_enable(&mut self, enabled: bool) {
        self.scissor_test_enable = enabled;
    }

    /// Write the combined settings onto the device's active state
    ///
    /// Does nothing when the device has no active low-level state.
    pub fn apply_to(&self, native: Option<&mut NativeRasterizerState>) {
        if let Some(state) = native {
            state.cull_mode = self.cull_mode;
            state.depth_bias = self.depth_bias;
            state.slope_scale_depth_bias = self.slope_scale_depth_bias;
            state.scissor_test_enable = self.scissor_test_enable;
        }
    }
}
