//! Textured-triangle effect with overridable matrices

use crate::foundation::math::Mat4;

/// Shader parameters the host's textured effect draws with
///
/// When a forced matrix is set the host uses it instead of the camera's.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TexturedEffect {
    /// Projection override
    pub forced_projection: Option<Mat4>,
    /// View override
    pub forced_view: Option<Mat4>,
}

impl TexturedEffect {
    /// Effect without overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace both overrides, returning the previous pair
    pub fn force_matrices(&mut self, projection: Option<Mat4>, view: Option<Mat4>) -> (Option<Mat4>, Option<Mat4>) {
        let previous = (self.forced_projection, self.forced_view);
        self.forced_projection = projection;
        self.forced_view = view;
        previous
    }
}
