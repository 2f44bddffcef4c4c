//! Math utilities and types
//!
//! Provides the vector and matrix types used by the overlay's projection and
//! adapter layers.

pub use nalgebra::{Matrix4, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Extension trait for Mat4 with screen-space projection helpers
pub trait Mat4Ext {
    /// Create an off-center orthographic projection
    ///
    /// Depth maps `[near, far]` onto `[0, 1]`, the convention the host's
    /// textured effect expects.
    fn orthographic_off_center(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4;

    /// Orthographic projection for a screen of `width` x `height` pixels with the
    /// origin at the top-left corner and y growing downward
    fn screen_projection(width: f32, height: f32) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn orthographic_off_center(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
        let mut result = Mat4::identity();

        result[(0, 0)] = 2.0 / (right - left);
        result[(1, 1)] = 2.0 / (top - bottom);
        result[(2, 2)] = 1.0 / (near - far);
        result[(0, 3)] = (left + right) / (left - right);
        result[(1, 3)] = (top + bottom) / (bottom - top);
        result[(2, 3)] = near / (near - far);

        result
    }

    fn screen_projection(width: f32, height: f32) -> Mat4 {
        // bottom = height, top = 0 flips y so GUI coordinates can be used as-is
        Self::orthographic_off_center(0.0, width, height, 0.0, -1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_screen_projection_maps_corners() {
        let projection = Mat4::screen_projection(800.0, 600.0);

        let top_left = projection * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(top_left.x, -1.0);
        assert_relative_eq!(top_left.y, 1.0);

        let bottom_right = projection * Vec4::new(800.0, 600.0, 0.0, 1.0);
        assert_relative_eq!(bottom_right.x, 1.0);
        assert_relative_eq!(bottom_right.y, -1.0);
    }

    #[test]
    fn test_screen_projection_centre_is_origin() {
        let projection = Mat4::screen_projection(1280.0, 720.0);
        let centre = projection * Vec4::new(640.0, 360.0, 0.0, 1.0);

        assert_relative_eq!(centre.x, 0.0);
        assert_relative_eq!(centre.y, 0.0);
        assert_relative_eq!(centre.w, 1.0);
    }
}
