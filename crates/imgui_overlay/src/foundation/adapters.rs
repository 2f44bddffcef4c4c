//! Value adapters between engine math types and the GUI library's plain arrays
//!
//! Pure conversions, no state. UI code uses these when handing engine
//! positions, sizes and colors to widgets and reading them back.

use super::color::Color;
use super::math::{Vec2, Vec3, Vec4};

/// Convert an engine value into the GUI library's representation
pub trait ToGui {
    /// GUI-side representation
    type Output;

    /// Perform the conversion
    fn to_gui(&self) -> Self::Output;
}

/// Convert a GUI library value back into an engine type
pub trait FromGui<T> {
    /// Perform the conversion
    fn from_gui(value: T) -> Self;
}

impl ToGui for Vec2 {
    type Output = [f32; 2];

    fn to_gui(&self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl ToGui for Vec3 {
    type Output = [f32; 3];

    fn to_gui(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl ToGui for Vec4 {
    type Output = [f32; 4];

    fn to_gui(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl ToGui for Color {
    type Output = [f32; 4];

    fn to_gui(&self) -> [f32; 4] {
        self.to_normalized()
    }
}

impl FromGui<[f32; 2]> for Vec2 {
    fn from_gui(value: [f32; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl FromGui<[f32; 3]> for Vec3 {
    fn from_gui(value: [f32; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl FromGui<[f32; 4]> for Vec4 {
    fn from_gui(value: [f32; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

impl FromGui<[f32; 3]> for Color {
    fn from_gui(value: [f32; 3]) -> Self {
        Self::from_normalized(value[0], value[1], value[2], 1.0)
    }
}

impl FromGui<[f32; 4]> for Color {
    fn from_gui(value: [f32; 4]) -> Self {
        Self::from_normalized(value[0], value[1], value[2], value[3])
    }
}

/// Color without alpha, as three normalized channels
pub fn color_to_gui3(color: Color) -> [f32; 3] {
    let [r, g, b, _] = color.to_normalized();
    [r, g, b]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectors_pass_through_unchanged() {
        let v = Vec2::new(3.5, -2.0);
        assert_eq!(Vec2::from_gui(v.to_gui()), v);

        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.to_gui(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_color_edit_without_alpha_is_opaque() {
        let color = Color::from_gui([0.0, 1.0, 0.0]);
        assert_eq!(color, Color::rgba(0, 255, 0, 255));
        assert_eq!(color_to_gui3(color), [0.0, 1.0, 0.0]);
    }
}
