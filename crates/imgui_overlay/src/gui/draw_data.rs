//! Draw-command-list batch produced by the GUI library once per frame

use bytemuck::{Pod, Zeroable};

/// Opaque texture reference exchanged with the GUI library
///
/// Minted by [`TextureBindings`](crate::textures::TextureBindings); `0` is the
/// null handle and is never minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureId(pub u64);

impl TextureId {
    /// Handle that refers to no texture
    pub const NULL: Self = Self(0);

    /// Whether this is the null handle
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

/// GUI-side vertex: screen position, texture coordinate, packed color
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct DrawVert {
    /// Screen-space position in pixels
    pub pos: [f32; 2],
    /// Texture coordinate
    pub uv: [f32; 2],
    /// Packed RGBA8, red in the low byte
    pub col: u32,
}

/// GUI index type
pub type DrawIdx = u16;

/// One draw call inside a command list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCmd {
    /// Number of indices to draw
    pub elem_count: u32,
    /// First index inside the list's index buffer
    pub idx_offset: u32,
    /// Clip bounds as `[min_x, min_y, max_x, max_y]`
    pub clip_rect: [f32; 4],
    /// Texture to sample
    pub texture_id: TextureId,
}

/// Geometry and draw calls for one GUI window/layer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    /// Vertices shared by every command in this list
    pub vtx_buffer: Vec<DrawVert>,
    /// Indices shared by every command in this list
    pub idx_buffer: Vec<DrawIdx>,
    /// Draw calls in submission order
    pub cmd_buffer: Vec<DrawCmd>,
}

/// Whole-frame output of the GUI library
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawData {
    /// Command lists in painter's order
    pub cmd_lists: Vec<DrawList>,
    /// Size of the display the frame was laid out for
    pub display_size: [f32; 2],
}

impl DrawData {
    /// Number of command lists
    pub fn cmd_lists_count(&self) -> usize {
        self.cmd_lists.len()
    }

    /// Total vertices across all lists
    pub fn total_vtx_count(&self) -> usize {
        self.cmd_lists.iter().map(|list| list.vtx_buffer.len()).sum()
    }

    /// Scale every clip rectangle from GUI coordinates into framebuffer pixels
    pub fn scale_clip_rects(&mut self, scale: [f32; 2]) {
        for cmd in self.cmd_lists.iter_mut().flat_map(|list| list.cmd_buffer.iter_mut()) {
            cmd.clip_rect[0] *= scale[0];
            cmd.clip_rect[1] *= scale[1];
            cmd.clip_rect[2] *= scale[0];
            cmd.clip_rect[3] *= scale[1];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_clip_rects() {
        let mut data = DrawData {
            cmd_lists: vec![DrawList {
                cmd_buffer: vec![DrawCmd {
                    elem_count: 3,
                    idx_offset: 0,
                    clip_rect: [1.0, 2.0, 3.0, 4.0],
                    texture_id: TextureId::NULL,
                }],
                ..DrawList::default()
            }],
            display_size: [100.0, 100.0],
        };

        assert_eq!(data.cmd_lists_count(), 1);
        data.scale_clip_rects([2.0, 0.5]);
        assert_eq!(data.cmd_lists[0].cmd_buffer[0].clip_rect, [2.0, 1.0, 6.0, 2.0]);
    }

    #[test]
    fn test_vertex_layout_is_packed() {
        assert_eq!(std::mem::size_of::<DrawVert>(), 20);
    }
}
