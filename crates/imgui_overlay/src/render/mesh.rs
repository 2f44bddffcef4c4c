//! Engine-side geometry: vertices, clip rectangles and mesh groups

use std::rc::Rc;

use bytemuck::{Pod, Zeroable};

use crate::gui::DrawVert;
use crate::host::{CullMode, TextureKey};

/// Engine vertex: position, packed color, texture coordinate
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct OverlayVertex {
    /// Position; z is always zero for overlay geometry
    pub position: [f32; 3],
    /// Packed RGBA8, red in the low byte
    pub color: u32,
    /// Texture coordinate
    pub uv: [f32; 2],
}

impl From<DrawVert> for OverlayVertex {
    fn from(vert: DrawVert) -> Self {
        Self {
            position: [vert.pos[0], vert.pos[1], 0.0],
            color: vert.col,
            uv: vert.uv,
        }
    }
}

/// Integer screen rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Rectangle {
    /// Create a rectangle
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Convert float clip bounds `[min_x, min_y, max_x, max_y]`
    ///
    /// Corners are truncated toward zero first, then width and height are
    /// taken between the truncated corners.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_clip_bounds(bounds: [f32; 4]) -> Self {
        let [min_x, min_y, max_x, max_y] = bounds.map(|v| v as i32);
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

/// Primitive assembly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveTopology {
    /// Independent triangles, three indices each
    #[default]
    TriangleList,
}

/// Indexed geometry; the vertex buffer may be shared between groups
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedPrimitives {
    /// Vertices, shared by every group built from the same command list
    pub vertices: Rc<[OverlayVertex]>,
    /// Indices into `vertices`
    pub indices: Vec<u32>,
    /// How the indices form primitives
    pub topology: PrimitiveTopology,
}

impl IndexedPrimitives {
    /// Number of primitives described by the indices
    pub fn primitive_count(&self) -> usize {
        match self.topology {
            PrimitiveTopology::TriangleList => self.indices.len() / 3,
        }
    }
}

/// Blend state for a mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendingMode {
    /// No blending
    #[default]
    Opaque,
    /// Source-over alpha blending
    AlphaBlending,
    /// Additive blending
    Additive,
}

/// Blend and depth settings the device draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlendDepthState {
    /// Blend state
    pub blending: BlendingMode,
    /// Whether fragments are tested against the depth buffer
    pub depth_test: bool,
    /// Whether drawing writes depth
    pub depth_write: bool,
}

impl Default for BlendDepthState {
    fn default() -> Self {
        Self {
            blending: BlendingMode::Opaque,
            depth_test: true,
            depth_write: true,
        }
    }
}

/// One draw call: geometry, texture and the payload the renderer uses as scissor
#[derive(Debug, Clone, PartialEq)]
pub struct MeshGroup {
    /// Disabled groups are skipped by the renderer
    pub enabled: bool,
    /// Geometry to draw
    pub geometry: Option<IndexedPrimitives>,
    /// Texture to sample; `None` draws untextured
    pub texture: Option<TextureKey>,
    /// Clip rectangle applied while this group draws
    pub scissor: Option<Rectangle>,
}

impl Default for MeshGroup {
    fn default() -> Self {
        Self {
            enabled: true,
            geometry: None,
            texture: None,
            scissor: None,
        }
    }
}

impl MeshGroup {
    /// Whether the renderer will draw this group
    pub fn is_drawable(&self) -> bool {
        self.enabled && self.geometry.is_some() && self.scissor.is_some()
    }
}

/// Ordered list of groups plus the render state they share
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    groups: Vec<MeshGroup>,
    /// Blend state
    pub blending: BlendingMode,
    /// Culling
    pub culling: CullMode,
    /// Draw over everything regardless of depth
    pub always_on_top: bool,
    /// Whether drawing writes depth
    pub depth_writes: bool,
}

impl Mesh {
    /// Mesh configured for screen-space UI: alpha blended, unculled,
    /// always on top, no depth writes
    pub fn overlay() -> Self {
        Self {
            groups: Vec::new(),
            blending: BlendingMode::AlphaBlending,
            culling: CullMode::None,
            always_on_top: true,
            depth_writes: false,
        }
    }

    /// Blend and depth settings this mesh must be drawn with
    pub fn blend_depth_state(&self) -> BlendDepthState {
        BlendDepthState {
            blending: self.blending,
            depth_test: !self.always_on_top,
            depth_write: self.depth_writes,
        }
    }

    /// Append an empty group and return it for filling in
    pub fn add_group(&mut self) -> &mut MeshGroup {
        self.groups.push(MeshGroup::default());
        let last = self.groups.len() - 1;
        &mut self.groups[last]
    }

    /// Remove every group
    pub fn clear_groups(&mut self) {
        self.groups.clear();
    }

    /// Groups in draw order
    pub fn groups(&self) -> &[MeshGroup] {
        &self.groups
    }

    /// Number of groups
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::overlay()
    }
}
