//! Draw-command-list batch -> mesh groups
//!
//! The mesh is cleared and rebuilt from scratch every frame. Commands inside one
//! list share that list's vertex buffer but each becomes its own group, since
//! texture and clip rectangle can differ per command.

use std::rc::Rc;

use crate::gui::{DrawData, DrawList};
use crate::host::TextureRegistry;
use crate::textures::TextureBindings;

use super::mesh::{IndexedPrimitives, Mesh, OverlayVertex, PrimitiveTopology, Rectangle};

/// Counters for one translation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TranslationStats {
    /// Command lists visited
    pub lists: usize,
    /// Groups appended to the mesh
    pub groups: usize,
    /// Triangles across all appended groups
    pub primitives: usize,
    /// Commands skipped for having no elements
    pub empty_commands: usize,
    /// Commands whose index range fell outside the index buffer
    pub out_of_range_commands: usize,
}

/// Rebuild `mesh` from `draw_data`
///
/// Texture handles resolve through `bindings`; an unknown or stale handle
/// still produces a group, just an untextured one.
pub fn translate_draw_data(
    draw_data: &DrawData,
    bindings: &mut TextureBindings,
    registry: &impl TextureRegistry,
    mesh: &mut Mesh,
) -> TranslationStats {
    mesh.clear_groups();

    let mut stats = TranslationStats::default();
    for list in &draw_data.cmd_lists {
        translate_list(list, bindings, registry, mesh, &mut stats);
        stats.lists += 1;
    }

    log::trace!(
        "Translated {} list(s) into {} group(s) of {} primitive(s), {} empty command(s) skipped",
        stats.lists,
        stats.groups,
        stats.primitives,
        stats.empty_commands
    );
    stats
}

fn translate_list(
    list: &DrawList,
    bindings: &mut TextureBindings,
    registry: &impl TextureRegistry,
    mesh: &mut Mesh,
    stats: &mut TranslationStats,
) {
    if list.cmd_buffer.is_empty() {
        return;
    }

    let vertices: Rc<[OverlayVertex]> = list.vtx_buffer.iter().copied().map(OverlayVertex::from).collect();

    for cmd in &list.cmd_buffer {
        if cmd.elem_count == 0 {
            stats.empty_commands += 1;
            continue;
        }

        let start = cmd.idx_offset as usize;
        let end = start + cmd.elem_count as usize;
        let Some(indices) = list.idx_buffer.get(start..end) else {
            log::warn!(
                "Draw command index range {}..{} exceeds index buffer of {}",
                start,
                end,
                list.idx_buffer.len()
            );
            stats.out_of_range_commands += 1;
            continue;
        };

        let geometry = IndexedPrimitives {
            vertices: Rc::clone(&vertices),
            indices: indices.iter().copied().map(u32::from).collect(),
            topology: PrimitiveTopology::TriangleList,
        };
        stats.primitives += geometry.primitive_count();

        let group = mesh.add_group();
        group.geometry = Some(geometry);
        group.texture = bindings.resolve(cmd.texture_id, registry);
        group.scissor = Some(Rectangle::from_clip_bounds(cmd.clip_rect));
        stats.groups += 1;
    }
}
