//! Clipped submission of the overlay mesh
//!
//! Every group draws with the scissor rectangle taken from its clip bounds.
//! For the pass only, scissor testing is switched on and the mesh's culling,
//! blend and depth settings replace the device's. The previous flag, culling,
//! rectangle and blend/depth settings come back when the pass ends, including
//! when a draw fails.

use crate::foundation::math::{Mat4, Mat4Ext};
use crate::host::{CullMode, DeviceError, GraphicsDevice};

use super::effect::TexturedEffect;
use super::mesh::{BlendDepthState, Mesh, Rectangle};

/// Device state held for the length of one pass
struct RenderStateScope<'a, D: GraphicsDevice + ?Sized> {
    device: &'a mut D,
    previous_scissor_enable: bool,
    previous_cull_mode: CullMode,
    previous_rect: Rectangle,
    previous_blend_depth: BlendDepthState,
}

impl<'a, D: GraphicsDevice + ?Sized> RenderStateScope<'a, D> {
    fn enter(device: &'a mut D, mesh: &Mesh) -> Self {
        let combiner = device.rasterizer_combiner_mut();
        let previous_scissor_enable = combiner.scissor_test_enable();
        let previous_cull_mode = combiner.cull_mode;
        combiner.set_scissor_test_enable(true);
        combiner.cull_mode = mesh.culling;
        device.apply_rasterizer_state();

        let previous_rect = device.scissor_rectangle();
        let previous_blend_depth = device.blend_depth_state();
        device.set_blend_depth_state(mesh.blend_depth_state());

        Self {
            device,
            previous_scissor_enable,
            previous_cull_mode,
            previous_rect,
            previous_blend_depth,
        }
    }
}

impl<D: GraphicsDevice + ?Sized> Drop for RenderStateScope<'_, D> {
    fn drop(&mut self) {
        let combiner = self.device.rasterizer_combiner_mut();
        combiner.set_scissor_test_enable(self.previous_scissor_enable);
        combiner.cull_mode = self.previous_cull_mode;
        self.device.apply_rasterizer_state();
        self.device.set_scissor_rectangle(self.previous_rect);
        self.device.set_blend_depth_state(self.previous_blend_depth);
    }
}

/// Draws the overlay mesh with its own effect
#[derive(Debug, Default)]
pub struct MeshRenderer {
    effect: TexturedEffect,
}

impl MeshRenderer {
    /// Create a renderer with an unconfigured effect
    pub fn new() -> Self {
        Self::default()
    }

    /// The effect groups are drawn with
    pub fn effect(&self) -> &TexturedEffect {
        &self.effect
    }

    /// Draw every enabled group of `mesh` in order
    ///
    /// The effect uses a top-left-origin orthographic projection for
    /// `display_size` and an identity view during the pass; its previous
    /// matrices are put back afterwards. Returns the number of groups drawn,
    /// or the first draw failure.
    pub fn render<D: GraphicsDevice + ?Sized>(
        &mut self,
        device: &mut D,
        mesh: &Mesh,
        display_size: [f32; 2],
    ) -> Result<usize, DeviceError> {
        let projection = Mat4::screen_projection(display_size[0], display_size[1]);
        let (previous_projection, previous_view) =
            self.effect.force_matrices(Some(projection), Some(Mat4::identity()));

        let result = {
            let mut scope = RenderStateScope::enter(device, mesh);
            draw_groups(&mut *scope.device, mesh, &self.effect)
        };

        self.effect.force_matrices(previous_projection, previous_view);

        match &result {
            Ok(drawn) => log::trace!("Drew {} of {} overlay group(s)", drawn, mesh.group_count()),
            Err(e) => log::error!("Overlay draw failed: {}", e),
        }
        result
    }
}

fn draw_groups<D: GraphicsDevice + ?Sized>(
    device: &mut D,
    mesh: &Mesh,
    effect: &TexturedEffect,
) -> Result<usize, DeviceError> {
    let mut drawn = 0;
    for group in mesh.groups() {
        if !group.is_drawable() {
            continue;
        }
        if let Some(rect) = group.scissor {
            device.set_scissor_rectangle(rect);
        }
        device.draw_group(group, effect)?;
        drawn += 1;
    }
    Ok(drawn)
}
