//! Per-frame glue between the GUI library and the host renderer
//!
//! Lifecycle: `Uninitialized -> Ready -> (InFrame -> Ready)* -> Disposed`.
//! The host calls [`FrameBridge::before_layout`] before its UI code runs and
//! [`FrameBridge::after_layout`] at the overlay's slot in the draw order.

use thiserror::Error;

use crate::config::{is_positive, OverlayConfig, StyleConfig, DEFAULT_WHEEL_DELTA};
use crate::foundation::time::{FrameTime, FALLBACK_FRAME_TIME};
use crate::gui::{GuiBackend, GuiError, TextureId};
use crate::host::{DeviceError, GraphicsDevice, HostInput, TextureKey, TextureRegistry};
use crate::input::{CaptureState, InputTranslator, KeyMap};
use crate::render::{translate_draw_data, Mesh, MeshRenderer};
use crate::textures::TextureBindings;

/// Framebuffer pixels per display unit; HiDPI scaling is not supported
const FRAMEBUFFER_SCALE: [f32; 2] = [1.0, 1.0];

/// Frame bridge errors
#[derive(Error, Debug)]
pub enum BridgeError {
    /// An operation that needs the GUI context ran before `initialize`
    #[error("Frame bridge is not initialized")]
    NotInitialized,

    /// `initialize` ran twice
    #[error("Frame bridge is already initialized")]
    AlreadyInitialized,

    /// `before_layout` ran while the previous frame was still open
    #[error("A GUI frame is already open")]
    FrameAlreadyOpen,

    /// The bridge has been disposed
    #[error("Frame bridge has been disposed")]
    Disposed,

    /// The font atlas pixels do not form an RGBA8 image
    #[error("Invalid font atlas: {0}")]
    InvalidFontAtlas(String),

    /// GUI library failure
    #[error("GUI error: {0}")]
    Gui(#[from] GuiError),

    /// Host device failure
    #[error("Device error: {0}")]
    Device(#[from] DeviceError),
}

/// Lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    /// No GUI context yet
    Uninitialized,
    /// Context created, no frame open
    Ready,
    /// A frame is open and accepting UI calls
    InFrame,
    /// Resources released
    Disposed,
}

/// Owns the GUI context and every piece of per-frame state around it
pub struct FrameBridge<G: GuiBackend> {
    gui: G,
    state: BridgeState,
    style: StyleConfig,
    fallback_frame_time: f32,
    wheel_delta: f32,
    input: Option<InputTranslator>,
    bindings: TextureBindings,
    font_texture: Option<TextureKey>,
    mesh: Mesh,
    renderer: MeshRenderer,
    display_size: [f32; 2],
}

impl<G: GuiBackend> FrameBridge<G> {
    /// Wrap `gui`; nothing is created until [`FrameBridge::initialize`]
    pub fn new(gui: G, config: &OverlayConfig) -> Self {
        Self {
            gui,
            state: BridgeState::Uninitialized,
            style: config.style.clone(),
            fallback_frame_time: positive_or(config.fallback_frame_time, FALLBACK_FRAME_TIME, "fallback_frame_time"),
            wheel_delta: positive_or(config.wheel_delta, DEFAULT_WHEEL_DELTA, "wheel_delta"),
            input: None,
            bindings: TextureBindings::new(),
            font_texture: None,
            mesh: Mesh::overlay(),
            renderer: MeshRenderer::new(),
            display_size: [0.0, 0.0],
        }
    }

    /// Create the GUI context, apply the style and build the key table
    ///
    /// Once per bridge; a second call fails with
    /// [`BridgeError::AlreadyInitialized`].
    pub fn initialize(&mut self) -> Result<(), BridgeError> {
        match self.state {
            BridgeState::Uninitialized => {}
            BridgeState::Disposed => return Err(BridgeError::Disposed),
            BridgeState::Ready | BridgeState::InFrame => return Err(BridgeError::AlreadyInitialized),
        }

        self.gui.create_context()?;
        self.gui.apply_style(&self.style);
        self.input = Some(InputTranslator::new(KeyMap::build(), self.wheel_delta));
        self.state = BridgeState::Ready;

        log::info!("GUI context created");
        Ok(())
    }

    /// Upload the GUI font atlas as a host texture and register its handle
    ///
    /// Replaces the previous atlas texture if one exists.
    pub fn rebuild_font_atlas(&mut self, device: &mut impl GraphicsDevice) -> Result<TextureId, BridgeError> {
        self.require_context()?;

        let atlas = self.gui.font_atlas_rgba32()?;
        if atlas.bytes_per_pixel != 4 {
            return Err(BridgeError::InvalidFontAtlas(format!(
                "expected 4 bytes per pixel, got {}",
                atlas.bytes_per_pixel
            )));
        }
        let image = image::RgbaImage::from_raw(atlas.width, atlas.height, atlas.pixels).ok_or_else(|| {
            BridgeError::InvalidFontAtlas(format!("pixel data does not fill {}x{}", atlas.width, atlas.height))
        })?;

        if let Some(previous) = self.font_texture.take() {
            self.bindings.unbind(previous);
            device.destroy_texture(previous);
        }

        let texture = device.create_texture(image.width(), image.height(), image.as_raw())?;
        let id = self.bindings.bind(texture, &*device);
        self.font_texture = Some(texture);

        self.gui.set_font_texture_id(id);
        self.gui.clear_font_tex_data();

        log::info!("Uploaded {}x{} font atlas as handle {:#x}", image.width(), image.height(), id.0);
        Ok(id)
    }

    /// Feed timing, input and display size to the GUI and open a frame
    ///
    /// Returns the capture flags applied to the host for this frame.
    pub fn before_layout(
        &mut self,
        frame_time: FrameTime,
        host: &mut impl HostInput,
        device: &impl GraphicsDevice,
    ) -> Result<CaptureState, BridgeError> {
        match self.state {
            BridgeState::Ready => {}
            BridgeState::Uninitialized => return Err(BridgeError::NotInitialized),
            BridgeState::Disposed => return Err(BridgeError::Disposed),
            BridgeState::InFrame => {
                log::error!("before_layout called while a GUI frame is already open");
                return Err(BridgeError::FrameAlreadyOpen);
            }
        }
        let input = self.input.as_mut().ok_or(BridgeError::NotInitialized)?;

        self.gui.set_delta_time(frame_time.delta_time(self.fallback_frame_time));
        let capture = input.update(host, &mut self.gui);

        let (width, height) = device.back_buffer_size();
        #[allow(clippy::cast_precision_loss)]
        let display_size = [width as f32, height as f32];
        self.display_size = display_size;
        self.gui.set_display_size(display_size[0], display_size[1]);
        self.gui.set_display_framebuffer_scale(FRAMEBUFFER_SCALE[0], FRAMEBUFFER_SCALE[1]);

        self.gui.new_frame();
        self.state = BridgeState::InFrame;
        Ok(capture)
    }

    /// Forward a character from the host's text-input event
    ///
    /// Returns whether the GUI received it.
    pub fn handle_text_input(&mut self, c: char) -> bool {
        match self.state {
            BridgeState::Ready | BridgeState::InFrame => InputTranslator::forward_character(&mut self.gui, c),
            BridgeState::Uninitialized | BridgeState::Disposed => false,
        }
    }

    /// Close the open frame and draw it
    ///
    /// Does nothing and returns `Ok(0)` when no frame is open. Otherwise
    /// returns the number of groups drawn.
    pub fn after_layout(&mut self, device: &mut impl GraphicsDevice) -> Result<usize, BridgeError> {
        if self.state != BridgeState::InFrame {
            return Ok(0);
        }
        self.state = BridgeState::Ready;

        let mut draw_data = self.gui.render();
        self.bindings.sweep_dead(&*device);
        draw_data.scale_clip_rects(FRAMEBUFFER_SCALE);

        let stats = translate_draw_data(&draw_data, &mut self.bindings, &*device, &mut self.mesh);
        log::debug!(
            "Frame produced {} group(s), {} primitive(s) from {} list(s), {} vertices",
            stats.groups,
            stats.primitives,
            draw_data.cmd_lists_count(),
            draw_data.total_vtx_count()
        );

        Ok(self.renderer.render(device, &self.mesh, self.display_size)?)
    }

    /// Release the font texture, the mesh and the GUI context
    ///
    /// Safe to call more than once.
    pub fn dispose(&mut self, device: &mut impl GraphicsDevice) {
        if self.state == BridgeState::Disposed {
            return;
        }

        if let Some(font) = self.font_texture.take() {
            self.bindings.unbind(font);
            device.destroy_texture(font);
        }
        self.mesh.clear_groups();
        if self.state != BridgeState::Uninitialized {
            self.gui.destroy_context();
        }
        self.state = BridgeState::Disposed;

        log::info!("Frame bridge disposed");
    }

    /// Handle for showing `texture` in the GUI
    pub fn bind_texture(&mut self, texture: TextureKey, registry: &impl TextureRegistry) -> TextureId {
        self.bindings.bind(texture, registry)
    }

    /// Forget the handle of `texture`
    pub fn unbind_texture(&mut self, texture: TextureKey) -> bool {
        self.bindings.unbind(texture)
    }

    /// Texture currently behind `id`
    pub fn bound_texture(&self, id: TextureId) -> Option<TextureKey> {
        self.bindings.peek(id)
    }

    /// Lifecycle state
    pub fn state(&self) -> BridgeState {
        self.state
    }

    /// Whether a frame is open for UI calls
    pub fn is_frame_open(&self) -> bool {
        self.state == BridgeState::InFrame
    }

    /// The GUI library
    pub fn gui(&self) -> &G {
        &self.gui
    }

    /// The GUI library, for issuing UI calls
    pub fn gui_mut(&mut self) -> &mut G {
        &mut self.gui
    }

    /// Host texture holding the font atlas
    pub fn font_texture(&self) -> Option<TextureKey> {
        self.font_texture
    }

    /// Mesh built by the last drawn frame
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Texture binding table
    pub fn bindings(&self) -> &TextureBindings {
        &self.bindings
    }

    /// Renderer state, including the effect's matrices between passes
    pub fn renderer(&self) -> &MeshRenderer {
        &self.renderer
    }

    fn require_context(&self) -> Result<(), BridgeError> {
        match self.state {
            BridgeState::Ready | BridgeState::InFrame => Ok(()),
            BridgeState::Uninitialized => Err(BridgeError::NotInitialized),
            BridgeState::Disposed => Err(BridgeError::Disposed),
        }
    }
}

fn positive_or(value: f32, fallback: f32, name: &str) -> f32 {
    if is_positive(value) {
        value
    } else {
        log::warn!("Ignoring {} = {}; using {}", name, value, fallback);
        fallback
    }
}
