//! Top-level overlay component
//!
//! The host registers the overlay at the end of its draw order and calls it at
//! three points per frame: `pre_draw` before game UI code runs, the text-input
//! hook as characters arrive, and `draw` at the overlay's draw-order slot.
//! Graphics resources are created lazily on the first `draw`, since the device
//! may not accept uploads at component-initialization time.

use crate::config::OverlayConfig;
use crate::foundation::time::FrameTime;
use crate::frame::{BridgeError, FrameBridge};
use crate::gui::GuiBackend;
use crate::host::{GraphicsDevice, HostInput};
use crate::input::CaptureState;
use crate::native::{BackendLoader, EmbeddedLibraries, NativeLoader};

/// Component lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    /// Constructed, `initialize` not yet called
    Created,
    /// Native backend unavailable or setup failed; every call is a no-op
    Disabled,
    /// Backend loaded, GPU setup waits for the next draw
    PendingInit,
    /// Drawing frames
    Running,
    /// Disposed
    ShutDown,
}

/// GUI overlay drawn on top of the host's scene
pub struct Overlay<G: GuiBackend, B: BackendLoader> {
    config: OverlayConfig,
    loader: B,
    pending_gui: Option<G>,
    bridge: Option<FrameBridge<G>>,
    state: OverlayState,
}

impl<G: GuiBackend, L: EmbeddedLibraries> Overlay<G, NativeLoader<L>> {
    /// Overlay that extracts its backend from `libraries`
    pub fn with_embedded(config: OverlayConfig, gui: G, libraries: L) -> Self {
        let loader = NativeLoader::new(libraries, config.native.clone());
        Self::new(config, gui, loader)
    }
}

impl<G: GuiBackend, B: BackendLoader> Overlay<G, B> {
    /// Create the component; nothing is loaded until [`Overlay::initialize`]
    pub fn new(config: OverlayConfig, gui: G, loader: B) -> Self {
        Self {
            config,
            loader,
            pending_gui: Some(gui),
            bridge: None,
            state: OverlayState::Created,
        }
    }

    /// Load the native backend and schedule GPU setup for the next draw
    ///
    /// A load failure disables the overlay for the rest of the session; the
    /// host keeps running.
    pub fn initialize(&mut self) {
        if self.state != OverlayState::Created {
            return;
        }

        match self.loader.try_load() {
            Ok(()) => {
                self.state = OverlayState::PendingInit;
                log::debug!("Overlay initialization deferred to next draw");
            }
            Err(e) => {
                log::warn!("Native GUI backend unavailable, overlay disabled: {}", e);
                self.state = OverlayState::Disabled;
            }
        }
    }

    /// Open the GUI frame for this update
    ///
    /// Returns the capture flags applied to the host, or `None` while the
    /// overlay is not running.
    pub fn pre_draw(
        &mut self,
        frame_time: FrameTime,
        host: &mut impl HostInput,
        device: &impl GraphicsDevice,
    ) -> Result<Option<CaptureState>, BridgeError> {
        if self.state != OverlayState::Running {
            return Ok(None);
        }
        match self.bridge.as_mut() {
            Some(bridge) => bridge.before_layout(frame_time, host, device).map(Some),
            None => Ok(None),
        }
    }

    /// Host text-input hook
    pub fn handle_text_input(&mut self, c: char) -> bool {
        match self.bridge.as_mut() {
            Some(bridge) if self.state == OverlayState::Running => bridge.handle_text_input(c),
            _ => false,
        }
    }

    /// Run pending setup, then build and draw this frame's UI
    ///
    /// `build_ui` only runs while a frame is open, so the first draw after
    /// setup, which has no matching `pre_draw`, draws nothing. Returns the
    /// number of groups drawn.
    pub fn draw(
        &mut self,
        device: &mut impl GraphicsDevice,
        build_ui: impl FnOnce(&mut G),
    ) -> Result<usize, BridgeError> {
        if self.state == OverlayState::PendingInit {
            self.run_deferred_init(device)?;
        }
        if self.state != OverlayState::Running {
            return Ok(0);
        }
        let Some(bridge) = self.bridge.as_mut() else {
            return Ok(0);
        };

        if bridge.is_frame_open() {
            build_ui(bridge.gui_mut());
        }
        bridge.after_layout(device)
    }

    /// Release GPU resources and unload the native backend
    pub fn dispose(&mut self, device: &mut impl GraphicsDevice) {
        if self.state == OverlayState::ShutDown {
            return;
        }
        if let Some(bridge) = self.bridge.as_mut() {
            bridge.dispose(device);
        }
        self.loader.unload();
        self.state = OverlayState::ShutDown;
        log::info!("Overlay shut down");
    }

    /// Position in the host's draw order
    pub fn draw_order(&self) -> i32 {
        self.config.draw_order
    }

    /// Lifecycle state
    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Frame bridge, once setup has run
    pub fn bridge(&self) -> Option<&FrameBridge<G>> {
        self.bridge.as_ref()
    }

    /// Frame bridge, for binding textures from UI code
    pub fn bridge_mut(&mut self) -> Option<&mut FrameBridge<G>> {
        self.bridge.as_mut()
    }

    /// Native backend loader
    pub fn loader(&self) -> &B {
        &self.loader
    }

    fn run_deferred_init(&mut self, device: &mut impl GraphicsDevice) -> Result<(), BridgeError> {
        let Some(gui) = self.pending_gui.take() else {
            self.state = OverlayState::Disabled;
            return Ok(());
        };

        let mut bridge = FrameBridge::new(gui, &self.config);
        let result = bridge.initialize().and_then(|()| bridge.rebuild_font_atlas(device).map(|_| ()));

        match result {
            Ok(()) => {
                self.bridge = Some(bridge);
                self.state = OverlayState::Running;
                log::info!("Overlay initialized at draw order {}", self.config.draw_order);
                Ok(())
            }
            Err(e) => {
                log::error!("Overlay setup failed, overlay disabled: {}", e);
                bridge.dispose(device);
                self.state = OverlayState::Disabled;
                Err(e)
            }
        }
    }
}
