//! Host device state -> GUI input events
//!
//! Polling, not edge-triggered: every frame each mapped key is reported with
//! its current state, so held keys repeat their "down" event.

use crate::gui::GuiInput;
use crate::host::{HostInput, MouseButtons};

use super::key_map::KeyMap;

/// Character reserved for focus navigation, never forwarded as text
const FOCUS_NAVIGATION_CHAR: char = '\t';

/// Capture flags reported by the GUI for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaptureState {
    /// GUI wants exclusive mouse input
    pub wants_mouse: bool,
    /// GUI wants exclusive keyboard input
    pub wants_keyboard: bool,
}

impl CaptureState {
    /// Read the flags from the GUI
    pub fn from_gui(gui: &impl GuiInput) -> Self {
        Self {
            wants_mouse: gui.wants_capture_mouse(),
            wants_keyboard: gui.wants_capture_keyboard(),
        }
    }

    /// Whether the engine's own input consumers may run
    pub const fn engine_input_enabled(self) -> bool {
        !(self.wants_mouse || self.wants_keyboard)
    }
}

/// Feeds polled device state into the GUI and drives input capture
#[derive(Debug, Clone)]
pub struct InputTranslator {
    key_map: KeyMap,
    wheel_delta: f32,
    previous_scroll_wheel_value: Option<i32>,
}

impl InputTranslator {
    /// Create a translator
    ///
    /// `wheel_delta` is the raw wheel counter change that equals one notch.
    pub fn new(key_map: KeyMap, wheel_delta: f32) -> Self {
        Self {
            key_map,
            wheel_delta,
            previous_scroll_wheel_value: None,
        }
    }

    /// Poll the host devices, push events into the GUI and apply capture
    ///
    /// Returns the capture flags that were applied.
    pub fn update(&mut self, host: &mut impl HostInput, gui: &mut impl GuiInput) -> CaptureState {
        self.push_mouse(&*host, gui);
        self.push_keyboard(&*host, gui);

        let capture = CaptureState::from_gui(&*gui);
        Self::apply_capture(host, capture);
        capture
    }

    /// Forward a text-input character unless it is reserved for navigation
    ///
    /// Returns whether the character reached the GUI.
    pub fn forward_character(gui: &mut impl GuiInput, c: char) -> bool {
        if c == FOCUS_NAVIGATION_CHAR {
            return false;
        }
        gui.add_input_character(c);
        true
    }

    /// Suppress or restore the engine's input consumers and cursor
    ///
    /// Applied every frame, not only on change.
    pub fn apply_capture(host: &mut impl HostInput, capture: CaptureState) {
        host.set_input_consumers_enabled(capture.engine_input_enabled());
        host.set_mouse_visible(capture.wants_mouse);
    }

    /// The key table in use
    pub fn key_map(&self) -> &KeyMap {
        &self.key_map
    }

    #[allow(clippy::cast_precision_loss)]
    fn push_mouse(&mut self, host: &impl HostInput, gui: &mut impl GuiInput) {
        let mouse = host.mouse_state();

        gui.add_mouse_pos_event(mouse.x as f32, mouse.y as f32);
        for (index, button) in MouseButtons::GUI_ORDER.iter().enumerate() {
            gui.add_mouse_button_event(index, mouse.buttons.contains(*button));
        }

        // The first poll only seeds the accumulator; the host counter may wrap
        let previous = self.previous_scroll_wheel_value.unwrap_or(mouse.scroll_wheel_value);
        let notches = mouse.scroll_wheel_value.wrapping_sub(previous) as f32 / self.wheel_delta;
        gui.add_mouse_wheel_event(0.0, notches);
        self.previous_scroll_wheel_value = Some(mouse.scroll_wheel_value);
    }

    fn push_keyboard(&self, host: &impl HostInput, gui: &mut impl GuiInput) {
        let keyboard = host.keyboard_state();

        for (key, gui_key) in self.key_map.iter() {
            gui.add_key_event(gui_key, keyboard.is_key_down(key));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::GuiKey;
    use crate::host::{KeyCode, KeyboardState, MouseState};
    use crate::tests::mocks::{GuiEvent, MockGui, MockInput};

    fn translator() -> InputTranslator {
        InputTranslator::new(KeyMap::build(), 120.0)
    }

    #[test]
    fn test_mouse_position_and_buttons() {
        let mut host = MockInput::default();
        host.mouse = MouseState {
            x: 40,
            y: 25,
            buttons: MouseButtons::LEFT | MouseButtons::EXTRA2,
            scroll_wheel_value: 0,
        };
        let mut gui = MockGui::default();

        translator().update(&mut host, &mut gui);

        assert!(gui.events.contains(&GuiEvent::MousePos(40.0, 25.0)));
        let buttons: Vec<_> = gui
            .events
            .iter()
            .filter_map(|event| match event {
                GuiEvent::MouseButton(index, down) => Some((*index, *down)),
                _ => None,
            })
            .collect();
        assert_eq!(buttons, vec![(0, true), (1, false), (2, false), (3, false), (4, true)]);
    }

    #[test]
    fn test_wheel_delta_in_notches() {
        let mut host = MockInput::default();
        host.mouse.scroll_wheel_value = 480;
        let mut gui = MockGui::default();
        let mut translator = translator();

        translator.update(&mut host, &mut gui);
        assert!(gui.events.contains(&GuiEvent::MouseWheel(0.0, 0.0)));

        gui.events.clear();
        host.mouse.scroll_wheel_value = 240;
        translator.update(&mut host, &mut gui);
        assert!(gui.events.contains(&GuiEvent::MouseWheel(0.0, -2.0)));

        gui.events.clear();
        host.mouse.scroll_wheel_value = 300;
        translator.update(&mut host, &mut gui);
        assert!(gui.events.contains(&GuiEvent::MouseWheel(0.0, 0.5)));
    }

    #[test]
    fn test_wheel_counter_wraparound_is_one_notch() {
        let mut host = MockInput::default();
        host.mouse.scroll_wheel_value = i32::MAX - 60;
        let mut gui = MockGui::default();
        let mut translator = translator();

        translator.update(&mut host, &mut gui);

        gui.events.clear();
        host.mouse.scroll_wheel_value = i32::MIN + 59;
        translator.update(&mut host, &mut gui);
        assert!(gui.events.contains(&GuiEvent::MouseWheel(0.0, 1.0)));

        gui.events.clear();
        host.mouse.scroll_wheel_value = i32::MAX - 60;
        translator.update(&mut host, &mut gui);
        assert!(gui.events.contains(&GuiEvent::MouseWheel(0.0, -1.0)));
    }

    #[test]
    fn test_every_mapped_key_reported_each_frame() {
        let mut host = MockInput::default();
        host.keyboard = KeyboardState::from_pressed([KeyCode::A, KeyCode::LEFT_SHIFT]);
        let mut gui = MockGui::default();
        let mut translator = translator();

        for _ in 0..2 {
            gui.events.clear();
            translator.update(&mut host, &mut gui);

            let keys: Vec<_> = gui
                .events
                .iter()
                .filter_map(|event| match event {
                    GuiEvent::Key(key, down) => Some((*key, *down)),
                    _ => None,
                })
                .collect();
            assert_eq!(keys.len(), translator.key_map().len());
            assert!(keys.contains(&(GuiKey::A, true)));
            assert!(keys.contains(&(GuiKey::MOD_SHIFT, true)));
            assert!(keys.contains(&(GuiKey::ESCAPE, false)));
        }
    }

    #[test]
    fn test_tab_character_is_suppressed() {
        let mut gui = MockGui::default();

        assert!(InputTranslator::forward_character(&mut gui, 'x'));
        assert!(!InputTranslator::forward_character(&mut gui, '\t'));
        assert!(InputTranslator::forward_character(&mut gui, 'é'));

        assert_eq!(gui.characters(), vec!['x', 'é']);
    }

    #[test]
    fn test_capture_toggles_engine_input_both_ways() {
        let mut host = MockInput::default();
        let mut gui = MockGui::default();
        let mut translator = translator();

        gui.wants_mouse = true;
        translator.update(&mut host, &mut gui);
        assert_eq!(host.consumers_enabled, Some(false));
        assert_eq!(host.mouse_visible, Some(true));

        gui.wants_mouse = false;
        translator.update(&mut host, &mut gui);
        assert_eq!(host.consumers_enabled, Some(true));
        assert_eq!(host.mouse_visible, Some(false));

        gui.wants_mouse = true;
        translator.update(&mut host, &mut gui);
        assert_eq!(host.consumers_enabled, Some(false));
    }

    #[test]
    fn test_keyboard_capture_alone_suppresses_engine_input() {
        let mut host = MockInput::default();
        let mut gui = MockGui::default();
        gui.wants_keyboard = true;

        let capture = translator().update(&mut host, &mut gui);

        assert!(!capture.engine_input_enabled());
        assert_eq!(host.consumers_enabled, Some(false));
        assert_eq!(host.mouse_visible, Some(false));
    }

    #[test]
    fn test_capture_applied_every_frame() {
        let mut host = MockInput::default();
        let mut gui = MockGui::default();
        let mut translator = translator();

        translator.update(&mut host, &mut gui);
        translator.update(&mut host, &mut gui);
        translator.update(&mut host, &mut gui);

        assert_eq!(host.capture_calls, 3);
    }
}
