//! Host input devices
//!
//! Polled keyboard/mouse state and the switches the overlay flips when the GUI
//! captures input.

use std::collections::HashSet;

use bitflags::bitflags;

/// Engine key code
///
/// Values follow the host's virtual-key enumeration, where digits, letters,
/// numpad digits and function keys are contiguous ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(pub u8);

#[allow(missing_docs)]
impl KeyCode {
    pub const BACK: Self = Self(8);
    pub const TAB: Self = Self(9);
    pub const ENTER: Self = Self(13);
    pub const CAPS_LOCK: Self = Self(20);
    pub const ESCAPE: Self = Self(27);
    pub const SPACE: Self = Self(32);
    pub const PAGE_UP: Self = Self(33);
    pub const PAGE_DOWN: Self = Self(34);
    pub const END: Self = Self(35);
    pub const HOME: Self = Self(36);
    pub const LEFT: Self = Self(37);
    pub const UP: Self = Self(38);
    pub const RIGHT: Self = Self(39);
    pub const DOWN: Self = Self(40);
    pub const PRINT_SCREEN: Self = Self(44);
    pub const INSERT: Self = Self(45);
    pub const DELETE: Self = Self(46);

    pub const D0: Self = Self(48);
    pub const D9: Self = Self(57);
    pub const A: Self = Self(65);
    pub const Z: Self = Self(90);
    pub const NUM_PAD_0: Self = Self(96);
    pub const NUM_PAD_9: Self = Self(105);

    pub const MULTIPLY: Self = Self(106);
    pub const ADD: Self = Self(107);
    pub const SUBTRACT: Self = Self(109);
    pub const DECIMAL: Self = Self(110);
    pub const DIVIDE: Self = Self(111);

    pub const F1: Self = Self(112);
    pub const F24: Self = Self(135);

    pub const NUM_LOCK: Self = Self(144);
    pub const SCROLL: Self = Self(145);
    pub const LEFT_SHIFT: Self = Self(160);
    pub const LEFT_CONTROL: Self = Self(162);
    pub const LEFT_ALT: Self = Self(164);
    pub const BROWSER_BACK: Self = Self(166);
    pub const BROWSER_FORWARD: Self = Self(167);

    pub const OEM_SEMICOLON: Self = Self(186);
    pub const OEM_PLUS: Self = Self(187);
    pub const OEM_COMMA: Self = Self(188);
    pub const OEM_MINUS: Self = Self(189);
    pub const OEM_PERIOD: Self = Self(190);
    pub const OEM_QUESTION: Self = Self(191);
    pub const OEM_TILDE: Self = Self(192);
    pub const OEM_OPEN_BRACKETS: Self = Self(219);
    pub const OEM_PIPE: Self = Self(220);
    pub const OEM_CLOSE_BRACKETS: Self = Self(221);
    pub const OEM_QUOTES: Self = Self(222);
}

bitflags! {
    /// Mouse buttons currently held
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MouseButtons: u8 {
        /// Left button
        const LEFT = 1 << 0;
        /// Right button
        const RIGHT = 1 << 1;
        /// Middle button
        const MIDDLE = 1 << 2;
        /// First extra (back) button
        const EXTRA1 = 1 << 3;
        /// Second extra (forward) button
        const EXTRA2 = 1 << 4;
    }
}

impl MouseButtons {
    /// Buttons in the GUI library's button-index order
    pub const GUI_ORDER: [Self; 5] = [Self::LEFT, Self::RIGHT, Self::MIDDLE, Self::EXTRA1, Self::EXTRA2];
}

/// Snapshot of the mouse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseState {
    /// Cursor x in window pixels
    pub x: i32,
    /// Cursor y in window pixels
    pub y: i32,
    /// Held buttons
    pub buttons: MouseButtons,
    /// Cumulative wheel counter since startup
    pub scroll_wheel_value: i32,
}

/// Snapshot of the keyboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    /// Build a snapshot from the keys currently held
    pub fn from_pressed(keys: impl IntoIterator<Item = KeyCode>) -> Self {
        Self { pressed: keys.into_iter().collect() }
    }

    /// Whether `key` is held
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Mark `key` as held or released
    pub fn set_key(&mut self, key: KeyCode, down: bool) {
        if down {
            self.pressed.insert(key);
        } else {
            self.pressed.remove(&key);
        }
    }
}

/// Host input devices and input-consumer switches
pub trait HostInput {
    /// Current mouse state
    fn mouse_state(&self) -> MouseState;

    /// Current keyboard state
    fn keyboard_state(&self) -> KeyboardState;

    /// Enable or suppress the engine's own input-consuming subsystem
    fn set_input_consumers_enabled(&mut self, enabled: bool);

    /// Show or hide the OS cursor
    fn set_mouse_visible(&mut self, visible: bool);
}
