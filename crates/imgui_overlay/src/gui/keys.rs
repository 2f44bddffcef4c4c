//! GUI library key codes
//!
//! Values follow the GUI library's named-key enumeration. Digits, letters,
//! keypad digits and function keys are contiguous, so ranges can be walked by
//! offset from their first key.

/// Key code understood by the GUI library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GuiKey(pub u32);

#[allow(missing_docs)]
impl GuiKey {
    pub const NONE: Self = Self(0);

    pub const TAB: Self = Self(512);
    pub const LEFT_ARROW: Self = Self(513);
    pub const RIGHT_ARROW: Self = Self(514);
    pub const UP_ARROW: Self = Self(515);
    pub const DOWN_ARROW: Self = Self(516);
    pub const PAGE_UP: Self = Self(517);
    pub const PAGE_DOWN: Self = Self(518);
    pub const HOME: Self = Self(519);
    pub const END: Self = Self(520);
    pub const INSERT: Self = Self(521);
    pub const DELETE: Self = Self(522);
    pub const BACKSPACE: Self = Self(523);
    pub const SPACE: Self = Self(524);
    pub const ENTER: Self = Self(525);
    pub const ESCAPE: Self = Self(526);

    pub const KEY_0: Self = Self(536);
    pub const KEY_9: Self = Self(545);
    pub const A: Self = Self(546);
    pub const Z: Self = Self(571);
    pub const F1: Self = Self(572);
    pub const F24: Self = Self(595);

    pub const APOSTROPHE: Self = Self(596);
    pub const COMMA: Self = Self(597);
    pub const MINUS: Self = Self(598);
    pub const PERIOD: Self = Self(599);
    pub const SLASH: Self = Self(600);
    pub const SEMICOLON: Self = Self(601);
    pub const EQUAL: Self = Self(602);
    pub const LEFT_BRACKET: Self = Self(603);
    pub const BACKSLASH: Self = Self(604);
    pub const RIGHT_BRACKET: Self = Self(605);
    pub const GRAVE_ACCENT: Self = Self(606);
    pub const CAPS_LOCK: Self = Self(607);
    pub const SCROLL_LOCK: Self = Self(608);
    pub const NUM_LOCK: Self = Self(609);
    pub const PRINT_SCREEN: Self = Self(610);

    pub const KEYPAD_0: Self = Self(612);
    pub const KEYPAD_9: Self = Self(621);
    pub const KEYPAD_DECIMAL: Self = Self(622);
    pub const KEYPAD_DIVIDE: Self = Self(623);
    pub const KEYPAD_MULTIPLY: Self = Self(624);
    pub const KEYPAD_SUBTRACT: Self = Self(625);
    pub const KEYPAD_ADD: Self = Self(626);

    pub const APP_BACK: Self = Self(629);
    pub const APP_FORWARD: Self = Self(630);

    // Modifier keys are reported individually, not as a combined mask
    pub const MOD_CTRL: Self = Self(1 << 12);
    pub const MOD_SHIFT: Self = Self(1 << 13);
    pub const MOD_ALT: Self = Self(1 << 14);

    /// Key `offset` places after `self` in the enumeration
    #[must_use]
    pub const fn offset(self, offset: u32) -> Self {
        Self(self.0 + offset)
    }
}
