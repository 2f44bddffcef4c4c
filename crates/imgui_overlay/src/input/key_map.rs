//! Engine key code -> GUI key code table

use std::collections::BTreeMap;

use crate::gui::GuiKey;
use crate::host::KeyCode;

/// Keys with no contiguous counterpart, mapped one by one
const NAMED_KEYS: &[(KeyCode, GuiKey)] = &[
    (KeyCode::BACK, GuiKey::BACKSPACE),
    (KeyCode::TAB, GuiKey::TAB),
    (KeyCode::ENTER, GuiKey::ENTER),
    (KeyCode::CAPS_LOCK, GuiKey::CAPS_LOCK),
    (KeyCode::ESCAPE, GuiKey::ESCAPE),
    (KeyCode::SPACE, GuiKey::SPACE),
    (KeyCode::PAGE_UP, GuiKey::PAGE_UP),
    (KeyCode::PAGE_DOWN, GuiKey::PAGE_DOWN),
    (KeyCode::END, GuiKey::END),
    (KeyCode::HOME, GuiKey::HOME),
    (KeyCode::LEFT, GuiKey::LEFT_ARROW),
    (KeyCode::RIGHT, GuiKey::RIGHT_ARROW),
    (KeyCode::UP, GuiKey::UP_ARROW),
    (KeyCode::DOWN, GuiKey::DOWN_ARROW),
    (KeyCode::PRINT_SCREEN, GuiKey::PRINT_SCREEN),
    (KeyCode::INSERT, GuiKey::INSERT),
    (KeyCode::DELETE, GuiKey::DELETE),
    (KeyCode::MULTIPLY, GuiKey::KEYPAD_MULTIPLY),
    (KeyCode::ADD, GuiKey::KEYPAD_ADD),
    (KeyCode::SUBTRACT, GuiKey::KEYPAD_SUBTRACT),
    (KeyCode::DECIMAL, GuiKey::KEYPAD_DECIMAL),
    (KeyCode::DIVIDE, GuiKey::KEYPAD_DIVIDE),
    (KeyCode::NUM_LOCK, GuiKey::NUM_LOCK),
    (KeyCode::SCROLL, GuiKey::SCROLL_LOCK),
    (KeyCode::LEFT_SHIFT, GuiKey::MOD_SHIFT),
    (KeyCode::LEFT_CONTROL, GuiKey::MOD_CTRL),
    (KeyCode::LEFT_ALT, GuiKey::MOD_ALT),
    (KeyCode::OEM_SEMICOLON, GuiKey::SEMICOLON),
    (KeyCode::OEM_PLUS, GuiKey::EQUAL),
    (KeyCode::OEM_COMMA, GuiKey::COMMA),
    (KeyCode::OEM_MINUS, GuiKey::MINUS),
    (KeyCode::OEM_PERIOD, GuiKey::PERIOD),
    (KeyCode::OEM_QUESTION, GuiKey::SLASH),
    (KeyCode::OEM_TILDE, GuiKey::GRAVE_ACCENT),
    (KeyCode::OEM_OPEN_BRACKETS, GuiKey::LEFT_BRACKET),
    (KeyCode::OEM_CLOSE_BRACKETS, GuiKey::RIGHT_BRACKET),
    (KeyCode::OEM_PIPE, GuiKey::BACKSLASH),
    (KeyCode::OEM_QUOTES, GuiKey::APOSTROPHE),
    (KeyCode::BROWSER_BACK, GuiKey::APP_BACK),
    (KeyCode::BROWSER_FORWARD, GuiKey::APP_FORWARD),
];

/// Contiguous ranges: (first engine key, last engine key, first GUI key)
const KEY_RANGES: &[(KeyCode, KeyCode, GuiKey)] = &[
    (KeyCode::D0, KeyCode::D9, GuiKey::KEY_0),
    (KeyCode::A, KeyCode::Z, GuiKey::A),
    (KeyCode::NUM_PAD_0, KeyCode::NUM_PAD_9, GuiKey::KEYPAD_0),
    (KeyCode::F1, KeyCode::F24, GuiKey::F1),
];

/// Static key mapping, one entry per engine key
///
/// Keys not in the table are ignored by the input translator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    entries: BTreeMap<KeyCode, GuiKey>,
}

impl KeyMap {
    /// Build the full table: named keys plus the generated ranges
    pub fn build() -> Self {
        let mut entries = BTreeMap::new();

        for &(key, gui_key) in NAMED_KEYS {
            let previous = entries.insert(key, gui_key);
            debug_assert!(previous.is_none(), "duplicate key mapping for {key:?}");
        }

        for &(first, last, gui_first) in KEY_RANGES {
            for offset in 0..=(last.0 - first.0) {
                let key = KeyCode(first.0 + offset);
                let previous = entries.insert(key, gui_first.offset(u32::from(offset)));
                debug_assert!(previous.is_none(), "duplicate key mapping for {key:?}");
            }
        }

        log::debug!("Built key map with {} entries", entries.len());
        Self { entries }
    }

    /// GUI key for `key`
    pub fn get(&self, key: KeyCode) -> Option<GuiKey> {
        self.entries.get(&key).copied()
    }

    /// Every mapping, ordered by engine key code
    pub fn iter(&self) -> impl Iterator<Item = (KeyCode, GuiKey)> + '_ {
        self.entries.iter().map(|(&key, &gui_key)| (key, gui_key))
    }

    /// Number of mapped keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::build()
    }
}
