//! Texture binding table
//!
//! Bidirectional map between host textures and the opaque handles the GUI
//! library draws with. The table never owns textures: it stores host
//! [`TextureKey`]s and asks the host's [`TextureRegistry`] whether they are
//! still alive, so texture destruction stays entirely with the host.
//!
//! Handles are binding-slot keys flattened to `u64` (slot index + generation).
//! Unbinding frees the slot and bumps its generation, so a handle that outlived
//! its binding can never alias a later one.

use std::collections::HashMap;

use slotmap::{Key, KeyData, SlotMap};

use crate::gui::TextureId;
use crate::host::{TextureKey, TextureRegistry};

slotmap::new_key_type! {
    struct BindingKey;
}

/// Handle <-> texture table
#[derive(Debug, Default)]
pub struct TextureBindings {
    forward: SlotMap<BindingKey, TextureKey>,
    reverse: HashMap<TextureKey, BindingKey>,
}

impl TextureBindings {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for `texture`, minting one on first use
    ///
    /// Returns [`TextureId::NULL`] for the null key or a texture the host has
    /// already destroyed. Binding the same live texture again returns the same
    /// handle.
    pub fn bind(&mut self, texture: TextureKey, registry: &impl TextureRegistry) -> TextureId {
        if texture.is_null() || !registry.is_texture_alive(texture) {
            return TextureId::NULL;
        }

        if let Some(&binding) = self.reverse.get(&texture) {
            return handle_of(binding);
        }

        let binding = self.forward.insert(texture);
        self.reverse.insert(texture, binding);
        log::trace!("Bound texture {:?} as handle {:#x}", texture, handle_of(binding).0);
        handle_of(binding)
    }

    /// Remove both directions of `texture`'s binding
    ///
    /// Returns whether a binding existed.
    pub fn unbind(&mut self, texture: TextureKey) -> bool {
        match self.reverse.remove(&texture) {
            Some(binding) => {
                self.forward.remove(binding);
                true
            }
            None => false,
        }
    }

    /// Texture behind `id`
    ///
    /// Unknown handles resolve to `None`. A handle whose texture has been
    /// destroyed is evicted and also resolves to `None`.
    pub fn resolve(&mut self, id: TextureId, registry: &impl TextureRegistry) -> Option<TextureKey> {
        if id.is_null() {
            return None;
        }

        let binding = binding_of(id);
        let texture = *self.forward.get(binding)?;

        if registry.is_texture_alive(texture) {
            Some(texture)
        } else {
            log::warn!("Evicting stale texture handle {:#x}", id.0);
            self.forward.remove(binding);
            self.reverse.remove(&texture);
            None
        }
    }

    /// Texture behind `id` without evicting stale entries
    pub fn peek(&self, id: TextureId) -> Option<TextureKey> {
        if id.is_null() {
            return None;
        }
        self.forward.get(binding_of(id)).copied()
    }

    /// Handle currently bound to `texture`, if any
    pub fn handle_of(&self, texture: TextureKey) -> Option<TextureId> {
        self.reverse.get(&texture).copied().map(handle_of)
    }

    /// Drop every binding whose texture the host has destroyed
    pub fn sweep_dead(&mut self, registry: &impl TextureRegistry) {
        let before = self.forward.len();

        self.forward.retain(|_, texture| registry.is_texture_alive(*texture));
        self.reverse.retain(|texture, _| registry.is_texture_alive(*texture));

        let swept = before - self.forward.len();
        if swept > 0 {
            log::debug!("Swept {} dead texture binding(s)", swept);
        }
    }

    /// Number of live bindings
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

fn handle_of(binding: BindingKey) -> TextureId {
    TextureId(binding.data().as_ffi())
}

fn binding_of(id: TextureId) -> BindingKey {
    KeyData::from_ffi(id.0).into()
}
