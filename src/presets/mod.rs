//! Named selection presets.
//!
//! A preset is a named snapshot of a full selection. Built-in presets ship
//! with the application, carry a locale key instead of a display name, and
//! are protected from overwrite and deletion; the protection hangs off the
//! origin variant, not off a reserved-name list. The manager owns the
//! in-memory collection and is its only writer; durable storage and
//! clipboard/download transport are collaborators fed by [`store`], the
//! share token codec and the Paint.NET export.

mod pdn;
mod share;
mod store;

pub use pdn::{pdn_palette, PDN_MAX_COLOURS};
pub use share::{decode, encode};
pub use store::{load_presets, parse_presets, save_presets};

use crate::error::{MapartError, Result};
use crate::selection::SelectionState;
use crate::types::PaletteCatalog;

/// Where a preset came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetOrigin {
    /// Ships with the application; read-only. The label is a locale key
    /// the host resolves.
    BuiltIn { locale_key: String },
    /// Saved by the user; mutable.
    User,
}

/// A named snapshot of a selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    name: String,
    origin: PresetOrigin,
    selection: SelectionState,
}

impl Preset {
    /// Create a built-in preset.
    pub fn built_in(
        name: impl Into<String>,
        locale_key: impl Into<String>,
        selection: SelectionState,
    ) -> Self {
        Self {
            name: name.into(),
            origin: PresetOrigin::BuiltIn {
                locale_key: locale_key.into(),
            },
            selection,
        }
    }

    /// Create a user preset.
    pub fn user(name: impl Into<String>, selection: SelectionState) -> Self {
        Self {
            name: name.into(),
            origin: PresetOrigin::User,
            selection,
        }
    }

    /// Unique, case-sensitive preset name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn origin(&self) -> &PresetOrigin {
        &self.origin
    }

    pub fn is_built_in(&self) -> bool {
        matches!(self.origin, PresetOrigin::BuiltIn { .. })
    }

    /// What the host should display: the locale key for built-ins, the
    /// literal name otherwise.
    pub fn display_label(&self) -> &str {
        match &self.origin {
            PresetOrigin::BuiltIn { locale_key } => locale_key,
            PresetOrigin::User => &self.name,
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }
}

/// The preset collection and its lifecycle operations.
///
/// Never performs I/O: load the collection with [`load_presets`], hand the
/// result here, and persist [`PresetManager::user_presets`] with
/// [`save_presets`] after a successful mutation.
#[derive(Debug, Clone, Default)]
pub struct PresetManager {
    presets: Vec<Preset>,
}

impl PresetManager {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from loaded presets.
    ///
    /// Built-ins register first come, first kept; user presets that collide
    /// with a built-in name are dropped, and a later user preset replaces
    /// an earlier one of the same name.
    pub fn from_presets(presets: impl IntoIterator<Item = Preset>) -> Self {
        let mut manager = Self::new();
        for preset in presets {
            match preset.origin {
                PresetOrigin::BuiltIn { .. } => {
                    if manager.find(&preset.name).is_none() {
                        manager.presets.push(preset);
                    }
                }
                PresetOrigin::User => {
                    let _ = manager.save(&preset.name, &preset.selection);
                }
            }
        }
        manager
    }

    /// All presets, built-ins first in registration order.
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// The user-saved subset, in registration order.
    pub fn user_presets(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter().filter(|p| !p.is_built_in())
    }

    /// Find a preset by exact name.
    pub fn find(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Save a snapshot of the selection under a name.
    ///
    /// Fails with `NameConflict` when the name belongs to a built-in;
    /// silently overwrites an existing user preset of the same name.
    pub fn save(&mut self, name: &str, selection: &SelectionState) -> Result<&Preset> {
        match self.presets.iter().position(|p| p.name == name) {
            Some(i) if self.presets[i].is_built_in() => Err(MapartError::NameConflict {
                name: name.to_string(),
            }),
            Some(i) => {
                self.presets[i].selection = selection.clone();
                Ok(&self.presets[i])
            }
            None => {
                self.presets.push(Preset::user(name, selection.clone()));
                Ok(self.presets.last().expect("just pushed"))
            }
        }
    }

    /// Delete a user preset. Fails with `ProtectedPreset` for built-ins;
    /// deleting an absent name is a no-op.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        match self.presets.iter().position(|p| p.name == name) {
            Some(i) if self.presets[i].is_built_in() => Err(MapartError::ProtectedPreset {
                name: name.to_string(),
            }),
            Some(i) => {
                self.presets.remove(i);
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Load the selection snapshot of a preset.
    pub fn load(&self, name: &str) -> Result<SelectionState> {
        self.find(name)
            .map(|p| p.selection.clone())
            .ok_or_else(|| MapartError::NotFound {
                name: name.to_string(),
            })
    }

    /// Encode a preset's selection as a share token.
    pub fn share(&self, name: &str) -> Result<String> {
        self.find(name)
            .map(|p| share::encode(&p.selection))
            .ok_or_else(|| MapartError::NotFound {
                name: name.to_string(),
            })
    }

    /// Render a preset's selection as Paint.NET palette text.
    pub fn export(&self, name: &str, catalog: &PaletteCatalog) -> Result<String> {
        self.find(name)
            .map(|p| pdn::pdn_palette(name, &p.selection, catalog))
            .ok_or_else(|| MapartError::NotFound {
                name: name.to_string(),
            })
    }
}
