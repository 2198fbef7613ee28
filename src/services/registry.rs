use std::collections::HashMap;

use crate::domain::settings::SheetSettings;
use crate::services::notify::{ChangeNotifier, EntityId};

/// Owns the global defaults document and the per-entity documents
/// cloned from it, and notifies responders after every mutation.
///
/// The global document is copy-on-attach: an entity never mutates it,
/// only its own clone. Reads for an entity without a clone fall back
/// to the global document.
pub struct SettingsRegistry {
    global: SheetSettings,
    per_entity: HashMap<EntityId, SheetSettings>,
    notifier: ChangeNotifier,
}

impl SettingsRegistry {
    pub fn new() -> Self {
        Self::with_global(SheetSettings::factory())
    }

    pub fn with_global(global: SheetSettings) -> Self {
        Self {
            global,
            per_entity: HashMap::new(),
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn notifier_mut(&mut self) -> &mut ChangeNotifier {
        &mut self.notifier
    }

    /// The settings for the given entity, or the global defaults when
    /// the entity is `None` or has no document of its own.
    pub fn settings_for(&self, entity: Option<EntityId>) -> &SheetSettings {
        entity
            .and_then(|id| self.per_entity.get(&id))
            .unwrap_or(&self.global)
    }

    /// Gives an entity its own document, cloned from the global
    /// defaults. Attaching twice keeps the existing document.
    pub fn attach(&mut self, entity: EntityId) -> &mut SheetSettings {
        self.per_entity.entry(entity).or_insert_with(|| self.global.clone())
    }

    pub fn detach(&mut self, entity: EntityId) {
        self.per_entity.remove(&entity);
    }

    /// Applies a mutation to the scoped document and notifies every
    /// responder. The structural flag is derived from the block
    /// layout, the one layout-affecting field the engine owns.
    pub fn modify<F>(&mut self, entity: Option<EntityId>, mutate: F)
    where
        F: FnOnce(&mut SheetSettings),
    {
        let doc = match entity {
            Some(id) => self.per_entity.entry(id).or_insert_with(|| self.global.clone()),
            None => &mut self.global,
        };
        let layout_before = doc.block_layout.clone();
        mutate(doc);
        let structural = doc.block_layout != layout_before;
        self.notifier.notify(entity, structural);
    }

    /// Restores a scope to its baseline: an entity document becomes a
    /// fresh clone of the global defaults; the global document becomes
    /// the factory document. Responders get a structural notification.
    pub fn reset(&mut self, entity: Option<EntityId>) {
        match entity {
            Some(id) => {
                let copy = self.global.clone();
                self.per_entity.insert(id, copy);
            }
            None => self.global = SheetSettings::factory(),
        }
        self.notifier.notify(entity, true);
    }
}

impl Default for SettingsRegistry {
    fn default() -> Self {
        Self::new()
    }
}
