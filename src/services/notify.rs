use std::cell::RefCell;
use std::rc::Rc;

/// Identifies an owning entity (a character). Settings not attached to
/// an entity belong to the global defaults document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u64);

/// Handle returned by [`ChangeNotifier::register`], used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResponderId(u64);

/// Implemented by anything that needs to react to settings changes.
pub trait SheetSettingsResponder {
    /// Called when a settings document has been updated. `entity` is
    /// `None` when the global defaults changed rather than a document
    /// attached to a specific entity. `structural` is true when a
    /// layout-affecting field changed, which usually requires a full
    /// rebuild instead of an incremental refresh.
    fn sheet_settings_updated(&mut self, entity: Option<EntityId>, structural: bool);
}

/// Synchronous fan-out of settings-change notifications.
///
/// Responders are shared single-threaded handles; delivery happens on
/// the caller's thread and completes before [`notify`] returns.
/// Delivery order across responders is unspecified.
///
/// [`notify`]: ChangeNotifier::notify
pub struct ChangeNotifier {
    responders: Vec<(ResponderId, Rc<RefCell<dyn SheetSettingsResponder>>)>,
    next_id: u64,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self {
            responders: Vec::new(),
            next_id: 1,
        }
    }

    pub fn register(&mut self, responder: Rc<RefCell<dyn SheetSettingsResponder>>) -> ResponderId {
        let id = ResponderId(self.next_id);
        self.next_id += 1;
        self.responders.push((id, responder));
        id
    }

    pub fn unregister(&mut self, id: ResponderId) {
        self.responders.retain(|(registered, _)| *registered != id);
    }

    pub fn notify(&self, entity: Option<EntityId>, structural: bool) {
        for (_, responder) in &self.responders {
            responder.borrow_mut().sheet_settings_updated(entity, structural);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.responders.is_empty()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}
