//! Rules-customization settings engine for the SheetForge character
//! sheet editor.
//!
//! # Structure
//!
//! - `domain/` - The settings document, its owned sub-documents, and
//!   the closed enumerations they draw from
//! - `services/` - Migration, persistence, change notification, and
//!   the global/per-entity registry
//! - `infrastructure/` - File access abstraction and error types
//!
//! Documents loaded from storage are always usable: deprecated on-disk
//! shapes are rewritten at load time and anything semantically invalid
//! is healed in place rather than reported. Only I/O-level failures
//! surface as errors.

pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use domain::{
    AttributeDef, AttributeDefs, BlockLayout, Body, DamageProgression, Difficulty, DisplayOption,
    Fixed, HitLocation, LengthUnit, PageOrientation, PageSettings, PaperSize, SheetSettings,
    WeightUnit,
};
pub use infrastructure::error::{Result, SettingsError, StorageFailure};
pub use infrastructure::file_provider::{DiskProvider, FileProvider, MemoryProvider};
pub use services::store::{default_path, load, save};
pub use services::{ChangeNotifier, EntityId, ResponderId, SettingsRegistry, SheetSettingsResponder};
