use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use super::migration;
use crate::domain::settings::SheetSettings;
use crate::infrastructure::error::{Result, SettingsError};
use crate::infrastructure::file_provider::FileProvider;

/// Load a settings document: read bytes, rewrite deprecated shapes,
/// decode, then enforce validity. Only a missing/unreadable stream or
/// content that is not the expected structured shape fails; anything
/// semantically wrong is healed silently.
pub fn load(provider: &dyn FileProvider, path: &Path) -> Result<SheetSettings> {
    let bytes = provider.read(path).map_err(|e| SettingsError::read(path, e))?;
    let mut raw: Value = serde_json::from_slice(&bytes).map_err(|e| SettingsError::read(path, e))?;
    migration::migrate(&mut raw);
    let mut settings: SheetSettings =
        serde_json::from_value(raw).map_err(|e| SettingsError::read(path, e))?;
    settings.ensure_validity();
    debug!(path = %path.display(), "loaded sheet settings");
    Ok(settings)
}

/// Save a settings document in the canonical (non-legacy) shape.
pub fn save(provider: &dyn FileProvider, path: &Path, settings: &SheetSettings) -> Result<()> {
    let mut json =
        serde_json::to_string_pretty(settings).map_err(|e| SettingsError::write(path, e))?;
    json.push('\n');
    provider.write(path, json.as_bytes()).map_err(|e| SettingsError::write(path, e))?;
    debug!(path = %path.display(), "saved sheet settings");
    Ok(())
}

/// Per-user location of the default sheet settings (cross-platform)
pub fn default_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sheetforge");
    path.push("sheet_settings.json");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::body::Body;
    use crate::domain::fixed::Fixed;
    use crate::infrastructure::file_provider::{DiskProvider, MemoryProvider};

    const PATH: &str = "sheet_settings.json";

    #[test]
    fn test_factory_round_trip() {
        let provider = MemoryProvider::new();
        let mut factory = SheetSettings::factory();
        factory.ensure_validity();
        save(&provider, Path::new(PATH), &factory).unwrap();
        let loaded = load(&provider, Path::new(PATH)).unwrap();
        assert_eq!(loaded, factory);
    }

    #[test]
    fn test_empty_document_loads_and_heals() {
        let provider = MemoryProvider::new();
        provider.insert(PATH, "{}");
        let loaded = load(&provider, Path::new(PATH)).unwrap();
        assert!(loaded.page.is_some());
        assert!(loaded.body_type.is_some());
        // The legacy heuristic applies to a document with no dodge keys.
        assert!(loaded.include_dodge_flat_bonus);
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let provider = MemoryProvider::new();
        let err = load(&provider, Path::new("absent.json")).unwrap_err();
        assert!(matches!(err, SettingsError::StorageRead { .. }));
    }

    #[test]
    fn test_malformed_json_is_a_read_error() {
        let provider = MemoryProvider::new();
        provider.insert(PATH, "not json at all {");
        let err = load(&provider, Path::new(PATH)).unwrap_err();
        assert!(matches!(err, SettingsError::StorageRead { .. }));
    }

    #[test]
    fn test_structurally_alien_content_is_a_read_error() {
        let provider = MemoryProvider::new();
        provider.insert(PATH, "[1, 2, 3]");
        let err = load(&provider, Path::new(PATH)).unwrap_err();
        assert!(matches!(err, SettingsError::StorageRead { .. }));
    }

    #[test]
    fn test_legacy_wrapper_document_loads() {
        let provider = MemoryProvider::new();
        provider.insert(
            PATH,
            r#"{"sheet_settings": {"hide_tl_column": true, "use_passive_defense": true}}"#,
        );
        let loaded = load(&provider, Path::new(PATH)).unwrap();
        assert!(loaded.hide_tl_column);
        assert!(loaded.use_passive_defense);
        assert!(loaded.show_pd_column);

        // The wrapper contents match loading the nested document directly.
        let direct_provider = MemoryProvider::new();
        direct_provider.insert(PATH, r#"{"hide_tl_column": true, "use_passive_defense": true}"#);
        let direct = load(&direct_provider, Path::new(PATH)).unwrap();
        assert_eq!(loaded, direct);
    }

    #[test]
    fn test_legacy_body_type_key_loads() {
        let provider = MemoryProvider::new();
        provider.insert(
            PATH,
            r#"{"hit_locations": {"name": "Winged Humanoid", "roll": "3d", "locations": [
                {"id": "wing", "choice_name": "Wing", "table_name": "Wing", "hit_penalty": -2}
            ]}}"#,
        );
        let loaded = load(&provider, Path::new(PATH)).unwrap();
        let body = loaded.body_type.unwrap();
        assert_eq!(body.name, "Winged Humanoid");
        assert_eq!(body.locations.len(), 1);
    }

    #[test]
    fn test_loaded_document_cannot_reveal_repairs() {
        // A heavily damaged document and a factory one load through the
        // same signature; both succeed with no diagnostics attached.
        let provider = MemoryProvider::new();
        provider.insert(PATH, r#"{"damage_progression": "bogus", "body_type": null}"#);
        let healed = load(&provider, Path::new(PATH)).unwrap();
        assert_eq!(healed.body_type, Some(Body::factory()));
    }

    #[test]
    fn test_sparse_save_output() {
        let provider = MemoryProvider::new();
        let mut settings = SheetSettings::factory();
        settings.dodge_override = Fixed::from_int(12);
        save(&provider, Path::new(PATH), &settings).unwrap();
        let written = String::from_utf8(provider.contents(Path::new(PATH)).unwrap()).unwrap();
        assert!(written.ends_with('\n'));
        assert!(written.contains("\"dodge_override\": 12"));
        assert!(!written.contains("use_multiplicative_modifiers"));
    }

    #[test]
    fn test_disk_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings").join("sheet_settings.json");
        let mut factory = SheetSettings::factory();
        factory.ensure_validity();
        save(&DiskProvider, &path, &factory).unwrap();
        let loaded = load(&DiskProvider, &path).unwrap();
        assert_eq!(loaded, factory);
    }
}
