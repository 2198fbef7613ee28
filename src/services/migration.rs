use serde_json::{Map, Value};
use tracing::debug;

/// Wrapper key older releases nested the whole document under.
const LEGACY_WRAPPER_KEY: &str = "sheet_settings";
/// Key the body type lived under before it became `body_type`.
const LEGACY_BODY_TYPE_KEY: &str = "hit_locations";
/// Key `show_trait_modifier_adj` was written as when traits were
/// still called advantages.
const LEGACY_TRAIT_MODIFIER_KEY: &str = "show_advantage_modifier_adj";

type FieldRule = fn(&mut Map<String, Value>);

/// Field-level rules, each a pure patch of the raw document. New
/// deprecations are handled by appending a rule here; validity
/// enforcement never needs to know about on-disk history.
const FIELD_RULES: &[FieldRule] = &[adopt_legacy_body_type, promote_legacy_trait_modifier_flag];

/// Rewrites deprecated field names and locations in raw content into
/// the canonical document shape. Runs once per load, before the typed
/// decode; the result may still be incomplete, which validity
/// enforcement heals afterwards.
pub fn migrate(raw: &mut Value) {
    unwrap_legacy_wrapper(raw);
    if let Value::Object(doc) = raw {
        for rule in FIELD_RULES {
            rule(doc);
        }
    }
}

/// Old-format files wrapped the document in a `sheet_settings` key.
/// When the wrapper is present its contents supersede the top level
/// entirely, matching how those files were written.
fn unwrap_legacy_wrapper(raw: &mut Value) {
    let wrapped = match raw.as_object_mut() {
        Some(doc) => doc.remove(LEGACY_WRAPPER_KEY),
        None => return,
    };
    match wrapped {
        Some(inner @ Value::Object(_)) => {
            debug!("adopting document from legacy wrapper key");
            *raw = inner;
        }
        // A null or malformed wrapper is dropped; the top level stands.
        Some(_) | None => {}
    }
}

fn adopt_legacy_body_type(doc: &mut Map<String, Value>) {
    let Some(legacy) = doc.remove(LEGACY_BODY_TYPE_KEY) else { return };
    let current_missing = !matches!(doc.get("body_type"), Some(v) if !v.is_null());
    if current_missing && legacy.is_object() {
        debug!("adopting body type from legacy key");
        doc.insert("body_type".to_string(), legacy);
    }
}

/// The flag can only ever be turned on by migration, never off: a
/// current-format `true` wins over a legacy `false` and vice versa.
fn promote_legacy_trait_modifier_flag(doc: &mut Map<String, Value>) {
    let Some(legacy) = doc.remove(LEGACY_TRAIT_MODIFIER_KEY) else { return };
    if legacy.as_bool().unwrap_or(false) {
        debug!("adopting trait modifier flag from legacy key");
        doc.insert("show_trait_modifier_adj".to_string(), Value::Bool(true));
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_wrapper_supersedes_top_level() {
        let mut raw = json!({
            "hide_tl_column": true,
            "sheet_settings": {"hide_lc_column": true}
        });
        migrate(&mut raw);
        assert_eq!(raw, json!({"hide_lc_column": true}));
    }

    #[test]
    fn test_null_wrapper_keeps_top_level() {
        let mut raw = json!({"hide_tl_column": true, "sheet_settings": null});
        migrate(&mut raw);
        assert_eq!(raw, json!({"hide_tl_column": true}));
    }

    #[test]
    fn test_body_type_adopted_from_legacy_key() {
        let mut raw = json!({"hit_locations": {"name": "Humanoid"}});
        migrate(&mut raw);
        assert_eq!(raw, json!({"body_type": {"name": "Humanoid"}}));
    }

    #[test]
    fn test_current_body_type_wins_over_legacy() {
        let mut raw = json!({
            "body_type": {"name": "Quadruped"},
            "hit_locations": {"name": "Humanoid"}
        });
        migrate(&mut raw);
        assert_eq!(raw, json!({"body_type": {"name": "Quadruped"}}));
    }

    #[test]
    fn test_null_body_type_is_treated_as_missing() {
        let mut raw = json!({"body_type": null, "hit_locations": {"name": "Humanoid"}});
        migrate(&mut raw);
        assert_eq!(raw, json!({"body_type": {"name": "Humanoid"}}));
    }

    #[test]
    fn test_trait_modifier_flag_is_promoted() {
        let mut raw = json!({"show_advantage_modifier_adj": true});
        migrate(&mut raw);
        assert_eq!(raw, json!({"show_trait_modifier_adj": true}));
    }

    #[test]
    fn test_trait_modifier_flag_is_never_turned_off() {
        let mut raw = json!({
            "show_trait_modifier_adj": true,
            "show_advantage_modifier_adj": false
        });
        migrate(&mut raw);
        assert_eq!(raw, json!({"show_trait_modifier_adj": true}));
    }

    #[test]
    fn test_legacy_keys_inside_wrapper_are_rewritten() {
        let mut raw = json!({
            "sheet_settings": {
                "hit_locations": {"name": "Humanoid"},
                "show_advantage_modifier_adj": true
            }
        });
        migrate(&mut raw);
        assert_eq!(
            raw,
            json!({
                "body_type": {"name": "Humanoid"},
                "show_trait_modifier_adj": true
            })
        );
    }

    #[test]
    fn test_non_object_content_is_left_alone() {
        let mut raw = json!([1, 2, 3]);
        migrate(&mut raw);
        assert_eq!(raw, json!([1, 2, 3]));
    }
}
