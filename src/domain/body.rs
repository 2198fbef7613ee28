use serde::{Deserialize, Serialize};

/// One entry in the hit-location table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitLocation {
    pub id: String,
    pub choice_name: String,
    pub table_name: String,
    #[serde(default)]
    pub slots: i32,
    #[serde(default)]
    pub hit_penalty: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl HitLocation {
    fn new(id: &str, choice_name: &str, table_name: &str, slots: i32, hit_penalty: i32, description: &str) -> Self {
        Self {
            id: id.to_string(),
            choice_name: choice_name.to_string(),
            table_name: table_name.to_string(),
            slots,
            hit_penalty,
            description: description.to_string(),
        }
    }
}

/// The body type a sheet targets: a named hit-location table and the
/// roll used against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Body {
    pub name: String,
    pub roll: String,
    pub locations: Vec<HitLocation>,
}

impl Body {
    pub fn factory() -> Self {
        Self {
            name: "Humanoid".to_string(),
            roll: "3d".to_string(),
            locations: vec![
                HitLocation::new("eye", "Eyes", "Eyes", 0, -9, "An attack that misses by 1 hits the torso instead."),
                HitLocation::new("skull", "Skull", "Skull", 2, -7, "An attack that misses by 1 hits the torso instead."),
                HitLocation::new("face", "Face", "Face", 1, -5, "An attack that misses by 1 hits the torso instead."),
                HitLocation::new("leg", "Leg", "Right Leg", 2, -2, ""),
                HitLocation::new("arm", "Arm", "Right Arm", 1, -2, ""),
                HitLocation::new("torso", "Torso", "Torso", 2, 0, ""),
                HitLocation::new("groin", "Groin", "Groin", 1, -3, ""),
                HitLocation::new("arm", "Arm", "Left Arm", 1, -2, ""),
                HitLocation::new("leg", "Leg", "Left Leg", 2, -2, ""),
                HitLocation::new("hand", "Hand", "Hand", 1, -4, ""),
                HitLocation::new("foot", "Foot", "Foot", 1, -4, ""),
                HitLocation::new("neck", "Neck", "Neck", 2, -5, ""),
                HitLocation::new("vitals", "Vitals", "Vitals", 0, -3, "Only targetable with piercing, impaling, and tight-beam burning attacks."),
            ],
        }
    }

    /// Repairs a partial table. An unnamed body keeps its locations;
    /// a body without locations is replaced wholesale.
    pub fn ensure_validity(&mut self) {
        if self.locations.is_empty() {
            *self = Self::factory();
            return;
        }
        self.locations.retain(|location| !location.id.is_empty());
        if self.locations.is_empty() {
            *self = Self::factory();
            return;
        }
        if self.name.is_empty() {
            self.name = "Humanoid".to_string();
        }
        if self.roll.is_empty() {
            self.roll = "3d".to_string();
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::factory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_table() {
        let body = Body::factory();
        assert_eq!(body.name, "Humanoid");
        assert_eq!(body.roll, "3d");
        assert_eq!(body.locations.len(), 13);
        assert_eq!(body.locations[0].hit_penalty, -9);
    }

    #[test]
    fn test_empty_table_is_replaced() {
        let mut body = Body {
            name: "Winged Humanoid".to_string(),
            roll: "3d".to_string(),
            locations: Vec::new(),
        };
        body.ensure_validity();
        assert_eq!(body, Body::factory());
    }

    #[test]
    fn test_partial_table_is_repaired_in_place() {
        let mut body = Body {
            name: String::new(),
            roll: String::new(),
            locations: vec![HitLocation::new("torso", "Torso", "Torso", 2, 0, "")],
        };
        body.ensure_validity();
        assert_eq!(body.name, "Humanoid");
        assert_eq!(body.roll, "3d");
        assert_eq!(body.locations.len(), 1);
    }
}
