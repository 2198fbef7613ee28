use serde::{Deserialize, Serialize};

use super::attributes::AttributeDefs;
use super::block_layout::BlockLayout;
use super::body::Body;
use super::difficulty::Difficulty;
use super::display::DisplayOption;
use super::fixed::Fixed;
use super::page::PageSettings;
use super::progression::DamageProgression;
use super::units::{LengthUnit, WeightUnit};

fn is_false(value: &bool) -> bool {
    !*value
}

/// The rules-customization document controlling how a sheet computes
/// and displays its derived statistics.
///
/// Boolean toggles and numeric fields serialize only when non-zero and
/// decode to zero when absent, so `Default` is the all-zero document an
/// empty JSON object produces. New documents come from [`factory`]
/// instead, which picks the GURPS 4E defaults.
///
/// [`factory`]: SheetSettings::factory
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<PageSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_layout: Option<BlockLayout>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<AttributeDefs>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_type: Option<Body>,

    pub damage_progression: DamageProgression,
    pub default_length_units: LengthUnit,
    pub default_weight_units: WeightUnit,
    pub user_description_display: DisplayOption,
    pub modifiers_display: DisplayOption,
    pub notes_display: DisplayOption,
    pub skill_level_adj_display: DisplayOption,

    #[serde(skip_serializing_if = "is_false")]
    pub use_multiplicative_modifiers: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub use_modifying_dice_plus_adds: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub use_half_stat_defaults: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub show_trait_modifier_adj: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub show_equipment_modifier_adj: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub show_all_weapons: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub show_spell_adj: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub hide_source_mismatch: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub hide_tl_column: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub hide_lc_column: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub hide_page_ref_column: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub use_title_in_footer: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub exclude_unspent_points_from_total: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub show_lifting_st_damage: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub show_iq_based_damage: bool,

    /// When set, the override fields replace the GURPS baselines
    /// outright; when clear, the adjustment fields are added to them.
    #[serde(skip_serializing_if = "is_false")]
    pub use_skill_modifier_adjustments: bool,

    #[serde(skip_serializing_if = "Fixed::is_zero")]
    pub easy_skill_modifier_override: Fixed,

    #[serde(skip_serializing_if = "Fixed::is_zero")]
    pub average_skill_modifier_override: Fixed,

    #[serde(skip_serializing_if = "Fixed::is_zero")]
    pub hard_skill_modifier_override: Fixed,

    #[serde(skip_serializing_if = "Fixed::is_zero")]
    pub very_hard_skill_modifier_override: Fixed,

    #[serde(skip_serializing_if = "Fixed::is_zero")]
    pub easy_skill_modifier_adjustment: Fixed,

    #[serde(skip_serializing_if = "Fixed::is_zero")]
    pub average_skill_modifier_adjustment: Fixed,

    #[serde(skip_serializing_if = "Fixed::is_zero")]
    pub hard_skill_modifier_adjustment: Fixed,

    #[serde(skip_serializing_if = "Fixed::is_zero")]
    pub very_hard_skill_modifier_adjustment: Fixed,

    #[serde(skip_serializing_if = "is_false")]
    pub use_basic_move_for_dodge: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub include_dodge_flat_bonus: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub include_pd_armor: bool,

    #[serde(skip_serializing_if = "is_false")]
    pub include_pd_shields: bool,

    /// GURPS 3E optional rule: PD applies when an active defense fails.
    #[serde(skip_serializing_if = "is_false")]
    pub use_passive_defense: bool,

    /// DEPRECATED: always synced with `use_passive_defense`; kept for
    /// documents written by older releases.
    #[serde(skip_serializing_if = "is_false")]
    pub show_pd_column: bool,

    #[serde(skip_serializing_if = "Fixed::is_zero")]
    pub dodge_override: Fixed,
}

impl SheetSettings {
    /// A new document with factory defaults.
    pub fn factory() -> Self {
        Self {
            page: Some(PageSettings::factory()),
            block_layout: Some(BlockLayout::factory()),
            attributes: Some(AttributeDefs::factory()),
            body_type: Some(Body::factory()),
            damage_progression: DamageProgression::BasicSet,
            default_length_units: LengthUnit::FeetAndInches,
            default_weight_units: WeightUnit::Pound,
            user_description_display: DisplayOption::Tooltip,
            modifiers_display: DisplayOption::Inline,
            notes_display: DisplayOption::Inline,
            skill_level_adj_display: DisplayOption::Tooltip,
            show_spell_adj: true,
            // GURPS 4E defaults: dodge from Basic Speed, flat +3, no PD
            use_basic_move_for_dodge: false,
            include_dodge_flat_bonus: true,
            include_pd_armor: false,
            include_pd_shields: false,
            use_passive_defense: false,
            ..Self::default()
        }
    }

    /// Checks the document for validity and, where it isn't valid,
    /// makes it so. Total and in place; nothing is ever reported.
    pub fn ensure_validity(&mut self) {
        match &mut self.page {
            Some(page) => page.ensure_validity(),
            None => self.page = Some(PageSettings::factory()),
        }
        match &mut self.block_layout {
            Some(block_layout) => block_layout.ensure_validity(),
            None => self.block_layout = Some(BlockLayout::factory()),
        }
        match &mut self.attributes {
            Some(attributes) => attributes.ensure_validity(),
            None => self.attributes = Some(AttributeDefs::factory()),
        }
        match &mut self.body_type {
            Some(body_type) => body_type.ensure_validity(),
            None => self.body_type = Some(Body::factory()),
        }
        // Enumerated fields heal to a valid member at decode time.

        // Sheets written before dodge customization existed carry none
        // of the dodge or skill-modifier keys, so all of those fields
        // decode to zero. Only that combination flips the 4E flat +3
        // back on; a new sheet that zeroes every one of them by hand is
        // indistinguishable and gets the same (rare) treatment. PD
        // fields are deliberately not part of the check: PD never
        // affects base dodge.
        let dodge_fields_at_defaults = !self.include_dodge_flat_bonus && !self.use_basic_move_for_dodge;
        let skill_modifier_fields_at_defaults = !self.use_skill_modifier_adjustments
            && self.easy_skill_modifier_override.is_zero()
            && self.average_skill_modifier_override.is_zero()
            && self.hard_skill_modifier_override.is_zero()
            && self.very_hard_skill_modifier_override.is_zero()
            && self.easy_skill_modifier_adjustment.is_zero()
            && self.average_skill_modifier_adjustment.is_zero()
            && self.hard_skill_modifier_adjustment.is_zero()
            && self.very_hard_skill_modifier_adjustment.is_zero();
        if dodge_fields_at_defaults && skill_modifier_fields_at_defaults {
            self.include_dodge_flat_bonus = true;
        }

        // The PD column is a derived mirror of the passive-defense rule.
        self.show_pd_column = self.use_passive_defense;
    }

    pub fn skill_modifier_override(&self, difficulty: Difficulty) -> Fixed {
        match difficulty {
            Difficulty::Easy => self.easy_skill_modifier_override,
            Difficulty::Average => self.average_skill_modifier_override,
            Difficulty::Hard => self.hard_skill_modifier_override,
            Difficulty::VeryHard => self.very_hard_skill_modifier_override,
        }
    }

    pub fn skill_modifier_adjustment(&self, difficulty: Difficulty) -> Fixed {
        match difficulty {
            Difficulty::Easy => self.easy_skill_modifier_adjustment,
            Difficulty::Average => self.average_skill_modifier_adjustment,
            Difficulty::Hard => self.hard_skill_modifier_adjustment,
            Difficulty::VeryHard => self.very_hard_skill_modifier_adjustment,
        }
    }

    /// The single effective relative-skill-level modifier for a tier.
    ///
    /// In adjustment mode (the default) the configured adjustment is
    /// added to the tier's GURPS 4E baseline. In override mode the
    /// configured override replaces the baseline outright and the
    /// adjustment fields are ignored. The mode is global to the
    /// document; tiers cannot mix semantics.
    pub fn effective_skill_modifier(&self, difficulty: Difficulty) -> Fixed {
        if self.use_skill_modifier_adjustments {
            self.skill_modifier_override(difficulty)
        } else {
            difficulty.base_relative_level() + self.skill_modifier_adjustment(difficulty)
        }
    }
}
