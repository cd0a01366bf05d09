//! Field catalog for equipment stats.
//!
//! Each editable scalar field is named once here with its wire key, label
//! and validation bound. The editor form and validation both iterate these
//! catalogs instead of spelling out every field by hand.

use std::fmt;

use crate::entities::EquipmentStats;

/// Alignment used when the user hasn't chosen one.
pub const DEFAULT_ALIGNMENT: &str = "Neutral";

/// Alignments offered by the editor.
pub const ALIGNMENT_OPTIONS: &[&str] = &["Good", "Neutral", "Evil"];

/// Handedness used when the user hasn't chosen one.
pub const DEFAULT_HANDEDNESS: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Handedness,
    DamageMin,
    DamageMax,
    Defense,
    StrengthRequirement,
    DexterityRequirement,
    ConstitutionRequirement,
    IntelligenceRequirement,
    WisdomRequirement,
    CharismaRequirement,
    HitPoints,
    ManaPoints,
    StrengthBonus,
    DexterityBonus,
    ConstitutionBonus,
    IntelligenceBonus,
    WisdomBonus,
    CharismaBonus,
    Value,
}

impl NumericField {
    pub const ALL: [NumericField; 19] = [
        Self::Handedness,
        Self::DamageMin,
        Self::DamageMax,
        Self::Defense,
        Self::StrengthRequirement,
        Self::DexterityRequirement,
        Self::ConstitutionRequirement,
        Self::IntelligenceRequirement,
        Self::WisdomRequirement,
        Self::CharismaRequirement,
        Self::HitPoints,
        Self::ManaPoints,
        Self::StrengthBonus,
        Self::DexterityBonus,
        Self::ConstitutionBonus,
        Self::IntelligenceBonus,
        Self::WisdomBonus,
        Self::CharismaBonus,
        Self::Value,
    ];

    /// Combat stats shown at the top of the form.
    pub const COMBAT: [NumericField; 6] = [
        Self::Handedness,
        Self::DamageMin,
        Self::DamageMax,
        Self::Defense,
        Self::HitPoints,
        Self::ManaPoints,
    ];

    pub const REQUIREMENTS: [NumericField; 6] = [
        Self::StrengthRequirement,
        Self::DexterityRequirement,
        Self::ConstitutionRequirement,
        Self::IntelligenceRequirement,
        Self::WisdomRequirement,
        Self::CharismaRequirement,
    ];

    pub const BONUSES: [NumericField; 6] = [
        Self::StrengthBonus,
        Self::DexterityBonus,
        Self::ConstitutionBonus,
        Self::IntelligenceBonus,
        Self::WisdomBonus,
        Self::CharismaBonus,
    ];

    /// Wire field name.
    pub fn key(self) -> &'static str {
        match self {
            Self::Handedness => "handedness",
            Self::DamageMin => "damageMin",
            Self::DamageMax => "damageMax",
            Self::Defense => "defense",
            Self::StrengthRequirement => "strengthRequirement",
            Self::DexterityRequirement => "dexterityRequirement",
            Self::ConstitutionRequirement => "constitutionRequirement",
            Self::IntelligenceRequirement => "intelligenceRequirement",
            Self::WisdomRequirement => "wisdomRequirement",
            Self::CharismaRequirement => "charismaRequirement",
            Self::HitPoints => "hitPoints",
            Self::ManaPoints => "manaPoints",
            Self::StrengthBonus => "strengthBonus",
            Self::DexterityBonus => "dexterityBonus",
            Self::ConstitutionBonus => "constitutionBonus",
            Self::IntelligenceBonus => "intelligenceBonus",
            Self::WisdomBonus => "wisdomBonus",
            Self::CharismaBonus => "charismaBonus",
            Self::Value => "value",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Handedness => "Handedness",
            Self::DamageMin => "Damage (min)",
            Self::DamageMax => "Damage (max)",
            Self::Defense => "Defense",
            Self::StrengthRequirement | Self::StrengthBonus => "Strength",
            Self::DexterityRequirement | Self::DexterityBonus => "Dexterity",
            Self::ConstitutionRequirement | Self::ConstitutionBonus => "Constitution",
            Self::IntelligenceRequirement | Self::IntelligenceBonus => "Intelligence",
            Self::WisdomRequirement | Self::WisdomBonus => "Wisdom",
            Self::CharismaRequirement | Self::CharismaBonus => "Charisma",
            Self::HitPoints => "Hit points",
            Self::ManaPoints => "Mana points",
            Self::Value => "Value",
        }
    }

    /// Lower bound enforced on submit. Handedness and bonuses are unbounded;
    /// a cursed item may carry negative bonuses.
    pub fn minimum(self) -> Option<i32> {
        match self {
            Self::Handedness
            | Self::StrengthBonus
            | Self::DexterityBonus
            | Self::ConstitutionBonus
            | Self::IntelligenceBonus
            | Self::WisdomBonus
            | Self::CharismaBonus => None,
            _ => Some(0),
        }
    }

    pub fn get(self, stats: &EquipmentStats) -> i32 {
        match self {
            Self::Handedness => stats.handedness,
            Self::DamageMin => stats.damage_min,
            Self::DamageMax => stats.damage_max,
            Self::Defense => stats.defense,
            Self::StrengthRequirement => stats.strength_requirement,
            Self::DexterityRequirement => stats.dexterity_requirement,
            Self::ConstitutionRequirement => stats.constitution_requirement,
            Self::IntelligenceRequirement => stats.intelligence_requirement,
            Self::WisdomRequirement => stats.wisdom_requirement,
            Self::CharismaRequirement => stats.charisma_requirement,
            Self::HitPoints => stats.hit_points,
            Self::ManaPoints => stats.mana_points,
            Self::StrengthBonus => stats.strength_bonus,
            Self::DexterityBonus => stats.dexterity_bonus,
            Self::ConstitutionBonus => stats.constitution_bonus,
            Self::IntelligenceBonus => stats.intelligence_bonus,
            Self::WisdomBonus => stats.wisdom_bonus,
            Self::CharismaBonus => stats.charisma_bonus,
            Self::Value => stats.value,
        }
    }

    pub fn set(self, stats: &mut EquipmentStats, value: i32) {
        let slot = match self {
            Self::Handedness => &mut stats.handedness,
            Self::DamageMin => &mut stats.damage_min,
            Self::DamageMax => &mut stats.damage_max,
            Self::Defense => &mut stats.defense,
            Self::StrengthRequirement => &mut stats.strength_requirement,
            Self::DexterityRequirement => &mut stats.dexterity_requirement,
            Self::ConstitutionRequirement => &mut stats.constitution_requirement,
            Self::IntelligenceRequirement => &mut stats.intelligence_requirement,
            Self::WisdomRequirement => &mut stats.wisdom_requirement,
            Self::CharismaRequirement => &mut stats.charisma_requirement,
            Self::HitPoints => &mut stats.hit_points,
            Self::ManaPoints => &mut stats.mana_points,
            Self::StrengthBonus => &mut stats.strength_bonus,
            Self::DexterityBonus => &mut stats.dexterity_bonus,
            Self::ConstitutionBonus => &mut stats.constitution_bonus,
            Self::IntelligenceBonus => &mut stats.intelligence_bonus,
            Self::WisdomBonus => &mut stats.wisdom_bonus,
            Self::CharismaBonus => &mut stats.charisma_bonus,
            Self::Value => &mut stats.value,
        };
        *slot = value;
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Name,
    Type,
    Alignment,
    Special,
    Special2,
    IconUrl,
}

impl TextField {
    pub const ALL: [TextField; 6] = [
        Self::Name,
        Self::Type,
        Self::Alignment,
        Self::Special,
        Self::Special2,
        Self::IconUrl,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::Alignment => "alignment",
            Self::Special => "special",
            Self::Special2 => "special2",
            Self::IconUrl => "iconUrl",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Type => "Type",
            Self::Alignment => "Alignment",
            Self::Special => "Special",
            Self::Special2 => "Special (2)",
            Self::IconUrl => "Icon URL",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Type | Self::Alignment)
    }

    pub fn get(self, stats: &EquipmentStats) -> &str {
        match self {
            Self::Name => &stats.name,
            Self::Type => &stats.equipment_type,
            Self::Alignment => &stats.alignment,
            Self::Special => &stats.special,
            Self::Special2 => &stats.special2,
            Self::IconUrl => &stats.icon_url,
        }
    }

    pub fn set(self, stats: &mut EquipmentStats, value: impl Into<String>) {
        let slot = match self {
            Self::Name => &mut stats.name,
            Self::Type => &mut stats.equipment_type,
            Self::Alignment => &mut stats.alignment,
            Self::Special => &mut stats.special,
            Self::Special2 => &mut stats.special2,
            Self::IconUrl => &mut stats.icon_url,
        };
        *slot = value.into();
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_match_serialized_field_names() {
        let json = serde_json::to_value(EquipmentStats::default()).unwrap();
        let object = json.as_object().unwrap();

        for field in NumericField::ALL {
            assert!(object.contains_key(field.key()), "{}", field.key());
        }
        for field in TextField::ALL {
            assert!(object.contains_key(field.key()), "{}", field.key());
        }
    }

    #[test]
    fn set_then_get_targets_the_same_field() {
        let mut stats = EquipmentStats::default();
        for (i, field) in NumericField::ALL.into_iter().enumerate() {
            field.set(&mut stats, i as i32 + 100);
        }
        for (i, field) in NumericField::ALL.into_iter().enumerate() {
            assert_eq!(field.get(&stats), i as i32 + 100, "{}", field);
        }
    }

    #[test]
    fn bonuses_have_no_minimum() {
        for field in NumericField::BONUSES {
            assert_eq!(field.minimum(), None);
        }
        for field in NumericField::REQUIREMENTS {
            assert_eq!(field.minimum(), Some(0));
        }
    }
}
