//! Typed AURA profile shape.
//!
//! These types are the output of [`validate_profile`](crate::validate::validate_profile):
//! every trait score held here has already been checked to lie in
//! `1..=10`, and every strict object has been checked for unknown keys.
//! They serialize back to the same field names as the source document and
//! derive [`JsonSchema`] so the shape can be published without the validator.

use schemars::JsonSchema;
use schemars::r#gen::SchemaSettings;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Smallest valid trait score.
pub const TRAIT_MIN: u8 = 1;
/// Largest valid trait score.
pub const TRAIT_MAX: u8 = 10;
/// Maximum length of a profile `name`, in characters.
pub const NAME_MAX_CHARS: usize = 100;

/// A validated AURA personality profile.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AuraProfile {
    /// Protocol version, `<major>.<minor>`.
    #[schemars(regex(pattern = r"^[0-9]+\.[0-9]+$"))]
    pub aura: String,
    /// Display name of the agent.
    #[schemars(length(min = 1, max = 100))]
    pub name: String,
    /// The six mandatory HEXACO scores.
    pub personality: Personality,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundaries: Option<Boundaries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soma: Option<Soma>,
    /// Free-form annotations. The only object that accepts unknown keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// HEXACO trait scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Personality {
    #[schemars(range(min = 1, max = 10))]
    pub honesty: u8,
    #[schemars(range(min = 1, max = 10))]
    pub emotionality: u8,
    #[schemars(range(min = 1, max = 10))]
    pub extraversion: u8,
    #[schemars(range(min = 1, max = 10))]
    pub agreeableness: u8,
    #[schemars(range(min = 1, max = 10))]
    pub conscientiousness: u8,
    #[schemars(range(min = 1, max = 10))]
    pub openness: u8,
}

impl Personality {
    /// Score for a single trait.
    pub fn get(&self, t: HexacoTrait) -> u8 {
        match t {
            HexacoTrait::Honesty => self.honesty,
            HexacoTrait::Emotionality => self.emotionality,
            HexacoTrait::Extraversion => self.extraversion,
            HexacoTrait::Agreeableness => self.agreeableness,
            HexacoTrait::Conscientiousness => self.conscientiousness,
            HexacoTrait::Openness => self.openness,
        }
    }

    /// All six `(trait, score)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (HexacoTrait, u8)> + '_ {
        HexacoTrait::ALL.into_iter().map(|t| (t, self.get(t)))
    }
}

/// Communication style scores. Every field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 10))]
    pub formality: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 10))]
    pub verbosity: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 10))]
    pub humor: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 10))]
    pub assertiveness: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 10))]
    pub autonomy: Option<u8>,
}

impl Style {
    /// Field names in declaration order.
    pub const FIELDS: [&'static str; 5] =
        ["formality", "verbosity", "humor", "assertiveness", "autonomy"];

    /// Defined `(field, score)` pairs in declaration order.
    pub fn defined(&self) -> Vec<(&'static str, u8)> {
        let values = [
            self.formality,
            self.verbosity,
            self.humor,
            self.assertiveness,
            self.autonomy,
        ];
        Self::FIELDS
            .into_iter()
            .zip(values)
            .filter_map(|(name, v)| v.map(|v| (name, v)))
            .collect()
    }

    /// True when no style field is defined.
    pub fn is_empty(&self) -> bool {
        self.defined().is_empty()
    }
}

/// Hard behavioral constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Boundaries {
    /// Cap on flattery.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 10))]
    pub max_adulation: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always_correct_errors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_uncertainty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub never: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub always: Option<Vec<String>>,
}

impl Boundaries {
    /// True when no field is defined at all. A field set to `false` or an
    /// empty list still counts as defined.
    pub fn is_empty(&self) -> bool {
        self.max_adulation.is_none()
            && self.always_correct_errors.is_none()
            && self.flag_uncertainty.is_none()
            && self.never.is_none()
            && self.always.is_none()
    }
}

/// SOMA soft-skill scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Soma {
    /// Absent means enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 10))]
    pub context_awareness: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 10))]
    pub emotional_intelligence: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 10))]
    pub communication: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 10))]
    pub ethics: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 10))]
    pub adaptability: Option<u8>,
}

impl Soma {
    /// Score field names in declaration order (`enabled` excluded).
    pub const FIELDS: [&'static str; 5] = [
        "context_awareness",
        "emotional_intelligence",
        "communication",
        "ethics",
        "adaptability",
    ];

    /// Defined `(field, score)` pairs in declaration order.
    pub fn defined(&self) -> Vec<(&'static str, u8)> {
        let values = [
            self.context_awareness,
            self.emotional_intelligence,
            self.communication,
            self.ethics,
            self.adaptability,
        ];
        Self::FIELDS
            .into_iter()
            .zip(values)
            .filter_map(|(name, v)| v.map(|v| (name, v)))
            .collect()
    }
}

/// Free-form profile annotations.
///
/// The five named keys are typed; anything else is kept verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Metadata {
    /// Keys with a declared type.
    pub const FIELDS: [&'static str; 5] = ["author", "description", "version", "created", "tags"];
}

/// The six HEXACO personality factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HexacoTrait {
    Honesty,
    Emotionality,
    Extraversion,
    Agreeableness,
    Conscientiousness,
    Openness,
}

impl HexacoTrait {
    /// Declaration order.
    pub const ALL: [HexacoTrait; 6] = [
        HexacoTrait::Honesty,
        HexacoTrait::Emotionality,
        HexacoTrait::Extraversion,
        HexacoTrait::Agreeableness,
        HexacoTrait::Conscientiousness,
        HexacoTrait::Openness,
    ];

    /// Field name as written in a profile document.
    pub fn as_str(self) -> &'static str {
        match self {
            HexacoTrait::Honesty => "honesty",
            HexacoTrait::Emotionality => "emotionality",
            HexacoTrait::Extraversion => "extraversion",
            HexacoTrait::Agreeableness => "agreeableness",
            HexacoTrait::Conscientiousness => "conscientiousness",
            HexacoTrait::Openness => "openness",
        }
    }

    /// Capitalized display label, e.g. `Honesty`.
    pub fn label(self) -> &'static str {
        match self {
            HexacoTrait::Honesty => "Honesty",
            HexacoTrait::Emotionality => "Emotionality",
            HexacoTrait::Extraversion => "Extraversion",
            HexacoTrait::Agreeableness => "Agreeableness",
            HexacoTrait::Conscientiousness => "Conscientiousness",
            HexacoTrait::Openness => "Openness",
        }
    }
}

impl fmt::Display for HexacoTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no HEXACO trait.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown personality trait '{0}'")]
pub struct UnknownTrait(pub String);

impl FromStr for HexacoTrait {
    type Err = UnknownTrait;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HexacoTrait::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTrait(s.to_string()))
    }
}

/// JSON Schema for [`AuraProfile`] as a `serde_json::Value`.
///
/// The schema is derived from the Rust types, so it tracks the validator's
/// closed key sets and score ranges. Optional fields are omitted from
/// `required` but never nullable: an explicit `null` is rejected by both.
///
/// ```
/// let schema = aura_rs::aura_json_schema();
/// assert_eq!(schema["type"], "object");
/// assert!(schema["required"].as_array().unwrap().contains(&"personality".into()));
/// ```
pub fn aura_json_schema() -> serde_json::Value {
    let schema = SchemaSettings::draft07()
        .with(|s| {
            s.option_nullable = false;
            s.option_add_null_type = false;
        })
        .into_generator()
        .into_root_schema_for::<AuraProfile>();
    serde_json::to_value(schema)
        .unwrap_or_else(|_| serde_json::json!({"type": "object", "properties": {}}))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn personality() -> Personality {
        Personality {
            honesty: 9,
            emotionality: 2,
            extraversion: 5,
            agreeableness: 5,
            conscientiousness: 8,
            openness: 8,
        }
    }

    #[test]
    fn personality_iter_follows_declaration_order() {
        let names: Vec<&str> = personality().iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(
            names,
            [
                "honesty",
                "emotionality",
                "extraversion",
                "agreeableness",
                "conscientiousness",
                "openness"
            ]
        );
        assert_eq!(personality().get(HexacoTrait::Conscientiousness), 8);
    }

    #[test]
    fn trait_round_trips_through_str() {
        for t in HexacoTrait::ALL {
            assert_eq!(t.to_string().parse::<HexacoTrait>().unwrap(), t);
        }
        assert_eq!(
            "luck".parse::<HexacoTrait>().unwrap_err(),
            UnknownTrait("luck".into())
        );
    }

    #[test]
    fn style_defined_skips_missing_fields() {
        let style = Style {
            humor: Some(7),
            formality: Some(2),
            ..Default::default()
        };
        assert_eq!(style.defined(), vec![("formality", 2), ("humor", 7)]);
        assert!(Style::default().is_empty());
    }

    #[test]
    fn boundaries_with_false_flag_is_not_empty() {
        let b = Boundaries {
            flag_uncertainty: Some(false),
            ..Default::default()
        };
        assert!(!b.is_empty());
        assert!(Boundaries::default().is_empty());
    }

    #[test]
    fn serialization_omits_absent_sections() {
        let profile = AuraProfile {
            aura: "1.0".into(),
            name: "Ada".into(),
            personality: personality(),
            style: None,
            boundaries: None,
            soma: None,
            metadata: None,
        };
        let value = serde_json::to_value(&profile).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["aura", "name", "personality"]);
    }

    #[test]
    fn metadata_extra_keys_are_flattened() {
        let mut meta = Metadata {
            author: Some("me".into()),
            ..Default::default()
        };
        meta.extra.insert("team".into(), serde_json::json!("core"));
        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(value, serde_json::json!({"author": "me", "team": "core"}));
    }

    #[test]
    fn json_schema_marks_strict_objects() {
        let schema = aura_json_schema();
        assert_eq!(schema["additionalProperties"], serde_json::json!(false));
        let required = schema["required"].as_array().unwrap();
        for key in ["aura", "name", "personality"] {
            assert!(required.contains(&key.into()), "missing {key}");
        }
    }

    #[test]
    fn json_schema_optional_fields_are_not_nullable() {
        let schema = aura_json_schema();
        let style = &schema["properties"]["style"];
        assert_eq!(style["$ref"], "#/definitions/Style");
        assert!(style.get("anyOf").is_none(), "{style}");

        let formality = &schema["definitions"]["Style"]["properties"]["formality"];
        assert_eq!(formality["type"], "integer");
        assert_eq!(formality["minimum"].as_f64(), Some(1.0));
        assert_eq!(formality["maximum"].as_f64(), Some(10.0));

        assert!(!schema.to_string().contains("\"null\""));
    }
}
