//! Profile validation over a generic parsed tree.
//!
//! [`validate_profile`] walks a `serde_json::Value` (whatever the structured
//! text parsed into) and either builds a typed [`AuraProfile`] or returns
//! every rule violation it found. Within each object, declared fields are
//! reported in declaration order, then unknown keys. Validation never stops
//! at the first problem so a hand-edited file can be fixed in one pass.
//!
//! Every object is closed (unknown keys are errors) except `metadata`, which
//! is open and keeps unknown keys verbatim.

use regex::Regex;
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use crate::schema::{
    AuraProfile, Boundaries, Metadata, NAME_MAX_CHARS, Personality, Soma, Style, TRAIT_MAX,
    TRAIT_MIN,
};

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+$").expect("version regex"));

const PROFILE_KEYS: [&str; 7] = [
    "aura",
    "name",
    "personality",
    "style",
    "boundaries",
    "soma",
    "metadata",
];
const PERSONALITY_KEYS: [&str; 6] = [
    "honesty",
    "emotionality",
    "extraversion",
    "agreeableness",
    "conscientiousness",
    "openness",
];
const BOUNDARY_KEYS: [&str; 5] = [
    "max_adulation",
    "always_correct_errors",
    "flag_uncertainty",
    "never",
    "always",
];
const SOMA_KEYS: [&str; 6] = [
    "enabled",
    "context_awareness",
    "emotional_intelligence",
    "communication",
    "ethics",
    "adaptability",
];

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Path segments from the document root; list indexes are decimal.
    pub path: Vec<String>,
    /// Human-readable description of the violation.
    pub message: String,
}

impl ValidationIssue {
    fn new(path: &[String], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }

    /// Dot-joined path, e.g. `personality.honesty`. The root is `(root)`.
    pub fn path_string(&self) -> String {
        if self.path.is_empty() {
            "(root)".to_string()
        } else {
            self.path.join(".")
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path_string(), self.message)
    }
}

/// Every violation found in one validation pass: declared fields in
/// declaration order, then unknown keys.
///
/// Displays as the issues joined with `"; "`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssues(Vec<ValidationIssue>);

impl ValidationIssues {
    /// Iterate over the issues.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationIssue> {
        self.0.iter()
    }

    /// Number of issues.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no issue was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Paths of every issue, dot-joined.
    pub fn paths(&self) -> Vec<String> {
        self.0.iter().map(ValidationIssue::path_string).collect()
    }

    /// Take the issues out as a plain list.
    pub fn into_vec(self) -> Vec<ValidationIssue> {
        self.0
    }
}

impl fmt::Display for ValidationIssues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl std::error::Error for ValidationIssues {}

impl<'a> IntoIterator for &'a ValidationIssues {
    type Item = &'a ValidationIssue;
    type IntoIter = std::slice::Iter<'a, ValidationIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Validate a parsed document against the AURA profile shape.
///
/// Succeeds only when the whole document is valid; a single bad field in an
/// optional section fails the entire profile.
pub fn validate_profile(tree: &Value) -> Result<AuraProfile, ValidationIssues> {
    let mut validator = Validator::default();
    let profile = validator.profile(tree);
    match profile {
        Some(profile) if validator.issues.is_empty() => Ok(profile),
        _ => Err(ValidationIssues(validator.issues)),
    }
}

/// Whether an object rejects keys it does not declare.
#[derive(Debug, Clone, Copy)]
enum KeySet<'k> {
    Closed(&'k [&'k str]),
    Open,
}

type Check<T> = fn(&mut Validator, &Value, &[String]) -> Option<T>;

/// Accumulates issues while building typed values.
///
/// Every check returns `None` only after recording at least one issue.
#[derive(Default)]
struct Validator {
    issues: Vec<ValidationIssue>,
}

impl Validator {
    fn push(&mut self, path: &[String], message: impl Into<String>) {
        self.issues.push(ValidationIssue::new(path, message));
    }

    fn profile(&mut self, tree: &Value) -> Option<AuraProfile> {
        let root: Vec<String> = Vec::new();
        let obj = self.object(tree, &root)?;

        let aura = self.required(obj, &root, "aura", Self::version);
        let name = self.required(obj, &root, "name", Self::name);
        let personality = self.required(obj, &root, "personality", Self::personality);
        let style = self.optional(obj, &root, "style", Self::style);
        let boundaries = self.optional(obj, &root, "boundaries", Self::boundaries);
        let soma = self.optional(obj, &root, "soma", Self::soma);
        let metadata = self.optional(obj, &root, "metadata", Self::metadata);
        self.check_keys(obj, &root, KeySet::Closed(&PROFILE_KEYS));

        Some(AuraProfile {
            aura: aura?,
            name: name?,
            personality: personality?,
            style: style?,
            boundaries: boundaries?,
            soma: soma?,
            metadata: metadata?,
        })
    }

    fn personality(&mut self, value: &Value, path: &[String]) -> Option<Personality> {
        let obj = self.object(value, path)?;
        let scores = PERSONALITY_KEYS.map(|key| self.required(obj, path, key, Self::score));
        self.check_keys(obj, path, KeySet::Closed(&PERSONALITY_KEYS));

        let [honesty, emotionality, extraversion, agreeableness, conscientiousness, openness] =
            scores;
        Some(Personality {
            honesty: honesty?,
            emotionality: emotionality?,
            extraversion: extraversion?,
            agreeableness: agreeableness?,
            conscientiousness: conscientiousness?,
            openness: openness?,
        })
    }

    fn style(&mut self, value: &Value, path: &[String]) -> Option<Style> {
        let obj = self.object(value, path)?;
        let scores = Style::FIELDS.map(|key| self.optional(obj, path, key, Self::score));
        self.check_keys(obj, path, KeySet::Closed(&Style::FIELDS));

        let [formality, verbosity, humor, assertiveness, autonomy] = scores;
        Some(Style {
            formality: formality?,
            verbosity: verbosity?,
            humor: humor?,
            assertiveness: assertiveness?,
            autonomy: autonomy?,
        })
    }

    fn boundaries(&mut self, value: &Value, path: &[String]) -> Option<Boundaries> {
        let obj = self.object(value, path)?;
        let max_adulation = self.optional(obj, path, "max_adulation", Self::score);
        let always_correct_errors = self.optional(obj, path, "always_correct_errors", Self::boolean);
        let flag_uncertainty = self.optional(obj, path, "flag_uncertainty", Self::boolean);
        let never = self.optional(obj, path, "never", Self::string_list);
        let always = self.optional(obj, path, "always", Self::string_list);
        self.check_keys(obj, path, KeySet::Closed(&BOUNDARY_KEYS));

        Some(Boundaries {
            max_adulation: max_adulation?,
            always_correct_errors: always_correct_errors?,
            flag_uncertainty: flag_uncertainty?,
            never: never?,
            always: always?,
        })
    }

    fn soma(&mut self, value: &Value, path: &[String]) -> Option<Soma> {
        let obj = self.object(value, path)?;
        let enabled = self.optional(obj, path, "enabled", Self::boolean);
        let scores = Soma::FIELDS.map(|key| self.optional(obj, path, key, Self::score));
        self.check_keys(obj, path, KeySet::Closed(&SOMA_KEYS));

        let [
            context_awareness,
            emotional_intelligence,
            communication,
            ethics,
            adaptability,
        ] = scores;
        Some(Soma {
            enabled: enabled?,
            context_awareness: context_awareness?,
            emotional_intelligence: emotional_intelligence?,
            communication: communication?,
            ethics: ethics?,
            adaptability: adaptability?,
        })
    }

    fn metadata(&mut self, value: &Value, path: &[String]) -> Option<Metadata> {
        let obj = self.object(value, path)?;
        let author = self.optional(obj, path, "author", Self::string);
        let description = self.optional(obj, path, "description", Self::string);
        let version = self.optional(obj, path, "version", Self::string);
        let created = self.optional(obj, path, "created", Self::string);
        let tags = self.optional(obj, path, "tags", Self::string_list);
        self.check_keys(obj, path, KeySet::Open);

        let extra: BTreeMap<String, Value> = obj
            .iter()
            .filter(|(key, _)| !Metadata::FIELDS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Some(Metadata {
            author: author?,
            description: description?,
            version: version?,
            created: created?,
            tags: tags?,
            extra,
        })
    }

    // ── Field plumbing ──────────────────────────────────────────────

    fn required<T>(
        &mut self,
        obj: &Map<String, Value>,
        parent: &[String],
        key: &str,
        check: Check<T>,
    ) -> Option<T> {
        let path = child(parent, key);
        match obj.get(key) {
            Some(value) => check(self, value, &path),
            None => {
                self.push(&path, "Required");
                None
            }
        }
    }

    /// `Some(None)` when absent, `None` when present but invalid.
    fn optional<T>(
        &mut self,
        obj: &Map<String, Value>,
        parent: &[String],
        key: &str,
        check: Check<T>,
    ) -> Option<Option<T>> {
        match obj.get(key) {
            Some(value) => check(self, value, &child(parent, key)).map(Some),
            None => Some(None),
        }
    }

    fn check_keys(&mut self, obj: &Map<String, Value>, path: &[String], keys: KeySet<'_>) {
        let KeySet::Closed(allowed) = keys else {
            return;
        };
        for key in obj.keys() {
            if !allowed.contains(&key.as_str()) {
                self.push(&child(path, key), format!("Unrecognized key '{key}'"));
            }
        }
    }

    // ── Leaf checks ─────────────────────────────────────────────────

    fn object<'v>(&mut self, value: &'v Value, path: &[String]) -> Option<&'v Map<String, Value>> {
        match value {
            Value::Object(map) => Some(map),
            other => {
                self.push(path, mismatch("object", other));
                None
            }
        }
    }

    fn score(&mut self, value: &Value, path: &[String]) -> Option<u8> {
        let Value::Number(n) = value else {
            self.push(path, mismatch("integer", value));
            return None;
        };
        let Some(n) = integral(n) else {
            self.push(path, "Expected integer, received float");
            return None;
        };
        match u8::try_from(n) {
            Ok(score) if (TRAIT_MIN..=TRAIT_MAX).contains(&score) => Some(score),
            _ => {
                self.push(
                    path,
                    format!("Number must be between {TRAIT_MIN} and {TRAIT_MAX}"),
                );
                None
            }
        }
    }

    fn boolean(&mut self, value: &Value, path: &[String]) -> Option<bool> {
        match value {
            Value::Bool(b) => Some(*b),
            other => {
                self.push(path, mismatch("boolean", other));
                None
            }
        }
    }

    fn string(&mut self, value: &Value, path: &[String]) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            other => {
                self.push(path, mismatch("string", other));
                None
            }
        }
    }

    fn string_list(&mut self, value: &Value, path: &[String]) -> Option<Vec<String>> {
        let Value::Array(items) = value else {
            self.push(path, mismatch("array", value));
            return None;
        };
        let before = self.issues.len();
        let list: Vec<String> = items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| self.string(item, &child(path, &i.to_string())))
            .collect();
        (self.issues.len() == before).then_some(list)
    }

    fn version(&mut self, value: &Value, path: &[String]) -> Option<String> {
        let version = self.string(value, path)?;
        if VERSION_RE.is_match(&version) {
            Some(version)
        } else {
            self.push(path, "Invalid version, expected <major>.<minor>");
            None
        }
    }

    fn name(&mut self, value: &Value, path: &[String]) -> Option<String> {
        let name = self.string(value, path)?;
        let chars = name.chars().count();
        if chars < 1 {
            self.push(path, "String must contain at least 1 character(s)");
            None
        } else if chars > NAME_MAX_CHARS {
            self.push(
                path,
                format!("String must contain at most {NAME_MAX_CHARS} character(s)"),
            );
            None
        } else {
            Some(name)
        }
    }
}

fn child(parent: &[String], key: &str) -> Vec<String> {
    let mut path = parent.to_vec();
    path.push(key.to_string());
    path
}

/// Integer value of a number, accepting floats with no fractional part.
fn integral(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    if n.is_u64() {
        return Some(i64::MAX);
    }
    let f = n.as_f64()?;
    (f.is_finite() && f.fract() == 0.0).then_some(f as i64)
}

fn mismatch(expected: &str, found: &Value) -> String {
    format!("Expected {expected}, received {}", kind(found))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
