//! Profile discovery and loading.
//!
//! A profile is optional for any agent, so "no file" is a normal outcome
//! rather than an error. Every entry point returns a [`LoadResult`] value and
//! never panics or propagates an error past this module.
//!
//! Discovery order within a directory:
//! 1. An explicit path (relative to the directory unless absolute). When an
//!    explicit path is given and missing, discovery stops there.
//! 2. `{dir}/{agent_id}.aura.yaml`
//! 3. `{dir}/AURA.yaml`
//! 4. `{dir}/aura.yaml`

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::schema::{AuraProfile, HexacoTrait};
use crate::validate::{ValidationIssues, validate_profile};

/// Default file names checked after the agent-specific file.
pub const DEFAULT_PROFILE_FILES: [&str; 2] = ["AURA.yaml", "aura.yaml"];

/// Suffix of agent-specific profile files, `{agent_id}.aura.yaml`.
pub const AGENT_PROFILE_SUFFIX: &str = ".aura.yaml";

/// Where to look for a profile beyond the default file names.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Profile path that overrides discovery entirely.
    pub explicit_path: Option<PathBuf>,
    /// Agent whose `{agent_id}.aura.yaml` is preferred over the defaults.
    pub agent_id: Option<String>,
}

impl SearchOptions {
    /// Defaults only: no explicit path, no agent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this path instead of searching.
    pub fn with_explicit_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_path = Some(path.into());
        self
    }

    /// Prefer the profile for this agent.
    pub fn with_agent_id(mut self, agent_id: impl Into<String>) -> Self {
        self.agent_id = Some(agent_id.into());
        self
    }
}

/// Why a found profile could not be used.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to load AURA profile: {0}")]
    Read(#[from] std::io::Error),

    /// The text is not well-formed YAML.
    #[error("Failed to parse AURA profile: {0}")]
    Syntax(#[from] serde_yaml::Error),

    /// The document parsed but breaks the profile schema.
    #[error("AURA validation failed: {0}")]
    Validation(#[from] ValidationIssues),
}

/// Outcome of a load: exactly one of loaded, not found, or failed.
#[derive(Debug)]
pub enum LoadResult {
    /// A valid profile. `path` is `None` when parsed from memory.
    Loaded {
        profile: AuraProfile,
        path: Option<PathBuf>,
    },
    /// No profile file exists. Not an error.
    NotFound,
    /// A profile was found but could not be read, parsed, or validated.
    Failed {
        path: Option<PathBuf>,
        error: LoadError,
    },
}

impl LoadResult {
    /// The profile, when loaded.
    pub fn profile(&self) -> Option<&AuraProfile> {
        match self {
            Self::Loaded { profile, .. } => Some(profile),
            _ => None,
        }
    }

    /// Consume the result, keeping only a loaded profile.
    pub fn into_profile(self) -> Option<AuraProfile> {
        match self {
            Self::Loaded { profile, .. } => Some(profile),
            _ => None,
        }
    }

    /// Path the profile was loaded from, if it came from a file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Loaded { path, .. } | Self::Failed { path, .. } => path.as_deref(),
            Self::NotFound => None,
        }
    }

    /// Rendered error message for a failed load.
    pub fn error(&self) -> Option<String> {
        self.load_error().map(ToString::to_string)
    }

    /// The typed error for a failed load.
    pub fn load_error(&self) -> Option<&LoadError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// True for [`LoadResult::Loaded`].
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    /// True for [`LoadResult::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// True for [`LoadResult::Failed`].
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Find the profile file for a directory without reading it.
///
/// Returns `None` when nothing matches. Only existence is checked.
pub fn find_aura_profile(dir: &Path, options: &SearchOptions) -> Option<PathBuf> {
    let explicit = options
        .explicit_path
        .as_ref()
        .filter(|p| !p.as_os_str().is_empty());
    if let Some(explicit) = explicit {
        let resolved = if explicit.is_absolute() {
            explicit.clone()
        } else {
            dir.join(explicit)
        };
        if resolved.exists() {
            debug!("Using explicit AURA profile {}", resolved.display());
            return Some(resolved);
        }
        debug!("Explicit AURA profile {} not found", resolved.display());
        return None;
    }

    let agent_file = options
        .agent_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .map(|id| format!("{id}{AGENT_PROFILE_SUFFIX}"));

    let found = agent_file
        .iter()
        .map(String::as_str)
        .chain(DEFAULT_PROFILE_FILES)
        .map(|name| dir.join(name))
        .find(|candidate| candidate.exists());

    match &found {
        Some(path) => debug!("Found AURA profile {}", path.display()),
        None => debug!("No AURA profile in {}", dir.display()),
    }
    found
}

/// Read, parse, and validate the profile at `path`.
pub fn load_aura_profile(path: &Path) -> LoadResult {
    let result = match fs::read_to_string(path) {
        Ok(text) => parse_text(&text),
        Err(e) => Err(LoadError::Read(e)),
    };
    match result {
        Ok(profile) => {
            debug!(
                "Loaded AURA profile '{}' from {}",
                profile.name,
                path.display()
            );
            LoadResult::Loaded {
                profile,
                path: Some(path.to_path_buf()),
            }
        }
        Err(error) => {
            warn!("{error} ({})", path.display());
            LoadResult::Failed {
                path: Some(path.to_path_buf()),
                error,
            }
        }
    }
}

/// Parse and validate a profile held in memory. The result never has a path.
pub fn parse_aura_profile(text: &str) -> LoadResult {
    match parse_text(text) {
        Ok(profile) => LoadResult::Loaded {
            profile,
            path: None,
        },
        Err(error) => LoadResult::Failed { path: None, error },
    }
}

/// Discover and load the profile for a directory.
///
/// A directory without a profile yields [`LoadResult::NotFound`].
pub fn load_aura_from_directory(dir: &Path, options: &SearchOptions) -> LoadResult {
    match find_aura_profile(dir, options) {
        Some(path) => load_aura_profile(&path),
        None => LoadResult::NotFound,
    }
}

fn parse_text(text: &str) -> Result<AuraProfile, LoadError> {
    let tree: serde_json::Value = serde_yaml::from_str(text)?;
    Ok(validate_profile(&tree)?)
}

// ── Profile utilities ────────────────────────────────────────────────

/// Low / mid / high descriptors for a HEXACO trait.
fn trait_descriptors(t: HexacoTrait) -> [&'static str; 3] {
    match t {
        HexacoTrait::Honesty => [
            "Diplomatic, tactful",
            "Balanced honesty",
            "Direct, corrects errors, minimal flattery",
        ],
        HexacoTrait::Emotionality => [
            "Stoic, calm",
            "Moderate expression",
            "Expressive, empathetic",
        ],
        HexacoTrait::Extraversion => [
            "Reserved, concise",
            "Balanced engagement",
            "Elaborate, high energy",
        ],
        HexacoTrait::Agreeableness => [
            "Critical, debates readily",
            "Cooperative with standards",
            "Patient, accommodating",
        ],
        HexacoTrait::Conscientiousness => [
            "Flexible, spontaneous",
            "Balanced structure",
            "Organized, thorough",
        ],
        HexacoTrait::Openness => [
            "Conventional, practical",
            "Balanced creativity",
            "Creative, unconventional",
        ],
    }
}

/// Describe a trait score: `<= 3` low, `4..=6` mid, `>= 7` high.
pub fn interpret_trait(t: HexacoTrait, value: u8) -> &'static str {
    let [low, mid, high] = trait_descriptors(t);
    match value {
        0..=3 => low,
        4..=6 => mid,
        _ => high,
    }
}

/// SOMA is on when the section exists and `enabled` is not `false`.
pub fn is_soma_enabled(profile: &AuraProfile) -> bool {
    profile
        .soma
        .as_ref()
        .is_some_and(|soma| soma.enabled != Some(false))
}
