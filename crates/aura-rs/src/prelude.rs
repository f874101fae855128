//! Convenience re-exports for common `aura-rs` types.
//!
//! ```ignore
//! use aura_rs::prelude::*;
//! ```
//!
//! Covers the load → validate → render path. Section builders and the
//! line builder stay in [`crate::prompt`].

// ── Profile shape ───────────────────────────────────────────────────
pub use crate::schema::{AuraProfile, Boundaries, HexacoTrait, Metadata, Personality, Soma, Style};

// ── Loading ─────────────────────────────────────────────────────────
pub use crate::loader::{
    LoadError, LoadResult, SearchOptions, find_aura_profile, load_aura_from_directory,
    load_aura_profile, parse_aura_profile,
};
pub use crate::validate::{ValidationIssues, validate_profile};

// ── Rendering ───────────────────────────────────────────────────────
pub use crate::loader::{interpret_trait, is_soma_enabled};
pub use crate::prompt::{PromptOptions, aura_one_liner, aura_to_prompt, is_anti_sycophant};
