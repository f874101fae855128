//! Load, validate, and render AURA agent personality profiles.
//!
//! An AURA profile is a small YAML document describing an agent's character:
//! six mandatory HEXACO personality scores, plus optional style, boundaries,
//! SOMA soft skills, and free-form metadata. `aura-rs` finds the profile for
//! a workspace, validates it against a fixed schema, and renders it as
//! natural-language instructions to splice into a system prompt.
//!
//! Data flows one way: file bytes → YAML tree → validated
//! [`AuraProfile`] → prompt text.
//!
//! # Getting started
//!
//! ```no_run
//! use aura_rs::prelude::*;
//! use std::path::Path;
//!
//! let result = load_aura_from_directory(Path::new("./workspace"), &SearchOptions::default());
//! match result {
//!     LoadResult::Loaded { profile, .. } => {
//!         println!("{}", aura_to_prompt(&profile, &PromptOptions::default()));
//!     }
//!     LoadResult::NotFound => {} // profiles are optional
//!     LoadResult::Failed { error, .. } => eprintln!("{error}"),
//! }
//! ```
//!
//! # Modules
//!
//! - [`schema`]: the typed profile shape and its JSON Schema.
//! - [`validate`]: [`validate_profile`] over any parsed `serde_json::Value`.
//! - [`loader`]: discovery ([`find_aura_profile`]), loading, and the
//!   [`LoadResult`] outcome type.
//! - [`prompt`]: [`aura_to_prompt`], [`aura_one_liner`], [`is_anti_sycophant`].
//!
//! Every operation is synchronous and stateless; profiles are built fresh
//! on each call and owned by the caller.

pub mod loader;
pub mod prelude;
pub mod prompt;
pub mod schema;
pub mod validate;

pub use loader::{
    LoadError, LoadResult, SearchOptions, find_aura_profile, interpret_trait, is_soma_enabled,
    load_aura_from_directory, load_aura_profile, parse_aura_profile,
};
pub use prompt::{PromptOptions, aura_one_liner, aura_to_prompt, is_anti_sycophant};
pub use schema::{
    AuraProfile, Boundaries, HexacoTrait, Metadata, Personality, Soma, Style, UnknownTrait,
    aura_json_schema,
};
pub use validate::{ValidationIssue, ValidationIssues, validate_profile};

// Re-export the parser's error type so hosts can match on syntax failures.
pub use serde_yaml;
