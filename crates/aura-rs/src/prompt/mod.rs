//! Rendering a validated profile into system prompt text.
//!
//! [`aura_to_prompt`] is pure and deterministic: the same profile and
//! options always produce the same text. Blocks appear in a fixed order:
//!
//! 1. `## AURA Profile: <name>` header (plus an italic description line)
//! 2. Personality, always present
//! 3. Style, when at least one style score is set
//! 4. Boundaries, when at least one boundary field is set
//! 5. SOMA, when requested and enabled
//! 6. A closing instruction line
//!
//! The renderer trusts its input; validity is established once at load time.

pub mod builder;
pub mod sections;
pub mod summary;

pub use builder::PromptBuilder;
pub use summary::{aura_one_liner, is_anti_sycophant};

use crate::loader::is_soma_enabled;
use crate::schema::AuraProfile;
use sections::{
    BOUNDARIES_HEADING, PERSONALITY_HEADING, SOMA_HEADING, STYLE_HEADING, boundary_lines,
    personality_lines, soma_lines, style_lines,
};

/// Final line of every rendered profile.
pub const CLOSING_INSTRUCTION: &str =
    "Apply these personality traits and constraints consistently in all responses.";

/// Rendering switches for [`aura_to_prompt`].
#[derive(Debug, Clone, Copy)]
pub struct PromptOptions {
    /// Render the SOMA block when the profile enables it. Default: `true`.
    pub include_soma: bool,
    /// Pipe-joined rows instead of one bullet per field. Default: `false`.
    pub compact: bool,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            include_soma: true,
            compact: false,
        }
    }
}

impl PromptOptions {
    pub fn with_include_soma(mut self, include_soma: bool) -> Self {
        self.include_soma = include_soma;
        self
    }

    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }
}

/// Render a profile as system prompt instructions.
pub fn aura_to_prompt(profile: &AuraProfile, options: &PromptOptions) -> String {
    let compact = options.compact;
    let description = profile
        .metadata
        .as_ref()
        .and_then(|m| m.description.as_deref())
        .filter(|d| !d.is_empty())
        .map(|d| format!("*{d}*"));

    let style = profile.style.filter(|s| !s.is_empty());
    let boundaries = profile.boundaries.as_ref().filter(|b| !b.is_empty());
    let soma = profile
        .soma
        .as_ref()
        .filter(|_| options.include_soma && is_soma_enabled(profile));

    PromptBuilder::new(format!("## AURA Profile: {}", profile.name))
        .line_opt(description)
        .line("")
        .block(
            PERSONALITY_HEADING,
            personality_lines(&profile.personality, compact),
        )
        .block_if(style.is_some(), STYLE_HEADING, || {
            style.map(|s| style_lines(&s, compact)).unwrap_or_default()
        })
        .block_if(boundaries.is_some(), BOUNDARIES_HEADING, || {
            boundaries.map(boundary_lines).unwrap_or_default()
        })
        .block_if(soma.is_some(), SOMA_HEADING, || {
            soma.map(|s| soma_lines(s, compact)).unwrap_or_default()
        })
        .line(CLOSING_INSTRUCTION)
        .line("")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Boundaries, Metadata, Personality, Soma, Style};

    fn ada() -> AuraProfile {
        AuraProfile {
            aura: "1.0".into(),
            name: "Ada".into(),
            personality: Personality {
                honesty: 9,
                emotionality: 2,
                extraversion: 5,
                agreeableness: 5,
                conscientiousness: 8,
                openness: 8,
            },
            style: None,
            boundaries: None,
            soma: None,
            metadata: None,
        }
    }

    #[test]
    fn minimal_profile_full_text() {
        let text = aura_to_prompt(&ada(), &PromptOptions::default());
        assert_eq!(
            text,
            "## AURA Profile: Ada\n\
             \n\
             ### Personality (HEXACO)\n\
             - **Honesty:** 9/10 — Direct, corrects errors, minimal flattery\n\
             - **Emotionality:** 2/10 — Stoic, calm\n\
             - **Extraversion:** 5/10 — Balanced engagement\n\
             - **Agreeableness:** 5/10 — Cooperative with standards\n\
             - **Conscientiousness:** 8/10 — Organized, thorough\n\
             - **Openness:** 8/10 — Creative, unconventional\n\
             \n\
             Apply these personality traits and constraints consistently in all responses.\n"
        );
    }

    #[test]
    fn description_becomes_italic_line() {
        let mut profile = ada();
        profile.metadata = Some(Metadata {
            description: Some("Careful research partner".into()),
            ..Default::default()
        });
        let text = aura_to_prompt(&profile, &PromptOptions::default());
        assert!(text.starts_with("## AURA Profile: Ada\n*Careful research partner*\n\n###"));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let mut profile = ada();
        profile.style = Some(Style::default());
        profile.boundaries = Some(Boundaries::default());
        let text = aura_to_prompt(&profile, &PromptOptions::default());
        assert!(!text.contains(STYLE_HEADING));
        assert!(!text.contains(BOUNDARIES_HEADING));
    }

    #[test]
    fn boundaries_ignore_compact_flag() {
        let mut profile = ada();
        profile.boundaries = Some(Boundaries {
            max_adulation: Some(2),
            never: Some(vec!["Flatter".into()]),
            ..Default::default()
        });
        let full = aura_to_prompt(&profile, &PromptOptions::default());
        let compact = aura_to_prompt(&profile, &PromptOptions::default().with_compact(true));
        let block = "### Boundaries\n\
                     - **Maximum adulation:** 2/10 (hard cap on flattery/sycophancy)\n\
                     - **Never:**\n  \
                     - Flatter\n\n";
        assert!(full.contains(block));
        assert!(compact.contains(block));
    }

    #[test]
    fn soma_block_respects_option_and_enabled_flag() {
        let mut profile = ada();
        profile.soma = Some(Soma {
            ethics: Some(9),
            ..Default::default()
        });
        let on = aura_to_prompt(&profile, &PromptOptions::default());
        assert!(on.contains("### SOMA (Soft Skills)\n- **Ethics:** 9/10"));

        let off = aura_to_prompt(&profile, &PromptOptions::default().with_include_soma(false));
        assert!(!off.contains(SOMA_HEADING));

        profile.soma = Some(Soma {
            enabled: Some(false),
            ethics: Some(9),
            ..Default::default()
        });
        let disabled = aura_to_prompt(&profile, &PromptOptions::default());
        assert!(!disabled.contains(SOMA_HEADING));
    }

    #[test]
    fn compact_soma_without_scores_keeps_heading() {
        let mut profile = ada();
        profile.soma = Some(Soma::default());
        let text = aura_to_prompt(&profile, &PromptOptions::default().with_compact(true));
        assert!(text.contains("### SOMA (Soft Skills)\n\nApply these"));
    }

    #[test]
    fn blocks_appear_in_fixed_order() {
        let mut profile = ada();
        profile.style = Some(Style {
            verbosity: Some(2),
            ..Default::default()
        });
        profile.boundaries = Some(Boundaries {
            flag_uncertainty: Some(true),
            ..Default::default()
        });
        profile.soma = Some(Soma {
            communication: Some(6),
            ..Default::default()
        });
        let text = aura_to_prompt(&profile, &PromptOptions::default());
        let positions: Vec<usize> = [
            PERSONALITY_HEADING,
            STYLE_HEADING,
            BOUNDARIES_HEADING,
            SOMA_HEADING,
            CLOSING_INSTRUCTION,
        ]
        .iter()
        .map(|h| text.find(h).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
        assert!(text.ends_with(&format!("{CLOSING_INSTRUCTION}\n")));
    }
}
