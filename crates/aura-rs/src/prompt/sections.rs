//! Body lines for each prompt block, plus the label tables they read.
//!
//! The tables are presentation text, not profile data, so they live here
//! next to the code that renders them.

use crate::loader::interpret_trait;
use crate::schema::{Boundaries, Personality, Soma, Style};

pub const PERSONALITY_HEADING: &str = "### Personality (HEXACO)";
pub const STYLE_HEADING: &str = "### Style";
pub const BOUNDARIES_HEADING: &str = "### Boundaries";
pub const SOMA_HEADING: &str = "### SOMA (Soft Skills)";

/// `(low, high)` labels for a style field. Unknown fields get `Low`/`High`.
fn style_labels(field: &str) -> (&'static str, &'static str) {
    match field {
        "formality" => ("Casual", "Formal"),
        "verbosity" => ("Terse", "Elaborate"),
        "humor" => ("Serious", "Playful"),
        "assertiveness" => ("Passive", "Assertive"),
        "autonomy" => ("Asks permission", "Acts independently"),
        _ => ("Low", "High"),
    }
}

/// Fixed description of a SOMA skill.
fn soma_description(field: &str) -> &'static str {
    match field {
        "context_awareness" => "State modeling, memory, coherence",
        "emotional_intelligence" => "Sentiment-aware responses",
        "communication" => "Style adaptation, clarity",
        "ethics" => "Principled boundaries, uncertainty disclosure",
        "adaptability" => "Feedback integration, learning",
        _ => "",
    }
}

/// Style interpretation: `<= 3` low label, `>= 8` high label, else balanced.
pub fn interpret_style(field: &str, value: u8) -> &'static str {
    let (low, high) = style_labels(field);
    match value {
        0..=3 => low,
        8.. => high,
        _ => "Balanced",
    }
}

pub fn personality_lines(personality: &Personality, compact: bool) -> Vec<String> {
    if compact {
        let pairs: Vec<String> = personality
            .iter()
            .map(|(t, value)| format!("{}: {value}/10", t.label()))
            .collect();
        return pairs.chunks(3).map(|row| row.join(" | ")).collect();
    }

    personality
        .iter()
        .map(|(t, value)| {
            format!(
                "- **{}:** {value}/10 — {}",
                t.label(),
                interpret_trait(t, value)
            )
        })
        .collect()
}

pub fn style_lines(style: &Style, compact: bool) -> Vec<String> {
    let defined = style.defined();
    if compact {
        let parts: Vec<String> = defined
            .iter()
            .map(|(field, value)| format!("{field}: {value}/10"))
            .collect();
        return vec![parts.join(" | ")];
    }

    defined
        .iter()
        .map(|&(field, value)| {
            format!(
                "- **{}:** {value}/10 — {}",
                capitalize(field),
                interpret_style(field, value)
            )
        })
        .collect()
}

/// Boundaries always render in full, whatever the compact setting.
pub fn boundary_lines(boundaries: &Boundaries) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(max) = boundaries.max_adulation {
        lines.push(format!(
            "- **Maximum adulation:** {max}/10 (hard cap on flattery/sycophancy)"
        ));
    }
    if boundaries.always_correct_errors == Some(true) {
        lines.push(
            "- **Always correct errors:** Yes — must correct factual errors even if uncomfortable"
                .to_string(),
        );
    }
    if boundaries.flag_uncertainty == Some(true) {
        lines.push("- **Flag uncertainty:** Yes — must explicitly state when uncertain".to_string());
    }
    push_list(&mut lines, "Never", boundaries.never.as_deref());
    push_list(&mut lines, "Always", boundaries.always.as_deref());

    lines
}

pub fn soma_lines(soma: &Soma, compact: bool) -> Vec<String> {
    let defined = soma.defined();
    if compact {
        if defined.is_empty() {
            return Vec::new();
        }
        let parts: Vec<String> = defined
            .iter()
            .map(|(field, value)| format!("{}: {value}/10", field.replace('_', " ")))
            .collect();
        return vec![parts.join(" | ")];
    }

    defined
        .iter()
        .map(|&(field, value)| {
            format!(
                "- **{}:** {value}/10 — {}",
                title_case(field),
                soma_description(field)
            )
        })
        .collect()
}

fn push_list(lines: &mut Vec<String>, label: &str, items: Option<&[String]>) {
    let Some(items) = items.filter(|items| !items.is_empty()) else {
        return;
    };
    lines.push(format!("- **{label}:**"));
    lines.extend(items.iter().map(|item| format!("  - {item}")));
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `emotional_intelligence` -> `Emotional Intelligence`.
fn title_case(field: &str) -> String {
    field
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
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
    fn compact_personality_is_two_rows_of_three() {
        assert_eq!(
            personality_lines(&personality(), true),
            [
                "Honesty: 9/10 | Emotionality: 2/10 | Extraversion: 5/10",
                "Agreeableness: 5/10 | Conscientiousness: 8/10 | Openness: 8/10",
            ]
        );
    }

    #[test]
    fn full_personality_has_one_bullet_per_trait() {
        let lines = personality_lines(&personality(), false);
        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[0],
            "- **Honesty:** 9/10 — Direct, corrects errors, minimal flattery"
        );
        assert_eq!(lines[1], "- **Emotionality:** 2/10 — Stoic, calm");
        assert_eq!(lines[2], "- **Extraversion:** 5/10 — Balanced engagement");
        assert_eq!(lines[5], "- **Openness:** 8/10 — Creative, unconventional");
    }

    #[test]
    fn style_interpretation_thresholds() {
        assert_eq!(interpret_style("formality", 3), "Casual");
        assert_eq!(interpret_style("formality", 4), "Balanced");
        assert_eq!(interpret_style("formality", 7), "Balanced");
        assert_eq!(interpret_style("formality", 8), "Formal");
        assert_eq!(interpret_style("autonomy", 9), "Acts independently");
        assert_eq!(interpret_style("charisma", 1), "Low");
        assert_eq!(interpret_style("charisma", 10), "High");
    }

    #[test]
    fn style_renders_only_defined_fields_in_order() {
        let style = Style {
            autonomy: Some(2),
            humor: Some(8),
            ..Default::default()
        };
        assert_eq!(
            style_lines(&style, false),
            [
                "- **Humor:** 8/10 — Playful",
                "- **Autonomy:** 2/10 — Asks permission",
            ]
        );
        assert_eq!(style_lines(&style, true), ["humor: 8/10 | autonomy: 2/10"]);
    }

    #[test]
    fn boundaries_emit_only_set_fields() {
        let boundaries = Boundaries {
            max_adulation: Some(3),
            always_correct_errors: Some(false),
            flag_uncertainty: Some(true),
            never: Some(vec![]),
            always: Some(vec!["Cite sources".into(), "Show work".into()]),
        };
        assert_eq!(
            boundary_lines(&boundaries),
            [
                "- **Maximum adulation:** 3/10 (hard cap on flattery/sycophancy)",
                "- **Flag uncertainty:** Yes — must explicitly state when uncertain",
                "- **Always:**",
                "  - Cite sources",
                "  - Show work",
            ]
        );
    }

    #[test]
    fn soma_full_uses_title_case_and_descriptions() {
        let soma = Soma {
            emotional_intelligence: Some(7),
            ethics: Some(9),
            ..Default::default()
        };
        assert_eq!(
            soma_lines(&soma, false),
            [
                "- **Emotional Intelligence:** 7/10 — Sentiment-aware responses",
                "- **Ethics:** 9/10 — Principled boundaries, uncertainty disclosure",
            ]
        );
        assert_eq!(
            soma_lines(&soma, true),
            ["emotional intelligence: 7/10 | ethics: 9/10"]
        );
    }

    #[test]
    fn compact_soma_without_scores_is_empty() {
        let soma = Soma {
            enabled: Some(true),
            ..Default::default()
        };
        assert!(soma_lines(&soma, true).is_empty());
        assert!(soma_lines(&soma, false).is_empty());
    }
}
