//! Short derived views of a profile.

use crate::schema::AuraProfile;

/// Adjectives for the traits that stand out, in a fixed order.
fn descriptors(profile: &AuraProfile) -> Vec<&'static str> {
    let p = &profile.personality;
    let style = profile.style.unwrap_or_default();
    let mut words = Vec::new();

    if p.honesty >= 7 {
        words.push("direct");
    } else if p.honesty <= 3 {
        words.push("diplomatic");
    }

    if p.emotionality <= 3 {
        words.push("calm");
    } else if p.emotionality >= 7 {
        words.push("expressive");
    }

    if style.humor.is_some_and(|v| v >= 6) {
        words.push("witty");
    }
    if style.assertiveness.is_some_and(|v| v >= 7) {
        words.push("assertive");
    }
    if style.autonomy.is_some_and(|v| v >= 7) {
        words.push("autonomous");
    }

    if p.conscientiousness >= 7 {
        words.push("thorough");
    }

    if p.openness >= 7 {
        words.push("creative");
    } else if p.openness <= 3 {
        words.push("practical");
    }

    words
}

/// One-line summary, e.g. `Ada: direct, calm, thorough, creative`.
///
/// Just the name when no trait stands out.
pub fn aura_one_liner(profile: &AuraProfile) -> String {
    let words = descriptors(profile);
    if words.is_empty() {
        profile.name.clone()
    } else {
        format!("{}: {}", profile.name, words.join(", "))
    }
}

/// Whether the profile resists flattery: high honesty or a low adulation cap.
///
/// A missing `max_adulation` counts as 10.
pub fn is_anti_sycophant(profile: &AuraProfile) -> bool {
    let max_adulation = profile
        .boundaries
        .as_ref()
        .and_then(|b| b.max_adulation)
        .unwrap_or(10);
    profile.personality.honesty >= 7 || max_adulation <= 4
}
