//! Input normalization: spell correction and term expansion
//!
//! Both matching strategies run student text through this pass first.
//! Corrections rewrite known misspellings token by token; expansion groups
//! append the whole group when any member appears, so "coder" also hits
//! the "programming" trigger. Unknown tokens pass through unchanged.

/// Known misspelling -> canonical token
pub const CORRECTIONS: &[(&str, &str)] = &[
    ("programing", "programming"),
    ("progamming", "programming"),
    ("sofware", "software"),
    ("computor", "computer"),
    ("docter", "doctor"),
    ("medecine", "medicine"),
    ("nursary", "nursing"),
    ("enginering", "engineering"),
    ("buisness", "business"),
    ("finanse", "finance"),
    ("acounting", "accounting"),
    ("teachng", "teaching"),
    ("libary", "library"),
    ("phsychology", "psychology"),
    ("pyschology", "psychology"),
    ("drawin", "drawing"),
    ("cookng", "cooking"),
];

/// Expansion groups - terms in the same group imply each other for matching
pub const EXPANSION_GROUPS: &[&[&str]] = &[
    // Software roles
    &["coder", "coding", "programmer", "programming", "developer", "software"],
    &["hacker", "cybersecurity", "computers"],
    // Healthcare
    &["medic", "doctor", "physician", "surgeon", "surgery"],
    &["nursing", "nurse"],
    // Engineering
    &["engineer", "engineering"],
    &["robot", "robotics", "machines"],
    // Money
    &["accounting", "accountant", "finance"],
    &["banking", "bank", "money"],
    // Creative
    &["artist", "drawing", "painting", "design"],
    &["actor", "actress", "acting", "film"],
    &["author", "writer", "writing"],
    // Teaching
    &["teacher", "tutor", "teaching", "training"],
    // Service
    &["chef", "cooking", "baking"],
    &["gym", "fitness", "sports"],
    // Protective
    &["policeman", "police", "officer"],
    &["soldier", "army", "defence"],
];

/// Spell-correct a single token, returning the original when no
/// correction is known
pub fn correct_token(token: &str) -> &str {
    CORRECTIONS
        .iter()
        .find(|(wrong, _)| *wrong == token)
        .map(|(_, right)| *right)
        .unwrap_or(token)
}

/// Lowercase the text, apply per-token corrections, and append every
/// expansion group triggered by a token of the corrected text.
///
/// The corrected text always contains the original trigger terms, so
/// expansion can only add matches, never remove them.
pub fn expand_text(text: &str) -> String {
    let lowered = text.to_lowercase();

    let corrected: Vec<&str> = lowered
        .split_whitespace()
        .map(|t| correct_token(t.trim_matches(|c: char| !c.is_alphanumeric())))
        .filter(|t| !t.is_empty())
        .collect();

    let mut expanded = corrected.join(" ");

    for group in EXPANSION_GROUPS {
        if group.iter().any(|&word| corrected.contains(&word)) {
            for &word in *group {
                if !corrected.contains(&word) {
                    expanded.push(' ');
                    expanded.push_str(word);
                }
            }
        }
    }

    expanded
}
