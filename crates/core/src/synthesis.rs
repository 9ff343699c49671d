//! Rule-based scene synthesis.
//!
//! Maps free-form story text to an ordered list of scene drafts. This is a
//! deterministic keyword matcher standing in for a real generative step:
//! each keyword category that matches the input contributes one fixed
//! template draft, in a fixed category order. The function is pure and
//! idempotent for identical input.

/// A generated scene before it is persisted. Titles and descriptions are
/// fixed template strings, never derived from the input verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneDraft {
    pub title: &'static str,
    pub description: &'static str,
}

/// Keyword categories evaluated in priority order. Each entry is
/// (keywords, draft emitted when any keyword matches).
const CATEGORIES: &[(&[&str], SceneDraft)] = &[
    (
        &["action", "fight"],
        SceneDraft {
            title: "Opening Action Sequence",
            description:
                "High-energy opening scene that establishes the tone and introduces key elements",
        },
    ),
    (
        &["character", "hero", "protagonist"],
        SceneDraft {
            title: "Character Introduction",
            description: "Scene introducing the main character and establishing their motivation",
        },
    ),
    (
        &["conflict", "problem", "challenge"],
        SceneDraft {
            title: "Rising Conflict",
            description: "Scene where the main conflict is established and stakes are raised",
        },
    ),
    (
        &["climax", "final", "showdown"],
        SceneDraft {
            title: "Climactic Confrontation",
            description: "The main conflict reaches its peak and resolution begins",
        },
    ),
];

/// Fallback drafts used when no keyword category matches.
const FALLBACK: &[SceneDraft] = &[
    SceneDraft {
        title: "Opening Scene",
        description: "Establishes setting and introduces key story elements",
    },
    SceneDraft {
        title: "Development",
        description: "Story develops and characters are further established",
    },
    SceneDraft {
        title: "Resolution",
        description: "Story conflicts are resolved and conclusion is reached",
    },
];

/// Synthesize an ordered, non-empty list of scene drafts from story text.
///
/// Matching is case-insensitive substring search. The keyword path yields
/// 1-4 drafts (one per matched category); when nothing matches, the
/// three-scene fallback template is returned.
pub fn synthesize(text: &str) -> Vec<SceneDraft> {
    let lowered = text.to_lowercase();

    let drafts: Vec<SceneDraft> = CATEGORIES
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|kw| lowered.contains(kw)))
        .map(|(_, draft)| *draft)
        .collect();

    if drafts.is_empty() {
        FALLBACK.to_vec()
    } else {
        drafts
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_keyword_yields_opening_action() {
        let drafts = synthesize("A big fight breaks out at dawn");
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].title, "Opening Action Sequence");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let drafts = synthesize("The HERO rises");
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].title, "Character Introduction");
    }

    #[test]
    fn all_categories_match_in_fixed_order() {
        let drafts =
            synthesize("action, a hero, a great challenge, and a final showdown at the climax");
        let titles: Vec<_> = drafts.iter().map(|d| d.title).collect();
        assert_eq!(
            titles,
            vec![
                "Opening Action Sequence",
                "Character Introduction",
                "Rising Conflict",
                "Climactic Confrontation",
            ]
        );
    }

    #[test]
    fn category_order_is_independent_of_input_order() {
        let drafts = synthesize("the showdown comes before the hero arrives");
        let titles: Vec<_> = drafts.iter().map(|d| d.title).collect();
        assert_eq!(
            titles,
            vec!["Character Introduction", "Climactic Confrontation"]
        );
    }

    #[test]
    fn one_draft_per_category_even_with_multiple_keywords() {
        // "conflict", "problem" and "challenge" are all in one category.
        let drafts = synthesize("a problem, a challenge, and a conflict");
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].title, "Rising Conflict");
    }

    #[test]
    fn no_match_falls_back_to_three_generic_scenes() {
        let drafts = synthesize("two people talk quietly in a cafe");
        let titles: Vec<_> = drafts.iter().map(|d| d.title).collect();
        assert_eq!(titles, vec!["Opening Scene", "Development", "Resolution"]);
    }

    #[test]
    fn empty_input_falls_back() {
        assert_eq!(synthesize("").len(), 3);
    }

    #[test]
    fn output_is_never_empty() {
        for text in ["", "x", "fight", "hero challenge final action"] {
            assert!(!synthesize(text).is_empty());
        }
    }

    #[test]
    fn idempotent_for_identical_input() {
        let text = "A hero faces a great challenge and must overcome conflict to save the day";
        assert_eq!(synthesize(text), synthesize(text));
    }

    #[test]
    fn canonical_prompt_yields_hero_and_conflict_scenes() {
        let drafts =
            synthesize("A hero faces a great challenge and must overcome conflict to save the day");
        let titles: Vec<_> = drafts.iter().map(|d| d.title).collect();
        assert_eq!(titles, vec!["Character Introduction", "Rising Conflict"]);
    }
}
