//! Fixed question sets for each wizard stage
//!
//! Question ids ending in `_dislike` feed the dislikes text; everything
//! else feeds the likes text.

use serde::Serialize;

use super::WizardState;

/// One question presented to the student
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub label: &'static str,
}

/// First pass: the five free-text basics
pub const BASIC_QUESTIONS: &[Question] = &[
    Question {
        id: "career_like",
        label: "Which careers do you like?",
    },
    Question {
        id: "career_dislike",
        label: "Which careers do you dislike?",
    },
    Question {
        id: "subjects_like",
        label: "Which subjects do you enjoy in school?",
    },
    Question {
        id: "subjects_dislike",
        label: "Which subjects do you dislike?",
    },
    Question {
        id: "hobbies",
        label: "List your hobbies and any personal achievements",
    },
];

/// First fallback round, asked when the basics match nothing
pub const FOLLOW_UP_QUESTIONS: &[Question] = &[
    Question {
        id: "work_style",
        label: "Do you prefer working alone or in teams?",
    },
    Question {
        id: "work_kind",
        label: "Do you enjoy physical, creative or analytical work?",
    },
    Question {
        id: "helping_people",
        label: "Would you like to help people directly in your job?",
    },
];

/// Second fallback round, the last attempt before giving up
pub const DEEP_FOLLOW_UP_QUESTIONS: &[Question] = &[
    Question {
        id: "favourite_subject",
        label: "Which single school subject would you keep if you could keep only one?",
    },
    Question {
        id: "dream_job",
        label: "What did you want to become as a child?",
    },
];

/// The questions the student should answer in a given state.
/// Empty once results are showing.
pub fn questions_for(state: WizardState) -> &'static [Question] {
    match state {
        WizardState::CollectingBasics => BASIC_QUESTIONS,
        WizardState::CollectingFollowUp => FOLLOW_UP_QUESTIONS,
        WizardState::CollectingDeepFollowUp => DEEP_FOLLOW_UP_QUESTIONS,
        WizardState::ShowingResults => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_ids_unique_across_stages() {
        let mut ids: Vec<&str> = BASIC_QUESTIONS
            .iter()
            .chain(FOLLOW_UP_QUESTIONS)
            .chain(DEEP_FOLLOW_UP_QUESTIONS)
            .map(|q| q.id)
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_results_state_has_no_questions() {
        assert!(questions_for(WizardState::ShowingResults).is_empty());
    }
}
