//! Wizard state machine
//!
//! One session walks CollectingBasics -> (CollectingFollowUp ->
//! (CollectingDeepFollowUp ->)) ShowingResults, advancing on answer
//! submission. Classification runs after every submission; a non-empty
//! suitable set short-circuits straight to results. Running out of
//! fallback rounds is a terminal outcome, not an error.

use serde::{Deserialize, Serialize};

use crate::error::WizardError;
use crate::matcher::{run_classification, DomainMatcher};
use crate::types::MatchResult;

/// Wizard stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardState {
    CollectingBasics,
    CollectingFollowUp,
    CollectingDeepFollowUp,
    ShowingResults,
}

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOutcome {
    /// At least one suitable domain was identified
    Matched,
    /// Both fallback rounds ran and the suitable set stayed empty
    NoClearDomain,
}

/// Combined basics text shorter than this skips classification and goes
/// straight to the first follow-up round
pub const MIN_DETAIL_CHARS: usize = 15;

/// One student's wizard progress. Session-scoped, in-memory only.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: String,
    pub state: WizardState,
    /// (question-id, answer) pairs in submission order
    pub answers: Vec<(String, String)>,
    pub result: Option<MatchResult>,
    pub outcome: Option<SessionOutcome>,
    pub created_at: i64,
}

impl Session {
    pub fn new(id: String) -> Self {
        Self {
            id,
            state: WizardState::CollectingBasics,
            answers: Vec::new(),
            result: None,
            outcome: None,
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Everything the student likes: all answers except the dislike questions.
    /// Follow-up answers land here, which is what makes the fallback retry work.
    pub fn likes_text(&self) -> String {
        self.answers
            .iter()
            .filter(|(id, _)| !id.ends_with("_dislike"))
            .map(|(_, text)| text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Text from the dislike questions
    pub fn dislikes_text(&self) -> String {
        self.answers
            .iter()
            .filter(|(id, _)| id.ends_with("_dislike"))
            .map(|(_, text)| text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn combined_len(&self) -> usize {
        self.answers
            .iter()
            .map(|(_, text)| text.trim().len())
            .sum()
    }
}

/// Record a round of answers and advance the wizard.
///
/// Returns the new state; rejects submissions once results are showing.
pub fn submit(
    session: &mut Session,
    answers: Vec<(String, String)>,
    matcher: &dyn DomainMatcher,
) -> Result<WizardState, WizardError> {
    if session.state == WizardState::ShowingResults {
        return Err(WizardError::AlreadyComplete);
    }

    session.answers.extend(answers);

    let result = run_classification(matcher, &session.likes_text(), &session.dislikes_text());

    session.state = match session.state {
        WizardState::CollectingBasics => {
            if session.combined_len() < MIN_DETAIL_CHARS {
                // Too thin to classify; ask for more before trying
                WizardState::CollectingFollowUp
            } else if result.is_empty() {
                WizardState::CollectingFollowUp
            } else {
                finish(session, result, SessionOutcome::Matched)
            }
        }
        WizardState::CollectingFollowUp => {
            if result.is_empty() {
                WizardState::CollectingDeepFollowUp
            } else {
                finish(session, result, SessionOutcome::Matched)
            }
        }
        WizardState::CollectingDeepFollowUp => {
            let outcome = if result.is_empty() {
                SessionOutcome::NoClearDomain
            } else {
                SessionOutcome::Matched
            };
            finish(session, result, outcome)
        }
        WizardState::ShowingResults => unreachable!("rejected above"),
    };

    Ok(session.state)
}

fn finish(session: &mut Session, result: MatchResult, outcome: SessionOutcome) -> WizardState {
    session.result = Some(result);
    session.outcome = Some(outcome);
    WizardState::ShowingResults
}

/// Reset transition: back to CollectingBasics with everything cleared
pub fn reset(session: &mut Session) {
    session.state = WizardState::CollectingBasics;
    session.answers.clear();
    session.result = None;
    session.outcome = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ClusterFile};
    use crate::matcher::KeywordMatcher;
    use std::collections::HashMap;

    fn matcher() -> KeywordMatcher {
        let mut entries = HashMap::new();
        entries.insert(
            "Information Technology".to_string(),
            ClusterFile {
                keywords: vec!["coding".into()],
                careers: vec![],
            },
        );
        entries.insert(
            "Medicine & Healthcare".to_string(),
            ClusterFile {
                keywords: vec!["doctor".into()],
                careers: vec![],
            },
        );
        let catalog = Catalog::from_entries(entries).unwrap();
        KeywordMatcher::new(&catalog)
    }

    fn answers(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(id, text)| (id.to_string(), text.to_string()))
            .collect()
    }

    #[test]
    fn test_basics_with_match_goes_straight_to_results() {
        let matcher = matcher();
        let mut session = Session::new("s1".into());

        let state = submit(
            &mut session,
            answers(&[("career_like", "I really enjoy coding projects")]),
            &matcher,
        )
        .unwrap();

        assert_eq!(state, WizardState::ShowingResults);
        assert_eq!(session.outcome, Some(SessionOutcome::Matched));
        assert!(!session.result.as_ref().unwrap().suitable.is_empty());
    }

    #[test]
    fn test_basics_without_match_asks_follow_up() {
        let matcher = matcher();
        let mut session = Session::new("s1".into());

        let state = submit(
            &mut session,
            answers(&[("career_like", "something completely different")]),
            &matcher,
        )
        .unwrap();

        assert_eq!(state, WizardState::CollectingFollowUp);
        assert!(session.result.is_none());
    }

    #[test]
    fn test_short_input_skips_classification() {
        let matcher = matcher();
        let mut session = Session::new("s1".into());

        // "coding" would match, but the combined text is under the
        // detail threshold, so the wizard asks for more first
        let state = submit(&mut session, answers(&[("career_like", "coding")]), &matcher).unwrap();

        assert_eq!(state, WizardState::CollectingFollowUp);
    }

    #[test]
    fn test_follow_up_answers_retry_classification() {
        let matcher = matcher();
        let mut session = Session::new("s1".into());

        submit(
            &mut session,
            answers(&[("career_like", "nothing in particular really")]),
            &matcher,
        )
        .unwrap();
        let state = submit(
            &mut session,
            answers(&[("work_kind", "analytical work like coding")]),
            &matcher,
        )
        .unwrap();

        assert_eq!(state, WizardState::ShowingResults);
        assert_eq!(session.outcome, Some(SessionOutcome::Matched));
    }

    #[test]
    fn test_two_empty_rounds_end_with_no_clear_domain() {
        let matcher = matcher();
        let mut session = Session::new("s1".into());

        submit(
            &mut session,
            answers(&[("career_like", "nothing in particular really")]),
            &matcher,
        )
        .unwrap();
        submit(&mut session, answers(&[("work_style", "alone mostly")]), &matcher).unwrap();
        let state = submit(
            &mut session,
            answers(&[("dream_job", "no idea honestly")]),
            &matcher,
        )
        .unwrap();

        assert_eq!(state, WizardState::ShowingResults);
        assert_eq!(session.outcome, Some(SessionOutcome::NoClearDomain));
        assert!(session.result.as_ref().unwrap().suitable.is_empty());
    }

    #[test]
    fn test_submission_after_results_rejected() {
        let matcher = matcher();
        let mut session = Session::new("s1".into());

        submit(
            &mut session,
            answers(&[("career_like", "I really enjoy coding projects")]),
            &matcher,
        )
        .unwrap();
        let err = submit(&mut session, answers(&[("hobbies", "chess")]), &matcher).unwrap_err();

        assert_eq!(err, WizardError::AlreadyComplete);
    }

    #[test]
    fn test_reset_clears_everything() {
        let matcher = matcher();
        let mut session = Session::new("s1".into());

        submit(
            &mut session,
            answers(&[("career_like", "I really enjoy coding projects")]),
            &matcher,
        )
        .unwrap();
        reset(&mut session);

        assert_eq!(session.state, WizardState::CollectingBasics);
        assert!(session.answers.is_empty());
        assert!(session.result.is_none());
        assert!(session.outcome.is_none());
    }

    #[test]
    fn test_dislike_answers_feed_dislikes_text() {
        let mut session = Session::new("s1".into());
        session.answers = answers(&[
            ("career_like", "coding"),
            ("career_dislike", "doctor"),
            ("hobbies", "chess"),
        ]);

        assert_eq!(session.likes_text(), "coding chess");
        assert_eq!(session.dislikes_text(), "doctor");
    }
}
