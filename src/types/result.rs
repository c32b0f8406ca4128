//! Classification outcomes

use serde::{Deserialize, Serialize};

use super::Domain;

/// Maximum number of career suggestions ever returned
pub const MAX_SUGGESTIONS: usize = 10;

/// Raw classification outcome: which domains look suitable and which do not.
///
/// Invariant: the two lists are disjoint; suitable wins conflicts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Classification {
    pub suitable: Vec<Domain>,
    pub unsuitable: Vec<Domain>,
}

/// Full per-request result: classification plus derived career suggestions.
///
/// Recomputed from scratch on every analysis request; never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub suitable: Vec<Domain>,
    pub unsuitable: Vec<Domain>,
    /// Career labels, at most [`MAX_SUGGESTIONS`]
    pub suggestions: Vec<String>,
}

impl MatchResult {
    /// True when no suitable domain was identified
    pub fn is_empty(&self) -> bool {
        self.suitable.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Domain;

    #[test]
    fn test_match_result_empty() {
        let result = MatchResult::default();
        assert!(result.is_empty());

        let result = MatchResult {
            suitable: vec![Domain::Sales],
            unsuitable: vec![],
            suggestions: vec![],
        };
        assert!(!result.is_empty());
    }
}
