use data::{ErrorResponse, FindResponse, Match};
use serde_json::from_str;

pub const FALLBACK_ERROR: &str = "Of course something went wrong. Try again.";
pub const EMPTY_MESSAGE: &str = "Apparently you don't exist in these photos. Tragic.";

/// Lifecycle of one search attempt. The whole page renders off this one
/// value, so loading/error/result combinations that cannot happen cannot
/// be expressed either.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    Idle,
    Searching,
    Succeeded(Vec<Match>),
    Empty,
    Failed(String),
}

impl WorkflowState {
    /// `Searching` doubles as the mutual-exclusion gate: only an idle
    /// machine may issue a request, and a second submit while one is in
    /// flight is dropped by the caller.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, WorkflowState::Idle)
    }

    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            WorkflowState::Succeeded(_) | WorkflowState::Empty | WorkflowState::Failed(_)
        )
    }

    /// Retry / search-again. Discards the settled outcome; a search in
    /// flight cannot be abandoned.
    pub fn reset(self) -> WorkflowState {
        if self.is_settled() {
            WorkflowState::Idle
        } else {
            self
        }
    }
}

/// Outcome of a 2xx response. An empty or missing `matches` array is a
/// well-formed answer, not an error.
pub fn resolve_ok_response(body: &str) -> WorkflowState {
    match from_str::<FindResponse>(body) {
        Ok(response) if response.matches.is_empty() => WorkflowState::Empty,
        Ok(response) => WorkflowState::Succeeded(response.matches),
        Err(_) => WorkflowState::Failed(FALLBACK_ERROR.to_string()),
    }
}

/// Outcome of a non-2xx response, preferring the backend's `detail` text.
pub fn resolve_error_response(body: &str) -> WorkflowState {
    let message = match from_str::<ErrorResponse>(body) {
        Ok(error) if !error.detail.is_empty() => error.detail,
        _ => FALLBACK_ERROR.to_string(),
    };
    WorkflowState::Failed(message)
}

/// Similarity score as its 0-100 display value, one decimal.
pub fn display_score(score: f32) -> String {
    format!("{:.1}", score * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_match(url: &str, score: f32) -> Match {
        Match {
            image_url: url.to_string(),
            score,
        }
    }

    #[test]
    fn only_idle_accepts_a_submit() {
        assert!(WorkflowState::Idle.accepts_submit());
        assert!(!WorkflowState::Searching.accepts_submit());
        assert!(!WorkflowState::Succeeded(vec![sample_match("a.jpg", 0.9)]).accepts_submit());
        assert!(!WorkflowState::Empty.accepts_submit());
        assert!(!WorkflowState::Failed("boom".to_string()).accepts_submit());
    }

    #[test]
    fn retry_returns_every_settled_outcome_to_idle() {
        let settled = [
            WorkflowState::Succeeded(vec![sample_match("a.jpg", 0.9)]),
            WorkflowState::Empty,
            WorkflowState::Failed("boom".to_string()),
        ];
        for state in settled {
            assert!(state.is_settled());
            assert_eq!(state.reset(), WorkflowState::Idle);
        }
    }

    #[test]
    fn reset_does_not_abandon_a_search_in_flight() {
        assert_eq!(WorkflowState::Searching.reset(), WorkflowState::Searching);
        assert_eq!(WorkflowState::Idle.reset(), WorkflowState::Idle);
    }

    #[test]
    fn non_empty_matches_resolve_in_received_order() {
        let body = r#"{"matches":[{"imageUrl":"a.jpg","score":0.92},{"imageUrl":"b.jpg","score":0.81}]}"#;
        assert_eq!(
            resolve_ok_response(body),
            WorkflowState::Succeeded(vec![
                sample_match("a.jpg", 0.92),
                sample_match("b.jpg", 0.81),
            ])
        );
    }

    #[test]
    fn empty_matches_resolve_to_empty() {
        assert_eq!(resolve_ok_response(r#"{"matches":[]}"#), WorkflowState::Empty);
    }

    #[test]
    fn missing_matches_field_resolves_to_empty() {
        assert_eq!(resolve_ok_response("{}"), WorkflowState::Empty);
    }

    #[test]
    fn garbled_success_body_falls_back_to_failed() {
        assert_eq!(
            resolve_ok_response("not json at all"),
            WorkflowState::Failed(FALLBACK_ERROR.to_string())
        );
    }

    #[test]
    fn error_detail_is_surfaced_verbatim() {
        assert_eq!(
            resolve_error_response(r#"{"detail":"X"}"#),
            WorkflowState::Failed("X".to_string())
        );
    }

    #[test]
    fn unparsable_error_body_uses_the_fallback_message() {
        assert_eq!(
            resolve_error_response("<html>502</html>"),
            WorkflowState::Failed(FALLBACK_ERROR.to_string())
        );
        assert_eq!(
            resolve_error_response(""),
            WorkflowState::Failed(FALLBACK_ERROR.to_string())
        );
    }

    #[test]
    fn blank_error_detail_uses_the_fallback_message() {
        assert_eq!(
            resolve_error_response(r#"{"detail":""}"#),
            WorkflowState::Failed(FALLBACK_ERROR.to_string())
        );
    }

    #[test]
    fn scores_display_scaled_to_one_decimal() {
        assert_eq!(display_score(0.92), "92.0");
        assert_eq!(display_score(0.81), "81.0");
        assert_eq!(display_score(1.0), "100.0");
        assert_eq!(display_score(0.0), "0.0");
    }
}
