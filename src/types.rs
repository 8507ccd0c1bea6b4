//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **API Types** - `/predict` response structures
//! - **Outcome Types** - Classification of a finished request
//! - **Result Types** - Result-region state machine
//! - **Interaction Types** - Click gating and selection rules
//! - **Notification Types** - Transient banner stack
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// API Types
// =============================================================================

/// Response body of the `/predict` endpoint.
///
/// The backend answers either `{"result": ..., "confidence": ...}` or
/// `{"error": ...}`. Every field is optional at the wire level; the
/// combination is classified by [`PredictOutcome::from_response`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Predicted label, e.g. `"Cat"` or `"Dog"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// Model confidence. Arrives as a number or a string such as `"87.42%"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    /// Backend-reported failure message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Confidence value as the backend sends it, numeric or stringly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Confidence {
    /// Plain JSON number, e.g. `87.42`.
    Number(f64),
    /// Formatted string, e.g. `"87.42%"`.
    Text(String),
}

impl Confidence {
    /// Raw display form, shown verbatim in the `Confidence: {value}` line.
    pub fn display(&self) -> String {
        match self {
            Confidence::Number(n) => n.to_string(),
            Confidence::Text(s) => s.clone(),
        }
    }

    /// Numeric percentage for the confidence bar, clamped to `0..=100`.
    ///
    /// String values contribute their leading float prefix, so `"87.42%"`
    /// yields `87.42`. Values with no usable number yield `None` and the
    /// bar stays at zero.
    pub fn as_percent(&self) -> Option<f64> {
        let raw = match self {
            Confidence::Number(n) => Some(*n),
            Confidence::Text(s) => parse_float_prefix(s),
        }?;
        raw.is_finite().then(|| raw.clamp(0.0, 100.0))
    }
}

/// Parse the longest leading float prefix of `s`, ignoring leading
/// whitespace. Accepts an optional sign, digits, and one fraction part.
fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let mut digits = 0;
    while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
        end += 1;
        digits += 1;
    }
    if bytes.get(end) == Some(&b'.') {
        end += 1;
        while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }
    s[..end].parse().ok()
}

// =============================================================================
// Outcome Types
// =============================================================================

/// Terminal classification of one predict attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum PredictOutcome {
    /// Backend produced a label. Confidence may be absent.
    Classified {
        label: String,
        confidence: Option<Confidence>,
    },
    /// Backend answered with an `error` field.
    Rejected { message: String },
    /// Request failed, or the body was not a usable prediction.
    Unreachable,
}

impl PredictOutcome {
    /// Classify a finished request.
    ///
    /// The `error` field wins over `result` when both are present. A body
    /// with neither counts as a failed request, so the flow always leaves
    /// the analyzing state.
    pub fn from_response(response: Result<PredictResponse, PredictError>) -> Self {
        let Ok(response) = response else {
            return PredictOutcome::Unreachable;
        };
        if let Some(message) = response.error {
            PredictOutcome::Rejected { message }
        } else if let Some(label) = response.result {
            PredictOutcome::Classified {
                label,
                confidence: response.confidence,
            }
        } else {
            PredictOutcome::Unreachable
        }
    }

    /// Target width of the confidence bar, when this outcome animates it.
    pub fn bar_percent(&self) -> Option<f64> {
        match self {
            PredictOutcome::Classified {
                confidence: Some(confidence),
                ..
            } => confidence.as_percent(),
            _ => None,
        }
    }

    /// Result-region state this outcome may write over `current`.
    ///
    /// `None` unless the region still shows the analyzing placeholder: a
    /// selection made while the request ran has hidden the region, and a
    /// stale verdict must not resurface over the new preview.
    pub fn apply_over(&self, current: &ResultState) -> Option<ResultState> {
        matches!(current, ResultState::Analyzing).then(|| ResultState::from_outcome(self))
    }
}

// =============================================================================
// Result Types
// =============================================================================

/// State of the result region below the upload card.
///
/// Transitions: `Hidden -> Analyzing -> (Classified | BackendError |
/// ConnectionError)`. Selecting a new image returns to `Hidden`.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ResultState {
    /// Region not shown. Initial state, and after each new file selection.
    #[default]
    Hidden,
    /// Request in flight, placeholder text visible.
    Analyzing,
    /// Backend rejected the image with a message.
    BackendError { message: String },
    /// Request or decode failed.
    ConnectionError,
    /// Prediction available.
    Classified {
        label: String,
        confidence: Option<Confidence>,
    },
}

impl ResultState {
    /// State the region enters once `outcome` is known.
    pub fn from_outcome(outcome: &PredictOutcome) -> Self {
        match outcome {
            PredictOutcome::Classified { label, confidence } => ResultState::Classified {
                label: label.clone(),
                confidence: confidence.clone(),
            },
            PredictOutcome::Rejected { message } => ResultState::BackendError {
                message: message.clone(),
            },
            PredictOutcome::Unreachable => ResultState::ConnectionError,
        }
    }

    /// Whether the region carries the `hidden` class.
    pub fn is_hidden(&self) -> bool {
        matches!(self, ResultState::Hidden)
    }

    /// State after a new file is picked, from any state: whatever the
    /// region showed is hidden before the preview re-renders.
    pub fn after_selection(&self) -> ResultState {
        ResultState::Hidden
    }

    /// Headline of the result region. Labels render in uppercase.
    pub fn prediction_text(&self) -> String {
        match self {
            ResultState::Hidden => String::new(),
            ResultState::Analyzing => "ANALYZING...".to_string(),
            ResultState::BackendError { .. } => "ERROR".to_string(),
            ResultState::ConnectionError => "CONNECTION ERROR".to_string(),
            ResultState::Classified { label, .. } => label.to_uppercase(),
        }
    }

    /// Secondary line of the result region.
    pub fn confidence_text(&self) -> String {
        match self {
            ResultState::Hidden | ResultState::Analyzing => String::new(),
            ResultState::BackendError { message } => message.clone(),
            ResultState::ConnectionError => "Unable to reach server".to_string(),
            ResultState::Classified {
                confidence: Some(confidence),
                ..
            } => format!("Confidence: {}", confidence.display()),
            ResultState::Classified {
                confidence: None, ..
            } => String::new(),
        }
    }
}

// =============================================================================
// Interaction Types
// =============================================================================

/// Decision taken when the predict control is clicked.
///
/// Gating happens before anything touches the network: a missing file
/// only raises a notification, and a click during a running flow is
/// dropped outright.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitDecision<T> {
    /// A flow is already in flight; the click is ignored.
    AlreadyRunning,
    /// Nothing is selected; notify, without issuing a request.
    MissingFile,
    /// Start the predict flow for the selected file.
    Submit(T),
}

impl<T> SubmitDecision<T> {
    /// Gate a click against the current selection and flight state.
    pub fn evaluate(selected: Option<T>, in_flight: bool) -> Self {
        if in_flight {
            SubmitDecision::AlreadyRunning
        } else {
            match selected {
                Some(file) => SubmitDecision::Submit(file),
                None => SubmitDecision::MissingFile,
            }
        }
    }
}

/// Keep only the first file of a multi-file selection or drop.
pub fn first_file<T>(files: impl IntoIterator<Item = T>) -> Option<T> {
    files.into_iter().next()
}

// =============================================================================
// Notification Types
// =============================================================================

/// Severity of a notification banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    /// Informational message
    Info,
    /// Error message
    Error,
}

impl NotificationKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Info => "notification-info",
            NotificationKind::Error => "notification-error",
        }
    }
}

/// A single transient banner.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    /// Stable id, unique within the page session.
    pub id: u64,
    /// Severity, drives the banner color.
    pub kind: NotificationKind,
    /// Message text.
    pub message: String,
    /// Set while the exit animation plays, just before removal.
    pub leaving: bool,
}

/// Stack of live notifications.
///
/// Ids are handed out monotonically so timers scheduled against one
/// banner never touch a later one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    /// Append a visible notification and return its id.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            kind,
            message: message.into(),
            leaving: false,
        });
        id
    }

    /// Start the exit animation for `id`. Unknown ids are ignored.
    pub fn begin_exit(&mut self, id: u64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.leaving = true;
        }
    }

    /// Drop `id` from the stack. Unknown ids are ignored.
    pub fn remove(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    /// Live notifications, oldest first.
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Errors from the predict service.
///
/// Both variants surface to the user as the same connection error; the
/// distinction only reaches the console log.
#[derive(Clone, Debug, PartialEq)]
pub enum PredictError {
    /// Building or sending the request failed.
    Request(String),
    /// The response body could not be decoded as JSON.
    Decode(String),
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::Request(msg) => write!(f, "Request error: {}", msg),
            PredictError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for PredictError {}

/// Result type alias for predict operations.
pub type PredictResult<T> = Result<T, PredictError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_number_as_percent() {
        assert_eq!(Confidence::Number(87.42).as_percent(), Some(87.42));
        assert_eq!(Confidence::Number(0.0).as_percent(), Some(0.0));
    }

    #[test]
    fn test_confidence_percent_string_parses_prefix() {
        assert_eq!(Confidence::Text("87.42%".to_string()).as_percent(), Some(87.42));
        assert_eq!(Confidence::Text("100%".to_string()).as_percent(), Some(100.0));
        assert_eq!(Confidence::Text(" 55.5 ".to_string()).as_percent(), Some(55.5));
    }

    #[test]
    fn test_confidence_unparsable_text_gives_none() {
        assert_eq!(Confidence::Text("high".to_string()).as_percent(), None);
        assert_eq!(Confidence::Text("".to_string()).as_percent(), None);
        assert_eq!(Confidence::Text("%42".to_string()).as_percent(), None);
        assert_eq!(Confidence::Text("-".to_string()).as_percent(), None);
    }

    #[test]
    fn test_confidence_clamped_to_percent_range() {
        assert_eq!(Confidence::Number(250.0).as_percent(), Some(100.0));
        assert_eq!(Confidence::Number(-3.0).as_percent(), Some(0.0));
        assert_eq!(Confidence::Text("-12.5%".to_string()).as_percent(), Some(0.0));
    }

    #[test]
    fn test_confidence_non_finite_gives_none() {
        assert_eq!(Confidence::Number(f64::NAN).as_percent(), None);
        assert_eq!(Confidence::Number(f64::INFINITY).as_percent(), None);
    }

    #[test]
    fn test_confidence_display_keeps_raw_form() {
        assert_eq!(Confidence::Text("87.42%".to_string()).display(), "87.42%");
        assert_eq!(Confidence::Number(87.5).display(), "87.5");
        assert_eq!(Confidence::Number(90.0).display(), "90");
    }

    #[test]
    fn test_outcome_error_field_wins_over_result() {
        let response = PredictResponse {
            result: Some("Cat".to_string()),
            confidence: Some(Confidence::Number(99.0)),
            error: Some("model not loaded".to_string()),
        };
        assert_eq!(
            PredictOutcome::from_response(Ok(response)),
            PredictOutcome::Rejected {
                message: "model not loaded".to_string()
            }
        );
    }

    #[test]
    fn test_outcome_result_classifies() {
        let response = PredictResponse {
            result: Some("Dog".to_string()),
            confidence: Some(Confidence::Text("91.07%".to_string())),
            error: None,
        };
        let outcome = PredictOutcome::from_response(Ok(response));
        assert_eq!(
            outcome,
            PredictOutcome::Classified {
                label: "Dog".to_string(),
                confidence: Some(Confidence::Text("91.07%".to_string())),
            }
        );
        assert_eq!(outcome.bar_percent(), Some(91.07));
    }

    #[test]
    fn test_outcome_empty_body_is_unreachable() {
        let response = PredictResponse {
            result: None,
            confidence: None,
            error: None,
        };
        assert_eq!(
            PredictOutcome::from_response(Ok(response)),
            PredictOutcome::Unreachable
        );
    }

    #[test]
    fn test_outcome_failed_request_is_unreachable() {
        let err = PredictError::Request("connection refused".to_string());
        assert_eq!(
            PredictOutcome::from_response(Err(err)),
            PredictOutcome::Unreachable
        );
    }

    #[test]
    fn test_outcome_without_confidence_has_no_bar() {
        let outcome = PredictOutcome::Classified {
            label: "Cat".to_string(),
            confidence: None,
        };
        assert_eq!(outcome.bar_percent(), None);
    }

    #[test]
    fn test_classified_state_uppercases_label() {
        let state = ResultState::Classified {
            label: "cat".to_string(),
            confidence: Some(Confidence::Text("87.5".to_string())),
        };
        assert_eq!(state.prediction_text(), "CAT");
        assert_eq!(state.confidence_text(), "Confidence: 87.5");
        assert!(!state.is_hidden());
    }

    #[test]
    fn test_classified_state_without_confidence_has_empty_line() {
        let state = ResultState::Classified {
            label: "Dog".to_string(),
            confidence: None,
        };
        assert_eq!(state.prediction_text(), "DOG");
        assert_eq!(state.confidence_text(), "");
    }

    #[test]
    fn test_analyzing_state_shows_placeholder() {
        let state = ResultState::Analyzing;
        assert_eq!(state.prediction_text(), "ANALYZING...");
        assert_eq!(state.confidence_text(), "");
    }

    #[test]
    fn test_backend_error_state_shows_message() {
        let state = ResultState::BackendError {
            message: "Unsupported file type".to_string(),
        };
        assert_eq!(state.prediction_text(), "ERROR");
        assert_eq!(state.confidence_text(), "Unsupported file type");
    }

    #[test]
    fn test_connection_error_state_uses_fixed_copy() {
        let state = ResultState::ConnectionError;
        assert_eq!(state.prediction_text(), "CONNECTION ERROR");
        assert_eq!(state.confidence_text(), "Unable to reach server");
    }

    #[test]
    fn test_hidden_state_is_default_and_blank() {
        let state = ResultState::default();
        assert!(state.is_hidden());
        assert_eq!(state.prediction_text(), "");
        assert_eq!(state.confidence_text(), "");
    }

    #[test]
    fn test_state_follows_outcome() {
        let outcome = PredictOutcome::Rejected {
            message: "No file part".to_string(),
        };
        assert_eq!(
            ResultState::from_outcome(&outcome),
            ResultState::BackendError {
                message: "No file part".to_string()
            }
        );
        assert_eq!(
            ResultState::from_outcome(&PredictOutcome::Unreachable),
            ResultState::ConnectionError
        );
    }

    #[test]
    fn test_outcome_applies_over_analyzing() {
        let outcome = PredictOutcome::Classified {
            label: "Cat".to_string(),
            confidence: Some(Confidence::Text("87.42%".to_string())),
        };
        assert_eq!(
            outcome.apply_over(&ResultState::Analyzing),
            Some(ResultState::from_outcome(&outcome))
        );
    }

    #[test]
    fn test_stale_outcome_stays_suppressed_after_selection() {
        // A file picked while the request runs hides the region; the late
        // verdict must not resurface over the new preview.
        let outcomes = [
            PredictOutcome::Classified {
                label: "Dog".to_string(),
                confidence: Some(Confidence::Number(91.0)),
            },
            PredictOutcome::Rejected {
                message: "No file selected".to_string(),
            },
            PredictOutcome::Unreachable,
        ];
        for outcome in &outcomes {
            let current = ResultState::Analyzing.after_selection();
            assert_eq!(outcome.apply_over(&current), None);
            // The bar fill is keyed on the applied state still showing
            assert_ne!(ResultState::from_outcome(outcome), ResultState::Hidden);
        }
    }

    #[test]
    fn test_selection_hides_any_displayed_result() {
        let displayed = ResultState::Classified {
            label: "Cat".to_string(),
            confidence: Some(Confidence::Number(90.0)),
        };
        assert_eq!(displayed.after_selection(), ResultState::Hidden);
        assert_eq!(ResultState::Analyzing.after_selection(), ResultState::Hidden);
        assert_eq!(
            ResultState::BackendError {
                message: "Unsupported file type".to_string()
            }
            .after_selection(),
            ResultState::Hidden
        );
    }

    #[test]
    fn test_submit_requires_file() {
        let decision = SubmitDecision::evaluate(None::<&str>, false);
        assert_eq!(decision, SubmitDecision::MissingFile);
    }

    #[test]
    fn test_submit_ignored_while_in_flight() {
        let decision = SubmitDecision::evaluate(Some("photo.jpg"), true);
        assert_eq!(decision, SubmitDecision::AlreadyRunning);
    }

    #[test]
    fn test_submit_proceeds_with_idle_selection() {
        let decision = SubmitDecision::evaluate(Some("photo.jpg"), false);
        assert_eq!(decision, SubmitDecision::Submit("photo.jpg"));
    }

    #[test]
    fn test_first_file_keeps_only_the_first() {
        assert_eq!(first_file(["a.png", "b.png", "c.png"]), Some("a.png"));
        assert_eq!(first_file(Vec::<&str>::new()), None);
    }

    #[test]
    fn test_notification_ids_are_monotonic() {
        let mut queue = NotificationQueue::default();
        let a = queue.push(NotificationKind::Error, "first");
        let b = queue.push(NotificationKind::Info, "second");
        assert!(b > a);
        assert_eq!(queue.items().len(), 2);
        assert_eq!(queue.items()[0].message, "first");
        assert!(!queue.items()[0].leaving);
    }

    #[test]
    fn test_notification_exit_then_remove() {
        let mut queue = NotificationQueue::default();
        let id = queue.push(NotificationKind::Error, "bye");
        queue.begin_exit(id);
        assert!(queue.items()[0].leaving);

        queue.remove(id);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_notification_unknown_id_is_ignored() {
        let mut queue = NotificationQueue::default();
        let id = queue.push(NotificationKind::Info, "stay");
        queue.begin_exit(id + 1);
        queue.remove(id + 1);
        assert_eq!(queue.items().len(), 1);
        assert!(!queue.items()[0].leaving);
    }

    #[test]
    fn test_notification_ids_not_reused_after_removal() {
        let mut queue = NotificationQueue::default();
        let a = queue.push(NotificationKind::Error, "one");
        queue.remove(a);
        let b = queue.push(NotificationKind::Error, "two");
        assert_ne!(a, b);
    }
}
