use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The display phase of a click session.
///
/// - `Idle`: Showing a word, counting clicks
/// - `Loading`: A sentence request is in flight; clicks are ignored
/// - `Sentence`: Showing the generated sentence until the next click
/// - `Error`: Showing an error message until the next click
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Loading,
    Sentence,
    Error,
}

/// Snapshot of a session as returned by the API.
///
/// `display` is what a front end should render right now: the current word
/// with its article, the sentence, the error message, or the loading notice
/// while a request is in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub id: Uuid,
    pub phase: Phase,
    pub display: String,
    pub hint: String,
    pub click_count: usize,
    pub threshold: usize,
    pub collected: Vec<String>,
    pub sentence: Option<String>,
    pub error_message: Option<String>,
    pub loading: bool,
    pub illustration_url: Option<String>,
}
