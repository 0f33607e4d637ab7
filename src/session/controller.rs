use rand::Rng;

use super::{CONTINUE_HINT, LOADING_MESSAGE, THRESHOLD};
use crate::generation::MISSING_CREDENTIAL_MESSAGE;
use crate::models::{Phase, VocabularyEntry};
use crate::vocabulary::{format_with_article, pick_random};

/// What the controller is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    Idle,
    Loading,
    ShowingSentence(String),
    ShowingError(String),
}

impl State {
    pub fn phase(&self) -> Phase {
        match self {
            Self::Idle => Phase::Idle,
            Self::Loading => Phase::Loading,
            Self::ShowingSentence(_) => Phase::Sentence,
            Self::ShowingError(_) => Phase::Error,
        }
    }
}

/// The effect of one click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A request is in flight; nothing changed.
    Ignored,
    /// A sentence or error was cleared and a new cycle started.
    Dismissed,
    /// The word was collected and a new one picked.
    Advanced,
    /// The threshold was reached with no credential configured.
    MissingCredential,
    /// The threshold was reached; the caller must request a sentence for
    /// these words and hand the result to [`Controller::resolve`].
    Generate(Vec<VocabularyEntry>),
}

/// Click-driven state machine for one learner.
///
/// Invariants: the collected list length is the click count, and a sentence
/// and an error are never shown together. The controller does no I/O; the
/// sentence request is the caller's job.
#[derive(Debug, Clone)]
pub struct Controller {
    current: &'static VocabularyEntry,
    collected: Vec<VocabularyEntry>,
    state: State,
    threshold: usize,
}

impl Controller {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_threshold(THRESHOLD, rng)
    }

    /// A controller requesting a sentence after `threshold` clicks (at least 1).
    pub fn with_threshold<R: Rng + ?Sized>(threshold: usize, rng: &mut R) -> Self {
        Self {
            current: pick_random(rng),
            collected: Vec::new(),
            state: State::Idle,
            threshold: threshold.max(1),
        }
    }

    pub fn click<R: Rng + ?Sized>(
        &mut self,
        credential_present: bool,
        rng: &mut R,
    ) -> ClickOutcome {
        match self.state {
            State::Loading => ClickOutcome::Ignored,
            State::ShowingSentence(_) | State::ShowingError(_) => {
                self.reset(rng);
                ClickOutcome::Dismissed
            }
            State::Idle if self.collected.len() + 1 < self.threshold => {
                self.collected.push(*self.current);
                self.current = pick_random(rng);
                ClickOutcome::Advanced
            }
            State::Idle if !credential_present => {
                self.state = State::ShowingError(MISSING_CREDENTIAL_MESSAGE.to_string());
                ClickOutcome::MissingCredential
            }
            State::Idle => {
                self.collected.push(*self.current);
                self.state = State::Loading;
                ClickOutcome::Generate(self.collected.clone())
            }
        }
    }

    /// Finish a loading cycle. `Err` carries the message to display; an
    /// empty message is replaced by the generic failure text.
    ///
    /// Returns `false` (and changes nothing) when no request was pending.
    pub fn resolve(&mut self, result: Result<String, String>) -> bool {
        if self.state != State::Loading {
            return false;
        }
        self.state = match result {
            Ok(sentence) => State::ShowingSentence(sentence),
            Err(message) if message.trim().is_empty() => {
                State::ShowingError(crate::generation::GENERATION_FAILED_MESSAGE.to_string())
            }
            Err(message) => State::ShowingError(message),
        };
        true
    }

    fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.collected.clear();
        self.state = State::Idle;
        self.current = pick_random(rng);
    }

    pub fn current(&self) -> &'static VocabularyEntry {
        self.current
    }

    pub fn collected(&self) -> &[VocabularyEntry] {
        &self.collected
    }

    pub fn click_count(&self) -> usize {
        self.collected.len()
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == State::Loading
    }

    pub fn sentence(&self) -> Option<&str> {
        match &self.state {
            State::ShowingSentence(s) => Some(s),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            State::ShowingError(m) => Some(m),
            _ => None,
        }
    }

    /// The main text a front end should render.
    pub fn display_text(&self) -> String {
        match &self.state {
            State::Idle => format_with_article(self.current),
            State::Loading => LOADING_MESSAGE.to_string(),
            State::ShowingSentence(s) => s.clone(),
            State::ShowingError(m) => m.clone(),
        }
    }

    /// The footer line under the main text.
    pub fn hint(&self) -> String {
        match &self.state {
            State::Idle => format!(
                "Cliquez sur le mot ({}/{})",
                self.click_count(),
                self.threshold
            ),
            State::Loading => String::new(),
            State::ShowingSentence(_) | State::ShowingError(_) => CONTINUE_HINT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    #[test]
    fn starts_idle_with_no_words() {
        let c = Controller::new(&mut rng());
        assert_eq!(c.state(), &State::Idle);
        assert_eq!(c.click_count(), 0);
        assert_eq!(c.hint(), "Cliquez sur le mot (0/10)");
    }

    #[test]
    fn collects_the_word_that_was_shown() {
        let mut r = rng();
        let mut c = Controller::new(&mut r);
        let shown = *c.current();

        assert_eq!(c.click(true, &mut r), ClickOutcome::Advanced);
        assert_eq!(c.collected(), &[shown]);
    }

    #[test]
    fn threshold_of_one_requests_immediately() {
        let mut r = rng();
        let mut c = Controller::with_threshold(1, &mut r);
        let shown = *c.current();

        assert_eq!(c.click(true, &mut r), ClickOutcome::Generate(vec![shown]));
        assert!(c.is_loading());
    }

    #[test]
    fn resolve_without_pending_request_is_rejected() {
        let mut c = Controller::new(&mut rng());
        assert!(!c.resolve(Ok("Bonjour.".to_string())));
        assert_eq!(c.state(), &State::Idle);
    }

    #[test]
    fn empty_error_message_uses_generic_text() {
        let mut r = rng();
        let mut c = Controller::with_threshold(1, &mut r);
        c.click(true, &mut r);
        c.resolve(Err(String::new()));
        assert_eq!(
            c.error_message(),
            Some(crate::generation::GENERATION_FAILED_MESSAGE)
        );
    }

    #[test]
    fn display_follows_state() {
        let mut r = rng();
        let mut c = Controller::with_threshold(1, &mut r);
        assert_eq!(c.display_text(), format_with_article(c.current()));

        c.click(true, &mut r);
        assert_eq!(c.display_text(), LOADING_MESSAGE);

        c.resolve(Ok("Le chat mange.".to_string()));
        assert_eq!(c.display_text(), "Le chat mange.");
        assert_eq!(c.hint(), CONTINUE_HINT);
    }
}
