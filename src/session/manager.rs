use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::Result;
use uuid::Uuid;

use super::{ClickOutcome, Controller};
use crate::generation::{SentenceClient, GENERATION_FAILED_MESSAGE};
use crate::images::ImageStore;
use crate::models::{Phase, SessionView};
use crate::settings::CredentialStore;
use crate::vocabulary::format_with_article;

/// How long a session survives without being read or clicked.
pub const SESSION_TTL: Duration = Duration::from_secs(30 * 60);

type SharedController = Arc<Mutex<Controller>>;

struct Entry {
    controller: SharedController,
    last_touched: Instant,
}

/// Registry of live click sessions.
///
/// Each session owns one [`Controller`]. A click that reaches the threshold
/// spawns the sentence request on the runtime, so the request always runs to
/// completion even if the caller goes away, then waits for it to settle.
///
/// Sessions idle for longer than the TTL are dropped: lazily when looked up,
/// and in bulk whenever a new session is created.
#[derive(Clone)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<Uuid, Entry>>>,
    generator: SentenceClient,
    credentials: Arc<dyn CredentialStore>,
    images: ImageStore,
    ttl: Duration,
}

impl SessionManager {
    pub fn new(
        generator: SentenceClient,
        credentials: Arc<dyn CredentialStore>,
        images: ImageStore,
    ) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            generator,
            credentials,
            images,
            ttl: SESSION_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn create(&self) -> SessionView {
        let id = Uuid::new_v4();
        let controller = Controller::new(&mut rand::rng());
        let view = self.view(id, &controller);

        let mut sessions = self.sessions.lock().expect("session registry lock poisoned");
        let before = sessions.len();
        sessions.retain(|_, entry| entry.last_touched.elapsed() < self.ttl);
        let expired = before - sessions.len();
        if expired > 0 {
            tracing::debug!("Dropped {} expired sessions", expired);
        }

        sessions.insert(
            id,
            Entry {
                controller: Arc::new(Mutex::new(controller)),
                last_touched: Instant::now(),
            },
        );
        tracing::info!("Created session {} ({} live)", id, sessions.len());
        view
    }

    pub fn get(&self, id: Uuid) -> Option<SessionView> {
        let session = self.session(id)?;
        let controller = session.lock().expect("session lock poisoned");
        Some(self.view(id, &controller))
    }

    pub fn remove(&self, id: Uuid) -> bool {
        self.sessions
            .lock()
            .expect("session registry lock poisoned")
            .remove(&id)
            .is_some()
    }

    /// Sessions currently held, including expired ones not yet swept.
    pub fn len(&self) -> usize {
        self.sessions
            .lock()
            .expect("session registry lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply one click and return the settled view.
    ///
    /// Returns `Ok(None)` for an unknown or expired session.
    pub async fn click(&self, id: Uuid) -> Result<Option<SessionView>> {
        let Some(session) = self.session(id) else {
            return Ok(None);
        };

        let credential = self.credentials.credential()?;
        let outcome = {
            let mut rng = rand::rng();
            let mut controller = session.lock().expect("session lock poisoned");
            controller.click(credential.is_some(), &mut rng)
        };

        match outcome {
            ClickOutcome::Generate(words) => {
                let generator = self.generator.clone();
                let task_session = Arc::clone(&session);
                let task = tokio::spawn(async move {
                    let result = generator
                        .generate(&words, credential.as_deref())
                        .await
                        .map_err(|e| {
                            tracing::warn!("Sentence generation failed: {}", e);
                            e.user_message()
                        });
                    task_session
                        .lock()
                        .expect("session lock poisoned")
                        .resolve(result);
                });

                if let Err(e) = task.await {
                    tracing::error!("Sentence task for session {} failed: {}", id, e);
                    session
                        .lock()
                        .expect("session lock poisoned")
                        .resolve(Err(GENERATION_FAILED_MESSAGE.to_string()));
                }
            }
            ClickOutcome::MissingCredential => {
                tracing::info!("Session {} reached the threshold without an API key", id);
            }
            ClickOutcome::Ignored => {
                tracing::debug!("Ignoring click on session {} while loading", id);
            }
            ClickOutcome::Dismissed | ClickOutcome::Advanced => {}
        }

        let controller = session.lock().expect("session lock poisoned");
        Ok(Some(self.view(id, &controller)))
    }

    /// Look up a live session and mark it as used.
    fn session(&self, id: Uuid) -> Option<SharedController> {
        let mut sessions = self.sessions.lock().expect("session registry lock poisoned");
        let entry = sessions.get_mut(&id)?;
        if entry.last_touched.elapsed() >= self.ttl {
            sessions.remove(&id);
            tracing::debug!("Session {} expired", id);
            return None;
        }
        entry.last_touched = Instant::now();
        Some(Arc::clone(&entry.controller))
    }

    fn view(&self, id: Uuid, controller: &Controller) -> SessionView {
        let illustration_url = if controller.state().phase() == Phase::Idle {
            controller
                .current()
                .illustration
                .map(|f| self.images.public_url(f))
        } else {
            None
        };

        SessionView {
            id,
            phase: controller.state().phase(),
            display: controller.display_text(),
            hint: controller.hint(),
            click_count: controller.click_count(),
            threshold: controller.threshold(),
            collected: controller.collected().iter().map(format_with_article).collect(),
            sentence: controller.sentence().map(str::to_string),
            error_message: controller.error_message().map(str::to_string),
            loading: controller.is_loading(),
            illustration_url,
        }
    }
}
