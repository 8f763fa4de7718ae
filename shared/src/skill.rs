//! Per-instance skill state and the request lifecycle around intent dispatch.

use rand::Rng;
use tracing::{info, warn};

use crate::intent::Slots;
use crate::models::{Request, RequestEnvelope};
use crate::response::Response;
use crate::router;
use crate::store::LeaderboardStore;

/// The wall of shame for one handler instance, with its source of randomness.
pub struct Skill<R> {
    store: LeaderboardStore,
    rng: R,
}

impl<R: Rng> Skill<R> {
    pub fn new(rng: R) -> Self {
        Self {
            store: LeaderboardStore::new(),
            rng,
        }
    }

    pub fn store(&self) -> &LeaderboardStore {
        &self.store
    }

    /// Route a verified request by type.
    ///
    /// Returns `None` when the platform expects no speech, i.e. for
    /// session-ended notifications.
    pub fn handle(&mut self, envelope: &RequestEnvelope) -> Option<Response> {
        let session_id = envelope.session_id().unwrap_or_default();

        if envelope.is_new_session() {
            self.session_started(envelope.request.request_id().unwrap_or_default(), session_id);
        }

        match &envelope.request {
            Request::LaunchRequest(meta) => Some(self.launch(&meta.request_id, session_id)),
            Request::IntentRequest(request) => {
                info!(
                    "Intent request {} in session {}",
                    request.meta.request_id, session_id
                );
                let response = match &request.intent {
                    Some(intent) => self.intent(Some(intent.name.as_str()), &intent.slot_values()),
                    None => self.intent(None, &Slots::new()),
                };
                Some(response)
            }
            // Already handled through the session's `new` flag when present.
            Request::SessionStartedRequest(meta) => {
                if !envelope.is_new_session() {
                    self.session_started(&meta.request_id, session_id);
                }
                None
            }
            Request::SessionEndedRequest(request) => {
                self.session_ended(&request.meta.request_id, session_id, request.reason.as_deref());
                None
            }
            Request::Unknown(request) => {
                warn!(
                    "Unsupported request type {} in session {}",
                    request.request_type, session_id
                );
                Some(router::unsupported())
            }
        }
    }

    pub fn session_started(&self, request_id: &str, session_id: &str) {
        info!("Session {} started by request {}", session_id, request_id);
    }

    pub fn launch(&self, request_id: &str, session_id: &str) -> Response {
        info!("Launch request {} in session {}", request_id, session_id);
        router::launch()
    }

    /// Dispatch an intent. A request without an intent is unsupported.
    pub fn intent(&mut self, intent_name: Option<&str>, slots: &Slots) -> Response {
        match intent_name {
            Some(name) => router::dispatch(&mut self.store, &mut self.rng, name, slots),
            None => router::unsupported(),
        }
    }

    pub fn session_ended(&self, request_id: &str, session_id: &str, reason: Option<&str>) {
        info!(
            "Session {} ended by request {}: {}",
            session_id,
            request_id,
            reason.unwrap_or("unknown")
        );
    }
}
