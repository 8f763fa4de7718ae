//! Alexa Skill Lambda - Wall of Shame voice interactions.
//!
//! Verifies the caller, hands the request to the skill and serializes the
//! answer back into the Alexa response envelope. The wall lives in memory for
//! as long as this Lambda instance stays warm.

use chrono::Utc;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::Value;
use shared::{verify_request, Config, RequestEnvelope, ResponseEnvelope, Skill};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Application state
struct AppState {
    config: Config,
    skill: Mutex<Skill<SmallRng>>,
}

impl AppState {
    fn new(config: Config, rng: SmallRng) -> Self {
        Self {
            config,
            skill: Mutex::new(Skill::new(rng)),
        }
    }

    fn from_env() -> Result<Self, Error> {
        let config = Config::from_env()?;
        info!(
            "Loaded config: {} allowed application ids, timestamp tolerance {}s",
            config.application_ids.len(),
            config.timestamp_tolerance_secs
        );
        Ok(Self::new(config, SmallRng::from_os_rng()))
    }

    /// Verify and answer a single request.
    async fn process(&self, envelope: RequestEnvelope) -> Result<ResponseEnvelope, Error> {
        if let Err(e) = verify_request(&self.config, &envelope, Utc::now()) {
            warn!("Rejected request: {}", e);
            return Err(e.into());
        }

        let response = self.skill.lock().await.handle(&envelope);
        Ok(ResponseEnvelope::from(response))
    }
}

async fn handler(state: Arc<AppState>, event: LambdaEvent<Value>) -> Result<ResponseEnvelope, Error> {
    let (payload, context) = event.into_parts();
    info!("Handling Lambda request {}", context.request_id);

    let envelope = match RequestEnvelope::from_value(payload) {
        Ok(envelope) => envelope,
        Err(e) => {
            error!("Failed to parse Alexa request: {}", e);
            return Err(e.into());
        }
    };

    state.process(envelope).await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::from_env()?);

    lambda_runtime::run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
