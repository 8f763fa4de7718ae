//! Wall of Shame skill library.
//!
//! The conversational core ([`store`], [`router`]) keeps an in-memory tally of
//! shamed players and answers resolved intents. The remaining modules adapt it
//! to the Alexa request/response envelope and verify incoming requests.

pub mod auth;
pub mod config;
pub mod error;
pub mod intent;
pub mod models;
pub mod quotes;
pub mod response;
pub mod router;
pub mod skill;
pub mod store;

pub use auth::verify_request;
pub use config::Config;
pub use error::{Error, Result};
pub use intent::{Intent, Slots};
pub use models::{RequestEnvelope, ResponseEnvelope};
pub use response::{Card, Response};
pub use router::dispatch;
pub use skill::Skill;
pub use store::LeaderboardStore;
