//! Alexa request and response envelopes.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::intent::Slots;
use crate::response::Response;
use crate::Result;

/// Incoming Alexa request.
#[derive(Debug, Clone, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: Option<String>,
    pub session: Option<Session>,
    pub context: Option<RequestContext>,
    pub request: Request,
}

impl RequestEnvelope {
    /// Application id the request claims to come from.
    ///
    /// `context.System` is present on every request; the session copy is only
    /// there for in-session requests.
    pub fn application_id(&self) -> Option<&str> {
        self.context
            .as_ref()
            .and_then(|context| context.system.application.as_ref())
            .or_else(|| self.session.as_ref().and_then(|s| s.application.as_ref()))
            .map(|application| application.application_id.as_str())
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.session_id.as_str())
    }

    pub fn is_new_session(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.new)
    }

    /// Parse the raw Lambda payload.
    pub fn from_value(payload: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(payload)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    pub session_id: String,
    pub application: Option<Application>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestContext {
    #[serde(rename = "System")]
    pub system: SystemState,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SystemState {
    pub application: Option<Application>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

/// The request body, tagged by its `type`.
///
/// Types the skill does not handle still keep their id and timestamp in
/// [`Request::Unknown`] so the freshness check applies to them too.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawRequest")]
pub enum Request {
    LaunchRequest(RequestMeta),
    IntentRequest(IntentRequest),
    SessionStartedRequest(RequestMeta),
    SessionEndedRequest(SessionEndedRequest),
    Unknown(UnknownRequest),
}

impl Request {
    pub fn meta(&self) -> Option<&RequestMeta> {
        match self {
            Request::LaunchRequest(meta) | Request::SessionStartedRequest(meta) => Some(meta),
            Request::IntentRequest(request) => Some(&request.meta),
            Request::SessionEndedRequest(request) => Some(&request.meta),
            Request::Unknown(_) => None,
        }
    }

    pub fn request_id(&self) -> Option<&str> {
        match self {
            Request::Unknown(request) => request.request_id.as_deref(),
            _ => self.meta().map(|meta| meta.request_id.as_str()),
        }
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Request::Unknown(request) => request.timestamp,
            _ => self.meta().map(|meta| meta.timestamp),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawRequest {
    Known(KnownRequest),
    Unknown(UnknownRequest),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
enum KnownRequest {
    LaunchRequest(RequestMeta),
    IntentRequest(IntentRequest),
    SessionStartedRequest(RequestMeta),
    SessionEndedRequest(SessionEndedRequest),
}

impl From<RawRequest> for Request {
    fn from(raw: RawRequest) -> Self {
        match raw {
            RawRequest::Known(KnownRequest::LaunchRequest(meta)) => Request::LaunchRequest(meta),
            RawRequest::Known(KnownRequest::IntentRequest(request)) => Request::IntentRequest(request),
            RawRequest::Known(KnownRequest::SessionStartedRequest(meta)) => {
                Request::SessionStartedRequest(meta)
            }
            RawRequest::Known(KnownRequest::SessionEndedRequest(request)) => {
                Request::SessionEndedRequest(request)
            }
            RawRequest::Unknown(request) => Request::Unknown(request),
        }
    }
}

/// A request type the skill has no handler for, or a known type that did not
/// parse.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnknownRequest {
    #[serde(rename = "type")]
    pub request_type: String,
    pub request_id: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Fields shared by every request type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntentRequest {
    #[serde(flatten)]
    pub meta: RequestMeta,
    pub intent: Option<IntentPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntentPayload {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, SlotPayload>,
}

impl IntentPayload {
    /// Slot values keyed by slot name.
    pub fn slot_values(&self) -> Slots {
        self.slots
            .iter()
            .map(|(key, slot)| (key.clone(), slot.value.clone()))
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotPayload {
    #[serde(default)]
    pub name: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionEndedRequest {
    #[serde(flatten)]
    pub meta: RequestMeta,
    pub reason: Option<String>,
}

/// Outgoing Alexa response.
#[derive(Debug, Serialize)]
pub struct ResponseEnvelope {
    pub version: String,
    pub response: ResponseBody,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<SimpleCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub text: String,
}

impl OutputSpeech {
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self {
            speech_type: "PlainText".to_string(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SimpleCard {
    #[serde(rename = "type")]
    pub card_type: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

impl ResponseEnvelope {
    /// Envelope with an empty response body, as expected for session-ended requests.
    pub fn empty() -> Self {
        Self {
            version: "1.0".to_string(),
            response: ResponseBody::default(),
        }
    }
}

impl From<Response> for ResponseEnvelope {
    fn from(response: Response) -> Self {
        Self {
            version: "1.0".to_string(),
            response: ResponseBody {
                output_speech: Some(OutputSpeech::plain_text(response.speech_text)),
                card: response.card.map(|card| SimpleCard {
                    card_type: "Simple".to_string(),
                    title: card.title,
                    content: card.body,
                }),
                reprompt: response.reprompt_text.map(|text| Reprompt {
                    output_speech: OutputSpeech::plain_text(text),
                }),
                should_end_session: Some(response.should_end_session),
            },
        }
    }
}

impl From<Option<Response>> for ResponseEnvelope {
    fn from(response: Option<Response>) -> Self {
        response.map_or_else(Self::empty, Self::from)
    }
}
