//! Request verification before anything reaches the skill.

use chrono::{DateTime, Utc};

use crate::models::RequestEnvelope;
use crate::{Config, Error, Result};

/// Check that a request comes from an allowed skill and is fresh.
pub fn verify_request(config: &Config, envelope: &RequestEnvelope, now: DateTime<Utc>) -> Result<()> {
    verify_application_id(&config.application_ids, envelope.application_id())?;

    if config.timestamp_tolerance_secs == 0 {
        return Ok(());
    }

    let timestamp = envelope
        .request
        .timestamp()
        .ok_or_else(|| Error::Unauthorized("Request has no timestamp".to_string()))?;

    verify_timestamp(timestamp, now, config.timestamp_tolerance_secs)
}

/// Reject application ids outside the allow-list. An empty list allows everything.
pub fn verify_application_id(allowed: &[String], application_id: Option<&str>) -> Result<()> {
    if allowed.is_empty() {
        return Ok(());
    }

    let application_id = application_id
        .ok_or_else(|| Error::Unauthorized("Request has no application id".to_string()))?;

    if allowed.iter().any(|id| id == application_id) {
        Ok(())
    } else {
        Err(Error::Unauthorized(format!(
            "Application id {} is not supported",
            application_id
        )))
    }
}

/// Reject requests whose timestamp drifted more than `tolerance_secs` from now.
/// A tolerance of zero disables the check.
pub fn verify_timestamp(timestamp: DateTime<Utc>, now: DateTime<Utc>, tolerance_secs: u64) -> Result<()> {
    if tolerance_secs == 0 {
        return Ok(());
    }

    let drift = (now - timestamp).num_seconds().unsigned_abs();
    if drift > tolerance_secs {
        return Err(Error::Unauthorized(format!(
            "Request timestamp {} is {}s away from now, tolerance is {}s",
            timestamp, drift, tolerance_secs
        )));
    }

    Ok(())
}
