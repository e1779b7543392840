use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::DecryptError;

pub const SUCCESS_STATUS_CODE: u16 = 200;
pub const FAILURE_STATUS_CODE: u16 = 500;

const REQUIRED_FIELDS: [(&str, &str); 2] = [
    ("/detail/bucket/name", "detail.bucket.name"),
    ("/detail/object/key", "detail.object.key"),
];

/// "Object Created" notification as delivered by EventBridge. Only the bucket
/// name and object key are required; envelope fields are kept for logging and
/// dropped silently when they have an unexpected shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObjectCreatedEvent {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub source: Option<String>,
    #[serde(rename = "detail-type", default, deserialize_with = "lenient")]
    pub detail_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub account: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub time: Option<DateTime<Utc>>,
    pub detail: ObjectCreatedDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObjectCreatedDetail {
    pub bucket: BucketRef,
    pub object: ObjectRef,
    #[serde(default, deserialize_with = "lenient")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BucketRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObjectRef {
    pub key: String,
    #[serde(default, deserialize_with = "lenient")]
    pub size: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub etag: Option<String>,
}

impl ObjectCreatedEvent {
    /// Validates the raw payload and extracts the typed event. Required
    /// fields are checked by path first so errors name the offending field.
    pub fn from_value(event: Value) -> Result<Self, DecryptError> {
        for (pointer, path) in REQUIRED_FIELDS {
            match event.pointer(pointer) {
                Some(Value::String(text)) if text.is_empty() => {
                    return Err(DecryptError::MalformedEvent(format!(
                        "{path} cannot be empty"
                    )));
                }
                Some(Value::String(_)) => {}
                Some(_) => {
                    return Err(DecryptError::MalformedEvent(format!(
                        "{path} must be a string"
                    )));
                }
                None => {
                    return Err(DecryptError::MalformedEvent(format!(
                        "missing required field {path}"
                    )));
                }
            }
        }

        serde_json::from_value(event)
            .map_err(|error| DecryptError::MalformedEvent(error.to_string()))
    }

    pub fn bucket(&self) -> &str {
        &self.detail.bucket.name
    }

    pub fn key(&self) -> &str {
        &self.detail.object.key
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Outcome of one invocation before it is rendered for the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationOutcome {
    Success { derived_key: String },
    Failure { message: String },
}

impl InvocationOutcome {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Success { .. } => SUCCESS_STATUS_CODE,
            Self::Failure { .. } => FAILURE_STATUS_CODE,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Success { derived_key } => format!("Decrypted file saved at {derived_key}"),
            Self::Failure { message } => message.clone(),
        }
    }

    /// The body carries the message as a JSON string literal.
    pub fn into_response(self) -> InvocationResponse {
        InvocationResponse {
            status_code: self.status_code(),
            body: Value::String(self.message()).to_string(),
        }
    }
}

impl From<Result<String, DecryptError>> for InvocationOutcome {
    fn from(result: Result<String, DecryptError>) -> Self {
        match result {
            Ok(derived_key) => Self::Success { derived_key },
            Err(error) => Self::Failure {
                message: error.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}
