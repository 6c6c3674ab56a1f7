use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Structured error envelope some endpoints return instead of a payload.
/// The API has no shared discriminant; the presence of `errorCode` is what
/// marks a body as this shape.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[allow(dead_code)]
    result: Option<String>,
    #[serde(rename = "errorCode")]
    error_code: Option<String>,
    #[serde(rename = "errorMessage")]
    error_message: Option<String>,
}

/// Read an HTTP response to completion and decode its JSON body into `T`,
/// normalizing both remote error shapes into [`Error::Api`].
pub(crate) fn decode_response<T>(response: reqwest::blocking::Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let body = response.bytes()?;
    decode_body(&body)
}

/// Decode a raw JSON body into `T`.
///
/// Bodies are classified in order, first match wins:
/// 1. an object with an `errorCode` key is the structured envelope; its
///    `errorMessage` becomes the error (a malformed envelope is itself a
///    decode error),
/// 2. an object with an `error` key is a generic error; the value must be a
///    string, anything else fails with the full body for diagnosis,
/// 3. anything else decodes directly into `T`.
pub(crate) fn decode_body<T>(body: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let value: Value = serde_json::from_slice(body)?;

    let is_envelope = value
        .as_object()
        .is_some_and(|object| object.contains_key("errorCode"));
    if is_envelope {
        let envelope: ErrorEnvelope = serde_json::from_value(value)?;
        return Err(Error::Api {
            message: envelope.error_message.unwrap_or_default(),
            code: envelope.error_code,
        });
    }

    if let Some(error) = value.as_object().and_then(|object| object.get("error")) {
        return match error.as_str() {
            Some(message) => Err(Error::Api {
                message: message.to_string(),
                code: None,
            }),
            None => Err(Error::UnknownErrorResponse {
                body: value.to_string(),
            }),
        };
    }

    serde_json::from_value(value).map_err(Error::from)
}
