//! Domain error payload returned by every failing operation.
//!
//! The type is transport agnostic; the HTTP adapter maps each [`ErrorCode`]
//! to a status code. The message serialises under the `error` key because the
//! game client reads `data.error` from failure bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::middleware::trace::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The caller does not present the required admin capability.
    Forbidden,
    /// The requested resource does not exist.
    NotFound,
    /// The account already owns the requested item.
    AlreadyOwned,
    /// The account does not own the item it tried to equip.
    NotOwned,
    /// The account balance does not cover the item price.
    InsufficientFunds,
    /// An unexpected error occurred on the server.
    InternalError,
}

/// API error response payload.
///
/// # Examples
/// ```
/// use backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Item not found");
/// assert_eq!(err.code, ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct Error {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    pub code: ErrorCode,
    /// Human-readable reason. Serialised as `error` for client compatibility.
    #[serde(rename = "error")]
    #[schema(example = "Missing username")]
    pub message: String,
    /// Correlation identifier for tracing this failure across systems.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    /// Supplementary structured details, e.g. the offending field name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl Error {
    /// Create a new error, capturing the current trace identifier if one is
    /// in scope.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Attach a trace identifier to the error.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("bad").with_details(json!({ "field": "coins" }));
    /// assert!(err.details.is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::Forbidden`].
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::AlreadyOwned`].
    pub fn already_owned(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AlreadyOwned, message)
    }

    /// Convenience constructor for [`ErrorCode::NotOwned`].
    pub fn not_owned(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotOwned, message)
    }

    /// Convenience constructor for [`ErrorCode::InsufficientFunds`].
    pub fn insufficient_funds(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InsufficientFunds, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(ErrorCode::InvalidRequest, "invalid_request")]
    #[case(ErrorCode::AlreadyOwned, "already_owned")]
    #[case(ErrorCode::InsufficientFunds, "insufficient_funds")]
    #[case(ErrorCode::NotOwned, "not_owned")]
    fn error_codes_serialise_snake_case(#[case] code: ErrorCode, #[case] expected: &str) {
        let value = serde_json::to_value(code).expect("serialise code");
        assert_eq!(value, json!(expected));
    }

    #[test]
    fn message_serialises_under_error_key() {
        let err = Error::invalid_request("Missing username");
        let value = serde_json::to_value(&err).expect("serialise error");
        assert_eq!(value["error"], json!("Missing username"));
        assert_eq!(value["code"], json!("invalid_request"));
    }

    #[test]
    fn absent_fields_are_omitted() {
        let err = Error::not_found("Item not found");
        let value = serde_json::to_value(&err).expect("serialise error");
        assert!(value.get("details").is_none());
        assert!(value.get("trace_id").is_none());
    }

    #[test]
    fn details_round_trip() {
        let err = Error::invalid_request("bad").with_details(json!({ "field": "item_key" }));
        let value = serde_json::to_value(&err).expect("serialise error");
        assert_eq!(value["details"]["field"], json!("item_key"));
    }
}
