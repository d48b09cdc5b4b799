//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{Error, Username};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("Missing {field}")).with_details(json!({
        "field": field,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

/// Require a username field, then fold it through normalisation.
///
/// The game client always sends a username; its absence marks a malformed
/// request rather than an anonymous caller.
pub(crate) fn require_username(raw: Option<&str>) -> Result<Username, Error> {
    match raw {
        Some(value) if !value.trim().is_empty() => Ok(Username::normalise(value)),
        _ => Err(missing_field_error(FieldName::new("username"))),
    }
}

/// Require a non-empty string field.
pub(crate) fn require_field(raw: Option<&str>, field: FieldName) -> Result<String, Error> {
    match raw {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_owned()),
        _ => Err(missing_field_error(field)),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn require_username_rejects_absent_or_blank(#[case] raw: Option<&str>) {
        let err = require_username(raw).expect_err("reject");
        assert_eq!(err.message, "Missing username");
    }

    #[rstest]
    fn require_username_normalises_present_values() {
        let username = require_username(Some("  Ann  ")).expect("accept");
        assert_eq!(username.as_str(), "Ann");
    }

    #[rstest]
    fn require_field_rejects_blank_values() {
        let err = require_field(Some(" "), FieldName::new("item_key")).expect_err("reject");
        assert_eq!(err.message, "Missing item_key");
    }

    #[rstest]
    fn missing_field_error_carries_details() {
        let err = missing_field_error(FieldName::new("coins"));
        let details = err.details.expect("details present");
        assert_eq!(details["field"], "coins");
        assert_eq!(details["code"], "missing_field");
    }
}
