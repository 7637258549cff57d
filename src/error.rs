//! Error taxonomy shared by validation, resolution and composition.
//!
//! Every failure that can reach a caller is an [`IconError`]. Each variant
//! maps to exactly one [`ErrorCode`], and each code maps to exactly one HTTP
//! status, so the wire contract stays stable no matter where the failure
//! originated.

use http::StatusCode;
use serde::Serialize;
use serde_json::{Value, json};

// ============================================================================
// ErrorCode
// ============================================================================

/// Stable, externally visible error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    MissingParameter,
    InvalidParameter,
    InvalidIconId,
    TooManyIcons,
    RequestTooLarge,
    IconNotFound,
    SvgGenerationFailed,
    InternalError,
    RateLimited,
}

impl ErrorCode {
    /// Returns the HTTP status this code is reported with.
    pub fn status(self) -> StatusCode {
        match self {
            Self::MissingParameter
            | Self::InvalidParameter
            | Self::InvalidIconId
            | Self::TooManyIcons
            | Self::RequestTooLarge => StatusCode::BAD_REQUEST,
            Self::IconNotFound => StatusCode::NOT_FOUND,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::SvgGenerationFailed | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the wire spelling of the code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingParameter => "MISSING_PARAMETER",
            Self::InvalidParameter => "INVALID_PARAMETER",
            Self::InvalidIconId => "INVALID_ICON_ID",
            Self::TooManyIcons => "TOO_MANY_ICONS",
            Self::RequestTooLarge => "REQUEST_TOO_LARGE",
            Self::IconNotFound => "ICON_NOT_FOUND",
            Self::SvgGenerationFailed => "SVG_GENERATION_FAILED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::RateLimited => "RATE_LIMITED",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Violation
// ============================================================================

/// A single failed constraint on one request parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct Violation {
    /// Parameter name as it appears in the query string (`i`, `size`, ...).
    pub field: String,

    /// Classification of this violation.
    pub code: ErrorCode,

    /// Human-readable description.
    pub message: String,

    /// The offending value, when one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// The constraint that was not met, e.g. `"16..=256"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
}

impl Violation {
    pub fn new(field: impl Into<String>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
            value: None,
            constraint: None,
        }
    }

    /// Attaches the offending value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Attaches the violated constraint.
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = Some(constraint.into());
        self
    }
}

// ============================================================================
// IconError
// ============================================================================

/// Errors produced while serving an icon or grid request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IconError {
    /// One or more request parameters failed validation. Never empty.
    #[error("{}", validation_message(.0))]
    Validation(Vec<Violation>),

    /// Strict resolution was requested and the identifier is unknown.
    #[error("Icon '{0}' not found")]
    IconNotFound(String),

    /// Composition or rasterisation failed.
    #[error("Failed to generate SVG: {0}")]
    SvgGeneration(String),

    /// The caller exceeded a request quota.
    #[error("Too many requests")]
    RateLimited,

    /// Any other unexpected failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

fn validation_message(violations: &[Violation]) -> String {
    match violations {
        [single] => single.message.clone(),
        _ => "Invalid request parameters".to_string(),
    }
}

impl IconError {
    /// Creates a validation error holding a single violation.
    pub fn violation(violation: Violation) -> Self {
        Self::Validation(vec![violation])
    }

    /// Returns the stable code for this error.
    ///
    /// A validation error reports the code of its first violation.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(violations) => violations
                .first()
                .map(|v| v.code)
                .unwrap_or(ErrorCode::InvalidParameter),
            Self::IconNotFound(_) => ErrorCode::IconNotFound,
            Self::SvgGeneration(_) => ErrorCode::SvgGenerationFailed,
            Self::RateLimited => ErrorCode::RateLimited,
            Self::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        self.code().status()
    }

    /// Returns the structured details sent alongside the message, if any.
    pub fn details(&self) -> Option<Value> {
        match self {
            Self::Validation(violations) => Some(json!({ "violations": violations })),
            Self::IconNotFound(id) => Some(json!({ "iconId": id })),
            Self::SvgGeneration(reason) | Self::Internal(reason) => {
                Some(json!({ "reason": reason }))
            }
            Self::RateLimited => None,
        }
    }

    /// Builds the JSON wire representation.
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorBody {
                code: self.code(),
                message: self.to_string(),
                details: self.details(),
            },
        }
    }

    /// Logs the error with the entry point it surfaced from.
    pub fn log(&self, context: &str) {
        if self.status().is_server_error() {
            log::error!("[{}] {} [{}]: {:?}", context, self, self.code(), self.details());
        } else {
            log::warn!("[{}] {} [{}]", context, self, self.code());
        }
    }
}

// ============================================================================
// Wire Format
// ============================================================================

/// Top-level JSON error document: `{ "error": { ... } }`.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ErrorResponse {
    /// Serializes the response to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// ============================================================================
// Tests
// ============================================================================
