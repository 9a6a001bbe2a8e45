//! The `{meta, data}` wrapper used by every JSON response.

use axum::http::StatusCode;
use serde::Serialize;

/// Response metadata. `code` mirrors the HTTP status.
#[derive(Debug, Serialize)]
pub struct Meta {
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl Meta {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            error_type: None,
            error_message: None,
        }
    }
}

/// JSON body of every API response.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub meta: Meta,
    pub data: T,
}

impl<T> Envelope<T> {
    /// Wrap a successful payload with `meta.code = 200`.
    pub fn ok(data: T) -> Self {
        Self {
            meta: Meta::ok(),
            data,
        }
    }
}

impl Envelope<()> {
    /// Build an error envelope; `data` serializes as `null`.
    pub fn error(
        status: StatusCode,
        error_type: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            meta: Meta {
                code: status.as_u16(),
                error_type: Some(error_type),
                error_message: Some(message.into()),
            },
            data: (),
        }
    }
}
