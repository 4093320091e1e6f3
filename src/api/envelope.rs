//! Uniform success envelope helpers.
//!
//! Every response carries `{ "status": "success"|"fail", "message"?, "data"? }`.
//! The fail side is produced by [`crate::error::AppError`].

use serde::Serialize;
use utoipa::ToSchema;

/// Success envelope carrying a data payload
#[derive(Serialize, ToSchema)]
pub struct DataEnvelope<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// Always the literal string "success"
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> DataEnvelope<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub fn new(data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: None,
            data,
        }
    }

    pub fn with_message(message: &str, data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: Some(message.to_string()),
            data,
        }
    }
}

/// Success envelope carrying only a message
#[derive(Serialize, ToSchema)]
pub struct MessageEnvelope {
    /// Always the literal string "success"
    pub status: String,
    pub message: String,
}

impl MessageEnvelope {
    pub fn new(message: &str) -> Self {
        Self {
            status: "success".to_string(),
            message: message.to_string(),
        }
    }
}
