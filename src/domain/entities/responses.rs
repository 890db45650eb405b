use serde::{Deserialize, Serialize};

/// Body returned by insert endpoints.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

impl CreatedResponse {
    pub fn new(message: impl Into<String>, id: i64) -> Self {
        CreatedResponse { message: message.into(), id }
    }
}

/// Body returned by update and delete endpoints.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse { message: message.into() }
    }
}
