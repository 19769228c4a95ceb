use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Plain acknowledgement body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Acknowledgement carrying the id of a newly created row.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i32,
}

impl CreatedResponse {
    pub fn new(message: &str, id: i32) -> Self {
        Self {
            message: message.to_string(),
            id,
        }
    }
}

/// Acknowledgement for bulk deletes.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    pub message: String,
    pub deleted: u64,
}
