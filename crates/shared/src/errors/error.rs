use crate::errors::outcome::ErrorOutcome;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub outcome: ErrorOutcome,
    pub message: String,
}
