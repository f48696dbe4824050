use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic error response body.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Validation error response body carrying the offending field name.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDto {
    pub error: String,
    pub field: String,
}

/// Response body for delete operations.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct DeleteResultDto {
    pub success: bool,
}
