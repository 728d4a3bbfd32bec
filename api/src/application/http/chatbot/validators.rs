use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ChatbotRequest {
    /// A missing field is treated as an empty message.
    #[serde(default)]
    #[validate(length(max = 5000, message = "user_input must be at most 5000 characters"))]
    pub user_input: String,
}
