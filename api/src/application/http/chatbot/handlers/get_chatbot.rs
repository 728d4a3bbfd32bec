use foodchat_core::domain::conversation::prompts::WELCOME_MESSAGE;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct WelcomeResponse {
    pub initial_message: String,
}

#[utoipa::path(
    get,
    path = "/chatbot",
    tag = "chatbot",
    summary = "Get welcome message",
    description = "Returns the greeting that opens a favorite foods conversation.",
    responses(
        (status = 200, body = WelcomeResponse)
    )
)]
pub async fn get_chatbot() -> Response<WelcomeResponse> {
    Response::OK(WelcomeResponse {
        initial_message: WELCOME_MESSAGE.to_string(),
    })
}
