use axum::extract::State;
use foodchat_core::domain::conversation::{ports::ConversationService, value_objects::ChatInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    chatbot::validators::ChatbotRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateForm},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ChatbotResponse {
    pub response: String,
}

#[utoipa::path(
    post,
    path = "/chatbot",
    tag = "chatbot",
    summary = "Send a chat message",
    description = "Relays the message to the LLM and records the favorite foods when the reply lists exactly three of them. Otherwise the response asks for the list again.",
    request_body(content = ChatbotRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, body = ChatbotResponse),
        (status = 400, description = "Message too long or malformed form"),
        (status = 502, description = "LLM unavailable")
    )
)]
pub async fn post_chatbot(
    State(state): State<AppState>,
    ValidateForm(payload): ValidateForm<ChatbotRequest>,
) -> Result<Response<ChatbotResponse>, ApiError> {
    let reply = state
        .service
        .chat(ChatInput {
            user_input: payload.user_input,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ChatbotResponse {
        response: reply.response,
    }))
}
