use super::handlers::{
    get_chatbot::{__path_get_chatbot, get_chatbot},
    post_chatbot::{__path_post_chatbot, post_chatbot},
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_chatbot, post_chatbot))]
pub struct ChatbotApiDoc;

pub fn chatbot_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/chatbot", state.args.server.root_path),
        get(get_chatbot).post(post_chatbot),
    )
}
