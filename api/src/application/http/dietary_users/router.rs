use super::handlers::get_vegetarian_users::{__path_get_vegetarian_users, get_vegetarian_users};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_vegetarian_users))]
pub struct DietaryUsersApiDoc;

pub fn dietary_users_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/vegetarian_users", state.args.server.root_path),
        get(get_vegetarian_users),
    )
}
