use axum::extract::State;
use foodchat_core::domain::conversation::{
    entities::ConversationSummary, ports::ConversationService, value_objects::DietaryUsers,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct VegetarianUsersResponse {
    pub vegetarian_users: Vec<ConversationSummary>,
    pub vegan_users: Vec<ConversationSummary>,
}

impl From<DietaryUsers> for VegetarianUsersResponse {
    fn from(users: DietaryUsers) -> Self {
        Self {
            vegetarian_users: users.vegetarian_users,
            vegan_users: users.vegan_users,
        }
    }
}

#[utoipa::path(
    get,
    path = "/vegetarian_users",
    tag = "diet",
    summary = "List vegetarian and vegan users",
    description = "Asks the LLM to label every recorded favorite foods list. Vegan users are listed among the vegetarians too.",
    responses(
        (status = 200, body = VegetarianUsersResponse),
        (status = 502, description = "LLM unavailable")
    )
)]
pub async fn get_vegetarian_users(
    State(state): State<AppState>,
) -> Result<Response<VegetarianUsersResponse>, ApiError> {
    let users = state
        .service
        .get_dietary_users()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(VegetarianUsersResponse::from(users)))
}
