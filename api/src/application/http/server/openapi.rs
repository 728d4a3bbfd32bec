use crate::application::http::{
    chatbot::router::ChatbotApiDoc, dietary_users::router::DietaryUsersApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "FoodChat API",
    description = "Collects favorite foods through an LLM-backed chat"
))]
pub struct ApiDoc;

impl ApiDoc {
    /// Root document with every feature's paths merged in.
    pub fn merged() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(ChatbotApiDoc::openapi());
        openapi.merge(DietaryUsersApiDoc::openapi());
        openapi
    }
}
