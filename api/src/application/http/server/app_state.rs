use std::sync::Arc;

use foodchat_core::application::FoodChatService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FoodChatService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FoodChatService) -> Self {
        Self { args, service }
    }
}
