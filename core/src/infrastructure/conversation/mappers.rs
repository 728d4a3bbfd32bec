use sea_orm::ActiveValue::Set;

use crate::{
    domain::conversation::entities::{Conversation, FavoriteFoods},
    entity::conversations,
};

impl From<&conversations::Model> for Conversation {
    fn from(model: &conversations::Model) -> Self {
        // Anything other than a three-string array is treated as "no foods".
        let favorite_foods = model
            .favorite_foods
            .clone()
            .and_then(|value| serde_json::from_value::<FavoriteFoods>(value).ok());

        Self {
            id: model.id,
            user_input: model.user_input.clone(),
            bot_response: model.bot_response.clone(),
            favorite_foods,
            is_vegetarian: model.is_vegetarian,
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<conversations::Model> for Conversation {
    fn from(model: conversations::Model) -> Self {
        Self::from(&model)
    }
}

impl From<&Conversation> for conversations::ActiveModel {
    fn from(conversation: &Conversation) -> Self {
        Self {
            id: Set(conversation.id),
            user_input: Set(conversation.user_input.clone()),
            bot_response: Set(conversation.bot_response.clone()),
            favorite_foods: Set(conversation
                .favorite_foods
                .as_ref()
                .and_then(|foods| serde_json::to_value(foods).ok())),
            is_vegetarian: Set(conversation.is_vegetarian),
            created_at: Set(conversation.created_at.fixed_offset()),
        }
    }
}
