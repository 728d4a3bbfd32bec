use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// One food name as parsed out of a bot reply. Only surrounding whitespace is
/// trimmed; case is kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct FoodItem(String);

impl FoodItem {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FoodItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FoodItem {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Up to three foods, in the order they appeared in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    foods: Vec<FoodItem>,
}

impl ExtractionResult {
    pub const MAX_ITEMS: usize = 3;

    pub(crate) fn from_candidates(candidates: impl IntoIterator<Item = FoodItem>) -> Self {
        Self {
            foods: candidates.into_iter().take(Self::MAX_ITEMS).collect(),
        }
    }

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.foods.len() == Self::MAX_ITEMS
    }
}

/// Exactly three favorite foods. Serialized as a JSON array of three strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Vec<String>)]
pub struct FavoriteFoods([FoodItem; 3]);

impl FavoriteFoods {
    pub fn new(foods: [FoodItem; 3]) -> Self {
        Self(foods)
    }

    pub fn as_slice(&self) -> &[FoodItem] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodItem> {
        self.0.iter()
    }
}

impl TryFrom<ExtractionResult> for FavoriteFoods {
    type Error = ExtractionResult;

    fn try_from(result: ExtractionResult) -> Result<Self, Self::Error> {
        if !result.is_complete() {
            return Err(result);
        }

        let mut foods = result.foods.into_iter();
        match (foods.next(), foods.next(), foods.next()) {
            (Some(first), Some(second), Some(third)) => Ok(Self([first, second, third])),
            _ => Err(ExtractionResult::default()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DietVerdict {
    Vegetarian,
    NotVegetarian,
}

impl DietVerdict {
    pub fn is_vegetarian(&self) -> bool {
        matches!(self, DietVerdict::Vegetarian)
    }
}

/// Result of one pass of the chat pipeline. Only `Accepted` is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationOutcome {
    Accepted {
        user_input: String,
        bot_response: String,
        foods: FavoriteFoods,
        verdict: DietVerdict,
    },
    Rejected {
        reason_message: String,
    },
}

impl ConversationOutcome {
    /// Text shown back to the user for this outcome.
    pub fn response_text(&self) -> &str {
        match self {
            ConversationOutcome::Accepted { bot_response, .. } => bot_response,
            ConversationOutcome::Rejected { reason_message } => reason_message,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, ConversationOutcome::Accepted { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Conversation {
    pub id: Uuid,
    pub user_input: String,
    pub bot_response: String,
    pub favorite_foods: Option<FavoriteFoods>,
    pub is_vegetarian: bool,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    pub fn new(
        user_input: String,
        bot_response: String,
        favorite_foods: Option<FavoriteFoods>,
        is_vegetarian: bool,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_input,
            bot_response,
            favorite_foods,
            is_vegetarian,
            created_at: now,
        }
    }

    /// Builds the record for an accepted outcome; `None` for a rejection.
    pub fn from_outcome(outcome: ConversationOutcome) -> Option<Self> {
        match outcome {
            ConversationOutcome::Accepted {
                user_input,
                bot_response,
                foods,
                verdict,
            } => Some(Self::new(
                user_input,
                bot_response,
                Some(foods),
                verdict.is_vegetarian(),
            )),
            ConversationOutcome::Rejected { .. } => None,
        }
    }
}

/// Public view of a conversation: the exchanged texts only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConversationSummary {
    pub user_input: String,
    pub bot_response: String,
}

impl From<&Conversation> for ConversationSummary {
    fn from(conversation: &Conversation) -> Self {
        Self {
            user_input: conversation.user_input.clone(),
            bot_response: conversation.bot_response.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn foods(names: [&str; 3]) -> FavoriteFoods {
        FavoriteFoods::new(names.map(FoodItem::new))
    }

    #[test]
    fn test_food_item_trims_but_keeps_case() {
        let item = FoodItem::new("  Pad Thai \t");
        assert_eq!(item.as_str(), "Pad Thai");
    }

    #[test]
    fn test_favorite_foods_serializes_as_array() {
        let value = serde_json::to_value(foods(["tofu", "rice", "beans"])).unwrap();
        assert_eq!(value, serde_json::json!(["tofu", "rice", "beans"]));
    }

    #[test]
    fn test_favorite_foods_rejects_wrong_arity() {
        let two: Result<FavoriteFoods, _> = serde_json::from_value(serde_json::json!(["a", "b"]));
        assert!(two.is_err());

        let four: Result<FavoriteFoods, _> =
            serde_json::from_value(serde_json::json!(["a", "b", "c", "d"]));
        assert!(four.is_err());
    }

    #[test]
    fn test_favorite_foods_from_incomplete_extraction() {
        let partial = ExtractionResult::from_candidates(vec![FoodItem::new("pizza")]);
        let rejected = FavoriteFoods::try_from(partial.clone()).unwrap_err();
        assert_eq!(rejected, partial);
    }

    #[test]
    fn test_conversation_from_rejected_outcome() {
        let outcome = ConversationOutcome::Rejected {
            reason_message: "try again".to_string(),
        };
        assert_eq!(outcome.response_text(), "try again");
        assert!(Conversation::from_outcome(outcome).is_none());
    }

    #[test]
    fn test_conversation_from_accepted_outcome() {
        let outcome = ConversationOutcome::Accepted {
            user_input: "1. a 2. b 3. c".to_string(),
            bot_response: "1. tofu 2. rice 3. beans".to_string(),
            foods: foods(["tofu", "rice", "beans"]),
            verdict: DietVerdict::Vegetarian,
        };

        let conversation = Conversation::from_outcome(outcome).unwrap();
        assert_eq!(conversation.id.get_version_num(), 7);
        assert!(conversation.is_vegetarian);
        assert_eq!(
            conversation.favorite_foods,
            Some(foods(["tofu", "rice", "beans"]))
        );

        let summary = ConversationSummary::from(&conversation);
        assert_eq!(summary.bot_response, "1. tofu 2. rice 3. beans");
    }
}
