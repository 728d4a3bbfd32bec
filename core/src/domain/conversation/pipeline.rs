use crate::domain::conversation::{
    classifier::classify,
    entities::{ConversationOutcome, FavoriteFoods},
    extractor::extract,
};

pub const REPROMPT_MESSAGE: &str = "Thanks for your input! Please provide exactly 3 favorite foods (e.g., '1. pizza, 2. pasta, 3. salad') for me to process.";

/// The user looks like they answered with a numbered list.
pub fn looks_like_food_list(user_input: &str) -> bool {
    !user_input.is_empty() && user_input.contains(['1', '2', '3'])
}

/// Turns one completed exchange into an outcome. Never fails: anything short
/// of exactly three extracted foods is a `Rejected` with the re-prompt.
pub fn process(user_input: &str, llm_reply: &str) -> ConversationOutcome {
    if !looks_like_food_list(user_input) {
        return rejected();
    }

    let Ok(foods) = FavoriteFoods::try_from(extract(llm_reply)) else {
        return rejected();
    };

    let verdict = classify(foods.as_slice());

    ConversationOutcome::Accepted {
        user_input: user_input.to_string(),
        bot_response: llm_reply.to_string(),
        foods,
        verdict,
    }
}

fn rejected() -> ConversationOutcome {
    ConversationOutcome::Rejected {
        reason_message: REPROMPT_MESSAGE.to_string(),
    }
}
