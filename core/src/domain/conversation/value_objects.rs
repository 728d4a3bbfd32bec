use std::time::Duration;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::conversation::entities::{Conversation, ConversationSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Completion budgets for the three kinds of LLM calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatSettings {
    pub chat_max_tokens: u32,
    pub enthusiast_max_tokens: u32,
    pub diet_label_max_tokens: u32,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            chat_max_tokens: 150,
            enthusiast_max_tokens: 200,
            diet_label_max_tokens: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatInput {
    pub user_input: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub response: String,
    pub conversation: Option<Conversation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DietLabel {
    Vegan,
    Vegetarian,
    Neither,
}

impl DietLabel {
    /// Reads the first word of a free-text LLM answer. Anything that does not
    /// start with `vegan` or `vegetarian` is `Neither`.
    pub fn parse_reply(reply: &str) -> Self {
        let first_word = reply
            .split(|c: char| !c.is_alphabetic())
            .find(|word| !word.is_empty())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match first_word.as_str() {
            "vegan" => DietLabel::Vegan,
            "vegetarian" => DietLabel::Vegetarian,
            _ => DietLabel::Neither,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DietaryUsers {
    pub vegetarian_users: Vec<ConversationSummary>,
    pub vegan_users: Vec<ConversationSummary>,
}

impl DietaryUsers {
    /// Vegans are listed as vegetarians too.
    pub fn record(&mut self, label: DietLabel, conversation: &Conversation) {
        match label {
            DietLabel::Vegan => {
                self.vegan_users.push(ConversationSummary::from(conversation));
                self.vegetarian_users
                    .push(ConversationSummary::from(conversation));
            }
            DietLabel::Vegetarian => {
                self.vegetarian_users
                    .push(ConversationSummary::from(conversation));
            }
            DietLabel::Neither => {}
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulationInput {
    pub iterations: u32,
    pub delay: Duration,
    pub seed: Option<u64>,
}

impl Default for SimulationInput {
    fn default() -> Self {
        Self {
            iterations: 100,
            delay: Duration::from_secs(1),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationEntry {
    pub iteration: u32,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    pub entries: Vec<SimulationEntry>,
}

impl SimulationReport {
    /// Plain-text results file, one block per iteration.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|entry| {
                format!(
                    "Iteration: {}\nQuestion: {}\nAnswer: {}\n------\n",
                    entry.iteration, entry.question, entry.answer
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reply() {
        assert_eq!(DietLabel::parse_reply("Vegan."), DietLabel::Vegan);
        assert_eq!(DietLabel::parse_reply("vegetarian"), DietLabel::Vegetarian);
        assert_eq!(DietLabel::parse_reply("Neither"), DietLabel::Neither);
        assert_eq!(DietLabel::parse_reply("non-vegetarian"), DietLabel::Neither);
        assert_eq!(DietLabel::parse_reply("  **Vegetarian**"), DietLabel::Vegetarian);
        assert_eq!(DietLabel::parse_reply(""), DietLabel::Neither);
    }

    #[test]
    fn test_record_vegan_counts_as_vegetarian() {
        let conversation = Conversation::new("q".to_string(), "a".to_string(), None, false);
        let mut users = DietaryUsers::default();

        users.record(DietLabel::Vegan, &conversation);
        users.record(DietLabel::Neither, &conversation);

        assert_eq!(users.vegan_users.len(), 1);
        assert_eq!(users.vegetarian_users.len(), 1);
    }

    #[test]
    fn test_render_report() {
        let report = SimulationReport {
            entries: vec![
                SimulationEntry {
                    iteration: 1,
                    question: "Q?".to_string(),
                    answer: "A!".to_string(),
                },
                SimulationEntry {
                    iteration: 2,
                    question: "Q2?".to_string(),
                    answer: "A2!".to_string(),
                },
            ],
        };

        assert_eq!(
            report.render(),
            "Iteration: 1\nQuestion: Q?\nAnswer: A!\n------\nIteration: 2\nQuestion: Q2?\nAnswer: A2!\n------\n"
        );
    }
}
