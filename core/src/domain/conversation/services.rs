use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use tracing::{debug, info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    conversation::{
        entities::{Conversation, FoodItem},
        pipeline::process,
        ports::{ConversationRepository, ConversationService, LLMClient},
        prompts::{
            DIET_LABEL_SYSTEM_PROMPT, FOOD_ENTHUSIAST_SYSTEM_PROMPT, FOOD_POOL,
            SIMULATION_QUESTION, chatbot_prompt, diet_label_prompt, food_enthusiast_prompt,
        },
        value_objects::{
            ChatInput, ChatMessage, ChatReply, DietLabel, DietaryUsers, SimulationEntry,
            SimulationInput, SimulationReport,
        },
    },
};

/// Shuffles the pool and keeps the first three foods.
pub fn pick_suggestions<R: Rng + ?Sized>(rng: &mut R) -> [&'static str; 3] {
    let mut pool = FOOD_POOL;
    pool.shuffle(rng);
    [pool[0], pool[1], pool[2]]
}

impl<CR, LLM> ConversationService for Service<CR, LLM>
where
    CR: ConversationRepository,
    LLM: LLMClient,
{
    #[instrument(skip(self, input))]
    async fn chat(&self, input: ChatInput) -> Result<ChatReply, CoreError> {
        let user_input = input.user_input.trim().to_string();

        // The model is asked on every turn, even when the input will be rejected.
        let bot_response = self
            .llm_client
            .complete(
                vec![ChatMessage::user(chatbot_prompt(&user_input))],
                self.settings.chat_max_tokens,
            )
            .await?;

        let outcome = process(&user_input, bot_response.trim());
        let response = outcome.response_text().to_string();

        let conversation = match Conversation::from_outcome(outcome) {
            Some(conversation) => {
                let created = self.conversation_repository.create(conversation).await?;
                info!(
                    conversation_id = %created.id,
                    is_vegetarian = created.is_vegetarian,
                    "Favorite foods recorded"
                );
                Some(created)
            }
            None => {
                debug!("Incomplete food list, asking the user again");
                None
            }
        };

        Ok(ChatReply {
            response,
            conversation,
        })
    }

    #[instrument(skip(self))]
    async fn get_dietary_users(&self) -> Result<DietaryUsers, CoreError> {
        let conversations = self.conversation_repository.fetch_all().await?;
        let mut users = DietaryUsers::default();

        for conversation in &conversations {
            let Some(foods) = &conversation.favorite_foods else {
                continue;
            };

            let reply = self
                .llm_client
                .complete(
                    vec![
                        ChatMessage::system(DIET_LABEL_SYSTEM_PROMPT),
                        ChatMessage::user(diet_label_prompt(foods.iter().map(FoodItem::as_str))),
                    ],
                    self.settings.diet_label_max_tokens,
                )
                .await?;

            let label = DietLabel::parse_reply(&reply);
            debug!(conversation_id = %conversation.id, ?label, "Diet label assigned");
            users.record(label, conversation);
        }

        Ok(users)
    }

    #[instrument(skip(self), fields(iterations = input.iterations))]
    async fn simulate_conversations(
        &self,
        input: SimulationInput,
    ) -> Result<SimulationReport, CoreError> {
        let removed = self.conversation_repository.delete_all().await?;
        info!(removed, "Cleared previous conversations");

        let mut rng = match input.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut report = SimulationReport::default();

        for iteration in 1..=input.iterations {
            let question = SIMULATION_QUESTION.to_string();
            let suggestions = pick_suggestions(&mut rng);

            let answer = self
                .llm_client
                .complete(
                    vec![
                        ChatMessage::system(FOOD_ENTHUSIAST_SYSTEM_PROMPT),
                        ChatMessage::user(food_enthusiast_prompt(&suggestions)),
                    ],
                    self.settings.enthusiast_max_tokens,
                )
                .await?
                .trim()
                .to_string();

            self.conversation_repository
                .create(Conversation::new(question.clone(), answer.clone(), None, false))
                .await?;

            info!(iteration, %question, %answer, "Simulated conversation");

            report.entries.push(SimulationEntry {
                iteration,
                question,
                answer,
            });

            if iteration < input.iterations && !input.delay.is_zero() {
                tokio::time::sleep(input.delay).await;
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::VecDeque,
        sync::{Arc, Mutex},
        time::Duration,
    };

    use super::*;
    use crate::domain::conversation::{
        entities::FavoriteFoods, pipeline::REPROMPT_MESSAGE, value_objects::ChatSettings,
    };

    #[derive(Clone, Default)]
    struct FakeConversationRepository {
        conversations: Arc<Mutex<Vec<Conversation>>>,
    }

    impl FakeConversationRepository {
        fn stored(&self) -> Vec<Conversation> {
            self.conversations.lock().unwrap().clone()
        }
    }

    impl ConversationRepository for FakeConversationRepository {
        async fn create(&self, conversation: Conversation) -> Result<Conversation, CoreError> {
            self.conversations.lock().unwrap().push(conversation.clone());
            Ok(conversation)
        }

        async fn fetch_all(&self) -> Result<Vec<Conversation>, CoreError> {
            Ok(self.stored())
        }

        async fn delete_all(&self) -> Result<u64, CoreError> {
            let mut conversations = self.conversations.lock().unwrap();
            let removed = conversations.len() as u64;
            conversations.clear();
            Ok(removed)
        }
    }

    /// Replays scripted replies and records every request.
    #[derive(Clone, Default)]
    struct FakeLLMClient {
        replies: Arc<Mutex<VecDeque<Result<String, CoreError>>>>,
        requests: Arc<Mutex<Vec<(Vec<ChatMessage>, u32)>>>,
    }

    impl FakeLLMClient {
        fn with_replies<'a>(replies: impl IntoIterator<Item = &'a str>) -> Self {
            let client = Self::default();
            client
                .replies
                .lock()
                .unwrap()
                .extend(replies.into_iter().map(|reply| Ok(reply.to_string())));
            client
        }

        fn failing() -> Self {
            let client = Self::default();
            client
                .replies
                .lock()
                .unwrap()
                .push_back(Err(CoreError::ExternalServiceError("timeout".to_string())));
            client
        }

        fn requests(&self) -> Vec<(Vec<ChatMessage>, u32)> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl LLMClient for FakeLLMClient {
        async fn complete(
            &self,
            messages: Vec<ChatMessage>,
            max_tokens: u32,
        ) -> Result<String, CoreError> {
            self.requests.lock().unwrap().push((messages, max_tokens));
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok("I love 1. kiwi 2. corn 3. peas".to_string()))
        }
    }

    fn service(
        repository: &FakeConversationRepository,
        llm: &FakeLLMClient,
    ) -> Service<FakeConversationRepository, FakeLLMClient> {
        Service::new(repository.clone(), llm.clone(), ChatSettings::default())
    }

    fn chat_input(text: &str) -> ChatInput {
        ChatInput {
            user_input: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_chat_accepted_turn_is_persisted() {
        let repository = FakeConversationRepository::default();
        let llm = FakeLLMClient::with_replies(["  Thanks! 1. tofu 2. rice 3. beans \n"]);

        let reply = service(&repository, &llm)
            .chat(chat_input("  1. tofu 2. rice 3. beans "))
            .await
            .unwrap();

        assert_eq!(reply.response, "Thanks! 1. tofu 2. rice 3. beans");

        let stored = repository.stored();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].user_input, "1. tofu 2. rice 3. beans");
        assert!(stored[0].is_vegetarian);
        assert_eq!(
            stored[0].favorite_foods,
            Some(FavoriteFoods::new(["tofu", "rice", "beans"].map(FoodItem::new)))
        );
        assert_eq!(reply.conversation, Some(stored[0].clone()));

        let requests = llm.requests();
        assert_eq!(requests.len(), 1);
        let (messages, max_tokens) = &requests[0];
        assert_eq!(*max_tokens, 150);
        assert!(messages[0].content.ends_with("User said: 1. tofu 2. rice 3. beans"));
    }

    #[tokio::test]
    async fn test_chat_meat_list_is_not_vegetarian() {
        let repository = FakeConversationRepository::default();
        let llm = FakeLLMClient::with_replies(["1. bacon 2. eggs 3. toast"]);

        service(&repository, &llm)
            .chat(chat_input("1. bacon 2. eggs 3. toast"))
            .await
            .unwrap();

        assert!(!repository.stored()[0].is_vegetarian);
    }

    #[tokio::test]
    async fn test_chat_rejected_turn_asks_again() {
        let repository = FakeConversationRepository::default();
        let llm = FakeLLMClient::with_replies(["1. pizza 2. pasta 3. salad"]);

        let reply = service(&repository, &llm)
            .chat(chat_input("pizza, pasta, salad"))
            .await
            .unwrap();

        assert_eq!(reply.response, REPROMPT_MESSAGE);
        assert!(reply.conversation.is_none());
        assert!(repository.stored().is_empty());
        assert_eq!(llm.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_chat_propagates_llm_failure() {
        let repository = FakeConversationRepository::default();
        let llm = FakeLLMClient::failing();

        let result = service(&repository, &llm)
            .chat(chat_input("1. a 2. b 3. c"))
            .await;

        assert!(matches!(result, Err(CoreError::ExternalServiceError(_))));
        assert!(repository.stored().is_empty());
    }

    #[tokio::test]
    async fn test_get_dietary_users_labels_only_food_lists() {
        let repository = FakeConversationRepository::default();
        let vegan = Conversation::new(
            "1 2 3".to_string(),
            "1. tofu 2. rice 3. beans".to_string(),
            Some(FavoriteFoods::new(["tofu", "rice", "beans"].map(FoodItem::new))),
            true,
        );
        let omnivore = Conversation::new(
            "1 2 3".to_string(),
            "1. steak 2. fries 3. cola".to_string(),
            Some(FavoriteFoods::new(["steak", "fries", "cola"].map(FoodItem::new))),
            true,
        );
        let simulated = Conversation::new(
            SIMULATION_QUESTION.to_string(),
            "Pizza!".to_string(),
            None,
            false,
        );
        for conversation in [&vegan, &omnivore, &simulated] {
            repository.create(conversation.clone()).await.unwrap();
        }

        let llm = FakeLLMClient::with_replies(["Vegan", "Neither."]);
        let users = service(&repository, &llm).get_dietary_users().await.unwrap();

        assert_eq!(users.vegan_users.len(), 1);
        assert_eq!(users.vegetarian_users.len(), 1);
        assert_eq!(users.vegan_users[0].bot_response, vegan.bot_response);

        let requests = llm.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].0[1].content.contains("tofu, rice, beans"));
        assert_eq!(requests[0].1, 10);
    }

    #[tokio::test]
    async fn test_simulate_conversations_replaces_store() {
        let repository = FakeConversationRepository::default();
        repository
            .create(Conversation::new("old".to_string(), "old".to_string(), None, false))
            .await
            .unwrap();
        let llm = FakeLLMClient::with_replies(["  First answer ", "Second answer", "Third answer"]);

        let report = service(&repository, &llm)
            .simulate_conversations(SimulationInput {
                iterations: 3,
                delay: Duration::ZERO,
                seed: Some(7),
            })
            .await
            .unwrap();

        let stored = repository.stored();
        assert_eq!(stored.len(), 3);
        assert!(stored.iter().all(|c| c.user_input == SIMULATION_QUESTION));
        assert!(stored.iter().all(|c| c.favorite_foods.is_none()));
        assert_eq!(stored[0].bot_response, "First answer");

        let iterations: Vec<u32> = report.entries.iter().map(|e| e.iteration).collect();
        assert_eq!(iterations, vec![1, 2, 3]);
        assert_eq!(report.entries[2].answer, "Third answer");

        for (messages, max_tokens) in llm.requests() {
            assert_eq!(max_tokens, 200);
            assert_eq!(messages[0].content, FOOD_ENTHUSIAST_SYSTEM_PROMPT);
            let suggested = messages[1].content.strip_prefix("Suggest: ").unwrap();
            let foods: Vec<&str> = suggested.split(", ").collect();
            assert_eq!(foods.len(), 3);
            assert!(
                foods
                    .iter()
                    .all(|food| FOOD_POOL.iter().any(|pool_food| pool_food == food))
            );
        }
    }

    #[test]
    fn test_pick_suggestions_is_seeded() {
        let first = pick_suggestions(&mut StdRng::seed_from_u64(42));
        let second = pick_suggestions(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
        assert_ne!(first[0], first[1]);
        assert_ne!(first[1], first[2]);
    }
}
