pub mod get_chatbot;
pub mod post_chatbot;
