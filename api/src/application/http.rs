pub mod chatbot;
pub mod dietary_users;
pub mod server;
