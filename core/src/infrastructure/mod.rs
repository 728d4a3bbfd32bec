pub mod conversation;
pub mod db;
pub mod llm;
