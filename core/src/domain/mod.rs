pub mod common;
pub mod conversation;
