pub mod http;
pub mod simulate;
