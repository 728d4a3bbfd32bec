pub mod classifier;
pub mod entities;
pub mod extractor;
pub mod pipeline;
pub mod ports;
pub mod prompts;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
