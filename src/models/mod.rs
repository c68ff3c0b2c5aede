mod category;
mod chat;
mod message;
mod portfolio;

pub use category::*;
pub use chat::*;
pub use message::*;
pub use portfolio::*;
