mod callable;
pub mod catalog;
pub mod chat;

pub use callable::*;
