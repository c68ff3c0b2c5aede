mod ask;
mod interactive;

pub use ask::AskCommand;
pub use interactive::InteractiveCommand;
