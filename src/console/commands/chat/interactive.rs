use crate::chatbot::{find_quick_action, ChatEvent, SendOutcome, QUICK_ACTIONS};
use crate::configuration::get_configuration;
use crate::errors::ChatError;
use crate::services::SessionRegistry;
use actix_web::rt;
use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "Commands: /quick <id>, /reset, /open, /close, /minimize, /state, /help, /quit";

/// Terminal chat against a persisted session.
pub struct InteractiveCommand {
    session: String,
}

impl InteractiveCommand {
    pub fn new(session: String) -> Self {
        Self { session }
    }
}

impl crate::console::commands::CallableTrait for InteractiveCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        rt::System::new().block_on(async {
            self.run().await?;
            Ok(())
        })
    }
}

impl InteractiveCommand {
    async fn run(&self) -> anyhow::Result<()> {
        let settings = get_configuration().context("Failed to read configuration")?;
        let registry = SessionRegistry::from_settings(&settings).await?;
        let session = registry.get_or_create(&self.session).await?;
        session.open().await;

        let mut events = session.subscribe();
        tokio::spawn(async move {
            while let Ok(event) = events.recv().await {
                if let ChatEvent::TypingChanged { is_typing: true } = event {
                    println!("  ...");
                }
            }
        });

        let state = session.snapshot().await;
        if state.messages.is_empty() {
            println!("bot> {}", settings.chatbot.welcome_message);
            for action in QUICK_ACTIONS {
                println!("  /quick {:<16} {} {}", action.id, action.icon, action.label);
            }
        } else {
            for message in &state.messages {
                println!("{:?}> {}", message.role, message.content);
            }
        }
        println!("{}", HELP);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let input = line.trim();
            let text = match input.split_once(' ').unwrap_or((input, "")) {
                ("/quit", _) => break,
                ("/reset", _) => {
                    let welcome = session.reset().await;
                    println!("bot> {}", welcome.content);
                    continue;
                }
                ("/open", _) => {
                    session.open().await;
                    continue;
                }
                ("/close", _) => {
                    session.close().await;
                    continue;
                }
                ("/minimize", _) => {
                    let minimized = session.toggle_minimize().await;
                    println!("minimized: {}", minimized);
                    continue;
                }
                ("/state", _) => {
                    let state = session.snapshot().await;
                    println!(
                        "{} messages, open: {}, minimized: {}, unread: {}",
                        state.messages.len(),
                        state.is_open,
                        state.is_minimized,
                        session.has_unread().await
                    );
                    continue;
                }
                ("/quick", id) => match find_quick_action(id.trim()) {
                    Some(action) => {
                        println!("you> {}", action.prompt);
                        action.prompt
                    }
                    None => {
                        println!("Unknown quick action '{}'", id.trim());
                        continue;
                    }
                },
                ("/help", _) => {
                    println!("{}", HELP);
                    continue;
                }
                _ => input,
            };

            match session.send_message(text).await {
                Ok(SendOutcome::Replied(reply)) => println!("bot> {}", reply.content),
                Ok(SendOutcome::Cancelled) => println!("(reply dropped)"),
                Err(ChatError::Validation(reason)) => println!("! {}", reason),
                Err(err) => return Err(err.into()),
            }
        }

        session.close().await;
        Ok(())
    }
}
