use clap::{Parser, Subcommand};
use portfolio_chat::console::commands;
use portfolio_chat::telemetry::{get_subscriber, init_subscriber};

#[derive(Parser, Debug)]
#[command(name = "console", about = "Portfolio assistant from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Interactive chat on a persisted session
    Chat {
        #[arg(long, default_value = "console")]
        session: String,
    },
    /// Answer one message from the local catalog
    Ask {
        #[arg(long)]
        message: String,
        /// Show the matched rule, score and follow-ups
        #[arg(long)]
        explain: bool,
    },
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
}

#[derive(Debug, Subcommand)]
enum CatalogCommands {
    /// List the pattern rules in match order
    Rules,
    QuickActions,
    /// Dump the context bundle handed to the remote model
    Context {
        #[arg(long)]
        summary: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = get_subscriber("console".into(), "warn".into(), std::io::stderr);
    init_subscriber(subscriber);

    let cli = Cli::parse();

    get_command(cli)?.call()
}

fn get_command(cli: Cli) -> Result<Box<dyn commands::CallableTrait>, String> {
    match cli.command {
        Commands::Chat { session } => Ok(Box::new(commands::chat::InteractiveCommand::new(
            session,
        ))),
        Commands::Ask { message, explain } => {
            Ok(Box::new(commands::chat::AskCommand::new(message, explain)))
        }
        Commands::Catalog { command } => match command {
            CatalogCommands::Rules => Ok(Box::new(commands::catalog::RulesCommand::new())),
            CatalogCommands::QuickActions => {
                Ok(Box::new(commands::catalog::QuickActionsCommand::new()))
            }
            CatalogCommands::Context { summary } => {
                Ok(Box::new(commands::catalog::ContextCommand::new(summary)))
            }
        },
    }
}
